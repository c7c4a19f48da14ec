use std::collections::BTreeMap;

use renta_domain::{Reservation, User, UserId, Vehicle, VehicleId, VehicleStatus};
use tracing::{debug, info};

use crate::{AgencyError, AgencyResult};

/// The rental agency: owns the category-points table, the vehicle and user
/// arenas, and the global reservation list, and enforces every business rule.
///
/// Vehicle and user ids are dense, 0-based, and double as indices into their
/// arenas, so reservations can refer to vehicles by index and reports observe
/// live vehicle status without holding references.
pub struct Agency {
    pub(crate) points: BTreeMap<char, f64>,
    pub(crate) vehicles: Vec<Vehicle>,
    pub(crate) users: Vec<User>,
    pub(crate) reservations: Vec<Reservation>,
}

impl Agency {
    pub fn new() -> Self {
        Self {
            points: BTreeMap::new(),
            vehicles: Vec::new(),
            users: Vec::new(),
            reservations: Vec::new(),
        }
    }

    /// Define loyalty points for the vehicle categories: 'A' gets `points[0]`,
    /// 'B' gets `points[1]`, and so on. Values must be strictly ascending;
    /// nothing is stored when they are not.
    ///
    /// Repeated calls overlay the mapping without clearing it, so a shorter
    /// second call leaves the higher categories from the first call defined.
    pub fn define_points(&mut self, points: &[f64]) -> AgencyResult<()> {
        if points.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(AgencyError::NonAscendingPoints);
        }
        for (index, &value) in points.iter().enumerate() {
            let category = (b'A' + index as u8) as char;
            self.points.insert(category, value);
        }
        Ok(())
    }

    /// Point value awarded for renting a vehicle of the given category.
    pub fn points_of_category(&self, category: char) -> AgencyResult<f64> {
        self.points
            .get(&category)
            .copied()
            .ok_or(AgencyError::UnknownCategory(category))
    }

    /// Register a car. Returns the vehicle id, assigned sequentially from 0
    /// across cars and vans alike.
    #[allow(clippy::too_many_arguments)]
    pub fn add_car(
        &mut self,
        manufacturer: &str,
        model: &str,
        year: i32,
        gear: &str,
        color: &str,
        category: char,
        seats: u32,
    ) -> AgencyResult<VehicleId> {
        self.add_vehicle(manufacturer, model, year, gear, color, category, seats)
    }

    /// Register a van. `limit` is part of the registration form but is not
    /// tracked anywhere; vans share the one vehicle shape with cars.
    #[allow(clippy::too_many_arguments)]
    pub fn add_van(
        &mut self,
        manufacturer: &str,
        model: &str,
        year: i32,
        gear: &str,
        color: &str,
        category: char,
        seats: u32,
        _limit: u32,
    ) -> AgencyResult<VehicleId> {
        self.add_vehicle(manufacturer, model, year, gear, color, category, seats)
    }

    // `gear` is likewise accepted but not part of the stored model.
    fn add_vehicle(
        &mut self,
        manufacturer: &str,
        model: &str,
        year: i32,
        _gear: &str,
        color: &str,
        category: char,
        seats: u32,
    ) -> AgencyResult<VehicleId> {
        if !self.points.contains_key(&category) {
            return Err(AgencyError::UnknownCategory(category));
        }

        let id = self.vehicles.len();
        self.vehicles.push(Vehicle::new(
            id,
            manufacturer.to_string(),
            model.to_string(),
            year,
            color.to_string(),
            category,
            seats,
        ));
        info!(vehicle_id = id, %category, seats, "vehicle registered");

        Ok(id)
    }

    /// Register a user. The same name may appear in several cities, but the
    /// (name, city) pair must be unique.
    pub fn register_user(&mut self, name: &str, city: &str) -> AgencyResult<UserId> {
        if self.users.iter().any(|u| u.name == name && u.city == city) {
            return Err(AgencyError::DuplicateUser {
                name: name.to_string(),
                city: city.to_string(),
            });
        }

        let id = self.users.len();
        self.users
            .push(User::new(id, name.to_string(), city.to_string()));
        info!(user_id = id, "user registered");

        Ok(id)
    }

    pub fn count_users(&self) -> usize {
        self.users.len()
    }

    /// Reserve an available vehicle of the given category with at least
    /// `seats` seats for the user.
    ///
    /// Among matching vehicles the most recently registered one wins (highest
    /// id). `Ok(None)` means nothing matched and no state changed; an unknown
    /// user id or category is an error, also without mutation.
    ///
    /// On a match the vehicle becomes permanently `Occupied` (there is no
    /// release operation), the user earns the category's point value, and the
    /// booking is recorded both in the agency's global reservation list and in
    /// the user's personal one.
    pub fn make_reservation(
        &mut self,
        user_id: UserId,
        category: char,
        seats: u32,
        duration: u32,
    ) -> AgencyResult<Option<VehicleId>> {
        if user_id >= self.users.len() {
            return Err(AgencyError::UnknownUser(user_id));
        }
        let points = self.points_of_category(category)?;

        let chosen = self
            .vehicles
            .iter()
            .filter(|v| v.is_available() && v.category == category && v.seats >= seats)
            .map(|v| v.id)
            .max();

        let Some(vehicle_id) = chosen else {
            debug!(user_id, %category, seats, "no vehicle matches the request");
            return Ok(None);
        };

        self.vehicles[vehicle_id].status = VehicleStatus::Occupied;

        let user = &mut self.users[user_id];
        user.add_points(points);
        let reservation = Reservation::new(user.name.clone(), vehicle_id, duration);
        user.add_reservation(reservation.clone());
        self.reservations.push(reservation);
        info!(user_id, vehicle_id, duration, "reservation made");

        Ok(Some(vehicle_id))
    }
}

impl Default for Agency {
    fn default() -> Self {
        Self::new()
    }
}
