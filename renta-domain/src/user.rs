use serde::{Deserialize, Serialize};

use crate::reservation::Reservation;

/// Dense, 0-based user id; doubles as the index into the agency's user arena.
pub type UserId = usize;

/// A registered customer with their accumulated reservation history and
/// loyalty points. Both lists are append-only; one point entry is earned per
/// successful reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub city: String,
    pub reservations: Vec<Reservation>,
    pub points: Vec<f64>,
}

impl User {
    pub fn new(id: UserId, name: String, city: String) -> Self {
        Self {
            id,
            name,
            city,
            reservations: Vec::new(),
            points: Vec::new(),
        }
    }

    pub fn add_points(&mut self, points: f64) {
        self.points.push(points);
    }

    pub fn add_reservation(&mut self, reservation: Reservation) {
        self.reservations.push(reservation);
    }

    pub fn total_points(&self) -> f64 {
        self.points.iter().sum()
    }

    /// Arithmetic mean of this user's rental durations, 0.0 with no history.
    pub fn average_duration(&self) -> f64 {
        if self.reservations.is_empty() {
            return 0.0;
        }
        let total: u32 = self.reservations.iter().map(|r| r.duration).sum();
        total as f64 / self.reservations.len() as f64
    }
}
