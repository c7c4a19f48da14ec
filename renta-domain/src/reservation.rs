use serde::{Deserialize, Serialize};

use crate::vehicle::VehicleId;

/// A single booking: who rented, which vehicle, for how many days.
///
/// `user_name` is a snapshot taken at booking time, not a live reference.
/// The vehicle is referenced by arena index so reports can observe its
/// current status through the agency's fleet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub user_name: String,
    pub vehicle_id: VehicleId,
    pub duration: u32,
}

impl Reservation {
    pub fn new(user_name: String, vehicle_id: VehicleId, duration: u32) -> Self {
        Self {
            user_name,
            vehicle_id,
            duration,
        }
    }
}
