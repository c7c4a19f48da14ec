use serde::{Deserialize, Serialize};

/// Dense, 0-based vehicle id; doubles as the index into the agency's fleet arena.
pub type VehicleId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleStatus {
    Available,
    Occupied,
}

/// A vehicle in the rental fleet. Cars and vans share this one shape; the only
/// mutable field is `status`, flipped to `Occupied` by a successful reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub manufacturer: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub category: char,
    pub seats: u32,
    pub status: VehicleStatus,
}

impl Vehicle {
    pub fn new(
        id: VehicleId,
        manufacturer: String,
        model: String,
        year: i32,
        color: String,
        category: char,
        seats: u32,
    ) -> Self {
        Self {
            id,
            manufacturer,
            model,
            year,
            color,
            category,
            seats,
            status: VehicleStatus::Available,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == VehicleStatus::Available
    }

    /// `manufacturer:model:color`, the display form used by the per-year report.
    pub fn info(&self) -> String {
        format!("{}:{}:{}", self.manufacturer, self.model, self.color)
    }
}
