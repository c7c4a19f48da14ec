pub mod reservation;
pub mod user;
pub mod vehicle;

pub use reservation::Reservation;
pub use user::{User, UserId};
pub use vehicle::{Vehicle, VehicleId, VehicleStatus};
