pub mod agency;
mod reports;

#[cfg(test)]
mod agency_tests;

pub use agency::Agency;
pub use renta_domain::{Reservation, User, UserId, Vehicle, VehicleId, VehicleStatus};

/// All domain-rule violations surface as this one error type. A reservation
/// request that simply matches no vehicle is not an error; it comes back as
/// `Ok(None)` from [`Agency::make_reservation`].
#[derive(Debug, thiserror::Error)]
pub enum AgencyError {
    #[error("category points must be strictly ascending")]
    NonAscendingPoints,

    #[error("unknown category: {0}")]
    UnknownCategory(char),

    #[error("user already registered: {name} from {city}")]
    DuplicateUser { name: String, city: String },

    #[error("unknown user id: {0}")]
    UnknownUser(UserId),
}

pub type AgencyResult<T> = Result<T, AgencyError>;
