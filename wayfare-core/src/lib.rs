pub mod search;
pub mod flight;
pub mod iata;
pub mod history;
pub mod repository;
pub mod supplier;

pub use search::{AirportQuery, SearchParams, TravelClass, TripType};
pub use flight::{cheapest_price, offers_from_payload, FlightOffer, Leg, Place, Price, Segment};
pub use iata::Airport;
pub use history::{NewUserPreferences, SearchHistoryRecord, UserPreferences};
pub use repository::SearchStore;
pub use supplier::{SupplierError, SyntheticStrategy, UpstreamStrategy};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
