pub mod ranker;
pub mod pagination;
pub mod session;
pub mod generator;
pub mod gateway;
pub mod autocomplete;

#[cfg(test)]
mod fixtures;

pub use ranker::{OfferRanker, SortMode};
pub use pagination::Paginator;
pub use session::{ResultsSession, ResultsSummary};
pub use generator::{MockAirportDirectory, MockFlightGenerator};
pub use gateway::{FallbackChain, FlightGateway, Resolved, Source};
pub use autocomplete::{AirportAutocomplete, AirportLookup, Debouncer};
