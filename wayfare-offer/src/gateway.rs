use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};
use wayfare_core::{AirportQuery, SearchParams, SyntheticStrategy, UpstreamStrategy};
use wayfare_store::SkyScrapperClient;

use crate::generator::{MockAirportDirectory, MockFlightGenerator};

/// Who produced a response body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Upstream(String),
    Mock,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Upstream(name) => write!(f, "upstream:{}", name),
            Source::Mock => write!(f, "mock"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Resolved {
    pub body: Value,
    pub source: Source,
}

/// Ordered upstream strategies with a synthetic last resort.
///
/// Every request walks the strategies one at a time, in order; the first
/// success wins. When every one fails the terminal strategy answers, so
/// `resolve` never fails.
pub struct FallbackChain<Q: Send + Sync + 'static> {
    label: &'static str,
    strategies: Vec<Arc<dyn UpstreamStrategy<Q>>>,
    terminal: Arc<dyn SyntheticStrategy<Q>>,
}

impl<Q> FallbackChain<Q>
where
    Q: Send + Sync + 'static,
{
    pub fn new(
        label: &'static str,
        strategies: Vec<Arc<dyn UpstreamStrategy<Q>>>,
        terminal: Arc<dyn SyntheticStrategy<Q>>,
    ) -> Self {
        Self { label, strategies, terminal }
    }

    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub async fn resolve(&self, query: &Q) -> Resolved {
        for strategy in &self.strategies {
            let name = strategy.name();
            match strategy.fetch(query).await {
                Ok(body) => {
                    info!("Successfully got {} data from: {}", self.label, name);
                    return Resolved {
                        body,
                        source: Source::Upstream(name.to_string()),
                    };
                }
                Err(e) => warn!("Failed endpoint {}: {}", name, e),
            }
        }

        warn!("All {} endpoints failed, using mock data", self.label);
        Resolved {
            body: self.terminal.synthesize(query),
            source: Source::Mock,
        }
    }
}

/// Airport lookup and flight search, each behind its own fallback chain
pub struct FlightGateway {
    airports: FallbackChain<AirportQuery>,
    flights: FallbackChain<SearchParams>,
}

impl FlightGateway {
    pub fn new(airports: FallbackChain<AirportQuery>, flights: FallbackChain<SearchParams>) -> Self {
        Self { airports, flights }
    }

    /// Sky Scrapper endpoint variants backed by the mock generators
    pub fn sky_scrapper(client: Arc<SkyScrapperClient>) -> Self {
        Self::new(
            FallbackChain::new("airport", client.airport_endpoints(), Arc::new(MockAirportDirectory::new())),
            FallbackChain::new("flight", client.flight_endpoints(), Arc::new(MockFlightGenerator)),
        )
    }

    /// Mock data only, no network
    pub fn offline() -> Self {
        Self::new(
            FallbackChain::new("airport", Vec::new(), Arc::new(MockAirportDirectory::new())),
            FallbackChain::new("flight", Vec::new(), Arc::new(MockFlightGenerator)),
        )
    }

    pub async fn search_airports(&self, query: &AirportQuery) -> Resolved {
        self.airports.resolve(query).await
    }

    pub async fn search_flights(&self, params: &SearchParams) -> Resolved {
        self.flights.resolve(params).await
    }
}
