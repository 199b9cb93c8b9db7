use std::sync::Arc;

use wayfare_core::SearchStore;
use wayfare_offer::{FlightGateway, OfferRanker};
use wayfare_store::app_config::{Config, PaginationConfig};
use wayfare_store::MemoryStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SearchStore>,
    pub gateway: Arc<FlightGateway>,
    pub ranker: OfferRanker,
    pub pagination: PaginationConfig,
    pub history_limit: usize,
}

impl AppState {
    pub fn new(config: &Config, gateway: FlightGateway) -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
            gateway: Arc::new(gateway),
            ranker: OfferRanker::new(config.ranking.clone()),
            pagination: config.pagination.clone(),
            history_limit: config.history.limit,
        }
    }
}
