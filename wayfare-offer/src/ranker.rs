use serde::{Deserialize, Serialize};
use wayfare_core::FlightOffer;
use wayfare_store::app_config::RankingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Weighted blend of price and total duration
    #[default]
    Best,
    Cheapest,
    Quickest,
}

/// Orders a result list for display.
///
/// Ranking is a pure function of the offers and the sort mode: the input is
/// never touched and equal keys keep their upstream order.
#[derive(Debug, Clone)]
pub struct OfferRanker {
    config: RankingConfig,
}

impl OfferRanker {
    pub fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    /// Rank offers for the given sort mode
    pub fn rank(&self, offers: &[FlightOffer], mode: SortMode) -> Vec<FlightOffer> {
        let mut ranked = offers.to_vec();
        // `sort_by` is stable, which is what keeps ties in upstream order
        match mode {
            SortMode::Cheapest => ranked.sort_by(|a, b| a.price.raw.total_cmp(&b.price.raw)),
            SortMode::Quickest => ranked.sort_by_key(|o| o.total_duration_minutes()),
            SortMode::Best => ranked.sort_by(|a, b| self.best_score(a).total_cmp(&self.best_score(b))),
        }
        ranked
    }

    /// Lower is better
    pub fn best_score(&self, offer: &FlightOffer) -> f64 {
        offer.price.raw / self.config.price_divisor
            + offer.total_duration_minutes() as f64 * self.config.duration_weight
    }
}

impl Default for OfferRanker {
    fn default() -> Self {
        Self::new(RankingConfig::default())
    }
}
