use serde::Serialize;
use wayfare_core::{cheapest_price, FlightOffer};
use wayfare_store::app_config::PaginationMode;

use crate::pagination::Paginator;
use crate::ranker::{OfferRanker, SortMode};

/// Where a reader is within one result set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsSummary {
    pub page: usize,
    pub page_size: usize,
    pub mode: PaginationMode,
    pub shown: usize,
    pub total: usize,
    pub total_pages: usize,
    pub has_more: bool,
    pub sort: SortMode,
    pub cheapest_price: Option<f64>,
}

/// Ranked, paginated view over the offers of the latest search.
///
/// A new result set or a new sort mode always starts again from the first page.
pub struct ResultsSession {
    ranker: OfferRanker,
    paginator: Paginator,
    sort: SortMode,
    /// Upstream order, kept so re-sorting breaks ties the same way every time
    offers: Vec<FlightOffer>,
    ranked: Vec<FlightOffer>,
}

impl ResultsSession {
    pub fn new(ranker: OfferRanker, paginator: Paginator) -> Self {
        Self {
            ranker,
            paginator,
            sort: SortMode::default(),
            offers: Vec::new(),
            ranked: Vec::new(),
        }
    }

    pub fn new_search(&mut self, offers: Vec<FlightOffer>) {
        self.ranked = self.ranker.rank(&offers, self.sort);
        self.offers = offers;
        self.paginator.reset();
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
        self.ranked = self.ranker.rank(&self.offers, sort);
        self.paginator.reset();
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.paginator.set_page_size(page_size);
    }

    pub fn load_more(&mut self) -> bool {
        self.paginator.load_more(self.ranked.len())
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.paginator.go_to_page(page, self.ranked.len());
    }

    pub fn has_more(&self) -> bool {
        self.paginator.has_more(self.ranked.len())
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }

    /// Full ranked list
    pub fn ranked(&self) -> &[FlightOffer] {
        &self.ranked
    }

    pub fn visible(&self) -> &[FlightOffer] {
        self.paginator.visible(&self.ranked)
    }

    pub fn summary(&self) -> ResultsSummary {
        let total = self.ranked.len();
        ResultsSummary {
            page: self.paginator.page(),
            page_size: self.paginator.page_size(),
            mode: self.paginator.mode(),
            shown: self.visible().len(),
            total,
            total_pages: self.paginator.total_pages(total),
            has_more: self.has_more(),
            sort: self.sort,
            cheapest_price: cheapest_price(&self.ranked),
        }
    }
}
