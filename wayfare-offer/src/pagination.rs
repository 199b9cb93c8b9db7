use std::ops::Range;

use wayfare_store::app_config::{PaginationConfig, PaginationMode};

/// Page cursor over a ranked list.
///
/// In `LoadMore` mode the visible part is the prefix `[0, page × size)` and only
/// ever grows until a reset. In `Pages` mode it is the window
/// `[(page - 1) × size, page × size)`. Either way the range is clipped to the
/// list length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    mode: PaginationMode,
    page_size: usize,
    page: usize,
}

impl Paginator {
    pub fn new(mode: PaginationMode, page_size: usize) -> Self {
        Self {
            mode,
            page_size: page_size.max(1),
            page: 1,
        }
    }

    pub fn from_config(config: &PaginationConfig) -> Self {
        Self::new(config.mode, config.page_size)
    }

    pub fn mode(&self) -> PaginationMode {
        self.mode
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Back to the first page. Called on every new result set or sort change.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Changing the page size starts over from the first page
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.reset();
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Jump to a page, clamped to `[1, total_pages]`
    pub fn go_to_page(&mut self, page: usize, total: usize) {
        self.page = page.clamp(1, self.total_pages(total));
    }

    /// Reveal the next page (or move to it, in `Pages` mode).
    /// Returns false and leaves the cursor alone once everything is shown.
    pub fn load_more(&mut self, total: usize) -> bool {
        if !self.has_more(total) {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn has_more(&self, total: usize) -> bool {
        match self.mode {
            PaginationMode::LoadMore => self.page.saturating_mul(self.page_size) < total,
            PaginationMode::Pages => self.page < self.total_pages(total),
        }
    }

    pub fn visible_range(&self, total: usize) -> Range<usize> {
        let end = self.page.saturating_mul(self.page_size).min(total);
        let start = match self.mode {
            PaginationMode::LoadMore => 0,
            PaginationMode::Pages => (self.page - 1).saturating_mul(self.page_size).min(end),
        };
        start..end
    }

    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.visible_range(items.len())]
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::from_config(&PaginationConfig::default())
    }
}
