use async_trait::async_trait;
use crate::history::{NewUserPreferences, SearchHistoryRecord, UserPreferences};
use crate::search::SearchParams;
use crate::CoreResult;

/// Storage for search history and user preferences.
///
/// Handlers only see this trait, so a database-backed implementation can replace
/// the in-memory one without touching them.
#[async_trait]
pub trait SearchStore: Send + Sync {
    /// Append a search, assigning the next sequential id and the current timestamp
    async fn add_search_history(&self, params: &SearchParams) -> CoreResult<SearchHistoryRecord>;

    /// Most recent searches first, at most `limit` of them
    async fn get_search_history(&self, limit: usize) -> CoreResult<Vec<SearchHistoryRecord>>;

    async fn get_user_preferences(&self, user_id: &str) -> CoreResult<Option<UserPreferences>>;

    /// Create the user's record if absent, otherwise replace its payload
    async fn update_user_preferences(
        &self,
        preferences: NewUserPreferences,
    ) -> CoreResult<UserPreferences>;
}
