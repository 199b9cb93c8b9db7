use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use wayfare_core::{
    CoreResult, NewUserPreferences, SearchHistoryRecord, SearchParams, SearchStore, UserPreferences,
};

struct Tables {
    search_history: BTreeMap<u64, SearchHistoryRecord>,
    user_preferences: HashMap<String, UserPreferences>,
    next_search_id: u64,
    next_prefs_id: u64,
}

/// Process-lifetime store. Both tables and both id counters sit behind one lock,
/// so concurrent handlers on the multi-threaded runtime see consistent ids.
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables {
                search_history: BTreeMap::new(),
                user_preferences: HashMap::new(),
                next_search_id: 1,
                next_prefs_id: 1,
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchStore for MemoryStore {
    async fn add_search_history(&self, params: &SearchParams) -> CoreResult<SearchHistoryRecord> {
        let mut tables = self.tables.write().await;
        let id = tables.next_search_id;
        tables.next_search_id += 1;

        let record = SearchHistoryRecord {
            id,
            params: params.clone(),
            searched_at: Utc::now(),
        };
        tables.search_history.insert(id, record.clone());
        debug!("Recorded search {}: {} -> {}", id, params.origin, params.destination);

        Ok(record)
    }

    async fn get_search_history(&self, limit: usize) -> CoreResult<Vec<SearchHistoryRecord>> {
        let tables = self.tables.read().await;
        let mut records: Vec<SearchHistoryRecord> = tables.search_history.values().cloned().collect();
        // Timestamps can collide within a tick; the id keeps insertion order
        records.sort_by(|a, b| b.searched_at.cmp(&a.searched_at).then(b.id.cmp(&a.id)));
        records.truncate(limit);
        Ok(records)
    }

    async fn get_user_preferences(&self, user_id: &str) -> CoreResult<Option<UserPreferences>> {
        let tables = self.tables.read().await;
        Ok(tables.user_preferences.get(user_id).cloned())
    }

    async fn update_user_preferences(
        &self,
        preferences: NewUserPreferences,
    ) -> CoreResult<UserPreferences> {
        let mut tables = self.tables.write().await;

        if let Some(existing) = tables.user_preferences.get_mut(&preferences.user_id) {
            existing.preferences = preferences.preferences;
            existing.updated_at = Utc::now();
            return Ok(existing.clone());
        }

        let id = tables.next_prefs_id;
        tables.next_prefs_id += 1;
        let record = UserPreferences {
            id,
            user_id: preferences.user_id.clone(),
            preferences: preferences.preferences,
            updated_at: Utc::now(),
        };
        tables.user_preferences.insert(preferences.user_id, record.clone());

        Ok(record)
    }
}
