use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::search::SearchParams;

/// A past search. Append-only: never updated or removed while the process lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHistoryRecord {
    pub id: u64,
    #[serde(flatten)]
    pub params: SearchParams,
    pub searched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserPreferences {
    pub user_id: String,
    pub preferences: serde_json::Value,
}

/// One record per user; updates replace the payload and bump `updated_at`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub id: u64,
    pub user_id: String,
    pub preferences: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}
