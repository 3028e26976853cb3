use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One stored mood, keyed in `AppData` by its ISO calendar-date string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodRecord {
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Everything the data file holds. ISO date keys keep the map chronological.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub moods: BTreeMap<String, MoodRecord>,
}

#[derive(Debug, Deserialize)]
pub struct LogMoodRequest {
    pub rating: u8,
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub days: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MoodEntryResponse {
    pub date: String,
    pub rating: u8,
    pub note: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub average_rating: Option<f64>,
    pub good_days_count: u64,
    pub period: String,
}

/// A history row with its display fields already computed, so the page
/// renders from this instead of re-deriving labels and emoji in script.
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryItem {
    pub date: String,
    pub label: String,
    pub emoji: String,
    pub rating: u8,
    pub note: Option<String>,
}
