use serde::{Deserialize, Serialize};

/// How many entries the search history lists by default.
pub const DEFAULT_HISTORY_LIMIT: i64 = 10;

/// A previously issued query, as recorded in the query log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub case_type: String,
    pub case_number: String,
    #[serde(deserialize_with = "crate::case::year_text")]
    pub filing_year: String,
    /// Unix timestamp of the query, in seconds.
    pub timestamp: i64,
}

pub mod traits;
