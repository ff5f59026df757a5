use async_trait::async_trait;
use crate::{
    case::SearchQuery,
    error::BackendError,
    history::HistoryEntry,
};

#[async_trait]
pub trait QueryLogBackend: Send + Sync {
    /// Record a query with the raw and parsed forms of the response that
    /// was produced for it, returning the id of the new entry.
    async fn log_query(
        &self,
        query: &SearchQuery,
        raw_response: &str,
        parsed_data: &str,
    ) -> Result<i64, BackendError>;
    /// The most recent queries, newest first.
    async fn recent_queries(
        &self,
        limit: i64,
    ) -> Result<Vec<HistoryEntry>, BackendError>;
}
