use async_trait::async_trait;
use crate::{
    case::{
        CaseRecord,
        SearchQuery,
    },
    error::SourceError,
};

/// A place case details may be looked up from.
#[async_trait]
pub trait CaseSource: Send + Sync {
    /// A short name used in log output.
    fn name(&self) -> &str;
    /// Look up the case; `Ok(None)` denotes the source had nothing usable.
    async fn fetch(
        &self,
        query: &SearchQuery,
    ) -> Result<Option<CaseRecord>, SourceError>;
}
