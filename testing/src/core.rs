use async_trait::async_trait;
use mockall::mock;
use dccore::{
    case::{
        CaseRecord,
        SearchQuery,
        traits::CaseSource,
    },
    error::{
        BackendError,
        SourceError,
    },
    history::{
        HistoryEntry,
        traits::QueryLogBackend,
    },
};

mock! {
    pub QueryLog {
        pub async fn query_log_insert(
            &self,
            query: &SearchQuery,
            raw_response: &str,
            parsed_data: &str,
        ) -> Result<i64, BackendError>;
        pub async fn query_log_recent(
            &self,
            limit: i64,
        ) -> Result<Vec<HistoryEntry>, BackendError>;
    }
}

#[async_trait]
impl QueryLogBackend for MockQueryLog {
    async fn log_query(
        &self,
        query: &SearchQuery,
        raw_response: &str,
        parsed_data: &str,
    ) -> Result<i64, BackendError> {
        self.query_log_insert(query, raw_response, parsed_data).await
    }
    async fn recent_queries(
        &self,
        limit: i64,
    ) -> Result<Vec<HistoryEntry>, BackendError> {
        self.query_log_recent(limit).await
    }
}

mock! {
    pub Source {
        pub async fn source_fetch(
            &self,
            query: &SearchQuery,
        ) -> Result<Option<CaseRecord>, SourceError>;
    }
}

#[async_trait]
impl CaseSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }
    async fn fetch(
        &self,
        query: &SearchQuery,
    ) -> Result<Option<CaseRecord>, SourceError> {
        self.source_fetch(query).await
    }
}
