use async_trait::async_trait;
use dccore::{
    case::SearchQuery,
    error::BackendError,
    history::{
        HistoryEntry,
        traits::QueryLogBackend,
    },
};
use sqlx::Row;

use crate::{
    SqliteBackend,
    chrono::Utc,
};

#[async_trait]
impl QueryLogBackend for SqliteBackend {
    async fn log_query(
        &self,
        query: &SearchQuery,
        raw_response: &str,
        parsed_data: &str,
    ) -> Result<i64, BackendError> {
        let ts = Utc::now().timestamp();
        let id = sqlx::query(
            r#"
INSERT INTO case_queries (
    case_type,
    case_number,
    filing_year,
    query_ts,
    raw_response,
    parsed_data
)
VALUES ( ?1, ?2, ?3, ?4, ?5, ?6 )
            "#,
        )
        .bind(query.case_type())
        .bind(query.case_number())
        .bind(query.filing_year().to_string())
        .bind(ts)
        .bind(raw_response)
        .bind(parsed_data)
        .execute(&*self.pool)
        .await?
        .last_insert_rowid();
        log::trace!("logged query {id} for case {}", query.case_number());
        Ok(id)
    }

    async fn recent_queries(
        &self,
        limit: i64,
    ) -> Result<Vec<HistoryEntry>, BackendError> {
        let recs = sqlx::query(
            r#"
SELECT case_type, case_number, filing_year, query_ts
FROM case_queries
ORDER BY query_ts DESC, id DESC
LIMIT ?1
            "#,
        )
        .bind(limit)
        .try_map(|rec: sqlx::sqlite::SqliteRow| Ok(HistoryEntry {
            case_type: rec.try_get("case_type")?,
            case_number: rec.try_get("case_number")?,
            filing_year: rec.try_get("filing_year")?,
            timestamp: rec.try_get("query_ts")?,
        }))
        .fetch_all(&*self.pool)
        .await?;
        Ok(recs)
    }
}
