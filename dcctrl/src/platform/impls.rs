use dccore::{
    case::{
        CaseRecord,
        SearchForm,
        SearchQuery,
        traits::CaseSource,
    },
    envelope::SearchResponse,
    history::{
        HistoryEntry,
        traits::QueryLogBackend,
    },
    validate::current_year,
};
use std::{
    path::{
        Path,
        PathBuf,
    },
    sync::Arc,
};

use crate::{
    error::{
        CtrlError,
        PlatformError,
    },
    platform::Platform,
    source::SampleSource,
};

impl Platform {
    pub fn new(
        query_log: Arc<dyn QueryLogBackend>,
        static_root: PathBuf,
    ) -> Self {
        Self {
            query_log,
            sources: Vec::new(),
            fallback: SampleSource,
            static_root,
        }
    }

    /// Add a source to consult, after the ones already added.
    pub fn with_source(mut self, source: impl CaseSource + 'static) -> Self {
        self.sources.push(Arc::new(source));
        self
    }

    pub fn static_root(&self) -> &Path {
        &self.static_root
    }

    /// Validate the form, look the case up and log the query.
    pub async fn search(&self, form: SearchForm) -> Result<CaseRecord, PlatformError> {
        let query = form.into_query(current_year())?;
        let record = self.lookup(&query).await;
        let raw_response = serde_json::to_string(&SearchResponse::found(record.clone()))?;
        let parsed_data = serde_json::to_string(&record)?;
        self.query_log
            .log_query(&query, &raw_response, &parsed_data)
            .await?;
        Ok(record)
    }

    /// The record from the first source that names a party, otherwise the
    /// sample record.
    pub async fn lookup(&self, query: &SearchQuery) -> CaseRecord {
        for source in self.sources.iter() {
            match source.fetch(query).await {
                Ok(Some(record)) if record.has_parties() => {
                    log::info!(
                        "case {}/{} resolved by source {}",
                        query.case_number(),
                        query.filing_year(),
                        source.name(),
                    );
                    return record;
                }
                Ok(_) => log::info!(
                    "source {} had no usable record for case {}",
                    source.name(),
                    query.case_number(),
                ),
                Err(e) => log::warn!(
                    "source {} failed for case {}: {e}",
                    source.name(),
                    query.case_number(),
                ),
            }
        }
        log::warn!("no source resolved case {}; using sample data", query.case_number());
        self.fallback.record()
    }

    pub async fn history(&self, limit: i64) -> Result<Vec<HistoryEntry>, PlatformError> {
        Ok(self.query_log.recent_queries(limit).await?)
    }

    /// Resolve a file directly under the static root; anything that could
    /// address a different directory, or could not be quoted in a
    /// `Content-Disposition` header, is treated as unknown.
    pub fn static_file(&self, name: &str) -> Result<PathBuf, CtrlError> {
        let unknown = || CtrlError::UnknownFile(name.to_string());
        if name.is_empty()
            || name.starts_with('.')
            || name.contains(['/', '\\', '"'])
            || name.chars().any(char::is_control)
        {
            return Err(unknown());
        }
        let path = self.static_root.join(name);
        if path.is_file() {
            Ok(path)
        } else {
            Err(unknown())
        }
    }
}

#[cfg(test)]
mod testing {
    use dccore::{
        case::SearchForm,
        error::{
            BackendError,
            SourceError,
        },
        history::HistoryEntry,
    };
    use mockall::predicate::eq;
    use std::{
        fs,
        sync::Arc,
    };
    use test_dc::{
        core::{
            MockQueryLog,
            MockSource,
        },
        fixture::portal_record,
    };

    use crate::{
        error::{
            CtrlError,
            PlatformError,
        },
        platform::Platform,
        source::SampleSource,
    };

    fn form() -> SearchForm {
        SearchForm::new("civil", "123/2024", "2024")
    }

    fn logging_query_log() -> MockQueryLog {
        let mut query_log = MockQueryLog::new();
        query_log.expect_query_log_insert()
            .times(1)
            .withf(|query, raw, parsed| {
                query.case_number() == "123/2024"
                    && raw.contains(r#""success":true"#)
                    && !parsed.contains("success")
            })
            .returning(|_, _, _| Ok(1));
        query_log
    }

    #[async_std::test]
    async fn falls_back_to_sample() -> anyhow::Result<()> {
        let platform = Platform::new(Arc::new(logging_query_log()), "static".into());
        let record = platform.search(form()).await?;
        assert_eq!(record, SampleSource.record());
        Ok(())
    }

    #[async_std::test]
    async fn first_usable_source_wins() -> anyhow::Result<()> {
        let mut failing = MockSource::new();
        failing.expect_source_fetch()
            .times(1)
            .returning(|_| Err(SourceError::Captcha));
        let mut empty = MockSource::new();
        empty.expect_source_fetch()
            .times(1)
            .returning(|_| Ok(Some(Default::default())));
        let mut portal = MockSource::new();
        portal.expect_source_fetch()
            .times(1)
            .returning(|_| Ok(Some(portal_record())));
        let mut unused = MockSource::new();
        unused.expect_source_fetch()
            .never();

        let platform = Platform::new(Arc::new(logging_query_log()), "static".into())
            .with_source(failing)
            .with_source(empty)
            .with_source(portal)
            .with_source(unused);
        let record = platform.search(form()).await?;
        assert_eq!(record, portal_record());
        Ok(())
    }

    #[async_std::test]
    async fn invalid_form_is_not_looked_up() -> anyhow::Result<()> {
        let mut query_log = MockQueryLog::new();
        query_log.expect_query_log_insert()
            .never();
        let mut source = MockSource::new();
        source.expect_source_fetch()
            .never();
        let platform = Platform::new(Arc::new(query_log), "static".into())
            .with_source(source);
        let result = platform.search(SearchForm::new("civil", "12a", "2024")).await;
        match result {
            Err(PlatformError::Validation(validation)) => assert_eq!(
                validation.messages(),
                ["Case number may only contain digits and '/'"],
            ),
            other => panic!("unexpected result: {other:?}"),
        }
        Ok(())
    }

    #[async_std::test]
    async fn query_log_failure_fails_search() -> anyhow::Result<()> {
        let mut query_log = MockQueryLog::new();
        query_log.expect_query_log_insert()
            .times(1)
            .returning(|_, _, _| Err(BackendError::Unknown));
        let platform = Platform::new(Arc::new(query_log), "static".into());
        assert!(matches!(
            platform.search(form()).await,
            Err(PlatformError::BackendError(BackendError::Unknown)),
        ));
        Ok(())
    }

    #[async_std::test]
    async fn history() -> anyhow::Result<()> {
        let mut query_log = MockQueryLog::new();
        query_log.expect_query_log_recent()
            .times(1)
            .with(eq(10))
            .returning(|_| Ok(vec![HistoryEntry {
                case_type: "civil".to_string(),
                case_number: "1".to_string(),
                filing_year: "2024".to_string(),
                timestamp: 1234567890,
            }]));
        let platform = Platform::new(Arc::new(query_log), "static".into());
        let history = platform.history(10).await?;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].case_number, "1");
        Ok(())
    }

    #[test]
    fn static_files() -> anyhow::Result<()> {
        let root = tempfile::tempdir()?;
        fs::write(root.path().join("sample_order.pdf"), b"%PDF-1.4")?;
        fs::create_dir(root.path().join("nested"))?;
        fs::write(root.path().join("nested").join("inner.pdf"), b"%PDF-1.4")?;
        fs::write(root.path().join(".hidden"), b"")?;
        fs::write(root.path().join("quoted\"name.pdf"), b"%PDF-1.4")?;

        let platform = Platform::new(
            Arc::new(MockQueryLog::new()),
            root.path().to_path_buf(),
        );
        assert_eq!(
            platform.static_file("sample_order.pdf")?,
            root.path().join("sample_order.pdf"),
        );
        for name in [
            "",
            "missing.pdf",
            "nested",
            "nested/inner.pdf",
            "../sample_order.pdf",
            "..",
            ".hidden",
            "nested\\inner.pdf",
            "quoted\"name.pdf",
            "line\nbreak.pdf",
        ] {
            assert_eq!(
                platform.static_file(name),
                Err(CtrlError::UnknownFile(name.to_string())),
                "{name:?} should not resolve",
            );
        }
        Ok(())
    }
}
