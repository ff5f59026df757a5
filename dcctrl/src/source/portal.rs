use async_trait::async_trait;
use dccore::{
    case::{
        CaseRecord,
        SearchQuery,
        traits::CaseSource,
    },
    error::SourceError,
};
use reqwest::header::{
    HeaderMap,
    HeaderValue,
    ACCEPT,
    ACCEPT_LANGUAGE,
};
use std::time::Duration;

mod parse;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// The court portals the case status form can be submitted to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Court {
    DelhiHigh,
    /// An eCourts district portal, identified by the district name.
    District(String),
}

impl Court {
    pub fn base_url(&self) -> String {
        match self {
            Self::DelhiHigh => "https://delhihighcourt.nic.in/".to_string(),
            Self::District(district) => format!("https://districts.ecourts.gov.in/{district}/"),
        }
    }

    pub fn search_url(&self) -> String {
        format!("{}case_status", self.base_url())
    }

    fn name(&self) -> &'static str {
        match self {
            Self::DelhiHigh => "delhi_high",
            Self::District(_) => "district",
        }
    }
}

/// Submits the case status form of a court portal and extracts the case
/// details from the returned page.
pub struct CourtPortal {
    client: reqwest::Client,
    court: Court,
}

impl CourtPortal {
    pub fn new(court: Court, timeout: Duration) -> Result<Self, SourceError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"
        ));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Http(e.to_string()))?;
        Ok(Self { client, court })
    }

    pub fn court(&self) -> &Court {
        &self.court
    }
}

#[async_trait]
impl CaseSource for CourtPortal {
    fn name(&self) -> &str {
        self.court.name()
    }

    async fn fetch(
        &self,
        query: &SearchQuery,
    ) -> Result<Option<CaseRecord>, SourceError> {
        let filing_year = query.filing_year().to_string();
        let form = [
            ("case_type", query.case_type()),
            ("case_number", query.case_number()),
            ("filing_year", filing_year.as_str()),
            ("submit", "Search"),
        ];
        let url = self.court.search_url();
        log::trace!("submitting case status form to {url}");
        let response = self.client
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(|e| SourceError::Http(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }
        let body = response.text()
            .await
            .map_err(|e| SourceError::Http(e.to_string()))?;
        match parse::case_page(&body, &self.court.base_url()) {
            Ok(record) => Ok(record.has_parties().then_some(record)),
            Err(SourceError::Captcha) => {
                log::warn!("{} presented a CAPTCHA; manual intervention may be required", self.court.name());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn court_urls() {
        assert_eq!(
            Court::DelhiHigh.search_url(),
            "https://delhihighcourt.nic.in/case_status",
        );
        assert_eq!(
            Court::District("faridabad".to_string()).search_url(),
            "https://districts.ecourts.gov.in/faridabad/case_status",
        );
    }

    #[test]
    fn portal_name() -> anyhow::Result<()> {
        let portal = CourtPortal::new(
            Court::District("gurugram".to_string()),
            Duration::from_secs(5),
        )?;
        assert_eq!(portal.name(), "district");
        assert_eq!(portal.court(), &Court::District("gurugram".to_string()));
        Ok(())
    }
}
