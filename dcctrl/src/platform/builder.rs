use std::{
    error::Error,
    fs,
    sync::Arc,
    time::Duration,
};
use clap::{ArgAction, Parser, ValueEnum};
use dcdb_sqlite::{
    ConnectorOption,
    SqliteBackend,
};

use crate::source::{
    Court,
    CourtPortal,
};
use super::Platform;

/// Which court portal, if any, is consulted before the sample data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PortalChoice {
    None,
    #[default]
    DelhiHigh,
    District,
}

#[derive(Clone, Debug, Parser)]
pub struct Builder {
    #[clap(
        long,
        value_name = "DC_AUTO_CREATE_DB",
        env = "DC_AUTO_CREATE_DB",
        action = ArgAction::Set,
        default_value_t = true,
        default_missing_value = "true",
    )]
    pub dc_auto_create_db: bool,
    #[clap(
        long,
        value_name = "DC_COURT_PORTAL",
        env = "DC_COURT_PORTAL",
        value_enum,
        default_value_t = PortalChoice::DelhiHigh,
    )]
    pub dc_court_portal: PortalChoice,
    #[clap(long, value_name = "DC_DB_URL", env = "DC_DB_URL", default_value = "sqlite://court_data.db")]
    pub dc_db_url: String,
    #[clap(long, value_name = "DC_DISTRICT", env = "DC_DISTRICT", default_value = "faridabad")]
    pub dc_district: String,
    /// Seconds to wait on the court portal.
    #[clap(long, value_name = "DC_PORTAL_TIMEOUT", env = "DC_PORTAL_TIMEOUT", default_value_t = 30)]
    pub dc_portal_timeout: u64,
    #[clap(long, value_name = "DC_STATIC_ROOT", env = "DC_STATIC_ROOT", default_value = "static")]
    pub dc_static_root: String,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dc_auto_create_db: true,
            dc_court_portal: PortalChoice::DelhiHigh,
            dc_db_url: "sqlite://court_data.db".to_string(),
            dc_district: "faridabad".to_string(),
            dc_portal_timeout: 30,
            dc_static_root: "static".to_string(),
        }
    }
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dc_auto_create_db(mut self, value: bool) -> Self {
        self.dc_auto_create_db = value;
        self
    }

    pub fn dc_court_portal(mut self, value: PortalChoice) -> Self {
        self.dc_court_portal = value;
        self
    }

    pub fn dc_db_url(mut self, value: String) -> Self {
        self.dc_db_url = value;
        self
    }

    pub fn dc_district(mut self, value: String) -> Self {
        self.dc_district = value;
        self
    }

    pub fn dc_portal_timeout(mut self, value: u64) -> Self {
        self.dc_portal_timeout = value;
        self
    }

    pub fn dc_static_root(mut self, value: String) -> Self {
        self.dc_static_root = value;
        self
    }

    fn court(&self) -> Option<Court> {
        match self.dc_court_portal {
            PortalChoice::None => None,
            PortalChoice::DelhiHigh => Some(Court::DelhiHigh),
            PortalChoice::District => Some(Court::District(self.dc_district.clone())),
        }
    }

    pub async fn build(self) -> Result<Platform, Box<dyn Error + Send + Sync>> {
        let query_log = SqliteBackend::query_log(
            ConnectorOption::from(&self.dc_db_url)
                .auto_create_db(self.dc_auto_create_db)
        )
            .await?;
        fs::create_dir_all(&self.dc_static_root)?;
        let mut platform = Platform::new(
            Arc::new(query_log),
            fs::canonicalize(&self.dc_static_root)?,
        );
        if let Some(court) = self.court() {
            log::info!("consulting court portal {}", court.search_url());
            platform = platform.with_source(CourtPortal::new(
                court,
                Duration::from_secs(self.dc_portal_timeout),
            )?);
        }
        Ok(platform)
    }
}
