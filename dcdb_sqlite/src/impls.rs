use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::sync::Arc;

use crate::{
    ConnectorOption,
    SqliteBackend,
};

impl SqliteBackend {
    pub async fn connect(opts: ConnectorOption) -> Result<SqliteBackend, sqlx::Error> {
        if opts.auto_create_db && !Sqlite::database_exists(&opts.url).await.unwrap_or(false) {
            log::warn!("sqlite database {} does not exist; creating...", &opts.url);
            Sqlite::create_database(&opts.url).await?
        }

        let pool = SqlitePool::connect(&opts.url).await?;
        Ok(SqliteBackend {
            pool: Arc::new(pool),
            url: opts.url,
        })
    }

    pub async fn migrate(self) -> Result<Self, sqlx::Error> {
        sqlx::migrate!("./migrations").run(&*self.pool).await?;
        Ok(self)
    }

    /// Connect to the database and bring its schema up to date.
    pub async fn query_log(opts: ConnectorOption) -> Result<Self, sqlx::Error> {
        Self::connect(opts).await?
            .migrate()
            .await
    }

    pub fn url(&self) -> &str {
        self.url.as_ref()
    }
}

mod query_log;
