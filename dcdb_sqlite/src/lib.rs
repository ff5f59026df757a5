use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteBackend {
    pub(crate) pool: Arc<SqlitePool>,
    pub(crate) url: String,
}

mod connector;
mod impls;

pub use connector::ConnectorOption;

pub(crate) mod chrono {
    #[cfg(not(test))]
    pub use ::chrono::Utc;
    #[cfg(test)]
    pub use test_dc::chrono::Utc;
}
