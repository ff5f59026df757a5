use dccore::{
    case::traits::CaseSource,
    history::traits::QueryLogBackend,
};
use std::{
    path::PathBuf,
    sync::Arc,
};

use crate::source::SampleSource;

/// The server side of the case search: where cases are looked up, where
/// queries are logged and where order documents are served from.
#[derive(Clone)]
pub struct Platform {
    pub query_log: Arc<dyn QueryLogBackend>,
    sources: Vec<Arc<dyn CaseSource>>,
    fallback: SampleSource,
    static_root: PathBuf,
}

mod builder;
mod impls;

pub use builder::{
    Builder,
    PortalChoice,
};
