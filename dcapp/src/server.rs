use axum::{
    Router,
    routing::{
        get,
        post,
    },
};

use crate::client::api::{
    DOWNLOAD_ROUTE,
    HISTORY_ROUTE,
    SEARCH_ROUTE,
};

pub mod case;

/// The JSON endpoints and the download route; the `Platform` is expected
/// as an `Extension` layered on by the caller.
pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(SEARCH_ROUTE, post(case::case_search))
        .route(HISTORY_ROUTE, get(case::search_history))
        .route(DOWNLOAD_ROUTE, get(case::download))
}
