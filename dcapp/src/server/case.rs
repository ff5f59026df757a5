use axum::{
    Extension,
    Json,
    extract::{
        Path,
        rejection::JsonRejection,
    },
    response::{
        IntoResponse,
        Response,
    },
};
use dccore::{
    case::SearchForm,
    envelope::{
        ErrorResponse,
        HistoryResponse,
        SearchResponse,
        FILE_NOT_FOUND,
        HISTORY_FAILED,
        SEARCH_FAILED,
    },
    history::DEFAULT_HISTORY_LIMIT,
};
use dcctrl::{
    error::PlatformError,
    platform::Platform,
};
use http::{
    StatusCode,
    header,
};

use crate::error::AppError;

pub async fn case_search(
    platform: Extension<Platform>,
    payload: Result<Json<SearchForm>, JsonRejection>,
) -> (StatusCode, Json<SearchResponse>) {
    let Json(form) = match payload {
        Ok(payload) => payload,
        Err(e) => {
            log::info!("rejected case search payload: {e}");
            return (StatusCode::BAD_REQUEST, Json(SearchResponse::failed(e.body_text())));
        }
    };
    match platform.search(form).await {
        Ok(record) => (StatusCode::OK, Json(SearchResponse::found(record))),
        Err(PlatformError::Validation(validation)) => {
            log::info!("rejected invalid case search: {validation}");
            (StatusCode::BAD_REQUEST, Json(SearchResponse::failed(validation.to_string())))
        }
        Err(e) => {
            log::error!("case search failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(SearchResponse::failed(SEARCH_FAILED)))
        }
    }
}

pub async fn search_history(
    platform: Extension<Platform>,
) -> (StatusCode, Json<HistoryResponse>) {
    match platform.history(DEFAULT_HISTORY_LIMIT).await {
        Ok(history) => (StatusCode::OK, Json(HistoryResponse::found(history))),
        Err(e) => {
            log::error!("failed to read search history: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(HistoryResponse::failed(HISTORY_FAILED)))
        }
    }
}

pub async fn download(
    platform: Extension<Platform>,
    Path(filename): Path<String>,
) -> Result<Response, AppError> {
    let path = match platform.static_file(&filename) {
        Ok(path) => path,
        Err(e) => {
            log::info!("download refused: {e}");
            return Ok((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new(FILE_NOT_FOUND)),
            ).into_response());
        }
    };
    let bytes = tokio::fs::read(&path).await
        .map_err(|e| {
            log::error!("failed to read {}: {e}", path.display());
            AppError::InternalServerError
        })?;
    let mime = mime_guess::from_path(&path).first_or_octet_stream();
    Ok((
        [
            (header::CONTENT_TYPE, mime.to_string()),
            (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{filename}\"")),
        ],
        bytes,
    ).into_response())
}
