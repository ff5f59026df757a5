use dccore::{
    case::SearchQuery,
    envelope::{
        HistoryResponse,
        SearchResponse,
    },
    error::ClientError,
    history::HistoryEntry,
};
use leptos::logging;
use reqwest::{
    Response,
    Url,
};

pub const SEARCH_ROUTE: &str = "/api/case-search";
pub const HISTORY_ROUTE: &str = "/api/search-history";
pub const DOWNLOAD_ROUTE: &str = "/download/{filename}";

fn origin() -> Result<String, ClientError> {
    leptos::prelude::window()
        .location()
        .origin()
        .map_err(|e| ClientError::Browser(format!("{e:?}")))
}

/// Resolve `link` against `origin`; absolute links are kept as they are.
pub fn resolve_against(origin: &str, link: &str) -> Result<Url, ClientError> {
    Url::parse(origin)
        .and_then(|base| base.join(link))
        .map_err(|e| ClientError::Browser(format!("invalid link {link:?}: {e}")))
}

fn resolve(link: &str) -> Result<Url, ClientError> {
    resolve_against(&origin()?, link)
}

fn network(e: reqwest::Error) -> ClientError {
    ClientError::Network(e.to_string())
}

fn decode(e: reqwest::Error) -> ClientError {
    ClientError::Decode(e.to_string())
}

/// Decode the envelope of a response; for a non-2xx reply the error text
/// of the envelope is kept if the body still parses as one.
async fn envelope<T, F>(response: Response, error: F) -> Result<T, ClientError>
where
    T: serde::de::DeserializeOwned,
    F: FnOnce(T) -> Option<String>,
{
    let status = response.status();
    if status.is_success() {
        response.json::<T>().await.map_err(decode)
    } else {
        Err(ClientError::Status {
            status: status.as_u16(),
            error: response.json::<T>().await.ok().and_then(error),
        })
    }
}

pub async fn search(query: &SearchQuery) -> Result<SearchResponse, ClientError> {
    let url = resolve(SEARCH_ROUTE)?;
    logging::log!("searching case {}/{}", query.case_number(), query.filing_year());
    let response = reqwest::Client::new()
        .post(url)
        .json(query)
        .send()
        .await
        .map_err(network)?;
    envelope(response, |r: SearchResponse| r.error).await
}

pub async fn history() -> Result<Vec<HistoryEntry>, ClientError> {
    let url = resolve(HISTORY_ROUTE)?;
    let response = reqwest::get(url).await.map_err(network)?;
    let status = response.status().as_u16();
    match envelope(response, |r: HistoryResponse| r.error).await? {
        HistoryResponse { success: true, history: Some(history), .. } => Ok(history),
        HistoryResponse { error, .. } => Err(ClientError::Status { status, error }),
    }
}

pub async fn fetch_bytes(link: &str) -> Result<Vec<u8>, ClientError> {
    let url = resolve(link)?;
    let response = reqwest::get(url).await.map_err(network)?;
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Status { status: status.as_u16(), error: None });
    }
    Ok(response.bytes().await.map_err(network)?.to_vec())
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn resolve_links() -> anyhow::Result<()> {
        let origin = "http://127.0.0.1:5000";
        assert_eq!(
            resolve_against(origin, SEARCH_ROUTE)?.as_str(),
            "http://127.0.0.1:5000/api/case-search",
        );
        assert_eq!(
            resolve_against(origin, "/download/sample_order.pdf")?.as_str(),
            "http://127.0.0.1:5000/download/sample_order.pdf",
        );
        assert_eq!(
            resolve_against(origin, "https://delhihighcourt.nic.in/orders/1.pdf")?.as_str(),
            "https://delhihighcourt.nic.in/orders/1.pdf",
        );
        assert!(matches!(
            resolve_against("not an origin", "/x"),
            Err(ClientError::Browser(_)),
        ));
        Ok(())
    }
}
