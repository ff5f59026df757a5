//! The browser side of the page: requests to the server, local storage
//! and file downloads.

use dccore::error::ClientError;

pub mod api;
#[cfg(feature = "hydrate")]
mod download;
pub mod storage;

/// Fetch the document at `link` and hand it to the browser to be saved
/// as `filename`.
pub async fn download_pdf(link: &str, filename: &str) -> Result<(), ClientError> {
    let bytes = api::fetch_bytes(link).await?;
    save(&bytes, filename)
}

#[cfg(feature = "hydrate")]
use download::save;

#[cfg(not(feature = "hydrate"))]
fn save(_bytes: &[u8], filename: &str) -> Result<(), ClientError> {
    Err(ClientError::Browser(format!("cannot save {filename} without a browser")))
}
