//! The JSON envelopes exchanged between the browser and the server.

use serde::{Deserialize, Serialize};

use crate::{
    case::CaseRecord,
    history::HistoryEntry,
};

/// Sent by the server when a search could not be completed.
pub const SEARCH_FAILED: &str = "Failed to fetch case data. Please try again.";
/// Sent by the server when the history could not be read.
pub const HISTORY_FAILED: &str = "Failed to fetch search history";
/// Sent by the server for an unknown download.
pub const FILE_NOT_FOUND: &str = "File not found";
/// Shown by the browser when a failed search carries no usable message.
pub const SEARCH_FALLBACK: &str = "An error occurred while fetching case details. Please try again.";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<CaseRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<HistoryEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl SearchResponse {
    pub fn found(data: CaseRecord) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(error.into()) }
    }

    /// The record for a successful response, otherwise the message that
    /// should be shown, if the server provided a usable one.
    pub fn into_result(self) -> Result<CaseRecord, Option<String>> {
        match self {
            Self { success: true, data: Some(data), .. } => Ok(data),
            Self { error, .. } => Err(usable_message(error)),
        }
    }
}

impl HistoryResponse {
    pub fn found(history: Vec<HistoryEntry>) -> Self {
        Self { success: true, history: Some(history), error: None }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self { success: false, history: None, error: Some(error.into()) }
    }
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

pub(crate) fn usable_message(error: Option<String>) -> Option<String> {
    error.filter(|message| !message.trim().is_empty())
}
