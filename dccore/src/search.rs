use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// A transient message to be shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Identifies one issued search; tokens increase monotonically so only the
/// latest one may settle the search state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

mod impls;
mod state;

pub use state::{
    interpret,
    Completion,
    SearchState,
};

/// The message shown after a successful search.
pub const SEARCH_SUCCEEDED: &str = "Case details retrieved successfully!";
pub const DOWNLOAD_STARTED: &str = "Downloading PDF...";
pub const DOWNLOAD_SUCCEEDED: &str = "PDF downloaded successfully!";
pub const DOWNLOAD_FAILED: &str = "Failed to download PDF";
