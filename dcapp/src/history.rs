//! Search history, refreshed as a detached side task after each
//! successful search.  The history is only logged to the console; nothing
//! here is rendered.

use dccore::{
    error::ClientError,
    history::HistoryEntry,
};
use leptos::{
    logging,
    prelude::*,
    task::spawn_local,
};

use crate::{
    client::api,
    error::AppError,
};

/// The latest history together with its own error channel; a failed
/// refresh is recorded here and never reaches the search state.
#[derive(Clone, Copy)]
pub struct HistoryChannel {
    entries: RwSignal<Vec<HistoryEntry>>,
    error: RwSignal<Option<AppError>>,
}

impl HistoryChannel {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
        }
    }

    /// Fetch the history in the background; returns immediately.
    pub fn refresh(&self) {
        let this = *self;
        spawn_local(async move {
            this.record(api::history().await);
        });
    }

    fn record(&self, outcome: Result<Vec<HistoryEntry>, ClientError>) {
        match outcome {
            Ok(entries) => {
                logging::log!("search history updated: {} entries", entries.len());
                for entry in entries.iter() {
                    logging::log!(
                        "  {} {} / {} at {}",
                        entry.case_type,
                        entry.case_number,
                        entry.filing_year,
                        entry.timestamp,
                    );
                }
                self.entries.set(entries);
                self.error.set(None);
            }
            Err(e) => {
                logging::error!("failed to update search history: {e}");
                self.error.set(Some(e.into()));
            }
        }
    }
}

impl Default for HistoryChannel {
    fn default() -> Self {
        Self::new()
    }
}
