use crate::{
    case::CaseRecord,
    envelope::{
        usable_message,
        SearchResponse,
        SEARCH_FALLBACK,
    },
    error::ClientError,
    search::{
        Notification,
        RequestToken,
        SEARCH_SUCCEEDED,
    },
    view::CaseView,
};

/// State of the search page: whether a search is loading, and the content
/// of the results and error panels.
///
/// Every search is started with `begin`, which hands out a fresh token,
/// and settled with `complete`; completions carrying anything but the
/// latest token are discarded, so a superseded request can never overwrite
/// the outcome of a newer one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    latest: RequestToken,
    loading: bool,
    results: Option<CaseView>,
    error: Option<String>,
}

/// What the caller should do after handing a completion to the state.
#[derive(Clone, Debug, PartialEq)]
pub enum Completion {
    /// The state was updated; show the notification.  For a successful
    /// search `refresh_history` is set.
    Applied {
        notification: Notification,
        refresh_history: bool,
    },
    /// A newer search was started (or the page was reset) after this one
    /// was issued; nothing changed.
    Superseded,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the loading state, hiding previous results and error.
    pub fn begin(&mut self) -> RequestToken {
        self.latest = self.latest.next();
        self.loading = true;
        self.results = None;
        self.error = None;
        self.latest
    }

    /// Settle the search identified by `token` with the outcome of its
    /// request.
    pub fn complete(
        &mut self,
        token: RequestToken,
        outcome: Result<SearchResponse, ClientError>,
    ) -> Completion {
        if token != self.latest {
            log::trace!("discarding completion of superseded search {token}");
            return Completion::Superseded;
        }
        self.loading = false;
        match interpret(outcome) {
            Ok(record) => {
                self.results = Some(CaseView::from(&record));
                Completion::Applied {
                    notification: Notification::success(SEARCH_SUCCEEDED),
                    refresh_history: true,
                }
            }
            Err(message) => {
                self.error = Some(message.clone());
                Completion::Applied {
                    notification: Notification::error(message),
                    refresh_history: false,
                }
            }
        }
    }

    /// Hide results and error and stop loading; any search still in
    /// flight is superseded.
    pub fn reset(&mut self) {
        self.latest = self.latest.next();
        self.loading = false;
        self.results = None;
        self.error = None;
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        token == self.latest
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn results(&self) -> Option<&CaseView> {
        self.results.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Reduce the outcome of a search request to either the record or the
/// message to display.
pub fn interpret(outcome: Result<SearchResponse, ClientError>) -> Result<CaseRecord, String> {
    let message = match outcome {
        Ok(response) => match response.into_result() {
            Ok(record) => return Ok(record),
            Err(message) => message,
        },
        Err(ClientError::Status { status, error }) => {
            log::warn!("search request returned status {status}");
            usable_message(error)
        }
        Err(e) => {
            log::warn!("search request failed: {e}");
            None
        }
    };
    Err(message.unwrap_or_else(|| SEARCH_FALLBACK.to_string()))
}

#[cfg(test)]
mod testing {
    use crate::{
        case::{CaseRecord, Order},
        search::NotificationKind,
        view::NO_ORDERS,
    };
    use super::*;

    fn record(orders: usize) -> CaseRecord {
        CaseRecord {
            orders: (0..orders)
                .map(|i| Order {
                    date: Some(format!("2024-01-{:02}", i + 1)),
                    title: format!("Order {i}"),
                    pdf_link: Some(format!("/download/order{i}.pdf")),
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn begin_clears_panels() {
        let mut state = SearchState::new();
        let token = state.begin();
        state.complete(token, Ok(SearchResponse::failed("X")));
        assert_eq!(state.error(), Some("X"));

        state.begin();
        assert!(state.loading());
        assert_eq!(state.error(), None);
        assert_eq!(state.results(), None);
    }

    #[test]
    fn success() {
        let mut state = SearchState::new();
        let token = state.begin();
        let completion = state.complete(token, Ok(SearchResponse::found(record(3))));
        assert_eq!(completion, Completion::Applied {
            notification: Notification::success(SEARCH_SUCCEEDED),
            refresh_history: true,
        });
        assert!(!state.loading());
        assert_eq!(state.error(), None);
        let rows = state.results().expect("results are shown").orders.rows();
        assert_eq!(
            rows.iter().map(|row| row.title.as_str()).collect::<Vec<_>>(),
            ["Order 0", "Order 1", "Order 2"],
        );
    }

    #[test]
    fn success_without_orders() {
        let mut state = SearchState::new();
        let token = state.begin();
        state.complete(token, Ok(SearchResponse::found(record(0))));
        let results = state.results().expect("results are shown");
        assert_eq!(results.orders.placeholder(), Some(NO_ORDERS));
        assert!(results.orders.rows().is_empty());
    }

    #[test]
    fn server_message_shown_verbatim() {
        let mut state = SearchState::new();
        let token = state.begin();
        let completion = state.complete(token, Ok(SearchResponse::failed("X")));
        assert_eq!(state.error(), Some("X"));
        assert!(!state.loading());
        assert_eq!(completion, Completion::Applied {
            notification: Notification::error("X"),
            refresh_history: false,
        });
    }

    #[test]
    fn fallback_message() {
        let failures = [
            Ok(SearchResponse { success: false, data: None, error: None }),
            Ok(SearchResponse { success: true, data: None, error: None }),
            Err(ClientError::Network("connection refused".to_string())),
            Err(ClientError::Decode("expected value".to_string())),
            Err(ClientError::Status { status: 502, error: None }),
        ];
        for outcome in failures {
            let mut state = SearchState::new();
            let token = state.begin();
            let completion = state.complete(token, outcome);
            assert_eq!(state.error(), Some(SEARCH_FALLBACK));
            match completion {
                Completion::Applied { notification, .. } => {
                    assert_eq!(notification.kind, NotificationKind::Error);
                    assert_eq!(notification.message, SEARCH_FALLBACK);
                }
                Completion::Superseded => panic!("completion should apply"),
            }
        }
    }

    #[test]
    fn non_success_status_with_envelope() {
        let mut state = SearchState::new();
        let token = state.begin();
        state.complete(token, Err(ClientError::Status {
            status: 500,
            error: Some("Failed to fetch case data. Please try again.".to_string()),
        }));
        assert_eq!(state.error(), Some("Failed to fetch case data. Please try again."));
    }

    #[test]
    fn superseded_search_is_ignored() {
        let mut state = SearchState::new();
        let first = state.begin();
        let second = state.begin();
        assert!(first < second);

        // the second request resolves first
        state.complete(second, Ok(SearchResponse::found(record(1))));
        let completion = state.complete(first, Ok(SearchResponse::failed("stale")));
        assert_eq!(completion, Completion::Superseded);
        assert_eq!(state.error(), None);
        assert_eq!(state.results().map(|r| r.orders.rows().len()), Some(1));
    }

    #[test]
    fn stale_completion_keeps_loading() {
        let mut state = SearchState::new();
        let first = state.begin();
        let second = state.begin();
        assert_eq!(
            state.complete(first, Ok(SearchResponse::found(record(1)))),
            Completion::Superseded,
        );
        assert!(state.loading());
        assert_eq!(state.results(), None);
        assert!(state.is_latest(second));
    }

    #[test]
    fn reset_hides_everything() {
        let mut state = SearchState::new();
        let token = state.begin();
        state.complete(token, Ok(SearchResponse::found(record(1))));
        state.reset();
        assert_eq!(state.results(), None);
        assert_eq!(state.error(), None);

        let token = state.begin();
        state.complete(token, Ok(SearchResponse::failed("X")));
        state.reset();
        assert_eq!(state.error(), None);

        // an in-flight search resolving after the reset leaves the page clear
        let token = state.begin();
        state.reset();
        assert!(!state.loading());
        assert_eq!(
            state.complete(token, Ok(SearchResponse::found(record(1)))),
            Completion::Superseded,
        );
        assert_eq!(state.results(), None);
        assert_eq!(state, SearchState { latest: state.latest, ..Default::default() });
    }
}
