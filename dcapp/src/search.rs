//! The case search page.
//!
//! The page owns a `SearchState` signal; every search takes a token from
//! it and only the completion carrying the latest token is applied.  The
//! form fields are mirrored into local storage on every change and
//! restored when the page is set up in the browser.

use dccore::{
    case::{
        CASE_TYPES,
        SearchForm,
    },
    persist::LastSearch,
    search::{
        Completion,
        Notification,
        SearchState,
        DOWNLOAD_FAILED,
        DOWNLOAD_STARTED,
        DOWNLOAD_SUCCEEDED,
    },
    validate::current_year,
    view::{
        CaseView,
        OrderRow,
        OrdersView,
        NO_ORDERS,
    },
};
use gloo_timers::callback::Timeout;
use leptos::{
    ev,
    logging,
    prelude::*,
    task::spawn_local,
};
use leptos_meta::Title;

use crate::{
    client::{
        self,
        api,
        storage::persistence,
    },
    component::{
        SelectMap,
        Spinner,
    },
    history::HistoryChannel,
    notify::Notifications,
};

/// Delay before the results panel gets its transition class, so the
/// panel is visible before it animates in.
const REVEAL_DELAY: u32 = 100;

/// At most one scheduled callback; scheduling another or cancelling drops
/// the held handle, and dropping a `Timeout` cancels it.
struct Pending<H: 'static>(StoredValue<Option<H>, LocalStorage>);

impl<H: 'static> Clone for Pending<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: 'static> Copy for Pending<H> {}

impl<H: 'static> Pending<H> {
    fn new() -> Self {
        Self(StoredValue::new_local(None))
    }

    fn schedule(&self, handle: H) {
        self.0.set_value(Some(handle));
    }

    fn cancel(&self) {
        self.0.set_value(None);
    }
}

#[derive(Clone, Copy)]
struct FormFields {
    case_type: RwSignal<String>,
    case_number: RwSignal<String>,
    filing_year: RwSignal<String>,
}

impl FormFields {
    fn new() -> Self {
        Self {
            case_type: RwSignal::new(String::new()),
            case_number: RwSignal::new(String::new()),
            filing_year: RwSignal::new(String::new()),
        }
    }

    fn snapshot(&self) -> SearchForm {
        SearchForm::new(
            self.case_type.get_untracked(),
            self.case_number.get_untracked(),
            self.filing_year.get_untracked(),
        )
    }

    fn fill(&self, form: SearchForm) {
        self.case_type.set(form.case_type);
        self.case_number.set(form.case_number);
        self.filing_year.set(form.filing_year);
    }

    fn save(&self) {
        let snapshot = LastSearch::from(&self.snapshot());
        if let Err(e) = persistence().and_then(|p| p.save(&snapshot)) {
            logging::warn!("failed to save search data: {e}");
        }
    }

    fn restore(&self) {
        match persistence().and_then(|p| p.load()) {
            Ok(Some(last)) => self.fill(last.into()),
            Ok(None) => (),
            Err(e) => logging::error!("failed to load saved search data: {e}"),
        }
    }

    fn clear(&self) {
        self.fill(SearchForm::default());
        if let Err(e) = persistence().and_then(|p| p.clear()) {
            logging::warn!("failed to clear saved search data: {e}");
        }
    }
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let notifications = expect_context::<Notifications>();
    let history = HistoryChannel::new();
    let fields = FormFields::new();
    let state = RwSignal::new(SearchState::new());
    let revealed = RwSignal::new(false);
    let reveal = Pending::<Timeout>::new();

    // effects only run in the browser
    Effect::new(move |_| fields.restore());

    Effect::new(move |_| {
        if state.with(|s| s.results().is_some()) {
            reveal.schedule(Timeout::new(REVEAL_DELAY, move || revealed.set(true)));
        } else {
            reveal.cancel();
            revealed.set(false);
        }
    });

    let search = move || {
        let query = match fields.snapshot().into_query(current_year()) {
            Ok(query) => query,
            Err(validation) => {
                for message in validation.messages() {
                    notifications.push(Notification::error(message));
                }
                return;
            }
        };
        let Some(token) = state.try_update(|s| s.begin()) else {
            return;
        };
        spawn_local(async move {
            let outcome = api::search(&query).await;
            match state.try_update(|s| s.complete(token, outcome)) {
                Some(Completion::Applied { notification, refresh_history }) => {
                    notifications.push(notification);
                    if refresh_history {
                        history.refresh();
                    }
                }
                Some(Completion::Superseded) => {
                    logging::log!("ignoring the outcome of superseded search {token}");
                }
                None => (),
            }
        });
    };

    let reset = move || {
        state.update(|s| s.reset());
        fields.clear();
    };

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Enter" && (ev.ctrl_key() || ev.meta_key()) {
            ev.prevent_default();
            search();
        } else if ev.key() == "Escape" {
            reset();
        }
    });
    on_cleanup(move || keydown.remove());

    let case_types = CASE_TYPES.iter()
        .map(|(code, label)| (code.to_string(), label.to_string()))
        .collect::<Vec<_>>();

    view! {
        <Title text="Case Search | Court Data Fetcher"/>
        <div class="main">
            <h1>"Court Data Fetcher"</h1>
            <p>"Look up the status, parties and orders of a case."</p>
            <form
                id="search-form"
                class="search-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    search();
                }
            >
                <label for="case-type">"Case Type"</label>
                <SelectMap
                    name="case-type"
                    options=case_types
                    value=fields.case_type
                    placeholder="Select case type"
                    on_change=Callback::new(move |_| fields.save())
                />
                <label for="case-number">"Case Number"</label>
                <input
                    id="case-number"
                    name="case-number"
                    type="text"
                    placeholder="e.g. 123/2024"
                    prop:value=move || fields.case_number.get()
                    on:input=move |ev| fields.case_number.set(event_target_value(&ev))
                    on:change=move |_| fields.save()
                />
                <label for="filing-year">"Filing Year"</label>
                <input
                    id="filing-year"
                    name="filing-year"
                    type="number"
                    min="2000"
                    max=current_year().to_string()
                    prop:value=move || fields.filing_year.get()
                    on:input=move |ev| fields.filing_year.set(event_target_value(&ev))
                    on:change=move |_| fields.save()
                    on:focus=move |_| {
                        if fields.filing_year.with_untracked(String::is_empty) {
                            fields.filing_year.set(current_year().to_string());
                        }
                    }
                />
                <button type="submit">
                    "Search"
                </button>
                <button type="button" class="secondary" on:click=move |_| reset()>
                    "Clear"
                </button>
            </form>
            <p class="hint">"Ctrl+Enter searches, Escape clears the form."</p>

            <div id="loading" class="loading" class:hidden=move || !state.with(|s| s.loading())>
                <Spinner/>
                <p>"Fetching case details..."</p>
            </div>

            <div id="error" class="error" class:hidden=move || state.with(|s| s.error().is_none())>
                <p id="error-message">
                    {move || state.with(|s| s.error().map(str::to_string))}
                </p>
            </div>

            <div
                id="results"
                class="results"
                class:hidden=move || state.with(|s| s.results().is_none())
                class:show=move || revealed.get()
            >
                {move || state.with(|s| s.results().cloned())
                    .map(|case| view! { <CaseDetails case/> })}
            </div>
        </div>
    }
}

#[component]
fn CaseDetails(case: CaseView) -> impl IntoView {
    let orders = match case.orders {
        OrdersView::Empty => view! {
            <p class="no-orders">{NO_ORDERS}</p>
        }.into_any(),
        OrdersView::Rows(rows) => rows.into_iter()
            .map(|row| view! { <OrderItem row/> })
            .collect_view()
            .into_any(),
    };
    view! {
        <h2>"Case Details"</h2>
        <dl class="case-details">
            <dt>"Petitioner"</dt>
            <dd id="petitioner">{case.petitioner}</dd>
            <dt>"Respondent"</dt>
            <dd id="respondent">{case.respondent}</dd>
            <dt>"Filing Date"</dt>
            <dd id="filing-date">{case.filing_date}</dd>
            <dt>"Next Hearing"</dt>
            <dd id="next-hearing">{case.next_hearing}</dd>
            <dt>"Status"</dt>
            <dd>
                <span id="case-status" class=format!("status {}", case.status_class)>
                    {case.status}
                </span>
            </dd>
        </dl>
        <h3>"Orders"</h3>
        <div id="orders-list">{orders}</div>
    }
}

#[component]
fn OrderItem(row: OrderRow) -> impl IntoView {
    let notifications = expect_context::<Notifications>();
    let OrderRow { date, title, pdf_link, filename } = row;
    let download = pdf_link.map(|link| {
        view! {
            <button
                class="order-download"
                on:click=move |_| {
                    let link = link.clone();
                    let filename = filename.clone();
                    notifications.push(Notification::info(DOWNLOAD_STARTED));
                    spawn_local(async move {
                        match client::download_pdf(&link, &filename).await {
                            Ok(()) => notifications.push(Notification::success(DOWNLOAD_SUCCEEDED)),
                            Err(e) => {
                                logging::error!("download of {link} failed: {e}");
                                notifications.push(Notification::error(DOWNLOAD_FAILED));
                            }
                        }
                    });
                }
            >"Download"</button>
        }
    });
    view! {
        <div class="order-item">
            <div class="order-info">
                <span class="order-date">{date}</span>
                <span class="order-title">{title}</span>
            </div>
            {download}
        </div>
    }
}

#[cfg(test)]
mod testing {
    use leptos::prelude::*;
    use std::{
        cell::Cell,
        rc::Rc,
    };

    use super::Pending;

    struct Handle(Rc<Cell<bool>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn cancel_drops_scheduled_handle() {
        let owner = Owner::new();
        owner.set();

        let pending = Pending::new();
        let first = Rc::new(Cell::new(false));
        let second = Rc::new(Cell::new(false));

        pending.schedule(Handle(first.clone()));
        assert!(!first.get());

        pending.schedule(Handle(second.clone()));
        assert!(first.get());
        assert!(!second.get());

        pending.cancel();
        assert!(second.get());
    }
}
