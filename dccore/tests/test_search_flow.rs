use dccore::{
    case::SearchForm,
    envelope::{
        SearchResponse,
        SEARCH_FALLBACK,
    },
    persist::{
        LastSearch,
        MemoryStore,
        Persistence,
    },
    search::{
        Completion,
        SearchState,
    },
    validate::validate,
};

// The page adapter composes these steps for the keyboard gestures; this
// replays the same sequence against the pure layer.
fn escape(state: &mut SearchState, persistence: &Persistence<MemoryStore>) -> anyhow::Result<()> {
    state.reset();
    persistence.clear()?;
    Ok(())
}

fn response(json: &str) -> SearchResponse {
    serde_json::from_str(json).expect("test envelope must parse")
}

#[test]
fn search_then_escape() -> anyhow::Result<()> {
    let persistence = Persistence::new(MemoryStore::default());
    let form = SearchForm::new("civil", "123/2024", "2024");
    persistence.save(&LastSearch::from(&form))?;

    let query = form.into_query(2026)?;
    assert_eq!(query.case_number(), "123/2024");

    let mut state = SearchState::new();
    let token = state.begin();
    let completion = state.complete(token, Ok(response(r#"{
        "success": true,
        "data": {
            "parties": {"petitioner": "Sample Petitioner Name"},
            "filing_date": "2024-01-15",
            "orders": [
                {"date": "2024-07-15", "title": "Latest Order", "pdf_link": "/download/sample_order.pdf"},
                {"date": "2024-03-01", "title": "Notice", "pdf_link": "/download/notice.pdf"}
            ]
        }
    }"#)));
    assert!(matches!(completion, Completion::Applied { refresh_history: true, .. }));
    let results = state.results().expect("results shown");
    assert_eq!(results.petitioner, "Sample Petitioner Name");
    assert_eq!(results.respondent, "Not available");
    assert_eq!(results.orders.rows().len(), 2);
    assert_eq!(results.orders.rows()[0].date, "15 July 2024");
    assert_eq!(results.orders.rows()[1].title, "Notice");

    escape(&mut state, &persistence)?;
    assert_eq!(state.results(), None);
    assert_eq!(state.error(), None);
    assert_eq!(persistence.load()?, None);
    Ok(())
}

#[test]
fn escape_from_any_state() -> anyhow::Result<()> {
    let persistence = Persistence::new(MemoryStore::default());

    // nothing shown, nothing stored
    let mut state = SearchState::new();
    escape(&mut state, &persistence)?;
    assert_eq!(state.results(), None);
    assert_eq!(state.error(), None);

    // error shown, search in flight, entry stored
    persistence.save(&LastSearch::default())?;
    let token = state.begin();
    state.complete(token, Ok(response(r#"{"success": false}"#)));
    assert_eq!(state.error(), Some(SEARCH_FALLBACK));
    let in_flight = state.begin();
    escape(&mut state, &persistence)?;
    state.complete(in_flight, Ok(response(r#"{"success": false, "error": "late"}"#)));
    assert_eq!(state.results(), None);
    assert_eq!(state.error(), None);
    assert!(!state.loading());
    assert_eq!(persistence.load()?, None);
    Ok(())
}

#[test]
fn invalid_form_never_searches() {
    let form = SearchForm::new("", "12/ab", "");
    let validation = validate(&form, 2026);
    assert_eq!(validation.messages().len(), 3);
    assert!(form.into_query(2026).is_err());
}

#[test]
fn restore_after_revisit() -> anyhow::Result<()> {
    let store = MemoryStore::default();
    Persistence::new(&store).save(&LastSearch {
        case_type: "bail".to_string(),
        case_number: "9/2025".to_string(),
        filing_year: "2025".to_string(),
    })?;

    // a fresh helper over the same storage, as on a new page load
    let restored = Persistence::new(&store).load()?
        .map(SearchForm::from)
        .expect("a search was stored");
    assert_eq!(restored, SearchForm::new("bail", "9/2025", "2025"));
    Ok(())
}
