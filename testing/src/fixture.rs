use dccore::case::{
    CaseRecord,
    SearchForm,
    SearchQuery,
};

/// A valid query for the given case number.
pub fn query(case_number: &str) -> SearchQuery {
    SearchForm::new("civil", case_number, "2024")
        .into_query(2024)
        .expect("fixture query must be valid")
}

/// A record as a court portal would report it.
pub fn portal_record() -> CaseRecord {
    serde_json::from_str(r#"{
        "parties": {
            "petitioner": "Ram Kumar",
            "respondent": "State of NCT of Delhi"
        },
        "filing_date": "2023-03-14",
        "next_hearing": "2024-11-02",
        "case_status": "Pending",
        "orders": [
            {
                "date": "2024-05-10",
                "title": "Order on application",
                "pdf_link": "https://delhihighcourt.nic.in/orders/123.pdf"
            }
        ]
    }"#)
        .expect("fixture record must parse")
}
