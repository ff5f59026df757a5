use dccore::case::{
    CaseRecord,
    Order,
    Parties,
};

/// Returns the same demonstration record for every query; used when no
/// portal produces a usable result.
#[derive(Clone, Copy, Debug, Default)]
pub struct SampleSource;

impl SampleSource {
    pub fn record(&self) -> CaseRecord {
        CaseRecord {
            parties: Parties {
                petitioner: Some("Sample Petitioner Name".to_string()),
                respondent: Some("Sample Respondent Name".to_string()),
            },
            filing_date: Some("2024-01-15".to_string()),
            next_hearing: Some("2024-08-20".to_string()),
            case_status: Some("Pending".to_string()),
            orders: vec![
                Order {
                    date: Some("2024-07-15".to_string()),
                    title: "Latest Order".to_string(),
                    pdf_link: Some("/download/sample_order.pdf".to_string()),
                },
            ],
        }
    }
}
