use serde::{Deserialize, Serialize};

/// The closed set of case types offered by the search form, as
/// `(code, label)` pairs.
pub const CASE_TYPES: &[(&str, &str)] = &[
    ("civil", "Civil Suit"),
    ("criminal", "Criminal Case"),
    ("writ", "Writ Petition"),
    ("appeal", "Appeal"),
    ("revision", "Revision Petition"),
    ("bail", "Bail Application"),
    ("arbitration", "Arbitration Petition"),
    ("company", "Company Petition"),
];

/// The raw values of the search form, exactly as entered.
///
/// The filing year is kept as text; on the wire it may arrive either as a
/// JSON string or a number.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub case_type: String,
    #[serde(default)]
    pub case_number: String,
    #[serde(default, deserialize_with = "impls::year_text")]
    pub filing_year: String,
}

/// A validated query, produced only through `SearchForm::into_query`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    pub(crate) case_type: String,
    pub(crate) case_number: String,
    pub(crate) filing_year: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Parties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub petitioner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respondent: Option<String>,
}

/// The case details returned by the backend for one query.
///
/// Every field may be absent or `null` in the payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    #[serde(default, deserialize_with = "impls::null_default")]
    pub parties: Parties,
    #[serde(default)]
    pub filing_date: Option<String>,
    #[serde(default)]
    pub next_hearing: Option<String>,
    #[serde(default)]
    pub case_status: Option<String>,
    #[serde(default, deserialize_with = "impls::null_default")]
    pub orders: Vec<Order>,
}

/// One judicial order associated with a case.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "impls::null_default")]
    pub title: String,
    #[serde(default)]
    pub pdf_link: Option<String>,
}

mod impls;
pub mod traits;

pub(crate) use impls::year_text;
