use serde::{
    de::Error as _,
    Deserialize,
    Deserializer,
};

use crate::{
    case::{
        CaseRecord,
        SearchForm,
        SearchQuery,
    },
    validate::{
        check_filing_year,
        validate,
        Validation,
    },
};

#[derive(Deserialize)]
#[serde(untagged)]
enum YearRepr {
    Number(i64),
    Text(String),
}

/// Accepts a year given either as a JSON number or a string, producing the
/// textual form; `null` becomes the empty string.
pub(crate) fn year_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<YearRepr>::deserialize(deserializer)? {
        Some(YearRepr::Number(n)) => n.to_string(),
        Some(YearRepr::Text(s)) => s,
        None => String::new(),
    })
}

pub(super) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl SearchForm {
    pub fn new(
        case_type: impl Into<String>,
        case_number: impl Into<String>,
        filing_year: impl Into<String>,
    ) -> Self {
        Self {
            case_type: case_type.into(),
            case_number: case_number.into(),
            filing_year: filing_year.into(),
        }
    }

    /// Validate the form against the given current year, producing the
    /// query with all values trimmed.
    pub fn into_query(self, current_year: i32) -> Result<SearchQuery, Validation> {
        let validation = validate(&self, current_year);
        match (validation.is_valid(), check_filing_year(&self.filing_year, current_year)) {
            (true, Ok(filing_year)) => Ok(SearchQuery {
                case_type: self.case_type.trim().to_string(),
                case_number: self.case_number.trim().to_string(),
                filing_year,
            }),
            _ => Err(validation),
        }
    }
}

impl SearchQuery {
    pub fn case_type(&self) -> &str {
        &self.case_type
    }

    pub fn case_number(&self) -> &str {
        &self.case_number
    }

    pub fn filing_year(&self) -> i32 {
        self.filing_year
    }
}

impl From<&SearchQuery> for SearchForm {
    fn from(query: &SearchQuery) -> Self {
        Self {
            case_type: query.case_type.clone(),
            case_number: query.case_number.clone(),
            filing_year: query.filing_year.to_string(),
        }
    }
}

impl CaseRecord {
    /// Whether the record names at least one party; a record without any
    /// party is considered empty by the sources.
    pub fn has_parties(&self) -> bool {
        [&self.parties.petitioner, &self.parties.respondent]
            .into_iter()
            .flatten()
            .any(|name| !name.trim().is_empty())
    }
}
