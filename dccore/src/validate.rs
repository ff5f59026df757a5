//! Syntactic checks applied to the search form before any request is made.

use chrono::Datelike;
use thiserror::Error;

use crate::case::SearchForm;

/// The earliest filing year accepted.
pub const MIN_FILING_YEAR: i32 = 2000;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select a case type")]
    MissingCaseType,
    #[error("Please enter a case number")]
    MissingCaseNumber,
    #[error("Case number may only contain digits and '/'")]
    InvalidCaseNumber,
    #[error("Please enter a filing year")]
    MissingFilingYear,
    #[error("Filing year must be a number")]
    NonNumericFilingYear,
    #[error("Filing year must be between {min} and {max}")]
    FilingYearOutOfRange {
        min: i32,
        max: i32,
    },
}

/// The outcome of validating a form; all violations are collected in the
/// order the fields appear on the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validation {
    errors: Vec<ValidationError>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The human-readable messages, one per violation.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter()
            .map(ToString::to_string)
            .collect()
    }
}

impl std::fmt::Display for Validation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

impl std::error::Error for Validation {}

/// The current calendar year according to the local clock.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Check every field of the form, with filing years accepted in the range
/// `[MIN_FILING_YEAR, current_year]`.
pub fn validate(form: &SearchForm, current_year: i32) -> Validation {
    let errors = [
        check_case_type(&form.case_type).err(),
        check_case_number(&form.case_number).err(),
        check_filing_year(&form.filing_year, current_year).err(),
    ]
        .into_iter()
        .flatten()
        .collect();
    Validation { errors }
}

fn check_case_type(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingCaseType)
    } else {
        Ok(())
    }
}

fn check_case_number(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::MissingCaseNumber)
    } else if !value.chars().all(|c| c.is_ascii_digit() || c == '/') {
        Err(ValidationError::InvalidCaseNumber)
    } else {
        Ok(())
    }
}

pub(crate) fn check_filing_year(value: &str, current_year: i32) -> Result<i32, ValidationError> {
    let value = value.trim();
    let out_of_range = ValidationError::FilingYearOutOfRange {
        min: MIN_FILING_YEAR,
        max: current_year,
    };
    if value.is_empty() {
        return Err(ValidationError::MissingFilingYear);
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NonNumericFilingYear);
    }
    // digits only, so a parse failure can only be an overflow
    let year = value.parse::<i32>().map_err(|_| out_of_range.clone())?;
    if (MIN_FILING_YEAR..=current_year).contains(&year) {
        Ok(year)
    } else {
        Err(out_of_range)
    }
}
