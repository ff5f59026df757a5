//! Mapping of a `CaseRecord` onto what the results panel displays.

use chrono::{
    DateTime,
    NaiveDate,
};

use crate::case::{
    CaseRecord,
    Order,
};

pub const NOT_AVAILABLE: &str = "Not available";
pub const NO_ORDERS: &str = "No orders available";
pub const DEFAULT_STATUS: &str = "Pending";

/// The display state of the results panel.
#[derive(Clone, Debug, PartialEq)]
pub struct CaseView {
    pub petitioner: String,
    pub respondent: String,
    pub filing_date: String,
    pub next_hearing: String,
    pub status: String,
    pub status_class: String,
    pub orders: OrdersView,
}

#[derive(Clone, Debug, PartialEq)]
pub enum OrdersView {
    /// Rendered as the `NO_ORDERS` placeholder.
    Empty,
    Rows(Vec<OrderRow>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrderRow {
    pub date: String,
    pub title: String,
    pub pdf_link: Option<String>,
    pub filename: String,
}

impl From<&CaseRecord> for CaseView {
    fn from(record: &CaseRecord) -> Self {
        let status = record.case_status.as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_STATUS)
            .to_string();
        Self {
            petitioner: or_placeholder(record.parties.petitioner.as_deref()),
            respondent: or_placeholder(record.parties.respondent.as_deref()),
            filing_date: optional_date(record.filing_date.as_deref()),
            next_hearing: optional_date(record.next_hearing.as_deref()),
            status_class: status_class(&status),
            status,
            orders: OrdersView::from(record.orders.as_slice()),
        }
    }
}

impl From<&[Order]> for OrdersView {
    fn from(orders: &[Order]) -> Self {
        if orders.is_empty() {
            return Self::Empty;
        }
        Self::Rows(orders.iter().map(OrderRow::from).collect())
    }
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            date: optional_date(order.date.as_deref()),
            title: order.title.clone(),
            pdf_link: order.pdf_link.clone()
                .filter(|link| !link.trim().is_empty()),
            filename: pdf_filename(&order.title),
        }
    }
}

impl OrdersView {
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Empty => Some(NO_ORDERS),
            Self::Rows(_) => None,
        }
    }

    pub fn rows(&self) -> &[OrderRow] {
        match self {
            Self::Empty => &[],
            Self::Rows(rows) => rows,
        }
    }
}

fn or_placeholder(value: Option<&str>) -> String {
    value.map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

fn optional_date(value: Option<&str>) -> String {
    value.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(format_date)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Format a date in the long regional form, e.g. `15 January 2024`; input
/// that cannot be understood as a date is returned verbatim.
pub fn format_date(value: &str) -> String {
    let trimmed = value.trim();
    ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y"]
        .into_iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(trimmed).ok().map(|dt| dt.date_naive()))
        .map(|date| date.format("%-d %B %Y").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// The style class token for a status, e.g. `status-under-review`.
pub fn status_class(status: &str) -> String {
    let token = status.trim()
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    format!("status-{token}")
}

/// The file name offered when saving the document of an order titled
/// `title`.
pub fn pdf_filename(title: &str) -> String {
    let stem = title.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect::<String>();
    format!("{stem}.pdf")
}
