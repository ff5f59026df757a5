//! Extraction of case details from a court portal's case status page.
//!
//! Portals present the details as a table of label/value cells, followed
//! by a table with class `orders` listing the orders (date, title, link).

use dccore::{
    case::{
        CaseRecord,
        Order,
    },
    error::SourceError,
};
use regex::Regex;
use reqwest::Url;
use std::sync::LazyLock;

static CAPTCHA: LazyLock<Regex> = LazyLock::new(|| Regex::new(
    r#"(?is)<img\b[^>]*\balt\s*=\s*["'][^"']*captcha"#
).expect("valid regex"));
static ORDERS_TABLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(
    r#"(?is)<table\b[^>]*\bclass\s*=\s*["'][^"']*\borders\b[^"']*["'][^>]*>(.*?)</table>"#
).expect("valid regex"));
static ROW: LazyLock<Regex> = LazyLock::new(|| Regex::new(
    r"(?is)<tr\b[^>]*>(.*?)</tr>"
).expect("valid regex"));
static CELL: LazyLock<Regex> = LazyLock::new(|| Regex::new(
    r"(?is)<td\b[^>]*>(.*?)</td>"
).expect("valid regex"));
static HREF: LazyLock<Regex> = LazyLock::new(|| Regex::new(
    r#"(?is)<a\b[^>]*\bhref\s*=\s*["']([^"']+)["']"#
).expect("valid regex"));
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(
    r"(?s)<[^>]*>"
).expect("valid regex"));

static PETITIONER: LazyLock<Regex> = LazyLock::new(|| Regex::new(
    r"(?i)petitioner"
).expect("valid regex"));
static RESPONDENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(
    r"(?i)respondent"
).expect("valid regex"));
static FILING_DATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(
    r"(?i)filing.*date"
).expect("valid regex"));
static NEXT_HEARING: LazyLock<Regex> = LazyLock::new(|| Regex::new(
    r"(?i)next.*hearing"
).expect("valid regex"));
static STATUS: LazyLock<Regex> = LazyLock::new(|| Regex::new(
    r"(?i)status"
).expect("valid regex"));

/// Status reported when the page has no status cell.
const UNKNOWN_STATUS: &str = "Unknown";

pub(super) fn is_captcha(html: &str) -> bool {
    CAPTCHA.is_match(html)
}

/// Parse the page; links to orders are made absolute against `base`.
pub(super) fn case_page(html: &str, base: &str) -> Result<CaseRecord, SourceError> {
    if is_captcha(html) {
        return Err(SourceError::Captcha);
    }
    let base = Url::parse(base)
        .map_err(|e| SourceError::Parse(e.to_string()))?;

    // the label scan must not pick up the titles of orders
    let details = ORDERS_TABLE.replace_all(html, "");
    let rows = rows(&details);

    let mut record = CaseRecord::default();
    record.parties.petitioner = labelled(&rows, &PETITIONER);
    record.parties.respondent = labelled(&rows, &RESPONDENT);
    record.filing_date = labelled(&rows, &FILING_DATE);
    record.next_hearing = labelled(&rows, &NEXT_HEARING);
    record.case_status = labelled(&rows, &STATUS)
        .or_else(|| Some(UNKNOWN_STATUS.to_string()));
    record.orders = match ORDERS_TABLE.captures(html) {
        Some(table) => orders(&table[1], &base),
        None => Vec::new(),
    };
    Ok(record)
}

fn rows(html: &str) -> Vec<Vec<&str>> {
    ROW.captures_iter(html)
        .map(|row| {
            let row = row.get(1).map_or("", |m| m.as_str());
            CELL.captures_iter(row)
                .filter_map(|cell| cell.get(1).map(|m| m.as_str()))
                .collect()
        })
        .collect()
}

/// The text of the cell following the first cell whose text matches
/// `label`.
fn labelled(rows: &[Vec<&str>], label: &Regex) -> Option<String> {
    rows.iter()
        .flat_map(|cells| cells.windows(2))
        .find(|pair| label.is_match(&text(pair[0])))
        .map(|pair| text(pair[1]))
}

fn orders(table: &str, base: &Url) -> Vec<Order> {
    rows(table)
        .into_iter()
        .skip(1)
        .filter(|cells| cells.len() >= 3)
        .map(|cells| Order {
            date: Some(text(cells[0])),
            title: text(cells[1]),
            pdf_link: HREF.captures(cells[2])
                .and_then(|href| base.join(&html_escape::decode_html_entities(&href[1])).ok())
                .map(String::from),
        })
        .collect()
}

fn text(fragment: &str) -> String {
    let stripped = TAG.replace_all(fragment, " ");
    html_escape::decode_html_entities(&stripped)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod testing {
    use super::*;

    const BASE: &str = "https://delhihighcourt.nic.in/";

    const PAGE: &str = r#"
<html><body>
<table class="case-details">
  <tr><td>Petitioner</td><td> Ram&nbsp;Kumar </td></tr>
  <tr><td><b>Respondent</b></td><td>State of NCT of Delhi &amp; Ors.</td></tr>
  <tr><td>Date of Filing Date</td><td>15-01-2024</td></tr>
  <tr><td>Next Hearing Date</td><td>20-08-2024</td></tr>
  <tr><td>Case Status</td><td>Pending</td></tr>
</table>
<table class="table orders">
  <tr><th>Date</th><th>Order</th><th>Document</th></tr>
  <tr><td>15-07-2024</td><td>Status report called for</td>
      <td><a href="/orders/2024/123.pdf">View</a></td></tr>
  <tr><td>01-03-2024</td><td>Notice issued</td><td>-</td></tr>
  <tr><td>incomplete</td></tr>
</table>
</body></html>
"#;

    #[test]
    fn extract_details() -> anyhow::Result<()> {
        let record = case_page(PAGE, BASE)?;
        assert_eq!(record.parties.petitioner.as_deref(), Some("Ram Kumar"));
        assert_eq!(
            record.parties.respondent.as_deref(),
            Some("State of NCT of Delhi & Ors."),
        );
        assert_eq!(record.filing_date.as_deref(), Some("15-01-2024"));
        assert_eq!(record.next_hearing.as_deref(), Some("20-08-2024"));
        assert_eq!(record.case_status.as_deref(), Some("Pending"));
        assert!(record.has_parties());
        Ok(())
    }

    #[test]
    fn extract_orders() -> anyhow::Result<()> {
        let record = case_page(PAGE, BASE)?;
        assert_eq!(record.orders, [
            Order {
                date: Some("15-07-2024".to_string()),
                title: "Status report called for".to_string(),
                pdf_link: Some("https://delhihighcourt.nic.in/orders/2024/123.pdf".to_string()),
            },
            Order {
                date: Some("01-03-2024".to_string()),
                title: "Notice issued".to_string(),
                pdf_link: None,
            },
        ]);
        Ok(())
    }

    #[test]
    fn district_relative_links() -> anyhow::Result<()> {
        let page = r#"<table class="orders">
            <tr><td>Date</td><td>Title</td><td>Link</td></tr>
            <tr><td>2024-05-02</td><td>Order</td><td><a href='orders/1.pdf'>pdf</a></td></tr>
        </table>"#;
        let record = case_page(page, "https://districts.ecourts.gov.in/faridabad/")?;
        assert_eq!(
            record.orders[0].pdf_link.as_deref(),
            Some("https://districts.ecourts.gov.in/faridabad/orders/1.pdf"),
        );
        assert!(!record.has_parties());
        Ok(())
    }

    #[test]
    fn unrelated_page() -> anyhow::Result<()> {
        let record = case_page("<html><p>No records found</p></html>", BASE)?;
        assert!(!record.has_parties());
        assert!(record.orders.is_empty());
        Ok(())
    }

    #[test]
    fn missing_status_is_unknown() -> anyhow::Result<()> {
        let page = r#"<table>
            <tr><td>Petitioner</td><td>Ram Kumar</td></tr>
            <tr><td>Respondent</td><td>Shyam Lal</td></tr>
        </table>"#;
        let record = case_page(page, BASE)?;
        assert!(record.has_parties());
        assert_eq!(record.case_status.as_deref(), Some("Unknown"));
        assert_eq!(record.filing_date, None);
        Ok(())
    }

    #[test]
    fn captcha() {
        let page = r#"<form><img src="/captcha.php" alt="CAPTCHA Image"></form>"#;
        assert!(is_captcha(page));
        assert_eq!(case_page(page, BASE), Err(SourceError::Captcha));
    }
}
