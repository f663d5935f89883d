//! Decoders turning raw export text into typed values.
//!
//! The export writes most values as CDATA with German conventions: `,` as decimal
//! separator, `DD.MM.YYYY` dates and `Ja`/`Nein` flags.

use chrono::NaiveDate;
use roxmltree::Node;

/// Trimmed text of a node; empty when the node is missing or blank.
///
/// Text split by comments or processing instructions is joined. Text after the
/// first child element is ignored.
pub fn decode_text(node: Option<Node<'_, '_>>) -> String {
    let Some(node) = node else {
        return String::new();
    };
    let text: String = node
        .children()
        .take_while(|n| !n.is_element())
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();
    text.trim().to_string()
}

/// `ja`, `true` and `1` (any case) are true, everything else is false.
pub fn decode_boolean(text: &str) -> bool {
    matches!(text.to_lowercase().as_str(), "ja" | "true" | "1")
}

/// Parse a decimal with either separator. Blank or invalid text yields `None`.
pub fn decode_float(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Normalize a `DD.MM.YYYY` date to `YYYY-MM-DD`.
///
/// Blank text yields `None`. Text without a `.` and text that fails to parse are
/// returned unchanged.
pub fn decode_date(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }
    if !text.contains('.') {
        return Some(text.to_string());
    }
    if !is_dotted_date(text) {
        return Some(text.to_string());
    }
    match NaiveDate::parse_from_str(text, "%d.%m.%Y") {
        Ok(date) => Some(date.format("%Y-%m-%d").to_string()),
        Err(_) => Some(text.to_string()),
    }
}

/// Day and month of one or two digits, year of exactly four.
fn is_dotted_date(text: &str) -> bool {
    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };
    let parts: Vec<&str> = text.split('.').collect();
    matches!(
        parts.as_slice(),
        [day, month, year] if digits(*day, 1, 2) && digits(*month, 1, 2) && digits(*year, 4, 4)
    )
}
