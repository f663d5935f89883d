//! Combined order history document (`History/AdresseHistory-Komplett.xml`).

use roxmltree::Node;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

use super::fields::{decode_date, decode_float, decode_text};
use super::xml::{child, children, parse_document, read_document};
use crate::model::OrderHistoryEntry;

/// Order lines per client number, newest first.
pub type OrderHistory = BTreeMap<String, Vec<OrderHistoryEntry>>;

/// Load the history document at `path`.
///
/// A missing or unreadable document is logged and treated as empty history.
pub fn load_order_history(path: &Path) -> OrderHistory {
    info!("Loading order history...");

    if !path.exists() {
        warn!("History file not found: {}", path.display());
        return OrderHistory::new();
    }

    let history = read_document(path).and_then(|text| {
        let doc = parse_document(path, &text)?;
        Ok(parse_history(doc.root_element()))
    });

    match history {
        Ok(history) => {
            info!("Loaded order history for {} clients", history.len());
            history
        }
        Err(e) => {
            warn!("Error parsing history file: {}", e);
            OrderHistory::new()
        }
    }
}

/// Collect all `History` records below `root`, grouped and sorted per client.
///
/// Records lacking a client or article number are dropped. Undated entries sort
/// last; entries with equal dates keep document order.
pub fn parse_history(root: Node<'_, '_>) -> OrderHistory {
    let mut history = OrderHistory::new();

    for record in children(root, "History") {
        let Some((client_number, entry)) = parse_entry(record) else {
            debug!("Skipping history record without client or article number");
            continue;
        };
        history.entry(client_number).or_default().push(entry);
    }

    for entries in history.values_mut() {
        entries.sort_by(|a, b| b.sort_key().cmp(a.sort_key()));
    }

    history
}

fn parse_entry(record: Node<'_, '_>) -> Option<(String, OrderHistoryEntry)> {
    let text = |name: &str| decode_text(child(record, name));

    let client_number = text("AdrNr");
    let article_number = text("ArtNr");
    if client_number.is_empty() || article_number.is_empty() {
        return None;
    }

    let entry = OrderHistoryEntry {
        article_number,
        date: decode_date(&text("Dat")),
        booking_quantity: decode_float(&text("BuchMge")),
        quantity: decode_float(&text("Mge")),
        unit: text("Einh"),
        article_info: None,
    };
    Some((client_number, entry))
}
