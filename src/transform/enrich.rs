//! Order history enrichment and per-client statistics.

use std::collections::{BTreeMap, HashSet};

use crate::config::DATA_SOURCE;
use crate::model::{
    ArticleInfo, ClientDocument, ClientMetadata, ClientProfile, OrderHistoryEntry,
    OrderStatistics, ProductRecord,
};

/// Copy each order line, attaching product data where the article is known.
pub fn enrich_orders(
    orders: &[OrderHistoryEntry],
    products: &BTreeMap<String, ProductRecord>,
) -> Vec<OrderHistoryEntry> {
    orders
        .iter()
        .map(|order| OrderHistoryEntry {
            article_info: products.get(&order.article_number).map(ArticleInfo::from),
            ..order.clone()
        })
        .collect()
}

/// Aggregate a client's history. `orders` must already be sorted newest first.
///
/// Dates are compared as text, so `recent_cutoff` must be an ISO date.
pub fn order_statistics(orders: &[OrderHistoryEntry], recent_cutoff: &str) -> OrderStatistics {
    let unique_articles: HashSet<&str> = orders
        .iter()
        .map(|o| o.article_number.as_str())
        .collect();

    let recent_orders_count = orders
        .iter()
        .filter_map(|o| o.date.as_deref())
        .filter(|date| !date.is_empty() && *date >= recent_cutoff)
        .count();

    OrderStatistics {
        total_orders: orders.len(),
        unique_articles_ordered: unique_articles.len(),
        recent_orders_count,
        last_order_date: orders.first().and_then(|o| o.date.clone()),
    }
}

/// Assemble the output document for one client.
pub fn build_client_document(
    client: &ClientProfile,
    orders: &[OrderHistoryEntry],
    products: &BTreeMap<String, ProductRecord>,
    recent_cutoff: &str,
    generated_at: &str,
) -> ClientDocument {
    let order_history = enrich_orders(orders, products);
    let order_statistics = order_statistics(&order_history, recent_cutoff);

    ClientDocument {
        metadata: ClientMetadata {
            generated_at: generated_at.to_string(),
            client_number: client.client_number.clone(),
            data_source: DATA_SOURCE.to_string(),
        },
        client_profile: client.clone(),
        order_statistics,
        order_history,
    }
}
