//! Composite documents written to disk.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ClientProfile, OrderHistoryEntry, ProductRecord};

/// Per-client output: profile, statistics and enriched history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientDocument {
    pub metadata: ClientMetadata,
    pub client_profile: ClientProfile,
    pub order_statistics: OrderStatistics,
    pub order_history: Vec<OrderHistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientMetadata {
    pub generated_at: String,
    pub client_number: String,
    pub data_source: String,
}

/// Aggregates over a client's order history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderStatistics {
    pub total_orders: usize,
    pub unique_articles_ordered: usize,
    pub recent_orders_count: usize,
    pub last_order_date: Option<String>,
}

/// Master product catalog, grouped and flat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCatalog {
    pub metadata: ProductCatalogMetadata,
    pub product_categories: BTreeMap<String, Vec<ProductRecord>>,
    pub uncategorized_products: Vec<ProductRecord>,
    pub all_products: Vec<ProductRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCatalogMetadata {
    pub generated_at: String,
    pub total_products: usize,
    pub categories_count: usize,
    pub data_source: String,
}

/// Run summary document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub conversion_summary: ConversionSummary,
    pub data_quality_notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionSummary {
    pub timestamp: String,
    pub total_clients: usize,
    pub total_products: usize,
    pub total_clients_with_history: usize,
    pub files_created: FilesCreated,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilesCreated {
    pub client_files: usize,
    pub products_file: usize,
}
