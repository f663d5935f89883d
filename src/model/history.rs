//! Order history lines.

use serde::{Deserialize, Serialize};

use super::ProductRecord;

/// One historical order line of a client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderHistoryEntry {
    pub article_number: String,
    pub date: Option<String>,
    pub booking_quantity: Option<f64>,
    pub quantity: Option<f64>,
    pub unit: String,
    /// Product summary, present only when the article is in the catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_info: Option<ArticleInfo>,
}

impl OrderHistoryEntry {
    /// Key used to order a client's history, newest first.
    pub fn sort_key(&self) -> &str {
        self.date
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(crate::config::UNDATED_SORT_KEY)
    }
}

/// Denormalized product data attached to an order line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleInfo {
    pub short_description: String,
    pub long_description: String,
    pub product_group: String,
    pub unit: String,
}

impl From<&ProductRecord> for ArticleInfo {
    fn from(product: &ProductRecord) -> Self {
        Self {
            short_description: product.short_description.clone(),
            long_description: product.long_description.clone(),
            product_group: product.product_group.description.clone(),
            unit: product.unit.clone(),
        }
    }
}
