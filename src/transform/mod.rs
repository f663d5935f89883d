//! Joining loaded records into output documents.

mod catalog;
mod enrich;

pub use catalog::{build_product_catalog, categorize_products};
pub use enrich::{build_client_document, enrich_orders, order_statistics};
