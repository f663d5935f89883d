//! Product catalog grouped by product group.

use std::collections::BTreeMap;

use crate::config::DATA_SOURCE;
use crate::model::{ProductCatalog, ProductCatalogMetadata, ProductRecord};

/// Split products into named categories and an uncategorized list.
pub fn categorize_products<'a>(
    products: impl IntoIterator<Item = &'a ProductRecord>,
) -> (BTreeMap<String, Vec<ProductRecord>>, Vec<ProductRecord>) {
    let mut categories: BTreeMap<String, Vec<ProductRecord>> = BTreeMap::new();
    let mut uncategorized = Vec::new();

    for product in products {
        match product.category() {
            Some(category) => categories
                .entry(category.to_string())
                .or_default()
                .push(product.clone()),
            None => uncategorized.push(product.clone()),
        }
    }

    (categories, uncategorized)
}

/// Assemble the master catalog document.
pub fn build_product_catalog(
    products: &BTreeMap<String, ProductRecord>,
    generated_at: &str,
) -> ProductCatalog {
    let (product_categories, uncategorized_products) = categorize_products(products.values());

    ProductCatalog {
        metadata: ProductCatalogMetadata {
            generated_at: generated_at.to_string(),
            total_products: products.len(),
            categories_count: product_categories.len(),
            data_source: DATA_SOURCE.to_string(),
        },
        product_categories,
        uncategorized_products,
        all_products: products.values().cloned().collect(),
    }
}
