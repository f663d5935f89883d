//! Product record loaded from an article document.

use serde::{Deserialize, Serialize};

/// A catalog article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Unique article identifier (`ArtNr`).
    pub article_number: String,
    pub barcode: String,
    pub short_description: String,
    pub long_description: String,
    pub weight: Option<f64>,
    pub unit: String,
    pub price_quantity: Option<f64>,
    pub tax_key: String,
    pub product_group: ProductGroup,
    pub pricing: Pricing,
    pub delivery_time_days: Option<f64>,
    pub attributes: ProductAttributes,
    pub restaurant_categories: RestaurantCategories,
    /// Image file references, empty slots dropped.
    pub images: Vec<String>,
    pub packaging: Packaging,
}

impl ProductRecord {
    /// Category used to group the catalog; `None` for uncategorized articles.
    pub fn category(&self) -> Option<&str> {
        let description = self.product_group.description.as_str();
        (!description.is_empty()).then_some(description)
    }
}

/// Product group; the description doubles as catalog category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductGroup {
    pub number: String,
    pub description: String,
}

/// Net price tiers and the optional special price window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    pub vk0_net_price: Option<f64>,
    pub vk0_special_price: Option<f64>,
    pub vk0_special_from: Option<String>,
    pub vk0_special_to: Option<String>,
    pub vk4_net_price: Option<f64>,
    pub vk5_net_price: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductAttributes {
    pub has_weight: bool,
    pub is_order_article: bool,
    pub pre_order_only: bool,
    pub is_blocked: bool,
    pub webshop_enabled: bool,
    pub frozen: bool,
}

/// Restaurant segments an article is tagged for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestaurantCategories {
    pub doener_imbiss: bool,
    pub wurst_imbiss: bool,
    pub cafe: bool,
    pub italiener: bool,
    pub grieche: bool,
    pub asiatische_kueche: bool,
    pub international: bool,
    pub orient: bool,
    pub balkan: bool,
    pub supermaerkte: bool,
    pub baeckerei: bool,
    pub kiosk: bool,
    pub pizza_lieferdienst: bool,
    pub burger_manufaktur: bool,
    pub bars_und_clubs: bool,
}

/// Packaging factors, kept as raw text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Packaging {
    pub unit_factor: String,
    pub quantity_factor: String,
}
