//! Article documents (`Artikel/*.xml`).

use roxmltree::Node;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

use super::fields::{decode_boolean, decode_date, decode_float, decode_text};
use super::xml::{child, parse_document, read_document};
use super::list_documents;
use crate::config::PRODUCT_EXTENSION;
use crate::error::Result;
use crate::model::{
    Packaging, Pricing, ProductAttributes, ProductGroup, ProductRecord, RestaurantCategories,
};

/// Number of positional image slots (`BildDatei1`..`BildDatei5`).
const IMAGE_SLOTS: usize = 5;

/// Load every article document in `dir`, keyed by article number.
pub fn load_products(dir: &Path) -> BTreeMap<String, ProductRecord> {
    info!("Loading product data...");
    let mut products = BTreeMap::new();

    for path in list_documents(dir, PRODUCT_EXTENSION) {
        match parse_product_file(&path) {
            Ok(Some(product)) => {
                products.insert(product.article_number.clone(), product);
            }
            Ok(None) => debug!("No article record in {}", path.display()),
            Err(e) => warn!("Error parsing {}: {}", path.display(), e),
        }
    }

    info!("Loaded {} products", products.len());
    products
}

/// Parse a single article document.
pub fn parse_product_file(path: &Path) -> Result<Option<ProductRecord>> {
    let text = read_document(path)?;
    let doc = parse_document(path, &text)?;
    Ok(parse_product(doc.root_element()))
}

/// Map the `Artikel` record below `root` to a product.
pub fn parse_product(root: Node<'_, '_>) -> Option<ProductRecord> {
    let record = child(root, "Artikel")?;
    let article_number = decode_text(child(record, "ArtNr"));
    if article_number.is_empty() {
        return None;
    }

    let text = |name: &str| decode_text(child(record, name));
    let flag = |name: &str| decode_boolean(&text(name));
    let number = |name: &str| decode_float(&text(name));

    let images = (1..=IMAGE_SLOTS)
        .map(|slot| text(&format!("BildDatei{}", slot)))
        .filter(|image| !image.is_empty())
        .collect();

    Some(ProductRecord {
        article_number,
        barcode: text("BarCd"),
        short_description: text("KuBez1"),
        long_description: text("KuBez6"),
        weight: number("Gew"),
        unit: text("Einh"),
        price_quantity: number("PreisMge"),
        tax_key: text("StSchl"),
        product_group: ProductGroup {
            number: text("WgrNr"),
            description: text("WgrNrInfo"),
        },
        pricing: Pricing {
            vk0_net_price: number("Vk0_PreisNt"),
            vk0_special_price: number("Vk0_SPr"),
            vk0_special_from: decode_date(&text("Vk0_SVonDat")),
            vk0_special_to: decode_date(&text("Vk0_SBisDat")),
            vk4_net_price: number("Vk4_PreisNt"),
            vk5_net_price: number("Vk5_PreisNt"),
        },
        delivery_time_days: number("Lief_LiefZt"),
        attributes: ProductAttributes {
            has_weight: flag("Sel2"),
            is_order_article: flag("Sel3"),
            pre_order_only: flag("Sel4"),
            is_blocked: flag("GspKz"),
            webshop_enabled: flag("WShopKz"),
            frozen: flag("Sel27"),
        },
        restaurant_categories: RestaurantCategories {
            doener_imbiss: flag("Sel81"),
            wurst_imbiss: flag("Sel82"),
            cafe: flag("Sel83"),
            italiener: flag("Sel84"),
            grieche: flag("Sel85"),
            asiatische_kueche: flag("Sel86"),
            international: flag("Sel87"),
            orient: flag("Sel88"),
            balkan: flag("Sel89"),
            supermaerkte: flag("Sel90"),
            baeckerei: flag("Sel91"),
            kiosk: flag("Sel92"),
            pizza_lieferdienst: flag("Sel93"),
            burger_manufaktur: flag("Sel94"),
            bars_und_clubs: flag("Sel95"),
        },
        images,
        packaging: Packaging {
            unit_factor: text("EinhFakt"),
            quantity_factor: text("MgeFakt"),
        },
    })
}
