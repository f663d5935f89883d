//! Configuration constants and settings for the converter.

use std::path::{Path, PathBuf};

/// Label written into every generated document's metadata.
pub const DATA_SOURCE: &str = "BotanBot XML Export";

/// Orders dated on or after this day count as recent.
pub const RECENT_ORDER_CUTOFF: &str = "2025-01-01";

/// Sort key used for history entries without a date.
pub const UNDATED_SORT_KEY: &str = "1900-01-01";

/// Directory holding the raw export, relative to the base path.
pub const EXPORT_DIR: &str = "susko.ai";

/// Client address documents, one per client.
pub const CLIENT_DIR: &str = "Adressen";

/// Extension of client documents (matched case-sensitively).
pub const CLIENT_EXTENSION: &str = "XML";

/// Article documents, one per product.
pub const PRODUCT_DIR: &str = "Artikel";

/// Extension of article documents (matched case-sensitively).
pub const PRODUCT_EXTENSION: &str = "xml";

/// Combined order history document.
pub const HISTORY_FILE: &str = "History/AdresseHistory-Komplett.xml";

/// Output directory for per-client documents, relative to the base path.
pub const CLIENT_OUTPUT_DIR: &str = "data";

/// Master product catalog file name.
pub const PRODUCTS_FILE: &str = "products.json";

/// Run summary file name.
pub const SUMMARY_FILE: &str = "conversion_summary.json";

/// Converter configuration.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Root under which inputs and outputs are resolved.
    pub base_path: PathBuf,
    /// Lower bound (inclusive, ISO date) for the recent-orders count.
    pub recent_order_cutoff: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("."),
            recent_order_cutoff: RECENT_ORDER_CUTOFF.to_string(),
        }
    }
}

impl ConverterConfig {
    /// Create a configuration rooted at `base_path`.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            ..Default::default()
        }
    }

    fn export_root(&self) -> PathBuf {
        self.base_path.join(EXPORT_DIR)
    }

    /// Directory scanned for client documents.
    pub fn client_dir(&self) -> PathBuf {
        self.export_root().join(CLIENT_DIR)
    }

    /// Directory scanned for product documents.
    pub fn product_dir(&self) -> PathBuf {
        self.export_root().join(PRODUCT_DIR)
    }

    /// Path of the combined history document.
    pub fn history_file(&self) -> PathBuf {
        self.export_root().join(HISTORY_FILE)
    }

    /// Directory receiving `{client_number}.json` files.
    pub fn client_output_dir(&self) -> PathBuf {
        self.base_path.join(CLIENT_OUTPUT_DIR)
    }

    /// Path of a single client's output document.
    pub fn client_output_file(&self, client_number: &str) -> PathBuf {
        self.client_output_dir()
            .join(format!("{}.json", client_number))
    }

    /// Path of the product catalog.
    pub fn products_file(&self) -> PathBuf {
        self.base_path.join(PRODUCTS_FILE)
    }

    /// Path of the run summary.
    pub fn summary_file(&self) -> PathBuf {
        self.base_path.join(SUMMARY_FILE)
    }

    /// Root the configuration resolves against.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}
