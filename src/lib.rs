//! erp-convert-rs - Convert a legacy ERP XML export to normalized JSON.
//!
//! The export consists of one document per client address, one document per
//! article and a combined order history. The conversion produces:
//!
//! - `data/{client_number}.json` with the client profile, order statistics and the
//!   order history enriched with product data
//! - `products.json`, the product catalog grouped by product group
//! - `conversion_summary.json` with run totals
//!
//! # Example
//!
//! ```no_run
//! use erp_convert_rs::{ConverterConfig, DataConverter};
//!
//! let mut converter = DataConverter::new(ConverterConfig::new("/srv/export"));
//! let summary = converter.convert_all().unwrap();
//! println!("{} clients", summary.conversion_summary.total_clients);
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod parser;
pub mod transform;

use std::collections::BTreeMap;
use tracing::info;

// Re-exports for convenience
pub use config::ConverterConfig;
pub use error::{ConvertError, Result};
pub use model::{ClientDocument, ClientProfile, OrderHistoryEntry, ProductRecord, SummaryReport};
pub use parser::{load_clients, load_order_history, load_products, OrderHistory};

use model::FilesCreated;

/// Current local time as ISO-8601 with microseconds.
pub fn timestamp_now() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

/// State of a single conversion run.
#[derive(Debug)]
pub struct DataConverter {
    config: ConverterConfig,
    generated_at: String,
    clients: BTreeMap<String, ClientProfile>,
    products: BTreeMap<String, ProductRecord>,
    order_history: OrderHistory,
}

impl DataConverter {
    /// Create a converter stamped with the current time.
    pub fn new(config: ConverterConfig) -> Self {
        Self::with_timestamp(config, timestamp_now())
    }

    /// Create a converter with a fixed `generated_at` value.
    pub fn with_timestamp(config: ConverterConfig, generated_at: impl Into<String>) -> Self {
        Self {
            config,
            generated_at: generated_at.into(),
            clients: BTreeMap::new(),
            products: BTreeMap::new(),
            order_history: OrderHistory::new(),
        }
    }

    /// Load clients, products and order history from the export.
    pub fn load_all(&mut self) {
        self.clients = load_clients(&self.config.client_dir());
        self.products = load_products(&self.config.product_dir());
        self.order_history = load_order_history(&self.config.history_file());
    }

    /// Output documents for every loaded client, in client number order.
    ///
    /// History of client numbers without a profile is not included.
    pub fn client_documents(&self) -> impl Iterator<Item = ClientDocument> + '_ {
        self.clients.values().map(|client| {
            let orders = self
                .order_history
                .get(&client.client_number)
                .map(Vec::as_slice)
                .unwrap_or_default();
            transform::build_client_document(
                client,
                orders,
                &self.products,
                &self.config.recent_order_cutoff,
                &self.generated_at,
            )
        })
    }

    /// Run the full conversion and write all output files.
    ///
    /// Per-file failures are logged and skipped. Errors creating the output
    /// directory or writing the summary abort the run.
    pub fn convert_all(&mut self) -> Result<SummaryReport> {
        info!("Starting data conversion process...");
        info!("{}", "=".repeat(50));

        let output_dir = self.config.client_output_dir();
        std::fs::create_dir_all(&output_dir).map_err(|e| ConvertError::io(&output_dir, e))?;

        self.load_all();

        let client_files =
            generator::write_client_documents(&self.config, self.client_documents());

        let catalog = transform::build_product_catalog(&self.products, &self.generated_at);
        let products_written = generator::write_product_catalog(&self.config, &catalog);

        let summary = generator::build_summary(
            &self.generated_at,
            self.clients.len(),
            self.products.len(),
            self.order_history.len(),
            FilesCreated {
                client_files,
                products_file: usize::from(products_written),
            },
        );
        generator::write_summary(&self.config, &summary)?;

        let totals = &summary.conversion_summary;
        info!("{}", "=".repeat(50));
        info!("Conversion completed successfully!");
        info!(
            "• {} client files created in '{}'",
            totals.files_created.client_files,
            output_dir.display()
        );
        info!(
            "• {} products file created as '{}'",
            totals.files_created.products_file,
            self.config.products_file().display()
        );
        info!(
            "• {} clients have order history",
            totals.total_clients_with_history
        );
        info!(
            "• Summary report saved as '{}'",
            self.config.summary_file().display()
        );

        Ok(summary)
    }

    pub fn clients(&self) -> &BTreeMap<String, ClientProfile> {
        &self.clients
    }

    pub fn products(&self) -> &BTreeMap<String, ProductRecord> {
        &self.products
    }

    pub fn order_history(&self) -> &OrderHistory {
        &self.order_history
    }
}
