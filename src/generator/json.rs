//! Writing composite documents as indented JSON.

use serde::Serialize;
use std::path::Path;
use tracing::{error, info};

use crate::config::ConverterConfig;
use crate::error::{ConvertError, Result};
use crate::model::{ClientDocument, ProductCatalog, SummaryReport};

/// Serialize with two-space indentation. Non-ASCII text is written as-is.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Serialize `value` to `path`, replacing any existing file.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = to_json_pretty(value)?;
    std::fs::write(path, json).map_err(|e| ConvertError::io(path, e))
}

/// Write one file per client into the client output directory.
///
/// A failing client is logged and skipped. Returns the number of files written.
pub fn write_client_documents(
    config: &ConverterConfig,
    documents: impl IntoIterator<Item = ClientDocument>,
) -> usize {
    info!("Creating client JSON files...");
    let mut created = 0;

    for document in documents {
        let client_number = &document.metadata.client_number;
        let path = config.client_output_file(client_number);
        match write_json(&path, &document) {
            Ok(()) => created += 1,
            Err(e) => error!("Error creating file for client {}: {}", client_number, e),
        }
    }

    info!("Created {} client JSON files", created);
    created
}

/// Write the product catalog. Returns whether the file was written.
pub fn write_product_catalog(config: &ConverterConfig, catalog: &ProductCatalog) -> bool {
    info!("Creating products JSON file...");
    let path = config.products_file();

    match write_json(&path, catalog) {
        Ok(()) => {
            info!(
                "Created {} with {} products",
                path.display(),
                catalog.metadata.total_products
            );
            true
        }
        Err(e) => {
            error!("Error creating products file: {}", e);
            false
        }
    }
}

/// Write the run summary.
pub fn write_summary(config: &ConverterConfig, report: &SummaryReport) -> Result<()> {
    write_json(&config.summary_file(), report)?;
    info!("Generated conversion summary report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClientMetadata, ClientProfile, OrderStatistics};

    fn document(client_number: &str) -> ClientDocument {
        ClientDocument {
            metadata: ClientMetadata {
                generated_at: "2025-10-01T08:00:00.000000".to_string(),
                client_number: client_number.to_string(),
                data_source: "BotanBot XML Export".to_string(),
            },
            client_profile: ClientProfile {
                client_number: client_number.to_string(),
                search_term: "Bäckerei Müller".to_string(),
                ..Default::default()
            },
            order_statistics: OrderStatistics::default(),
            order_history: Vec::new(),
        }
    }

    #[test]
    fn test_json_keeps_non_ascii_and_indents() {
        let json = to_json_pretty(&document("1001")).unwrap();
        assert!(json.contains("Bäckerei Müller"));
        assert!(json.contains("\n  \"metadata\": {\n    \"generated_at\""));
        assert!(json.contains("\"minimum_order_value\": null"));
    }

    #[test]
    fn test_write_client_documents_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConverterConfig::new(dir.path());
        std::fs::create_dir(config.client_output_dir()).unwrap();
        std::fs::write(config.client_output_file("1001"), "stale").unwrap();

        let created = write_client_documents(&config, vec![document("1001"), document("1002")]);
        assert_eq!(created, 2);

        let written = std::fs::read_to_string(config.client_output_file("1001")).unwrap();
        let parsed: ClientDocument = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, document("1001"));
    }

    #[test]
    fn test_write_client_documents_continues_after_failure() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConverterConfig::new(dir.path());
        std::fs::create_dir(config.client_output_dir()).unwrap();
        // A directory in place of the target file makes that single write fail.
        std::fs::create_dir(config.client_output_file("1001")).unwrap();

        let created = write_client_documents(&config, vec![document("1001"), document("1002")]);
        assert_eq!(created, 1);
        assert!(config.client_output_file("1002").is_file());
    }
}
