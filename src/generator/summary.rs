//! Run summary report.

use crate::model::{ConversionSummary, FilesCreated, SummaryReport};

/// Notes describing the normalization applied to the export.
pub const DATA_QUALITY_NOTES: [&str; 6] = [
    "All dates converted to ISO format (YYYY-MM-DD)",
    "German decimal separators (,) converted to international format (.)",
    "Boolean values normalized to true/false",
    "Empty CDATA values converted to empty strings or null",
    "Order history sorted by date (most recent first)",
    "Products categorized by product groups for better organization",
];

/// Build the summary for a finished run.
pub fn build_summary(
    timestamp: &str,
    total_clients: usize,
    total_products: usize,
    total_clients_with_history: usize,
    files_created: FilesCreated,
) -> SummaryReport {
    SummaryReport {
        conversion_summary: ConversionSummary {
            timestamp: timestamp.to_string(),
            total_clients,
            total_products,
            total_clients_with_history,
            files_created,
        },
        data_quality_notes: DATA_QUALITY_NOTES.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_summary() {
        let report = build_summary(
            "2025-10-01T08:00:00.000000",
            3,
            10,
            4,
            FilesCreated {
                client_files: 3,
                products_file: 1,
            },
        );
        let summary = &report.conversion_summary;
        assert_eq!(summary.total_clients, 3);
        assert_eq!(summary.total_clients_with_history, 4);
        assert_eq!(summary.files_created.products_file, 1);
        assert_eq!(report.data_quality_notes.len(), 6);
        assert_eq!(
            report.data_quality_notes[0],
            "All dates converted to ISO format (YYYY-MM-DD)"
        );
    }
}
