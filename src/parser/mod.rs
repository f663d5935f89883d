//! Loaders for the ERP XML export.

mod clients;
mod fields;
mod history;
mod products;
mod xml;

use std::path::{Path, PathBuf};
use tracing::warn;

pub use clients::{load_clients, parse_client, parse_client_file};
pub use fields::{decode_boolean, decode_date, decode_float, decode_text};
pub use history::{load_order_history, parse_history, OrderHistory};
pub use products::{load_products, parse_product, parse_product_file};
pub use xml::{child, children, decode_document, parse_document, read_document};

/// Files in `dir` whose extension equals `extension` exactly, in path order.
///
/// Hidden files (leading `.`) are not listed.
/// A missing or unreadable directory yields no files.
pub fn list_documents(dir: &Path, extension: &str) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Cannot read directory {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| !n.starts_with('.'))
        })
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(extension))
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_documents_matches_case_sensitively() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.XML", "a.XML", "c.xml", "notes.txt", ".backup.XML"] {
            std::fs::write(dir.path().join(name), "<r/>").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.XML")).unwrap();

        let upper = list_documents(dir.path(), "XML");
        let names: Vec<_> = upper
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.XML", "b.XML"]);

        assert_eq!(list_documents(dir.path(), "xml").len(), 1);
    }

    #[test]
    fn test_list_documents_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_documents(&dir.path().join("absent"), "XML").is_empty());
    }
}
