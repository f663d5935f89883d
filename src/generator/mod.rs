//! JSON output generation.

mod json;
mod summary;

pub use json::{
    to_json_pretty, write_client_documents, write_json, write_product_catalog, write_summary,
};
pub use summary::{build_summary, DATA_QUALITY_NOTES};
