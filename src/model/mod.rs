//! Data model for converted ERP records.

pub mod client;
pub mod document;
pub mod history;
pub mod product;

pub use client::{AdditionalAddress, Address, ClientProfile, ClientSettings, DeliverySchedule};
pub use document::{
    ClientDocument, ClientMetadata, ConversionSummary, FilesCreated, OrderStatistics,
    ProductCatalog, ProductCatalogMetadata, SummaryReport,
};
pub use history::{ArticleInfo, OrderHistoryEntry};
pub use product::{
    Packaging, Pricing, ProductAttributes, ProductGroup, ProductRecord, RestaurantCategories,
};
