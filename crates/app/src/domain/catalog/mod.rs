//! Catalog

pub mod data;
pub mod errors;
pub mod records;
pub mod repository;
pub mod service;

pub use errors::CatalogServiceError;
pub use records::{CategoryRecord, CategoryUuid, ProductRecord, ProductUuid};
pub use repository::{CatalogRepository, MemoryCatalogRepository};
pub use service::CatalogService;
