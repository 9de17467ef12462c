//! Catalog layer supplying package metadata.
//!
//! # Modules
//!
//! - `backend`: [`CatalogSource`] trait
//! - `json`: JSON catalog file implementation
//! - `models`: Serialized record types, separate from [`Package`](crate::domain::Package)

pub mod backend;
pub mod json;
pub mod models;

pub use backend::CatalogSource;
pub use json::JsonCatalog;
pub use models::{CatalogFile, InstallReason, InstalledRecord, PackageRecord, RepositoryRecord};
