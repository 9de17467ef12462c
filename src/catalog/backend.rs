//! Catalog source abstraction.
//!
//! This module defines the [`CatalogSource`] trait that hides where package
//! metadata comes from. The runtime only ever asks for the complete list,
//! at startup and on reload.

use crate::domain::error::Result;
use crate::domain::Package;

/// Supplier of the package catalog.
///
/// # Implementations
///
/// - [`JsonCatalog`](super::JsonCatalog): reads a JSON catalog file
///
/// # Examples
///
/// ```no_run
/// use pkgview::catalog::{CatalogSource, JsonCatalog};
///
/// let catalog = JsonCatalog::new("/var/cache/pkgview/catalog.json");
/// let packages = catalog.load()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait CatalogSource {
    /// Loads every package, sorted by name, one entry per name.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or parsed. Catalog
    /// failures are fatal to the caller.
    fn load(&self) -> Result<Vec<Package>>;
}

impl<T: CatalogSource + ?Sized> CatalogSource for Box<T> {
    fn load(&self) -> Result<Vec<Package>> {
        (**self).load()
    }
}
