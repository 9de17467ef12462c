//! Domain layer for pkgview.
//!
//! This module contains the core domain types, independent of the terminal,
//! the catalog file format and the configuration format.
//!
//! # Organization
//!
//! - [`attribute`]: Inspectable package fields and their hotkey/name mappings
//! - [`error`]: Error types and result aliases
//! - [`package`]: Read-only catalog entry
//!
//! # Examples
//!
//! ```
//! use pkgview::domain::{Attribute, Package};
//!
//! let package = Package::new("bash").with(Attribute::Description, "The GNU Bourne Again shell");
//! assert_eq!(package.attribute(Attribute::Name), "bash");
//! assert_eq!(Attribute::from_char('d'), Some(Attribute::Description));
//! ```

pub mod attribute;
pub mod error;
pub mod package;

pub use attribute::Attribute;
pub use error::{PkgviewError, Result};
pub use package::Package;
