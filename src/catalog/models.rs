//! Catalog file record models.
//!
//! These are the serialized shapes of the catalog file. They are kept apart
//! from [`Package`](crate::domain::Package), which is the flat attribute
//! table the controller works with.

use serde::{Deserialize, Serialize};

/// Top-level catalog document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Sync repositories in priority order.
    #[serde(default)]
    pub repositories: Vec<RepositoryRecord>,

    /// Packages installed on the local system.
    #[serde(default)]
    pub installed: Vec<InstalledRecord>,
}

/// One repository and its package list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    #[serde(default)]
    pub packages: Vec<PackageRecord>,
}

/// Package metadata as published by a repository.
///
/// Every field except `name` is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageRecord {
    pub name: String,
    pub version: String,
    pub description: String,
    pub url: String,
    pub licenses: Vec<String>,
    pub groups: Vec<String>,
    pub provides: Vec<String>,
    pub depends: Vec<String>,
    pub optional_depends: Vec<String>,
    pub conflicts: Vec<String>,
    pub replaces: Vec<String>,
    pub architecture: String,
    pub packager: String,

    /// Compressed size in bytes.
    pub download_size: Option<u64>,

    /// Unpacked size in bytes.
    pub installed_size: Option<u64>,

    /// Unix timestamp.
    pub build_date: Option<i64>,
}

/// Why a package is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallReason {
    #[default]
    Explicit,
    Dependency,
}

impl InstallReason {
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Explicit => "Explicitly installed",
            Self::Dependency => "Installed as a dependency for another package",
        }
    }
}

/// Local install record. Carries the full package metadata so packages
/// missing from every repository can still be shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledRecord {
    #[serde(flatten)]
    pub package: PackageRecord,

    /// Unix timestamp.
    #[serde(default)]
    pub install_date: Option<i64>,

    #[serde(default)]
    pub install_reason: InstallReason,
}
