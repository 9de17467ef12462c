//! JSON file catalog source.
//!
//! The catalog file lists the sync repositories with their packages plus the
//! locally installed set. Loading merges the two into one [`Package`] per
//! name:
//!
//! - the first repository that carries a name wins
//! - installed packages found in no repository appear under `local`
//! - install state is `installed`, `not installed` or `outdated` (the
//!   installed version differs from the repository version)
//!
//! # File Format
//!
//! ```json
//! {
//!   "repositories": [
//!     {
//!       "name": "core",
//!       "packages": [
//!         { "name": "bash", "version": "5.2.026-2", "description": "The GNU Bourne Again shell" }
//!       ]
//!     }
//!   ],
//!   "installed": [
//!     { "name": "bash", "version": "5.2.026-2", "install_date": 1714000000, "install_reason": "explicit" }
//!   ]
//! }
//! ```

use super::backend::CatalogSource;
use super::models::{CatalogFile, InstalledRecord, PackageRecord};
use crate::domain::error::{PkgviewError, Result};
use crate::domain::{Attribute, Package};
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Repository name given to installed packages no repository provides.
pub const LOCAL_REPOSITORY: &str = "local";

pub const STATE_INSTALLED: &str = "installed";
pub const STATE_NOT_INSTALLED: &str = "not installed";
pub const STATE_OUTDATED: &str = "outdated";

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Catalog read from a JSON file on every load.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    file_path: PathBuf,
}

impl JsonCatalog {
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Parses catalog JSON text into sorted, deduplicated packages.
    ///
    /// # Errors
    ///
    /// Returns [`PkgviewError::Catalog`] if the text is not a valid catalog.
    pub fn parse(contents: &str) -> Result<Vec<Package>> {
        let file: CatalogFile = serde_json::from_str(contents)
            .map_err(|e| PkgviewError::Catalog(format!("failed to parse JSON: {e}")))?;
        Ok(merge(&file))
    }
}

impl CatalogSource for JsonCatalog {
    fn load(&self) -> Result<Vec<Package>> {
        let _span = tracing::debug_span!("json_catalog_load", path = ?self.file_path).entered();

        let contents = std::fs::read_to_string(&self.file_path).map_err(|e| {
            PkgviewError::Catalog(format!("cannot read {}: {e}", self.file_path.display()))
        })?;
        let packages = Self::parse(&contents)?;

        tracing::debug!(count = packages.len(), "catalog loaded");
        Ok(packages)
    }
}

fn merge(file: &CatalogFile) -> Vec<Package> {
    let installed: HashMap<&str, &InstalledRecord> = file
        .installed
        .iter()
        .map(|record| (record.package.name.as_str(), record))
        .collect();

    let mut seen = HashSet::new();
    let mut packages = Vec::new();

    for repository in &file.repositories {
        for record in &repository.packages {
            if record.name.is_empty() || !seen.insert(record.name.as_str()) {
                continue;
            }
            let local = installed.get(record.name.as_str()).copied();
            packages.push(build_package(record, &repository.name, local));
        }
    }

    for record in &file.installed {
        if !record.package.name.is_empty() && seen.insert(record.package.name.as_str()) {
            packages.push(build_package(&record.package, LOCAL_REPOSITORY, Some(record)));
        }
    }

    tracing::trace!(
        repositories = file.repositories.len(),
        installed = file.installed.len(),
        merged = packages.len(),
        "catalog merged"
    );

    packages.sort_by(|a, b| a.name().cmp(b.name()));
    packages
}

fn build_package(record: &PackageRecord, repository: &str, local: Option<&InstalledRecord>) -> Package {
    let mut package = Package::new(&record.name)
        .with(Attribute::Version, &record.version)
        .with(Attribute::Repository, repository)
        .with(Attribute::Description, &record.description)
        .with(Attribute::Url, &record.url)
        .with(Attribute::Licenses, record.licenses.join(" "))
        .with(Attribute::Groups, record.groups.join(" "))
        .with(Attribute::Provides, record.provides.join(" "))
        .with(Attribute::Depends, record.depends.join(" "))
        .with(Attribute::OptionalDepends, record.optional_depends.join(" "))
        .with(Attribute::Conflicts, record.conflicts.join(" "))
        .with(Attribute::Replaces, record.replaces.join(" "))
        .with(Attribute::Architecture, &record.architecture)
        .with(Attribute::Packager, &record.packager);

    if let Some(size) = record.download_size {
        package.set(Attribute::DownloadSize, format_size(size));
    }
    if let Some(size) = record.installed_size {
        package.set(Attribute::InstalledSize, format_size(size));
    }
    if let Some(date) = record.build_date {
        package.set(Attribute::BuildDate, format_date(date));
    }

    let state = match local {
        Some(local) => {
            if let Some(date) = local.install_date {
                package.set(Attribute::InstallDate, format_date(date));
            }
            package.set(Attribute::InstallReason, local.install_reason.describe());
            if local.package.version == record.version {
                STATE_INSTALLED
            } else {
                STATE_OUTDATED
            }
        }
        None => STATE_NOT_INSTALLED,
    };
    package.set(Attribute::InstallState, state);
    package
}

/// Renders a byte count with binary units, e.g. `1.5 MiB`.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

/// Renders a unix timestamp as a UTC date, empty if out of range.
#[must_use]
pub fn format_date(timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CATALOG: &str = r#"{
        "repositories": [
            { "name": "core", "packages": [
                { "name": "bash", "version": "5.2", "description": "The GNU Bourne Again shell",
                  "licenses": ["GPL-3.0-or-later"], "installed_size": 9437184 },
                { "name": "zsh", "version": "5.9" }
            ]},
            { "name": "extra", "packages": [
                { "name": "bash", "version": "9.9" },
                { "name": "fish", "version": "3.7" }
            ]}
        ],
        "installed": [
            { "name": "bash", "version": "5.2", "install_date": 0, "install_reason": "explicit" },
            { "name": "zsh", "version": "5.8", "install_reason": "dependency" },
            { "name": "mytool", "version": "0.1" }
        ]
    }"#;

    fn find<'a>(packages: &'a [Package], name: &str) -> &'a Package {
        packages.iter().find(|p| p.name() == name).unwrap()
    }

    #[test]
    fn merges_sorted_and_deduplicated() {
        let packages = JsonCatalog::parse(CATALOG).unwrap();
        let names: Vec<&str> = packages.iter().map(Package::name).collect();
        assert_eq!(names, vec!["bash", "fish", "mytool", "zsh"]);
        assert_eq!(find(&packages, "bash").attribute(Attribute::Repository), "core");
        assert_eq!(find(&packages, "bash").attribute(Attribute::Version), "5.2");
    }

    #[test]
    fn derives_install_state() {
        let packages = JsonCatalog::parse(CATALOG).unwrap();
        let state = |name| find(&packages, name).attribute(Attribute::InstallState).to_string();
        assert_eq!(state("bash"), STATE_INSTALLED);
        assert_eq!(state("zsh"), STATE_OUTDATED);
        assert_eq!(state("fish"), STATE_NOT_INSTALLED);
        assert_eq!(state("mytool"), STATE_INSTALLED);
        assert_eq!(find(&packages, "mytool").attribute(Attribute::Repository), LOCAL_REPOSITORY);
    }

    #[test]
    fn renders_dates_sizes_and_reasons() {
        let packages = JsonCatalog::parse(CATALOG).unwrap();
        let bash = find(&packages, "bash");
        assert_eq!(bash.attribute(Attribute::InstalledSize), "9.0 MiB");
        assert_eq!(bash.attribute(Attribute::InstallDate), "1970-01-01 00:00");
        assert_eq!(bash.attribute(Attribute::InstallReason), "Explicitly installed");
        assert_eq!(bash.attribute(Attribute::Licenses), "GPL-3.0-or-later");
        assert_eq!(find(&packages, "fish").attribute(Attribute::InstallReason), "");
    }

    #[test]
    fn format_size_units() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1536), "1.5 KiB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.0 GiB");
    }

    #[test]
    fn load_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();
        let packages = JsonCatalog::new(file.path()).load().unwrap();
        assert_eq!(packages.len(), 4);
    }

    #[test]
    fn missing_file_is_catalog_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonCatalog::new(dir.path().join("absent.json")).load().unwrap_err();
        assert!(matches!(err, PkgviewError::Catalog(_)));
    }

    #[test]
    fn malformed_json_is_catalog_error() {
        let err = JsonCatalog::parse("{ not json").unwrap_err();
        assert!(matches!(err, PkgviewError::Catalog(_)));
    }
}
