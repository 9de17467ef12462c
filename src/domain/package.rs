//! Catalog entry model.
//!
//! A [`Package`] is a read-only record exposing a text value for every
//! [`Attribute`]. Packages are identified by their name: queue and view
//! membership is always tested on [`Package::key`], never on addresses, so a
//! package recreated by a catalog reload is still the same entry.

use super::attribute::Attribute;

/// A single entry of the package catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    values: Vec<String>,
}

impl Package {
    /// Creates a package with the given name and every other attribute empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use pkgview::domain::{Attribute, Package};
    ///
    /// let package = Package::new("zsh");
    /// assert_eq!(package.name(), "zsh");
    /// assert_eq!(package.attribute(Attribute::Description), "");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let mut values = vec![String::new(); Attribute::COUNT];
        values[Attribute::Name.index()] = name.into();
        Self { values }
    }

    /// Returns the package with `attr` set to `value`.
    #[must_use]
    pub fn with(mut self, attr: Attribute, value: impl Into<String>) -> Self {
        self.set(attr, value);
        self
    }

    /// Sets the text of a single attribute.
    pub fn set(&mut self, attr: Attribute, value: impl Into<String>) {
        self.values[attr.index()] = value.into();
    }

    /// Text of the given attribute. Missing values are empty strings.
    #[must_use]
    pub fn attribute(&self, attr: Attribute) -> &str {
        &self.values[attr.index()]
    }

    /// Package name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.attribute(Attribute::Name)
    }

    /// Stable identity key.
    #[must_use]
    pub fn key(&self) -> &str {
        self.name()
    }

    /// Iterates over every non-empty attribute in ordinal order.
    pub fn populated(&self) -> impl Iterator<Item = (Attribute, &str)> {
        Attribute::ALL
            .into_iter()
            .map(|attr| (attr, self.attribute(attr)))
            .filter(|(_, text)| !text.is_empty())
    }
}
