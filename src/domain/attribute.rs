//! Inspectable package fields.
//!
//! Every field a catalog entry exposes is an [`Attribute`]. Attributes have a
//! fixed ordinal order (used by the info pane), a single-character hotkey
//! (used in filter, search, sort and color-code input) and a display name.
//!
//! The "none" sentinel of the mapping is expressed as `Option::None`:
//! unknown characters never fail, they simply map to nothing.

/// A field of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    Name,
    Version,
    Repository,
    Description,
    Url,
    Licenses,
    Groups,
    Provides,
    Depends,
    OptionalDepends,
    Conflicts,
    Replaces,
    Architecture,
    Packager,
    DownloadSize,
    InstalledSize,
    BuildDate,
    InstallDate,
    InstallReason,
    InstallState,
}

impl Attribute {
    /// Number of attributes (excluding the sentinel).
    pub const COUNT: usize = 20;

    /// All attributes in ordinal order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Name,
        Self::Version,
        Self::Repository,
        Self::Description,
        Self::Url,
        Self::Licenses,
        Self::Groups,
        Self::Provides,
        Self::Depends,
        Self::OptionalDepends,
        Self::Conflicts,
        Self::Replaces,
        Self::Architecture,
        Self::Packager,
        Self::DownloadSize,
        Self::InstalledSize,
        Self::BuildDate,
        Self::InstallDate,
        Self::InstallReason,
        Self::InstallState,
    ];

    /// Ordinal position of the attribute.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Maps a hotkey character to its attribute.
    ///
    /// Mapping is case-sensitive. Unknown characters yield `None`.
    ///
    /// ```
    /// use pkgview::domain::Attribute;
    ///
    /// assert_eq!(Attribute::from_char('n'), Some(Attribute::Name));
    /// assert_eq!(Attribute::from_char('D'), Some(Attribute::Depends));
    /// assert_eq!(Attribute::from_char('#'), None);
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|attr| attr.to_char() == c)
    }

    /// Hotkey character of the attribute.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Name => 'n',
            Self::Version => 'v',
            Self::Repository => 'r',
            Self::Description => 'd',
            Self::Url => 'u',
            Self::Licenses => 'l',
            Self::Groups => 'g',
            Self::Provides => 'p',
            Self::Depends => 'D',
            Self::OptionalDepends => 'o',
            Self::Conflicts => 'c',
            Self::Replaces => 'R',
            Self::Architecture => 'a',
            Self::Packager => 'P',
            Self::DownloadSize => 's',
            Self::InstalledSize => 'S',
            Self::BuildDate => 'b',
            Self::InstallDate => 'i',
            Self::InstallReason => 'e',
            Self::InstallState => 'I',
        }
    }

    /// Human-readable name of the attribute.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Version => "Version",
            Self::Repository => "Repository",
            Self::Description => "Description",
            Self::Url => "Url",
            Self::Licenses => "Licenses",
            Self::Groups => "Groups",
            Self::Provides => "Provides",
            Self::Depends => "Depends",
            Self::OptionalDepends => "Optional depends",
            Self::Conflicts => "Conflicts",
            Self::Replaces => "Replaces",
            Self::Architecture => "Architecture",
            Self::Packager => "Packager",
            Self::DownloadSize => "Download size",
            Self::InstalledSize => "Installed size",
            Self::BuildDate => "Build date",
            Self::InstallDate => "Install date",
            Self::InstallReason => "Install reason",
            Self::InstallState => "Install state",
        }
    }

    /// Returns the first attribute named by any character of `text`.
    ///
    /// Characters that do not map to an attribute are skipped. Used by the
    /// sort and color-code commands.
    #[must_use]
    pub fn first_in(text: &str) -> Option<Self> {
        text.chars().find_map(Self::from_char)
    }

    /// Position of the hotkey inside the display name, compared
    /// case-insensitively. Used to highlight the key in captions.
    #[must_use]
    pub fn hotkey_position(self) -> Option<usize> {
        let key = self.to_char().to_ascii_lowercase();
        self.name()
            .chars()
            .position(|c| c.to_ascii_lowercase() == key)
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn char_mapping_round_trips_for_every_attribute() {
        for attr in Attribute::ALL {
            assert_eq!(Attribute::from_char(attr.to_char()), Some(attr));
        }
    }

    #[test]
    fn hotkeys_are_unique() {
        let keys: HashSet<char> = Attribute::ALL.iter().map(|a| a.to_char()).collect();
        assert_eq!(keys.len(), Attribute::COUNT);
    }

    #[test]
    fn ordinal_order_matches_all() {
        for (i, attr) in Attribute::ALL.iter().enumerate() {
            assert_eq!(attr.index(), i);
        }
    }

    #[test]
    fn unknown_characters_map_to_none() {
        for c in ['#', 'x', 'Z', '1', ' ', ':'] {
            assert_eq!(Attribute::from_char(c), None, "{c}");
        }
    }

    #[test]
    fn first_in_skips_invalid_characters() {
        assert_eq!(Attribute::first_in("#!xv"), Some(Attribute::Version));
        assert_eq!(Attribute::first_in("xyz"), None);
        assert_eq!(Attribute::first_in(""), None);
    }

    #[test]
    fn every_hotkey_appears_in_its_caption() {
        for attr in Attribute::ALL {
            assert!(attr.hotkey_position().is_some(), "{attr:?}");
        }
    }
}
