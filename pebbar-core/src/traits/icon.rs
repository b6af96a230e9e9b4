//! Icon name resolution

/// Identifier of a bundled image resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResourceId(pub u32);

/// Resolves a symbolic icon name to a bundled resource
pub trait IconLookup {
    /// Returns `None` when the name is unknown
    fn lookup(&self, name: &str) -> Option<ResourceId>;
}

/// Icon lookup over a static name table
///
/// The table is usually generated at build time from the icon directory.
/// Names match exactly; the empty name never matches.
#[derive(Debug, Clone, Copy)]
pub struct IconTable<'a> {
    entries: &'a [(&'a str, ResourceId)],
}

impl<'a> IconTable<'a> {
    pub const fn new(entries: &'a [(&'a str, ResourceId)]) -> Self {
        Self { entries }
    }

    /// Number of known icons
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IconLookup for IconTable<'_> {
    fn lookup(&self, name: &str) -> Option<ResourceId> {
        if name.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, id)| *id)
    }
}
