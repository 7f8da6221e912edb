//! The catalog of icon accessors.
//!
//! Every icon available at runtime is a [`CatalogEntry`]: a style, a name and
//! an [`Accessor`] that produces the [`VectorIcon`] when invoked with the
//! style tag. Entries are addressed by their path,
//! `icons.<style-namespace>.<Name>`, and [`Catalog::scan`] walks every entry
//! under a namespace prefix.
//!
//! The bundled catalog is generated at compile time by the `icon_catalog!`
//! manifest in [`bundled`], so there is nothing to discover at runtime.

mod bundled;

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::style::{IconStyle, NAMESPACE};
use crate::vector::VectorIcon;

/// A function that materialises an icon for the given style.
pub type Accessor = fn(IconStyle) -> VectorIcon;

/// One icon accessor registered in the catalog.
#[derive(Clone, Copy)]
pub struct CatalogEntry {
    style: IconStyle,
    name: &'static str,
    accessor: Accessor,
}

impl CatalogEntry {
    pub const fn new(style: IconStyle, name: &'static str, accessor: Accessor) -> Self {
        Self {
            style,
            name,
            accessor,
        }
    }

    pub fn style(&self) -> IconStyle {
        self.style
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The fully-qualified path, e.g. `"icons.twotone.Search"`.
    pub fn path(&self) -> String {
        entry_path(self.style, self.name)
    }

    /// Invokes the accessor with this entry's style tag.
    pub fn invoke(&self) -> VectorIcon {
        (self.accessor)(self.style)
    }
}

impl fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CatalogEntry").field(&self.path()).finish()
    }
}

fn entry_path(style: IconStyle, name: &str) -> String {
    format!("{NAMESPACE}.{}.{name}", style.namespace())
}

/// The set of icon accessors available to resolvers.
///
/// Entries keep their registration order. A `(style, name)` pair is
/// registered at most once: later duplicates are dropped.
#[derive(Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    paths: Vec<String>,
    by_path: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from a list of entries, dropping duplicate paths.
    pub fn new(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut catalog = Self {
            entries: Vec::new(),
            paths: Vec::new(),
            by_path: HashMap::new(),
        };

        for entry in entries {
            let path = entry.path();
            if catalog.by_path.contains_key(&path) {
                tracing::warn!(%path, "dropping duplicate catalog entry");
                continue;
            }
            catalog.by_path.insert(path.clone(), catalog.entries.len());
            catalog.paths.push(path);
            catalog.entries.push(entry);
        }

        catalog
    }

    /// The catalog of icons bundled with this crate.
    pub fn bundled() -> &'static Catalog {
        static BUNDLED: OnceLock<Catalog> = OnceLock::new();
        BUNDLED.get_or_init(|| {
            let catalog = Catalog::new(bundled::ENTRIES.iter().copied());
            tracing::info!(entries = catalog.len(), "loaded bundled icon catalog");
            catalog
        })
    }

    /// Lazily yields every entry whose path starts with `prefix`.
    ///
    /// Use [`IconStyle::namespace_prefix`] to restrict the scan to one style.
    pub fn scan<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (usize, &'a CatalogEntry)> + 'a {
        self.paths
            .iter()
            .enumerate()
            .filter(move |(_, path)| path.starts_with(prefix))
            .map(|(id, _)| (id, &self.entries[id]))
    }

    /// Finds the entry for an exact `(style, name)` pair.
    ///
    /// Names are case-sensitive.
    pub fn lookup(&self, style: IconStyle, name: &str) -> Option<&CatalogEntry> {
        self.by_path
            .get(&entry_path(style, name))
            .map(|&id| &self.entries[id])
    }

    pub fn entry(&self, id: usize) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Styles in which an icon named `name` exists.
    pub fn styles_of(&self, name: &str) -> Vec<IconStyle> {
        IconStyle::ALL
            .into_iter()
            .filter(|&style| self.lookup(style, name).is_some())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("entries", &self.entries.len())
            .finish()
    }
}
