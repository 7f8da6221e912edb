//! Icon lookup and filtered queries over a catalog.

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::index::IconIndex;
use crate::selection::Selection;
use crate::style::IconStyle;
use crate::vector::VectorIcon;

/// Resolves icons by name and runs substring queries over a catalog.
///
/// The name index is built once at construction; every call re-invokes the
/// matching accessors, so returned icons are never shared or cached.
///
/// # Example
///
/// ```
/// use maticonsearch::{IconResolver, IconStyle};
///
/// let resolver = IconResolver::bundled();
/// let search = resolver.resolve("Search", IconStyle::TwoTone).unwrap();
/// assert_eq!(search.qualified_name(), "TwoTone.Search");
///
/// let hits = resolver.query(Some("search"), IconStyle::TwoTone);
/// assert!(hits.iter().any(|icon| icon.name() == "Search"));
/// ```
#[derive(Debug, Clone)]
pub struct IconResolver {
    catalog: Catalog,
    index: IconIndex,
}

impl IconResolver {
    pub fn new(catalog: Catalog) -> Self {
        let index = IconIndex::build(&catalog);
        Self { catalog, index }
    }

    /// A resolver over the icons bundled with this crate.
    pub fn bundled() -> Self {
        Self::new(Catalog::bundled().clone())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn index(&self) -> &IconIndex {
        &self.index
    }

    /// Looks up `icons.<style>.<name>` and invokes its accessor.
    pub fn resolve(&self, name: &str, style: IconStyle) -> Result<VectorIcon> {
        self.catalog
            .lookup(style, name)
            .map(|entry| entry.invoke())
            .ok_or_else(|| Error::icon_not_found(style, name))
    }

    /// Like [`resolve`](Self::resolve), defaulting a missing style to
    /// [`IconStyle::Filled`].
    pub fn resolve_or_default(&self, name: &str, style: Option<IconStyle>) -> Result<VectorIcon> {
        self.resolve(name, style.unwrap_or_default())
    }

    /// Resolves the icon a picker session returned.
    pub fn resolve_selection(&self, selection: &Selection) -> Result<VectorIcon> {
        self.resolve(&selection.name, selection.style)
    }

    /// Every icon of `style` whose name contains `substring`, ignoring case.
    ///
    /// An absent or empty substring retains every icon of the style. Results
    /// are ordered by lower-cased name and contain no duplicates.
    pub fn query(&self, substring: Option<&str>, style: IconStyle) -> Vec<VectorIcon> {
        let hits = self.hits(substring, style);
        tracing::debug!(?substring, %style, matches = hits.len(), "icon query");
        self.materialize(&hits, || false).unwrap_or_default()
    }

    /// [`query`](Self::query) with the style given as a string tag.
    ///
    /// An unrecognised tag matches nothing.
    pub fn query_tagged(&self, substring: Option<&str>, tag: &str) -> Vec<VectorIcon> {
        match tag.parse::<IconStyle>() {
            Ok(style) => self.query(substring, style),
            Err(_) => {
                tracing::warn!(tag, "query for unknown icon style");
                Vec::new()
            }
        }
    }

    /// Names in `style` starting with `prefix`, ignoring case.
    pub fn complete(&self, prefix: &str, style: IconStyle) -> Vec<&'static str> {
        self.index
            .prefix(style, prefix)
            .into_iter()
            .filter_map(|id| self.catalog.entry(id).map(|entry| entry.name()))
            .collect()
    }

    /// Catalog entry ids matching a query, without invoking any accessor.
    pub fn hits(&self, substring: Option<&str>, style: IconStyle) -> Vec<usize> {
        self.index.search(style, substring.unwrap_or_default())
    }

    /// Invokes the accessors for `hits`, in order.
    ///
    /// `is_cancelled` is checked before every invocation; `None` means the
    /// query was abandoned part way.
    pub fn materialize(
        &self,
        hits: &[usize],
        is_cancelled: impl Fn() -> bool,
    ) -> Option<Vec<VectorIcon>> {
        let mut icons = Vec::with_capacity(hits.len());
        for &id in hits {
            if is_cancelled() {
                return None;
            }
            if let Some(entry) = self.catalog.entry(id) {
                icons.push(entry.invoke());
            }
        }
        Some(icons)
    }
}

impl Default for IconResolver {
    fn default() -> Self {
        Self::bundled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashSet;

    fn resolver() -> IconResolver {
        IconResolver::bundled()
    }

    #[test]
    fn empty_query_returns_whole_namespace_without_duplicates() {
        let resolver = resolver();
        for style in IconStyle::ALL {
            let icons = resolver.query(Some(""), style);
            let unique: HashSet<_> = icons.iter().cloned().collect();
            assert_eq!(unique.len(), icons.len());
            assert_eq!(icons.len(), resolver.index().len(style));
            assert!(icons.iter().all(|icon| icon.style() == style));
            assert_eq!(resolver.query(None, style), icons);
        }
    }

    #[test]
    fn substring_filter_is_exact_and_case_insensitive() {
        let resolver = resolver();
        for style in IconStyle::ALL {
            for query in ["SEARCH", "e", "list", "Fi"] {
                let needle = query.to_lowercase();
                let hits: HashSet<_> = resolver.query(Some(query), style).into_iter().collect();
                let expected: HashSet<_> = resolver
                    .query(None, style)
                    .into_iter()
                    .filter(|icon| icon.name().to_lowercase().contains(&needle))
                    .collect();
                assert_eq!(hits, expected, "{query} in {style}");
            }
        }
    }

    #[test]
    fn resolve_inverts_query() {
        let resolver = resolver();
        for style in IconStyle::ALL {
            for icon in resolver.query(None, style) {
                let resolved = resolver.resolve(icon.name(), icon.style()).unwrap();
                assert_eq!(resolved, icon);
                assert_eq!(resolved.name(), icon.name());
            }
        }
    }

    #[test]
    fn two_tone_search_scenario() {
        let resolver = resolver();
        let names: Vec<_> = resolver
            .query(Some("search"), IconStyle::TwoTone)
            .iter()
            .map(|icon| icon.name().to_string())
            .collect();
        assert_eq!(names, ["ManageSearch", "SavedSearch", "Search"]);

        for style in IconStyle::ALL {
            assert!(resolver.query(Some("zzzznotreal"), style).is_empty());
        }
    }

    #[test]
    fn unknown_style_tag_is_empty_result() {
        let resolver = resolver();
        assert!(resolver.query_tagged(None, "Glossy").is_empty());
        assert_eq!(resolver.query_tagged(Some("wifi"), "twotone").len(), 1);
    }

    #[test]
    fn missing_icon_is_not_found() {
        let err = resolver().resolve("Verified", IconStyle::Sharp).unwrap_err();
        assert!(matches!(
            err,
            Error::IconNotFound { style: IconStyle::Sharp, ref name } if name == "Verified"
        ));
    }

    #[test]
    fn missing_style_defaults_to_filled() {
        let icon = resolver().resolve_or_default("Home", None).unwrap();
        assert_eq!(icon.style(), IconStyle::Filled);
    }

    #[test]
    fn resolves_selection() {
        let selection: Selection = "Outlined.Lock".parse().unwrap();
        let icon = resolver().resolve_selection(&selection).unwrap();
        assert_eq!(icon.selection(), selection);
    }

    #[test]
    fn complete_lists_prefixed_names() {
        let names = resolver().complete("s", IconStyle::Sharp);
        assert_eq!(names, ["SavedSearch", "Search", "Settings", "Star"]);
    }

    #[test]
    fn materialize_stops_when_cancelled() {
        let resolver = resolver();
        let hits = resolver.hits(None, IconStyle::Filled);
        let calls = Cell::new(0);
        let result = resolver.materialize(&hits, || {
            calls.set(calls.get() + 1);
            calls.get() > 3
        });
        assert!(result.is_none());
        assert_eq!(calls.get(), 4);
    }
}
