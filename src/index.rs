//! In-memory name index over a catalog.
//!
//! Built once from [`Catalog::scan`] and grouped by style, the index answers
//! substring and prefix queries with catalog entry ids, so accessors only
//! run for icons that actually match.

use crate::catalog::Catalog;
use crate::style::IconStyle;

#[derive(Debug, Clone)]
struct IndexedName {
    key: String,
    entry: usize,
}

/// Catalog entry ids grouped by style and sorted by lower-cased name.
#[derive(Debug, Clone, Default)]
pub struct IconIndex {
    by_style: [Vec<IndexedName>; IconStyle::ALL.len()],
    keys: Vec<String>,
}

impl IconIndex {
    /// Indexes every entry of `catalog`, one namespace scan per style.
    pub fn build(catalog: &Catalog) -> Self {
        let mut index = Self {
            keys: catalog.iter().map(|e| e.name().to_lowercase()).collect(),
            ..Self::default()
        };

        for style in IconStyle::ALL {
            let prefix = style.namespace_prefix();
            let names = &mut index.by_style[style.ordinal()];
            names.extend(catalog.scan(&prefix).map(|(entry, _)| IndexedName {
                key: index.keys[entry].clone(),
                entry,
            }));
            names.sort_by(|a, b| a.key.cmp(&b.key).then(a.entry.cmp(&b.entry)));
        }

        tracing::info!(entries = index.keys.len(), "built icon index");
        index
    }

    /// Number of indexed icons in `style`.
    pub fn len(&self, style: IconStyle) -> usize {
        self.by_style[style.ordinal()].len()
    }

    /// Entry ids in `style` whose name contains `query`, ignoring case.
    ///
    /// An empty query matches every icon of the style.
    pub fn search(&self, style: IconStyle, query: &str) -> Vec<usize> {
        let needle = query.to_lowercase();
        self.by_style[style.ordinal()]
            .iter()
            .filter(|name| name.key.contains(&needle))
            .map(|name| name.entry)
            .collect()
    }

    /// Narrows a previous hit list to the entries whose name contains `query`.
    ///
    /// Only valid when the query that produced `hits` is a substring of
    /// `query`: every name matching the new query then already is a hit.
    pub fn refine(&self, hits: &[usize], query: &str) -> Vec<usize> {
        let needle = query.to_lowercase();
        hits.iter()
            .copied()
            .filter(|&entry| self.keys.get(entry).is_some_and(|key| key.contains(&needle)))
            .collect()
    }

    /// Entry ids in `style` whose name starts with `prefix`, ignoring case.
    pub fn prefix(&self, style: IconStyle, prefix: &str) -> Vec<usize> {
        let needle = prefix.to_lowercase();
        let names = &self.by_style[style.ordinal()];
        let start = names.partition_point(|name| name.key.as_str() < needle.as_str());
        names[start..]
            .iter()
            .take_while(|name| name.key.starts_with(&needle))
            .map(|name| name.entry)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;
    use crate::vector::VectorIcon;

    static PATHS: &[&str] = &["M4 4h16v16H4z"];

    fn catalog() -> Catalog {
        fn zebra(style: IconStyle) -> VectorIcon {
            VectorIcon::new(style, "Zebra", PATHS)
        }
        fn apple(style: IconStyle) -> VectorIcon {
            VectorIcon::new(style, "Apple", PATHS)
        }
        fn apricot(style: IconStyle) -> VectorIcon {
            VectorIcon::new(style, "Apricot", PATHS)
        }
        Catalog::new([
            CatalogEntry::new(IconStyle::Filled, "Zebra", zebra),
            CatalogEntry::new(IconStyle::Filled, "Apple", apple),
            CatalogEntry::new(IconStyle::Filled, "Apricot", apricot),
            CatalogEntry::new(IconStyle::Sharp, "Apple", apple),
        ])
    }

    fn names(catalog: &Catalog, ids: &[usize]) -> Vec<&'static str> {
        ids.iter().map(|&id| catalog.entry(id).unwrap().name()).collect()
    }

    #[test]
    fn search_is_sorted_and_case_insensitive() {
        let catalog = catalog();
        let index = IconIndex::build(&catalog);

        let all = index.search(IconStyle::Filled, "");
        assert_eq!(names(&catalog, &all), ["Apple", "Apricot", "Zebra"]);
        let ap = index.search(IconStyle::Filled, "AP");
        assert_eq!(names(&catalog, &ap), ["Apple", "Apricot"]);
        assert!(index.search(IconStyle::TwoTone, "").is_empty());
        assert_eq!(index.len(IconStyle::Sharp), 1);
    }

    #[test]
    fn refine_matches_full_search() {
        let catalog = catalog();
        let index = IconIndex::build(&catalog);

        let broad = index.search(IconStyle::Filled, "a");
        assert_eq!(index.refine(&broad, "apr"), index.search(IconStyle::Filled, "apr"));
    }

    #[test]
    fn prefix_uses_sorted_order() {
        let catalog = catalog();
        let index = IconIndex::build(&catalog);

        assert_eq!(names(&catalog, &index.prefix(IconStyle::Filled, "ap")), ["Apple", "Apricot"]);
        assert_eq!(names(&catalog, &index.prefix(IconStyle::Filled, "z")), ["Zebra"]);
        assert!(index.prefix(IconStyle::Filled, "q").is_empty());
    }
}
