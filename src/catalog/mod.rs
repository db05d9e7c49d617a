//! Catalog model: categories, entries, and the store that resolves them
//!
//! A catalog is a closed [`Category`] enum paired with a list of [`Entry`]
//! values. [`CatalogStore`] holds the category → entries mapping, built once
//! through [`CatalogBuilder`] and immutable afterwards, and resolves an entry
//! to a [`Destination`].
//!
//! # Resolution
//!
//! Every entry either carries a [`Route`] or it does not. Routed entries
//! resolve to [`Destination::Screen`]; the rest resolve to a
//! [`Placeholder`] carrying the entry title. Resolution is total: it never
//! fails and repeated calls return equal results.
//!
//! Titles double as route-table keys, so the builder rejects duplicates.

pub mod builtin;
pub mod route;

pub use route::Route;

use crate::error::CatalogError;
use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

/// A closed enumeration of topic tags.
///
/// Iteration order is the declaration order, expressed through `Ord`.
pub trait Category: Copy + Eq + Ord + Hash + fmt::Debug + 'static {
    /// Every variant, in declaration order
    const ALL: &'static [Self];

    /// Section header text
    fn title(self) -> &'static str;

    /// Glyph shown before the section header
    fn icon(self) -> &'static str;
}

/// Identifier unique for the lifetime of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

static NEXT_ENTRY_ID: AtomicU64 = AtomicU64::new(1);

impl EntryId {
    fn next() -> Self {
        EntryId(NEXT_ENTRY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Unattached entry data, handed to [`CatalogBuilder::section`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySpec {
    pub title: &'static str,
    pub description: &'static str,
    pub route: Option<Route>,
}

/// Shorthand for building an [`EntrySpec`].
///
/// Pass a [`Route`] for implemented screens and `None` for topics that should
/// fall back to the placeholder.
pub fn entry(
    title: &'static str,
    description: &'static str,
    route: impl Into<Option<Route>>,
) -> EntrySpec {
    EntrySpec {
        title,
        description,
        route: route.into(),
    }
}

/// A single catalog item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<C: Category> {
    pub id: EntryId,
    pub title: &'static str,
    pub description: &'static str,
    pub category: C,
    pub route: Option<Route>,
}

/// Generic fallback screen for entries without a destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub title: String,
}

impl Placeholder {
    pub const MESSAGE: &'static str = "Not implemented yet";

    pub fn new(title: impl Into<String>) -> Self {
        Placeholder {
            title: title.into(),
        }
    }
}

/// Where selecting an entry leads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Screen { title: String, route: Route },
    Placeholder(Placeholder),
}

impl Destination {
    pub fn title(&self) -> &str {
        match self {
            Destination::Screen { title, .. } => title,
            Destination::Placeholder(p) => &p.title,
        }
    }

    pub fn route(&self) -> Option<Route> {
        match self {
            Destination::Screen { route, .. } => Some(*route),
            Destination::Placeholder(_) => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Destination::Placeholder(_))
    }
}

/// Collects sections and validates them into a [`CatalogStore`]
pub struct CatalogBuilder<C: Category> {
    sections: Vec<(C, Vec<EntrySpec>)>,
}

impl<C: Category> CatalogBuilder<C> {
    /// Populate `category` with `entries`, in order.
    ///
    /// An empty entry list leaves the category unpopulated.
    pub fn section(mut self, category: C, entries: impl IntoIterator<Item = EntrySpec>) -> Self {
        self.sections.push((category, entries.into_iter().collect()));
        self
    }

    pub fn build(self) -> Result<CatalogStore<C>, CatalogError> {
        let mut by_category: FxHashMap<C, Vec<Entry<C>>> = FxHashMap::default();
        let mut titles: FxHashMap<&'static str, (C, usize)> = FxHashMap::default();
        let mut seen: Vec<C> = Vec::new();

        for (category, specs) in self.sections {
            if seen.contains(&category) {
                return Err(CatalogError::DuplicateCategory {
                    category: category.title().to_string(),
                });
            }
            seen.push(category);
            if specs.is_empty() {
                continue;
            }

            let mut entries = Vec::with_capacity(specs.len());
            for spec in specs {
                if let Some((owner, _)) = titles.get(spec.title) {
                    return Err(CatalogError::DuplicateTitle {
                        title: spec.title.to_string(),
                        first: owner.title().to_string(),
                        second: category.title().to_string(),
                    });
                }
                titles.insert(spec.title, (category, entries.len()));
                entries.push(Entry {
                    id: EntryId::next(),
                    title: spec.title,
                    description: spec.description,
                    category,
                    route: spec.route,
                });
            }
            by_category.insert(category, entries);
        }

        let mut categories: Vec<C> = by_category.keys().copied().collect();
        categories.sort();

        Ok(CatalogStore {
            by_category,
            titles,
            categories,
        })
    }
}

/// Immutable category → entries mapping with title-based route table
#[derive(Debug, Clone)]
pub struct CatalogStore<C: Category> {
    by_category: FxHashMap<C, Vec<Entry<C>>>,
    /// Title → (category, index into that category's entries)
    titles: FxHashMap<&'static str, (C, usize)>,
    /// Populated categories, sorted
    categories: Vec<C>,
}

impl<C: Category> CatalogStore<C> {
    pub fn builder() -> CatalogBuilder<C> {
        CatalogBuilder {
            sections: Vec::new(),
        }
    }

    /// Entries of `category` in insertion order; empty if never populated
    pub fn entries(&self, category: C) -> &[Entry<C>] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Populated categories in ascending order
    pub fn categories(&self) -> Vec<C> {
        self.categories.clone()
    }

    /// `(category, entries)` pairs in [`categories`](Self::categories) order
    pub fn sections(&self) -> impl Iterator<Item = (C, &[Entry<C>])> + '_ {
        self.categories.iter().map(|&c| (c, self.entries(c)))
    }

    /// All entries, section by section
    pub fn iter(&self) -> impl Iterator<Item = &Entry<C>> + '_ {
        self.sections().flat_map(|(_, entries)| entries.iter())
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn find(&self, title: &str) -> Option<&Entry<C>> {
        let &(category, index) = self.titles.get(title)?;
        self.entries(category).get(index)
    }

    /// Resolve an entry to the screen it opens
    pub fn destination(&self, entry: &Entry<C>) -> Destination {
        match entry.route {
            Some(route) => Destination::Screen {
                title: entry.title.to_string(),
                route,
            },
            None => Destination::Placeholder(Placeholder::new(entry.title)),
        }
    }

    /// Route-table lookup by title; unknown titles get a placeholder
    pub fn resolve(&self, title: &str) -> Destination {
        match self.find(title) {
            Some(entry) => self.destination(entry),
            None => Destination::Placeholder(Placeholder::new(title)),
        }
    }

    /// Entries that resolve to the placeholder
    pub fn placeholders(&self) -> Vec<&Entry<C>> {
        self.iter().filter(|e| e.route.is_none()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    enum Topic {
        Alpha,
        Beta,
        Gamma,
    }

    impl Category for Topic {
        const ALL: &'static [Self] = &[Topic::Alpha, Topic::Beta, Topic::Gamma];

        fn title(self) -> &'static str {
            match self {
                Topic::Alpha => "Alpha",
                Topic::Beta => "Beta",
                Topic::Gamma => "Gamma",
            }
        }

        fn icon(self) -> &'static str {
            "*"
        }
    }

    #[test]
    fn test_empty_section_is_not_populated() {
        let store = CatalogStore::builder()
            .section(Topic::Alpha, Vec::new())
            .section(Topic::Beta, [entry("b", "", Route::Text)])
            .build()
            .unwrap();
        assert_eq!(store.categories(), vec![Topic::Beta]);
        assert!(store.entries(Topic::Alpha).is_empty());
    }

    #[test]
    fn test_categories_sorted_by_declaration() {
        let store = CatalogStore::builder()
            .section(Topic::Gamma, [entry("g", "", None)])
            .section(Topic::Alpha, [entry("a", "", None)])
            .build()
            .unwrap();
        assert_eq!(store.categories(), vec![Topic::Alpha, Topic::Gamma]);
    }

    #[test]
    fn test_entry_ids_are_distinct() {
        let store = CatalogStore::builder()
            .section(Topic::Alpha, [entry("a", "", None), entry("b", "", None)])
            .build()
            .unwrap();
        let ids: Vec<_> = store.iter().map(|e| e.id).collect();
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_duplicate_title_reports_both_categories() {
        let err = CatalogStore::builder()
            .section(Topic::Alpha, [entry("same", "", None)])
            .section(Topic::Beta, [entry("same", "", None)])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateTitle {
                title: "same".into(),
                first: "Alpha".into(),
                second: "Beta".into(),
            }
        );
    }
}
