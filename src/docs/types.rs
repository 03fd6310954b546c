use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{IndexError, Result};
use super::query::fold_case;

/// Kind of entry a record describes.
///
/// The generator may emit tags this crate has never seen; those are kept
/// verbatim in [`Category::Other`] so they survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Section,
    Page,
    Type,
    Method,
    Function,
    Macro,
    Constant,
    Module,
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Section => "section",
            Category::Page => "page",
            Category::Type => "type",
            Category::Method => "method",
            Category::Function => "function",
            Category::Macro => "macro",
            Category::Constant => "constant",
            Category::Module => "module",
            Category::Other(tag) => tag,
        }
    }

    /// Whether this entry documents a symbol rather than prose
    pub fn is_api(&self) -> bool {
        !matches!(self, Category::Section | Category::Page)
    }
}

impl From<String> for Category {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "section" => Category::Section,
            "page" => Category::Page,
            "type" => Category::Type,
            "method" => Category::Method,
            "function" => Category::Function,
            "macro" => Category::Macro,
            "constant" => Category::Constant,
            "module" => Category::Module,
            _ => Category::Other(tag),
        }
    }
}

impl From<&str> for Category {
    fn from(tag: &str) -> Self {
        Category::from(tag.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One searchable entry of the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocRecord {
    /// Anchor on the page, e.g. `#WatchFish.Model`
    pub location: String,
    pub page: String,
    pub title: String,
    pub category: Category,
    /// Documentation body; may carry markup and may be empty
    pub text: String,
}

/// Immutable, ordered collection of records.
///
/// Built once and then shared by reference; nothing mutates it after
/// construction.
#[derive(Debug, Clone, Default)]
pub struct IndexStore {
    records: Vec<DocRecord>,
}

impl IndexStore {
    /// Wrap already validated records, keeping their order
    pub fn from_records(records: Vec<DocRecord>) -> Self {
        IndexStore { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[DocRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DocRecord> {
        self.records.iter()
    }

    /// Lookup a record by its exact anchor.
    ///
    /// Anchors are not guaranteed unique, so the first record in index order
    /// wins. Use [`IndexStore::search`] to see every record.
    pub fn get_by_location(&self, location: &str) -> Result<&DocRecord> {
        self.records
            .iter()
            .find(|r| r.location == location)
            .ok_or_else(|| IndexError::NotFound {
                location: location.to_string(),
            })
    }

    /// Distinct page titles in first-seen order
    pub fn pages(&self) -> Vec<&str> {
        let mut pages: Vec<&str> = Vec::new();
        for record in &self.records {
            if !pages.contains(&record.page.as_str()) {
                pages.push(&record.page);
            }
        }
        pages
    }

    /// All records that belong to a page, in index order
    pub fn records_on_page<'a>(&'a self, page: &'a str) -> impl Iterator<Item = &'a DocRecord> {
        self.records.iter().filter(move |r| r.page == page)
    }

    /// Record count per category, ordered by first appearance
    pub fn category_counts(&self) -> Vec<(&Category, usize)> {
        let mut counts: Vec<(&Category, usize)> = Vec::new();
        for record in &self.records {
            match counts.iter_mut().find(|(c, _)| *c == &record.category) {
                Some((_, n)) => *n += 1,
                None => counts.push((&record.category, 1)),
            }
        }
        counts
    }

    /// Locations containing `query` (case-folded), deduplicated, for
    /// "did you mean" hints after a failed lookup
    pub fn suggest_locations(&self, query: &str, max: usize) -> Vec<&str> {
        let query_folded = fold_case(query);
        let mut suggestions: Vec<&str> = Vec::new();
        for record in &self.records {
            if suggestions.len() >= max {
                break;
            }
            let location = record.location.as_str();
            if fold_case(location).contains(&query_folded) && !suggestions.contains(&location) {
                suggestions.push(location);
            }
        }
        suggestions
    }
}

impl<'a> IntoIterator for &'a IndexStore {
    type Item = &'a DocRecord;
    type IntoIter = std::slice::Iter<'a, DocRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(
        location: &str,
        page: &str,
        title: &str,
        category: &str,
        text: &str,
    ) -> DocRecord {
        DocRecord {
            location: location.to_string(),
            page: page.to_string(),
            title: title.to_string(),
            category: Category::from(category),
            text: text.to_string(),
        }
    }

    pub(crate) fn sample_store() -> IndexStore {
        IndexStore::from_records(vec![
            record("#intro-1", "Guide", "Guide", "section", ""),
            record("#Pkg.Model", "API", "Pkg.Model", "type", "Models hold the parameters"),
            record("#Pkg.fit", "API", "Pkg.fit", "method", "fit(model, data)"),
            record("#Pkg.fit", "API", "Pkg.fit", "method", "fit(model, data; iters)"),
            record("#usage", "Guide", "Usage", "section", "Call fit on a Model"),
        ])
    }

    #[test]
    fn test_category_known_tags() {
        assert_eq!(Category::from("section"), Category::Section);
        assert_eq!(Category::from("type"), Category::Type);
        assert_eq!(Category::from("method"), Category::Method);
        assert!(Category::Method.is_api());
        assert!(!Category::Page.is_api());
    }

    #[test]
    fn test_category_unknown_tag_is_preserved() {
        let category = Category::from("keyword");
        assert_eq!(category, Category::Other("keyword".to_string()));
        assert_eq!(category.to_string(), "keyword");
        assert_eq!(String::from(category), "keyword");
    }

    #[test]
    fn test_category_serde() {
        let category: Category = serde_json::from_str("\"abstract\"").unwrap();
        assert_eq!(category, Category::Other("abstract".to_string()));
        assert_eq!(serde_json::to_string(&Category::Type).unwrap(), "\"type\"");
    }

    #[test]
    fn test_get_by_location_first_match() {
        let store = sample_store();
        let found = store.get_by_location("#Pkg.fit").unwrap();
        assert_eq!(found.location, "#Pkg.fit");
        assert_eq!(found.text, "fit(model, data)");
    }

    #[test]
    fn test_get_by_location_not_found() {
        let store = sample_store();
        let err = store.get_by_location("#nope").unwrap_err();
        assert!(matches!(err, IndexError::NotFound { location } if location == "#nope"));
    }

    #[test]
    fn test_pages_in_first_seen_order() {
        let store = sample_store();
        assert_eq!(store.pages(), vec!["Guide", "API"]);
        assert_eq!(store.records_on_page("API").count(), 3);
        assert_eq!(store.records_on_page("Missing").count(), 0);
    }

    #[test]
    fn test_category_counts() {
        let store = sample_store();
        let counts = store.category_counts();
        assert_eq!(
            counts,
            vec![
                (&Category::Section, 2),
                (&Category::Type, 1),
                (&Category::Method, 2)
            ]
        );
    }

    #[test]
    fn test_suggest_locations() {
        let store = sample_store();
        assert_eq!(store.suggest_locations("pkg", 5), vec!["#Pkg.Model", "#Pkg.fit"]);
        assert_eq!(store.suggest_locations("PKG", 1), vec!["#Pkg.Model"]);
        assert!(store.suggest_locations("zzz", 5).is_empty());
    }

    #[test]
    fn test_store_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IndexStore>();
    }

    #[test]
    fn test_empty_store() {
        let store = IndexStore::default();
        assert!(store.is_empty());
        assert!(store.pages().is_empty());
        assert!(store.get_by_location("#").is_err());
    }
}
