use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::iter::FusedIterator;

use super::error::{IndexError, Result};
use super::types::{DocRecord, IndexStore};

/// Record field a query is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Title,
    Text,
    Page,
}

/// Full Unicode case fold, so `ß`/`SS` and `ς`/`Σ`/`σ` compare equal
/// regardless of surrounding letters
pub(crate) fn fold_case(s: &str) -> String {
    caseless::default_case_fold_str(s)
}

impl SearchField {
    pub const ALL: [SearchField; 3] = [SearchField::Title, SearchField::Text, SearchField::Page];

    fn value(self, record: &DocRecord) -> &str {
        match self {
            SearchField::Title => &record.title,
            SearchField::Text => &record.text,
            SearchField::Page => &record.page,
        }
    }
}

/// Options for [`IndexStore::search`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub fields: BTreeSet<SearchField>,
    pub limit: Option<usize>,
    pub case_sensitive: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            fields: BTreeSet::from([SearchField::Title, SearchField::Text]),
            limit: None,
            case_sensitive: false,
        }
    }
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = SearchField>) -> Self {
        self.fields = fields.into_iter().collect();
        self
    }

    pub fn all_fields(self) -> Self {
        self.fields(SearchField::ALL)
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.fields.is_empty() {
            return Err(IndexError::InvalidArgument(
                "at least one search field is required".to_string(),
            ));
        }
        if self.limit == Some(0) {
            return Err(IndexError::InvalidArgument(
                "limit must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }
}

impl IndexStore {
    /// Substring search over the selected fields.
    ///
    /// Matches come back lazily in index order. An empty query matches every
    /// record. The returned iterator can be cloned or [restarted] to walk the
    /// results again.
    ///
    /// [restarted]: Matches::restart
    pub fn search<'a>(&'a self, query: &str, options: &SearchOptions) -> Result<Matches<'a>> {
        options.validate()?;

        let needle = if options.case_sensitive {
            query.to_string()
        } else {
            fold_case(query)
        };

        Ok(Matches {
            records: self.records(),
            needle,
            fields: options.fields.iter().copied().collect(),
            case_sensitive: options.case_sensitive,
            limit: options.limit,
            position: 0,
            emitted: 0,
        })
    }
}

/// Lazy result sequence produced by [`IndexStore::search`]
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    records: &'a [DocRecord],
    needle: String,
    fields: Vec<SearchField>,
    case_sensitive: bool,
    limit: Option<usize>,
    position: usize,
    emitted: usize,
}

impl Matches<'_> {
    /// Rewind to the first record
    pub fn restart(&mut self) {
        self.position = 0;
        self.emitted = 0;
    }

    fn is_match(&self, record: &DocRecord) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        self.fields.iter().any(|field| {
            let value = field.value(record);
            if self.case_sensitive {
                value.contains(&self.needle)
            } else {
                fold_case(value).contains(&self.needle)
            }
        })
    }

    fn exhausted(&self) -> bool {
        self.limit.is_some_and(|limit| self.emitted >= limit)
    }
}

impl<'a> Iterator for Matches<'a> {
    type Item = &'a DocRecord;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.exhausted() && self.position < self.records.len() {
            let record = &self.records[self.position];
            self.position += 1;
            if self.is_match(record) {
                self.emitted += 1;
                return Some(record);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted() {
            return (0, Some(0));
        }
        let remaining = self.records.len() - self.position;
        let upper = match self.limit {
            Some(limit) => remaining.min(limit - self.emitted),
            None => remaining,
        };
        (0, Some(upper))
    }
}

impl FusedIterator for Matches<'_> {}
