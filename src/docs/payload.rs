use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

use super::error::{IndexError, Result, SchemaError};
use super::types::{Category, DocRecord, IndexStore};

/// Fields every record must carry, in the order they are reported
pub const REQUIRED_FIELDS: [&str; 5] = ["location", "page", "title", "category", "text"];

/// Key the generator stores the record list under
pub const INDEX_KEY: &str = "docs";

lazy_static! {
    /// `var documenterSearchIndex = ` and friends
    static ref ASSIGNMENT: Regex =
        Regex::new(r"^\s*(?:var|let|const)\s+[A-Za-z_$][A-Za-z0-9_$]*\s*=\s*").unwrap();
}

/// Strip the JavaScript assignment the site generator wraps the payload in
fn strip_assignment(raw: &str) -> &str {
    let raw = raw.trim_start_matches('\u{feff}');
    let body = match ASSIGNMENT.find(raw) {
        Some(m) => &raw[m.end()..],
        None => raw,
    };
    body.trim_end().trim_end_matches(';')
}

/// Locate the record sequence inside the top-level mapping
fn record_list(value: &Value) -> std::result::Result<&Vec<Value>, SchemaError> {
    let Value::Object(map) = value else {
        return Err(SchemaError::Shape("top level must be a mapping".to_string()));
    };

    let list = match map.get(INDEX_KEY) {
        Some(list) => list,
        None => {
            let mut values = map.values();
            match (values.next(), values.next()) {
                (Some(only), None) => only,
                (None, _) => {
                    return Err(SchemaError::Shape("top-level mapping is empty".to_string()));
                }
                _ => {
                    return Err(SchemaError::Shape(format!(
                        "expected a single key or a `{}` key, found {} keys",
                        INDEX_KEY,
                        map.len()
                    )));
                }
            }
        }
    };

    list.as_array()
        .ok_or_else(|| SchemaError::Shape("index value must be a sequence".to_string()))
}

fn string_field(
    map: &Map<String, Value>,
    index: usize,
    field: &'static str,
) -> std::result::Result<String, SchemaError> {
    map.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(SchemaError::FieldType { index, field })
}

/// Validate one element; extra keys are ignored
fn parse_record(index: usize, value: &Value) -> std::result::Result<DocRecord, SchemaError> {
    let Value::Object(map) = value else {
        return Err(SchemaError::NotARecord { index });
    };

    let missing: Vec<&'static str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !map.contains_key(*field))
        .collect();
    if !missing.is_empty() {
        return Err(SchemaError::MissingFields {
            index,
            fields: missing,
        });
    }

    Ok(DocRecord {
        location: string_field(map, index, "location")?,
        page: string_field(map, index, "page")?,
        title: string_field(map, index, "title")?,
        category: Category::from(string_field(map, index, "category")?),
        text: string_field(map, index, "text")?,
    })
}

/// Parse and validate a raw payload into records, preserving order
pub fn parse_records(raw: &str) -> std::result::Result<Vec<DocRecord>, SchemaError> {
    let body = strip_assignment(raw);
    let value: Value =
        serde_json::from_str(body).map_err(|e| SchemaError::Syntax(e.to_string()))?;

    record_list(&value)?
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_record(index, entry))
        .collect()
}

impl IndexStore {
    /// Build a store from a raw payload, either bare JSON or the generator's
    /// `var name = {...}` script
    pub fn load(raw: &str) -> Result<Self> {
        let start = Instant::now();
        let records = parse_records(raw)?;
        let store = IndexStore::from_records(records);

        debug!(
            records = store.len(),
            pages = store.pages().len(),
            elapsed = ?start.elapsed(),
            "search index loaded"
        );

        Ok(store)
    }

    /// Read and load a payload file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = raw.len(), "read search index");
        Self::load(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::query::{SearchField, SearchOptions};
    use rstest::rstest;
    use std::io::Write;

    const SAMPLE: &str = include_str!("../../fixtures/search_index.js");

    #[test]
    fn test_load_generator_output() {
        let store = IndexStore::load(SAMPLE).unwrap();
        assert_eq!(store.len(), 5);
        assert_eq!(store.pages(), vec!["Watchfish.jl Documentation"]);

        let first = &store.records()[0];
        assert_eq!(first.location, "#Watchfish.jl-Documentation-1");
        assert_eq!(first.category, Category::Section);
        assert!(first.text.is_empty());

        assert_eq!(store.records()[2].category, Category::Type);
        assert_eq!(store.records()[4].category, Category::Method);
    }

    #[test]
    fn test_model_title_search_on_sample() {
        let store = IndexStore::load(SAMPLE).unwrap();
        let options = SearchOptions::new().fields([SearchField::Title]);
        let found: Vec<&DocRecord> = store.search("model", &options).unwrap().collect();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "WatchFish.Model");
        assert!(found[0].text.contains("Models hold the parameters"));
    }

    #[test]
    fn test_sample_duplicate_anchor_returns_first() {
        let store = IndexStore::load(SAMPLE).unwrap();
        let record = store.get_by_location("#").unwrap();
        assert_eq!(record.category, Category::Page);
        assert_eq!(record.text, "Model");
        assert_eq!(
            store
                .search("", &SearchOptions::new().all_fields())
                .unwrap()
                .filter(|r| r.location == "#")
                .count(),
            2
        );
    }

    #[test]
    fn test_unicode_text_is_searchable() {
        let store = IndexStore::load(SAMPLE).unwrap();
        let found: Vec<_> = store
            .search("(X, Μ", &SearchOptions::default())
            .unwrap()
            .map(|r| r.category.as_str())
            .collect();
        assert_eq!(found, vec!["page", "method"]);
    }

    #[rstest]
    #[case(r##"{"docs": []}"##)]
    #[case(r##"var documenterSearchIndex = {"docs": []}"##)]
    #[case("var documenterSearchIndex = {\"docs\":\n[]\n};\n")]
    #[case(r##"const idx={"docs": []};"##)]
    #[case(r##"{"entries": []}"##)]
    fn test_accepted_wrappers(#[case] raw: &str) {
        let store = IndexStore::load(raw).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let raw = r##"{"docs": [{"location": "#a", "page": "P", "title": "T",
            "category": "keyword", "text": "", "score": 3}], "version": 2}"##;
        let store = IndexStore::load(raw).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].category, Category::Other("keyword".into()));
    }

    #[test]
    fn test_missing_title_names_the_record() {
        let raw = r##"{"docs": [
            {"location": "#a", "page": "P", "title": "A", "category": "section", "text": ""},
            {"location": "#b", "page": "P", "category": "type", "text": "b"}
        ]}"##;
        let err = IndexStore::load(raw).unwrap_err();
        match err {
            IndexError::Schema(SchemaError::MissingFields { index, fields }) => {
                assert_eq!(index, 1);
                assert_eq!(fields, vec!["title"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_every_missing_field_is_reported() {
        let err = parse_records(r##"{"docs": [{"location": "#a"}]}"##).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingFields {
                index: 0,
                fields: vec!["page", "title", "category", "text"],
            }
        );
    }

    #[rstest]
    #[case("not json", None)]
    #[case("[]", None)]
    #[case("{}", None)]
    #[case(r##"{"a": [], "b": []}"##, None)]
    #[case(r##"{"docs": {}}"##, None)]
    #[case(r##"{"docs": [42]}"##, Some(0))]
    #[case(r##"{"docs": [{"location": 1, "page": "", "title": "", "category": "", "text": ""}]}"##, Some(0))]
    #[case(r##"{"docs": [{"location": "", "page": "", "title": null, "category": "", "text": ""}]}"##, Some(0))]
    fn test_schema_rejections(#[case] raw: &str, #[case] index: Option<usize>) {
        let err = parse_records(raw).unwrap_err();
        assert_eq!(err.index(), index);
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let store = IndexStore::from_path(file.path()).unwrap();
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("search_index.js");
        let err = IndexStore::from_path(&path).unwrap_err();
        assert!(matches!(err, IndexError::Io { path: p, .. } if p == path));
    }
}
