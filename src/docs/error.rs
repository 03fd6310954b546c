use std::path::PathBuf;
use thiserror::Error;

/// A payload that does not have the shape of a search index.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("payload is not valid JSON: {0}")]
    Syntax(String),

    #[error("malformed payload: {0}")]
    Shape(String),

    #[error("record {index} is not a mapping")]
    NotARecord { index: usize },

    #[error("record {index} is missing required field(s): {}", fields.join(", "))]
    MissingFields {
        index: usize,
        fields: Vec<&'static str>,
    },

    #[error("record {index}: field `{field}` must be a string")]
    FieldType { index: usize, field: &'static str },
}

impl SchemaError {
    /// Index of the offending record, when the failure is tied to one
    pub fn index(&self) -> Option<usize> {
        match self {
            SchemaError::NotARecord { index }
            | SchemaError::MissingFields { index, .. }
            | SchemaError::FieldType { index, .. } => Some(*index),
            SchemaError::Syntax(_) | SchemaError::Shape(_) => None,
        }
    }
}

/// Main error type for index operations
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no record at location '{location}'")]
    NotFound { location: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, IndexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_display() {
        let err = SchemaError::MissingFields {
            index: 3,
            fields: vec!["title", "text"],
        };
        assert_eq!(
            err.to_string(),
            "record 3 is missing required field(s): title, text"
        );
        assert_eq!(err.index(), Some(3));
    }

    #[test]
    fn test_shape_error_has_no_index() {
        assert_eq!(SchemaError::Shape("empty".into()).index(), None);
        assert_eq!(SchemaError::Syntax("eof".into()).index(), None);
    }

    #[test]
    fn test_not_found_display() {
        let err = IndexError::NotFound {
            location: "#missing".to_string(),
        };
        assert_eq!(err.to_string(), "no record at location '#missing'");
    }
}
