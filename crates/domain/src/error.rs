//! Unified error type for document decoding
//!
//! Every decode path (role, roster, script, share link) fails fast with a
//! `DocumentError`. Encoding never fails: the model only holds values that
//! were validated on the way in.

use serde_json::Value;
use thiserror::Error;

/// Result alias used throughout the domain crate
pub type Result<T> = std::result::Result<T, DocumentError>;

/// Errors raised while turning JSON documents into the typed model
#[derive(Debug, Error)]
pub enum DocumentError {
    /// A required key was absent (or null)
    #[error("required field {key} missing")]
    MissingRequiredField { key: String },

    /// A key was present but held the wrong JSON type
    #[error("error converting {key}: {value}")]
    TypeMismatch { key: String, value: Value },

    /// A string field held a value outside its closed vocabulary
    #[error("value {value} was invalid for {key}, must be one of [{}]", .permitted.join(", "))]
    InvalidEnumValue {
        key: String,
        value: String,
        permitted: Vec<&'static str>,
    },

    /// An image entry could not be parsed as a URL
    #[error("invalid url in {key}: {source}")]
    InvalidUrl {
        key: String,
        #[source]
        source: url::ParseError,
    },

    /// The bytes were not valid JSON
    #[error("malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// The JSON was valid but did not have the document shape
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// A share link could not be unpacked
    #[error("invalid share url: {0}")]
    ShareUrl(String),
}

impl DocumentError {
    /// Create a missing required field error
    pub fn missing(key: impl Into<String>) -> Self {
        Self::MissingRequiredField { key: key.into() }
    }

    /// Create a type mismatch error carrying the offending raw value
    pub fn type_mismatch(key: impl Into<String>, value: &Value) -> Self {
        Self::TypeMismatch {
            key: key.into(),
            value: value.clone(),
        }
    }

    /// Create an invalid enum value error listing the permitted set
    pub fn invalid_enum(
        key: impl Into<String>,
        value: impl Into<String>,
        permitted: &[&'static str],
    ) -> Self {
        Self::InvalidEnumValue {
            key: key.into(),
            value: value.into(),
            permitted: permitted.to_vec(),
        }
    }

    /// Create an invalid URL error
    pub fn invalid_url(key: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidUrl {
            key: key.into(),
            source,
        }
    }

    /// Create a structural document error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedDocument(msg.into())
    }

    /// Create a share link error
    pub fn share_url(msg: impl Into<String>) -> Self {
        Self::ShareUrl(msg.into())
    }

    /// The document key this error refers to, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::MissingRequiredField { key }
            | Self::TypeMismatch { key, .. }
            | Self::InvalidEnumValue { key, .. }
            | Self::InvalidUrl { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Re-key a field error raised inside a nested object so that it reports
    /// the full path, e.g. `reason` inside the first jinx becomes
    /// `jinxes[0].reason`.
    pub fn nested(self, parent: &str, index: usize) -> Self {
        let prefix = |key: String| format!("{parent}[{index}].{key}");
        match self {
            Self::MissingRequiredField { key } => Self::MissingRequiredField { key: prefix(key) },
            Self::TypeMismatch { key, value } => Self::TypeMismatch {
                key: prefix(key),
                value,
            },
            Self::InvalidEnumValue {
                key,
                value,
                permitted,
            } => Self::InvalidEnumValue {
                key: prefix(key),
                value,
                permitted,
            },
            Self::InvalidUrl { key, source } => Self::InvalidUrl {
                key: prefix(key),
                source,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_field_error() {
        let err = DocumentError::missing("name");
        assert!(matches!(err, DocumentError::MissingRequiredField { .. }));
        assert_eq!(err.to_string(), "required field name missing");
        assert_eq!(err.key(), Some("name"));
    }

    #[test]
    fn test_type_mismatch_error_shows_raw_value() {
        let err = DocumentError::type_mismatch("setup", &json!("yes"));
        assert_eq!(err.to_string(), "error converting setup: \"yes\"");
    }

    #[test]
    fn test_invalid_enum_error_lists_permitted_values() {
        let err = DocumentError::invalid_enum("edition", "xyz", &["tb", "snv"]);
        assert_eq!(
            err.to_string(),
            "value xyz was invalid for edition, must be one of [tb, snv]"
        );
    }

    #[test]
    fn test_nested_rewrites_key() {
        let err = DocumentError::missing("reason").nested("jinxes", 0);
        assert_eq!(err.key(), Some("jinxes[0].reason"));
    }

    #[test]
    fn test_nested_leaves_structural_errors_alone() {
        let err = DocumentError::malformed("not an array").nested("special", 1);
        assert!(matches!(err, DocumentError::MalformedDocument(_)));
        assert_eq!(err.key(), None);
    }
}
