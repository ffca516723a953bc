//! Typed field access over loosely-typed JSON objects
//!
//! Every accessor distinguishes three outcomes:
//! - `Ok(None)`: the key is absent
//! - `Err(DocumentError::TypeMismatch)`: the key is present with the wrong type
//! - `Ok(Some(value))`: the key is present and valid
//!
//! Scalars treat an explicit `null` as the wrong type. Sequences treat `null`
//! as absent.
//!
//! The `required_*` wrappers turn absence into
//! `DocumentError::MissingRequiredField` and pass type errors through.

use serde_json::{Map, Value};

use crate::error::{DocumentError, Result};

/// A JSON object as decoded from a document
pub type Node = Map<String, Value>;

/// A closed set of string identifiers backed by a Rust enum
///
/// Implementors list their variants in canonical order; the wire identifier
/// of each variant is what documents carry.
pub trait Vocabulary: Sized + Copy + 'static {
    /// All variants in canonical order
    fn all() -> &'static [Self];

    /// The wire identifier of this variant
    fn id(&self) -> &'static str;

    /// Look up a variant by its wire identifier
    fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.id() == id)
    }

    /// Wire identifiers of all variants, in canonical order
    fn ids() -> Vec<&'static str> {
        Self::all().iter().map(|v| v.id()).collect()
    }
}

/// Validate a string against a closed vocabulary, failing hard on mismatch
pub fn validate_enum<T: Vocabulary>(key: &str, value: &str) -> Result<T> {
    T::from_id(value).ok_or_else(|| DocumentError::invalid_enum(key, value, &T::ids()))
}

/// Id carried by the metadata element of roster and script documents
pub const META_ID: &str = "_meta";

/// Whether a document element is the metadata record
pub fn is_meta(node: &Node) -> bool {
    node.get("id").and_then(Value::as_str) == Some(META_ID)
}

/// Unwrap the top-level array every document is made of
pub fn document_elements(value: &Value) -> Result<&[Value]> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(DocumentError::malformed(format!(
            "expected a top-level array, found {}",
            json_type_name(other)
        ))),
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Tri-state accessors over a borrowed JSON object
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    node: &'a Node,
}

impl<'a> Fields<'a> {
    pub fn new(node: &'a Node) -> Self {
        Self { node }
    }

    /// The raw value under `key`, if any
    pub fn raw(&self, key: &str) -> Option<&'a Value> {
        self.node.get(key)
    }

    /// Number of keys on the underlying object
    pub fn len(&self) -> usize {
        self.node.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node.is_empty()
    }

    pub fn string(&self, key: &str) -> Result<Option<String>> {
        match self.node.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(DocumentError::type_mismatch(key, other)),
        }
    }

    pub fn required_string(&self, key: &str) -> Result<String> {
        self.string(key)?.ok_or_else(|| DocumentError::missing(key))
    }

    /// A sequence whose every element must be a string
    pub fn string_list(&self, key: &str) -> Result<Option<Vec<String>>> {
        let raw = match self.node.get(key) {
            None | Some(Value::Null) => return Ok(None),
            Some(raw) => raw,
        };
        let Value::Array(items) = raw else {
            return Err(DocumentError::type_mismatch(key, raw));
        };
        items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                _ => Err(DocumentError::type_mismatch(key, raw)),
            })
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }

    pub fn required_string_list(&self, key: &str) -> Result<Vec<String>> {
        self.string_list(key)?
            .ok_or_else(|| DocumentError::missing(key))
    }

    /// An integer; floats are accepted only when they carry no fraction
    pub fn int(&self, key: &str) -> Result<Option<i64>> {
        match self.node.get(key) {
            None => Ok(None),
            Some(value @ Value::Number(n)) => {
                if let Some(i) = n.as_i64() {
                    return Ok(Some(i));
                }
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                        Ok(Some(f as i64))
                    }
                    _ => Err(DocumentError::type_mismatch(key, value)),
                }
            }
            Some(other) => Err(DocumentError::type_mismatch(key, other)),
        }
    }

    pub fn required_int(&self, key: &str) -> Result<i64> {
        self.int(key)?.ok_or_else(|| DocumentError::missing(key))
    }

    pub fn bool(&self, key: &str) -> Result<Option<bool>> {
        match self.node.get(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(DocumentError::type_mismatch(key, other)),
        }
    }

    pub fn required_bool(&self, key: &str) -> Result<bool> {
        self.bool(key)?.ok_or_else(|| DocumentError::missing(key))
    }

    /// A sequence of objects, borrowed from the node
    ///
    /// Any element that is not an object is reported as a type mismatch keyed
    /// by its position, e.g. `special[1]`.
    pub fn object_list(&self, key: &str) -> Result<Option<Vec<&'a Node>>> {
        let items = match self.node.get(key) {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Array(items)) => items,
            Some(other) => return Err(DocumentError::type_mismatch(key, other)),
        };
        items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(obj) => Ok(obj),
                other => Err(DocumentError::type_mismatch(format!("{key}[{i}]"), other)),
            })
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }

    /// A required string validated against a closed vocabulary
    pub fn required_enum<T: Vocabulary>(&self, key: &str) -> Result<T> {
        let value = self.required_string(key)?;
        validate_enum(key, &value)
    }

    /// An optional vocabulary value that is silently dropped when it is not a
    /// string or not a member of the vocabulary
    pub fn lenient_enum<T: Vocabulary>(&self, key: &str) -> Option<T> {
        let value = self.node.get(key)?;
        let parsed = value.as_str().and_then(T::from_id);
        if parsed.is_none() {
            tracing::trace!(key, %value, "dropping unrecognised enum value");
        }
        parsed
    }
}
