//! Roster aggregate - A named character pack
//!
//! # Wire format
//!
//! A roster document is a JSON array. The element whose `id` is `"_meta"`
//! carries `author`, `name` and `almanac`; every other element is a full
//! character definition. A single bad character rejects the whole roster.
//!
//! # Invariants
//!
//! - Every character in the index is also in `characters`
//! - When two characters share an id, the index points at the later one

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::entities::Role;
use crate::error::{DocumentError, Result};
use crate::extract::{document_elements, is_meta, json_type_name, Fields, Node, META_ID};

/// A named collection of character definitions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    author: String,
    name: String,
    almanac: String,
    characters: Vec<Role>,
    /// id -> position in `characters`
    index: BTreeMap<String, usize>,
}

impl Roster {
    // =========================================================================
    // Constructors
    // =========================================================================

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_almanac(mut self, almanac: impl Into<String>) -> Self {
        self.almanac = almanac.into();
        self
    }

    /// Decode a roster from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Decode a roster from an already-parsed JSON document
    pub fn from_value(value: &Value) -> Result<Self> {
        let mut roster = Roster::default();
        for (position, element) in document_elements(value)?.iter().enumerate() {
            let node = element.as_object().ok_or_else(|| {
                DocumentError::malformed(format!(
                    "roster element {} must be an object, found {}",
                    position,
                    json_type_name(element)
                ))
            })?;

            if is_meta(node) {
                roster.apply_meta(node)?;
                continue;
            }

            let role = Role::from_node(node).inspect_err(|e| {
                tracing::debug!(position, error = %e, "roster character failed to decode");
            })?;
            roster.add_character(role);
        }

        tracing::debug!(
            name = %roster.name,
            characters = roster.characters.len(),
            "decoded roster"
        );
        Ok(roster)
    }

    fn apply_meta(&mut self, node: &Node) -> Result<()> {
        let fields = Fields::new(node);
        self.author = fields.string("author")?.unwrap_or_default();
        self.name = fields.string("name")?.unwrap_or_default();
        self.almanac = fields.string("almanac")?.unwrap_or_default();
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn almanac(&self) -> &str {
        &self.almanac
    }

    /// Characters in document order
    #[inline]
    pub fn characters(&self) -> &[Role] {
        &self.characters
    }

    /// Look up a character by its normalized id
    pub fn get(&self, id: &str) -> Option<&Role> {
        self.index.get(id).and_then(|&i| self.characters.get(i))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Distinct character ids, sorted
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Append a character; a later character replaces an earlier one with the
    /// same id in the index
    pub fn add_character(&mut self, role: Role) {
        self.index.insert(role.id.clone(), self.characters.len());
        self.characters.push(role);
    }

    // =========================================================================
    // Encoding
    // =========================================================================

    /// The metadata record written at the head of the document
    pub fn meta_map(&self) -> Map<String, Value> {
        let mut meta = Map::new();
        meta.insert("id".into(), META_ID.into());
        meta.insert("author".into(), self.author.clone().into());
        meta.insert("name".into(), self.name.clone().into());
        meta.insert("almanac".into(), self.almanac.clone().into());
        meta
    }

    /// Canonical document: meta first, then every character
    pub fn to_value(&self) -> Value {
        let mut items = Vec::with_capacity(self.characters.len() + 1);
        items.push(Value::Object(self.meta_map()));
        items.extend(self.characters.iter().map(Role::to_value));
        Value::Array(items)
    }

    /// Canonical compact JSON text
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }
}

impl TryFrom<&Value> for Roster {
    type Error = DocumentError;

    fn try_from(value: &Value) -> Result<Self> {
        Roster::from_value(value)
    }
}

impl std::str::FromStr for Roster {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self> {
        Roster::from_json(s)
    }
}

impl Serialize for Roster {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Roster::from_value(&value).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
