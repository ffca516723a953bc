//! Script aggregate - A selection of characters to play together
//!
//! # Wire format
//!
//! A script document is a JSON array whose elements take one of three shapes:
//! - the `_meta` record (see [`ScriptMeta`])
//! - a reference to a published character, either a bare string
//!   (`"fortuneteller"`) or a single-key object (`{"id": "fortune_teller"}`)
//! - a full inline character definition (a homebrew character)
//!
//! # Resolution
//!
//! References are only ids. [`Script::populate_index`] resolves them against
//! a [`Roster`] and builds the id -> character index that the night order
//! views read from. Ids the roster does not know are returned to the caller;
//! they are not an error.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

use crate::aggregates::{Roster, ScriptMeta};
use crate::entities::Role;
use crate::error::{DocumentError, Result};
use crate::events::{merge_night_order, Night, NightEntry};
use crate::extract::{document_elements, is_meta, json_type_name};
use crate::share::{decode_share_url, encode_share_url};

/// One element of a script document
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptElement {
    Meta(ScriptMeta),
    /// Reference to a published character, normalized
    Original(String),
    /// Inline character definition
    Custom(Role),
}

impl ScriptElement {
    /// Classify and decode one element
    ///
    /// The meta record is matched first, then the reference shorthand, and
    /// anything else must be a full character.
    pub fn decode(value: &Value) -> Result<Self> {
        match value {
            Value::String(id) => Ok(Self::Original(normalize_reference(id))),
            Value::Object(node) if is_meta(node) => ScriptMeta::from_node(node).map(Self::Meta),
            Value::Object(node) if node.len() == 1 => match node.iter().next() {
                Some((_, Value::String(id))) => Ok(Self::Original(normalize_reference(id))),
                Some((key, other)) => Err(DocumentError::type_mismatch(key.as_str(), other)),
                None => Err(DocumentError::malformed("empty character reference")),
            },
            Value::Object(node) => Role::from_node(node).map(Self::Custom),
            other => Err(DocumentError::malformed(format!(
                "script elements must be strings or objects, found {}",
                json_type_name(other)
            ))),
        }
    }
}

/// Normalize a character reference by removing every underscore
pub fn normalize_reference(raw: &str) -> String {
    raw.replace('_', "")
}

/// A script: metadata, referenced characters, and inline characters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    meta: ScriptMeta,
    original_character_ids: Vec<String>,
    custom_characters: Vec<Role>,
    /// Filled by `populate_index`; clones of roster characters plus customs
    index: BTreeMap<String, Role>,
}

impl Script {
    // =========================================================================
    // Constructors
    // =========================================================================

    pub fn new(meta: ScriptMeta) -> Self {
        Self {
            meta,
            ..Self::default()
        }
    }

    /// Add a reference to a published character
    pub fn with_original(mut self, id: impl AsRef<str>) -> Self {
        self.original_character_ids
            .push(normalize_reference(id.as_ref()));
        self
    }

    /// Add an inline character definition
    pub fn with_custom(mut self, role: Role) -> Self {
        self.custom_characters.push(role);
        self
    }

    /// Decode a script from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Decode a script from an already-parsed JSON document
    pub fn from_value(value: &Value) -> Result<Self> {
        let mut script = Script::default();
        for (position, element) in document_elements(value)?.iter().enumerate() {
            let element = ScriptElement::decode(element).inspect_err(|e| {
                tracing::debug!(position, error = %e, "script element failed to decode");
            })?;
            match element {
                ScriptElement::Meta(meta) => script.meta = meta,
                ScriptElement::Original(id) => script.original_character_ids.push(id),
                ScriptElement::Custom(role) => script.custom_characters.push(role),
            }
        }

        tracing::debug!(
            name = %script.meta.name,
            originals = script.original_character_ids.len(),
            customs = script.custom_characters.len(),
            "decoded script"
        );
        Ok(script)
    }

    /// Decode a script from a share link
    pub fn from_share_url(link: &str) -> Result<Self> {
        Self::from_json(&decode_share_url(link)?)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn meta(&self) -> &ScriptMeta {
        &self.meta
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.meta.name
    }

    #[inline]
    pub fn author(&self) -> &str {
        &self.meta.author
    }

    /// Referenced character ids, in document order
    #[inline]
    pub fn original_character_ids(&self) -> &[String] {
        &self.original_character_ids
    }

    /// Inline character definitions, in document order
    #[inline]
    pub fn custom_characters(&self) -> &[Role] {
        &self.custom_characters
    }

    /// The resolved id -> character index
    #[inline]
    pub fn index(&self) -> &BTreeMap<String, Role> {
        &self.index
    }

    /// Look up a resolved character
    pub fn get(&self, id: &str) -> Option<&Role> {
        self.index.get(id)
    }

    /// Resolved characters: referenced ones that were found, in document
    /// order, then the inline ones
    ///
    /// A reference whose id is also defined inline is listed once, as the
    /// inline character.
    pub fn characters(&self) -> Vec<&Role> {
        let custom_ids: BTreeSet<&str> = self
            .custom_characters
            .iter()
            .map(|role| role.id.as_str())
            .collect();
        self.original_character_ids
            .iter()
            .filter(|id| !custom_ids.contains(id.as_str()))
            .filter_map(|id| self.index.get(id))
            .chain(self.custom_characters.iter())
            .collect()
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Resolve referenced ids against a roster and rebuild the index
    ///
    /// Returns the ids the roster does not contain, in document order. Inline
    /// characters are always indexed under their own id.
    pub fn populate_index(&mut self, roster: &Roster) -> Vec<String> {
        self.index.clear();
        let mut not_found = Vec::new();

        for id in &self.original_character_ids {
            match roster.get(id) {
                Some(role) => {
                    self.index.insert(id.clone(), role.clone());
                }
                None => not_found.push(id.clone()),
            }
        }
        for role in &self.custom_characters {
            self.index.insert(role.id.clone(), role.clone());
        }

        if !not_found.is_empty() {
            tracing::warn!(
                script = %self.meta.name,
                roster = %roster.name(),
                missing = ?not_found,
                "script references characters missing from roster"
            );
        }
        not_found
    }

    // =========================================================================
    // Night order
    // =========================================================================

    /// Merged night order for one night over the resolved characters
    pub fn night_order(&self, night: Night) -> Vec<NightEntry<'_>> {
        merge_night_order(night, self.index.values())
    }

    pub fn first_night(&self) -> Vec<NightEntry<'_>> {
        self.night_order(Night::First)
    }

    pub fn other_night(&self) -> Vec<NightEntry<'_>> {
        self.night_order(Night::Other)
    }

    // =========================================================================
    // Encoding
    // =========================================================================

    /// Canonical document: meta, then references, then inline characters
    pub fn to_value(&self) -> Value {
        let mut items = vec![Value::Object(self.meta.to_map())];
        for id in &self.original_character_ids {
            items.push(Value::String(id.clone()));
        }
        items.extend(self.custom_characters.iter().map(Role::to_value));
        Value::Array(items)
    }

    /// Canonical compact JSON text
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }

    /// Share link for the online script tool
    pub fn share_url(&self) -> Result<String> {
        encode_share_url(&self.to_json())
    }
}

impl TryFrom<&Value> for Script {
    type Error = DocumentError;

    fn try_from(value: &Value) -> Result<Self> {
        Script::from_value(value)
    }
}

impl std::str::FromStr for Script {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self> {
        Script::from_json(s)
    }
}

impl Serialize for Script {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Script {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Script::from_value(&value).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
