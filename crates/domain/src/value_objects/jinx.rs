//! Jinxes - documented interaction rules between two characters
//!
//! Documents carry jinxes as an array of `{id, reason}` pairs. The model keeps
//! them as an id-sorted map so lookups are direct and the re-encoded order is
//! stable.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::error::Result;
use crate::extract::{Fields, Node};

/// A single jinx as it appears on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jinx {
    pub id: String,
    pub reason: String,
}

impl Jinx {
    pub fn new(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            reason: reason.into(),
        }
    }

    fn from_node(node: &Node) -> Result<Self> {
        let fields = Fields::new(node);
        Ok(Self {
            id: fields.required_string("id")?,
            reason: fields.required_string("reason")?,
        })
    }

    /// Canonical map form
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("id".into(), self.id.clone().into());
        map.insert("reason".into(), self.reason.clone().into());
        map
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.to_map())
    }
}

/// Jinxes keyed by the other character's id
pub type JinxMap = BTreeMap<String, String>;

/// Decode the `jinxes` field of a character
///
/// An absent field yields an empty map. Later pairs for the same id replace
/// earlier ones.
pub fn extract_jinxes(node: &Node) -> Result<JinxMap> {
    let Some(entries) = Fields::new(node).object_list("jinxes")? else {
        return Ok(JinxMap::new());
    };
    let jinxes = entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| Jinx::from_node(entry).map_err(|e| e.nested("jinxes", i)))
        .collect::<Result<Vec<_>>>()?;
    Ok(jinxes_to_map(jinxes))
}

/// Collapse pair records into a lookup map
pub fn jinxes_to_map(jinxes: impl IntoIterator<Item = Jinx>) -> JinxMap {
    jinxes.into_iter().map(|j| (j.id, j.reason)).collect()
}

/// Expand a lookup map back into pair records, ordered by id
pub fn jinxes_from_map(map: &JinxMap) -> Vec<Jinx> {
    map.iter()
        .map(|(id, reason)| Jinx::new(id.clone(), reason.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocumentError;
    use serde_json::json;

    fn node(value: Value) -> Node {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn absent_jinxes_are_empty() {
        assert!(extract_jinxes(&node(json!({}))).unwrap().is_empty());
    }

    #[test]
    fn pairs_become_a_map() {
        let jinxes = extract_jinxes(&node(json!({
            "jinxes": [
                {"id": "spy", "reason": "Spy registers as good."},
                {"id": "marionette", "reason": "Marionette sits next to the Demon."}
            ]
        })))
        .unwrap();
        assert_eq!(jinxes.len(), 2);
        assert_eq!(jinxes["spy"], "Spy registers as good.");
    }

    #[test]
    fn missing_reason_is_reported_with_path() {
        let err = extract_jinxes(&node(json!({"jinxes": [{"id": "spy"}]}))).unwrap_err();
        assert!(matches!(err, DocumentError::MissingRequiredField { .. }));
        assert_eq!(err.key(), Some("jinxes[0].reason"));
    }

    #[test]
    fn jinxes_must_be_an_array() {
        let err = extract_jinxes(&node(json!({"jinxes": "spy"}))).unwrap_err();
        assert!(matches!(err, DocumentError::TypeMismatch { .. }));
    }

    #[test]
    fn from_map_is_sorted_by_id() {
        let map = jinxes_to_map(vec![Jinx::new("widow", "b"), Jinx::new("alchemist", "a")]);
        let pairs = jinxes_from_map(&map);
        assert_eq!(pairs[0].id, "alchemist");
        assert_eq!(pairs[1].id, "widow");
    }
}
