//! Special side-effect descriptors attached to characters
//!
//! These describe non-standard setup and ability mechanics to the app
//! (grimoire reveals, extra votes, bag changes and so on). Unlike the rest of a
//! character definition, unknown vocabulary here is tolerated: an
//! unrecognised `type`, `name`, `time` or `global` is dropped and the entry is
//! kept.

use serde_json::{Map, Value};

use crate::error::{DocumentError, Result};
use crate::extract::{Fields, Node, Vocabulary};

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $id:literal),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)*
        }

        impl Vocabulary for $name {
            fn all() -> &'static [Self] {
                &[$($name::$variant,)*]
            }

            fn id(&self) -> &'static str {
                match self {
                    $($name::$variant => $id,)*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.id())
            }
        }
    };
}

vocabulary! {
    /// What kind of effect the special describes
    SpecialType {
        Selection => "selection",
        Ability => "ability",
        Signal => "signal",
        Vote => "vote",
        Reveal => "reveal",
        Player => "player",
    }
}

vocabulary! {
    /// Which effect within its type
    SpecialName {
        Grimoire => "grimoire",
        Pointing => "pointing",
        GhostVotes => "ghost-votes",
        DistributeRoles => "distribute-roles",
        BagDisabled => "bag-disabled",
        BagDuplicate => "bag-duplicate",
        Multiplier => "multiplier",
        Hidden => "hidden",
        ReplaceCharacter => "replace-character",
        Player => "player",
        Card => "card",
        OpenEyes => "open-eyes",
    }
}

vocabulary! {
    /// When the effect applies
    SpecialTime {
        Pregame => "pregame",
        Day => "day",
        Night => "night",
        FirstNight => "firstNight",
        FirstDay => "firstDay",
        OtherNight => "otherNight",
        OtherDay => "otherDay",
    }
}

vocabulary! {
    /// Which players the effect applies to globally
    SpecialGlobal {
        Townsfolk => "townsfolk",
        Outsider => "outsider",
        Minion => "minion",
        Demon => "demon",
        Traveller => "traveller",
        Dead => "dead",
    }
}

/// A special side-effect descriptor
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Special {
    pub kind: Option<SpecialType>,
    pub name: Option<SpecialName>,
    pub time: Option<SpecialTime>,
    pub global: Option<SpecialGlobal>,
    /// String or integer depending on `name`; kept as found in the document
    pub value: Option<Value>,
}

impl Special {
    /// Decode one special entry, dropping out-of-vocabulary enum values
    pub fn from_node(node: &Node) -> Self {
        let fields = Fields::new(node);
        Self {
            kind: fields.lenient_enum("type"),
            name: fields.lenient_enum("name"),
            time: fields.lenient_enum("time"),
            global: fields.lenient_enum("global"),
            value: fields.raw("value").filter(|v| !v.is_null()).cloned(),
        }
    }

    /// Decode the `special` field of a character, defaulting to empty
    pub fn list_from_node(node: &Node) -> Result<Vec<Special>> {
        let entries = Fields::new(node).object_list("special")?;
        Ok(entries
            .unwrap_or_default()
            .into_iter()
            .map(Special::from_node)
            .collect())
    }

    /// The value, if it is a string
    pub fn string_value(&self) -> Option<&str> {
        self.value.as_ref().and_then(Value::as_str)
    }

    /// The value, if it is an integer
    pub fn number_value(&self) -> Option<i64> {
        self.value.as_ref().and_then(Value::as_i64)
    }

    /// Canonical map form; only populated keys are written
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        if let Some(kind) = self.kind {
            map.insert("type".into(), kind.id().into());
        }
        if let Some(name) = self.name {
            map.insert("name".into(), name.id().into());
        }
        if let Some(time) = self.time {
            map.insert("time".into(), time.id().into());
        }
        if let Some(global) = self.global {
            map.insert("global".into(), global.id().into());
        }
        if let Some(value) = &self.value {
            map.insert("value".into(), value.clone());
        }
        map
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.to_map())
    }
}

impl TryFrom<&Value> for Special {
    type Error = DocumentError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Object(node) => Ok(Special::from_node(node)),
            other => Err(DocumentError::type_mismatch("special", other)),
        }
    }
}
