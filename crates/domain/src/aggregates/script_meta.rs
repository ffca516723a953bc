//! Script metadata - The `_meta` record of a script document

use serde_json::{Map, Value};

use crate::error::Result;
use crate::extract::{Fields, Node, META_ID};

/// Display metadata for a script
///
/// `first_night` and `other_night` are the author's own night sheet labels.
/// They are shown as written and play no part in the merged night order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptMeta {
    pub id: String,
    pub name: String,
    pub author: String,
    pub logo: String,
    pub hide_title: bool,
    pub background: String,
    pub almanac: String,
    pub bootlegger: Vec<String>,
    pub first_night: Vec<String>,
    pub other_night: Vec<String>,
}

impl Default for ScriptMeta {
    fn default() -> Self {
        Self {
            id: META_ID.to_string(),
            name: String::new(),
            author: String::new(),
            logo: String::new(),
            hide_title: false,
            background: String::new(),
            almanac: String::new(),
            bootlegger: Vec::new(),
            first_night: Vec::new(),
            other_night: Vec::new(),
        }
    }
}

impl ScriptMeta {
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

    /// Decode the meta record; every field is optional
    pub fn from_node(node: &Node) -> Result<Self> {
        let fields = Fields::new(node);
        Ok(Self {
            id: fields.string("id")?.unwrap_or_else(|| META_ID.to_string()),
            name: fields.string("name")?.unwrap_or_default(),
            author: fields.string("author")?.unwrap_or_default(),
            logo: fields.string("logo")?.unwrap_or_default(),
            hide_title: fields.bool("hideTitle")?.unwrap_or_default(),
            background: fields.string("background")?.unwrap_or_default(),
            almanac: fields.string("almanac")?.unwrap_or_default(),
            bootlegger: fields.string_list("bootlegger")?.unwrap_or_default(),
            first_night: fields.string_list("firstNight")?.unwrap_or_default(),
            other_night: fields.string_list("otherNight")?.unwrap_or_default(),
        })
    }

    /// Canonical map form
    ///
    /// `id`, `name`, `hideTitle`, `firstNight` and `otherNight` are always
    /// written; the remaining fields only when non-empty.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("id".into(), self.id.clone().into());
        map.insert("name".into(), self.name.clone().into());
        map.insert("hideTitle".into(), self.hide_title.into());
        map.insert("firstNight".into(), self.first_night.clone().into());
        map.insert("otherNight".into(), self.other_night.clone().into());

        for (key, value) in [
            ("author", &self.author),
            ("logo", &self.logo),
            ("background", &self.background),
            ("almanac", &self.almanac),
        ] {
            if !value.is_empty() {
                map.insert(key.into(), value.clone().into());
            }
        }
        if !self.bootlegger.is_empty() {
            map.insert("bootlegger".into(), self.bootlegger.clone().into());
        }
        map
    }
}
