//! Role entity - A single character definition
//!
//! Roles are built from loosely-typed JSON objects by [`Role::from_node`],
//! which validates every field in document order and stops at the first
//! problem. A `Role` value is therefore always complete.
//!
//! [`Role::to_map`] produces the canonical map form written back to documents.

use serde_json::{Map, Value};
use url::Url;

use crate::error::{DocumentError, Result};
use crate::extract::{Fields, Node, Vocabulary};
use crate::value_objects::{
    extract_jinxes, jinxes_from_map, Alignment, Edition, Jinx, JinxMap, NightOrder, Special, Team,
};

const WIKI_BASE_URL: &str = "https://wiki.bloodontheclocktower.com";

/// Relative image references are checked against this placeholder
const RELATIVE_BASE: &str = "https://relative.invalid/";

/// A playable character definition
#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    /// Document id with any `_edition` suffix removed
    pub id: String,
    pub name: String,
    pub edition: Edition,
    /// One default image, or default + two alignment variants
    pub image_urls: Vec<String>,
    pub team: Team,
    /// Ability text, optionally followed by ` [setup text]`
    pub ability: String,
    pub first_night: NightOrder,
    pub first_night_reminder: String,
    pub other_night: NightOrder,
    pub other_night_reminder: String,
    pub global_reminders: Vec<String>,
    pub reminder_tokens: Vec<String>,
    pub alters_setup: bool,
    pub flavour: String,
    pub special: Vec<Special>,
    /// Interaction rules keyed by the other character's id
    pub jinxes: JinxMap,
}

impl Role {
    /// Build a role from a JSON object, failing on the first invalid field
    pub fn from_node(node: &Node) -> Result<Self> {
        let fields = Fields::new(node);

        let id = normalize_role_id(&fields.required_string("id")?);
        let name = fields.required_string("name")?;
        let edition = fields.required_enum::<Edition>("edition")?;
        let image_urls = extract_image_urls(&fields)?;
        let team = fields.required_enum::<Team>("team")?;
        let ability = fields.required_string("ability")?;

        let first_night = night_order(&fields, "firstNight")?;
        let first_night_reminder = fields.string("firstNightReminder")?.unwrap_or_default();
        let other_night = night_order(&fields, "otherNight")?;
        let other_night_reminder = fields.string("otherNightReminder")?.unwrap_or_default();

        let global_reminders = fields.string_list("remindersGlobal")?.unwrap_or_default();
        let reminder_tokens = fields.string_list("reminders")?.unwrap_or_default();
        let alters_setup = fields.required_bool("setup")?;
        let flavour = fields.string("flavor")?.unwrap_or_default();
        let special = Special::list_from_node(node)?;
        let jinxes = extract_jinxes(node)?;

        Ok(Self {
            id,
            name,
            edition,
            image_urls,
            team,
            ability,
            first_night,
            first_night_reminder,
            other_night,
            other_night_reminder,
            global_reminders,
            reminder_tokens,
            alters_setup,
            flavour,
            special,
            jinxes,
        })
    }

    /// The alignment this character starts with
    pub fn alignment(&self) -> Alignment {
        self.team.alignment()
    }

    /// Pick the image for a requested alignment
    ///
    /// Travellers carry good and evil variants at positions 1 and 2. Good and
    /// evil characters carry their opposite-alignment variant at position 1.
    /// Everything else, including single-image roles, uses position 0.
    pub fn image_url(&self, requested: Alignment) -> Option<&str> {
        let default = self.alignment();
        if self.image_urls.len() > 1 && requested != default {
            let variant = match (default, requested) {
                (Alignment::Either, Alignment::Good) => Some(1),
                (Alignment::Either, Alignment::Evil) => Some(2),
                (Alignment::Good | Alignment::Evil, Alignment::Good | Alignment::Evil) => Some(1),
                _ => None,
            };
            if let Some(url) = variant.and_then(|i| self.image_urls.get(i)) {
                return Some(url);
            }
        }
        self.image_urls.first().map(String::as_str)
    }

    /// The ability with any trailing ` [setup]` clause removed
    pub fn ability_text(&self) -> &str {
        match split_setup(&self.ability) {
            Some((ability, _)) => ability,
            None => &self.ability,
        }
    }

    /// The bracketed setup clause, if the ability carries one
    pub fn setup_text(&self) -> Option<&str> {
        split_setup(&self.ability).map(|(_, setup)| setup)
    }

    /// The jinx text between this role and another, if any
    pub fn jinx_with(&self, other: &Role) -> Option<&str> {
        self.jinxes.get(&other.id).map(String::as_str)
    }

    /// Link to the character's page on the official wiki
    pub fn wiki_url(&self) -> String {
        let page = self.name.replace(' ', "_");
        format!("{}/{}", WIKI_BASE_URL, urlencoding::encode(&page))
    }

    /// Canonical map form, keyed by wire field names
    pub fn to_map(&self) -> Map<String, Value> {
        let special: Vec<Value> = self.special.iter().map(Special::to_value).collect();
        let jinxes: Vec<Value> = jinxes_from_map(&self.jinxes)
            .iter()
            .map(Jinx::to_value)
            .collect();

        let mut map = Map::new();
        map.insert("id".into(), self.id.clone().into());
        map.insert("name".into(), self.name.clone().into());
        map.insert("edition".into(), self.edition.id().into());
        map.insert("image".into(), self.image_urls.clone().into());
        map.insert("team".into(), self.team.id().into());
        map.insert("ability".into(), self.ability.clone().into());
        map.insert("firstNight".into(), self.first_night.to_wire().into());
        map.insert("firstNightReminder".into(), self.first_night_reminder.clone().into());
        map.insert("otherNight".into(), self.other_night.to_wire().into());
        map.insert("otherNightReminder".into(), self.other_night_reminder.clone().into());
        map.insert("remindersGlobal".into(), self.global_reminders.clone().into());
        map.insert("reminders".into(), self.reminder_tokens.clone().into());
        map.insert("setup".into(), self.alters_setup.into());
        map.insert("flavor".into(), self.flavour.clone().into());
        map.insert("special".into(), special.into());
        map.insert("jinxes".into(), jinxes.into());
        map
    }

    /// Canonical JSON value
    pub fn to_value(&self) -> Value {
        Value::Object(self.to_map())
    }
}

impl TryFrom<&Value> for Role {
    type Error = DocumentError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Object(node) => Role::from_node(node),
            other => Err(DocumentError::malformed(format!(
                "expected a character object, found {}",
                other
            ))),
        }
    }
}

/// Strip an edition qualifier such as `_bmr` from a document id
///
/// A leading underscore is not treated as a qualifier.
pub fn normalize_role_id(raw: &str) -> String {
    match raw.find('_') {
        Some(pos) if pos > 0 => raw[..pos].to_string(),
        _ => raw.to_string(),
    }
}

fn night_order(fields: &Fields<'_>, key: &str) -> Result<NightOrder> {
    let Some(raw) = fields.int(key)? else {
        return Ok(NightOrder::none());
    };
    match NightOrder::from_wire(raw) {
        Some(order) => Ok(order),
        None => Err(DocumentError::type_mismatch(key, &Value::from(raw))),
    }
}

/// Image entries must be non-empty and each a URL or relative reference
fn extract_image_urls(fields: &Fields<'_>) -> Result<Vec<String>> {
    let key = "image";
    let urls = fields.required_string_list(key)?;
    if urls.is_empty() {
        return Err(DocumentError::type_mismatch(key, &Value::Array(Vec::new())));
    }
    for raw in &urls {
        check_url(raw).map_err(|e| DocumentError::invalid_url(key, e))?;
    }
    Ok(urls)
}

fn check_url(raw: &str) -> std::result::Result<(), url::ParseError> {
    match Url::parse(raw) {
        Ok(_) => Ok(()),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse(RELATIVE_BASE)?;
            let options = Url::options().base_url(Some(&base));
            options.parse(raw).map(|_| ())
        }
        Err(e) => Err(e),
    }
}

fn split_setup(ability: &str) -> Option<(&str, &str)> {
    let open = ability.find(" [")?;
    let setup = ability[open + 2..].strip_suffix(']')?;
    Some((&ability[..open], setup))
}
