//! Merging fixed events and characters into one night order
//!
//! Entries are sorted by position, then by id, so that two entries sharing a
//! position always come out in the same order.

use std::fmt;

use crate::entities::Role;
use crate::events::Event;
use crate::value_objects::NightOrder;

/// Which night a sequence describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Night {
    First,
    Other,
}

impl Night {
    pub fn display_name(&self) -> &'static str {
        match self {
            Night::First => "First Night",
            Night::Other => "Other Nights",
        }
    }
}

impl fmt::Display for Night {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Anything that can take a slot in the night order
pub trait NightOrdered {
    /// Stable identifier, used to break ties
    fn night_id(&self) -> &str;

    /// Name shown to the storyteller
    fn night_name(&self) -> &str;

    /// Position in the given night
    fn night_order(&self, night: Night) -> NightOrder;

    fn entry_kind(&self) -> EntryKind;
}

impl NightOrdered for Event {
    fn night_id(&self) -> &str {
        self.id()
    }

    fn night_name(&self) -> &str {
        self.display_name()
    }

    fn night_order(&self, night: Night) -> NightOrder {
        match night {
            Night::First => self.first_night_order(),
            Night::Other => self.other_night_order(),
        }
    }

    fn entry_kind(&self) -> EntryKind {
        EntryKind::Event
    }
}

impl NightOrdered for Role {
    fn night_id(&self) -> &str {
        &self.id
    }

    fn night_name(&self) -> &str {
        &self.name
    }

    fn night_order(&self, night: Night) -> NightOrder {
        match night {
            Night::First => self.first_night,
            Night::Other => self.other_night,
        }
    }

    fn entry_kind(&self) -> EntryKind {
        EntryKind::Character
    }
}

/// Where a night entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntryKind {
    Event,
    Character,
}

/// One step of a merged night order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NightEntry<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub order: u32,
    pub kind: EntryKind,
}

impl fmt::Display for NightEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>3}. {}", self.order, self.name)
    }
}

/// Merge the fixed events with the given characters for one night
///
/// Characters that do not act in `night` are left out.
pub fn merge_night_order<'a, I>(night: Night, roles: I) -> Vec<NightEntry<'a>>
where
    I: IntoIterator<Item = &'a Role>,
{
    let events = Event::all().iter().map(|e| e as &'a dyn NightOrdered);
    let roles = roles.into_iter().map(|r| r as &'a dyn NightOrdered);

    let mut entries: Vec<NightEntry<'a>> = events
        .chain(roles)
        .filter_map(|item| {
            let order = item.night_order(night).position()?;
            Some(NightEntry {
                id: item.night_id(),
                name: item.night_name(),
                order,
                kind: item.entry_kind(),
            })
        })
        .collect();

    entries.sort_by(|a, b| {
        a.order
            .cmp(&b.order)
            .then_with(|| a.id.cmp(b.id))
            .then_with(|| a.kind.cmp(&b.kind))
    });
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn role(id: &str, name: &str, first: i64, other: i64) -> Role {
        let value = json!({
            "id": id,
            "name": name,
            "edition": "tb",
            "image": ["https://example.com/a.png"],
            "team": "demon",
            "ability": "Something.",
            "firstNight": first,
            "otherNight": other,
            "setup": false
        });
        Role::try_from(&value).unwrap()
    }

    fn names(entries: &[NightEntry<'_>]) -> Vec<String> {
        entries.iter().map(|e| e.name.to_string()).collect()
    }

    #[test]
    fn first_night_interleaves_events_and_roles() {
        let imp = role("imp", "Imp", 24, 30);
        let entries = merge_night_order(Night::First, [&imp]);
        let expected = vec!["Dusk", "Minion Info", "Demon Info", "Imp", "Dawn"];
        assert_eq!(names(&entries), expected);
    }

    #[test]
    fn other_nights_skip_info_events() {
        let imp = role("imp", "Imp", 24, 30);
        let entries = merge_night_order(Night::Other, [&imp]);
        assert_eq!(names(&entries), vec!["Dusk", "Imp", "Dawn"]);
        assert_eq!(entries.last().map(|e| e.order), Some(96));
    }

    #[test]
    fn sentinel_roles_never_appear() {
        let mayor = role("mayor", "Mayor", -1, -1);
        let first = merge_night_order(Night::First, [&mayor]);
        let other = merge_night_order(Night::Other, [&mayor]);
        assert!(first.iter().all(|e| e.id != "mayor"));
        assert!(other.iter().all(|e| e.id != "mayor"));
    }

    #[test]
    fn zero_sorts_before_dusk() {
        let early = role("early", "Early", 0, -1);
        let entries = merge_night_order(Night::First, [&early]);
        assert_eq!(entries[0].id, "early");
    }

    #[test]
    fn ties_break_on_id_regardless_of_input_order() {
        let poisoner = role("poisoner", "Poisoner", 24, 7);
        let imp = role("imp", "Imp", 24, 7);

        let forward = merge_night_order(Night::First, [&poisoner, &imp]);
        let backward = merge_night_order(Night::First, [&imp, &poisoner]);

        assert_eq!(forward, backward);
        let ids: Vec<&str> = forward.iter().map(|e| e.id).collect();
        let expected = vec!["dusk", "minioninfo", "demoninfo", "imp", "poisoner", "dawn"];
        assert_eq!(ids, expected);
    }

    #[test]
    fn role_tied_with_event_breaks_on_id() {
        let alchemist = role("alchemist", "Alchemist", 1, -1);
        let entries = merge_night_order(Night::First, [&alchemist]);
        assert_eq!(entries[0].id, "alchemist");
        assert_eq!(entries[1].id, "dusk");
    }

    #[test]
    fn full_tie_puts_event_before_character() {
        let dusk = role("dusk", "Homebrew Dusk", 1, -1);
        let entries = merge_night_order(Night::First, [&dusk]);
        assert_eq!(entries[0].kind, EntryKind::Event);
        assert_eq!(entries[1].kind, EntryKind::Character);
        assert_eq!(entries[1].name, "Homebrew Dusk");
    }
}
