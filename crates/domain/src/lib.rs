//! Clocktower Domain - character rosters and scripts
//!
//! Decodes the loosely-typed JSON arrays used for character packs (rosters)
//! and scripts into a validated model, resolves script references against a
//! roster, merges the night order, and writes the canonical JSON form back
//! out (including compressed share links).
//!
//! ```
//! use clocktower_domain::{Roster, Script};
//!
//! let roster = Roster::from_json(r#"[
//!     {"id": "_meta", "name": "Pack", "author": "Me", "almanac": ""},
//!     {"id": "imp", "name": "Imp", "edition": "tb", "team": "demon",
//!      "image": ["https://example.com/imp.png"], "ability": "Kill.",
//!      "firstNight": 24, "setup": false}
//! ]"#).unwrap();
//!
//! let mut script = Script::from_json(r#"[{"id": "_meta", "name": "Tiny"}, "imp"]"#).unwrap();
//! assert!(script.populate_index(&roster).is_empty());
//!
//! let names: Vec<&str> = script.first_night().iter().map(|e| e.name).collect();
//! assert_eq!(names, ["Dusk", "Minion Info", "Demon Info", "Imp", "Dawn"]);
//! ```

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod events;
pub mod extract;
pub mod share;
pub mod value_objects;

pub use aggregates::{Roster, Script, ScriptElement, ScriptMeta};
pub use entities::Role;
pub use error::{DocumentError, Result};
pub use events::{merge_night_order, EntryKind, Event, Night, NightEntry, NightOrdered};
pub use extract::{Fields, Node, Vocabulary, META_ID};
pub use share::{decode_share_url, encode_share_url, SHARE_BASE_URL};
pub use value_objects::{
    Alignment, Edition, Jinx, JinxMap, NightOrder, Special, SpecialGlobal, SpecialName,
    SpecialTime, SpecialType, Team,
};
