//! Aggregates - Whole documents
//!
//! A `Roster` owns its characters. A `Script` owns its inline characters and,
//! once resolved, copies of the roster characters it references.

pub mod roster;
pub mod script;
pub mod script_meta;

pub use roster::Roster;
pub use script::{normalize_reference, Script, ScriptElement};
pub use script_meta::ScriptMeta;
