//! Night events
//!
//! The fixed phases of a night (`Event`) and the merge of those phases with
//! character night order into a single sequence.

pub mod event;
pub mod night_sequence;

pub use event::Event;
pub use night_sequence::{merge_night_order, EntryKind, Night, NightEntry, NightOrdered};
