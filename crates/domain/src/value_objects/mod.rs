//! Value objects - Immutable vocabulary and small values used by documents

mod edition;
mod jinx;
mod night_order;
mod special;
mod team;

pub use edition::Edition;
pub use jinx::{extract_jinxes, jinxes_from_map, jinxes_to_map, Jinx, JinxMap};
pub use night_order::{NightOrder, DOES_NOT_ACT};
pub use special::{Special, SpecialGlobal, SpecialName, SpecialTime, SpecialType};
pub use team::{Alignment, Team};
