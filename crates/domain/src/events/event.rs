//! Fixed game phases that take a slot in the night order
//!
//! Dusk and Dawn bracket every night. Minion and Demon info only happen on the
//! first night.

use std::fmt;

use crate::value_objects::NightOrder;

/// A non-character step of the night
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    Dusk,
    MinionInfo,
    DemonInfo,
    Dawn,
}

impl Event {
    /// All events in first-night order
    pub fn all() -> &'static [Event] {
        &[
            Event::Dusk,
            Event::MinionInfo,
            Event::DemonInfo,
            Event::Dawn,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Event::Dusk => "dusk",
            Event::MinionInfo => "minioninfo",
            Event::DemonInfo => "demoninfo",
            Event::Dawn => "dawn",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Event::Dusk => "Dusk",
            Event::MinionInfo => "Minion Info",
            Event::DemonInfo => "Demon Info",
            Event::Dawn => "Dawn",
        }
    }

    pub fn first_night_order(&self) -> NightOrder {
        match self {
            Event::Dusk => NightOrder::at(1),
            Event::MinionInfo => NightOrder::at(19),
            Event::DemonInfo => NightOrder::at(23),
            Event::Dawn => NightOrder::at(77),
        }
    }

    pub fn other_night_order(&self) -> NightOrder {
        match self {
            Event::Dusk => NightOrder::at(1),
            Event::Dawn => NightOrder::at(96),
            Event::MinionInfo | Event::DemonInfo => NightOrder::none(),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_night_positions() {
        let orders: Vec<i64> = Event::all()
            .iter()
            .map(|e| e.first_night_order().to_wire())
            .collect();
        assert_eq!(orders, vec![1, 19, 23, 77]);
    }

    #[test]
    fn info_events_skip_other_nights() {
        assert_eq!(Event::MinionInfo.other_night_order().to_wire(), -1);
        assert_eq!(Event::DemonInfo.other_night_order().to_wire(), -1);
        assert_eq!(Event::Dawn.other_night_order(), NightOrder::at(96));
    }

    #[test]
    fn names() {
        assert_eq!(Event::MinionInfo.display_name(), "Minion Info");
        assert_eq!(Event::DemonInfo.to_string(), "demoninfo");
    }
}
