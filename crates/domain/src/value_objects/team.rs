//! Character teams and the alignment they imply

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::extract::Vocabulary;

/// The team (role type) a character belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Townsfolk,
    Outsider,
    Minion,
    Demon,
    Traveller,
    Fabled,
    Loric,
}

impl Team {
    /// Get a display name (the title-cased id)
    pub fn display_name(&self) -> &'static str {
        match self {
            Team::Townsfolk => "Townsfolk",
            Team::Outsider => "Outsider",
            Team::Minion => "Minion",
            Team::Demon => "Demon",
            Team::Traveller => "Traveller",
            Team::Fabled => "Fabled",
            Team::Loric => "Loric",
        }
    }

    /// The alignment a character on this team starts with
    pub fn alignment(&self) -> Alignment {
        match self {
            Team::Townsfolk | Team::Outsider => Alignment::Good,
            Team::Minion | Team::Demon => Alignment::Evil,
            Team::Traveller => Alignment::Either,
            Team::Fabled | Team::Loric => Alignment::None,
        }
    }
}

impl Vocabulary for Team {
    fn all() -> &'static [Team] {
        &[
            Team::Townsfolk,
            Team::Outsider,
            Team::Minion,
            Team::Demon,
            Team::Traveller,
            Team::Fabled,
            Team::Loric,
        ]
    }

    fn id(&self) -> &'static str {
        match self {
            Team::Townsfolk => "townsfolk",
            Team::Outsider => "outsider",
            Team::Minion => "minion",
            Team::Demon => "demon",
            Team::Traveller => "traveller",
            Team::Fabled => "fabled",
            Team::Loric => "loric",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Team {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Team::from_id(s).ok_or_else(|| format!("Unknown team: {}", s))
    }
}

/// Which side a character plays for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    Good,
    Evil,
    /// Travellers may be either
    Either,
    /// Storyteller-side characters (fabled, loric)
    None,
}

impl Alignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Good => "Good",
            Alignment::Evil => "Evil",
            Alignment::Either => "Either",
            Alignment::None => "None",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
