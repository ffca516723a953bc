//! Night order positions
//!
//! Documents carry night order as a plain integer. `-1` (or any negative
//! number) and an absent field both mean the character does not wake in that
//! phase; `0` is a real, very early position.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Wire value written for "does not act"
pub const DOES_NOT_ACT: i64 = -1;

/// Where a character or event falls in a night
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NightOrder(Option<u32>);

impl NightOrder {
    /// Does not act in this phase
    pub const fn none() -> Self {
        Self(None)
    }

    /// Acts at the given position
    pub const fn at(position: u32) -> Self {
        Self(Some(position))
    }

    /// Interpret a raw document integer
    ///
    /// Returns `None` for a position past `u32::MAX`, which has no lossless
    /// representation.
    pub fn from_wire(raw: i64) -> Option<Self> {
        if raw < 0 {
            return Some(Self::none());
        }
        u32::try_from(raw).ok().map(Self::at)
    }

    /// The integer written back to documents
    pub fn to_wire(&self) -> i64 {
        self.0.map(i64::from).unwrap_or(DOES_NOT_ACT)
    }

    pub fn position(&self) -> Option<u32> {
        self.0
    }

    pub fn acts(&self) -> bool {
        self.0.is_some()
    }
}

impl From<Option<u32>> for NightOrder {
    fn from(position: Option<u32>) -> Self {
        Self(position)
    }
}

impl fmt::Display for NightOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(position) => write!(f, "{}", position),
            None => f.write_str("-"),
        }
    }
}

impl Serialize for NightOrder {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.to_wire())
    }
}

impl<'de> Deserialize<'de> for NightOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        match Self::from_wire(raw) {
            Some(order) => Ok(order),
            None => {
                let msg = format!("night order {raw} is out of range");
                Err(serde::de::Error::custom(msg))
            }
        }
    }
}
