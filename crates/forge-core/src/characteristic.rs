use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// One of the five hero characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Characteristic {
    /// Physical strength and toughness.
    Might,
    /// Speed and coordination.
    Agility,
    /// Logic and learning.
    Reason,
    /// Perception and instinct.
    Intuition,
    /// Force of personality.
    Presence,
}

impl Characteristic {
    /// All characteristics in canonical order.
    pub const ALL: [Characteristic; 5] = [
        Self::Might,
        Self::Agility,
        Self::Reason,
        Self::Intuition,
        Self::Presence,
    ];

    /// Position of this characteristic in [`Characteristic::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Might => 0,
            Self::Agility => 1,
            Self::Reason => 2,
            Self::Intuition => 3,
            Self::Presence => 4,
        }
    }

    /// Three-letter abbreviation used on character sheets.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Might => "MGT",
            Self::Agility => "AGI",
            Self::Reason => "RSN",
            Self::Intuition => "INT",
            Self::Presence => "PRE",
        }
    }

    /// Parse a characteristic from its name or abbreviation (case-insensitive).
    pub fn parse(s: &str) -> CoreResult<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.to_string().to_lowercase() == lower || c.abbreviation().to_lowercase() == lower)
            .ok_or_else(|| CoreError::UnknownCharacteristic(s.to_string()))
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Might => write!(f, "Might"),
            Self::Agility => write!(f, "Agility"),
            Self::Reason => write!(f, "Reason"),
            Self::Intuition => write!(f, "Intuition"),
            Self::Presence => write!(f, "Presence"),
        }
    }
}

impl FromStr for Characteristic {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Characteristic {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

/// A single characteristic score as stored on a hero's class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacteristicValue {
    /// Which characteristic this score belongs to.
    pub characteristic: Characteristic,
    /// The score.
    pub value: i32,
}

/// A complete assignment of one value to each characteristic, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacteristicArray([i32; 5]);

impl CharacteristicArray {
    /// Build an array from values given in canonical order.
    pub fn new(values: [i32; 5]) -> Self {
        Self(values)
    }

    /// The raw values in canonical order.
    pub fn values(&self) -> [i32; 5] {
        self.0
    }

    /// The value assigned to one characteristic.
    pub fn value(&self, characteristic: Characteristic) -> i32 {
        self.0[characteristic.index()]
    }

    /// Sum of all five values.
    pub fn total(&self) -> i32 {
        self.0.iter().sum()
    }

    /// Expand into per-characteristic scores, in canonical order.
    pub fn to_assignments(&self) -> Vec<CharacteristicValue> {
        Characteristic::ALL
            .into_iter()
            .map(|characteristic| CharacteristicValue {
                characteristic,
                value: self.value(characteristic),
            })
            .collect()
    }

    /// Collect per-characteristic scores back into an array.
    ///
    /// Returns `None` unless every characteristic appears exactly once.
    pub fn from_assignments(assignments: &[CharacteristicValue]) -> Option<Self> {
        if assignments.len() != Characteristic::ALL.len() {
            return None;
        }
        let mut values = [0; 5];
        let mut seen = [false; 5];
        for a in assignments {
            let i = a.characteristic.index();
            if seen[i] {
                return None;
            }
            seen[i] = true;
            values[i] = a.value;
        }
        Some(Self(values))
    }
}

impl TryFrom<Vec<i32>> for CharacteristicArray {
    type Error = CoreError;

    fn try_from(values: Vec<i32>) -> Result<Self, Self::Error> {
        let len = values.len();
        let values: [i32; 5] = values
            .try_into()
            .map_err(|_| CoreError::ArrayLength(len))?;
        Ok(Self(values))
    }
}

impl fmt::Display for CharacteristicArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|v| format!("{v:>2}")).collect();
        write!(f, "[{}]", parts.join(" "))
    }
}
