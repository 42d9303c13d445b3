use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{CoreError, CoreResult};

/// A hero statistic that a bonus feature can add to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum FeatureField {
    /// Points toward downtime projects.
    ProjectPoints,
    /// Fame and reputation.
    Renown,
    /// Purchasing power.
    Wealth,
    /// Maximum stamina.
    Stamina,
    /// Number of recoveries.
    Recoveries,
    /// Movement speed.
    Speed,
    /// Resistance to forced movement.
    Stability,
}

impl FeatureField {
    /// All bonus fields.
    pub const ALL: [FeatureField; 7] = [
        Self::ProjectPoints,
        Self::Renown,
        Self::Wealth,
        Self::Stamina,
        Self::Recoveries,
        Self::Speed,
        Self::Stability,
    ];
}

impl fmt::Display for FeatureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProjectPoints => write!(f, "Project Points"),
            Self::Renown => write!(f, "Renown"),
            Self::Wealth => write!(f, "Wealth"),
            Self::Stamina => write!(f, "Stamina"),
            Self::Recoveries => write!(f, "Recoveries"),
            Self::Speed => write!(f, "Speed"),
            Self::Stability => write!(f, "Stability"),
        }
    }
}

impl FromStr for FeatureField {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| {
                field
                    .to_string()
                    .chars()
                    .filter(|c| c.is_alphanumeric())
                    .collect::<String>()
                    .to_lowercase()
                    == normalized
            })
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

impl TryFrom<String> for FeatureField {
    type Error = CoreError;

    fn try_from(s: String) -> CoreResult<Self> {
        s.parse()
    }
}

/// Payload of a bonus feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusData {
    /// The statistic the bonus applies to.
    pub field: FeatureField,
    /// Amount added (may be negative).
    pub value: i32,
}

/// Payload of a skill or language grant.
///
/// A fixed grant lists its picks in `selected` up front. A choice grant
/// starts with `selected` empty and the player fills in `count` entries,
/// drawn from `options` (an empty option list means "any").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionData {
    /// Allowed picks. Empty means unrestricted.
    pub options: Vec<String>,
    /// How many picks the grant requires.
    pub count: usize,
    /// Picks made so far.
    pub selected: Vec<String>,
}

impl SelectionData {
    /// A grant of specific, already-chosen entries.
    pub fn fixed(selected: &[&str]) -> Self {
        Self {
            options: Vec::new(),
            count: selected.len(),
            selected: selected.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// A grant the player must pick `count` entries for.
    pub fn choose(count: usize, options: &[&str]) -> Self {
        Self {
            options: options.iter().map(|s| s.to_string()).collect(),
            count,
            selected: Vec::new(),
        }
    }

    /// True once enough entries have been picked.
    pub fn is_complete(&self) -> bool {
        self.selected.len() >= self.count
    }

    /// True if `value` is an allowed pick.
    pub fn allows(&self, value: &str) -> bool {
        self.options.is_empty() || self.options.iter().any(|o| o.eq_ignore_ascii_case(value))
    }
}

/// An activated or triggered ability granted by a feature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ability {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Rules text.
    pub description: String,
    /// Heroic resource cost, 0 for signature abilities.
    pub cost: u32,
}

/// Payload of an ancestry size feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeData {
    /// Size in squares.
    pub value: u32,
    /// Size category letter for size 1 creatures (T, S, M or L).
    pub modifier: Option<char>,
}

/// The typed payload of a feature, tagged by `type`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeatureData {
    /// Descriptive rules text with no mechanical payload.
    #[default]
    Text,
    /// A flat bonus to a hero statistic.
    Bonus(BonusData),
    /// Skill grant.
    Skill(SelectionData),
    /// Language grant.
    Language(SelectionData),
    /// Ability grant.
    Ability(Ability),
    /// Creature size.
    Size(SizeData),
}

impl FeatureData {
    /// The `type` tag of this payload.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Bonus(_) => "bonus",
            Self::Skill(_) => "skill",
            Self::Language(_) => "language",
            Self::Ability(_) => "ability",
            Self::Size(_) => "size",
        }
    }

    /// True if both payloads carry the same `type` tag.
    pub fn same_type(&self, other: &FeatureData) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Map a loosely written type name ("Bonus", "Skill Choice", "language")
    /// onto its `type` tag.
    pub fn tag_for(kind: &str) -> Option<&'static str> {
        const TAGS: [&str; 6] = ["text", "bonus", "skill", "language", "ability", "size"];
        let normalized: String = kind
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        TAGS.into_iter().find(|tag| normalized.starts_with(tag))
    }
}

/// A named grant attached to an ancestry, culture, career, class, kit, or complication.
///
/// Reads both the current layout, where the `type` tag sits inside `data`,
/// and the older one with `type` beside `data` on the feature itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FeatureRecord")]
pub struct Feature {
    /// Stable identifier, unique within a hero.
    #[serde(default)]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Rules text.
    #[serde(default)]
    pub description: String,
    /// True if the player must supply a parameter before the grant is usable.
    #[serde(default)]
    pub choice: bool,
    /// Typed payload.
    #[serde(default)]
    pub data: FeatureData,
}

/// A feature as written on disk, before its payload is typed.
#[derive(Deserialize)]
struct FeatureRecord {
    #[serde(default)]
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    choice: bool,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    data: Option<Value>,
}

impl TryFrom<FeatureRecord> for Feature {
    type Error = CoreError;

    fn try_from(record: FeatureRecord) -> CoreResult<Self> {
        let mut payload = match record.data {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };
        let kind = match payload.get("type") {
            Some(Value::String(tag)) => Some(tag.clone()),
            _ => record.kind,
        };
        let data = match kind {
            None => FeatureData::Text,
            Some(kind) => match FeatureData::tag_for(&kind) {
                Some(tag) => {
                    payload.insert("type".to_string(), Value::String(tag.to_string()));
                    serde_json::from_value(Value::Object(payload)).map_err(|e| {
                        CoreError::InvalidFeature {
                            name: record.name.clone(),
                            kind: tag.to_string(),
                            reason: e.to_string(),
                        }
                    })?
                }
                None => {
                    warn!(feature = %record.name, kind = %kind, "unknown feature type, reading as text");
                    FeatureData::Text
                }
            },
        };
        Ok(Self {
            id: record.id,
            name: record.name,
            description: record.description,
            choice: record.choice,
            data,
        })
    }
}

impl Feature {
    /// A plain rules-text feature.
    pub fn text(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            choice: false,
            data: FeatureData::Text,
        }
    }

    /// A flat bonus to one statistic.
    pub fn bonus(id: &str, name: &str, field: FeatureField, value: i32) -> Self {
        Self {
            data: FeatureData::Bonus(BonusData { field, value }),
            ..Self::text(id, name, "")
        }
    }

    /// A skill grant. Becomes a choice when `data` has nothing selected yet.
    pub fn skill(id: &str, name: &str, data: SelectionData) -> Self {
        Self {
            choice: !data.is_complete(),
            data: FeatureData::Skill(data),
            ..Self::text(id, name, "")
        }
    }

    /// A language grant. Becomes a choice when `data` has nothing selected yet.
    pub fn language(id: &str, name: &str, data: SelectionData) -> Self {
        Self {
            choice: !data.is_complete(),
            data: FeatureData::Language(data),
            ..Self::text(id, name, "")
        }
    }

    /// An ability grant.
    pub fn ability(id: &str, ability: Ability) -> Self {
        Self {
            data: FeatureData::Ability(ability.clone()),
            ..Self::text(id, &ability.name, &ability.description)
        }
    }

    /// A creature size.
    pub fn size(id: &str, value: u32, modifier: Option<char>) -> Self {
        Self {
            data: FeatureData::Size(SizeData { value, modifier }),
            ..Self::text(id, "Size", "")
        }
    }

    /// Set the rules text.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// The bonus payload, if this is a bonus feature.
    pub fn as_bonus(&self) -> Option<&BonusData> {
        match &self.data {
            FeatureData::Bonus(b) => Some(b),
            _ => None,
        }
    }

    /// True if this is a choice feature still waiting for player input.
    pub fn is_unresolved(&self) -> bool {
        if !self.choice {
            return false;
        }
        match &self.data {
            FeatureData::Skill(s) | FeatureData::Language(s) => !s.is_complete(),
            _ => false,
        }
    }
}
