use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::{Ancestry, Career, Complication, Culture, HeroClass, Kit};

/// Unique identifier for a hero.
///
/// Imported records may carry any string; a blank id marks a record that
/// still needs one assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeroId(pub String);

impl HeroId {
    /// Generate a new random hero ID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// True if no id has been assigned.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for HeroId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Mutable counters tracked over a hero's career.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroState {
    /// Points toward downtime projects.
    #[serde(alias = "projectPoints")]
    pub project_points: i32,
    /// Fame and reputation.
    pub renown: i32,
    /// Purchasing power.
    pub wealth: i32,
    /// Victories earned since the last respite.
    pub victories: i32,
    /// Experience points.
    pub xp: i32,
    /// Current heroic resource.
    #[serde(alias = "heroicResource")]
    pub heroic_resource: i32,
    /// Current surges.
    pub surges: i32,
    /// Stamina lost.
    #[serde(alias = "staminaDamage")]
    pub stamina_damage: i32,
    /// Recoveries spent.
    #[serde(alias = "recoveriesUsed")]
    pub recoveries_used: i32,
    /// Fields this version does not interpret, kept so a round trip loses nothing.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// A player character under construction or in play.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hero {
    /// Unique identifier.
    pub id: HeroId,
    /// Display name, empty until set.
    pub name: String,
    /// The campaign setting this hero belongs to.
    #[serde(alias = "settingID", alias = "settingId")]
    pub setting_id: String,
    /// Chosen ancestry.
    pub ancestry: Option<Ancestry>,
    /// Chosen culture.
    pub culture: Option<Culture>,
    /// Chosen career.
    pub career: Option<Career>,
    /// Chosen class.
    pub class: Option<HeroClass>,
    /// Chosen kit.
    pub kit: Option<Kit>,
    /// Chosen complication (optional in a finished build).
    pub complication: Option<Complication>,
    /// Mutable counters.
    pub state: HeroState,
}

impl Hero {
    /// A blank hero with the given id and setting.
    pub fn new(id: HeroId, setting_id: impl Into<String>) -> Self {
        Self {
            id,
            setting_id: setting_id.into(),
            ..Self::default()
        }
    }

    /// The name to show for this hero, falling back to a placeholder.
    pub fn display_name(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() { "Unnamed Hero" } else { trimmed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = HeroId::generate();
        let b = HeroId::generate();
        assert!(!a.is_blank());
        assert_ne!(a, b);
    }

    #[test]
    fn hero_deserializes_from_sparse_json() {
        let hero: Hero = serde_json::from_str(r#"{"name": "Ash"}"#).unwrap();
        assert_eq!(hero.name, "Ash");
        assert!(hero.id.is_blank());
        assert!(hero.ancestry.is_none());
        assert_eq!(hero.state, HeroState::default());
    }

    #[test]
    fn unknown_state_fields_survive_round_trip() {
        let json = r#"{"state": {"renown": 2, "hidden_agenda": "revenge"}}"#;
        let hero: Hero = serde_json::from_str(json).unwrap();
        assert_eq!(hero.state.renown, 2);
        assert_eq!(
            hero.state.extra.get("hidden_agenda"),
            Some(&serde_json::Value::from("revenge"))
        );

        let back = serde_json::to_value(&hero).unwrap();
        assert_eq!(back["state"]["hidden_agenda"], "revenge");
    }

    #[test]
    fn camel_case_keys_are_read() {
        let json = r#"{
            "settingID": "orden",
            "state": {"projectPoints": 240, "heroicResource": 3, "staminaDamage": 5}
        }"#;
        let hero: Hero = serde_json::from_str(json).unwrap();
        assert_eq!(hero.setting_id, "orden");
        assert_eq!(hero.state.project_points, 240);
        assert_eq!(hero.state.heroic_resource, 3);
        assert_eq!(hero.state.stamina_damage, 5);
        assert!(hero.state.extra.is_empty());

        let back = serde_json::to_value(&hero).unwrap();
        assert_eq!(back["setting_id"], "orden");
        assert_eq!(back["state"]["project_points"], 240);
    }

    #[test]
    fn display_name_falls_back() {
        let mut hero = Hero::new(HeroId::generate(), "orden");
        assert_eq!(hero.display_name(), "Unnamed Hero");
        hero.name = "  Vess ".to_string();
        assert_eq!(hero.display_name(), "Vess");
    }
}
