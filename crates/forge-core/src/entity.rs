use serde::{Deserialize, Serialize};

use crate::characteristic::{Characteristic, CharacteristicArray, CharacteristicValue};
use crate::feature::Feature;

/// A campaign setting (world and ruleset context) that heroes belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignSetting {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
}

impl CampaignSetting {
    /// Create a setting.
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

/// A hero's people: physical heritage and innate features.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ancestry {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Granted features, in display order.
    pub features: Vec<Feature>,
}

impl Ancestry {
    /// Create an ancestry with the given features.
    pub fn new(id: &str, name: &str, description: &str, features: Vec<Feature>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            features,
        }
    }
}

/// The society a hero grew up in.
///
/// A culture is described by three aspects (environment, organization,
/// upbringing), each a feature. A bespoke culture starts with none of them
/// and the player picks each one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Culture {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Languages commonly spoken.
    pub languages: Vec<String>,
    /// Where the culture lives.
    pub environment: Option<Feature>,
    /// How the culture is governed.
    pub organization: Option<Feature>,
    /// How the hero was raised.
    pub upbringing: Option<Feature>,
}

impl Culture {
    /// Create a culture from its three aspects.
    pub fn new(
        id: &str,
        name: &str,
        description: &str,
        environment: Option<Feature>,
        organization: Option<Feature>,
        upbringing: Option<Feature>,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            languages: Vec::new(),
            environment,
            organization,
            upbringing,
        }
    }

    /// Set the spoken languages.
    pub fn with_languages(mut self, languages: &[&str]) -> Self {
        self.languages = languages.iter().map(|l| l.to_string()).collect();
        self
    }
}

/// What a hero did before becoming a hero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Career {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Granted features, in display order.
    pub features: Vec<Feature>,
    /// The title the career earns.
    pub title: Option<Feature>,
}

impl Career {
    /// Create a career.
    pub fn new(
        id: &str,
        name: &str,
        description: &str,
        features: Vec<Feature>,
        title: Option<Feature>,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            features,
            title,
        }
    }
}

/// Features unlocked at a given class level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesAtLevel {
    /// The level at which these features unlock.
    pub level: u32,
    /// The unlocked features.
    pub features: Vec<Feature>,
}

impl FeaturesAtLevel {
    /// Create a level group.
    pub fn new(level: u32, features: Vec<Feature>) -> Self {
        Self { level, features }
    }
}

/// A specialisation within a class (a college, domain, order, and so on).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubClass {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Level-gated features.
    #[serde(alias = "featuresByLevel")]
    pub features_by_level: Vec<FeaturesAtLevel>,
    /// Whether the hero has picked this subclass.
    pub selected: bool,
}

impl SubClass {
    /// Create an unselected subclass.
    pub fn new(
        id: &str,
        name: &str,
        description: &str,
        features_by_level: Vec<FeaturesAtLevel>,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            features_by_level,
            selected: false,
        }
    }
}

/// A hero class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroClass {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Name of the class's heroic resource (Rage, Focus, Piety, ...).
    #[serde(alias = "heroicResource")]
    pub heroic_resource: String,
    /// What this class calls its subclasses.
    #[serde(alias = "subclassName")]
    pub subclass_name: String,
    /// How many subclasses a hero must pick.
    #[serde(alias = "subclassCount")]
    pub subclass_count: usize,
    /// Characteristics that may never receive a negative score.
    #[serde(alias = "primaryCharacteristics")]
    pub primary_characteristics: Vec<Characteristic>,
    /// The chosen characteristic scores. Empty until chosen.
    pub characteristics: Vec<CharacteristicValue>,
    /// Level-gated class features.
    #[serde(alias = "featuresByLevel")]
    pub features_by_level: Vec<FeaturesAtLevel>,
    /// Available subclasses.
    pub subclasses: Vec<SubClass>,
    /// Current class level (at least 1).
    pub level: u32,
}

impl Default for HeroClass {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            description: String::new(),
            heroic_resource: String::new(),
            subclass_name: String::new(),
            subclass_count: 1,
            primary_characteristics: Vec::new(),
            characteristics: Vec::new(),
            features_by_level: Vec::new(),
            subclasses: Vec::new(),
            level: 1,
        }
    }
}

impl HeroClass {
    /// Create a level 1 class with no characteristics chosen.
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            ..Self::default()
        }
    }

    /// The chosen characteristic array, if a complete one has been set.
    pub fn characteristic_array(&self) -> Option<CharacteristicArray> {
        CharacteristicArray::from_assignments(&self.characteristics)
    }

    /// The score for one characteristic, 0 if not chosen yet.
    pub fn characteristic(&self, characteristic: Characteristic) -> i32 {
        self.characteristics
            .iter()
            .find(|c| c.characteristic == characteristic)
            .map(|c| c.value)
            .unwrap_or(0)
    }

    /// Subclasses the hero has picked.
    pub fn selected_subclasses(&self) -> impl Iterator<Item = &SubClass> {
        self.subclasses.iter().filter(|sc| sc.selected)
    }
}

/// Equipment package: armor, weapons, and the bonuses they give.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Kit {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Stamina bonus.
    pub stamina: i32,
    /// Speed bonus.
    pub speed: i32,
    /// Stability bonus.
    pub stability: i32,
    /// Protective ward granted by the kit, if any.
    pub ward: Option<Feature>,
}

impl Kit {
    /// Create a kit without a ward.
    pub fn new(id: &str, name: &str, description: &str, stamina: i32, speed: i32, stability: i32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            stamina,
            speed,
            stability,
            ward: None,
        }
    }

    /// Attach a ward feature.
    pub fn with_ward(mut self, ward: Feature) -> Self {
        self.ward = Some(ward);
        self
    }
}

/// An optional hook in a hero's past that grants a benefit and a drawback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Complication {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Granted features, in display order.
    pub features: Vec<Feature>,
}

impl Complication {
    /// Create a complication.
    pub fn new(id: &str, name: &str, description: &str, features: Vec<Feature>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            features,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_defaults_to_level_one() {
        let class: HeroClass = serde_json::from_str(r#"{"id": "fury", "name": "Fury"}"#).unwrap();
        assert_eq!(class.level, 1);
        assert_eq!(class.subclass_count, 1);
        assert!(class.characteristics.is_empty());
        assert!(class.characteristic_array().is_none());
    }

    #[test]
    fn characteristic_lookup_defaults_to_zero() {
        let mut class = HeroClass::new("fury", "Fury", "");
        assert_eq!(class.characteristic(Characteristic::Might), 0);
        class.characteristics = CharacteristicArray::new([2, 1, 0, 0, -1]).to_assignments();
        assert_eq!(class.characteristic(Characteristic::Might), 2);
        assert_eq!(class.characteristic(Characteristic::Presence), -1);
    }

    #[test]
    fn selected_subclasses_filters() {
        let mut class = HeroClass::new("fury", "Fury", "");
        class.subclasses = vec![
            SubClass::new("berserker", "Berserker", "", Vec::new()),
            SubClass::new("reaver", "Reaver", "", Vec::new()),
        ];
        class.subclasses[1].selected = true;
        let names: Vec<&str> = class.selected_subclasses().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Reaver"]);
    }

    #[test]
    fn clone_is_independent() {
        let culture = Culture::new("bespoke", "Bespoke", "", None, None, None);
        let mut copy = culture.clone();
        copy.environment = Some(Feature::text("urban", "Urban", ""));
        assert!(culture.environment.is_none());
        assert_ne!(culture, copy);
    }
}
