use serde::{Deserialize, Serialize};

use crate::entity::{Ancestry, CampaignSetting, Career, Complication, Culture, HeroClass, Kit};

/// A collection of reference entities, used for homebrew content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sourcebook {
    /// Campaign settings.
    pub settings: Vec<CampaignSetting>,
    /// Ancestries.
    pub ancestries: Vec<Ancestry>,
    /// Cultures.
    pub cultures: Vec<Culture>,
    /// Careers.
    pub careers: Vec<Career>,
    /// Classes.
    pub classes: Vec<HeroClass>,
    /// Kits.
    pub kits: Vec<Kit>,
    /// Complications.
    pub complications: Vec<Complication>,
}

impl Sourcebook {
    /// True if the sourcebook defines nothing.
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
            && self.ancestries.is_empty()
            && self.cultures.is_empty()
            && self.careers.is_empty()
            && self.classes.is_empty()
            && self.kits.is_empty()
            && self.complications.is_empty()
    }
}

/// User preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Include feature rules text when showing a hero.
    #[serde(alias = "showDescriptions")]
    pub show_descriptions: bool,
    /// Campaign setting for newly created heroes.
    #[serde(alias = "defaultSetting")]
    pub default_setting: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            show_descriptions: true,
            default_setting: "orden".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sourcebook() {
        assert!(Sourcebook::default().is_empty());
        let book = Sourcebook {
            kits: vec![Kit::new("sling", "Sling", "", 0, 0, 0)],
            ..Sourcebook::default()
        };
        assert!(!book.is_empty());
    }

    #[test]
    fn options_fill_missing_fields() {
        let options: Options = serde_json::from_str(r#"{"show_descriptions": false}"#).unwrap();
        assert!(!options.show_descriptions);
        assert_eq!(options.default_setting, "orden");
    }
}
