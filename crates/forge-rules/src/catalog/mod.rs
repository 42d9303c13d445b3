//! Reference data catalog.
//!
//! A [`Catalog`] holds every entity a hero can pick from. It is built once
//! (see [`Catalog::builtin`]), optionally merged with homebrew content via
//! [`Catalog::with_homebrew`], and then passed by reference to anything that
//! needs to look entities up.

pub mod builtin;

use std::fmt;
use std::str::FromStr;

use forge_core::{
    Ancestry, CampaignSetting, Career, Complication, Culture, Feature, HeroClass, Kit, Sourcebook,
};

use crate::error::{RulesError, RulesResult};

/// Campaign setting used when none is specified.
pub const DEFAULT_SETTING: &str = "orden";

/// Id of the culture whose aspects the player picks one by one.
pub const BESPOKE_CULTURE: &str = "bespoke";

/// Every selectable reference entity.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Campaign settings.
    pub settings: Vec<CampaignSetting>,
    /// Ancestries.
    pub ancestries: Vec<Ancestry>,
    /// Cultures, including the bespoke culture.
    pub cultures: Vec<Culture>,
    /// Environment aspects for bespoke cultures.
    pub environments: Vec<Feature>,
    /// Organization aspects for bespoke cultures.
    pub organizations: Vec<Feature>,
    /// Upbringing aspects for bespoke cultures.
    pub upbringings: Vec<Feature>,
    /// Careers.
    pub careers: Vec<Career>,
    /// Classes.
    pub classes: Vec<HeroClass>,
    /// Kits.
    pub kits: Vec<Kit>,
    /// Complications.
    pub complications: Vec<Complication>,
}

impl Catalog {
    /// The catalog shipped with the crate.
    pub fn builtin() -> Self {
        builtin::orden()
    }

    /// Append homebrew entities, then sort every list by name.
    pub fn with_homebrew(mut self, homebrew: &Sourcebook) -> Self {
        self.settings.extend(homebrew.settings.iter().cloned());
        self.ancestries.extend(homebrew.ancestries.iter().cloned());
        self.cultures.extend(homebrew.cultures.iter().cloned());
        self.careers.extend(homebrew.careers.iter().cloned());
        self.classes.extend(homebrew.classes.iter().cloned());
        self.kits.extend(homebrew.kits.iter().cloned());
        self.complications.extend(homebrew.complications.iter().cloned());

        self.settings.sort_by(|a, b| a.name.cmp(&b.name));
        self.ancestries.sort_by(|a, b| a.name.cmp(&b.name));
        self.cultures.sort_by(|a, b| a.name.cmp(&b.name));
        self.careers.sort_by(|a, b| a.name.cmp(&b.name));
        self.classes.sort_by(|a, b| a.name.cmp(&b.name));
        self.kits.sort_by(|a, b| a.name.cmp(&b.name));
        self.complications.sort_by(|a, b| a.name.cmp(&b.name));
        self
    }

    /// Look up a campaign setting.
    pub fn setting(&self, id: &str) -> Option<&CampaignSetting> {
        find(&self.settings, id, |s| &s.id)
    }

    /// Look up an ancestry.
    pub fn ancestry(&self, id: &str) -> Option<&Ancestry> {
        find(&self.ancestries, id, |a| &a.id)
    }

    /// Look up a culture.
    pub fn culture(&self, id: &str) -> Option<&Culture> {
        find(&self.cultures, id, |c| &c.id)
    }

    /// Look up an environment aspect.
    pub fn environment(&self, id: &str) -> Option<&Feature> {
        find(&self.environments, id, |f| &f.id)
    }

    /// Look up an organization aspect.
    pub fn organization(&self, id: &str) -> Option<&Feature> {
        find(&self.organizations, id, |f| &f.id)
    }

    /// Look up an upbringing aspect.
    pub fn upbringing(&self, id: &str) -> Option<&Feature> {
        find(&self.upbringings, id, |f| &f.id)
    }

    /// Look up a career.
    pub fn career(&self, id: &str) -> Option<&Career> {
        find(&self.careers, id, |c| &c.id)
    }

    /// Look up a class.
    pub fn class(&self, id: &str) -> Option<&HeroClass> {
        find(&self.classes, id, |c| &c.id)
    }

    /// Look up a kit.
    pub fn kit(&self, id: &str) -> Option<&Kit> {
        find(&self.kits, id, |k| &k.id)
    }

    /// Look up a complication.
    pub fn complication(&self, id: &str) -> Option<&Complication> {
        find(&self.complications, id, |c| &c.id)
    }

    /// The culture whose aspects are picked individually.
    pub fn bespoke_culture(&self) -> Option<&Culture> {
        self.culture(BESPOKE_CULTURE)
    }

    /// Summaries of every entry of one kind, in catalog order.
    pub fn entries(&self, kind: CatalogKind) -> Vec<CatalogEntry> {
        match kind {
            CatalogKind::Setting => summarize(&self.settings, |s| {
                CatalogEntry::new(&s.id, &s.name, &s.description)
            }),
            CatalogKind::Ancestry => summarize(&self.ancestries, |a| {
                CatalogEntry::new(&a.id, &a.name, &a.description)
            }),
            CatalogKind::Culture => summarize(&self.cultures, |c| {
                CatalogEntry::new(&c.id, &c.name, &c.description)
            }),
            CatalogKind::Environment => summarize(&self.environments, CatalogEntry::from_feature),
            CatalogKind::Organization => summarize(&self.organizations, CatalogEntry::from_feature),
            CatalogKind::Upbringing => summarize(&self.upbringings, CatalogEntry::from_feature),
            CatalogKind::Career => summarize(&self.careers, |c| {
                CatalogEntry::new(&c.id, &c.name, &c.description)
            }),
            CatalogKind::Class => summarize(&self.classes, |c| {
                CatalogEntry::new(&c.id, &c.name, &c.description)
            }),
            CatalogKind::Kit => summarize(&self.kits, |k| {
                CatalogEntry::new(&k.id, &k.name, &k.description)
            }),
            CatalogKind::Complication => summarize(&self.complications, |c| {
                CatalogEntry::new(&c.id, &c.name, &c.description)
            }),
        }
    }
}

fn summarize<T>(items: &[T], f: impl Fn(&T) -> CatalogEntry) -> Vec<CatalogEntry> {
    items.iter().map(f).collect()
}

/// Case-insensitive id lookup.
fn find<'a, T>(items: &'a [T], id: &str, key: impl Fn(&T) -> &String) -> Option<&'a T> {
    items.iter().find(|item| key(item).eq_ignore_ascii_case(id))
}

/// The kinds of entity a catalog holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    /// Campaign settings.
    Setting,
    /// Ancestries.
    Ancestry,
    /// Cultures.
    Culture,
    /// Environment aspects.
    Environment,
    /// Organization aspects.
    Organization,
    /// Upbringing aspects.
    Upbringing,
    /// Careers.
    Career,
    /// Classes.
    Class,
    /// Kits.
    Kit,
    /// Complications.
    Complication,
}

impl CatalogKind {
    /// All kinds, in build order.
    pub const ALL: [CatalogKind; 10] = [
        Self::Setting,
        Self::Ancestry,
        Self::Culture,
        Self::Environment,
        Self::Organization,
        Self::Upbringing,
        Self::Career,
        Self::Class,
        Self::Kit,
        Self::Complication,
    ];
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Setting => write!(f, "setting"),
            Self::Ancestry => write!(f, "ancestry"),
            Self::Culture => write!(f, "culture"),
            Self::Environment => write!(f, "environment"),
            Self::Organization => write!(f, "organization"),
            Self::Upbringing => write!(f, "upbringing"),
            Self::Career => write!(f, "career"),
            Self::Class => write!(f, "class"),
            Self::Kit => write!(f, "kit"),
            Self::Complication => write!(f, "complication"),
        }
    }
}

impl FromStr for CatalogKind {
    type Err = RulesError;

    fn from_str(s: &str) -> RulesResult<Self> {
        let lower = s.trim().to_lowercase();
        let exact = |name: &str| Self::ALL.into_iter().find(|k| k.to_string() == name);
        let plural = match lower.as_str() {
            "ancestries" => Some("ancestry"),
            "classes" => Some("class"),
            other => other.strip_suffix('s'),
        };
        exact(&lower)
            .or_else(|| plural.and_then(exact))
            .ok_or_else(|| RulesError::UnknownCatalogKind(s.to_string()))
    }
}

/// A one-line summary of a catalog entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Entity id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
}

impl CatalogEntry {
    fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    fn from_feature(feature: &Feature) -> Self {
        Self::new(&feature.id, &feature.name, &feature.description)
    }
}
