//! Build sections and their completion state.
//!
//! The state of a section is never stored: it is derived from the hero on
//! every read, so it cannot drift out of sync with the selections.

use std::fmt;
use std::str::FromStr;

use forge_core::Hero;

use crate::error::{RulesError, RulesResult};

/// One stage of hero construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Ancestry selection.
    Ancestry,
    /// Culture selection (and bespoke aspects).
    Culture,
    /// Career selection.
    Career,
    /// Class, characteristics, and subclasses.
    Class,
    /// Kit selection.
    Kit,
    /// Complication selection.
    Complication,
    /// Name and other details.
    Details,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Section; 7] = [
        Self::Ancestry,
        Self::Culture,
        Self::Career,
        Self::Class,
        Self::Kit,
        Self::Complication,
        Self::Details,
    ];
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ancestry => write!(f, "Ancestry"),
            Self::Culture => write!(f, "Culture"),
            Self::Career => write!(f, "Career"),
            Self::Class => write!(f, "Class"),
            Self::Kit => write!(f, "Kit"),
            Self::Complication => write!(f, "Complication"),
            Self::Details => write!(f, "Details"),
        }
    }
}

impl FromStr for Section {
    type Err = RulesError;

    fn from_str(s: &str) -> RulesResult<Self> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|section| section.to_string().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RulesError::UnknownSection(s.to_string()))
    }
}

/// Completion state of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionState {
    /// The required selection is present.
    Completed,
    /// The required selection is missing.
    NotStarted,
    /// Nothing selected, and nothing needs to be.
    Optional,
}

impl fmt::Display for SectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => write!(f, "Completed"),
            Self::NotStarted => write!(f, "Not Started"),
            Self::Optional => write!(f, "Optional"),
        }
    }
}

impl FromStr for SectionState {
    type Err = RulesError;

    fn from_str(s: &str) -> RulesResult<Self> {
        let squashed: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match squashed.as_str() {
            "completed" => Ok(Self::Completed),
            "notstarted" => Ok(Self::NotStarted),
            "optional" => Ok(Self::Optional),
            _ => Err(RulesError::UnknownSectionState(s.to_string())),
        }
    }
}

/// Derive the completion state of one section.
///
/// A culture counts as completed as soon as one is assigned, whether or not
/// a bespoke culture's aspects have been picked yet.
pub fn section_state(hero: &Hero, section: Section) -> SectionState {
    let present = match section {
        Section::Ancestry => hero.ancestry.is_some(),
        Section::Culture => hero.culture.is_some(),
        Section::Career => hero.career.is_some(),
        Section::Class => hero.class.is_some(),
        Section::Kit => hero.kit.is_some(),
        Section::Complication => {
            return if hero.complication.is_some() {
                SectionState::Completed
            } else {
                SectionState::Optional
            };
        }
        Section::Details => !hero.name.trim().is_empty(),
    };
    if present {
        SectionState::Completed
    } else {
        SectionState::NotStarted
    }
}

/// Every section with its state, in display order.
pub fn section_states(hero: &Hero) -> Vec<(Section, SectionState)> {
    Section::ALL
        .into_iter()
        .map(|section| (section, section_state(hero, section)))
        .collect()
}

/// True once no section is left unstarted.
pub fn is_build_complete(hero: &Hero) -> bool {
    Section::ALL
        .into_iter()
        .all(|section| section_state(hero, section) != SectionState::NotStarted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use forge_core::HeroId;

    fn hero() -> Hero {
        Hero::new(HeroId::generate(), "orden")
    }

    #[test]
    fn empty_hero_states() {
        let states = section_states(&hero());
        assert_eq!(
            states,
            vec![
                (Section::Ancestry, SectionState::NotStarted),
                (Section::Culture, SectionState::NotStarted),
                (Section::Career, SectionState::NotStarted),
                (Section::Class, SectionState::NotStarted),
                (Section::Kit, SectionState::NotStarted),
                (Section::Complication, SectionState::Optional),
                (Section::Details, SectionState::NotStarted),
            ]
        );
    }

    #[test]
    fn bespoke_culture_without_aspects_is_completed() {
        let catalog = Catalog::builtin();
        let mut hero = hero();
        hero.ancestry = catalog.ancestry("human").cloned();
        hero.culture = catalog.bespoke_culture().cloned();

        let culture = hero.culture.as_ref().unwrap();
        assert!(culture.environment.is_none());
        assert_eq!(section_state(&hero, Section::Ancestry), SectionState::Completed);
        assert_eq!(section_state(&hero, Section::Culture), SectionState::Completed);
    }

    #[test]
    fn blank_name_leaves_details_unstarted() {
        let mut hero = hero();
        hero.name = "   ".to_string();
        assert_eq!(section_state(&hero, Section::Details), SectionState::NotStarted);
        hero.name = "Korva".to_string();
        assert_eq!(section_state(&hero, Section::Details), SectionState::Completed);
    }

    #[test]
    fn build_complete_without_complication() {
        let catalog = Catalog::builtin();
        let mut hero = hero();
        hero.name = "Korva".to_string();
        hero.ancestry = catalog.ancestry("dwarf").cloned();
        hero.culture = catalog.culture("stone-hall").cloned();
        hero.career = catalog.career("artisan").cloned();
        hero.class = catalog.class("fury").cloned();
        assert!(!is_build_complete(&hero));

        hero.kit = catalog.kit("mountain").cloned();
        assert!(is_build_complete(&hero));

        hero.complication = catalog.complication("amnesia").cloned();
        assert_eq!(section_state(&hero, Section::Complication), SectionState::Completed);
        assert!(is_build_complete(&hero));
    }

    #[test]
    fn names_parse_and_display() {
        assert_eq!("kit".parse::<Section>().unwrap(), Section::Kit);
        assert!("spells".parse::<Section>().is_err());
        assert_eq!(SectionState::NotStarted.to_string(), "Not Started");
        assert_eq!(
            "not started".parse::<SectionState>().unwrap(),
            SectionState::NotStarted
        );
        assert_eq!(
            "NotStarted".parse::<SectionState>().unwrap(),
            SectionState::NotStarted
        );
    }
}
