//! Feature aggregation.
//!
//! A hero's features are gathered from every selected entity in section
//! order. Class and subclass features are gated on the class level, and a
//! feature id that appears twice is only reported the first time.

use std::collections::HashSet;

use forge_core::{Feature, FeatureField, Hero, HeroClass};

use crate::section::Section;

/// The features one section contributes, before de-duplication.
///
/// Details contributes nothing.
pub fn features_for_section(hero: &Hero, section: Section) -> Vec<&Feature> {
    let mut features = Vec::new();
    match section {
        Section::Ancestry => {
            if let Some(ancestry) = &hero.ancestry {
                features.extend(ancestry.features.iter());
            }
        }
        Section::Culture => {
            if let Some(culture) = &hero.culture {
                features.extend(culture.environment.iter());
                features.extend(culture.organization.iter());
                features.extend(culture.upbringing.iter());
            }
        }
        Section::Career => {
            if let Some(career) = &hero.career {
                features.extend(career.features.iter());
                features.extend(career.title.iter());
            }
        }
        Section::Class => {
            if let Some(class) = &hero.class {
                features.extend(class_features(class));
            }
        }
        Section::Kit => {
            if let Some(kit) = &hero.kit {
                features.extend(kit.ward.iter());
            }
        }
        Section::Complication => {
            if let Some(complication) = &hero.complication {
                features.extend(complication.features.iter());
            }
        }
        Section::Details => {}
    }
    features
}

fn class_features(class: &HeroClass) -> impl Iterator<Item = &Feature> {
    let level = class.level;
    let own = class.features_by_level.iter();
    let subclass = class
        .selected_subclasses()
        .flat_map(|sc| sc.features_by_level.iter());
    own.chain(subclass)
        .filter(move |group| group.level <= level)
        .flat_map(|group| group.features.iter())
}

/// The hero's features grouped by the section that grants them.
///
/// A repeated id stays with the first section that grants it. Sections
/// with nothing left are omitted.
pub fn features_by_section(hero: &Hero) -> Vec<(Section, Vec<&Feature>)> {
    let mut seen = HashSet::new();
    Section::ALL
        .into_iter()
        .map(|section| {
            let features: Vec<&Feature> = features_for_section(hero, section)
                .into_iter()
                .filter(|f| f.id.is_empty() || seen.insert(f.id.as_str()))
                .collect();
            (section, features)
        })
        .filter(|(_, features)| !features.is_empty())
        .collect()
}

/// Every feature the hero currently has, in canonical order, without duplicates.
pub fn get_features(hero: &Hero) -> Vec<&Feature> {
    features_by_section(hero)
        .into_iter()
        .flat_map(|(_, features)| features)
        .collect()
}

/// Mutable twin of [`get_features`], used to fill in choice data.
pub fn get_features_mut(hero: &mut Hero) -> Vec<&mut Feature> {
    let mut all: Vec<&mut Feature> = Vec::new();
    if let Some(ancestry) = hero.ancestry.as_mut() {
        all.extend(ancestry.features.iter_mut());
    }
    if let Some(culture) = hero.culture.as_mut() {
        all.extend(culture.environment.iter_mut());
        all.extend(culture.organization.iter_mut());
        all.extend(culture.upbringing.iter_mut());
    }
    if let Some(career) = hero.career.as_mut() {
        all.extend(career.features.iter_mut());
        all.extend(career.title.iter_mut());
    }
    if let Some(class) = hero.class.as_mut() {
        let level = class.level;
        let own = class.features_by_level.iter_mut();
        let subclass = class
            .subclasses
            .iter_mut()
            .filter(|sc| sc.selected)
            .flat_map(|sc| sc.features_by_level.iter_mut());
        all.extend(
            own.chain(subclass)
                .filter(|group| group.level <= level)
                .flat_map(|group| group.features.iter_mut()),
        );
    }
    if let Some(kit) = hero.kit.as_mut() {
        all.extend(kit.ward.iter_mut());
    }
    if let Some(complication) = hero.complication.as_mut() {
        all.extend(complication.features.iter_mut());
    }

    let mut seen = HashSet::new();
    all.retain(|feature| feature.id.is_empty() || seen.insert(feature.id.clone()));
    all
}

/// Sum of every bonus to `field` across the hero's features.
pub fn bonus_total(hero: &Hero, field: FeatureField) -> i32 {
    get_features(hero)
        .into_iter()
        .filter_map(|feature| feature.as_bonus())
        .filter(|bonus| bonus.field == field)
        .map(|bonus| bonus.value)
        .sum()
}

/// Choice features still waiting for the player.
pub fn unresolved_choices(hero: &Hero) -> Vec<&Feature> {
    get_features(hero)
        .into_iter()
        .filter(|feature| feature.is_unresolved())
        .collect()
}
