//! Creating and normalising hero records.

use forge_core::{CharacteristicArray, Feature, Hero, HeroClass, HeroId};
use tracing::warn;

use crate::catalog::{Catalog, DEFAULT_SETTING};
use crate::error::{RulesError, RulesResult};

/// Create a blank hero tagged to a campaign setting.
///
/// The hero gets a fresh id, no selections, and zeroed counters. Fails only
/// if the setting is not in the catalog.
pub fn create_hero(catalog: &Catalog, setting_id: &str) -> RulesResult<Hero> {
    let setting = catalog
        .setting(setting_id)
        .ok_or_else(|| RulesError::UnknownSetting(setting_id.to_string()))?;
    Ok(Hero::new(HeroId::generate(), setting.id.clone()))
}

/// Bring an imported or legacy record up to the current schema.
///
/// Missing ids are assigned, the setting defaults to Orden, the class level
/// is at least 1, characteristics are either a complete canonical assignment
/// or empty, subclass selection respects the class limit, and every feature
/// has an id. Applying this twice gives the same result as applying it once.
pub fn update_hero(mut hero: Hero) -> Hero {
    if hero.id.is_blank() {
        hero.id = HeroId::generate();
        warn!(hero = %hero.id, "assigned missing hero id");
    }
    if hero.setting_id.trim().is_empty() {
        hero.setting_id = DEFAULT_SETTING.to_string();
    }

    if let Some(class) = hero.class.as_mut() {
        normalize_class(class);
    }

    if let Some(ancestry) = hero.ancestry.as_mut() {
        fill_ids(&ancestry.id, ancestry.features.iter_mut());
    }
    if let Some(culture) = hero.culture.as_mut() {
        let owner = culture.id.clone();
        fill_ids(
            &owner,
            culture
                .environment
                .iter_mut()
                .chain(culture.organization.iter_mut())
                .chain(culture.upbringing.iter_mut()),
        );
    }
    if let Some(career) = hero.career.as_mut() {
        fill_ids(
            &career.id,
            career.features.iter_mut().chain(career.title.iter_mut()),
        );
    }
    if let Some(class) = hero.class.as_mut() {
        fill_ids(
            &class.id,
            class
                .features_by_level
                .iter_mut()
                .flat_map(|group| group.features.iter_mut()),
        );
        for subclass in &mut class.subclasses {
            fill_ids(
                &subclass.id,
                subclass
                    .features_by_level
                    .iter_mut()
                    .flat_map(|group| group.features.iter_mut()),
            );
        }
    }
    if let Some(kit) = hero.kit.as_mut() {
        fill_ids(&kit.id, kit.ward.iter_mut());
    }
    if let Some(complication) = hero.complication.as_mut() {
        fill_ids(&complication.id, complication.features.iter_mut());
    }

    hero
}

fn normalize_class(class: &mut HeroClass) {
    if class.level < 1 {
        class.level = 1;
    }

    if !class.characteristics.is_empty() {
        match CharacteristicArray::from_assignments(&class.characteristics) {
            Some(array) => class.characteristics = array.to_assignments(),
            None => {
                warn!(
                    class = %class.id,
                    entries = class.characteristics.len(),
                    "discarding incomplete characteristics"
                );
                class.characteristics.clear();
            }
        }
    }

    let allowed = class.subclass_count;
    let mut kept = 0;
    for subclass in class.subclasses.iter_mut().filter(|sc| sc.selected) {
        if kept < allowed {
            kept += 1;
        } else {
            warn!(class = %class.id, subclass = %subclass.id, "deselecting excess subclass");
            subclass.selected = false;
        }
    }
}

fn fill_ids<'a>(owner: &str, features: impl Iterator<Item = &'a mut Feature>) {
    for feature in features {
        if feature.id.trim().is_empty() {
            feature.id = feature_id(owner, &feature.name);
        }
    }
}

/// Derive a stable feature id from its owner and name.
fn feature_id(owner: &str, name: &str) -> String {
    let slug: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    let slug = slug
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    match (owner.is_empty(), slug.is_empty()) {
        (true, _) => slug,
        (false, true) => owner.to_string(),
        (false, false) => format!("{owner}-{slug}"),
    }
}
