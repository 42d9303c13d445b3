//! Build actions.
//!
//! Each action takes the current hero by reference and returns a new hero
//! with exactly one change applied. Selected entities are cloned from the
//! catalog, so later edits to a hero's copy never reach the catalog.

use forge_core::{
    Ancestry, Career, CharacteristicArray, Complication, Culture, Feature, FeatureData,
    FeatureField, Hero, HeroClass, Kit,
};
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::characteristics::is_valid_array;
use crate::error::{RulesError, RulesResult};
use crate::features::get_features_mut;

/// Select or clear the ancestry.
pub fn with_ancestry(hero: &Hero, ancestry: Option<&Ancestry>) -> Hero {
    debug!(hero = %hero.id, ancestry = ?ancestry.map(|a| &a.id), "set ancestry");
    Hero {
        ancestry: ancestry.cloned(),
        ..hero.clone()
    }
}

/// Select or clear the culture.
pub fn with_culture(hero: &Hero, culture: Option<&Culture>) -> Hero {
    debug!(hero = %hero.id, culture = ?culture.map(|c| &c.id), "set culture");
    Hero {
        culture: culture.cloned(),
        ..hero.clone()
    }
}

/// Which of a culture's three aspects an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CultureAspect {
    /// Where the culture lives.
    Environment,
    /// How the culture is governed.
    Organization,
    /// How the hero was raised.
    Upbringing,
}

/// Set one aspect of the hero's culture from the catalog's aspect lists.
///
/// `None` clears the aspect. An unknown id, or a hero without a culture,
/// leaves the hero unchanged.
pub fn with_culture_aspect(
    catalog: &Catalog,
    hero: &Hero,
    aspect: CultureAspect,
    id: Option<&str>,
) -> Hero {
    let mut next = hero.clone();
    let Some(culture) = next.culture.as_mut() else {
        warn!(hero = %hero.id, ?aspect, "no culture selected");
        return next;
    };
    let feature = match id {
        None => None,
        Some(id) => {
            let found = match aspect {
                CultureAspect::Environment => catalog.environment(id),
                CultureAspect::Organization => catalog.organization(id),
                CultureAspect::Upbringing => catalog.upbringing(id),
            };
            match found {
                Some(feature) => Some(feature.clone()),
                None => {
                    warn!(hero = %hero.id, ?aspect, id, "unknown culture aspect");
                    return next;
                }
            }
        }
    };
    debug!(hero = %hero.id, ?aspect, id = ?id, "set culture aspect");
    let slot = match aspect {
        CultureAspect::Environment => &mut culture.environment,
        CultureAspect::Organization => &mut culture.organization,
        CultureAspect::Upbringing => &mut culture.upbringing,
    };
    *slot = feature;
    next
}

/// Set the culture's environment.
pub fn with_environment(catalog: &Catalog, hero: &Hero, id: Option<&str>) -> Hero {
    with_culture_aspect(catalog, hero, CultureAspect::Environment, id)
}

/// Set the culture's organization.
pub fn with_organization(catalog: &Catalog, hero: &Hero, id: Option<&str>) -> Hero {
    with_culture_aspect(catalog, hero, CultureAspect::Organization, id)
}

/// Set the culture's upbringing.
pub fn with_upbringing(catalog: &Catalog, hero: &Hero, id: Option<&str>) -> Hero {
    with_culture_aspect(catalog, hero, CultureAspect::Upbringing, id)
}

/// Select or clear the career.
///
/// Project points and renown are recomputed from the bonus features in
/// `career.features`, replacing whatever the previous career granted. The
/// title does not count. Clearing the career sets both to 0.
pub fn with_career(hero: &Hero, career: Option<&Career>) -> Hero {
    let mut next = hero.clone();
    next.career = career.cloned();
    next.state.project_points = career_bonus(career, FeatureField::ProjectPoints);
    next.state.renown = career_bonus(career, FeatureField::Renown);
    debug!(
        hero = %hero.id,
        career = ?career.map(|c| &c.id),
        project_points = next.state.project_points,
        renown = next.state.renown,
        "set career"
    );
    next
}

fn career_bonus(career: Option<&Career>, field: FeatureField) -> i32 {
    career
        .into_iter()
        .flat_map(|c| c.features.iter())
        .filter_map(Feature::as_bonus)
        .filter(|bonus| bonus.field == field)
        .map(|bonus| bonus.value)
        .sum()
}

/// Select or clear the class.
pub fn with_class(hero: &Hero, class: Option<&HeroClass>) -> Hero {
    debug!(hero = %hero.id, class = ?class.map(|c| &c.id), "set class");
    Hero {
        class: class.cloned(),
        ..hero.clone()
    }
}

/// Assign a characteristic array to the hero's class.
///
/// The array must be one of the valid arrays for the class's primary
/// characteristics. Without a class the hero is returned unchanged.
pub fn with_characteristics(hero: &Hero, array: CharacteristicArray) -> RulesResult<Hero> {
    let mut next = hero.clone();
    let Some(class) = next.class.as_mut() else {
        warn!(hero = %hero.id, "no class selected");
        return Ok(next);
    };
    if !is_valid_array(&array, &class.primary_characteristics) {
        return Err(RulesError::InvalidCharacteristics {
            class: class.name.clone(),
            array: array.to_string(),
        });
    }
    class.characteristics = array.to_assignments();
    debug!(hero = %hero.id, %array, "set characteristics");
    Ok(next)
}

/// Select exactly the given subclasses.
///
/// Ids that do not name one of the class's subclasses are ignored. Selecting
/// more than the class allows is an error.
pub fn with_subclasses(hero: &Hero, ids: &[&str]) -> RulesResult<Hero> {
    let mut next = hero.clone();
    let Some(class) = next.class.as_mut() else {
        warn!(hero = %hero.id, "no class selected");
        return Ok(next);
    };
    let wanted = |id: &str| ids.iter().any(|w| w.eq_ignore_ascii_case(id));
    let requested = class.subclasses.iter().filter(|sc| wanted(&sc.id)).count();
    if requested > class.subclass_count {
        return Err(RulesError::TooManySubclasses {
            class: class.name.clone(),
            allowed: class.subclass_count,
            requested,
        });
    }
    if requested < ids.len() {
        warn!(hero = %hero.id, ?ids, "ignoring unknown subclass ids");
    }
    for subclass in &mut class.subclasses {
        subclass.selected = wanted(&subclass.id);
    }
    debug!(hero = %hero.id, ?ids, "set subclasses");
    Ok(next)
}

/// Select or clear the kit.
pub fn with_kit(hero: &Hero, kit: Option<&Kit>) -> Hero {
    debug!(hero = %hero.id, kit = ?kit.map(|k| &k.id), "set kit");
    Hero {
        kit: kit.cloned(),
        ..hero.clone()
    }
}

/// Select or clear the complication.
pub fn with_complication(hero: &Hero, complication: Option<&Complication>) -> Hero {
    debug!(hero = %hero.id, complication = ?complication.map(|c| &c.id), "set complication");
    Hero {
        complication: complication.cloned(),
        ..hero.clone()
    }
}

/// Replace the payload of one of the hero's features.
///
/// An unknown feature id leaves the hero unchanged. The new payload must have
/// the same type as the old one.
pub fn with_feature_data(hero: &Hero, feature_id: &str, data: FeatureData) -> RulesResult<Hero> {
    let mut next = hero.clone();
    let target = get_features_mut(&mut next)
        .into_iter()
        .find(|feature| feature.id == feature_id);
    let Some(feature) = target else {
        warn!(hero = %hero.id, feature = feature_id, "unknown feature");
        return Ok(next);
    };
    if !feature.data.same_type(&data) {
        return Err(RulesError::FeatureTypeMismatch {
            feature: feature_id.to_string(),
            expected: feature.data.type_name(),
            actual: data.type_name(),
        });
    }
    feature.data = data;
    debug!(hero = %hero.id, feature = feature_id, "set feature data");
    Ok(next)
}

/// Rename the hero.
pub fn with_name(hero: &Hero, name: &str) -> Hero {
    debug!(hero = %hero.id, name, "set name");
    Hero {
        name: name.to_string(),
        ..hero.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characteristics::calculate_characteristic_arrays;
    use crate::features::{get_features, unresolved_choices};
    use crate::hero::create_hero;
    use forge_core::{Characteristic, SelectionData};

    fn setup() -> (Catalog, Hero) {
        let catalog = Catalog::builtin();
        let hero = create_hero(&catalog, "orden").unwrap();
        (catalog, hero)
    }

    #[test]
    fn actions_do_not_touch_the_input() {
        let (catalog, hero) = setup();
        let next = with_ancestry(&hero, catalog.ancestry("human"));
        assert!(hero.ancestry.is_none());
        assert_eq!(next.ancestry.as_ref().map(|a| a.id.as_str()), Some("human"));
        assert_eq!(next.id, hero.id);
    }

    #[test]
    fn hero_copy_is_isolated_from_catalog() {
        let (catalog, hero) = setup();
        let mut hero = with_ancestry(&hero, catalog.ancestry("human"));
        if let Some(ancestry) = hero.ancestry.as_mut() {
            ancestry.features[0].data = FeatureData::Text;
        }
        let original = &catalog.ancestry("human").unwrap().features[0];
        assert_eq!(original.data.type_name(), "size");
    }

    #[test]
    fn career_recomputes_totals() {
        let (catalog, mut hero) = setup();
        hero.state.project_points = 999;
        hero.state.renown = 7;

        let hero = with_career(&hero, catalog.career("artisan"));
        assert_eq!(hero.state.project_points, 240);
        assert_eq!(hero.state.renown, 0);

        let hero = with_career(&hero, catalog.career("performer"));
        assert_eq!(hero.state.project_points, 0);
        assert_eq!(hero.state.renown, 2);

        let hero = with_career(&hero, catalog.career("laborer"));
        assert_eq!(hero.state.project_points, 120);
        assert_eq!(hero.state.renown, 1);

        let hero = with_career(&hero, None);
        assert!(hero.career.is_none());
        assert_eq!(hero.state.project_points, 0);
        assert_eq!(hero.state.renown, 0);
    }

    #[test]
    fn career_title_bonus_is_not_counted() {
        let (_, hero) = setup();
        let career = Career::new(
            "herald",
            "Herald",
            "",
            vec![Feature::bonus("herald-renown", "Renown", FeatureField::Renown, 1)],
            Some(Feature::bonus("herald-title", "Famed", FeatureField::Renown, 3)),
        );

        let hero = with_career(&hero, Some(&career));
        assert_eq!(hero.state.renown, 1);
    }

    #[test]
    fn career_leaves_other_counters_alone() {
        let (catalog, mut hero) = setup();
        hero.state.wealth = 3;
        hero.state.victories = 2;
        let hero = with_career(&hero, catalog.career("soldier"));
        assert_eq!(hero.state.wealth, 3);
        assert_eq!(hero.state.victories, 2);
    }

    #[test]
    fn bespoke_aspects() {
        let (catalog, hero) = setup();
        let hero = with_culture(&hero, catalog.bespoke_culture());
        let hero = with_environment(&catalog, &hero, Some("urban"));
        let hero = with_organization(&catalog, &hero, Some("communal"));
        let hero = with_upbringing(&catalog, &hero, Some("lawless"));
        let culture = hero.culture.as_ref().unwrap();
        assert_eq!(culture.environment.as_ref().unwrap().id, "urban");
        assert_eq!(culture.organization.as_ref().unwrap().id, "communal");
        assert_eq!(culture.upbringing.as_ref().unwrap().id, "lawless");
        assert!(catalog.bespoke_culture().unwrap().environment.is_none());

        let unchanged = with_environment(&catalog, &hero, Some("underdark"));
        assert_eq!(unchanged, hero);

        let cleared = with_environment(&catalog, &hero, None);
        assert!(cleared.culture.unwrap().environment.is_none());
    }

    #[test]
    fn aspect_without_culture_is_noop() {
        let (catalog, hero) = setup();
        assert_eq!(with_environment(&catalog, &hero, Some("urban")), hero);
    }

    #[test]
    fn characteristics_must_be_valid() {
        let (catalog, hero) = setup();
        let unchanged =
            with_characteristics(&hero, CharacteristicArray::new([2, 1, 0, 0, -1])).unwrap();
        assert_eq!(unchanged, hero);

        let hero = with_class(&hero, catalog.class("fury"));
        let bad = CharacteristicArray::new([-1, 2, 1, 0, 0]);
        assert!(matches!(
            with_characteristics(&hero, bad),
            Err(RulesError::InvalidCharacteristics { .. })
        ));

        let arrays = calculate_characteristic_arrays(&[Characteristic::Might, Characteristic::Agility]);
        let hero = with_characteristics(&hero, arrays[0]).unwrap();
        let class = hero.class.as_ref().unwrap();
        assert_eq!(class.characteristic_array(), Some(arrays[0]));
        assert_eq!(class.characteristics.len(), 5);
    }

    #[test]
    fn subclass_limit() {
        let (catalog, hero) = setup();
        let hero = with_class(&hero, catalog.class("fury"));
        assert_eq!(
            with_subclasses(&hero, &["berserker", "reaver"]),
            Err(RulesError::TooManySubclasses {
                class: "Fury".to_string(),
                allowed: 1,
                requested: 2,
            })
        );

        let hero = with_subclasses(&hero, &["reaver", "no-such-aspect"]).unwrap();
        let class = hero.class.as_ref().unwrap();
        let selected: Vec<&str> = class.selected_subclasses().map(|s| s.id.as_str()).collect();
        assert_eq!(selected, vec!["reaver"]);

        let hero = with_class(&hero, catalog.class("conduit"));
        let hero = with_subclasses(&hero, &["life", "storm"]).unwrap();
        assert_eq!(hero.class.unwrap().selected_subclasses().count(), 2);
    }

    #[test]
    fn fill_choice() {
        let (catalog, hero) = setup();
        let hero = with_career(&hero, catalog.career("performer"));
        assert!(unresolved_choices(&hero).iter().any(|f| f.id == "performer-skills"));

        let picks = SelectionData {
            selected: vec!["Brag".to_string(), "Lie".to_string()],
            ..SelectionData::choose(2, &["Brag", "Lie"])
        };
        let hero = with_feature_data(&hero, "performer-skills", FeatureData::Skill(picks)).unwrap();
        assert!(unresolved_choices(&hero).is_empty());

        let wrong = FeatureData::Language(SelectionData::fixed(&["Caelian"]));
        assert_eq!(
            with_feature_data(&hero, "performer-skills", wrong),
            Err(RulesError::FeatureTypeMismatch {
                feature: "performer-skills".to_string(),
                expected: "skill",
                actual: "language",
            })
        );

        let unchanged = with_feature_data(&hero, "nothing-here", FeatureData::Text).unwrap();
        assert_eq!(unchanged, hero);
        assert_eq!(get_features(&hero).len(), 3);
    }

    #[test]
    fn name_and_remaining_selections() {
        let (catalog, hero) = setup();
        let hero = with_name(&hero, "Vess");
        let hero = with_kit(&hero, catalog.kit("panther"));
        let hero = with_complication(&hero, catalog.complication("cursed-weapon"));
        assert_eq!(hero.name, "Vess");
        assert_eq!(hero.kit.as_ref().unwrap().stamina, 6);
        assert!(with_complication(&hero, None).complication.is_none());
    }
}
