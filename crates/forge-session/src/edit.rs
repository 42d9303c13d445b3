//! Hero edit sessions.
//!
//! An [`EditSession`] holds a working copy of one hero. Every action
//! replaces the working copy with the result of a single build action and
//! marks the session dirty; characteristic, subclass, and feature-data edits
//! that leave the hero as it was keep it clean. Nothing reaches the library until
//! [`EditSession::save_changes`] is called.

use forge_core::{CharacteristicArray, FeatureData, Hero};
use forge_rules::{
    Catalog, CatalogKind, CultureAspect, Section, SectionState, section_states, with_ancestry,
    with_career, with_characteristics, with_class, with_complication, with_culture,
    with_culture_aspect, with_feature_data, with_kit, with_name, with_subclasses,
};
use tracing::{debug, warn};

use crate::error::SessionResult;
use crate::library::HeroLibrary;

/// A working copy of a hero being edited.
pub struct EditSession<'c> {
    catalog: &'c Catalog,
    original: Hero,
    hero: Hero,
    dirty: bool,
    section: Section,
}

impl<'c> EditSession<'c> {
    /// Start editing `hero`.
    pub fn new(catalog: &'c Catalog, hero: Hero) -> Self {
        Self {
            catalog,
            original: hero.clone(),
            hero,
            dirty: false,
            section: Section::Ancestry,
        }
    }

    /// The working copy.
    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    /// The hero as it was when editing started (or last saved).
    pub fn original(&self) -> &Hero {
        &self.original
    }

    /// Whether there are unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The section currently shown.
    pub fn section(&self) -> Section {
        self.section
    }

    /// Switch to another section.
    pub fn show_section(&mut self, section: Section) {
        self.section = section;
    }

    /// Completion state of every section.
    pub fn section_states(&self) -> Vec<(Section, SectionState)> {
        section_states(&self.hero)
    }

    fn apply(&mut self, next: Hero) {
        self.hero = next;
        self.dirty = true;
    }

    /// Like [`Self::apply`], but a result equal to the working copy leaves the session clean.
    fn apply_if_changed(&mut self, next: Hero) {
        if next != self.hero {
            self.apply(next);
        }
    }

    /// Select an ancestry by id, or clear it with `None`. Returns false for an unknown id.
    pub fn select_ancestry(&mut self, id: Option<&str>) -> bool {
        let catalog = self.catalog;
        let Some(ancestry) = resolve(CatalogKind::Ancestry, id, |id| catalog.ancestry(id)) else {
            return false;
        };
        self.apply(with_ancestry(&self.hero, ancestry));
        true
    }

    /// Select a culture by id, or clear it with `None`. Returns false for an unknown id.
    pub fn select_culture(&mut self, id: Option<&str>) -> bool {
        let catalog = self.catalog;
        let Some(culture) = resolve(CatalogKind::Culture, id, |id| catalog.culture(id)) else {
            return false;
        };
        self.apply(with_culture(&self.hero, culture));
        true
    }

    /// Select a career by id, or clear it with `None`. Returns false for an unknown id.
    pub fn select_career(&mut self, id: Option<&str>) -> bool {
        let catalog = self.catalog;
        let Some(career) = resolve(CatalogKind::Career, id, |id| catalog.career(id)) else {
            return false;
        };
        self.apply(with_career(&self.hero, career));
        true
    }

    /// Select a class by id, or clear it with `None`. Returns false for an unknown id.
    pub fn select_class(&mut self, id: Option<&str>) -> bool {
        let catalog = self.catalog;
        let Some(class) = resolve(CatalogKind::Class, id, |id| catalog.class(id)) else {
            return false;
        };
        self.apply(with_class(&self.hero, class));
        true
    }

    /// Select a kit by id, or clear it with `None`. Returns false for an unknown id.
    pub fn select_kit(&mut self, id: Option<&str>) -> bool {
        let catalog = self.catalog;
        let Some(kit) = resolve(CatalogKind::Kit, id, |id| catalog.kit(id)) else {
            return false;
        };
        self.apply(with_kit(&self.hero, kit));
        true
    }

    /// Select a complication by id, or clear it with `None`. Returns false for an unknown id.
    pub fn select_complication(&mut self, id: Option<&str>) -> bool {
        let catalog = self.catalog;
        let Some(complication) =
            resolve(CatalogKind::Complication, id, |id| catalog.complication(id))
        else {
            return false;
        };
        self.apply(with_complication(&self.hero, complication));
        true
    }

    /// Set the culture's environment.
    pub fn set_environment(&mut self, id: Option<&str>) -> bool {
        self.set_aspect(CultureAspect::Environment, id)
    }

    /// Set the culture's organization.
    pub fn set_organization(&mut self, id: Option<&str>) -> bool {
        self.set_aspect(CultureAspect::Organization, id)
    }

    /// Set the culture's upbringing.
    pub fn set_upbringing(&mut self, id: Option<&str>) -> bool {
        self.set_aspect(CultureAspect::Upbringing, id)
    }

    /// Returns false (and changes nothing) without a culture or for an unknown id.
    fn set_aspect(&mut self, aspect: CultureAspect, id: Option<&str>) -> bool {
        if self.hero.culture.is_none() {
            return false;
        }
        let known = match (aspect, id) {
            (_, None) => true,
            (CultureAspect::Environment, Some(id)) => self.catalog.environment(id).is_some(),
            (CultureAspect::Organization, Some(id)) => self.catalog.organization(id).is_some(),
            (CultureAspect::Upbringing, Some(id)) => self.catalog.upbringing(id).is_some(),
        };
        if !known {
            return false;
        }
        self.apply(with_culture_aspect(self.catalog, &self.hero, aspect, id));
        true
    }

    /// Assign a characteristic array to the class.
    pub fn set_characteristics(&mut self, array: CharacteristicArray) -> SessionResult<()> {
        let next = with_characteristics(&self.hero, array)?;
        self.apply_if_changed(next);
        Ok(())
    }

    /// Select exactly the given subclasses.
    pub fn set_subclasses(&mut self, ids: &[&str]) -> SessionResult<()> {
        let next = with_subclasses(&self.hero, ids)?;
        self.apply_if_changed(next);
        Ok(())
    }

    /// Fill in a feature's payload.
    pub fn set_feature_data(&mut self, feature_id: &str, data: FeatureData) -> SessionResult<()> {
        let next = with_feature_data(&self.hero, feature_id, data)?;
        self.apply_if_changed(next);
        Ok(())
    }

    /// Rename the hero.
    pub fn set_name(&mut self, name: &str) {
        self.apply(with_name(&self.hero, name));
    }

    /// Write the working copy to the library and clear the dirty flag.
    ///
    /// Returns false, leaving the session dirty, if the library has no hero
    /// with this id.
    pub fn save_changes(&mut self, library: &mut HeroLibrary) -> SessionResult<bool> {
        if !library.save_hero(&self.hero)? {
            warn!(hero = %self.hero.id, "hero is not in the library");
            return Ok(false);
        }
        self.original = self.hero.clone();
        self.dirty = false;
        debug!(hero = %self.hero.id, "saved changes");
        Ok(true)
    }

    /// Discard the working copy, returning the hero as it was last saved.
    pub fn cancel_changes(self) -> Hero {
        if self.dirty {
            debug!(hero = %self.hero.id, "discarded changes");
        }
        self.original
    }
}

/// Resolve an optional catalog id: `Some(None)` clears, `None` means the id is unknown.
fn resolve<'c, T>(
    kind: CatalogKind,
    id: Option<&str>,
    lookup: impl Fn(&str) -> Option<&'c T>,
) -> Option<Option<&'c T>> {
    match id {
        None => Some(None),
        Some(id) => match lookup(id) {
            Some(found) => Some(Some(found)),
            None => {
                warn!(%kind, id, "unknown catalog id");
                None
            }
        },
    }
}
