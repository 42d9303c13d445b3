//! Hero construction rules for Forge.
//!
//! Provides the reference-data catalog, the derivations a hero sheet needs
//! (characteristic arrays, feature lists, bonus totals), the build actions
//! that apply one change at a time, the section completion state machine,
//! and hero validation. Everything here is pure and synchronous.

pub mod build;
pub mod catalog;
pub mod characteristics;
pub mod error;
pub mod features;
pub mod hero;
pub mod section;
pub mod validate;

pub use build::{
    CultureAspect, with_ancestry, with_career, with_characteristics, with_class,
    with_complication, with_culture, with_culture_aspect, with_environment, with_feature_data,
    with_kit, with_name, with_organization, with_subclasses, with_upbringing,
};
pub use catalog::{BESPOKE_CULTURE, Catalog, CatalogEntry, CatalogKind, DEFAULT_SETTING};
pub use characteristics::{calculate_characteristic_arrays, is_valid_array};
pub use error::{RulesError, RulesResult};
pub use features::{
    bonus_total, features_by_section, features_for_section, get_features, get_features_mut,
    unresolved_choices,
};
pub use hero::{create_hero, update_hero};
pub use section::{Section, SectionState, is_build_complete, section_state, section_states};
pub use validate::{ValidationIssue, validate_hero};
