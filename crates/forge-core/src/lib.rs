//! Core types for Forge: heroes, features, and reference entities.
//!
//! This crate defines the data model that the rules engine derives state
//! from. It holds no logic beyond small accessors; every type is plain data
//! that round-trips through JSON.

/// The five hero characteristics and characteristic arrays.
pub mod characteristic;
/// Reference entities: ancestries, cultures, careers, classes, kits, complications.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// Features and their typed payloads.
pub mod feature;
/// The hero record and its mutable state counters.
pub mod hero;
/// Homebrew sourcebooks and user options.
pub mod sourcebook;

/// Re-export characteristic types.
pub use characteristic::{Characteristic, CharacteristicArray, CharacteristicValue};
/// Re-export reference entity types.
pub use entity::{
    Ancestry, CampaignSetting, Career, Complication, Culture, FeaturesAtLevel, HeroClass, Kit,
    SubClass,
};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export feature types.
pub use feature::{Ability, BonusData, Feature, FeatureData, FeatureField, SelectionData, SizeData};
/// Re-export hero types.
pub use hero::{Hero, HeroId, HeroState};
/// Re-export sourcebook types.
pub use sourcebook::{Options, Sourcebook};
