//! Error types for the rules engine.

/// Errors that can occur while building or deriving hero state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// The campaign setting id is not in the catalog.
    #[error("unknown campaign setting: {0}")]
    UnknownSetting(String),

    /// The section name is not one of the build sections.
    #[error("unknown section: {0}")]
    UnknownSection(String),

    /// The section state name is not recognised.
    #[error("unknown section state: {0}")]
    UnknownSectionState(String),

    /// The catalog kind name is not recognised.
    #[error("unknown catalog kind: {0}")]
    UnknownCatalogKind(String),

    /// The characteristic array is not valid for the hero's class.
    #[error("characteristics {array} are not a valid array for {class}")]
    InvalidCharacteristics {
        /// Class name.
        class: String,
        /// The rejected array, rendered.
        array: String,
    },

    /// More subclasses were selected than the class allows.
    #[error("{class} allows {allowed} subclass(es), {requested} selected")]
    TooManySubclasses {
        /// Class name.
        class: String,
        /// The class's subclass count.
        allowed: usize,
        /// How many valid subclass ids were requested.
        requested: usize,
    },

    /// Feature data of one type was supplied for a feature of another type.
    #[error("feature '{feature}' expects {expected} data, got {actual}")]
    FeatureTypeMismatch {
        /// Feature id.
        feature: String,
        /// The feature's current `type` tag.
        expected: &'static str,
        /// The supplied `type` tag.
        actual: &'static str,
    },
}

/// Convenience result type for rules operations.
pub type RulesResult<T> = Result<T, RulesError>;
