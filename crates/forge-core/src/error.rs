/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when parsing core identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The text does not name one of the five characteristics.
    #[error("unknown characteristic: \"{0}\"")]
    UnknownCharacteristic(String),

    /// The text does not name a bonus field.
    #[error("unknown feature field: \"{0}\"")]
    UnknownField(String),

    /// A characteristic array did not have one value per characteristic.
    #[error("characteristic array must have 5 values, got {0}")]
    ArrayLength(usize),

    /// A feature payload could not be read for its `type` tag.
    #[error("feature \"{name}\" has an invalid {kind} payload: {reason}")]
    InvalidFeature {
        /// Display name of the feature.
        name: String,
        /// The `type` tag the payload was read as.
        kind: String,
        /// What went wrong.
        reason: String,
    },
}
