//! Error types for editing sessions and persistence.

use thiserror::Error;

use forge_core::CoreError;
use forge_rules::RulesError;

use crate::store::StoreKey;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while editing, storing, or exporting heroes.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A build action was rejected.
    #[error("{0}")]
    Rules(#[from] RulesError),

    /// Malformed core data.
    #[error("{0}")]
    Core(#[from] CoreError),

    /// The store could not read or write a key.
    #[error("store error for '{key}': {source}")]
    Store {
        /// The key being read or written.
        key: StoreKey,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Stored or imported JSON did not parse.
    #[error("invalid hero data: {0}")]
    Json(#[from] serde_json::Error),

    /// No hero matched a lookup.
    #[error("no hero matches '{0}'")]
    HeroNotFound(String),

    /// A lookup matched more than one hero.
    #[error("'{query}' matches {count} heroes")]
    AmbiguousHero {
        /// The lookup text.
        query: String,
        /// How many heroes matched.
        count: usize,
    },

    /// Unknown export format name.
    #[error("unknown export format: {0}")]
    UnknownFormat(String),
}
