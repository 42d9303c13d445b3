//! Hero editing sessions, library, and persistence for Forge.
//!
//! Provides the edit-session orchestrator that applies build actions to a
//! working copy, the hero library that persists the hero list through a
//! key-value [`Store`], JSON and Markdown export, and an in-memory log of
//! rendering faults.

pub mod config;
pub mod diagnostics;
pub mod edit;
pub mod error;
pub mod export;
pub mod library;
pub mod store;

pub use config::SessionConfig;
pub use diagnostics::{ErrorEntry, ErrorLog};
pub use edit::EditSession;
pub use error::{SessionError, SessionResult};
pub use export::{ExportFormat, describe_data, export_hero, parse_hero, render_sheet, suggested_filename};
pub use library::HeroLibrary;
pub use store::{FileStore, MemoryStore, Store, StoreKey, load_json, save_json};
