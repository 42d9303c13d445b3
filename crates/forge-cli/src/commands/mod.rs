pub mod arrays;
pub mod catalog;
pub mod choose;
pub mod delete;
pub mod edit;
pub mod export;
pub mod import;
pub mod list;
pub mod new;
pub mod show;

use std::path::Path;

use colored::{ColoredString, Colorize};
use forge_rules::{Catalog, SectionState};
use forge_session::{HeroLibrary, SessionConfig};
use tracing::debug;

/// Open the hero library in `data_dir` and build the catalog, homebrew included.
fn open(data_dir: &Path) -> Result<(SessionConfig, HeroLibrary, Catalog), String> {
    let config = SessionConfig::default().with_data_dir(data_dir);
    let library = HeroLibrary::load(Box::new(config.file_store()))
        .map_err(|e| format!("cannot load heroes from {}: {e}", data_dir.display()))?;
    let homebrew = library.homebrew().map_err(|e| e.to_string())?;
    let options = library.options().map_err(|e| e.to_string())?;
    let config = config.with_default_setting(&options.default_setting);
    let catalog = Catalog::builtin().with_homebrew(&homebrew);
    debug!(dir = %data_dir.display(), heroes = library.len(), "opened library");
    Ok((config, library, catalog))
}

/// Section state marker for terminal output.
fn state_marker(state: SectionState) -> ColoredString {
    match state {
        SectionState::Completed => "done".green(),
        SectionState::NotStarted => "todo".red(),
        SectionState::Optional => "opt ".dimmed(),
    }
}

/// First eight characters of an id, for tables.
fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Shorten text to `max` characters for a table cell.
fn truncate(text: &str, max: usize) -> String {
    if text.is_empty() {
        "-".to_string()
    } else if text.chars().count() > max {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}
