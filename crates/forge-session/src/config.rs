//! Configuration for hero storage and new heroes.

use std::path::PathBuf;

use forge_rules::DEFAULT_SETTING;

use crate::store::FileStore;

/// Prefix put in front of every stored key.
pub const DEFAULT_KEY_PREFIX: &str = "forgesteel-";

/// Configuration for a hero library.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Directory the file store writes to.
    pub data_dir: PathBuf,
    /// Prefix for stored file names.
    pub key_prefix: String,
    /// Campaign setting for new heroes.
    pub default_setting: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".forge"),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            default_setting: DEFAULT_SETTING.to_string(),
        }
    }
}

impl SessionConfig {
    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the stored key prefix.
    pub fn with_key_prefix(mut self, prefix: &str) -> Self {
        self.key_prefix = prefix.to_string();
        self
    }

    /// Set the campaign setting for new heroes. Blank input keeps the default.
    pub fn with_default_setting(mut self, setting: &str) -> Self {
        let setting = setting.trim();
        if !setting.is_empty() {
            self.default_setting = setting.to_string();
        }
        self
    }

    /// A file store rooted at this configuration's data directory.
    pub fn file_store(&self) -> FileStore {
        FileStore::new(&self.data_dir).with_prefix(&self.key_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.key_prefix, "forgesteel-");
        assert_eq!(cfg.default_setting, "orden");
    }

    #[test]
    fn builder_methods() {
        let cfg = SessionConfig::default()
            .with_data_dir("/tmp/heroes")
            .with_key_prefix("test-")
            .with_default_setting("homebrew-world");
        assert_eq!(cfg.data_dir, PathBuf::from("/tmp/heroes"));
        assert_eq!(cfg.key_prefix, "test-");
        assert_eq!(cfg.default_setting, "homebrew-world");
    }

    #[test]
    fn blank_setting_ignored() {
        let cfg = SessionConfig::default().with_default_setting("  ");
        assert_eq!(cfg.default_setting, "orden");
    }

    #[test]
    fn file_store_uses_prefix() {
        let cfg = SessionConfig::default()
            .with_data_dir("/tmp/heroes")
            .with_key_prefix("x-");
        let store = cfg.file_store();
        assert_eq!(
            store.path(crate::store::StoreKey::Heroes),
            PathBuf::from("/tmp/heroes/x-heroes.json")
        );
    }
}
