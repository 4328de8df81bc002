//! Player configuration

use std::env;
use std::path::PathBuf;

/// Environment variable overriding where desktop storage lives
pub const STORAGE_PATH_VAR: &str = "KIDSAPP_STORAGE_PATH";

/// Player configuration loaded from environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Storage file for the desktop platform; `None` uses the platform
    /// config directory
    pub storage_path: Option<PathBuf>,
}

impl PlayerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Missing or blank values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let storage_path = lookup(STORAGE_PATH_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Self { storage_path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_path_is_read_and_trimmed() {
        let config = PlayerConfig::from_lookup(|key| {
            (key == STORAGE_PATH_VAR).then(|| " /tmp/kids.json ".to_string())
        });
        assert_eq!(config.storage_path, Some(PathBuf::from("/tmp/kids.json")));
    }

    #[test]
    fn blank_or_missing_values_use_defaults() {
        assert_eq!(PlayerConfig::from_lookup(|_| None), PlayerConfig::default());
        assert_eq!(
            PlayerConfig::from_lookup(|_| Some("   ".to_string())),
            PlayerConfig::default()
        );
    }
}
