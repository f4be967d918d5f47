use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use folio_util::{app_config_dir, expand_tilde};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG_PATH";

const CONFIG_FILE_NAME: &str = "config.json";

/// Rows between the top of the viewport and the tracker's reference point.
pub const DEFAULT_FIXED_OFFSET: u32 = 2;

/// Duration of an animated jump to a section.
pub const DEFAULT_SMOOTH_SCROLL_MS: u64 = 450;

/// Settings read from `~/.config/folio/config.json`.
///
/// Every field is optional in the file; missing or unreadable files yield
/// the defaults. CLI flags override whatever is loaded here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Content file rendered instead of the embedded sample.
    pub content_path: Option<PathBuf>,
    /// Height of the sticky header the reference point sits below.
    pub fixed_offset: u32,
    /// Minimum spacing between tracker recomputes; `0` recomputes on every event.
    pub scroll_throttle_ms: u64,
    /// Length of the navigation animation; `0` jumps immediately.
    pub smooth_scroll_ms: u64,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            content_path: None,
            fixed_offset: DEFAULT_FIXED_OFFSET,
            scroll_throttle_ms: 0,
            smooth_scroll_ms: DEFAULT_SMOOTH_SCROLL_MS,
        }
    }
}

impl FolioConfig {
    /// Loads the config from the default location.
    pub fn load() -> Self {
        Self::load_from(&default_config_path())
    }

    /// Loads the config at `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = fs::read_to_string(path) else {
            return FolioConfig::default();
        };
        match serde_json::from_str::<FolioConfig>(&content) {
            Ok(mut config) => {
                config.content_path = config.content_path.map(|p| expand_tilde(&p.to_string_lossy()));
                config
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "Failed to parse config file; using defaults");
                FolioConfig::default()
            }
        }
    }

    pub fn scroll_throttle(&self) -> Option<Duration> {
        (self.scroll_throttle_ms > 0).then(|| Duration::from_millis(self.scroll_throttle_ms))
    }

    pub fn smooth_scroll_duration(&self) -> Duration {
        Duration::from_millis(self.smooth_scroll_ms)
    }
}

/// Get the default path for the Folio configuration file.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = env::var(CONFIG_PATH_ENV)
        && !path.trim().is_empty()
    {
        return expand_tilde(&path);
    }

    app_config_dir().join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().expect("tempdir");
        let config = FolioConfig::load_from(&dir.path().join("absent.json"));
        assert_eq!(config, FolioConfig::default());
        assert_eq!(config.scroll_throttle(), None);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "fixed_offset": 5, "scroll_throttle_ms": 16 }"#).expect("write config");

        let config = FolioConfig::load_from(&path);
        assert_eq!(config.fixed_offset, 5);
        assert_eq!(config.scroll_throttle(), Some(Duration::from_millis(16)));
        assert_eq!(config.smooth_scroll_ms, DEFAULT_SMOOTH_SCROLL_MS);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").expect("write config");
        assert_eq!(FolioConfig::load_from(&path), FolioConfig::default());
    }

    #[test]
    fn full_file_overrides_every_default() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "content_path": "/srv/me.yaml", "fixed_offset": 3, "scroll_throttle_ms": 0, "smooth_scroll_ms": 0 }"#,
        )
        .expect("write config");

        let config = FolioConfig::load_from(&path);
        assert_eq!(config.content_path, Some(PathBuf::from("/srv/me.yaml")));
        assert_eq!(config.fixed_offset, 3);
        assert!(config.smooth_scroll_duration().is_zero());
    }

    #[test]
    fn default_path_lives_in_the_app_config_dir() {
        temp_env::with_var_unset(CONFIG_PATH_ENV, || {
            assert_eq!(default_config_path(), app_config_dir().join("config.json"));
        });
    }

    #[test]
    fn env_override_controls_default_path() {
        temp_env::with_var(CONFIG_PATH_ENV, Some("/tmp/folio-test/config.json"), || {
            assert_eq!(default_config_path(), PathBuf::from("/tmp/folio-test/config.json"));
        });
    }
}
