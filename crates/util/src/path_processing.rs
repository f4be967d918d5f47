use std::path::PathBuf;

use dirs_next::{config_dir, home_dir};

/// Name of the directory holding Folio's config, preferences and logs.
pub const APP_DIR_NAME: &str = "folio";

/// Expands a leading `~` (Unix or Windows separator) to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let trimmed = path.trim();
    let home = || home_dir().unwrap_or_else(|| PathBuf::from("~"));
    if trimmed == "~" {
        return home();
    }
    if let Some(rest) = trimmed.strip_prefix("~/").or_else(|| trimmed.strip_prefix("~\\")) {
        return home().join(rest);
    }
    PathBuf::from(trimmed)
}

/// Platform config directory for Folio (`~/.config/folio` on Linux).
pub fn app_config_dir() -> PathBuf {
    config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_trimmed_but_untouched() {
        assert_eq!(expand_tilde("  /etc/folio.json "), PathBuf::from("/etc/folio.json"));
        assert_eq!(expand_tilde("relative/~/file"), PathBuf::from("relative/~/file"));
    }

    #[test]
    fn tilde_prefix_expands_to_home() {
        let Some(home) = home_dir() else {
            return;
        };
        assert_eq!(expand_tilde("~"), home);
        assert_eq!(expand_tilde("~/portfolio.yaml"), home.join("portfolio.yaml"));
    }

    #[test]
    fn config_dir_ends_with_app_name() {
        assert!(app_config_dir().ends_with(APP_DIR_NAME));
    }
}
