//! Launcher configuration: names, asset paths, and action targets.
//!
//! Everything that used to be a per-user constant lives here so the binary
//! carries no machine-specific paths. The file format is JSON; every field is
//! optional and falls back to [`LauncherConfig::default`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Community chat invite opened by the "Join the Discord" link.
pub const DEFAULT_CHAT_URL: &str = "https://discord.gg/HNWaj5cfQ6";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Shown in the title bar, the identity column, and the window title.
    pub app_name: String,
    /// Image drawn in the title bar and the identity column.
    pub logo_path: Option<PathBuf>,
    /// Taskbar / window icon. Falls back to `logo_path` when unset.
    pub icon_path: Option<PathBuf>,
    /// Program started by the launch button.
    pub executable_path: Option<PathBuf>,
    pub chat_url: String,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            app_name: "Trinity".to_string(),
            logo_path: None,
            icon_path: None,
            executable_path: None,
            chat_url: DEFAULT_CHAT_URL.to_string(),
        }
    }
}

impl LauncherConfig {
    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the config from the optional first command-line argument.
    ///
    /// No argument yields the defaults. A bad file is logged and also yields
    /// the defaults; the window still opens.
    pub fn from_arg(arg: Option<&str>) -> Self {
        let Some(path) = arg else {
            log::info!("No config file given, using defaults.");
            return Self::default();
        };
        match Self::load(Path::new(path)) {
            Ok(config) => {
                log::info!("Loaded config from {path}.");
                config
            }
            Err(e) => {
                log::error!("{e}; falling back to defaults.");
                Self::default()
            }
        }
    }

    /// Path of the window icon: explicit icon first, then the logo.
    pub fn icon_source(&self) -> Option<&Path> {
        self.icon_path.as_deref().or(self.logo_path.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "executable_path": "/opt/trinity/game" }}"#).unwrap();

        let config = LauncherConfig::load(file.path()).unwrap();
        assert_eq!(config.app_name, "Trinity");
        assert_eq!(config.chat_url, DEFAULT_CHAT_URL);
        assert_eq!(
            config.executable_path.as_deref(),
            Some(Path::new("/opt/trinity/game"))
        );
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LauncherConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = LauncherConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
    }

    #[test]
    fn bad_argument_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let config = LauncherConfig::from_arg(missing.to_str());
        assert_eq!(config, LauncherConfig::default());
        assert_eq!(LauncherConfig::from_arg(None), LauncherConfig::default());
    }

    #[test]
    fn icon_falls_back_to_logo() {
        let mut config = LauncherConfig {
            logo_path: Some(PathBuf::from("logo.png")),
            ..Default::default()
        };
        assert_eq!(config.icon_source(), Some(Path::new("logo.png")));

        config.icon_path = Some(PathBuf::from("icon.png"));
        assert_eq!(config.icon_source(), Some(Path::new("icon.png")));
    }
}
