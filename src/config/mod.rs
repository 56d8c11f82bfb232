// SPDX-License-Identifier: MPL-2.0
//! Application configuration, read from a `settings.toml` file at startup.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[notifications]` - Toast timings
//! - `[forms]` - Demo login latency and password rule
//! - `[animations]` - Reveal, loading, press and scroll durations
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` CLI argument
//! 3. Set `ICED_SHOWCASE_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_showcase::config;
//!
//! // Falls back to defaults, with a warning key, when the file is broken.
//! let (config, warning) = config::load();
//! if warning.is_none() {
//!     println!("auto-dismiss after {:?}", config.notifications.auto_dismiss_ms);
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key presented when the config file exists but cannot be read.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Toast notification timings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    #[serde(default = "default_enter_delay_ms")]
    pub enter_delay_ms: Option<u64>,

    #[serde(default = "default_auto_dismiss_ms")]
    pub auto_dismiss_ms: Option<u64>,

    #[serde(default = "default_exit_ms")]
    pub exit_ms: Option<u64>,

    /// Cancel the pending auto-dismiss when the user closes a toast.
    #[serde(default = "default_true")]
    pub cancel_auto_dismiss_on_close: Option<bool>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: default_enter_delay_ms(),
            auto_dismiss_ms: default_auto_dismiss_ms(),
            exit_ms: default_exit_ms(),
            cancel_auto_dismiss_on_close: default_true(),
        }
    }
}

/// Demo form behavior.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FormsConfig {
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: Option<u64>,

    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: Option<u64>,

    #[serde(default = "default_min_password_len")]
    pub min_password_len: Option<usize>,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: default_login_delay_ms(),
            redirect_delay_ms: default_redirect_delay_ms(),
            min_password_len: default_min_password_len(),
        }
    }
}

impl FormsConfig {
    #[must_use]
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms.unwrap_or(DEFAULT_LOGIN_DELAY_MS))
    }

    #[must_use]
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms.unwrap_or(DEFAULT_REDIRECT_DELAY_MS))
    }

    #[must_use]
    pub fn min_password_len(&self) -> usize {
        self.min_password_len.unwrap_or(DEFAULT_MIN_PASSWORD_LEN)
    }
}

/// Animation durations.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AnimationsConfig {
    #[serde(default = "default_reveal_ms")]
    pub reveal_ms: Option<u64>,

    #[serde(default = "default_button_loading_ms")]
    pub button_loading_ms: Option<u64>,

    #[serde(default = "default_gallery_press_ms")]
    pub gallery_press_ms: Option<u64>,

    #[serde(default = "default_smooth_scroll_ms")]
    pub smooth_scroll_ms: Option<u64>,
}

impl Default for AnimationsConfig {
    fn default() -> Self {
        Self {
            reveal_ms: default_reveal_ms(),
            button_loading_ms: default_button_loading_ms(),
            gallery_press_ms: default_gallery_press_ms(),
            smooth_scroll_ms: default_smooth_scroll_ms(),
        }
    }
}

impl AnimationsConfig {
    #[must_use]
    pub fn reveal(&self) -> Duration {
        Duration::from_millis(self.reveal_ms.unwrap_or(DEFAULT_REVEAL_MS))
    }

    #[must_use]
    pub fn button_loading(&self) -> Duration {
        Duration::from_millis(self.button_loading_ms.unwrap_or(DEFAULT_BUTTON_LOADING_MS))
    }

    #[must_use]
    pub fn gallery_press(&self) -> Duration {
        Duration::from_millis(self.gallery_press_ms.unwrap_or(DEFAULT_GALLERY_PRESS_MS))
    }

    #[must_use]
    pub fn smooth_scroll(&self) -> Duration {
        Duration::from_millis(self.smooth_scroll_ms.unwrap_or(DEFAULT_SMOOTH_SCROLL_MS))
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub forms: FormsConfig,

    #[serde(default)]
    pub animations: AnimationsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_true() -> Option<bool> {
    Some(true)
}

fn default_enter_delay_ms() -> Option<u64> {
    Some(DEFAULT_ENTER_DELAY_MS)
}

fn default_auto_dismiss_ms() -> Option<u64> {
    Some(DEFAULT_AUTO_DISMISS_MS)
}

fn default_exit_ms() -> Option<u64> {
    Some(DEFAULT_EXIT_MS)
}

fn default_login_delay_ms() -> Option<u64> {
    Some(DEFAULT_LOGIN_DELAY_MS)
}

fn default_redirect_delay_ms() -> Option<u64> {
    Some(DEFAULT_REDIRECT_DELAY_MS)
}

fn default_min_password_len() -> Option<usize> {
    Some(DEFAULT_MIN_PASSWORD_LEN)
}

fn default_reveal_ms() -> Option<u64> {
    Some(DEFAULT_REVEAL_MS)
}

fn default_button_loading_ms() -> Option<u64> {
    Some(DEFAULT_BUTTON_LOADING_MS)
}

fn default_gallery_press_ms() -> Option<u64> {
    Some(DEFAULT_GALLERY_PRESS_MS)
}

fn default_smooth_scroll_ms() -> Option<u64> {
    Some(DEFAULT_SMOOTH_SCROLL_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn load_from_path_reads_every_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[general]\nlanguage = \"fr\"\ntheme_mode = \"light\"\n\n\
             [notifications]\nauto_dismiss_ms = 8000\n\n\
             [forms]\nmin_password_len = 8\n",
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
        assert_eq!(loaded.notifications.auto_dismiss_ms, Some(8000));
        assert_eq!(loaded.notifications.exit_ms, Some(300));
        assert_eq!(loaded.forms.min_password_len(), 8);
        assert_eq!(loaded.animations, AnimationsConfig::default());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_reports_warning_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[notifications\nbroken")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING_KEY));
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[forms]\nlogin_delay_ms = 10\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.forms.login_delay(), Duration::from_millis(10));
        assert_eq!(loaded.forms.min_password_len(), DEFAULT_MIN_PASSWORD_LEN);
        assert_eq!(loaded.notifications, NotificationsConfig::default());
    }

    #[test]
    fn load_with_override_reads_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[animations]\nreveal_ms = 250\n")
            .expect("failed to write config");

        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded.animations.reveal(), Duration::from_millis(250));
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.notifications.auto_dismiss_ms, Some(5000));
        assert_eq!(config.notifications.exit_ms, Some(300));
        assert_eq!(config.forms.login_delay(), Duration::from_millis(1500));
        assert_eq!(config.forms.min_password_len(), 6);
        assert_eq!(config.animations.button_loading(), Duration::from_millis(2000));
    }
}
