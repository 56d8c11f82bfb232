// SPDX-License-Identifier: MPL-2.0
//! Location of the settings directory.
//!
//! Candidates are tried in order, the first one present wins:
//!
//! 1. an explicit override passed to [`get_app_config_dir_with_override`]
//!    (tests, tools)
//! 2. `--config-dir`, recorded once by [`init_cli_override`]
//! 3. `ICED_SHOWCASE_CONFIG_DIR`, ignored when empty
//! 4. the platform config directory joined with `IcedShowcase`

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name under the platform config directory.
const APP_NAME: &str = "IcedShowcase";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_SHOWCASE_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Where the resolved directory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigDirSource {
    Override,
    Cli,
    Environment,
    Platform,
}

/// Records the `--config-dir` argument. Later calls are ignored.
pub fn init_cli_override(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("config dir override already initialized");
    }
}

fn from_environment() -> Option<PathBuf> {
    std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Resolves the settings directory and reports which candidate won.
pub fn resolve_config_dir(override_path: Option<PathBuf>) -> Option<(PathBuf, ConfigDirSource)> {
    override_path
        .map(|path| (path, ConfigDirSource::Override))
        .or_else(|| {
            CLI_CONFIG_DIR
                .get()
                .cloned()
                .flatten()
                .map(|path| (path, ConfigDirSource::Cli))
        })
        .or_else(|| from_environment().map(|path| (path, ConfigDirSource::Environment)))
        .or_else(|| dirs::config_dir().map(|path| (path.join(APP_NAME), ConfigDirSource::Platform)))
}

/// Returns the settings directory, or `None` if no candidate is available.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Like [`get_app_config_dir`], with `override_path` taking precedence.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    let (path, source) = resolve_config_dir(override_path)?;
    tracing::debug!(path = %path.display(), ?source, "config directory");
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests touching the environment run one at a time.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn platform_dir_ends_with_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some((path, source)) = resolve_config_dir(None) {
            if source == ConfigDirSource::Platform {
                assert!(path.ends_with(APP_NAME));
            }
        }
    }

    #[test]
    fn explicit_override_wins() {
        let custom = PathBuf::from("/custom/showcase");
        assert_eq!(
            resolve_config_dir(Some(custom.clone())),
            Some((custom, ConfigDirSource::Override))
        );
    }

    #[test]
    fn environment_is_used_when_set() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/env/showcase");

        let resolved = resolve_config_dir(None);

        std::env::remove_var(ENV_CONFIG_DIR);
        assert_eq!(
            resolved,
            Some((PathBuf::from("/env/showcase"), ConfigDirSource::Environment))
        );
    }

    #[test]
    fn empty_environment_value_is_ignored() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        let resolved = resolve_config_dir(None);

        std::env::remove_var(ENV_CONFIG_DIR);
        assert!(!matches!(resolved, Some((_, ConfigDirSource::Environment))));
    }
}
