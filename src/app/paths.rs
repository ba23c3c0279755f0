// SPDX-License-Identifier: MPL-2.0
//! Where the application keeps its settings and its remembered state.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** passed to a `_with_override()` function (tests)
//! 2. **CLI arguments** `--config-dir` / `--data-dir`, see [`init_cli_overrides`]
//! 3. **Environment variables** [`ENV_CONFIG_DIR`] / [`ENV_DATA_DIR`]
//! 4. **Platform default** from the `dirs` crate, with [`APP_NAME`] appended
//!
//! Image titles and dates are never stored here; they live in the image
//! files themselves.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name under the platform config and data roots.
pub const APP_NAME: &str = "IcedCaption";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "ICED_CAPTION_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_CAPTION_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

#[derive(Debug, Clone, Copy)]
enum DirKind {
    /// `settings.toml`
    Config,
    /// `state.cbor`
    Data,
}

impl DirKind {
    fn cli_override(self) -> Option<PathBuf> {
        let cell = match self {
            DirKind::Config => &CLI_CONFIG_DIR,
            DirKind::Data => &CLI_DATA_DIR,
        };
        cell.get().and_then(Clone::clone)
    }

    fn env_var(self) -> &'static str {
        match self {
            DirKind::Config => ENV_CONFIG_DIR,
            DirKind::Data => ENV_DATA_DIR,
        }
    }

    fn platform_root(self) -> Option<PathBuf> {
        match self {
            DirKind::Config => dirs::config_dir(),
            DirKind::Data => dirs::data_dir(),
        }
    }

    fn resolve(self, override_path: Option<PathBuf>) -> Option<PathBuf> {
        override_path
            .or_else(|| self.cli_override())
            .or_else(|| {
                std::env::var(self.env_var())
                    .ok()
                    .filter(|value| !value.is_empty())
                    .map(PathBuf::from)
            })
            .or_else(|| self.platform_root().map(|root| root.join(APP_NAME)))
    }
}

/// Records the `--data-dir` and `--config-dir` arguments.
///
/// Must be called once at startup, before any path is resolved. Later calls
/// are ignored with a warning.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let data_set = CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_ok();
    let config_set = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok();
    if !(data_set && config_set) {
        tracing::warn!("CLI directory overrides were already initialized");
    }
}

/// Directory holding `state.cbor`.
#[must_use]
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Like [`get_app_data_dir`], with `override_path` taking priority.
#[must_use]
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    DirKind::Data.resolve(override_path)
}

/// Directory holding `settings.toml`.
#[must_use]
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Like [`get_app_config_dir`], with `override_path` taking priority.
#[must_use]
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    DirKind::Config.resolve(override_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests touching env vars must not run in parallel
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn default_dirs_end_with_app_name() {
        let _lock = ENV_MUTEX.lock().expect("env mutex poisoned");
        std::env::remove_var(ENV_DATA_DIR);
        std::env::remove_var(ENV_CONFIG_DIR);

        for path in [get_app_data_dir(), get_app_config_dir()].into_iter().flatten() {
            assert!(path.ends_with(APP_NAME));
            assert!(path.is_absolute());
        }
    }

    #[test]
    fn override_path_takes_precedence() {
        let data = PathBuf::from("/custom/data/path");
        let config = PathBuf::from("/custom/config/path");
        assert_eq!(
            get_app_data_dir_with_override(Some(data.clone())),
            Some(data)
        );
        assert_eq!(
            get_app_config_dir_with_override(Some(config.clone())),
            Some(config)
        );
    }

    #[test]
    fn env_var_overrides_platform_default() {
        let _lock = ENV_MUTEX.lock().expect("env mutex poisoned");
        std::env::set_var(ENV_CONFIG_DIR, "/test/config/dir");

        assert_eq!(get_app_config_dir(), Some(PathBuf::from("/test/config/dir")));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let _lock = ENV_MUTEX.lock().expect("env mutex poisoned");
        std::env::set_var(ENV_DATA_DIR, "");

        if let Some(path) = get_app_data_dir() {
            assert!(path.ends_with(APP_NAME));
        }

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn override_path_beats_env_var() {
        let _lock = ENV_MUTEX.lock().expect("env mutex poisoned");
        std::env::set_var(ENV_DATA_DIR, "/env/path");

        let override_path = PathBuf::from("/override/path");
        assert_eq!(
            get_app_data_dir_with_override(Some(override_path.clone())),
            Some(override_path)
        );

        std::env::remove_var(ENV_DATA_DIR);
    }
}
