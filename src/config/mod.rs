// src/config/mod.rs
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Directory name under the platform config dir.
pub const APP_DIR: &str = "co2-portal";
/// Prefix for environment overrides, e.g. `CO2_PORTAL_LANGUAGE=ar`.
pub const ENV_PREFIX: &str = "CO2_PORTAL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Overrides the language read from the system locale.
    pub language: Option<String>,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: None,
            log_level: "info".to_string(),
            window_width: 1024.0,
            window_height: 768.0,
        }
    }
}

/// `<config dir>/co2-portal/settings.ron`, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("settings.ron"))
}

impl Settings {
    /// Layers defaults, the optional settings file and `CO2_PORTAL_*`
    /// environment variables, in that order.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_layered(path, ENV_PREFIX)
    }

    fn load_layered(path: Option<&Path>, env_prefix: &str) -> Result<Self> {
        let defaults = Settings::default();

        let mut builder = ::config::Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("window_width", f64::from(defaults.window_width))?
            .set_default("window_height", f64::from(defaults.window_height))?;

        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(false));
        }

        builder
            .add_source(::config::Environment::with_prefix(env_prefix))
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn temp_settings(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("co2-portal-test-{}-{name}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.ron");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("co2-portal-does-not-exist").join("settings.ron");
        let settings = Settings::load(Some(path.as_path())).unwrap();
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.window_width, 1024.0);
    }

    #[test]
    fn file_values_override_defaults() {
        let path = temp_settings(
            "override",
            r#"(language: "he-IL", log_level: "debug", window_width: 800.0)"#,
        );
        let settings = Settings::load(Some(path.as_path())).unwrap();

        assert_eq!(settings.language.as_deref(), Some("he-IL"));
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.window_width, 800.0);
        assert_eq!(settings.window_height, 768.0);
    }

    #[test]
    fn environment_overrides_file() {
        // own prefix, so parallel tests reading the real one are unaffected
        let prefix = "CO2_PORTAL_LAYER_TEST";
        let path = temp_settings("env", r#"(language: "de-DE", window_height: 500.0)"#);
        std::env::set_var("CO2_PORTAL_LAYER_TEST_LANGUAGE", "fa-IR");
        std::env::set_var("CO2_PORTAL_LAYER_TEST_LOG_LEVEL", "warn");

        let settings = Settings::load_layered(Some(path.as_path()), prefix);

        std::env::remove_var("CO2_PORTAL_LAYER_TEST_LANGUAGE");
        std::env::remove_var("CO2_PORTAL_LAYER_TEST_LOG_LEVEL");

        let settings = settings.unwrap();
        assert_eq!(settings.language.as_deref(), Some("fa-IR"));
        assert_eq!(settings.log_level, "warn");
        assert_eq!(settings.window_height, 500.0);
        assert_eq!(settings.window_width, 1024.0);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = temp_settings("malformed", "(language: ");
        assert!(Settings::load(Some(path.as_path())).is_err());
    }
}
