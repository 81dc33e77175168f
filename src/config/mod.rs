// ABOUTME: Configuration management for the onboarding guide
// Loads UI preferences and an optional custom step catalog location from TOML

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding `catalog.path`
pub const CATALOG_ENV: &str = "QUETICO_CATALOG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// UI preferences
    #[serde(default)]
    pub ui: UiPreferences,

    /// Step catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Event poll interval in milliseconds (default: 250ms)
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    /// Whether to show the key hint line under the navigation bar
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            show_key_hints: default_true(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// TOML file replacing the built-in steps
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// On-disk form of a config file; only keys present in the file are `Some`
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    ui: UiOverrides,

    #[serde(default)]
    catalog: CatalogConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct UiOverrides {
    tick_rate_ms: Option<u64>,
    show_key_hints: Option<bool>,
}

impl ConfigFile {
    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut file: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        // Relative catalog paths are relative to the config file
        if let (Some(catalog), Some(dir)) = (file.catalog.path.as_mut(), path.parent()) {
            if catalog.is_relative() {
                *catalog = dir.join(&*catalog);
            }
        }

        Ok(file)
    }
}

fn default_tick_rate() -> u64 {
    250
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from default locations, then apply `QUETICO_*` overrides
    pub fn load() -> Result<Self> {
        let mut files = Vec::new();

        // Lowest precedence first so later files win
        for path in Self::get_config_paths().into_iter().rev() {
            if path.exists() {
                files.push(ConfigFile::read(&path)?);
            }
        }

        Ok(Self::from_layers(files, &load_from_env()))
    }

    /// Load a single configuration file, then apply `QUETICO_*` overrides
    pub fn load_from(path: &Path) -> Result<Self> {
        let file = ConfigFile::read(path)?;
        Ok(Self::from_layers([file], &load_from_env()))
    }

    /// Merge `files` (lowest precedence first) over the defaults, then the environment
    fn from_layers(
        files: impl IntoIterator<Item = ConfigFile>,
        env: &HashMap<String, String>,
    ) -> Self {
        let mut config = Self::default();
        for file in files {
            config.merge(file);
        }
        config.apply_env(env);
        config
    }

    /// Get configuration file paths in order of precedence
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        // 1. Local project config
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(".quetico-onboarding").join("config.toml"));
        }

        // 2. User config (~/.quetico-onboarding/config.toml)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".quetico-onboarding").join("config.toml"));
        }

        // 3. System config
        paths.push(PathBuf::from("/etc/quetico-onboarding/config.toml"));

        paths
    }

    /// Merge a higher-precedence file into this config. Absent keys keep their value.
    fn merge(&mut self, file: ConfigFile) {
        if let Some(tick_rate_ms) = file.ui.tick_rate_ms {
            self.ui.tick_rate_ms = tick_rate_ms;
        }
        if let Some(show_key_hints) = file.ui.show_key_hints {
            self.ui.show_key_hints = show_key_hints;
        }
        if file.catalog.path.is_some() {
            self.catalog.path = file.catalog.path;
        }
    }

    /// Apply `QUETICO_*` overrides
    pub fn apply_env(&mut self, env: &HashMap<String, String>) {
        if let Some(path) = env.get(CATALOG_ENV).filter(|p| !p.trim().is_empty()) {
            self.catalog.path = Some(PathBuf::from(path));
        }
    }
}

/// Load configuration from environment
pub fn load_from_env() -> HashMap<String, String> {
    std::env::vars()
        .filter(|(k, _)| k.starts_with("QUETICO_"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert!(config.ui.show_key_hints);
        assert!(config.catalog.path.is_none());
    }

    fn file(content: &str) -> ConfigFile {
        toml::from_str(content).unwrap()
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config =
            AppConfig::from_layers([file("[ui]\nshow_key_hints = false\n")], &HashMap::new());
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.tick_rate_ms, 250);
    }

    #[test]
    fn test_read_resolves_relative_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            "[ui]\ntick_rate_ms = 100\n\n[catalog]\npath = \"steps.toml\"\n",
        )
        .unwrap();

        let layer = ConfigFile::read(&config_path).unwrap();
        let config = AppConfig::from_layers([layer], &HashMap::new());
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.catalog.path, Some(temp_dir.path().join("steps.toml")));
    }

    #[test]
    fn test_load_from_invalid_toml_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[ui\n").unwrap();

        let err = AppConfig::load_from(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = AppConfig::load_from(&temp_dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_merge_prefers_later_file() {
        let config = AppConfig::from_layers(
            [
                file("[ui]\ntick_rate_ms = 100\n"),
                file("[ui]\ntick_rate_ms = 50\n[catalog]\npath = \"/tmp/steps.toml\"\n"),
            ],
            &HashMap::new(),
        );
        assert_eq!(config.ui.tick_rate_ms, 50);
        assert_eq!(config.catalog.path, Some(PathBuf::from("/tmp/steps.toml")));
    }

    #[test]
    fn test_merge_keeps_keys_missing_from_later_file() {
        let config = AppConfig::from_layers(
            [
                file("[ui]\nshow_key_hints = false\n"),
                file("[catalog]\npath = \"/srv/steps.toml\"\n"),
            ],
            &HashMap::new(),
        );
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.catalog.path, Some(PathBuf::from("/srv/steps.toml")));
    }

    #[test]
    fn test_merge_explicit_default_value_overrides() {
        let config = AppConfig::from_layers(
            [
                file("[ui]\ntick_rate_ms = 100\nshow_key_hints = false\n"),
                file("[ui]\ntick_rate_ms = 250\nshow_key_hints = true\n"),
            ],
            &HashMap::new(),
        );
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert!(config.ui.show_key_hints);
    }

    #[test]
    fn test_env_overrides_single_file_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[catalog]\npath = \"steps.toml\"\n").unwrap();

        let env = HashMap::from([(CATALOG_ENV.to_string(), "/srv/other.toml".to_string())]);
        let config = AppConfig::from_layers([ConfigFile::read(&config_path).unwrap()], &env);
        assert_eq!(config.catalog.path, Some(PathBuf::from("/srv/other.toml")));
    }

    #[test]
    fn test_env_overrides_catalog_path() {
        let mut config = AppConfig::default();
        let env = HashMap::from([(CATALOG_ENV.to_string(), "/srv/steps.toml".to_string())]);
        config.apply_env(&env);
        assert_eq!(config.catalog.path, Some(PathBuf::from("/srv/steps.toml")));

        let blank = HashMap::from([(CATALOG_ENV.to_string(), "  ".to_string())]);
        let mut untouched = AppConfig::default();
        untouched.apply_env(&blank);
        assert!(untouched.catalog.path.is_none());
    }
}
