//! CLI configuration handling.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Preferred config file name (lives in the working directory)
pub const CONFIG_FILE_NAME: &str = "pgpeek.toml";

/// Legacy JSON config file name, checked after [`CONFIG_FILE_NAME`]
pub const LEGACY_CONFIG_FILE_NAME: &str = "config.json";

/// Value shown in place of a password
pub const MASK: &str = "****";

/// Settings backed by typed fields
const KNOWN_KEYS: [&str; 3] = ["postgres_url", "username", "debug"];

/// pgpeek configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Database connection URL
    #[serde(alias = "POSTGRES_URL")]
    pub postgres_url: Option<String>,

    /// Name of the operator, shown in debug output
    #[serde(alias = "USERNAME")]
    pub username: Option<String>,

    /// Enable debug output and debug-level logging
    #[serde(alias = "DEBUG")]
    pub debug: bool,

    /// Any other keys found in the file
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// A loaded configuration and the file it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    /// The configuration values
    pub config: Config,

    /// Source file, if one was found
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file, choosing the format by extension
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(toml::from_str(&content)?),
            Some("json") => Ok(serde_json::from_str(&content)?),
            _ => Err(CliError::Config(format!(
                "Unsupported config file format: {} (expected .toml or .json)",
                path.display()
            ))),
        }
    }

    /// Find and load the config file in `dir`, falling back to defaults
    pub fn discover(dir: &Path) -> CliResult<LoadedConfig> {
        for name in [CONFIG_FILE_NAME, LEGACY_CONFIG_FILE_NAME] {
            let path = dir.join(name);
            if path.is_file() {
                let config = Self::load(&path)?;
                return Ok(LoadedConfig {
                    config,
                    path: Some(path),
                });
            }
        }

        Ok(LoadedConfig::default())
    }

    /// Resolve the configuration from an explicit path or the working directory
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> CliResult<LoadedConfig> {
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(CliError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Ok(LoadedConfig {
                    config: Self::load(path)?,
                    path: Some(path.to_path_buf()),
                })
            }
            None => Self::discover(cwd),
        }
    }

    /// Let a command-line or environment URL take precedence over the file
    pub fn with_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.is_empty()) {
            self.postgres_url = Some(url);
        }
        self
    }

    /// The connection URL, or an error when none is configured
    pub fn require_url(&self) -> CliResult<&str> {
        self.postgres_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or_else(CliError::missing_url)
    }

    /// All settings as display strings, sorted by key
    ///
    /// Passwords in URL values are masked unless `show_secrets` is set.
    /// Extra keys are lowercased; one that collides with a known setting is
    /// dropped so the typed value is always the one shown.
    pub fn settings(&self, show_secrets: bool) -> BTreeMap<String, String> {
        let reveal = |value: &str| {
            if show_secrets {
                value.to_string()
            } else {
                mask_password(value)
            }
        };
        let mut settings = BTreeMap::new();

        if let Some(url) = &self.postgres_url {
            settings.insert("postgres_url".to_string(), reveal(url));
        }
        if let Some(username) = &self.username {
            settings.insert("username".to_string(), username.clone());
        }
        settings.insert("debug".to_string(), self.debug.to_string());

        for (key, value) in &self.extra {
            let key = key.to_lowercase();
            if KNOWN_KEYS.contains(&key.as_str()) {
                continue;
            }
            let value = match value {
                serde_json::Value::String(s) => reveal(s),
                other => other.to_string(),
            };
            settings.insert(key, value);
        }

        settings
    }
}

/// Replace the password of a URL with [`MASK`]
///
/// Strings that do not parse as URLs, or carry no password, are returned
/// unchanged.
pub fn mask_password(raw: &str) -> String {
    match url::Url::parse(raw) {
        Ok(mut parsed) if parsed.password().is_some() => {
            if parsed.set_password(Some(MASK)).is_ok() {
                parsed.to_string()
            } else {
                raw.to_string()
            }
        }
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_load_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "postgres_url = \"postgres://u:p@localhost/db\"\nusername = \"adron\"\ndebug = true\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.postgres_url.as_deref(), Some("postgres://u:p@localhost/db"));
        assert_eq!(config.username.as_deref(), Some("adron"));
        assert!(config.debug);
        assert!(config.extra.is_empty());
    }

    #[test]
    fn test_load_legacy_json_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(LEGACY_CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            r#"{"POSTGRES_URL": "postgres://u:p@h:5432/db", "USERNAME": "ops", "DEBUG": false, "REGION": "eu"}"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.postgres_url.as_deref(), Some("postgres://u:p@h:5432/db"));
        assert_eq!(config.username.as_deref(), Some("ops"));
        assert!(!config.debug);
        assert_eq!(config.extra.get("REGION"), Some(&serde_json::json!("eu")));
    }

    #[test]
    fn test_load_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pgpeek.yaml");
        std::fs::write(&path, "debug: true").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "postgres_url = ").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }

    #[test]
    fn test_discover_prefers_toml() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "username = \"toml\"").unwrap();
        std::fs::write(dir.path().join(LEGACY_CONFIG_FILE_NAME), r#"{"username": "json"}"#).unwrap();

        let loaded = Config::discover(dir.path()).unwrap();
        assert_eq!(loaded.config.username.as_deref(), Some("toml"));
        assert_eq!(loaded.path, Some(dir.path().join(CONFIG_FILE_NAME)));
    }

    #[test]
    fn test_discover_without_file() {
        let dir = TempDir::new().unwrap();

        let loaded = Config::discover(dir.path()).unwrap();
        assert_eq!(loaded.config, Config::default());
        assert!(loaded.path.is_none());
    }

    #[test]
    fn test_resolve_missing_explicit_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");

        assert!(Config::resolve(Some(&missing), dir.path()).is_err());
    }

    #[test]
    fn test_url_override() {
        let config = Config {
            postgres_url: Some("postgres://file".to_string()),
            ..Default::default()
        };

        let kept = config.clone().with_url_override(None);
        assert_eq!(kept.require_url().unwrap(), "postgres://file");

        let overridden = config.with_url_override(Some("postgres://flag".to_string()));
        assert_eq!(overridden.require_url().unwrap(), "postgres://flag");
    }

    #[test]
    fn test_require_url_missing() {
        let err = Config::default().require_url().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: POSTGRES_URL is not set in configuration"
        );

        let empty = Config {
            postgres_url: Some(String::new()),
            ..Default::default()
        };
        assert!(empty.require_url().is_err());
    }

    #[test]
    fn test_settings_sorted_and_masked() {
        let mut config = Config {
            postgres_url: Some("postgres://admin:hunter2@db:5432/app".to_string()),
            username: Some("ops".to_string()),
            debug: true,
            ..Default::default()
        };
        config.extra.insert("Region".to_string(), serde_json::json!("eu"));
        config.extra.insert("pool".to_string(), serde_json::json!(4));

        let settings = config.settings(false);
        let keys: Vec<&str> = settings.keys().map(String::as_str).collect();
        assert_eq!(keys, ["debug", "pool", "postgres_url", "region", "username"]);
        assert_eq!(settings["postgres_url"], "postgres://admin:****@db:5432/app");
        assert_eq!(settings["pool"], "4");
        assert_eq!(settings["region"], "eu");

        let revealed = config.settings(true);
        assert_eq!(revealed["postgres_url"], "postgres://admin:hunter2@db:5432/app");
    }

    #[test]
    fn test_settings_mask_extra_urls() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(LEGACY_CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            r#"{"POSTGRES_URL": "postgres://a:pw1@h/db", "REPLICA_URL": "postgres://a:secret2@r/db", "REGION": "eu"}"#,
        )
        .unwrap();
        let config = Config::load(&path).unwrap();

        let settings = config.settings(false);
        assert_eq!(settings["postgres_url"], "postgres://a:****@h/db");
        assert_eq!(settings["replica_url"], "postgres://a:****@r/db");
        assert_eq!(settings["region"], "eu");

        let revealed = config.settings(true);
        assert_eq!(revealed["replica_url"], "postgres://a:secret2@r/db");
    }

    #[test]
    fn test_extra_keys_do_not_shadow_known_settings() {
        let mut config = Config {
            debug: true,
            username: Some("ops".to_string()),
            ..Default::default()
        };
        config.extra.insert("Debug".to_string(), serde_json::json!("nope"));
        config.extra.insert("USERNAME ".to_string(), serde_json::json!("kept"));
        config.extra.insert("Username".to_string(), serde_json::json!("other"));

        let settings = config.settings(false);
        assert_eq!(settings["debug"], "true");
        assert_eq!(settings["username"], "ops");
        assert_eq!(settings["username "], "kept");
    }

    #[test]
    fn test_mask_password_passthrough() {
        assert_eq!(mask_password("postgres://admin@db/app"), "postgres://admin@db/app");
        assert_eq!(mask_password("not a url"), "not a url");
    }
}
