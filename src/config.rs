//! Application configuration.
//!
//! Sources, later ones winning:
//! 1. built-in defaults,
//! 2. a TOML file named by `SUBJECT_GUIDE_CONFIG`,
//! 3. `SUBJECT_GUIDE_*` environment variables (a `.env` file is honoured).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const CONFIG_PATH_VAR: &str = "SUBJECT_GUIDE_CONFIG";
pub const BASE_URL_VAR: &str = "SUBJECT_GUIDE_BASE_URL";
pub const PREFS_PATH_VAR: &str = "SUBJECT_GUIDE_PREFS";
pub const LOGIN_VAR: &str = "SUBJECT_GUIDE_LOGIN";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid base url: {0}")]
    BaseUrl(#[from] url::ParseError),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub net: NetConfig,
    pub launch: LaunchConfig,
    pub storage: StorageConfig,
    pub session: SessionConfig,
    pub log_level: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct NetConfig {
    pub base_url: String,
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
    pub advert_path: String,
    pub subject_path: String,
    /// Sent with every request.
    pub headers: BTreeMap<String, String>,
    /// Appended to every request's query string.
    pub params: BTreeMap<String, String>,
    pub log_bodies: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct LaunchConfig {
    pub countdown_ticks: u64,
    pub tick_millis: u64,
    /// Run the route decision right away when the advert cannot be fetched.
    pub route_on_ad_failure: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub prefs_path: PathBuf,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SessionConfig {
    /// Initial login state, normally owned by the login flow.
    pub logged_in: bool,
}

impl Default for NetConfig {
    fn default() -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("platform".to_string(), std::env::consts::OS.to_string());
        Self {
            base_url: "http://localhost:8080/".to_string(),
            connect_timeout_secs: 15,
            read_timeout_secs: 15,
            advert_path: "ad/getAd".to_string(),
            subject_path: "lesson/getAllspecialty".to_string(),
            headers,
            params: BTreeMap::new(),
            log_bodies: true,
        }
    }
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            countdown_ticks: 5,
            tick_millis: 1000,
            route_on_ad_failure: true,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            prefs_path: PathBuf::from("prefs.json"),
        }
    }
}

impl NetConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }
}

impl LaunchConfig {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }
}

impl AppConfig {
    /// Load from `.env`, the optional TOML file and environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let mut config = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Apply `SUBJECT_GUIDE_*` overrides using `lookup` as the variable source.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(BASE_URL_VAR) {
            self.net.base_url = url;
        }
        if let Some(path) = lookup(PREFS_PATH_VAR) {
            self.storage.prefs_path = PathBuf::from(path);
        }
        if let Some(flag) = lookup(LOGIN_VAR) {
            self.session.logged_in = matches!(flag.trim(), "1" | "true" | "yes");
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.net.base_url)?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::Invalid(format!(
                "base url {} cannot carry paths",
                self.net.base_url
            )));
        }
        if self.launch.tick_millis == 0 {
            return Err(ConfigError::Invalid("tick_millis must be non-zero".to_string()));
        }
        Ok(())
    }

    pub fn log_level(&self) -> &str {
        if self.log_level.is_empty() {
            "info"
        } else {
            &self.log_level
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_match_launch_contract() {
        let config = AppConfig::default();
        assert_eq!(config.launch.countdown_ticks, 5);
        assert_eq!(config.launch.tick_period(), Duration::from_secs(1));
        assert_eq!(config.net.connect_timeout(), Duration::from_secs(15));
        assert_eq!(config.net.read_timeout(), Duration::from_secs(15));
        assert!(config.launch.route_on_ad_failure);
        assert_eq!(config.log_level(), "info");
        config.validate().unwrap();
    }

    #[test]
    fn toml_overrides_only_given_fields() {
        let config = AppConfig::from_toml_str(
            r#"
            log_level = "debug"

            [net]
            base_url = "https://api.example.com/v1/"

            [net.params]
            channel = "store"

            [launch]
            countdown_ticks = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.net.base_url, "https://api.example.com/v1/");
        assert_eq!(config.net.params.get("channel").map(String::as_str), Some("store"));
        assert_eq!(config.net.advert_path, "ad/getAd");
        assert_eq!(config.launch.countdown_ticks, 3);
        assert_eq!(config.launch.tick_millis, 1000);
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn env_overrides_apply() {
        let vars: HashMap<&str, &str> = [
            (BASE_URL_VAR, "https://other.example.com/"),
            (PREFS_PATH_VAR, "/tmp/p.json"),
            (LOGIN_VAR, "true"),
        ]
        .into_iter()
        .collect();
        let mut config = AppConfig::default();
        config.apply_env(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.net.base_url, "https://other.example.com/");
        assert_eq!(config.storage.prefs_path, PathBuf::from("/tmp/p.json"));
        assert!(config.session.logged_in);
    }

    #[test]
    fn rejects_bad_base_url_and_zero_tick() {
        let mut config = AppConfig::default();
        config.net.base_url = "not a url".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::BaseUrl(_))));

        let mut config = AppConfig::default();
        config.net.base_url = "mailto:someone@example.com".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = AppConfig::default();
        config.launch.tick_millis = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
