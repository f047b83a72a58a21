//! Persistent CLI configuration.

use std::env;
use std::path::{Path, PathBuf};

use nirantar_core::repository::DISPLAY_WINDOW;
use nirantar_core::storage::DEFAULT_NAMESPACE;
use nirantar_core::util::normalize_text_option;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "cli-config.json";
const DEFAULT_PROBE_ADDRESS: &str = "1.1.1.1:53";
const DEFAULT_PROBE_TIMEOUT_MS: u64 = 1500;
const DEFAULT_WATCH_INTERVAL_SECS: u64 = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CliConfig {
    #[serde(default = "default_config_version")]
    pub version: u32,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default = "default_probe_address")]
    pub probe_address: String,
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,
    #[serde(default = "default_watch_interval_secs")]
    pub watch_interval_secs: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            version: default_config_version(),
            namespace: default_namespace(),
            probe_address: default_probe_address(),
            probe_timeout_ms: default_probe_timeout_ms(),
            display_limit: default_display_limit(),
            watch_interval_secs: default_watch_interval_secs(),
        }
    }
}

const fn default_config_version() -> u32 {
    1
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_probe_address() -> String {
    DEFAULT_PROBE_ADDRESS.to_string()
}

const fn default_probe_timeout_ms() -> u64 {
    DEFAULT_PROBE_TIMEOUT_MS
}

const fn default_display_limit() -> usize {
    DISPLAY_WINDOW
}

const fn default_watch_interval_secs() -> u64 {
    DEFAULT_WATCH_INTERVAL_SECS
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(env::temp_dir)
        .join("nirantar")
        .join(CONFIG_FILE_NAME)
}

/// Config file location, honoring `NIRANTAR_CONFIG`
pub fn resolve_config_path() -> PathBuf {
    env::var_os("NIRANTAR_CONFIG").map_or_else(default_config_path, PathBuf::from)
}

impl CliConfig {
    pub fn load() -> Result<Self, String> {
        let mut config = Self::load_from_path(&resolve_config_path())?;
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|error| format!("Failed to read config at {}: {}", path.display(), error))?;
        let mut config = serde_json::from_str::<Self>(&raw)
            .map_err(|error| format!("Failed to parse config at {}: {}", path.display(), error))?;
        config.normalize();
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf, String> {
        let path = resolve_config_path();
        self.save_to_path(&path)?;
        Ok(path)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| {
                format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    error
                )
            })?;
        }

        let mut normalized = self.clone();
        normalized.normalize();
        let serialized = serde_json::to_string_pretty(&normalized)
            .map_err(|error| format!("Failed to serialize config: {error}"))?;
        std::fs::write(path, serialized)
            .map_err(|error| format!("Failed to write config at {}: {}", path.display(), error))
    }

    fn apply_env_overrides(&mut self) {
        if let Some(namespace) = normalize_text_option(env::var("NIRANTAR_NAMESPACE").ok()) {
            self.namespace = namespace;
        }
    }

    fn normalize(&mut self) {
        self.namespace =
            normalize_text_option(Some(self.namespace.clone())).unwrap_or_else(default_namespace);
        self.probe_address = normalize_text_option(Some(self.probe_address.clone()))
            .unwrap_or_else(default_probe_address);
        if self.probe_timeout_ms == 0 {
            self.probe_timeout_ms = default_probe_timeout_ms();
        }
        if self.display_limit == 0 {
            self.display_limit = default_display_limit();
        }
        if self.watch_interval_secs == 0 {
            self.watch_interval_secs = default_watch_interval_secs();
        }
    }
}

/// Forced connectivity from `--online`/`--offline` or `NIRANTAR_CONNECTIVITY`
pub fn connectivity_override(offline_flag: bool, online_flag: bool) -> Option<bool> {
    if offline_flag {
        return Some(false);
    }
    if online_flag {
        return Some(true);
    }
    parse_connectivity(env::var("NIRANTAR_CONNECTIVITY").ok().as_deref())
}

pub fn parse_connectivity(value: Option<&str>) -> Option<bool> {
    match value?.trim().to_ascii_lowercase().as_str() {
        "online" | "1" | "true" => Some(true),
        "offline" | "0" | "false" => Some(false),
        _ => None,
    }
}

pub fn resolve_db_path(cli_db_path: Option<PathBuf>) -> PathBuf {
    cli_db_path
        .or_else(|| env::var_os("NIRANTAR_DB_PATH").map(PathBuf::from))
        .unwrap_or_else(default_db_path)
}

pub fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(env::temp_dir)
        .join("nirantar")
        .join("nirantar.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_roundtrip_normalizes_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cli-config.json");

        let config = CliConfig {
            namespace: "  relief  ".to_string(),
            probe_address: " 8.8.8.8:53 ".to_string(),
            display_limit: 0,
            ..CliConfig::default()
        };

        config.save_to_path(&path).unwrap();
        let loaded = CliConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded.namespace, "relief");
        assert_eq!(loaded.probe_address, "8.8.8.8:53");
        assert_eq!(loaded.display_limit, DISPLAY_WINDOW);
    }

    #[test]
    fn missing_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = CliConfig::load_from_path(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, CliConfig::default());
        assert_eq!(loaded.namespace, "nirantar");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cli-config.json");
        std::fs::write(&path, r#"{ "watch_interval_secs": 30 }"#).unwrap();

        let loaded = CliConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded.watch_interval_secs, 30);
        assert_eq!(loaded.probe_timeout_ms, DEFAULT_PROBE_TIMEOUT_MS);
    }

    #[test]
    fn parse_connectivity_accepts_common_spellings() {
        assert_eq!(parse_connectivity(Some("Online")), Some(true));
        assert_eq!(parse_connectivity(Some("0")), Some(false));
        assert_eq!(parse_connectivity(Some("maybe")), None);
        assert_eq!(parse_connectivity(None), None);
    }

    #[test]
    fn flags_take_precedence_over_environment() {
        assert_eq!(connectivity_override(true, false), Some(false));
        assert_eq!(connectivity_override(false, true), Some(true));
    }

    #[test]
    fn explicit_db_path_wins() {
        let explicit = PathBuf::from("/tmp/custom.db");
        assert_eq!(resolve_db_path(Some(explicit.clone())), explicit);
    }
}
