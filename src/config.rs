//! Configuration: paths to the two catalog sources, the catalog output
//! location, and triage defaults. Stored as `~/.triagent/config.toml`,
//! created with defaults on first run.

use std::path::PathBuf;

use directories::UserDirs;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized.
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Marketplace categories root holding installed specialist plugins.
    #[serde(default = "default_plugin_root")]
    pub plugin_root: PathBuf,

    /// Flat directory of custom specialist documents.
    #[serde(default = "default_agents_dir")]
    pub agents_dir: PathBuf,

    /// Where `agents generate` writes the rendered catalog, relative to the
    /// working directory unless absolute.
    #[serde(default = "default_catalog_output")]
    pub catalog_output: PathBuf,

    #[serde(default)]
    pub triage: TriageConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriageConfig {
    /// Default for the classifier's specialist-availability gate.
    #[serde(default)]
    pub check_available: bool,
}

fn home_dir() -> PathBuf {
    UserDirs::new().map_or_else(|| PathBuf::from("."), |u| u.home_dir().to_path_buf())
}

fn default_plugin_root() -> PathBuf {
    home_dir()
        .join(".claude")
        .join("plugins")
        .join("marketplaces")
        .join("voltagent-subagents")
        .join("categories")
}

fn default_agents_dir() -> PathBuf {
    home_dir().join(".claude").join("agents")
}

fn default_catalog_output() -> PathBuf {
    PathBuf::from(".planning").join("available_agents.md")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            plugin_root: default_plugin_root(),
            agents_dir: default_agents_dir(),
            catalog_output: default_catalog_output(),
            triage: TriageConfig::default(),
        }
    }
}

impl Config {
    /// Load `~/.triagent/config.toml`, writing defaults on first run.
    pub fn load_or_init() -> Result<Self, ConfigError> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .ok_or(ConfigError::NoHome)?;
        let triagent_dir = home.join(".triagent");
        let config_path = triagent_dir.join("config.toml");

        if !triagent_dir.exists() {
            std::fs::create_dir_all(&triagent_dir)?;
        }

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let mut config = Self::from_toml(&contents)?;
            config.config_path = config_path;
            Ok(config)
        } else {
            let config = Self {
                config_path: config_path.clone(),
                ..Self::default()
            };
            std::fs::write(&config_path, toml::to_string_pretty(&config).unwrap_or_default())?;
            Ok(config)
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply environment variable overrides to config.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    fn apply_overrides_from(&mut self, get: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = get("TRIAGENT_AGENTS_DIR").filter(|v| !v.trim().is_empty()) {
            self.agents_dir = PathBuf::from(dir);
        }
        if let Some(root) = get("TRIAGENT_PLUGIN_ROOT").filter(|v| !v.trim().is_empty()) {
            self.plugin_root = PathBuf::from(root);
        }
    }
}
