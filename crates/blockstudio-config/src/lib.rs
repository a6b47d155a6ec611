//! Named authoring contexts and the block kinds each one offers.
//!
//! ```toml
//! [contexts.post]
//! allowed_kinds = ["richText", "singleImage", "videoEmbed", "divider"]
//!
//! [contexts.page]   # no allowed_kinds: every kind
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use blockstudio_engine::policy::BLOG_POST_KINDS;
use blockstudio_engine::{BlockKind, KindPolicy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Overrides the default config file location. Shell variables and `~` are expanded.
pub const CONFIG_PATH_ENV: &str = "BLOCKSTUDIO_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Insertion settings for one authoring context.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Kinds offered for new blocks. Absent means every kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_kinds: Option<Vec<BlockKind>>,
}

impl ContextConfig {
    pub fn policy(&self) -> KindPolicy {
        match &self.allowed_kinds {
            Some(kinds) => KindPolicy::allow(kinds.iter().copied()),
            None => KindPolicy::unrestricted(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub contexts: BTreeMap<String, ContextConfig>,
}

impl Default for Config {
    /// The built-in `post` context with the curated blog kinds.
    fn default() -> Self {
        let post = ContextConfig {
            allowed_kinds: Some(BLOG_POST_KINDS.to_vec()),
        };
        Self {
            contexts: BTreeMap::from([("post".to_string(), post)]),
        }
    }
}

impl Config {
    /// Policy for `context`. Contexts not mentioned in the config are unrestricted.
    pub fn policy_for(&self, context: &str) -> KindPolicy {
        self.contexts
            .get(context)
            .map(ContextConfig::policy)
            .unwrap_or_default()
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Like [`Config::load`], falling back to [`Config::default`] when there is no file.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        if let Ok(custom) = std::env::var(CONFIG_PATH_ENV)
            && !custom.is_empty()
        {
            let custom = PathBuf::from(custom);
            return Self::expand_path(&custom).unwrap_or(custom);
        }
        let config_dir = shellexpand::tilde("~/.config/blockstudio");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
