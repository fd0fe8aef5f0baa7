//! Configuration for word-lookup
//!
//! Read from `--config <path>` or ~/.config/word-lookup/config.toml.
//! Every field has a default, so the file is optional and may be partial.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use dictionary::DICTIONARY_API_URL;

use crate::render::SOURCE_BASE_URL;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub dictionary: DictionaryConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Entries endpoint; the word is appended as the last path segment.
    pub base_url: String,
    /// Where the source link under each result points.
    pub source_base_url: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            base_url: DICTIONARY_API_URL.to_owned(),
            source_base_url: SOURCE_BASE_URL.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Options of the font selector.
    pub fonts: Vec<String>,
    /// Mode used when the browser does not report a colour-scheme preference.
    pub prefers_dark: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            fonts: vec!["sans-serif".into(), "serif".into(), "mono".into()],
            prefers_dark: false,
        }
    }
}

impl Config {
    /// Default config file path
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("word-lookup");
        Ok(config_dir.join("config.toml"))
    }

    /// Load an explicit file, or the default path if it exists, or defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::path()?;
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        Self::parse(&content).with_context(|| format!("Failed to parse config from {:?}", path))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
