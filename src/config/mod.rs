use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::infrastructure::naming::{DEFAULT_ENS_REGISTRY, DEFAULT_LENS_HANDLES};

#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
    pub name: Option<String>,
    pub chain_id: u64,
    pub rpc: Option<String>,
    pub ws: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamingConfig {
    /// ENS registry address
    #[serde(default = "default_ens_registry")]
    pub ens_registry: String,
    /// Chain carrying the ENS registry
    #[serde(default = "default_ens_chain_id")]
    pub ens_chain_id: u64,
    /// Lens handles contract address
    #[serde(default = "default_lens_handles")]
    pub lens_handles: String,
    /// Chain carrying the Lens handles contract
    #[serde(default = "default_lens_chain_id")]
    pub lens_chain_id: u64,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            ens_registry: default_ens_registry(),
            ens_chain_id: default_ens_chain_id(),
            lens_handles: default_lens_handles(),
            lens_chain_id: default_lens_chain_id(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndexerConfig {
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub chains: Vec<ChainConfig>,

    #[serde(default)]
    pub naming: NamingConfig,

    #[serde(default)]
    pub indexer: IndexerConfig,
}

impl Config {
    pub fn chain(&self, chain_id: u64) -> Option<&ChainConfig> {
        self.chains.iter().find(|c| c.chain_id == chain_id)
    }
}

fn default_ens_registry() -> String {
    DEFAULT_ENS_REGISTRY.to_string()
}

fn default_ens_chain_id() -> u64 {
    1
}

fn default_lens_handles() -> String {
    DEFAULT_LENS_HANDLES.to_string()
}

fn default_lens_chain_id() -> u64 {
    137
}

pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    toml::from_str::<Config>(&content).unwrap_or_default()
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("PREFLIGHT_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("preflight").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("preflight").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "preflight", "preflight")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
