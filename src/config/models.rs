use crate::mapping::PathUrl;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    /// Static table, innermost layer of the chain
    #[serde(default)]
    pub redirects: Vec<PathUrl>,
    #[serde(default)]
    pub fallback: FallbackConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

/// Mapping documents loaded at startup
///
/// Layers are composed in this order: YAML file, JSON file, then each entry
/// of `documents`. Later layers are consulted first.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourcesConfig {
    #[serde(default = "default_yaml_path")]
    pub yaml_path: PathBuf,
    #[serde(default = "default_json_path")]
    pub json_path: PathBuf,
    /// Extra documents; format is taken from the file extension
    #[serde(default)]
    pub documents: Vec<PathBuf>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            yaml_path: default_yaml_path(),
            json_path: default_json_path(),
            documents: Vec::new(),
        }
    }
}

fn default_yaml_path() -> PathBuf {
    PathBuf::from("config/redirects.yaml")
}

fn default_json_path() -> PathBuf {
    PathBuf::from("config/redirects.json")
}

/// Response for paths no table claims
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FallbackConfig {
    #[serde(default = "default_fallback_status")]
    pub status: u16,
    #[serde(default = "default_fallback_body")]
    pub body: String,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            status: default_fallback_status(),
            body: default_fallback_body(),
        }
    }
}

fn default_fallback_status() -> u16 {
    200
}

fn default_fallback_body() -> String {
    "Hello, world!\n".to_string()
}
