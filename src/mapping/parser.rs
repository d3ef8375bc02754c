use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid YAML mapping document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON mapping document: {0}")]
    Json(#[from] serde_json::Error),
}

/// One entry of a mapping document
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PathUrl {
    pub path: String,
    pub url: String,
}

impl PathUrl {
    pub fn new(path: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
        }
    }
}

/// Encoding of a mapping document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Infer the format from a file extension (`yaml`, `yml` or `json`)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Format::Yaml),
            "json" => Ok(Format::Json),
            other => Err(format!("unknown mapping format: {}", other)),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Yaml => f.write_str("yaml"),
            Format::Json => f.write_str("json"),
        }
    }
}

/// Decode a mapping document into its entries, preserving document order
///
/// Fails without producing any entries when the top-level value is not a
/// sequence, or when an entry lacks a string `path` or `url`.
pub fn parse(bytes: &[u8], format: Format) -> Result<Vec<PathUrl>, ParseError> {
    let pairs = match format {
        Format::Yaml => serde_yaml::from_slice(bytes)?,
        Format::Json => serde_json::from_slice(bytes)?,
    };
    Ok(pairs)
}
