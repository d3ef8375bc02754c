//! Startup loading of mapping sources
//!
//! Reads every configured mapping file into memory and orders the sources
//! the way the chain is folded: static redirects, YAML file, JSON file, then
//! extra documents. Decoding is left to [`HandlerChain::compose`].
//!
//! [`HandlerChain::compose`]: crate::handlers::HandlerChain::compose

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::handlers::MappingSource;
use crate::mapping::Format;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read mapping file {path}: {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot infer mapping format of {path} (expected .yaml, .yml or .json)", path = .path.display())]
    UnknownFormat { path: PathBuf },
}

/// Collect all mapping sources named by `config`, in composition order
pub async fn load_sources(config: &Config) -> Result<Vec<MappingSource>, LoadError> {
    let mut sources = Vec::with_capacity(3 + config.sources.documents.len());

    sources.push(MappingSource::Pairs {
        name: "static".to_string(),
        pairs: config.redirects.clone(),
    });
    sources.push(read_document(&config.sources.yaml_path, Format::Yaml).await?);
    sources.push(read_document(&config.sources.json_path, Format::Json).await?);

    for path in &config.sources.documents {
        let format = Format::from_path(path)
            .ok_or_else(|| LoadError::UnknownFormat { path: path.clone() })?;
        sources.push(read_document(path, format).await?);
    }

    Ok(sources)
}

async fn read_document(path: &Path, format: Format) -> Result<MappingSource, LoadError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), %format, bytes = bytes.len(), "Mapping file read");

    Ok(MappingSource::Document {
        name: path.display().to_string(),
        format,
        bytes,
    })
}
