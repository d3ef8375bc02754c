use async_trait::async_trait;
use axum::extract::Request;
use axum::response::Response;
use thiserror::Error;
use tracing::{info, warn};

use super::redirect::RedirectHandler;
use super::traits::Handler;
use crate::mapping::{self, Format, ParseError, PathUrl, RedirectTable};

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("failed to parse mapping source '{name}': {source}")]
    Parse {
        name: String,
        #[source]
        source: ParseError,
    },
}

/// Where one layer of the chain gets its path-to-URL pairs from
#[derive(Debug, Clone)]
pub enum MappingSource {
    /// Pairs known up front (static configuration)
    Pairs { name: String, pairs: Vec<PathUrl> },
    /// Raw mapping document, decoded during composition
    Document {
        name: String,
        format: Format,
        bytes: Vec<u8>,
    },
}

impl MappingSource {
    pub fn name(&self) -> &str {
        match self {
            MappingSource::Pairs { name, .. } | MappingSource::Document { name, .. } => name,
        }
    }

    fn into_table(self) -> Result<(String, RedirectTable), ChainError> {
        match self {
            MappingSource::Pairs { name, pairs } => Ok((name, mapping::build(pairs))),
            MappingSource::Document {
                name,
                format,
                bytes,
            } => match mapping::parse(&bytes, format) {
                Ok(pairs) => Ok((name, mapping::build(pairs))),
                Err(source) => Err(ChainError::Parse { name, source }),
            },
        }
    }
}

/// Entry point of a composed redirect chain
///
/// Each source becomes a [`RedirectHandler`] wrapping the handler built
/// before it, so the last source is consulted first and the terminal
/// handler answers whatever no table claims.
pub struct HandlerChain {
    entry: Box<dyn Handler>,
    depth: usize,
}

impl HandlerChain {
    /// Fold `sources` over `terminal`, aborting on the first parse failure
    pub fn compose<I>(sources: I, terminal: Box<dyn Handler>) -> Result<Self, ChainError>
    where
        I: IntoIterator<Item = MappingSource>,
    {
        let mut entry = terminal;
        let mut depth = 0;

        for source in sources {
            let (name, table) = source.into_table()?;

            for (path, _) in table.iter().filter(|(p, _)| !p.starts_with('/')) {
                warn!(source = %name, path, "Mapping path does not start with '/' and will never match");
            }
            info!(source = %name, entries = table.len(), layer = depth, "Redirect layer built");

            entry = Box::new(RedirectHandler::new(table, entry));
            depth += 1;
        }

        Ok(Self { entry, depth })
    }

    /// Number of redirect layers in front of the terminal handler
    pub fn depth(&self) -> usize {
        self.depth
    }
}

#[async_trait]
impl Handler for HandlerChain {
    async fn handle(&self, req: Request) -> Response {
        self.entry.handle(req).await
    }
}
