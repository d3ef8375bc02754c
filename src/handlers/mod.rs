//! Redirect handlers and chain composition
//!
//! Requests flow through a linear chain of handlers. Each
//! [`RedirectHandler`] owns one lookup table and the handler behind it; on a
//! miss the request is handed, unchanged, to that next handler. The chain
//! always ends in a non-delegating terminal such as [`DefaultHandler`].
//!
//! ## Key Components
//!
//! - [`Handler`] - Responder trait every link implements
//! - [`RedirectHandler`] - Table lookup with fallback delegation
//! - [`DefaultHandler`] - Terminal responder for unmapped paths
//! - [`HandlerChain`] - Folds [`MappingSource`]s into a single entry point
//!
//! ## Example
//!
//! ```rust,ignore
//! use urlshort::handlers::{DefaultHandler, HandlerChain, MappingSource};
//! use urlshort::mapping::Format;
//!
//! let sources = vec![MappingSource::Document {
//!     name: "redirects.yaml".into(),
//!     format: Format::Yaml,
//!     bytes: yaml_bytes,
//! }];
//! let chain = HandlerChain::compose(sources, Box::new(DefaultHandler::default()))?;
//! let response = chain.handle(request).await;
//! ```

mod chain;
mod default;
mod redirect;
mod traits;

pub use chain::{ChainError, HandlerChain, MappingSource};
pub use default::DefaultHandler;
pub use redirect::RedirectHandler;
pub use traits::Handler;
