//! Path-to-URL mapping documents and the lookup tables built from them
//!
//! A mapping document is a YAML sequence or JSON array of entries, each
//! carrying a `path` and a `url`:
//!
//! ```yaml
//! - path: /urlshort
//!   url: https://github.com/gophercises/urlshort
//! - path: /urlshort-final
//!   url: https://github.com/gophercises/urlshort/tree/solution
//! ```
//!
//! [`parse`] decodes a document into ordered [`PathUrl`] pairs and [`build`]
//! folds those pairs into an immutable [`RedirectTable`].
//!
//! ```rust
//! use urlshort::mapping::{self, Format};
//!
//! let yaml = b"- path: /google\n  url: https://google.com\n";
//! let pairs = mapping::parse(yaml, Format::Yaml).unwrap();
//! let table = mapping::build(pairs);
//! assert_eq!(table.get("/google"), Some("https://google.com"));
//! ```

mod parser;
mod table;

pub use parser::{Format, ParseError, PathUrl, parse};
pub use table::{RedirectTable, build};
