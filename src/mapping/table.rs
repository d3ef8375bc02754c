use std::collections::HashMap;

use super::parser::PathUrl;

/// Immutable exact-match lookup from request path to redirect target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectTable {
    entries: HashMap<String, String>,
}

impl RedirectTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the target for a path. No normalization of any kind.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, u)| (p.as_str(), u.as_str()))
    }
}

impl FromIterator<(String, String)> for RedirectTable {
    /// Later entries overwrite earlier ones with the same path
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut entries = HashMap::new();
        for (path, url) in iter {
            entries.insert(path, url);
        }
        Self { entries }
    }
}

impl FromIterator<PathUrl> for RedirectTable {
    fn from_iter<I: IntoIterator<Item = PathUrl>>(iter: I) -> Self {
        iter.into_iter().map(|p| (p.path, p.url)).collect()
    }
}

/// Build a lookup table from ordered pairs (last write wins)
pub fn build(pairs: Vec<PathUrl>) -> RedirectTable {
    pairs.into_iter().collect()
}
