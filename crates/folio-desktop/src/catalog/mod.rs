//! Static content catalog
//!
//! The folders shown as desktop icons. The catalog is injected as
//! configuration and never mutated at runtime.

#[allow(clippy::module_inception)]
mod catalog;
mod entry;

pub use catalog::Catalog;
pub use entry::{CatalogEntry, FOLDER_ICON};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a catalog entry
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

impl ContentId {
    /// Create a content id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
