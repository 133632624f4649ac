//! Ordered catalog of folders

use std::collections::HashSet;

use serde::Serialize;
use crate::error::ConfigError;
use super::{CatalogEntry, ContentId};

/// Ordered, validated list of catalog entries
///
/// Only built through [`Catalog::new`] or [`Catalog::from_json`], which validate.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            entries: vec![
                CatalogEntry::folder(
                    "1",
                    "Experiencia",
                    "Mi Experiencia",
                    "Contenido de experiencia...",
                ),
                CatalogEntry::folder(
                    "2",
                    "Proyectos",
                    "Mis Proyectos",
                    "Contenido de proyectos...",
                ),
                CatalogEntry::folder(
                    "3",
                    "Audiovisual",
                    "Portfolio Audiovisual",
                    "Contenido audiovisual...",
                ),
            ],
        }
    }
}

impl Catalog {
    /// Build a catalog, rejecting empty lists, blank names and duplicate ids
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.id.as_str().trim().is_empty() {
                return Err(ConfigError::EmptyField {
                    id: entry.id.clone(),
                    field: "id",
                });
            }
            if entry.name.trim().is_empty() {
                return Err(ConfigError::EmptyField {
                    id: entry.id.clone(),
                    field: "name",
                });
            }
            if !seen.insert(&entry.id) {
                return Err(ConfigError::DuplicateContent(entry.id.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// Parse a JSON array of entries and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Look up an entry by id
    pub fn get(&self, id: &ContentId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    /// Check whether an entry exists
    #[inline]
    pub fn contains(&self, id: &ContentId) -> bool {
        self.get(id).is_some()
    }

    /// Entries in display order
    #[inline]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a validated catalog
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
