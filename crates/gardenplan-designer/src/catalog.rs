//! Plant catalog: the read-only table of plant names and icons offered by the
//! plant picker, grouped into ordered categories.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    /// Icon locator; empty when the catalog has no icon for this plant.
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCategory {
    pub name: String,
    pub entries: Vec<CatalogEntry>,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to parse plant catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate catalog category '{0}'")]
    DuplicateCategory(String),
}

pub trait PlantCatalog {
    /// Categories in display order.
    fn categories(&self) -> &[CatalogCategory];

    /// Entries of one category in display order; empty for an unknown category.
    fn entries(&self, category: &str) -> &[CatalogEntry] {
        self.categories()
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.entries.as_slice())
            .unwrap_or(&[])
    }

    fn find(&self, category: &str, name: &str) -> Option<&CatalogEntry> {
        self.entries(category).iter().find(|e| e.name == name)
    }
}

/// A catalog held in memory, typically loaded from a JSON array of categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticCatalog {
    categories: Vec<CatalogCategory>,
}

impl StaticCatalog {
    pub fn new(categories: Vec<CatalogCategory>) -> Result<Self, CatalogError> {
        for (i, category) in categories.iter().enumerate() {
            if categories[..i].iter().any(|c| c.name == category.name) {
                return Err(CatalogError::DuplicateCategory(category.name.clone()));
            }
        }
        Ok(Self { categories })
    }

    /// Parses `[{"name": "...", "entries": [{"name": "...", "icon": "..."}]}]`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::new(serde_json::from_str(json)?)
    }
}

impl PlantCatalog for StaticCatalog {
    fn categories(&self) -> &[CatalogCategory] {
        &self.categories
    }
}
