use std::collections::HashSet;

use bevy::prelude::{warn, Resource};
use once_cell::sync::Lazy;
use serde::Deserialize;

use super::money::Money;

const CATALOG_JSON: &str = include_str!("./content/catalog.json");

static DEFAULT_CATALOG: Lazy<Result<Catalog, CatalogError>> =
    Lazy::new(|| Catalog::from_json(CATALOG_JSON));

/// Rank given to categories and entries the catalog does not list. Sorts last.
pub const UNRANKED: u32 = 999;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MenuEntry {
    pub name: String,
    pub price: Money,
    pub category: String,
}

impl MenuEntry {
    pub fn new(name: impl Into<String>, price: Money, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            category: category.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Parse(String),
    EmptyCatalog,
    DuplicateCategory { category: String },
    UnknownCategory { entry: String, category: String },
    DuplicateEntry { entry: String },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(message) => write!(f, "failed to parse catalog: {message}"),
            Self::EmptyCatalog => write!(f, "catalog has no entries"),
            Self::DuplicateCategory { category } => {
                write!(f, "category '{category}' is listed more than once")
            }
            Self::UnknownCategory { entry, category } => {
                write!(f, "entry '{entry}' uses unlisted category '{category}'")
            }
            Self::DuplicateEntry { entry } => write!(f, "entry '{entry}' is listed more than once"),
        }
    }
}

impl std::error::Error for CatalogError {}

#[derive(Deserialize)]
struct CatalogDocument {
    categories: Vec<String>,
    entries: Vec<CatalogEntryDocument>,
}

#[derive(Deserialize)]
struct CatalogEntryDocument {
    name: String,
    price_cents: Money,
    category: String,
}

/// Fixed, ordered menu for the session. Entry position is the canonical display order
/// within a category; `categories` is the category priority list.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct Catalog {
    categories: Vec<String>,
    entries: Vec<MenuEntry>,
}

impl Catalog {
    pub fn from_parts(
        categories: Vec<String>,
        entries: Vec<MenuEntry>,
    ) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut seen_categories = HashSet::new();
        for category in &categories {
            if !seen_categories.insert(category.as_str()) {
                return Err(CatalogError::DuplicateCategory {
                    category: category.clone(),
                });
            }
        }

        let mut seen_entries = HashSet::new();
        for entry in &entries {
            if !seen_categories.contains(entry.category.as_str()) {
                return Err(CatalogError::UnknownCategory {
                    entry: entry.name.clone(),
                    category: entry.category.clone(),
                });
            }
            if !seen_entries.insert(entry) {
                return Err(CatalogError::DuplicateEntry {
                    entry: entry.name.clone(),
                });
            }
        }

        Ok(Self {
            categories,
            entries,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|error| CatalogError::Parse(error.to_string()))?;

        let entries = document
            .entries
            .into_iter()
            .map(|entry| MenuEntry::new(entry.name, entry.price_cents, entry.category))
            .collect();
        Self::from_parts(document.categories, entries)
    }

    /// Minimal menu used if the embedded catalog is ever unusable.
    pub fn fallback() -> Self {
        Self {
            categories: vec![String::from("Pizza"), String::from("Bebidas")],
            entries: vec![
                MenuEntry::new("Pizza Margherita", Money::from_cents(900), "Pizza"),
                MenuEntry::new("Acqua Naturale", Money::from_cents(150), "Bebidas"),
                MenuEntry::new("Caffè Espresso", Money::from_cents(150), "Bebidas"),
            ],
        }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&MenuEntry> {
        self.entries.get(index)
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn category_rank(&self, category: &str) -> u32 {
        self.categories
            .iter()
            .position(|listed| listed == category)
            .and_then(|index| u32::try_from(index).ok())
            .unwrap_or(UNRANKED)
    }

    pub fn entry_rank(&self, entry: &MenuEntry) -> u32 {
        self.entries
            .iter()
            .position(|listed| listed == entry)
            .and_then(|index| u32::try_from(index).ok())
            .unwrap_or(UNRANKED)
    }

    /// Number of category header bands the menu list shows.
    pub fn category_group_count(&self) -> usize {
        let mut groups = 0;
        let mut current: Option<&str> = None;
        for entry in &self.entries {
            if current != Some(entry.category.as_str()) {
                current = Some(entry.category.as_str());
                groups += 1;
            }
        }
        groups
    }
}

impl Default for Catalog {
    fn default() -> Self {
        match DEFAULT_CATALOG.as_ref() {
            Ok(catalog) => catalog.clone(),
            Err(error) => {
                warn!("failed to load menu catalog: {error}; using safe defaults");
                Catalog::fallback()
            }
        }
    }
}
