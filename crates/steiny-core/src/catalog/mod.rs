// ============================================================================
// Steiny Core - Content Catalog
// File: crates/steiny-core/src/catalog/mod.rs
// Description: Static menu categories and items, in authoring order
// ============================================================================

mod data;

use serde::Serialize;

/// Where a menu photo lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRef {
    /// Object key under the public media base URL
    Stored(&'static str),
    /// Absolute placeholder URL for photos not uploaded yet
    External(&'static str),
}

impl ImageRef {
    pub fn resolve(&self, media_base_url: &str) -> String {
        match self {
            ImageRef::Stored(key) => {
                format!("{}/{}", media_base_url.trim_end_matches('/'), key)
            }
            ImageRef::External(url) => (*url).to_string(),
        }
    }
}

/// Menu item. Identity is its name.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MenuItem {
    pub name: &'static str,
    /// Decimal price kept as authored, e.g. "8.99"
    pub price: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addon: Option<&'static str>,
    #[serde(skip)]
    pub image: Option<ImageRef>,
    pub popular: bool,
    pub spicy: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MenuCategory {
    pub key: &'static str,
    pub label: &'static str,
    pub items: &'static [MenuItem],
}

/// Ordered, immutable menu catalog
#[derive(Debug)]
pub struct Catalog {
    categories: &'static [MenuCategory],
}

static STANDARD: Catalog = Catalog {
    categories: data::CATEGORIES,
};

impl Catalog {
    /// The restaurant's menu as authored
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    pub const fn from_static(categories: &'static [MenuCategory]) -> Self {
        Self { categories }
    }

    /// Items of `key` in authoring order. Unknown keys yield an empty slice.
    pub fn get_category(&self, key: &str) -> &'static [MenuItem] {
        self.category(key).map(|c| c.items).unwrap_or(&[])
    }

    pub fn category(&self, key: &str) -> Option<&'static MenuCategory> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Categories in tab order
    pub fn all_categories(&self) -> impl Iterator<Item = &'static MenuCategory> {
        self.categories.iter()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.category(key).is_some()
    }

    pub fn first_key(&self) -> Option<&'static str> {
        self.categories.first().map(|c| c.key)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
