//! Furniture templates resolved by name.
//!
//! The sidebar that presents these templates lives in the host; the engine
//! only needs to look a template up when an item is dropped or a saved layout
//! is loaded.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// A purchasable item: default footprint, height, and the image the host draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    /// Image reference for the renderer (path, URL, or glyph).
    pub image: String,
    pub width: f64,
    pub height: f64,
    /// Physical height above the floor.
    #[serde(rename = "zHeight")]
    pub elevation: f64,
}

/// Name-indexed collection of templates.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    templates: BTreeMap<String, Template>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock bedroom set.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (name, image, width, height, elevation) in [
            ("bed", "🛏️", 200.0, 160.0, 50.0),
            ("wardrobe", "🚪", 120.0, 60.0, 200.0),
            ("study-table", "📚", 120.0, 60.0, 75.0),
            ("study-chair", "💺", 50.0, 50.0, 90.0),
            ("sofa", "🛋️", 200.0, 90.0, 85.0),
            ("bedside-table", "🕯️", 45.0, 40.0, 55.0),
        ] {
            catalog.insert(Template { name: name.into(), image: image.into(), width, height, elevation });
        }
        catalog
    }

    /// Parse a JSON array of templates.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Unreadable`] if the JSON is malformed and
    /// [`LayoutError::InvalidDocument`] if a template has a non-positive size.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let templates: Vec<Template> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for template in templates {
            if !(template.width > 0.0 && template.height > 0.0 && template.elevation > 0.0) {
                return Err(LayoutError::InvalidDocument(format!(
                    "template '{}' must have positive width, height, and zHeight",
                    template.name
                )));
            }
            catalog.insert(template);
        }
        Ok(catalog)
    }

    /// Insert or replace a template.
    pub fn insert(&mut self, template: Template) {
        self.templates.insert(template.name.clone(), template);
    }

    /// Look up a template by name.
    #[must_use]
    pub fn template_by_name(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// All templates in name order.
    pub fn templates(&self) -> impl Iterator<Item = &Template> {
        self.templates.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
