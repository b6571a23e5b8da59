//! Persisted layout document: the element list plus background settings.
//!
//! The layout is the unit exchanged with storage. Loading goes through
//! [`LayoutDocument::from_json`] / [`LayoutDocument::from_value`], which
//! validate shape and geometry before anything reaches the editing store.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::consts::GRID_SIZE;
use crate::element::{Element, ElementId};

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("malformed layout document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("element has an empty id")]
    EmptyId,
    #[error("duplicate element id: {0}")]
    DuplicateId(ElementId),
    #[error("element {id} has non-finite {field}")]
    NonFinite { id: ElementId, field: &'static str },
    #[error("element {id} has non-positive size {width}x{height}")]
    NonPositiveSize { id: ElementId, width: f64, height: f64 },
    #[error("background opacity {0} is outside [0, 1]")]
    Opacity(f64),
    #[error("background grid size {0} must be positive")]
    GridSize(f64),
}

/// How the canvas background is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    #[default]
    Color,
    Image,
    Grid,
}

/// Background and grid display settings saved with a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    #[serde(rename = "type")]
    pub kind: BackgroundKind,
    pub color: String,
    pub image_url: Option<String>,
    pub opacity: f64,
    pub show_grid: bool,
    pub grid_size: f64,
    pub grid_color: String,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            kind: BackgroundKind::Color,
            color: "#f8f9fa".into(),
            image_url: None,
            opacity: 1.0,
            show_grid: true,
            grid_size: GRID_SIZE,
            grid_color: "#e0e0e0".into(),
        }
    }
}

/// The stored form of a floor plan's editable content.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutDocument {
    pub elements: Vec<Element>,
    #[serde(default)]
    pub background: Background,
}

impl LayoutDocument {
    /// Parse and validate a layout from JSON text.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if the text is not a layout document or
    /// fails validation.
    pub fn from_json(text: &str) -> Result<Self, LayoutError> {
        let doc: Self = serde_json::from_str(text)?;
        doc.validate()?;
        Ok(doc)
    }

    /// Convert and validate a layout from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if the value is not a layout document or
    /// fails validation.
    pub fn from_value(value: serde_json::Value) -> Result<Self, LayoutError> {
        let doc: Self = serde_json::from_value(value)?;
        doc.validate()?;
        Ok(doc)
    }

    /// Check ids, geometry, and background settings.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let mut seen = HashSet::with_capacity(self.elements.len());
        for el in &self.elements {
            if el.id.is_empty() {
                return Err(LayoutError::EmptyId);
            }
            if !seen.insert(el.id.as_str()) {
                return Err(LayoutError::DuplicateId(el.id.clone()));
            }
            for (field, value) in [
                ("x", el.x),
                ("y", el.y),
                ("width", el.width),
                ("height", el.height),
                ("rotation", el.rotation),
            ] {
                if !value.is_finite() {
                    return Err(LayoutError::NonFinite { id: el.id.clone(), field });
                }
            }
            if el.width <= 0.0 || el.height <= 0.0 {
                return Err(LayoutError::NonPositiveSize { id: el.id.clone(), width: el.width, height: el.height });
            }
        }

        let bg = &self.background;
        if !(0.0..=1.0).contains(&bg.opacity) {
            return Err(LayoutError::Opacity(bg.opacity));
        }
        if !(bg.grid_size.is_finite() && bg.grid_size > 0.0) {
            return Err(LayoutError::GridSize(bg.grid_size));
        }
        Ok(())
    }

    /// Elements whose category is `table`.
    pub fn tables(&self) -> impl Iterator<Item = &Element> {
        self.elements
            .iter()
            .filter(|el| el.category == crate::element::ElementCategory::Table)
    }
}
