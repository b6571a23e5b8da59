//! Element model: placeable floor-plan items and their property updates.
//!
//! This module defines what sits on the floor plan (`Element`, with its
//! `ElementCategory`), the palette template that exists between "pick" and
//! "drop" (`DragTemplate`), and the single-property edit type consumed by the
//! editing store (`PropertyUpdate`).
//!
//! Elements serialize in the camelCase shape of the persisted layout document
//! (`type`, `isRound`, `zIndex`).

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::DEFAULT_COLOR;
use crate::geometry::Point;

/// Opaque identifier for an element, stable for its lifetime.
pub type ElementId = String;

/// Generate a fresh element id.
#[must_use]
pub fn new_element_id() -> ElementId {
    Uuid::new_v4().to_string()
}

/// Broad family of a floor-plan element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementCategory {
    /// Seating surface; mapped to a reservable seating area on save.
    Table,
    /// Individual seat.
    Chair,
    /// Non-seating fixture such as a bar, wall, plant, or entrance.
    Fixture,
}

impl ElementCategory {
    /// Capitalized display label, e.g. `"Table"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Table => "Table",
            Self::Chair => "Chair",
            Self::Fixture => "Fixture",
        }
    }

    /// Default element name for the `n`th element of this category.
    #[must_use]
    pub fn default_name(self, n: usize) -> String {
        format!("{} #{n}", self.label())
    }

    /// Sub-kinds offered by the palette for this category.
    #[must_use]
    pub fn kinds(self) -> &'static [&'static str] {
        match self {
            Self::Table => &["round", "square", "rectangle"],
            Self::Chair => &["standard", "armchair", "stool", "booth"],
            Self::Fixture => &["bar", "wall", "plant", "entrance"],
        }
    }
}

/// Seating capacity range carried by table elements and seating areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityRange {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

impl CapacityRange {
    #[must_use]
    pub fn new(min: u32, max: u32, default: u32) -> Self {
        Self { min, max, default }
    }
}

/// A placed floor-plan element as stored in the editor and on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Unique identifier for this element.
    pub id: ElementId,
    /// Left edge in canvas pixels.
    pub x: f64,
    /// Top edge in canvas pixels.
    pub y: f64,
    /// Width in canvas pixels.
    pub width: f64,
    /// Height in canvas pixels.
    pub height: f64,
    /// Clockwise rotation in degrees around the element center.
    #[serde(default)]
    pub rotation: f64,
    /// Sub-kind within the category (`round`, `booth`, `plant`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Element family.
    pub category: ElementCategory,
    /// User-editable label.
    pub name: String,
    /// Fill color; white when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Forces circular rendering regardless of `kind`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_round: Option<bool>,
    /// Stacking order; lower values are drawn beneath higher values.
    pub z_index: i64,
    /// Explicit seating capacity, overriding the size-based lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<CapacityRange>,
}

impl Element {
    /// Build an element from a palette template at the given position.
    #[must_use]
    pub fn from_template(template: &DragTemplate, id: ElementId, x: f64, y: f64, z_index: i64, name: String) -> Self {
        Self {
            id,
            x,
            y,
            width: template.width,
            height: template.height,
            rotation: 0.0,
            kind: template.kind.clone(),
            category: template.category,
            name,
            color: None,
            is_round: template.is_round,
            z_index,
            capacity: None,
        }
    }

    /// Fill color, defaulting to white.
    #[must_use]
    pub fn fill(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_COLOR)
    }

    /// Whether the element is circular, either by flag or by being a round table.
    #[must_use]
    pub fn is_round_shape(&self) -> bool {
        self.is_round.unwrap_or(self.kind == "round")
    }

    /// Center of the bounding box in canvas space.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Top-left corner in canvas space.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A palette selection pending placement on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragTemplate {
    pub category: ElementCategory,
    #[serde(rename = "type")]
    pub kind: String,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_round: Option<bool>,
}

impl DragTemplate {
    #[must_use]
    pub fn new(category: ElementCategory, kind: impl Into<String>, width: f64, height: f64) -> Self {
        Self { category, kind: kind.into(), width, height, is_round: None }
    }

    #[must_use]
    pub fn round(mut self) -> Self {
        self.is_round = Some(true);
        self
    }
}

/// A single-property edit applied through the editing store.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyUpdate {
    X(f64),
    Y(f64),
    Width(f64),
    Height(f64),
    Rotation(f64),
    Color(String),
    Name(String),
    Kind(String),
    IsRound(bool),
    Capacity(Option<CapacityRange>),
}

impl PropertyUpdate {
    /// Wire name of the property being updated.
    #[must_use]
    pub fn property(&self) -> &'static str {
        match self {
            Self::X(_) => "x",
            Self::Y(_) => "y",
            Self::Width(_) => "width",
            Self::Height(_) => "height",
            Self::Rotation(_) => "rotation",
            Self::Color(_) => "color",
            Self::Name(_) => "name",
            Self::Kind(_) => "type",
            Self::IsRound(_) => "isRound",
            Self::Capacity(_) => "capacity",
        }
    }

    /// The positional value carried by `x`, `y`, `width`, or `height` updates.
    #[must_use]
    pub fn positional_value(&self) -> Option<f64> {
        match self {
            Self::X(v) | Self::Y(v) | Self::Width(v) | Self::Height(v) => Some(*v),
            _ => None,
        }
    }

    /// Whether this update always produces a history checkpoint.
    #[must_use]
    pub fn always_checkpoints(&self) -> bool {
        matches!(self, Self::Rotation(_) | Self::Color(_) | Self::Name(_))
    }

    /// Write the new value into `element`.
    pub fn apply(&self, element: &mut Element) {
        match self {
            Self::X(v) => element.x = *v,
            Self::Y(v) => element.y = *v,
            Self::Width(v) => element.width = *v,
            Self::Height(v) => element.height = *v,
            Self::Rotation(v) => element.rotation = *v,
            Self::Color(c) => element.color = Some(c.clone()),
            Self::Name(n) => element.name.clone_from(n),
            Self::Kind(k) => element.kind.clone_from(k),
            Self::IsRound(r) => element.is_round = Some(*r),
            Self::Capacity(c) => element.capacity = *c,
        }
    }
}
