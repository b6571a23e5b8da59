//! Floor-plan storage seam.
//!
//! DESIGN
//! ======
//! The service layer talks to storage only through [`FloorPlanBackend`], so
//! the same save/load/reconcile logic runs against Postgres in production
//! ([`postgres::PgBackend`]) and against an in-process map in tests
//! ([`memory::MemoryBackend`]).
//!
//! Records carry the layout as a validated [`LayoutDocument`]; a backend that
//! reads a stored layout which no longer validates reports
//! [`BackendError::Layout`] instead of handing malformed data to an editor.

pub mod memory;
pub mod postgres;

#[cfg(test)]
pub mod test_helpers;

use canvas::element::{CapacityRange, ElementId};
use canvas::layout::{LayoutDocument, LayoutError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("floor plan not found: {0}")]
    FloorPlanNotFound(Uuid),
    #[error("seating area not found: {0}")]
    SeatingAreaNotFound(Uuid),
    #[error("stored layout is invalid: {0}")]
    Layout(#[from] LayoutError),
    #[error("stored record is malformed: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl crate::error::ErrorCode for BackendError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FloorPlanNotFound(_) => "E_FLOOR_PLAN_NOT_FOUND",
            Self::SeatingAreaNotFound(_) => "E_SEATING_AREA_NOT_FOUND",
            Self::Layout(_) => "E_LAYOUT_INVALID",
            Self::Decode(_) => "E_RECORD_MALFORMED",
            Self::Database(_) => "E_DATABASE",
            Self::Unavailable(_) => "E_UNAVAILABLE",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Unavailable(_))
    }
}

/// A stored floor plan with its layout.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorPlanRecord {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub name: String,
    pub is_default: bool,
    pub layout: LayoutDocument,
    pub created_by: Option<Uuid>,
}

/// Listing row: everything but the layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlanSummary {
    pub id: Uuid,
    pub name: String,
    pub is_default: bool,
}

/// Insert payload for a new floor plan.
#[derive(Debug, Clone)]
pub struct NewFloorPlan {
    pub restaurant_id: Uuid,
    pub name: String,
    pub is_default: bool,
    pub layout: LayoutDocument,
    pub created_by: Option<Uuid>,
}

/// Extra attributes stored alongside a seating area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatingProperties {
    #[serde(rename = "type")]
    pub kind: String,
    pub shape: String,
    pub color: String,
    pub is_reservable: bool,
    pub status: String,
    /// Layout element this area was derived from. Areas without one were
    /// created by hand and are never touched by reconciliation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_id: Option<ElementId>,
}

/// The editable content of a seating area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatingArea {
    pub name: String,
    pub capacity_range: CapacityRange,
    pub description: String,
    pub x: f64,
    pub y: f64,
    pub properties: SeatingProperties,
}

/// A stored seating area.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatingAreaRecord {
    pub id: Uuid,
    pub floor_plan_id: Uuid,
    #[serde(flatten)]
    pub area: SeatingArea,
}

impl SeatingAreaRecord {
    #[must_use]
    pub fn element_id(&self) -> Option<&str> {
        self.area.properties.element_id.as_deref()
    }
}

// =============================================================================
// TRAIT
// =============================================================================

/// Storage operations the floor-plan services need.
#[async_trait::async_trait]
pub trait FloorPlanBackend: Send + Sync {
    /// Insert a floor plan and return it with its assigned id.
    async fn create_floor_plan(&self, new: NewFloorPlan) -> Result<FloorPlanRecord, BackendError>;

    async fn get_floor_plan(&self, id: Uuid) -> Result<FloorPlanRecord, BackendError>;

    /// Replace a floor plan's name and layout.
    async fn update_floor_plan(&self, id: Uuid, name: &str, layout: &LayoutDocument) -> Result<(), BackendError>;

    /// Delete a floor plan together with all of its seating areas.
    async fn delete_floor_plan(&self, id: Uuid) -> Result<(), BackendError>;

    /// Floor plans of a restaurant, default first, then by name.
    async fn list_floor_plans(&self, restaurant_id: Uuid) -> Result<Vec<FloorPlanSummary>, BackendError>;

    /// Make `id` the restaurant's only default floor plan.
    async fn set_default_floor_plan(&self, restaurant_id: Uuid, id: Uuid) -> Result<(), BackendError>;

    async fn list_seating_areas(&self, floor_plan_id: Uuid) -> Result<Vec<SeatingAreaRecord>, BackendError>;

    async fn create_seating_area(
        &self,
        floor_plan_id: Uuid,
        area: &SeatingArea,
    ) -> Result<SeatingAreaRecord, BackendError>;

    async fn update_seating_area(&self, id: Uuid, area: &SeatingArea) -> Result<(), BackendError>;

    async fn delete_seating_area(&self, id: Uuid) -> Result<(), BackendError>;
}
