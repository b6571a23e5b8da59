//! Floor-plan service: save, load, list, delete, and default selection.
//!
//! DESIGN
//! ======
//! An editing session ([`EditorStore`]) is the source of truth for a plan's
//! content; this module moves it to and from a [`FloorPlanBackend`]. Every
//! operation is scoped to the caller's restaurant, and a plan owned by a
//! different restaurant is reported as [`PersistError::Forbidden`].
//!
//! ERROR HANDLING
//! ==============
//! A failed save leaves the session untouched so the user can retry without
//! re-editing. Seating-area reconciliation runs after the plan itself is
//! stored and is best-effort: its failure is logged and returned as
//! [`SaveOutcome::seating_warning`], never as an error.

#[cfg(test)]
#[path = "floor_plan_test.rs"]
mod tests;

use canvas::layout::LayoutError;
use canvas::store::{EditorStore, LayoutIdentity};
use tracing::{info, warn};
use uuid::Uuid;

use super::seating::{SeatingSyncReport, sync_seating_areas};
use crate::backend::{BackendError, FloorPlanBackend, FloorPlanRecord, FloorPlanSummary, NewFloorPlan};
use crate::error::ErrorCode;

// =============================================================================
// TYPES
// =============================================================================

/// The authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
    pub restaurant_id: Uuid,
}

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("floor plan name must not be empty")]
    EmptyName,
    #[error("floor plan {0} belongs to another restaurant")]
    Forbidden(Uuid),
    #[error("layout is invalid: {0}")]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl ErrorCode for PersistError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "E_EMPTY_NAME",
            Self::Forbidden(_) => "E_FORBIDDEN",
            Self::Layout(_) => "E_LAYOUT_INVALID",
            Self::Backend(e) => e.error_code(),
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::Backend(e) => e.retryable(),
            _ => false,
        }
    }
}

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub floor_plan_id: Uuid,
    /// Whether the save created a new plan rather than updating one.
    pub created: bool,
    /// Applied seating writes; `None` when reconciliation failed.
    pub seating: Option<SeatingSyncReport>,
    pub seating_warning: Option<String>,
}

// =============================================================================
// OPERATIONS
// =============================================================================

async fn owned_floor_plan(
    backend: &dyn FloorPlanBackend,
    identity: &Identity,
    id: Uuid,
) -> Result<FloorPlanRecord, PersistError> {
    let record = backend.get_floor_plan(id).await?;
    if record.restaurant_id != identity.restaurant_id {
        return Err(PersistError::Forbidden(id));
    }
    Ok(record)
}

/// Store the session's layout, then reconcile its seating areas.
///
/// A session without a plan id creates a new plan (the restaurant's first
/// plan becomes its default) and the session adopts the new id.
///
/// # Errors
///
/// Returns an error if the name is blank, the layout is invalid, the plan
/// belongs to another restaurant, or the plan itself cannot be stored.
pub async fn save_floor_plan(
    backend: &dyn FloorPlanBackend,
    identity: &Identity,
    store: &mut EditorStore,
) -> Result<SaveOutcome, PersistError> {
    let name = store.identity().name.trim().to_owned();
    if name.is_empty() {
        return Err(PersistError::EmptyName);
    }
    let layout = store.to_document();
    layout.validate()?;

    let (floor_plan_id, created, is_default) = match store.identity().id {
        Some(id) => {
            let existing = owned_floor_plan(backend, identity, id).await?;
            backend.update_floor_plan(id, &name, &layout).await?;
            (id, false, existing.is_default)
        }
        None => {
            let first = backend.list_floor_plans(identity.restaurant_id).await?.is_empty();
            let record = backend
                .create_floor_plan(NewFloorPlan {
                    restaurant_id: identity.restaurant_id,
                    name: name.clone(),
                    is_default: first,
                    layout: layout.clone(),
                    created_by: Some(identity.user_id),
                })
                .await?;
            (record.id, true, record.is_default)
        }
    };
    store.set_layout_identity(LayoutIdentity { id: Some(floor_plan_id), name, is_default });

    let (seating, seating_warning) = match sync_seating_areas(backend, floor_plan_id, &layout).await {
        Ok(report) => (Some(report), None),
        Err(e) => {
            warn!(error = %e, %floor_plan_id, "seating area reconciliation failed; floor plan saved");
            (None, Some(e.to_string()))
        }
    };

    info!(%floor_plan_id, created, elements = layout.elements.len(), "floor plan saved");
    Ok(SaveOutcome { floor_plan_id, created, seating, seating_warning })
}

/// Replace the session with a stored plan.
///
/// # Errors
///
/// Returns an error if the plan is missing, belongs to another restaurant,
/// or its stored layout is invalid. The session is untouched on error.
pub async fn load_floor_plan(
    backend: &dyn FloorPlanBackend,
    identity: &Identity,
    id: Uuid,
    store: &mut EditorStore,
) -> Result<(), PersistError> {
    let record = owned_floor_plan(backend, identity, id).await?;
    let elements = record.layout.elements.len();
    store.load_floor_plan(
        LayoutIdentity { id: Some(record.id), name: record.name, is_default: record.is_default },
        record.layout,
    );
    info!(floor_plan_id = %id, elements, "floor plan loaded");
    Ok(())
}

/// Load the restaurant's default plan, or start an empty session when it has
/// none. Returns the loaded plan id.
///
/// # Errors
///
/// Returns an error if listing or loading fails.
pub async fn open_default_floor_plan(
    backend: &dyn FloorPlanBackend,
    identity: &Identity,
    store: &mut EditorStore,
) -> Result<Option<Uuid>, PersistError> {
    let plans = backend.list_floor_plans(identity.restaurant_id).await?;
    let Some(default) = plans.iter().find(|p| p.is_default) else {
        store.reset_floor_plan();
        return Ok(None);
    };
    load_floor_plan(backend, identity, default.id, store).await?;
    Ok(Some(default.id))
}

/// Plans of the caller's restaurant, default first.
///
/// # Errors
///
/// Returns an error if the backend query fails.
pub async fn list_floor_plans(
    backend: &dyn FloorPlanBackend,
    identity: &Identity,
) -> Result<Vec<FloorPlanSummary>, PersistError> {
    Ok(backend.list_floor_plans(identity.restaurant_id).await?)
}

/// Fetch a stored plan without opening it in a session.
///
/// # Errors
///
/// Returns an error if the plan is missing or belongs to another restaurant.
pub async fn get_floor_plan(
    backend: &dyn FloorPlanBackend,
    identity: &Identity,
    id: Uuid,
) -> Result<FloorPlanRecord, PersistError> {
    owned_floor_plan(backend, identity, id).await
}

/// Delete a plan and its seating areas.
///
/// # Errors
///
/// Returns an error if the plan is missing or belongs to another restaurant.
pub async fn delete_floor_plan(backend: &dyn FloorPlanBackend, identity: &Identity, id: Uuid) -> Result<(), PersistError> {
    owned_floor_plan(backend, identity, id).await?;
    backend.delete_floor_plan(id).await?;
    info!(floor_plan_id = %id, "floor plan deleted");
    Ok(())
}

/// Make a plan the restaurant's default.
///
/// # Errors
///
/// Returns an error if the plan is missing or belongs to another restaurant.
pub async fn set_default_floor_plan(
    backend: &dyn FloorPlanBackend,
    identity: &Identity,
    id: Uuid,
) -> Result<(), PersistError> {
    owned_floor_plan(backend, identity, id).await?;
    backend.set_default_floor_plan(identity.restaurant_id, id).await?;
    info!(floor_plan_id = %id, restaurant_id = %identity.restaurant_id, "default floor plan set");
    Ok(())
}
