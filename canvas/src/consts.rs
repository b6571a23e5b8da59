//! Shared numeric constants for the canvas crate.

// ── Grid ────────────────────────────────────────────────────────

/// Default grid unit in canvas pixels, used for snapping.
pub const GRID_SIZE: f64 = 20.0;

/// Default history checkpoint unit: positional values that are exact
/// multiples of this are recorded in the undo log.
pub const CHECKPOINT_UNIT: f64 = 20.0;

// ── Elements ────────────────────────────────────────────────────

/// Smallest width or height an element may be resized to.
pub const MIN_ELEMENT_SIZE: f64 = 20.0;

/// Offset applied in both axes when duplicating an element.
pub const DUPLICATE_OFFSET: f64 = 20.0;

/// Fill color used when an element carries none.
pub const DEFAULT_COLOR: &str = "#ffffff";

/// Suffix appended to the name of a duplicated element.
pub const COPY_SUFFIX: &str = " (Copy)";

// ── Rotation ────────────────────────────────────────────────────

/// Angular step between soft-snap targets (eight compass directions).
pub const ROTATE_SNAP_STEP_DEG: f64 = 45.0;

/// Maximum distance from a snap target at which rotation snaps to it.
pub const ROTATE_SNAP_THRESHOLD_DEG: f64 = 10.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Hit slop in canvas pixels around resize and rotate handles.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

/// Distance above the element's top edge to the rotate handle.
pub const ROTATE_HANDLE_OFFSET_PX: f64 = 24.0;
