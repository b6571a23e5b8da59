//! Transform controller: turns pointer events into drag, resize, and rotate
//! edits on the editing store.
//!
//! A gesture starts on pointer-down over an element body or handle, is
//! updated on every pointer-move, and ends on pointer-up anywhere. Each
//! gesture records its start state up front, so every move is computed from
//! that start state alone and repeated or reordered move events are harmless.
//!
//! Pointer positions and the container offset are in the same client space;
//! element geometry is in canvas space (`client - container`).

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use tracing::debug;

use crate::consts::{GRID_SIZE, MIN_ELEMENT_SIZE};
use crate::element::{ElementId, PropertyUpdate};
use crate::geometry::{Point, angle_between, normalize_degrees, snap_to_grid, soft_snap_angle};
use crate::hit::{HitPart, ResizeCorner, hit_test};
use crate::store::{EditorStore, StoreError};

/// Grid snapping applied to interactive edits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapSettings {
    pub enabled: bool,
    pub grid_size: f64,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self { enabled: true, grid_size: GRID_SIZE }
    }
}

impl SnapSettings {
    #[must_use]
    pub fn disabled() -> Self {
        Self { enabled: false, ..Self::default() }
    }

    fn apply(self, value: f64) -> f64 {
        if self.enabled { snap_to_grid(value, self.grid_size) } else { value }
    }
}

/// The gesture in progress between pointer-down and pointer-up.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Gesture {
    /// No gesture; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Moving an element.
    Dragging {
        id: ElementId,
        /// Pointer position relative to the element origin at press time.
        offset: Point,
    },
    /// Resizing an element from one corner.
    Resizing {
        id: ElementId,
        corner: ResizeCorner,
        start_pointer: Point,
        start_width: f64,
        start_height: f64,
    },
    /// Rotating an element about its center.
    Rotating {
        id: ElementId,
        /// Element center in client space.
        center: Point,
        /// Pointer angle at press time minus the element's rotation.
        angle_offset: f64,
    },
}

// =============================================================================
// PURE MATH
// =============================================================================

/// New element origin for a drag sample.
#[must_use]
pub fn drag_position(pointer: Point, offset: Point, container: Point, snap: SnapSettings) -> Point {
    let raw = pointer - offset - container;
    Point::new(snap.apply(raw.x), snap.apply(raw.y))
}

/// New `(width, height)` for a resize sample, snapped then clamped.
///
/// Each corner grows or shrinks the size in the direction it faces; the
/// element origin is not moved.
#[must_use]
pub fn resize_dimensions(
    corner: ResizeCorner,
    start_width: f64,
    start_height: f64,
    delta: Point,
    snap: SnapSettings,
) -> (f64, f64) {
    let (w, h) = match corner {
        ResizeCorner::Nw => (start_width - delta.x, start_height - delta.y),
        ResizeCorner::Ne => (start_width + delta.x, start_height - delta.y),
        ResizeCorner::Sw => (start_width - delta.x, start_height + delta.y),
        ResizeCorner::Se => (start_width + delta.x, start_height + delta.y),
    };
    (
        snap.apply(w).max(MIN_ELEMENT_SIZE),
        snap.apply(h).max(MIN_ELEMENT_SIZE),
    )
}

/// New rotation for a rotate sample, normalized and optionally soft-snapped.
#[must_use]
pub fn rotation_angle(pointer: Point, center: Point, angle_offset: f64, snap: SnapSettings) -> f64 {
    let raw = normalize_degrees(angle_between(pointer, center) - angle_offset);
    if snap.enabled { soft_snap_angle(raw) } else { raw }
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// Per-canvas interactive transform handler.
#[derive(Debug, Clone, Default)]
pub struct TransformController {
    gesture: Gesture,
    snap: SnapSettings,
}

impl TransformController {
    #[must_use]
    pub fn new(snap: SnapSettings) -> Self {
        Self { gesture: Gesture::Idle, snap }
    }

    #[must_use]
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.gesture != Gesture::Idle
    }

    #[must_use]
    pub fn snap(&self) -> SnapSettings {
        self.snap
    }

    pub fn set_snap(&mut self, snap: SnapSettings) {
        self.snap = snap;
    }

    /// Dispatch a pointer-down: start the gesture for whatever is under the
    /// pointer, or clear the selection when nothing is.
    ///
    /// Returns the hit part, if any.
    ///
    /// # Errors
    ///
    /// Propagates store errors from starting the gesture.
    pub fn pointer_down(
        &mut self,
        store: &mut EditorStore,
        pointer: Point,
        container: Point,
    ) -> Result<Option<HitPart>, StoreError> {
        let Some(hit) = hit_test(pointer - container, store.elements(), store.selected_id()) else {
            self.gesture = Gesture::Idle;
            store.select_element(None)?;
            return Ok(None);
        };
        match hit.part {
            HitPart::Body => self.begin_drag(store, &hit.element_id, pointer, container)?,
            HitPart::ResizeHandle(corner) => self.begin_resize(store, &hit.element_id, corner, pointer)?,
            HitPart::RotateHandle => self.begin_rotate(store, &hit.element_id, pointer, container)?,
        }
        Ok(Some(hit.part))
    }

    /// Start moving `id`, selecting it.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if `id` names no element.
    pub fn begin_drag(
        &mut self,
        store: &mut EditorStore,
        id: &str,
        pointer: Point,
        container: Point,
    ) -> Result<(), StoreError> {
        let origin = store
            .get(id)
            .map(crate::element::Element::origin)
            .ok_or_else(|| StoreError::ElementNotFound(id.to_owned()))?;
        store.select_element(Some(id))?;
        self.gesture = Gesture::Dragging { id: id.to_owned(), offset: pointer - container - origin };
        debug!(%id, "drag started");
        Ok(())
    }

    /// Start resizing `id` from `corner`, selecting it.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if `id` names no element.
    pub fn begin_resize(
        &mut self,
        store: &mut EditorStore,
        id: &str,
        corner: ResizeCorner,
        pointer: Point,
    ) -> Result<(), StoreError> {
        let (start_width, start_height) = store
            .get(id)
            .map(|el| (el.width, el.height))
            .ok_or_else(|| StoreError::ElementNotFound(id.to_owned()))?;
        store.select_element(Some(id))?;
        self.gesture = Gesture::Resizing { id: id.to_owned(), corner, start_pointer: pointer, start_width, start_height };
        debug!(%id, ?corner, "resize started");
        Ok(())
    }

    /// Start rotating `id` about its center, selecting it.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if `id` names no element.
    pub fn begin_rotate(
        &mut self,
        store: &mut EditorStore,
        id: &str,
        pointer: Point,
        container: Point,
    ) -> Result<(), StoreError> {
        let (center, rotation) = store
            .get(id)
            .map(|el| (el.center() + container, el.rotation))
            .ok_or_else(|| StoreError::ElementNotFound(id.to_owned()))?;
        store.select_element(Some(id))?;
        let angle_offset = angle_between(pointer, center) - rotation;
        self.gesture = Gesture::Rotating { id: id.to_owned(), center, angle_offset };
        debug!(%id, "rotate started");
        Ok(())
    }

    /// Apply a pointer-move sample to the active gesture.
    ///
    /// Both coordinates of a sample land together, so history never holds a
    /// half-applied move or resize.
    ///
    /// Returns `false` when no gesture is active.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if the element disappeared mid-gesture; the
    /// gesture is abandoned in that case.
    pub fn pointer_move(&mut self, store: &mut EditorStore, pointer: Point, container: Point) -> Result<bool, StoreError> {
        let result = match &self.gesture {
            Gesture::Idle => return Ok(false),
            Gesture::Dragging { id, offset } => {
                let pos = drag_position(pointer, *offset, container, self.snap);
                store.update_element_properties(id, &[PropertyUpdate::X(pos.x), PropertyUpdate::Y(pos.y)])
            }
            Gesture::Resizing { id, corner, start_pointer, start_width, start_height } => {
                let (w, h) = resize_dimensions(*corner, *start_width, *start_height, pointer - *start_pointer, self.snap);
                store.update_element_properties(id, &[PropertyUpdate::Width(w), PropertyUpdate::Height(h)])
            }
            Gesture::Rotating { id, center, angle_offset } => {
                let angle = rotation_angle(pointer, *center, *angle_offset, self.snap);
                store.update_element_property(id, PropertyUpdate::Rotation(angle))
            }
        };
        if let Err(err) = result {
            self.gesture = Gesture::Idle;
            return Err(err);
        }
        Ok(true)
    }

    /// End the active gesture. The element keeps its last geometry, which is
    /// recorded in history if it is not already.
    ///
    /// Returns whether a history checkpoint was recorded.
    pub fn pointer_up(&mut self, store: &mut EditorStore) -> bool {
        if std::mem::take(&mut self.gesture) == Gesture::Idle {
            return false;
        }
        let recorded = store.checkpoint();
        debug!(recorded, "gesture ended");
        recorded
    }

    /// Place the staged palette template centered under the pointer.
    ///
    /// # Errors
    ///
    /// Returns `NoDragTemplate` when nothing is staged.
    pub fn drop_template(
        &self,
        store: &mut EditorStore,
        pointer: Point,
        container: Point,
    ) -> Result<ElementId, StoreError> {
        let template = store.drag_element().ok_or(StoreError::NoDragTemplate)?;
        let local = pointer - container;
        let x = self.snap.apply(local.x - template.width / 2.0);
        let y = self.snap.apply(local.y - template.height / 2.0);
        store.place_drag(x, y)
    }
}
