//! Editing store: the live element set, selection, drag staging, and history.
//!
//! DESIGN
//! ======
//! One `EditorStore` exists per editing session and is owned by the caller;
//! nothing here is global. Structural mutations (add, replace, delete,
//! reorder) always record a snapshot. Single-property edits are coalesced:
//! rotation, color, and name always record, while x, y, width, and height
//! record only when the new value lands on a multiple of the configured
//! checkpoint unit. Pointer-move samples during a gesture therefore do not
//! flood the undo log.
//!
//! ERROR HANDLING
//! ==============
//! Operations addressed by id return `StoreError::ElementNotFound` for unknown
//! ids and leave all state untouched. Undo and redo at the ends of the log are
//! no-ops reported through their `bool` result.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use tracing::debug;
use uuid::Uuid;

use crate::consts::{CHECKPOINT_UNIT, COPY_SUFFIX, DUPLICATE_OFFSET, MIN_ELEMENT_SIZE};
use crate::element::{DragTemplate, Element, ElementId, PropertyUpdate, new_element_id};
use crate::geometry::normalize_degrees;
use crate::history::History;
use crate::layout::{Background, LayoutDocument};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("element not found: {0}")]
    ElementNotFound(ElementId),
    #[error("no element selected")]
    NothingSelected,
    #[error("no drag template staged")]
    NoDragTemplate,
    #[error("invalid value {value} for {property}")]
    InvalidValue { property: &'static str, value: f64 },
}

/// Controls which single-property edits become undo checkpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryPolicy {
    /// Positional values that are exact multiples of this unit are recorded.
    /// A non-positive unit disables positional checkpoints entirely.
    pub checkpoint_unit: f64,
}

impl Default for HistoryPolicy {
    fn default() -> Self {
        Self { checkpoint_unit: CHECKPOINT_UNIT }
    }
}

impl HistoryPolicy {
    fn is_checkpoint(self, update: &PropertyUpdate) -> bool {
        if update.always_checkpoints() {
            return true;
        }
        let Some(value) = update.positional_value() else {
            return false;
        };
        self.checkpoint_unit > 0.0 && (value % self.checkpoint_unit).abs() < f64::EPSILON
    }
}

/// Identity of the layout being edited.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutIdentity {
    /// Storage id; `None` until the layout is first saved.
    pub id: Option<Uuid>,
    pub name: String,
    pub is_default: bool,
}

impl LayoutIdentity {
    #[must_use]
    pub fn unsaved(name: impl Into<String>) -> Self {
        Self { id: None, name: name.into(), is_default: false }
    }
}

// =============================================================================
// STORE
// =============================================================================

/// In-memory editing state for one floor-plan session.
#[derive(Debug, Clone)]
pub struct EditorStore {
    identity: LayoutIdentity,
    background: Background,
    elements: Vec<Element>,
    selected_id: Option<ElementId>,
    drag_element: Option<DragTemplate>,
    history: History<Vec<Element>>,
    policy: HistoryPolicy,
}

impl Default for EditorStore {
    fn default() -> Self {
        Self::with_policy(HistoryPolicy::default())
    }
}

impl EditorStore {
    /// Create an empty session with the default history policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session with a custom history policy.
    #[must_use]
    pub fn with_policy(policy: HistoryPolicy) -> Self {
        Self {
            identity: LayoutIdentity::default(),
            background: Background::default(),
            elements: Vec::new(),
            selected_id: None,
            drag_element: None,
            history: History::new(Vec::new()),
            policy,
        }
    }

    // --- Structural mutations ---

    /// Insert an element at its stacking position and record a snapshot. The
    /// caller supplies `z_index`; ties go above existing elements.
    pub fn add_element(&mut self, element: Element) {
        self.elements.push(element);
        self.sort_by_z();
        self.snapshot();
    }

    /// Replace the element with the same id and record a snapshot. Geometry
    /// is brought into range as in [`Self::update_element_property`].
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if no element has `element.id`, or
    /// `InvalidValue` if any geometry field is non-finite.
    pub fn update_element(&mut self, element: Element) -> Result<(), StoreError> {
        let element = sanitize_element(element)?;
        let slot = self.find_mut(&element.id)?;
        let restack = slot.z_index != element.z_index;
        *slot = element;
        if restack {
            self.sort_by_z();
        }
        self.snapshot();
        Ok(())
    }

    /// Apply a single-property edit, recording a snapshot per the history policy.
    ///
    /// Rotation is normalized into `[0, 360)` and width/height are clamped to
    /// the minimum element size before being stored.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` for an unknown id and `InvalidValue` for a
    /// non-finite numeric value.
    pub fn update_element_property(&mut self, id: &str, update: PropertyUpdate) -> Result<(), StoreError> {
        let update = sanitize(update)?;
        let record = self.policy.is_checkpoint(&update);
        let element = self.find_mut(id)?;
        update.apply(element);
        if record {
            self.snapshot();
        }
        Ok(())
    }

    /// Apply several single-property edits to one element as a unit.
    ///
    /// Either every update is applied or none is. At most one snapshot is
    /// recorded, after all updates, if any of them is a checkpoint per the
    /// history policy.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` for an unknown id and `InvalidValue` for a
    /// non-finite numeric value.
    pub fn update_element_properties(&mut self, id: &str, updates: &[PropertyUpdate]) -> Result<(), StoreError> {
        let updates = updates.iter().cloned().map(sanitize).collect::<Result<Vec<_>, _>>()?;
        let record = updates.iter().any(|u| self.policy.is_checkpoint(u));
        let element = self.find_mut(id)?;
        for update in &updates {
            update.apply(element);
        }
        if record {
            self.snapshot();
        }
        Ok(())
    }

    /// Remove an element, clearing the selection if it pointed at it.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if no element has `id`.
    pub fn delete_element(&mut self, id: &str) -> Result<Element, StoreError> {
        let pos = self.position(id)?;
        let removed = self.elements.remove(pos);
        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
        }
        self.snapshot();
        Ok(removed)
    }

    /// Remove the selected element.
    ///
    /// # Errors
    ///
    /// Returns `NothingSelected` when there is no selection.
    pub fn delete_selected_element(&mut self) -> Result<Element, StoreError> {
        let id = self.selected_id.clone().ok_or(StoreError::NothingSelected)?;
        self.delete_element(&id)
    }

    /// Clone the selected element, offset it, select the clone, and return its id.
    ///
    /// # Errors
    ///
    /// Returns `NothingSelected` when there is no selection, or
    /// `ElementNotFound` if the selection no longer exists.
    pub fn duplicate_selected_element(&mut self) -> Result<ElementId, StoreError> {
        let id = self.selected_id.clone().ok_or(StoreError::NothingSelected)?;
        let mut copy = self.get(&id).ok_or(StoreError::ElementNotFound(id))?.clone();
        copy.id = new_element_id();
        copy.x += DUPLICATE_OFFSET;
        copy.y += DUPLICATE_OFFSET;
        copy.name.push_str(COPY_SUFFIX);
        copy.z_index = self.next_z_index();

        let new_id = copy.id.clone();
        self.elements.push(copy);
        self.sort_by_z();
        self.selected_id = Some(new_id.clone());
        self.snapshot();
        Ok(new_id)
    }

    /// Swap the selected element with the one directly above it.
    ///
    /// Returns `Ok(false)` when it is already on top.
    ///
    /// # Errors
    ///
    /// Returns `NothingSelected` or `ElementNotFound`.
    pub fn bring_forward(&mut self) -> Result<bool, StoreError> {
        self.shift_selected(true)
    }

    /// Swap the selected element with the one directly below it.
    ///
    /// Returns `Ok(false)` when it is already at the bottom.
    ///
    /// # Errors
    ///
    /// Returns `NothingSelected` or `ElementNotFound`.
    pub fn send_backward(&mut self) -> Result<bool, StoreError> {
        self.shift_selected(false)
    }

    fn shift_selected(&mut self, forward: bool) -> Result<bool, StoreError> {
        let id = self.selected_id.clone().ok_or(StoreError::NothingSelected)?;
        self.sort_by_z();
        let pos = self.position(&id)?;
        let neighbor = if forward { pos + 1 } else { pos.wrapping_sub(1) };
        if neighbor >= self.elements.len() {
            return Ok(false);
        }

        let own_z = self.elements[pos].z_index;
        self.elements[pos].z_index = self.elements[neighbor].z_index;
        self.elements[neighbor].z_index = own_z;
        // Swap slots too so equal z values still change order under the stable sort.
        self.elements.swap(pos, neighbor);
        self.sort_by_z();
        self.snapshot();
        Ok(true)
    }

    // --- History ---

    /// Step back one snapshot. Returns `false` at the start of the log.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.elements = snapshot.clone();
                true
            }
            None => false,
        }
    }

    /// Step forward one snapshot. Returns `false` at the end of the log.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.elements = snapshot.clone();
                true
            }
            None => false,
        }
    }

    /// Record the live elements if they differ from the snapshot under the
    /// cursor. Returns whether a snapshot was recorded.
    pub fn checkpoint(&mut self) -> bool {
        if self.history.current() == Some(&self.elements) {
            return false;
        }
        self.snapshot();
        true
    }

    fn snapshot(&mut self) {
        self.history.push(self.elements.clone());
        debug!(
            history_len = self.history.len(),
            history_index = self.history.index(),
            elements = self.elements.len(),
            "history checkpoint"
        );
    }

    // --- Selection and staging ---

    /// Select an element by id, or clear the selection with `None`.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if `id` names no element.
    pub fn select_element(&mut self, id: Option<&str>) -> Result<(), StoreError> {
        match id {
            Some(id) => {
                self.position(id)?;
                self.selected_id = Some(id.to_owned());
            }
            None => self.selected_id = None,
        }
        Ok(())
    }

    /// Stage a palette template for placement.
    pub fn start_drag(&mut self, template: DragTemplate) {
        self.drag_element = Some(template);
    }

    /// Clear the staging slot without placing anything.
    pub fn end_drag(&mut self) {
        self.drag_element = None;
    }

    /// Commit the staged template as a new element at `(x, y)` and select it.
    ///
    /// The element gets a fresh id, the next z-index, and a default
    /// `"{Category} #{n}"` name.
    ///
    /// # Errors
    ///
    /// Returns `NoDragTemplate` when nothing is staged.
    pub fn place_drag(&mut self, x: f64, y: f64) -> Result<ElementId, StoreError> {
        let template = self.drag_element.take().ok_or(StoreError::NoDragTemplate)?;
        let n = self
            .elements
            .iter()
            .filter(|el| el.category == template.category)
            .count()
            + 1;
        let element = Element::from_template(
            &template,
            new_element_id(),
            x,
            y,
            self.next_z_index(),
            template.category.default_name(n),
        );
        let id = element.id.clone();
        self.add_element(element);
        self.selected_id = Some(id.clone());
        Ok(id)
    }

    // --- Session lifecycle ---

    /// Replace the session with a persisted layout. History restarts at the
    /// loaded elements, so nothing before the load can be undone.
    pub fn load_floor_plan(&mut self, identity: LayoutIdentity, layout: LayoutDocument) {
        self.identity = identity;
        self.background = layout.background;
        self.elements = layout.elements;
        for el in &mut self.elements {
            el.rotation = normalize_degrees(el.rotation);
        }
        self.sort_by_z();
        self.selected_id = None;
        self.drag_element = None;
        self.history.reset(self.elements.clone());
    }

    /// Return to a fresh, empty session. The history policy is kept.
    pub fn reset_floor_plan(&mut self) {
        *self = Self::with_policy(self.policy);
    }

    pub fn set_layout_identity(&mut self, identity: LayoutIdentity) {
        self.identity = identity;
    }

    pub fn set_layout_name(&mut self, name: impl Into<String>) {
        self.identity.name = name.into();
    }

    pub fn set_background(&mut self, background: Background) {
        self.background = background;
    }

    /// Build the persisted form of the current session.
    #[must_use]
    pub fn to_document(&self) -> LayoutDocument {
        LayoutDocument { elements: self.elements.clone(), background: self.background.clone() }
    }

    // --- Queries ---

    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == id)
    }

    /// The selected element, if the selection still names a live element.
    #[must_use]
    pub fn selected_element(&self) -> Option<&Element> {
        self.selected_id.as_deref().and_then(|id| self.get(id))
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    #[must_use]
    pub fn drag_element(&self) -> Option<&DragTemplate> {
        self.drag_element.as_ref()
    }

    #[must_use]
    pub fn identity(&self) -> &LayoutIdentity {
        &self.identity
    }

    #[must_use]
    pub fn background(&self) -> &Background {
        &self.background
    }

    #[must_use]
    pub fn policy(&self) -> HistoryPolicy {
        self.policy
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn history_index(&self) -> usize {
        self.history.index()
    }

    // --- Helpers ---

    fn position(&self, id: &str) -> Result<usize, StoreError> {
        self.elements.iter().position(|el| el.id == id).ok_or_else(|| {
            debug!(%id, "element id not found");
            StoreError::ElementNotFound(id.to_owned())
        })
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Element, StoreError> {
        let pos = self.position(id)?;
        Ok(&mut self.elements[pos])
    }

    fn next_z_index(&self) -> i64 {
        i64::try_from(self.elements.len()).unwrap_or(i64::MAX)
    }

    fn sort_by_z(&mut self) {
        self.elements.sort_by_key(|el| el.z_index);
    }
}

/// Whole-element counterpart of [`sanitize`].
fn sanitize_element(mut element: Element) -> Result<Element, StoreError> {
    for update in [
        PropertyUpdate::X(element.x),
        PropertyUpdate::Y(element.y),
        PropertyUpdate::Width(element.width),
        PropertyUpdate::Height(element.height),
        PropertyUpdate::Rotation(element.rotation),
    ] {
        sanitize(update)?.apply(&mut element);
    }
    Ok(element)
}

/// Reject non-finite numbers and bring geometry into range.
fn sanitize(update: PropertyUpdate) -> Result<PropertyUpdate, StoreError> {
    let finite = |property: &'static str, value: f64| {
        if value.is_finite() { Ok(value) } else { Err(StoreError::InvalidValue { property, value }) }
    };
    Ok(match update {
        PropertyUpdate::X(v) => PropertyUpdate::X(finite("x", v)?),
        PropertyUpdate::Y(v) => PropertyUpdate::Y(finite("y", v)?),
        PropertyUpdate::Width(v) => PropertyUpdate::Width(finite("width", v)?.max(MIN_ELEMENT_SIZE)),
        PropertyUpdate::Height(v) => PropertyUpdate::Height(finite("height", v)?.max(MIN_ELEMENT_SIZE)),
        PropertyUpdate::Rotation(v) => PropertyUpdate::Rotation(normalize_degrees(finite("rotation", v)?)),
        other => other,
    })
}
