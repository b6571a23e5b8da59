//! Hit-testing pointer positions against floor-plan elements.
//!
//! Handles are only offered on the selected element and are tested before any
//! element body, so a handle that overlaps a neighbouring element still wins.
//! Points are mapped into each element's unrotated frame before testing, which
//! keeps the checks axis-aligned.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::{HANDLE_RADIUS_PX, ROTATE_HANDLE_OFFSET_PX};
use crate::element::{Element, ElementId};
use crate::geometry::{Point, rotate_point};

/// Which part of an element was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    ResizeHandle(ResizeCorner),
    RotateHandle,
}

/// Corner handle used for resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeCorner {
    Nw,
    Ne,
    Sw,
    Se,
}

impl ResizeCorner {
    pub const ALL: [ResizeCorner; 4] = [Self::Nw, Self::Ne, Self::Sw, Self::Se];

    /// Position of this corner on an unrotated element.
    #[must_use]
    pub fn position(self, el: &Element) -> Point {
        match self {
            Self::Nw => Point::new(el.x, el.y),
            Self::Ne => Point::new(el.x + el.width, el.y),
            Self::Sw => Point::new(el.x, el.y + el.height),
            Self::Se => Point::new(el.x + el.width, el.y + el.height),
        }
    }
}

/// Result of a hit test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub element_id: ElementId,
    pub part: HitPart,
}

/// Position of the rotate handle on an unrotated element.
#[must_use]
pub fn rotate_handle_position(el: &Element) -> Point {
    Point::new(el.x + el.width / 2.0, el.y - ROTATE_HANDLE_OFFSET_PX)
}

/// Map a canvas point into `el`'s unrotated frame.
fn to_local(point: Point, el: &Element) -> Point {
    let c = el.center();
    rotate_point(point.x, point.y, c.x, c.y, -el.rotation)
}

fn near(a: Point, b: Point) -> bool {
    (a.x - b.x).hypot(a.y - b.y) <= HANDLE_RADIUS_PX
}

fn handle_at(point: Point, el: &Element) -> Option<HitPart> {
    let local = to_local(point, el);
    if near(local, rotate_handle_position(el)) {
        return Some(HitPart::RotateHandle);
    }
    ResizeCorner::ALL
        .into_iter()
        .find(|corner| near(local, corner.position(el)))
        .map(HitPart::ResizeHandle)
}

fn body_contains(point: Point, el: &Element) -> bool {
    let local = to_local(point, el);
    if el.is_round_shape() {
        let c = el.center();
        let rx = el.width / 2.0;
        let ry = el.height / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        let nx = (local.x - c.x) / rx;
        let ny = (local.y - c.y) / ry;
        return nx * nx + ny * ny <= 1.0;
    }
    local.x >= el.x && local.x <= el.x + el.width && local.y >= el.y && local.y <= el.y + el.height
}

/// Find what lies under `point` (canvas space), checking the selected
/// element's handles first and then bodies from the top of the stack down.
///
/// `elements` must be in stacking order, lowest first.
#[must_use]
pub fn hit_test(point: Point, elements: &[Element], selected_id: Option<&str>) -> Option<Hit> {
    if let Some(selected) = selected_id.and_then(|id| elements.iter().find(|el| el.id == id)) {
        if let Some(part) = handle_at(point, selected) {
            return Some(Hit { element_id: selected.id.clone(), part });
        }
    }
    elements
        .iter()
        .rev()
        .find(|el| body_contains(point, el))
        .map(|el| Hit { element_id: el.id.clone(), part: HitPart::Body })
}
