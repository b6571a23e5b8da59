//! Seating areas derived from table elements.
//!
//! DESIGN
//! ======
//! Every table element in a saved layout has a matching seating-area record
//! that the reservation side of the product works with. Records point back
//! at their element through `properties.elementId`.
//!
//! Reconciliation is split in two: [`plan_seating_sync`] is a pure diff of
//! the layout against the stored records, and [`sync_seating_areas`] applies
//! that diff through the backend. Records without a back-reference were
//! created by hand and are never touched.
//!
//! Operational fields (`status`, `isReservable`) belong to the reservation
//! side once a record exists, so updates keep the stored values.

#[cfg(test)]
#[path = "seating_test.rs"]
mod tests;

use std::collections::{HashMap, HashSet};

use canvas::element::{CapacityRange, Element};
use canvas::layout::LayoutDocument;
use tracing::{debug, info};
use uuid::Uuid;

use crate::backend::{BackendError, FloorPlanBackend, SeatingArea, SeatingAreaRecord, SeatingProperties};

pub const SEATING_KIND: &str = "table";
pub const DEFAULT_STATUS: &str = "available";

// =============================================================================
// DERIVATION
// =============================================================================

/// Capacity for a table of the given shape and size when none is set
/// explicitly. Sizes are in canvas pixels; the longer side decides.
#[must_use]
pub fn capacity_lookup(shape: &str, width: f64, height: f64) -> CapacityRange {
    let long_side = width.max(height);
    match shape {
        "round" if long_side < 80.0 => CapacityRange::new(1, 2, 2),
        "round" if long_side < 120.0 => CapacityRange::new(2, 4, 4),
        "round" => CapacityRange::new(4, 8, 6),
        "square" if long_side < 80.0 => CapacityRange::new(1, 2, 2),
        "square" => CapacityRange::new(2, 4, 4),
        "rectangle" if long_side < 120.0 => CapacityRange::new(2, 4, 4),
        "rectangle" if long_side < 200.0 => CapacityRange::new(4, 6, 6),
        "rectangle" => CapacityRange::new(6, 10, 8),
        _ => CapacityRange::new(1, 4, 2),
    }
}

/// Shape recorded for a table: `round` whenever it renders round.
#[must_use]
pub fn table_shape(element: &Element) -> &str {
    if element.is_round_shape() { "round" } else { element.kind.as_str() }
}

#[must_use]
pub fn capacity_for(element: &Element) -> CapacityRange {
    element
        .capacity
        .unwrap_or_else(|| capacity_lookup(table_shape(element), element.width, element.height))
}

/// Fresh seating-area content for a table element.
#[must_use]
pub fn seating_area_for(element: &Element) -> SeatingArea {
    SeatingArea {
        name: element.name.clone(),
        capacity_range: capacity_for(element),
        description: format!("{} table", element.kind),
        x: element.x,
        y: element.y,
        properties: SeatingProperties {
            kind: SEATING_KIND.into(),
            shape: table_shape(element).to_owned(),
            color: element.fill().to_owned(),
            is_reservable: true,
            status: DEFAULT_STATUS.into(),
            element_id: Some(element.id.clone()),
        },
    }
}

// =============================================================================
// RECONCILIATION
// =============================================================================

/// Backend writes needed to bring seating areas in line with a layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeatingSyncPlan {
    pub create: Vec<SeatingArea>,
    pub update: Vec<(Uuid, SeatingArea)>,
    pub delete: Vec<Uuid>,
}

impl SeatingSyncPlan {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.create.is_empty() && self.update.is_empty() && self.delete.is_empty()
    }
}

/// Counts of applied writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeatingSyncReport {
    pub created: usize,
    pub updated: usize,
    pub deleted: usize,
}

/// Diff a layout's tables against stored seating areas.
///
/// The first stored record referencing a table is updated; further records
/// referencing the same table are deleted as duplicates. Updates that would
/// not change a record are skipped.
#[must_use]
pub fn plan_seating_sync(layout: &LayoutDocument, existing: &[SeatingAreaRecord]) -> SeatingSyncPlan {
    let tables: HashMap<&str, &Element> = layout.tables().map(|el| (el.id.as_str(), el)).collect();
    let mut matched: HashSet<&str> = HashSet::new();
    let mut plan = SeatingSyncPlan::default();

    for record in existing {
        let Some(element_id) = record.element_id() else {
            continue;
        };
        match tables.get(element_id) {
            Some(element) if !matched.contains(element_id) => {
                matched.insert(element_id);
                let mut area = seating_area_for(element);
                area.properties.status.clone_from(&record.area.properties.status);
                area.properties.is_reservable = record.area.properties.is_reservable;
                if area != record.area {
                    plan.update.push((record.id, area));
                }
            }
            _ => plan.delete.push(record.id),
        }
    }

    plan.create = layout
        .tables()
        .filter(|el| !matched.contains(el.id.as_str()))
        .map(seating_area_for)
        .collect();
    plan
}

/// Bring a floor plan's seating areas in line with its layout.
///
/// Stops at the first failing write; writes already applied stay applied and
/// the next save picks up the remainder.
///
/// # Errors
///
/// Returns the first backend error encountered.
pub async fn sync_seating_areas(
    backend: &dyn FloorPlanBackend,
    floor_plan_id: Uuid,
    layout: &LayoutDocument,
) -> Result<SeatingSyncReport, BackendError> {
    let existing = backend.list_seating_areas(floor_plan_id).await?;
    let plan = plan_seating_sync(layout, &existing);
    if plan.is_empty() {
        debug!(%floor_plan_id, "seating areas already in sync");
        return Ok(SeatingSyncReport::default());
    }

    let mut report = SeatingSyncReport::default();
    for (id, area) in &plan.update {
        backend.update_seating_area(*id, area).await?;
        report.updated += 1;
    }
    for area in &plan.create {
        backend.create_seating_area(floor_plan_id, area).await?;
        report.created += 1;
    }
    for id in &plan.delete {
        backend.delete_seating_area(*id).await?;
        report.deleted += 1;
    }

    info!(
        %floor_plan_id,
        created = report.created,
        updated = report.updated,
        deleted = report.deleted,
        "seating areas reconciled"
    );
    Ok(report)
}
