use super::*;
use crate::backend::SeatingProperties;
use crate::backend::test_helpers::FlakySeatingBackend;
use canvas::element::CapacityRange;

fn new_plan(restaurant_id: Uuid, name: &str, is_default: bool) -> NewFloorPlan {
    NewFloorPlan {
        restaurant_id,
        name: name.into(),
        is_default,
        layout: LayoutDocument::default(),
        created_by: None,
    }
}

fn area(name: &str) -> SeatingArea {
    SeatingArea {
        name: name.into(),
        capacity_range: CapacityRange::new(2, 4, 4),
        description: "square table".into(),
        x: 0.0,
        y: 0.0,
        properties: SeatingProperties {
            kind: "table".into(),
            shape: "square".into(),
            color: "#ffffff".into(),
            is_reservable: true,
            status: "available".into(),
            element_id: None,
        },
    }
}

// =============================================================================
// FLOOR PLANS
// =============================================================================

#[tokio::test]
async fn create_then_get_returns_same_record() {
    let backend = MemoryBackend::new();
    let created = backend
        .create_floor_plan(new_plan(Uuid::new_v4(), "Main", true))
        .await
        .expect("create should succeed");
    let fetched = backend.get_floor_plan(created.id).await.expect("get should succeed");
    assert_eq!(created, fetched);
}

#[tokio::test]
async fn get_unknown_plan_is_not_found() {
    let backend = MemoryBackend::new();
    let id = Uuid::new_v4();
    let err = backend.get_floor_plan(id).await.expect_err("missing plan");
    assert!(matches!(err, BackendError::FloorPlanNotFound(found) if found == id));
}

#[tokio::test]
async fn list_puts_default_first_and_scopes_to_restaurant() {
    let backend = MemoryBackend::new();
    let restaurant = Uuid::new_v4();
    backend.create_floor_plan(new_plan(restaurant, "Alpha", false)).await.expect("create");
    backend.create_floor_plan(new_plan(restaurant, "Zulu", true)).await.expect("create");
    backend.create_floor_plan(new_plan(Uuid::new_v4(), "Other", true)).await.expect("create");

    let names: Vec<String> = backend
        .list_floor_plans(restaurant)
        .await
        .expect("list")
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, ["Zulu", "Alpha"]);
}

#[tokio::test]
async fn set_default_leaves_exactly_one_default() {
    let backend = MemoryBackend::new();
    let restaurant = Uuid::new_v4();
    let a = backend.create_floor_plan(new_plan(restaurant, "A", true)).await.expect("create");
    let b = backend.create_floor_plan(new_plan(restaurant, "B", false)).await.expect("create");

    backend.set_default_floor_plan(restaurant, b.id).await.expect("set default");

    assert!(!backend.get_floor_plan(a.id).await.expect("get").is_default);
    assert!(backend.get_floor_plan(b.id).await.expect("get").is_default);
}

#[tokio::test]
async fn set_default_rejects_plan_of_other_restaurant() {
    let backend = MemoryBackend::new();
    let plan = backend.create_floor_plan(new_plan(Uuid::new_v4(), "A", false)).await.expect("create");
    let err = backend
        .set_default_floor_plan(Uuid::new_v4(), plan.id)
        .await
        .expect_err("foreign plan");
    assert!(matches!(err, BackendError::FloorPlanNotFound(_)));
}

#[tokio::test]
async fn delete_cascades_to_seating_areas() {
    let backend = MemoryBackend::new();
    let plan = backend.create_floor_plan(new_plan(Uuid::new_v4(), "A", false)).await.expect("create");
    backend.create_seating_area(plan.id, &area("T1")).await.expect("create area");
    backend.create_seating_area(plan.id, &area("T2")).await.expect("create area");
    assert_eq!(backend.seating_area_count().await, 2);

    backend.delete_floor_plan(plan.id).await.expect("delete");
    assert_eq!(backend.seating_area_count().await, 0);
}

// =============================================================================
// SEATING AREAS
// =============================================================================

#[tokio::test]
async fn seating_area_requires_existing_plan() {
    let backend = MemoryBackend::new();
    let err = backend
        .create_seating_area(Uuid::new_v4(), &area("T1"))
        .await
        .expect_err("orphan area");
    assert!(matches!(err, BackendError::FloorPlanNotFound(_)));
}

#[tokio::test]
async fn update_and_delete_seating_area() {
    let backend = MemoryBackend::new();
    let plan = backend.create_floor_plan(new_plan(Uuid::new_v4(), "A", false)).await.expect("create");
    let record = backend.create_seating_area(plan.id, &area("T1")).await.expect("create area");

    let mut changed = area("Window");
    changed.x = 40.0;
    backend.update_seating_area(record.id, &changed).await.expect("update");
    let listed = backend.list_seating_areas(plan.id).await.expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].area, changed);

    backend.delete_seating_area(record.id).await.expect("delete");
    let err = backend.delete_seating_area(record.id).await.expect_err("already gone");
    assert!(matches!(err, BackendError::SeatingAreaNotFound(_)));
}

#[tokio::test]
async fn failing_seating_leaves_floor_plans_available() {
    let backend = FlakySeatingBackend::new();
    let plan = backend.create_floor_plan(new_plan(Uuid::new_v4(), "A", false)).await.expect("create");
    backend.set_seating_failure(true);

    let err = backend.list_seating_areas(plan.id).await.expect_err("injected");
    assert!(matches!(err, BackendError::Unavailable(_)));
    assert!(crate::error::ErrorCode::retryable(&err));
    backend.get_floor_plan(plan.id).await.expect("plans still readable");

    backend.set_seating_failure(false);
    backend.list_seating_areas(plan.id).await.expect("recovered");
    assert_eq!(backend.inner.seating_area_count().await, 0);
}
