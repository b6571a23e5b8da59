#![allow(clippy::float_cmp)]

use super::*;
use crate::element::ElementCategory;
use crate::layout::BackgroundKind;

// =============================================================
// Helpers
// =============================================================

fn make_element(id: &str, z: i64) -> Element {
    Element {
        id: id.to_owned(),
        x: 0.0,
        y: 0.0,
        width: 100.0,
        height: 100.0,
        rotation: 0.0,
        kind: "square".into(),
        category: ElementCategory::Table,
        name: format!("Table {id}"),
        color: None,
        is_round: None,
        z_index: z,
        capacity: None,
    }
}

fn store_with(ids: &[&str]) -> EditorStore {
    let mut store = EditorStore::new();
    for (z, id) in ids.iter().enumerate() {
        store.add_element(make_element(id, i64::try_from(z).unwrap()));
    }
    store
}

fn ids(store: &EditorStore) -> Vec<&str> {
    store.elements().iter().map(|el| el.id.as_str()).collect()
}

// =============================================================
// Construction
// =============================================================

#[test]
fn fresh_store_is_empty_with_single_history_entry() {
    let store = EditorStore::new();
    assert!(store.elements().is_empty());
    assert_eq!(store.history_len(), 1);
    assert_eq!(store.history_index(), 0);
    assert!(!store.can_undo());
    assert!(!store.can_redo());
    assert!(store.selected_element().is_none());
    assert!(store.drag_element().is_none());
    assert_eq!(store.policy(), HistoryPolicy::default());
}

#[test]
fn separate_stores_do_not_share_state() {
    let mut a = EditorStore::new();
    let b = EditorStore::new();
    a.add_element(make_element("a", 0));
    assert_eq!(a.elements().len(), 1);
    assert!(b.elements().is_empty());
}

// =============================================================
// Structural mutations and history
// =============================================================

#[test]
fn add_element_appends_and_records() {
    let mut store = EditorStore::new();
    store.add_element(make_element("a", 0));
    assert_eq!(ids(&store), vec!["a"]);
    assert!(store.can_undo());
    assert_eq!(store.history_len(), 2);
}

#[test]
fn n_mutations_then_n_undos_returns_to_empty() {
    let mut store = EditorStore::new();
    store.add_element(make_element("a", 0));
    store.add_element(make_element("b", 1));
    store.update_element(Element { x: 55.0, ..make_element("a", 0) }).unwrap();
    store.select_element(Some("b")).unwrap();
    store.send_backward().unwrap();
    store.delete_element("a").unwrap();

    let n = 5;
    assert_eq!(store.history_len(), n + 1);
    assert_eq!(store.history_index(), n);

    for _ in 0..n {
        assert!(store.undo());
    }
    assert!(store.elements().is_empty());
    assert!(!store.can_undo());
    assert!(!store.undo(), "undo at start of log is a no-op");
}

#[test]
fn undo_redo_navigate_without_editing_log() {
    let mut store = store_with(&["a", "b"]);
    assert!(store.undo());
    assert_eq!(ids(&store), vec!["a"]);
    assert!(store.can_redo());
    assert_eq!(store.history_len(), 3);

    assert!(store.redo());
    assert_eq!(ids(&store), vec!["a", "b"]);
    assert!(!store.can_redo());
    assert!(!store.redo(), "redo at end of log is a no-op");
    assert_eq!(store.history_len(), 3);
}

#[test]
fn new_edit_after_undo_discards_forward_branch() {
    let mut store = store_with(&["a", "b"]);
    store.undo();
    store.add_element(make_element("x", 5));
    let before = store.elements().to_vec();

    assert!(!store.redo());
    assert_eq!(store.elements(), before.as_slice());
    assert_eq!(ids(&store), vec!["a", "x"]);
    assert!(!store.can_redo());
}

#[test]
fn update_element_replaces_by_id() {
    let mut store = store_with(&["a"]);
    let replacement = Element { x: 40.0, name: "Bar".into(), ..make_element("a", 0) };
    store.update_element(replacement.clone()).unwrap();
    assert_eq!(store.get("a"), Some(&replacement));
    assert_eq!(store.history_len(), 3);
}

#[test]
fn update_element_unknown_id_errors_without_recording() {
    let mut store = store_with(&["a"]);
    let err = store.update_element(make_element("missing", 0)).unwrap_err();
    assert_eq!(err, StoreError::ElementNotFound("missing".into()));
    assert_eq!(store.history_len(), 2);
}

#[test]
fn delete_element_clears_matching_selection() {
    let mut store = store_with(&["a", "b"]);
    store.select_element(Some("a")).unwrap();
    let removed = store.delete_element("a").unwrap();
    assert_eq!(removed.id, "a");
    assert!(store.selected_id().is_none());
    assert_eq!(ids(&store), vec!["b"]);
}

#[test]
fn delete_element_keeps_other_selection() {
    let mut store = store_with(&["a", "b"]);
    store.select_element(Some("b")).unwrap();
    store.delete_element("a").unwrap();
    assert_eq!(store.selected_id(), Some("b"));
}

#[test]
fn delete_unknown_element_errors() {
    let mut store = store_with(&["a"]);
    assert!(matches!(store.delete_element("zzz"), Err(StoreError::ElementNotFound(_))));
    assert_eq!(store.elements().len(), 1);
}

#[test]
fn delete_selected_requires_selection() {
    let mut store = store_with(&["a"]);
    assert_eq!(store.delete_selected_element().unwrap_err(), StoreError::NothingSelected);
    store.select_element(Some("a")).unwrap();
    store.delete_selected_element().unwrap();
    assert!(store.elements().is_empty());
}

// =============================================================
// update_element_property coalescing
// =============================================================

#[test]
fn rotation_then_unaligned_x_scenario() {
    let mut store = EditorStore::new();
    store.add_element(Element {
        width: 12.0,
        height: 12.0,
        kind: "round".into(),
        name: "Table #1".into(),
        ..make_element("a", 0)
    });
    assert_eq!(store.elements().len(), 1);
    assert!(store.can_undo());

    let len = store.history_len();
    store.update_element_property("a", PropertyUpdate::Rotation(45.0)).unwrap();
    assert_eq!(store.history_len(), len + 1);

    store.update_element_property("a", PropertyUpdate::X(17.0)).unwrap();
    assert_eq!(store.history_len(), len + 1);
    assert_eq!(store.elements()[0].x, 17.0);
}

#[test]
fn grid_aligned_position_records() {
    let mut store = store_with(&["a"]);
    let len = store.history_len();
    store.update_element_property("a", PropertyUpdate::X(40.0)).unwrap();
    store.update_element_property("a", PropertyUpdate::Y(-60.0)).unwrap();
    store.update_element_property("a", PropertyUpdate::Width(120.0)).unwrap();
    store.update_element_property("a", PropertyUpdate::Height(0.0)).unwrap();
    assert_eq!(store.history_len(), len + 4);
}

#[test]
fn unaligned_geometry_mutates_without_recording() {
    let mut store = store_with(&["a"]);
    let len = store.history_len();
    store.update_element_property("a", PropertyUpdate::Y(33.0)).unwrap();
    store.update_element_property("a", PropertyUpdate::Width(101.5)).unwrap();
    assert_eq!(store.history_len(), len);
    assert_eq!(store.elements()[0].y, 33.0);
    assert_eq!(store.elements()[0].width, 101.5);
}

#[test]
fn color_and_name_always_record() {
    let mut store = store_with(&["a"]);
    let len = store.history_len();
    store.update_element_property("a", PropertyUpdate::Color("#aa0000".into())).unwrap();
    store.update_element_property("a", PropertyUpdate::Name("Window seat".into())).unwrap();
    assert_eq!(store.history_len(), len + 2);
    assert_eq!(store.elements()[0].fill(), "#aa0000");
    assert_eq!(store.elements()[0].name, "Window seat");
}

#[test]
fn unlisted_properties_never_record() {
    let mut store = store_with(&["a"]);
    let len = store.history_len();
    store.update_element_property("a", PropertyUpdate::IsRound(true)).unwrap();
    store.update_element_property("a", PropertyUpdate::Kind("round".into())).unwrap();
    assert_eq!(store.history_len(), len);
    assert_eq!(store.elements()[0].is_round, Some(true));
    assert_eq!(store.elements()[0].kind, "round");
}

#[test]
fn rotation_is_normalized() {
    let mut store = store_with(&["a"]);
    store.update_element_property("a", PropertyUpdate::Rotation(-90.0)).unwrap();
    assert_eq!(store.elements()[0].rotation, 270.0);
    store.update_element_property("a", PropertyUpdate::Rotation(360.0)).unwrap();
    assert_eq!(store.elements()[0].rotation, 0.0);
}

#[test]
fn size_is_clamped_to_minimum() {
    let mut store = store_with(&["a"]);
    store.update_element_property("a", PropertyUpdate::Width(5.0)).unwrap();
    store.update_element_property("a", PropertyUpdate::Height(-40.0)).unwrap();
    assert_eq!(store.elements()[0].width, 20.0);
    assert_eq!(store.elements()[0].height, 20.0);
}

#[test]
fn non_finite_value_is_rejected() {
    let mut store = store_with(&["a"]);
    let err = store.update_element_property("a", PropertyUpdate::X(f64::NAN)).unwrap_err();
    assert!(matches!(err, StoreError::InvalidValue { property: "x", .. }));
    assert_eq!(store.elements()[0].x, 0.0);
}

#[test]
fn unknown_id_property_update_errors_and_changes_nothing() {
    let mut store = store_with(&["a"]);
    let before = store.elements().to_vec();
    let len = store.history_len();
    let err = store.update_element_property("nope", PropertyUpdate::Rotation(10.0)).unwrap_err();
    assert_eq!(err, StoreError::ElementNotFound("nope".into()));
    assert_eq!(store.elements(), before.as_slice());
    assert_eq!(store.history_len(), len);
}

#[test]
fn custom_checkpoint_unit_is_independent_of_grid() {
    let mut store = EditorStore::with_policy(HistoryPolicy { checkpoint_unit: 50.0 });
    store.add_element(make_element("a", 0));
    let len = store.history_len();
    store.update_element_property("a", PropertyUpdate::X(40.0)).unwrap();
    assert_eq!(store.history_len(), len);
    store.update_element_property("a", PropertyUpdate::X(100.0)).unwrap();
    assert_eq!(store.history_len(), len + 1);
}

#[test]
fn zero_checkpoint_unit_disables_positional_checkpoints() {
    let mut store = EditorStore::with_policy(HistoryPolicy { checkpoint_unit: 0.0 });
    store.add_element(make_element("a", 0));
    let len = store.history_len();
    store.update_element_property("a", PropertyUpdate::X(0.0)).unwrap();
    store.update_element_property("a", PropertyUpdate::Rotation(90.0)).unwrap();
    assert_eq!(store.history_len(), len + 1);
}

// =============================================================
// checkpoint
// =============================================================

#[test]
fn checkpoint_records_only_unrecorded_changes() {
    let mut store = store_with(&["a"]);
    assert!(!store.checkpoint(), "nothing changed since last snapshot");

    store.update_element_property("a", PropertyUpdate::X(17.0)).unwrap();
    let len = store.history_len();
    assert!(store.checkpoint());
    assert_eq!(store.history_len(), len + 1);
    assert!(!store.checkpoint());

    store.undo();
    assert_eq!(store.elements()[0].x, 0.0);
}

// =============================================================
// Duplicate
// =============================================================

#[test]
fn duplicate_offsets_renames_and_selects_clone() {
    let mut store = store_with(&["a"]);
    store.update_element_property("a", PropertyUpdate::X(40.0)).unwrap();
    store.update_element_property("a", PropertyUpdate::Y(60.0)).unwrap();
    store.select_element(Some("a")).unwrap();

    let new_id = store.duplicate_selected_element().unwrap();
    assert_ne!(new_id, "a");

    let clone = store.selected_element().unwrap();
    assert_eq!(clone.id, new_id);
    assert_eq!(clone.x, 60.0);
    assert_eq!(clone.y, 80.0);
    assert_eq!(clone.name, "Table a (Copy)");
    assert_eq!(clone.z_index, 1);
    assert_eq!(clone.width, 100.0);
    assert_eq!(store.elements().len(), 2);
}

#[test]
fn duplicate_without_selection_errors() {
    let mut store = store_with(&["a"]);
    assert_eq!(store.duplicate_selected_element().unwrap_err(), StoreError::NothingSelected);
}

#[test]
fn duplicate_records_history() {
    let mut store = store_with(&["a"]);
    store.select_element(Some("a")).unwrap();
    let len = store.history_len();
    store.duplicate_selected_element().unwrap();
    assert_eq!(store.history_len(), len + 1);
    store.undo();
    assert_eq!(ids(&store), vec!["a"]);
}

// =============================================================
// Z-order
// =============================================================

#[test]
fn bring_forward_swaps_with_neighbor_above() {
    let mut store = store_with(&["a", "b", "c"]);
    store.select_element(Some("a")).unwrap();
    assert!(store.bring_forward().unwrap());
    assert_eq!(ids(&store), vec!["b", "a", "c"]);
    assert_eq!(store.get("a").unwrap().z_index, 1);
    assert_eq!(store.get("b").unwrap().z_index, 0);
}

#[test]
fn send_backward_swaps_with_neighbor_below() {
    let mut store = store_with(&["a", "b", "c"]);
    store.select_element(Some("c")).unwrap();
    assert!(store.send_backward().unwrap());
    assert_eq!(ids(&store), vec!["a", "c", "b"]);
}

#[test]
fn bring_forward_on_topmost_is_noop() {
    let mut store = store_with(&["a", "b"]);
    store.select_element(Some("b")).unwrap();
    let len = store.history_len();
    assert!(!store.bring_forward().unwrap());
    assert_eq!(ids(&store), vec!["a", "b"]);
    assert_eq!(store.history_len(), len);
}

#[test]
fn send_backward_on_bottommost_is_noop() {
    let mut store = store_with(&["a", "b"]);
    store.select_element(Some("a")).unwrap();
    let len = store.history_len();
    assert!(!store.send_backward().unwrap());
    assert_eq!(ids(&store), vec!["a", "b"]);
    assert_eq!(store.history_len(), len);
}

#[test]
fn reorder_uses_sorted_position_not_numeric_adjacency() {
    let mut store = EditorStore::new();
    store.add_element(make_element("top", 90));
    store.add_element(make_element("low", 3));
    store.add_element(make_element("mid", 40));
    store.select_element(Some("low")).unwrap();

    assert!(store.bring_forward().unwrap());
    assert_eq!(ids(&store), vec!["mid", "low", "top"]);
    assert_eq!(store.get("low").unwrap().z_index, 40);
    assert_eq!(store.get("mid").unwrap().z_index, 3);
}

#[test]
fn reorder_with_equal_z_still_moves_element() {
    let mut store = EditorStore::new();
    store.add_element(make_element("a", 0));
    store.add_element(make_element("b", 0));
    store.select_element(Some("a")).unwrap();
    assert!(store.bring_forward().unwrap());
    assert_eq!(ids(&store), vec!["b", "a"]);
}

#[test]
fn reorder_without_selection_errors() {
    let mut store = store_with(&["a"]);
    assert_eq!(store.bring_forward().unwrap_err(), StoreError::NothingSelected);
    assert_eq!(store.send_backward().unwrap_err(), StoreError::NothingSelected);
}

#[test]
fn reorder_records_history() {
    let mut store = store_with(&["a", "b"]);
    store.select_element(Some("a")).unwrap();
    let len = store.history_len();
    store.bring_forward().unwrap();
    assert_eq!(store.history_len(), len + 1);
    store.undo();
    assert_eq!(ids(&store), vec!["a", "b"]);
}

// =============================================================
// Selection and drag staging
// =============================================================

#[test]
fn select_unknown_id_errors() {
    let mut store = store_with(&["a"]);
    assert!(store.select_element(Some("ghost")).is_err());
    assert!(store.selected_id().is_none());
}

#[test]
fn selection_does_not_touch_history() {
    let mut store = store_with(&["a"]);
    let len = store.history_len();
    store.select_element(Some("a")).unwrap();
    store.select_element(None).unwrap();
    assert_eq!(store.history_len(), len);
    assert!(store.selected_element().is_none());
}

#[test]
fn selected_element_is_none_after_undo_removes_it() {
    let mut store = store_with(&["a"]);
    store.select_element(Some("a")).unwrap();
    store.undo();
    assert!(store.selected_element().is_none());
}

#[test]
fn start_and_end_drag_toggle_staging_only() {
    let mut store = EditorStore::new();
    let template = DragTemplate::new(ElementCategory::Chair, "stool", 40.0, 40.0);
    store.start_drag(template.clone());
    assert_eq!(store.drag_element(), Some(&template));
    assert_eq!(store.history_len(), 1);
    store.end_drag();
    assert!(store.drag_element().is_none());
    assert_eq!(store.history_len(), 1);
}

#[test]
fn place_drag_commits_template_with_default_name() {
    let mut store = EditorStore::new();
    store.add_element(make_element("t", 0));
    store.start_drag(DragTemplate::new(ElementCategory::Table, "round", 80.0, 80.0).round());

    let id = store.place_drag(120.0, 40.0).unwrap();
    let placed = store.get(&id).unwrap();
    assert_eq!(placed.name, "Table #2");
    assert_eq!((placed.x, placed.y), (120.0, 40.0));
    assert_eq!(placed.z_index, 1);
    assert_eq!(placed.is_round, Some(true));
    assert!(store.drag_element().is_none());
    assert_eq!(store.selected_id(), Some(id.as_str()));
    assert_eq!(store.history_len(), 3);
}

#[test]
fn place_drag_without_template_errors() {
    let mut store = EditorStore::new();
    assert_eq!(store.place_drag(0.0, 0.0).unwrap_err(), StoreError::NoDragTemplate);
}

// =============================================================
// Load / reset
// =============================================================

#[test]
fn load_floor_plan_resets_history() {
    let mut store = store_with(&["old"]);
    store.select_element(Some("old")).unwrap();

    let layout = LayoutDocument {
        elements: vec![make_element("e1", 0), make_element("e2", 1)],
        background: Background { kind: BackgroundKind::Grid, ..Background::default() },
    };
    let id = Uuid::new_v4();
    store.load_floor_plan(
        LayoutIdentity { id: Some(id), name: "Patio".into(), is_default: true },
        layout,
    );

    assert_eq!(ids(&store), vec!["e1", "e2"]);
    assert!(!store.can_undo());
    assert!(!store.can_redo());
    assert_eq!(store.history_len(), 1);
    assert!(store.selected_id().is_none());
    assert_eq!(store.identity().id, Some(id));
    assert_eq!(store.background().kind, BackgroundKind::Grid);

    assert!(!store.undo());
    assert_eq!(ids(&store), vec!["e1", "e2"]);
}

#[test]
fn load_floor_plan_sorts_by_z_index() {
    let mut store = EditorStore::new();
    store.load_floor_plan(
        LayoutIdentity::unsaved("Main"),
        LayoutDocument {
            elements: vec![make_element("hi", 5), make_element("lo", 1)],
            background: Background::default(),
        },
    );
    assert_eq!(ids(&store), vec!["lo", "hi"]);
}

#[test]
fn reset_returns_to_fresh_state_keeping_policy() {
    let policy = HistoryPolicy { checkpoint_unit: 10.0 };
    let mut store = EditorStore::with_policy(policy);
    store.add_element(make_element("a", 0));
    store.set_layout_name("Bar");
    store.start_drag(DragTemplate::new(ElementCategory::Fixture, "plant", 30.0, 30.0));

    store.reset_floor_plan();
    assert!(store.elements().is_empty());
    assert_eq!(store.history_len(), 1);
    assert!(store.drag_element().is_none());
    assert_eq!(store.identity(), &LayoutIdentity::default());
    assert_eq!(store.policy(), policy);
}

#[test]
fn to_document_captures_elements_and_background() {
    let mut store = store_with(&["a", "b"]);
    store.set_background(Background { opacity: 0.25, ..Background::default() });
    let doc = store.to_document();
    assert_eq!(doc.elements.len(), 2);
    assert_eq!(doc.background.opacity, 0.25);
}

#[test]
fn layout_identity_setters() {
    let mut store = EditorStore::new();
    store.set_layout_name("Terrace");
    assert_eq!(store.identity().name, "Terrace");
    let id = Uuid::new_v4();
    store.set_layout_identity(LayoutIdentity { id: Some(id), name: "Terrace".into(), is_default: false });
    assert_eq!(store.identity().id, Some(id));
}

// =============================================================
// Stacking order and geometry invariants
// =============================================================

fn reload(store: &EditorStore) -> EditorStore {
    let mut reloaded = EditorStore::new();
    reloaded.load_floor_plan(store.identity().clone(), store.to_document());
    reloaded
}

#[test]
fn duplicate_keeps_live_order_equal_to_reloaded_order() {
    let mut store = EditorStore::new();
    store.load_floor_plan(
        LayoutIdentity::unsaved("Main"),
        LayoutDocument {
            elements: vec![make_element("a", 0), make_element("b", 5)],
            background: Background::default(),
        },
    );
    store.select_element(Some("a")).unwrap();
    let copy = store.duplicate_selected_element().unwrap();

    assert_eq!(store.get(&copy).unwrap().z_index, 2);
    assert_eq!(ids(&store), vec!["a", copy.as_str(), "b"]);
    assert_eq!(ids(&reload(&store)), ids(&store));
}

#[test]
fn placed_template_is_stacked_by_z_index() {
    let mut store = EditorStore::new();
    store.load_floor_plan(
        LayoutIdentity::unsaved("Main"),
        LayoutDocument {
            elements: vec![make_element("a", 0), make_element("b", 7)],
            background: Background::default(),
        },
    );
    store.start_drag(DragTemplate::new(ElementCategory::Chair, "stool", 40.0, 40.0));
    let placed = store.place_drag(0.0, 0.0).unwrap();

    assert_eq!(ids(&store), vec!["a", placed.as_str(), "b"]);
    assert_eq!(ids(&reload(&store)), ids(&store));
}

#[test]
fn update_element_normalizes_and_clamps_geometry() {
    let mut store = store_with(&["a"]);
    store
        .update_element(Element { rotation: 400.0, width: 5.0, height: -3.0, ..make_element("a", 0) })
        .unwrap();
    let el = store.get("a").unwrap();
    assert_eq!(el.rotation, 40.0);
    assert_eq!(el.width, MIN_ELEMENT_SIZE);
    assert_eq!(el.height, MIN_ELEMENT_SIZE);
}

#[test]
fn update_element_rejects_non_finite_geometry() {
    let mut store = store_with(&["a"]);
    let len = store.history_len();
    let err = store.update_element(Element { x: f64::NAN, ..make_element("a", 0) }).unwrap_err();
    assert!(matches!(err, StoreError::InvalidValue { property: "x", .. }));
    assert_eq!(store.get("a").unwrap().x, 0.0);
    assert_eq!(store.history_len(), len);
}

#[test]
fn update_element_restacks_on_z_change() {
    let mut store = store_with(&["a", "b"]);
    store.update_element(make_element("a", 9)).unwrap();
    assert_eq!(ids(&store), vec!["b", "a"]);
}

#[test]
fn load_floor_plan_normalizes_rotation() {
    let mut store = EditorStore::new();
    store.load_floor_plan(
        LayoutIdentity::unsaved("Main"),
        LayoutDocument {
            elements: vec![Element { rotation: 720.0, ..make_element("a", 0) }, Element {
                rotation: -90.0,
                ..make_element("b", 1)
            }],
            background: Background::default(),
        },
    );
    assert_eq!(store.get("a").unwrap().rotation, 0.0);
    assert_eq!(store.get("b").unwrap().rotation, 270.0);
}

// =============================================================
// Batched property updates
// =============================================================

#[test]
fn batched_update_records_one_snapshot() {
    let mut store = store_with(&["a"]);
    let len = store.history_len();
    store
        .update_element_properties("a", &[PropertyUpdate::X(40.0), PropertyUpdate::Y(60.0)])
        .unwrap();
    assert_eq!(store.history_len(), len + 1);

    assert!(store.undo());
    let el = store.get("a").unwrap();
    assert_eq!((el.x, el.y), (0.0, 0.0));
}

#[test]
fn batched_update_off_grid_records_nothing() {
    let mut store = store_with(&["a"]);
    let len = store.history_len();
    store
        .update_element_properties("a", &[PropertyUpdate::X(13.0), PropertyUpdate::Y(7.0)])
        .unwrap();
    assert_eq!(store.history_len(), len);
    assert_eq!(store.get("a").unwrap().x, 13.0);
}

#[test]
fn batched_update_is_all_or_nothing() {
    let mut store = store_with(&["a"]);
    let err = store
        .update_element_properties("a", &[PropertyUpdate::X(40.0), PropertyUpdate::Y(f64::INFINITY)])
        .unwrap_err();
    assert!(matches!(err, StoreError::InvalidValue { property: "y", .. }));
    assert_eq!(store.get("a").unwrap().x, 0.0);
}
