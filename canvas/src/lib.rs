//! Floor-plan editing model.
//!
//! This crate owns everything the floor-plan designer does between a pointer
//! event and a saved layout: placing tables, chairs, and fixtures, moving,
//! resizing, and rotating them with optional grid snapping, managing stacking
//! order, and a linear undo/redo history. It performs no I/O; the host UI
//! feeds it pointer events and the service layer persists
//! [`layout::LayoutDocument`]s built from it.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`store`] | Per-session [`store::EditorStore`]: elements, selection, staging, history |
//! | [`transform`] | Pointer-driven drag/resize/rotate via [`transform::TransformController`] |
//! | [`element`] | Element, category, palette template, and property-update types |
//! | [`layout`] | Persisted layout document and its load-time validation |
//! | [`history`] | Generic snapshot log with branch-discarding undo/redo |
//! | [`hit`] | Hit-testing element bodies and handles |
//! | [`geometry`] | Grid snapping, point rotation, and angle helpers |
//! | [`consts`] | Shared numeric constants (grid unit, minimum size, snap thresholds) |

pub mod consts;
pub mod element;
pub mod geometry;
pub mod history;
pub mod hit;
pub mod layout;
pub mod store;
pub mod transform;
