//! Restaurant floor-plan designer: storage and seating for editing sessions.
//!
//! The editing model itself (elements, history, pointer gestures) lives in
//! the `canvas` crate. This crate persists sessions as floor plans, keeps
//! each plan's seating areas in line with its tables, and provides the
//! `floorplan` command-line tool.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`services::floor_plan`] | Save/load/list/delete/default operations scoped to a restaurant |
//! | [`services::seating`] | Seating-area derivation and reconciliation |
//! | [`backend`] | [`backend::FloorPlanBackend`] seam with Postgres and in-memory implementations |
//! | [`db`] | Pool creation and embedded migrations |
//! | [`config`] | Environment-driven configuration |
//! | [`error`] | Stable error codes |

pub mod backend;
pub mod config;
pub mod db;
pub mod error;
pub mod services;
