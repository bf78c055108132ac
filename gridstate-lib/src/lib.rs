//! Tabular data controller for admin dashboards
//!
//! A headless table layer: in-memory filtering, sorting, and pagination
//! over dynamic records, with CRUD operations that reconcile against a
//! remote JSON backend. Presentation is a collaborator, not a concern —
//! [`TableController::render`](controller::TableController::render)
//! emits a [`RenderModel`](view::RenderModel) and any UI can draw it.

pub mod error;
pub mod model;
pub mod presentation;
pub mod remote;
pub mod view;

pub mod controller;

pub use controller::CrudOutcome;
pub use controller::TableConfig;
pub use controller::TableController;
