//! Core library surface for the Student Roster Manager TUI application.
//!
//! The modules exposed here keep the persistence, form, and controller
//! layers usable without the terminal front-end, so the command dispatch can
//! be exercised headless by tests and external tooling.
pub mod controller;
pub mod db;
pub mod form;
pub mod models;
pub mod ui;

/// Convenience re-exports for the persistence layer. These functions are
/// typically used by `main.rs` to initialize the embedded SQLite store and
/// preload the roster.
pub use db::{ensure_schema, fetch_students};

/// The command dispatch pair that mediates every user action.
pub use controller::{Command, Controller};

/// The domain type other layers manipulate.
pub use models::Student;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
