//! Library entry for Kalasetu exposing core logic for integration tests.

pub mod app;
pub mod args;
pub mod cards;
pub mod events;
pub mod fixtures;
pub mod forms;
pub mod i18n;
pub mod model;
pub mod state;
pub mod theme;
pub mod ui;
