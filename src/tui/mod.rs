//! TUI module for the live dashboard.
//!
//! This module hosts the terminal frontend: the event loop owns the
//! simulation state and a [`crate::render::ScreenModel`] surface that the
//! drawing code reads back each frame.

mod app;
mod ui;

pub use app::{run, App};
