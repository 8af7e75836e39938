//! Terminal input module (driver-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::DriverAction`] run-loop
//! controls. All controls are tap-based; there is no key-repeat machinery.

pub mod map;

pub use tui_life_types as types;

pub use map::{handle_key_event, should_quit};
