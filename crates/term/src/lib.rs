//! Terminal rendering module.
//!
//! A small framebuffer-based rendering layer for the Life runner. The view
//! projects a world snapshot into a [`FrameBuffer`]; the renderer flushes
//! framebuffers to the real terminal, redrawing only what changed.
//!
//! Goals:
//! - Keep `core` pure and testable (the view does no I/O)
//! - Redraw only the cells a generation actually changed
//! - Precise control over aspect ratio (2 terminal columns per Life cell)

pub mod fb;
pub mod renderer;
pub mod view;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{grid_size, DriverStatus, LifeView, Viewport};
