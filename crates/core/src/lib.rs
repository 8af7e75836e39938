//! Simulation core - pure, deterministic, and testable
//!
//! This module contains the Life rule, the sparse world state, and pattern
//! parsing. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: The same seed grid always produces the same run
//! - **Testable**: Every rule and edge case is covered by unit tests
//! - **Portable**: Can run in any environment (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`world`]: Sparse live-cell set, generation counter, step and border
//!   adjustment
//! - [`grid`]: Validated rectangular 0/1 seed matrices
//! - [`patterns`]: Named built-in starting patterns and the catalog lookup
//! - [`bounds`]: Bounding-box queries over cell populations
//! - [`snapshot`]: Renderer-facing copies of the world state
//! - [`error`]: Typed pattern/grid validation errors
//!
//! # The Rule
//!
//! Cells live on an unbounded lattice; only live cells are stored. Each
//! step considers every live cell and its 8 Moore neighbors, counts live
//! neighbors against the pre-step population, and keeps a cell alive exactly
//! when the count is 3, or the count is 2 and the cell was already alive.
//! The whole population is replaced at once; there are no in-place updates.
//!
//! After each step the population is translated so its bounding box starts
//! at the configured margins ("border adjustment"), which keeps drifting
//! patterns like gliders anchored near the origin for display. This can be
//! switched off to observe raw coordinates.
//!
//! # Example
//!
//! ```
//! use tui_life_core::World;
//!
//! let mut world = World::from_pattern("glider").unwrap();
//! assert_eq!(world.generation(), 0);
//! assert_eq!(world.population(), 5);
//!
//! world.step();
//! assert_eq!(world.generation(), 1);
//! assert_eq!(world.population(), 5);
//! ```

pub mod bounds;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod snapshot;
pub mod world;

pub use tui_life_types as types;

// Re-export commonly used types for convenience
pub use bounds::Bounds;
pub use error::PatternError;
pub use grid::Grid;
pub use patterns::{Catalog, Pattern, BUILTIN_PATTERNS};
pub use snapshot::WorldSnapshot;
pub use world::World;
