//! Shared types module - coordinates, margins, and driver constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation core, terminal rendering, the driver loop).
//!
//! # Coordinates
//!
//! A live cell is identified by an `(x, y)` pair of signed 64-bit integers.
//! `x` grows rightward (columns), `y` grows downward (rows), matching how
//! initial patterns are written as rows of 0/1. Coordinates are unbounded:
//! they may go negative while a population drifts, and the border adjustment
//! in the core translates them back toward the origin.
//!
//! # Driver Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_STEP_MS` | 200 | Delay between generations |
//! | `MIN_STEP_MS` | 10 | Fastest allowed step delay |
//! | `MAX_STEP_MS` | 2000 | Slowest allowed step delay |
//!
//! # Examples
//!
//! ```
//! use tui_life_types::{neighbors, Coord, Margins, DEFAULT_MARGIN};
//!
//! // Every cell has exactly 8 Moore neighbors.
//! let around: [Coord; 8] = neighbors((0, 0));
//! assert!(around.contains(&(-1, -1)));
//! assert!(!around.contains(&(0, 0)));
//!
//! // Margins default to 2 on every side.
//! assert_eq!(Margins::default(), Margins::uniform(DEFAULT_MARGIN));
//! ```

/// A cell position: `(x, y)` with `x` as column and `y` as row.
pub type Coord = (i64, i64);

/// Offsets of the 8 Moore neighbors (all cells at Chebyshev distance 1).
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The 8 neighbors of a cell, in the order of [`NEIGHBOR_OFFSETS`].
///
/// # Examples
///
/// ```
/// use tui_life_types::neighbors;
///
/// let n = neighbors((5, 3));
/// assert_eq!(n.len(), 8);
/// assert!(n.contains(&(4, 2)));
/// assert!(n.contains(&(6, 4)));
/// ```
#[inline]
pub fn neighbors(cell: Coord) -> [Coord; 8] {
    let (x, y) = cell;
    NEIGHBOR_OFFSETS.map(|(dx, dy)| (x + dx, y + dy))
}

/// Default border margin on every side, in cells.
pub const DEFAULT_MARGIN: i64 = 2;

/// Default delay between generations (200ms, five generations per second).
pub const DEFAULT_STEP_MS: u64 = 200;

/// Fastest allowed step delay.
pub const MIN_STEP_MS: u64 = 10;

/// Slowest allowed step delay.
pub const MAX_STEP_MS: u64 = 2000;

/// Border margins around the population's bounding box.
///
/// After border adjustment the leftmost live cell sits at `x == left` and the
/// topmost at `y == top`; `right` and `bottom` pad the rendered grid past the
/// bounding box maxima. Values are expected to be non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Margins {
    pub top: i64,
    pub bottom: i64,
    pub left: i64,
    pub right: i64,
}

impl Margins {
    pub const fn new(top: i64, bottom: i64, left: i64, right: i64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// The same margin on all four sides.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_life_types::Margins;
    ///
    /// let m = Margins::uniform(3);
    /// assert_eq!(m.top, 3);
    /// assert_eq!(m.right, 3);
    /// ```
    pub const fn uniform(margin: i64) -> Self {
        Self::new(margin, margin, margin, margin)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(DEFAULT_MARGIN)
    }
}

/// Driver actions produced by keyboard input.
///
/// These control the run loop, not the simulation rule: the engine itself
/// only knows how to step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverAction {
    /// Toggle pause state
    Pause,
    /// Advance a single generation while paused
    Step,
    /// Halve the step delay (down to `MIN_STEP_MS`)
    Faster,
    /// Double the step delay (up to `MAX_STEP_MS`)
    Slower,
    /// Rebuild the world from the initial pattern at generation 0
    Restart,
}
