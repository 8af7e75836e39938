//! Built-in starting patterns and the catalog lookup.
//!
//! Patterns are stored as literal 0/1 matrices, written the same way a user
//! would pass one to [`Grid::parse`]. The catalog is an explicit table value,
//! not a hidden global: the engine takes it as an argument so callers can
//! substitute their own.

use crate::error::PatternError;
use crate::grid::Grid;

/// A named seed pattern.
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    pub name: &'static str,
    pub rows: &'static [&'static [u8]],
}

impl Pattern {
    /// Parse the pattern's matrix into a [`Grid`].
    pub fn grid(&self) -> Result<Grid, PatternError> {
        Grid::parse(self.rows)
    }
}

/// The built-in pattern table.
pub const BUILTIN_PATTERNS: &[Pattern] = &[
    Pattern {
        name: "stable",
        rows: &[
            &[0, 0, 0, 0, 0],
            &[0, 0, 1, 0, 0],
            &[0, 1, 0, 1, 0],
            &[0, 1, 0, 1, 0],
            &[0, 0, 1, 0, 0],
            &[0, 0, 0, 0, 0],
        ],
    },
    Pattern {
        name: "glider",
        rows: &[
            &[0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0],
            &[0, 0, 1, 0, 0, 0],
            &[0, 0, 0, 1, 1, 0],
            &[0, 0, 1, 1, 0, 0],
            &[0, 0, 0, 0, 0, 0],
        ],
    },
    Pattern {
        name: "small-exploder",
        rows: &[
            &[0, 0, 0, 0, 0],
            &[0, 0, 1, 0, 0],
            &[0, 1, 1, 1, 0],
            &[0, 1, 0, 1, 0],
            &[0, 0, 1, 0, 0],
            &[0, 0, 0, 0, 0],
        ],
    },
    Pattern {
        name: "block",
        rows: &[&[1, 1], &[1, 1]],
    },
    Pattern {
        name: "blinker",
        rows: &[&[1, 1, 1]],
    },
    Pattern {
        name: "toad",
        rows: &[&[0, 1, 1, 1], &[1, 1, 1, 0]],
    },
    Pattern {
        name: "beacon",
        rows: &[
            &[1, 1, 0, 0],
            &[1, 1, 0, 0],
            &[0, 0, 1, 1],
            &[0, 0, 1, 1],
        ],
    },
    Pattern {
        // Period 3 oscillator.
        name: "pulsar",
        rows: &[
            &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
            &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
        ],
    },
    Pattern {
        // Methuselah: stabilizes after ~1100 generations.
        name: "r-pentomino",
        rows: &[&[0, 1, 1], &[1, 1, 0], &[0, 1, 0]],
    },
    Pattern {
        // Emits a glider every 30 generations.
        name: "glider-gun",
        rows: &[
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1],
            &[1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        ],
    },
];

/// A lookup table of named patterns.
///
/// Lookup is case-insensitive: `"Glider"`, `"GLIDER"` and `"glider"` all
/// resolve to the same entry.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    patterns: &'static [Pattern],
}

impl Catalog {
    pub const fn new(patterns: &'static [Pattern]) -> Self {
        Self { patterns }
    }

    /// The catalog of [`BUILTIN_PATTERNS`].
    pub const fn builtin() -> Self {
        Self::new(BUILTIN_PATTERNS)
    }

    /// Find a pattern by name, ignoring ASCII case.
    pub fn find(&self, name: &str) -> Option<&'static Pattern> {
        self.patterns.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// All pattern names, in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.iter().map(|p| p.name)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
