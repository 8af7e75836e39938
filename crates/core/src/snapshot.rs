//! Renderer-facing copies of the world state.

use tui_life_types::{Coord, Margins};

use crate::bounds::Bounds;

/// An owned copy of the world state taken between steps.
///
/// Produced by [`World::snapshot_into`](crate::World::snapshot_into);
/// carries everything a renderer needs so drawing never re-reads the live
/// set mid-step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldSnapshot {
    /// Live cells sorted row-major (by `y`, then `x`).
    pub cells: Vec<Coord>,
    pub generation: u64,
    pub bounds: Option<Bounds>,
    pub margins: Margins,
}

impl WorldSnapshot {
    pub fn clear(&mut self) {
        self.cells.clear();
        self.generation = 0;
        self.bounds = None;
        self.margins = Margins::default();
    }

    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Default for WorldSnapshot {
    fn default() -> Self {
        Self {
            cells: Vec::new(),
            generation: 0,
            bounds: None,
            margins: Margins::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let snap = WorldSnapshot::default();
        assert!(snap.is_empty());
        assert_eq!(snap.population(), 0);
        assert_eq!(snap.generation, 0);
        assert_eq!(snap.bounds, None);
    }

    #[test]
    fn test_clear_resets_all_fields() {
        let mut snap = WorldSnapshot {
            cells: vec![(1, 1), (2, 2)],
            generation: 42,
            bounds: Bounds::of([(1, 1), (2, 2)]),
            margins: Margins::uniform(9),
        };
        snap.clear();
        assert_eq!(snap, WorldSnapshot::default());
    }
}
