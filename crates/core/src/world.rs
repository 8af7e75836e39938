//! World state module - the sparse live-cell set and the generation step.
//!
//! The world owns the only mutable simulation state: the set of live cells
//! and the generation counter. One call to [`World::step`] produces the next
//! generation from the previous one in full (snapshot-then-replace); nothing
//! mutates the population in place, so every neighbor count reads the
//! pre-step state.

use hashbrown::HashSet;

use tui_life_types::{neighbors, Coord, Margins};

use crate::bounds::Bounds;
use crate::error::PatternError;
use crate::grid::Grid;
use crate::patterns::Catalog;
use crate::snapshot::WorldSnapshot;

/// Sparse Life world on an unbounded lattice.
///
/// Only live cells are stored; everything else is dead. Coordinates may go
/// negative while a population drifts; border adjustment translates them
/// back so that the bounding box minimum sits on the configured margins.
#[derive(Debug, Clone)]
pub struct World {
    cells: HashSet<Coord>,
    /// Completed steps since construction; never reset.
    generation: u64,
    margins: Margins,
    auto_adjust: bool,
}

impl World {
    /// Seed a world from a validated grid.
    ///
    /// Every cell equal to 1 becomes a live cell at `(column, row)`. The
    /// generation counter starts at 0, and the seed coordinates are kept
    /// as written until the first step adjusts them.
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            cells: grid.live_cells().collect(),
            generation: 0,
            margins: Margins::default(),
            auto_adjust: true,
        }
    }

    /// Seed a world from a named pattern in `catalog`.
    pub fn from_catalog(catalog: &Catalog, name: &str) -> Result<Self, PatternError> {
        let pattern = catalog
            .find(name)
            .ok_or_else(|| PatternError::UnknownPattern(name.to_string()))?;
        Ok(Self::from_grid(&pattern.grid()?))
    }

    /// Seed a world from a named built-in pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_life_core::World;
    ///
    /// let world = World::from_pattern("blinker").unwrap();
    /// assert_eq!(world.population(), 3);
    ///
    /// assert!(World::from_pattern("no-such-thing").is_err());
    /// ```
    pub fn from_pattern(name: &str) -> Result<Self, PatternError> {
        Self::from_catalog(&Catalog::builtin(), name)
    }

    /// Replace the border margins (builder style, applied before a run).
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Enable or disable border adjustment after each step.
    pub fn with_auto_adjust(mut self, auto_adjust: bool) -> Self {
        self.auto_adjust = auto_adjust;
        self
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn auto_adjust(&self) -> bool {
        self.auto_adjust
    }

    pub fn contains(&self, cell: Coord) -> bool {
        self.cells.contains(&cell)
    }

    /// Iterate the live cells in unspecified order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// Bounding box of the live population, `None` when extinct.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of(self.cells())
    }

    /// Advance exactly one generation.
    ///
    /// Candidates are the live cells plus every cell adjacent to one; no
    /// other cell can change. Each candidate's neighbor count is taken
    /// against the pre-step population, a cell is alive next generation iff
    /// the count is 3 or the count is 2 and it is alive now, and the whole
    /// population is replaced at once. Stepping an empty world leaves it
    /// empty and still counts the generation.
    pub fn step(&mut self) {
        let mut candidates: HashSet<Coord> = HashSet::with_capacity(self.cells.len() * 9);
        for &cell in &self.cells {
            candidates.insert(cell);
            candidates.extend(neighbors(cell));
        }

        let mut next: HashSet<Coord> = HashSet::with_capacity(self.cells.len() + 8);
        for &cell in &candidates {
            let live = neighbors(cell)
                .iter()
                .filter(|n| self.cells.contains(*n))
                .count();
            if live == 3 || (live == 2 && self.cells.contains(&cell)) {
                next.insert(cell);
            }
        }

        self.cells = next;
        self.generation += 1;
        if self.auto_adjust {
            self.adjust_borders();
        }
    }

    /// Translate all cells so the bounding box minimum lands on the left
    /// and top margins.
    ///
    /// A pure translation: relative distances and the population count are
    /// unchanged. Does nothing on an empty world or when the population is
    /// already anchored.
    pub fn adjust_borders(&mut self) {
        let Some(bounds) = self.bounds() else {
            return;
        };
        let dx = self.margins.left - bounds.min_x;
        let dy = self.margins.top - bounds.min_y;
        if dx == 0 && dy == 0 {
            return;
        }
        self.cells = self.cells.iter().map(|&(x, y)| (x + dx, y + dy)).collect();
    }

    /// Allocate a fresh snapshot of the current state.
    pub fn snapshot(&self) -> WorldSnapshot {
        let mut snap = WorldSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill `out` with the current state, reusing its buffers.
    ///
    /// Cells are sorted row-major so snapshots of equal states compare
    /// equal regardless of hash iteration order.
    pub fn snapshot_into(&self, out: &mut WorldSnapshot) {
        out.cells.clear();
        out.cells.extend(self.cells());
        out.cells.sort_unstable_by_key(|&(x, y)| (y, x));
        out.generation = self.generation;
        out.bounds = self.bounds();
        out.margins = self.margins;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells_sorted(world: &World) -> Vec<Coord> {
        let mut v: Vec<Coord> = world.cells().collect();
        v.sort_unstable();
        v
    }

    /// Cells translated so the minimum sits at the origin, for comparing
    /// shapes independent of position.
    fn shape(world: &World) -> Vec<Coord> {
        let Some(b) = world.bounds() else {
            return Vec::new();
        };
        let mut v: Vec<Coord> = world
            .cells()
            .map(|(x, y)| (x - b.min_x, y - b.min_y))
            .collect();
        v.sort_unstable();
        v
    }

    fn empty_world() -> World {
        World::from_grid(&Grid::parse::<Vec<u8>>(&[]).unwrap())
    }

    #[test]
    fn test_from_grid_maps_columns_and_rows() {
        let world = World::from_pattern("stable").unwrap();
        assert_eq!(world.generation(), 0);
        assert_eq!(world.population(), 6);
        // (column, row): the single cell of the second matrix row is x=2, y=1.
        assert!(world.contains((2, 1)));
        assert!(world.contains((1, 2)));
        assert!(world.contains((3, 2)));
        assert!(!world.contains((0, 0)));
    }

    #[test]
    fn test_from_pattern_unknown_name() {
        let err = World::from_pattern("boat").unwrap_err();
        assert_eq!(err, PatternError::UnknownPattern("boat".to_string()));
    }

    #[test]
    fn test_from_catalog_is_case_insensitive() {
        let world = World::from_catalog(&Catalog::builtin(), "GLIDER").unwrap();
        assert_eq!(world.population(), 5);
    }

    #[test]
    fn test_generation_counts_steps() {
        let mut world = World::from_pattern("glider").unwrap();
        for expected in 1..=10 {
            world.step();
            assert_eq!(world.generation(), expected);
        }
    }

    #[test]
    fn test_block_is_a_fixed_point() {
        let mut world = World::from_pattern("block").unwrap().with_auto_adjust(false);
        let before = cells_sorted(&world);
        world.step();
        assert_eq!(cells_sorted(&world), before);
        assert_eq!(world.generation(), 1);
    }

    #[test]
    fn test_stable_pattern_is_fixed_up_to_translation() {
        let mut world = World::from_pattern("stable").unwrap();
        let shape_before = shape(&world);

        // First step may translate the shape onto the margins.
        world.step();
        assert_eq!(shape(&world), shape_before);

        // From then on it is exactly fixed.
        let anchored = cells_sorted(&world);
        world.step();
        assert_eq!(cells_sorted(&world), anchored);
    }

    #[test]
    fn test_vertical_blinker_flips_to_horizontal() {
        let grid = Grid::parse(&[[0, 1, 0], [0, 1, 0], [0, 1, 0]]).unwrap();
        let mut world = World::from_grid(&grid).with_auto_adjust(false);
        world.step();
        assert_eq!(cells_sorted(&world), vec![(0, 1), (1, 1), (2, 1)]);
        assert_eq!(world.generation(), 1);
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        let grid = Grid::parse(&[[0, 1, 0], [0, 1, 0], [0, 1, 0]]).unwrap();
        let mut world = World::from_grid(&grid).with_auto_adjust(false);
        let start = cells_sorted(&world);

        world.step();
        assert_ne!(cells_sorted(&world), start);
        world.step();
        assert_eq!(cells_sorted(&world), start);
    }

    #[test]
    fn test_glider_repeats_shape_every_four_steps() {
        let mut world = World::from_pattern("glider").unwrap();
        let start_shape = shape(&world);

        for step in 1..=12 {
            world.step();
            if step % 4 == 0 {
                assert_eq!(shape(&world), start_shape, "at step {}", step);
            }
        }
        assert_eq!(world.population(), 5);
    }

    #[test]
    fn test_glider_drifts_monotonically_without_adjust() {
        let mut world = World::from_pattern("glider").unwrap().with_auto_adjust(false);
        let mut last = world.bounds().unwrap();

        for _ in 0..4 {
            for _ in 0..4 {
                world.step();
            }
            let b = world.bounds().unwrap();
            assert!(b.min_x > last.min_x);
            assert!(b.min_y > last.min_y);
            last = b;
        }
    }

    #[test]
    fn test_adjust_borders_anchors_on_margins() {
        let grid = Grid::parse(&[[0, 1, 0], [0, 1, 0], [0, 1, 0]]).unwrap();
        let mut world = World::from_grid(&grid);
        world.adjust_borders();

        let b = world.bounds().unwrap();
        assert_eq!(b.min_x, world.margins().left);
        assert_eq!(b.min_y, world.margins().top);
    }

    #[test]
    fn test_adjust_borders_is_idempotent() {
        let mut world = World::from_pattern("small-exploder").unwrap();
        world.adjust_borders();
        let anchored = cells_sorted(&world);
        world.adjust_borders();
        assert_eq!(cells_sorted(&world), anchored);
    }

    #[test]
    fn test_adjust_borders_preserves_population_and_shape() {
        let mut world = World::from_pattern("glider").unwrap().with_auto_adjust(false);
        for _ in 0..6 {
            world.step();
        }
        let population = world.population();
        let shape_before = shape(&world);

        world.adjust_borders();
        assert_eq!(world.population(), population);
        assert_eq!(shape(&world), shape_before);
    }

    #[test]
    fn test_adjust_borders_handles_negative_coordinates() {
        let mut world = World {
            cells: [(-5, -3), (-4, -3), (-3, -3)].into_iter().collect(),
            ..empty_world()
        };
        world.adjust_borders();
        assert_eq!(cells_sorted(&world), vec![(2, 2), (3, 2), (4, 2)]);
    }

    #[test]
    fn test_custom_margins() {
        let grid = Grid::parse(&[[0, 0], [0, 1]]).unwrap();
        let mut world = World::from_grid(&grid).with_margins(Margins::new(5, 0, 7, 0));
        world.adjust_borders();
        assert_eq!(cells_sorted(&world), vec![(7, 5)]);
    }

    #[test]
    fn test_empty_world_stays_empty() {
        let mut world = empty_world();
        assert!(world.is_empty());
        assert_eq!(world.bounds(), None);

        for expected in 1..=3 {
            world.step();
            assert!(world.is_empty());
            assert_eq!(world.generation(), expected);
        }
    }

    #[test]
    fn test_adjust_borders_on_empty_world_is_noop() {
        let mut world = empty_world();
        world.adjust_borders();
        assert!(world.is_empty());
        assert_eq!(world.generation(), 0);
    }

    #[test]
    fn test_everything_dies_and_the_run_continues() {
        // A lone pair of diagonal cells starves immediately.
        let grid = Grid::parse(&[[1, 0], [0, 1]]).unwrap();
        let mut world = World::from_grid(&grid);
        world.step();
        assert!(world.is_empty());
        assert_eq!(world.bounds(), None);

        world.step();
        assert!(world.is_empty());
        assert_eq!(world.generation(), 2);
    }

    #[test]
    fn test_snapshot_fields() {
        let mut world = World::from_pattern("blinker").unwrap();
        world.step();

        let snap = world.snapshot();
        assert_eq!(snap.generation, 1);
        assert_eq!(snap.margins, world.margins());
        assert_eq!(snap.bounds, world.bounds());
        assert_eq!(snap.cells.len(), world.population());

        // Row-major order: y before x.
        for pair in snap.cells.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            assert!((y0, x0) < (y1, x1));
        }
    }

    #[test]
    fn test_snapshot_into_reuses_buffers() {
        let glider = World::from_pattern("glider").unwrap();
        let gun = World::from_pattern("glider-gun").unwrap();

        let mut snap = gun.snapshot();
        glider.snapshot_into(&mut snap);
        assert_eq!(snap, glider.snapshot());
    }
}
