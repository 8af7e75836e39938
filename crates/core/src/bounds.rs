//! Bounding-box queries over cell populations.

use tui_life_types::Coord;

/// Axis-aligned bounding box of a non-empty population.
///
/// The empty population has no bounding box; queries return `None` for it
/// rather than a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl Bounds {
    /// Bounding box of `cells`, or `None` when the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_life_core::Bounds;
    ///
    /// let b = Bounds::of([(2, 3), (-1, 5), (4, 0)]).unwrap();
    /// assert_eq!((b.min_x, b.min_y, b.max_x, b.max_y), (-1, 0, 4, 5));
    ///
    /// assert_eq!(Bounds::of([]), None);
    /// ```
    pub fn of<I>(cells: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut it = cells.into_iter();
        let (x, y) = it.next()?;
        let mut bounds = Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        };
        for (x, y) in it {
            bounds.min_x = bounds.min_x.min(x);
            bounds.min_y = bounds.min_y.min(y);
            bounds.max_x = bounds.max_x.max(x);
            bounds.max_y = bounds.max_y.max(y);
        }
        Some(bounds)
    }

    /// Number of columns spanned, inclusive of both extremes.
    pub fn width(&self) -> i64 {
        self.max_x - self.min_x + 1
    }

    /// Number of rows spanned, inclusive of both extremes.
    pub fn height(&self) -> i64 {
        self.max_y - self.min_y + 1
    }
}
