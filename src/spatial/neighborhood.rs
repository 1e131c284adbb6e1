//! Neighborhood windows around a home

use crate::core::types::Location;

/// Half-open rectangular window `[row_lo, row_hi) x [col_lo, col_hi)`
///
/// Clipped to the grid. There is no wraparound and no padding, so homes on
/// an edge or in a corner have smaller neighborhoods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighborhood {
    pub row_lo: usize,
    pub row_hi: usize,
    pub col_lo: usize,
    pub col_hi: usize,
}

impl Neighborhood {
    /// Window of radius `radius` around `center` in an `size` x `size` grid
    pub fn around(size: usize, radius: usize, center: Location) -> Self {
        let span = |c: usize| {
            (
                c.saturating_sub(radius),
                c.saturating_add(radius).saturating_add(1).min(size),
            )
        };
        let (row_lo, row_hi) = span(center.row);
        let (col_lo, col_hi) = span(center.col);
        Self {
            row_lo,
            row_hi,
            col_lo,
            col_hi,
        }
    }

    /// Number of homes in the window
    #[inline]
    pub fn area(&self) -> usize {
        (self.row_hi - self.row_lo) * (self.col_hi - self.col_lo)
    }

    pub fn contains(&self, loc: Location) -> bool {
        (self.row_lo..self.row_hi).contains(&loc.row) && (self.col_lo..self.col_hi).contains(&loc.col)
    }

    /// Locations in the window, row-major
    pub fn locations(&self) -> impl Iterator<Item = Location> {
        let Self {
            row_lo,
            row_hi,
            col_lo,
            col_hi,
        } = *self;
        (row_lo..row_hi).flat_map(move |row| (col_lo..col_hi).map(move |col| Location::new(row, col)))
    }
}
