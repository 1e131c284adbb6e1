//! Square city grid

use std::fmt;
use std::ops::{Deref, DerefMut, Index};

use crate::core::error::{Result, SchellingError};
use crate::core::types::{Alphabet, Cell, Location};

/// N x N city grid stored row-major
///
/// N is fixed at construction. Cells are mutated in place by relocations;
/// the grid is never resized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityGrid {
    size: usize,
    data: Vec<Cell>,
}

impl CityGrid {
    /// All-open grid of the given size
    pub fn new(size: usize) -> Self {
        Self {
            size,
            data: vec![Cell::default(); size * size],
        }
    }

    /// Build a grid from rows, checking every row has N entries for N rows
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(SchellingError::EmptyGrid);
        }

        let mut data = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return Err(SchellingError::NotSquare {
                    rows: size,
                    cols: row.len(),
                });
            }
            data.extend(row);
        }

        Ok(Self { size, data })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index_of(&self, loc: Location) -> Option<usize> {
        if loc.row < self.size && loc.col < self.size {
            Some(loc.row * self.size + loc.col)
        } else {
            None
        }
    }

    #[inline]
    pub fn get(&self, loc: Location) -> Option<Cell> {
        self.index_of(loc).map(|idx| self.data[idx])
    }

    /// Overwrite a cell. Out-of-bounds locations are a caller bug.
    #[inline]
    pub fn set(&mut self, loc: Location, cell: Cell) {
        let idx = self
            .index_of(loc)
            .unwrap_or_else(|| panic!("location {} outside {}x{} grid", loc, self.size, self.size));
        self.data[idx] = cell;
    }

    /// Rows as slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.data.chunks(self.size.max(1))
    }

    /// Every location in row-major order
    pub fn locations(&self) -> impl Iterator<Item = Location> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Location::new(row, col)))
    }

    /// Number of occupied homes (homeowners)
    pub fn count_occupied(&self) -> usize {
        self.data.iter().filter(|c| c.is_occupied()).count()
    }

    /// Open locations in row-major order
    pub fn find_opens(&self) -> Vec<Location> {
        self.locations().filter(|&loc| self[loc].is_open()).collect()
    }

    /// First location (row-major) where two grids differ
    ///
    /// Panics if the grids differ in size.
    pub fn find_mismatch(&self, other: &CityGrid) -> Option<Location> {
        assert_eq!(self.size, other.size, "Grids are not the same shape.");
        self.locations().find(|&loc| self[loc] != other[loc])
    }

    /// Put `cell` at `loc` until the returned guard is dropped
    ///
    /// The previous value is restored on drop, whatever path the caller
    /// leaves by. The guard derefs to the grid so it can be scored while
    /// the placement is in effect.
    pub fn place_temporarily(&mut self, loc: Location, cell: Cell) -> TrialPlacement<'_> {
        let previous = self[loc];
        self.set(loc, cell);
        TrialPlacement {
            grid: self,
            loc,
            previous,
        }
    }

    /// Render with a specific alphabet
    pub fn display<'a>(&'a self, alphabet: &'a Alphabet) -> GridDisplay<'a> {
        GridDisplay {
            grid: self,
            alphabet,
        }
    }
}

impl Index<Location> for CityGrid {
    type Output = Cell;

    fn index(&self, loc: Location) -> &Cell {
        let idx = self
            .index_of(loc)
            .unwrap_or_else(|| panic!("location {} outside {}x{} grid", loc, self.size, self.size));
        &self.data[idx]
    }
}

/// Scoped single-cell mutation, undone on drop
pub struct TrialPlacement<'a> {
    grid: &'a mut CityGrid,
    loc: Location,
    previous: Cell,
}

impl Deref for TrialPlacement<'_> {
    type Target = CityGrid;

    fn deref(&self) -> &CityGrid {
        &*self.grid
    }
}

impl DerefMut for TrialPlacement<'_> {
    fn deref_mut(&mut self) -> &mut CityGrid {
        &mut *self.grid
    }
}

impl Drop for TrialPlacement<'_> {
    fn drop(&mut self) {
        self.grid.set(self.loc, self.previous);
    }
}

/// Grid file rendering: one row per line, symbols separated by spaces
pub struct GridDisplay<'a> {
    grid: &'a CityGrid,
    alphabet: &'a Alphabet,
}

impl fmt::Display for GridDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            let mut first = true;
            for &cell in row {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.alphabet.symbol(cell))?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for CityGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alphabet = Alphabet::default();
        self.display(&alphabet).fmt(f)
    }
}
