//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Grid coordinate as (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance between two locations
    pub fn manhattan_distance(&self, other: &Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for Location {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Resident type. The model supports exactly two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    A,
    B,
}

/// A single home in the city
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Vacant home that a relocating resident may move into
    #[default]
    Open,
    Resident(Group),
}

impl Cell {
    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self, Cell::Open)
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        !self.is_open()
    }
}

/// Symbols used to read and write grids
///
/// Exactly two resident symbols and one open symbol. All three must be
/// distinct; `Alphabet::new` enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    group_a: char,
    group_b: char,
    open: char,
}

impl Alphabet {
    pub fn new(group_a: char, group_b: char, open: char) -> Option<Self> {
        if group_a == group_b || group_a == open || group_b == open {
            return None;
        }
        Some(Self { group_a, group_b, open })
    }

    pub fn symbol(&self, cell: Cell) -> char {
        match cell {
            Cell::Open => self.open,
            Cell::Resident(Group::A) => self.group_a,
            Cell::Resident(Group::B) => self.group_b,
        }
    }

    pub fn cell(&self, symbol: char) -> Option<Cell> {
        match symbol {
            s if s == self.open => Some(Cell::Open),
            s if s == self.group_a => Some(Cell::Resident(Group::A)),
            s if s == self.group_b => Some(Cell::Resident(Group::B)),
            _ => None,
        }
    }

    /// Allowed symbols joined with '/', for error messages
    pub fn describe(&self) -> String {
        format!("{}/{}/{}", self.group_a, self.group_b, self.open)
    }
}

impl Default for Alphabet {
    /// Blue, maroon and open, as in the sample city files
    fn default() -> Self {
        Self {
            group_a: 'B',
            group_b: 'M',
            open: 'O',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        let a = Location::new(0, 0);
        let b = Location::new(3, 4);
        assert_eq!(a.manhattan_distance(&b), 7);
        assert_eq!(b.manhattan_distance(&a), 7);
        assert_eq!(a.manhattan_distance(&a), 0);
    }

    #[test]
    fn test_alphabet_round_trip_symbols() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.cell('B'), Some(Cell::Resident(Group::A)));
        assert_eq!(alphabet.cell('M'), Some(Cell::Resident(Group::B)));
        assert_eq!(alphabet.cell('O'), Some(Cell::Open));
        assert_eq!(alphabet.cell('X'), None);
        assert_eq!(alphabet.symbol(Cell::Resident(Group::B)), 'M');
        assert_eq!(alphabet.describe(), "B/M/O");
    }

    #[test]
    fn test_alphabet_rejects_duplicate_symbols() {
        assert!(Alphabet::new('R', 'R', '.').is_none());
        assert!(Alphabet::new('R', '.', '.').is_none());
        assert!(Alphabet::new('R', 'G', '.').is_some());
    }

    #[test]
    fn test_cell_occupancy() {
        assert!(Cell::Open.is_open());
        assert!(Cell::Resident(Group::A).is_occupied());
        assert_eq!(Cell::default(), Cell::Open);
    }
}
