//! Load city grids from text files
//!
//! One row per line, homes separated by spaces, each home a single symbol
//! from the loader's alphabet:
//!
//! ```text
//! 5
//! O B O B O
//! B M O M M
//! M O M M M
//! B B B B O
//! M O M M M
//! ```
//!
//! The leading size line is an older format and is skipped when present.
//! Blank lines are ignored. Line numbers in errors are 1-based file lines.

use std::path::Path;

use nom::bytes::complete::take_till1;
use nom::character::complete::space1;
use nom::multi::separated_list1;
use nom::{IResult, Parser};

use crate::core::error::{Result, SchellingError};
use crate::core::types::{Alphabet, Cell};
use crate::spatial::CityGrid;

/// Split a trimmed line into whitespace-separated tokens
fn row_tokens(line: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(space1, take_till1(|c: char| c.is_whitespace())).parse(line)
}

/// Loader that turns grid text into a `CityGrid`
#[derive(Debug, Clone, Copy, Default)]
pub struct GridLoader {
    alphabet: Alphabet,
}

impl GridLoader {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Load a grid from a file on disk
    pub fn load_from_file(&self, path: &Path) -> Result<CityGrid> {
        if !path.is_file() {
            return Err(SchellingError::MissingFile(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        self.load_from_str(&content)
    }

    /// Load a grid from text
    pub fn load_from_str(&self, text: &str) -> Result<CityGrid> {
        let mut rows: Vec<Vec<Cell>> = Vec::new();
        let mut expected_len = None;

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let tokens = match row_tokens(line) {
                Ok((rest, tokens)) if rest.is_empty() => tokens,
                Ok((rest, _)) => {
                    return Err(self.disallowed(line_no, rest));
                }
                Err(_) => return Err(self.disallowed(line_no, line)),
            };

            if rows.is_empty() && expected_len.is_none() && is_size_header(&tokens) {
                tracing::debug!("Skipping legacy size header on line {}", line_no);
                continue;
            }

            let expected = *expected_len.get_or_insert(tokens.len());
            if tokens.len() != expected {
                return Err(SchellingError::RowLength {
                    line: line_no,
                    expected,
                    found: tokens.len(),
                });
            }

            let row = tokens
                .iter()
                .map(|token| self.parse_home(line_no, token))
                .collect::<Result<Vec<Cell>>>()?;
            rows.push(row);
        }

        let grid = CityGrid::from_rows(rows)?;
        tracing::debug!(
            "Loaded {}x{} grid with {} residents",
            grid.size(),
            grid.size(),
            grid.count_occupied()
        );
        Ok(grid)
    }

    fn parse_home(&self, line: usize, token: &str) -> Result<Cell> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => self
                .alphabet
                .cell(symbol)
                .ok_or_else(|| self.disallowed(line, token)),
            _ => Err(self.disallowed(line, token)),
        }
    }

    fn disallowed(&self, line: usize, symbol: &str) -> SchellingError {
        SchellingError::DisallowedSymbol {
            line,
            symbol: symbol.to_string(),
            allowed: self.alphabet.describe(),
        }
    }
}

/// A lone integer on the first line gives the grid size in the old format
fn is_size_header(tokens: &[&str]) -> bool {
    tokens.len() == 1 && tokens[0].parse::<usize>().is_ok()
}

/// Read a grid file using the default alphabet
pub fn read_grid(path: &Path) -> Result<CityGrid> {
    GridLoader::default().load_from_file(path)
}

/// Parse grid text using the default alphabet
pub fn parse_grid(text: &str) -> Result<CityGrid> {
    GridLoader::default().load_from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Group, Location};

    #[test]
    fn test_parse_simple_grid() {
        let grid = parse_grid("B O\nM B\n").unwrap();
        assert_eq!(grid.size(), 2);
        assert_eq!(grid[Location::new(0, 0)], Cell::Resident(Group::A));
        assert_eq!(grid[Location::new(0, 1)], Cell::Open);
        assert_eq!(grid[Location::new(1, 0)], Cell::Resident(Group::B));
    }

    #[test]
    fn test_size_header_is_skipped() {
        let grid = parse_grid("2\nB O\nM B\n").unwrap();
        assert_eq!(grid.size(), 2);
        assert_eq!(grid.to_string(), "B O\nM B\n");
    }

    #[test]
    fn test_single_home_grid_is_not_a_header() {
        let grid = parse_grid("M\n").unwrap();
        assert_eq!(grid.size(), 1);
        assert_eq!(grid.count_occupied(), 1);
    }

    #[test]
    fn test_blank_lines_and_tabs_tolerated() {
        let grid = parse_grid("\nB\tO\r\n\nM  B\n\n").unwrap();
        assert_eq!(grid.size(), 2);
    }

    #[test]
    fn test_row_length_error() {
        let err = parse_grid("B O M\nM B\nO O O\n").unwrap_err();
        assert!(matches!(
            err,
            SchellingError::RowLength {
                line: 2,
                expected: 3,
                found: 2
            }
        ));
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_disallowed_symbol() {
        let err = parse_grid("B O\nM X\n").unwrap_err();
        match err {
            SchellingError::DisallowedSymbol {
                line,
                symbol,
                allowed,
            } => {
                assert_eq!(line, 2);
                assert_eq!(symbol, "X");
                assert_eq!(allowed, "B/M/O");
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = parse_grid("BO O\nM B\n").unwrap_err();
        assert!(matches!(err, SchellingError::DisallowedSymbol { line: 1, .. }));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse_grid(""), Err(SchellingError::EmptyGrid)));
        assert!(matches!(parse_grid("\n\n"), Err(SchellingError::EmptyGrid)));
        assert!(matches!(parse_grid("4\n"), Err(SchellingError::EmptyGrid)));
    }

    #[test]
    fn test_non_square() {
        let err = parse_grid("B O\nM B\nO O\n").unwrap_err();
        assert!(matches!(err, SchellingError::NotSquare { rows: 3, cols: 2 }));
    }

    #[test]
    fn test_custom_alphabet() {
        let loader = GridLoader::new(Alphabet::new('R', 'G', '.').unwrap());
        let grid = loader.load_from_str("R .\n. G\n").unwrap();
        assert_eq!(grid.count_occupied(), 2);
        assert!(loader.load_from_str("B O\nO M\n").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = read_grid(Path::new("no/such/grid.txt")).unwrap_err();
        assert!(matches!(err, SchellingError::MissingFile(_)));
        assert!(!err.is_malformed_input());
    }
}
