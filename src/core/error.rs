use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchellingError {
    #[error("Bad file name: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("File is empty")]
    EmptyGrid,

    #[error("Format error in line {line}: row is wrong length (expected {expected}, found {found})")]
    RowLength {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Format error in line {line}: row has entry {symbol:?} other than {allowed}")]
    DisallowedSymbol {
        line: usize,
        symbol: String,
        allowed: String,
    },

    #[error("Grid is not square: {rows} rows of {cols} homes")]
    NotSquare { rows: usize, cols: usize },

    #[error("Invalid simulation parameters: {0}")]
    InvalidParams(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config error: {0}")]
    ConfigError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl SchellingError {
    /// Bad input data, as opposed to an environment failure
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            SchellingError::EmptyGrid
                | SchellingError::RowLength { .. }
                | SchellingError::DisallowedSymbol { .. }
                | SchellingError::NotSquare { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SchellingError>;
