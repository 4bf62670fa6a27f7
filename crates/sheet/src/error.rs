use thiserror::Error;

/// Errors that can occur during virtual sheet and range operations
#[derive(Error, Debug)]
pub enum SheetError {
    #[error(
        "Range out of bounds: {num_rows}x{num_cols} at row {row}, col {col} \
         (sheet has {max_row} rows, {max_col} cols)"
    )]
    OutOfRange {
        row: usize,
        col: usize,
        num_rows: usize,
        num_cols: usize,
        max_row: usize,
        max_col: usize,
    },

    #[error("Invalid coordinate: row {row}, col {col} (coordinates start at 1)")]
    InvalidCoordinate { row: usize, col: usize },

    #[error("Shape violation: got {rows}x{cols} values for a {max_rows}x{max_cols} range")]
    ShapeViolation {
        rows: usize,
        cols: usize,
        max_rows: usize,
        max_cols: usize,
    },

    #[error("Invalid cell notation: {0}")]
    InvalidNotation(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SheetError>;
