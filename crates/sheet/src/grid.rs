//! Backing data sources for virtual sheets.

use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use serde::{Deserialize, Serialize};

/// A rectangular data source a [`VirtualSheet`](crate::VirtualSheet) can be
/// materialized from.
///
/// All coordinates are 1-based.
pub trait Grid {
    fn name(&self) -> &str;

    /// Last row holding populated data
    fn last_row(&self) -> usize;

    /// Last column holding populated data
    fn last_column(&self) -> usize;

    /// Total addressable rows
    fn max_rows(&self) -> usize;

    /// Total addressable columns
    fn max_columns(&self) -> usize;

    /// Read the inclusive window starting at (`row`, `col`).
    ///
    /// Implementations must return exactly `num_rows x num_cols` values.
    fn read_block(
        &self,
        row: usize,
        col: usize,
        num_rows: usize,
        num_cols: usize,
    ) -> Result<Vec<Vec<CellValue>>>;
}

/// Whether `count` cells starting at the 1-based `start` stay within `max`
pub(crate) fn window_fits(start: usize, count: usize, max: usize) -> bool {
    start >= 1 && count <= max && start - 1 <= max - count
}

/// Options for in-memory grids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridOptions {
    /// Value reported for cells inside capacity but outside the populated block
    pub fill: CellValue,
}

impl Default for GridOptions {
    fn default() -> Self {
        GridOptions {
            fill: CellValue::empty(),
        }
    }
}

/// An in-memory [`Grid`], for offline work and tests.
#[derive(Debug, Clone)]
pub struct MemoryGrid {
    name: String,
    data: Vec<Vec<CellValue>>,
    max_rows: usize,
    max_columns: usize,
    options: GridOptions,
}

impl MemoryGrid {
    /// Create a grid whose capacity equals its populated extent.
    ///
    /// Ragged input is padded to its widest row with the default fill.
    pub fn new(name: &str, data: Vec<Vec<CellValue>>) -> Self {
        let rows = data.len();
        let cols = data.iter().map(Vec::len).max().unwrap_or(0);
        Self::with_capacity(name, data, rows, cols, GridOptions::default())
    }

    /// Create a grid from anything convertible to cell values
    pub fn from_data<T: Into<CellValue>>(name: &str, data: Vec<Vec<T>>) -> Self {
        Self::new(
            name,
            data.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    /// Create an unpopulated grid of the given capacity
    pub fn blank(name: &str, max_rows: usize, max_columns: usize) -> Self {
        Self::with_capacity(name, Vec::new(), max_rows, max_columns, GridOptions::default())
    }

    /// Create a grid whose populated block may be smaller than its capacity.
    ///
    /// Capacity grows to cover the populated block if it is too small.
    pub fn with_capacity(
        name: &str,
        data: Vec<Vec<CellValue>>,
        max_rows: usize,
        max_columns: usize,
        options: GridOptions,
    ) -> Self {
        let widest = data.iter().map(Vec::len).max().unwrap_or(0);
        MemoryGrid {
            name: name.to_string(),
            max_rows: max_rows.max(data.len()),
            max_columns: max_columns.max(widest),
            data,
            options,
        }
    }

    /// Parse a JSON array of rows, e.g. `[["A", 1], ["B", 2]]`
    pub fn from_json(name: &str, json: &str) -> Result<Self> {
        let data: Vec<Vec<CellValue>> = serde_json::from_str(json)?;
        Ok(Self::new(name, data))
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    fn cell(&self, row: usize, col: usize) -> CellValue {
        self.data
            .get(row - 1)
            .and_then(|r| r.get(col - 1))
            .cloned()
            .unwrap_or_else(|| self.options.fill.clone())
    }
}

impl Grid for MemoryGrid {
    fn name(&self) -> &str {
        &self.name
    }

    fn last_row(&self) -> usize {
        self.data.len()
    }

    fn last_column(&self) -> usize {
        self.data.iter().map(Vec::len).max().unwrap_or(0)
    }

    fn max_rows(&self) -> usize {
        self.max_rows
    }

    fn max_columns(&self) -> usize {
        self.max_columns
    }

    fn read_block(
        &self,
        row: usize,
        col: usize,
        num_rows: usize,
        num_cols: usize,
    ) -> Result<Vec<Vec<CellValue>>> {
        if row < 1 || col < 1 {
            return Err(SheetError::InvalidCoordinate { row, col });
        }
        if !window_fits(row, num_rows, self.max_rows)
            || !window_fits(col, num_cols, self.max_columns)
        {
            return Err(SheetError::OutOfRange {
                row,
                col,
                num_rows,
                num_cols,
                max_row: self.max_rows,
                max_col: self.max_columns,
            });
        }

        Ok((row..row + num_rows)
            .map(|r| (col..col + num_cols).map(|c| self.cell(r, c)).collect())
            .collect())
    }
}
