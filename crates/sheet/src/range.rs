use crate::a1_notation::to_a1_notation;
use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared, mutable row-major cell storage.
///
/// A sheet and every range taken from it hold clones of the same handle, so a
/// write through any range is visible through all of them.
pub type SharedRows = Rc<RefCell<Vec<Vec<CellValue>>>>;

/// A bounded, 1-indexed view into a shared cell matrix.
///
/// The anchor (`row`, `col`) is the caller's coordinate of the top-left cell.
/// It is independent of where the window sits inside the backing matrix,
/// which is tracked separately as a 0-based offset.
#[derive(Debug, Clone)]
pub struct VirtualRange {
    rows: SharedRows,
    row_offset: usize,
    col_offset: usize,
    row: usize,
    col: usize,
    num_rows: usize,
    num_cols: usize,
}

impl VirtualRange {
    /// Create a range over an owned matrix whose top-left cell is the
    /// range's top-left cell.
    ///
    /// Only the anchor is validated; the declared extent is trusted.
    pub fn new<T: Into<CellValue>>(
        rows: Vec<Vec<T>>,
        row: usize,
        col: usize,
        num_rows: usize,
        num_cols: usize,
    ) -> Result<Self> {
        let converted: Vec<Vec<CellValue>> = rows
            .into_iter()
            .map(|r| r.into_iter().map(Into::into).collect())
            .collect();
        Self::over(Rc::new(RefCell::new(converted)), row, col, num_rows, num_cols)
    }

    /// Create a range sharing an existing matrix handle, starting at its
    /// first cell.
    pub fn over(
        rows: SharedRows,
        row: usize,
        col: usize,
        num_rows: usize,
        num_cols: usize,
    ) -> Result<Self> {
        Self::window(rows, (0, 0), row, col, num_rows, num_cols)
    }

    pub(crate) fn window(
        rows: SharedRows,
        (row_offset, col_offset): (usize, usize),
        row: usize,
        col: usize,
        num_rows: usize,
        num_cols: usize,
    ) -> Result<Self> {
        if row < 1 || col < 1 {
            return Err(SheetError::InvalidCoordinate { row, col });
        }

        Ok(VirtualRange {
            rows,
            row_offset,
            col_offset,
            row,
            col,
            num_rows,
            num_cols,
        })
    }

    /// The live matrix handle backing this range
    pub fn rows(&self) -> &SharedRows {
        &self.rows
    }

    pub fn get_row(&self) -> usize {
        self.row
    }

    pub fn get_column(&self) -> usize {
        self.col
    }

    pub fn get_num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn get_num_columns(&self) -> usize {
        self.num_cols
    }

    /// 1-based row of the bottom edge
    pub fn get_last_row(&self) -> usize {
        self.row.saturating_add(self.num_rows.saturating_sub(1))
    }

    /// 1-based column of the right edge
    pub fn get_last_column(&self) -> usize {
        self.col.saturating_add(self.num_cols.saturating_sub(1))
    }

    /// A1 notation of the range, e.g. "B2:C3", or "B2" for a single cell
    pub fn get_a1_notation(&self) -> String {
        let start = to_a1_notation(self.row, self.col);
        if self.num_rows <= 1 && self.num_cols <= 1 {
            return start;
        }
        format!(
            "{start}:{}",
            to_a1_notation(self.get_last_row(), self.get_last_column())
        )
    }

    /// Value of the top-left cell
    pub fn get_value(&self) -> CellValue {
        self.rows
            .borrow()
            .get(self.row_offset)
            .and_then(|r| r.get(self.col_offset))
            .cloned()
            .unwrap_or_default()
    }

    /// Owned copy of the `num_rows x num_cols` window.
    ///
    /// Cells the backing matrix does not hold read as `Null`.
    pub fn get_values(&self) -> Vec<Vec<CellValue>> {
        let data = self.rows.borrow();
        (0..self.num_rows)
            .map(|r| {
                let source = data.get(self.row_offset + r);
                (0..self.num_cols)
                    .map(|c| {
                        source
                            .and_then(|row| row.get(self.col_offset + c))
                            .cloned()
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect()
    }

    /// Overwrite the top-left cell only
    pub fn set_value<T: Into<CellValue>>(&self, value: T) {
        let mut data = self.rows.borrow_mut();
        if let Some(cell) = data
            .get_mut(self.row_offset)
            .and_then(|r| r.get_mut(self.col_offset))
        {
            *cell = value.into();
        }
    }

    /// Overwrite the leading cells of the range with `values`.
    ///
    /// Missing trailing rows, and missing trailing cells within a row, keep
    /// their current values. A matrix taller or wider than the range is
    /// rejected before anything is written.
    pub fn set_values<T: Into<CellValue>>(&self, values: Vec<Vec<T>>) -> Result<()> {
        let widest = values.iter().map(Vec::len).max().unwrap_or(0);
        if values.len() > self.num_rows || widest > self.num_cols {
            tracing::debug!(
                range = %self.get_a1_notation(),
                rows = values.len(),
                cols = widest,
                "rejected set_values with oversized matrix"
            );
            return Err(SheetError::ShapeViolation {
                rows: values.len(),
                cols: widest,
                max_rows: self.num_rows,
                max_cols: self.num_cols,
            });
        }

        let mut data = self.rows.borrow_mut();
        for (r, new_row) in values.into_iter().enumerate() {
            let Some(target) = data.get_mut(self.row_offset + r) else {
                break;
            };
            for (c, value) in new_row.into_iter().enumerate() {
                if let Some(cell) = target.get_mut(self.col_offset + c) {
                    *cell = value.into();
                }
            }
        }

        Ok(())
    }
}
