use crate::a1_notation::parse_a1_range;
use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use crate::grid::{window_fits, Grid};
use crate::range::{SharedRows, VirtualRange};
use std::cell::RefCell;
use std::rc::Rc;

/// A snapshot of a grid, addressed like a spreadsheet (1-based, row-major).
///
/// The snapshot is taken once at construction and never re-read. Ranges
/// returned by [`VirtualSheet::get_range`] share the sheet's storage, so
/// writes through them land in the sheet.
///
/// A sheet caches its extents next to the shared matrix, so it is not
/// `Clone`; a second sheet over the same storage would go stale on insert.
///
/// ```compile_fail
/// use offgrid_sheet::{MemoryGrid, VirtualSheet};
///
/// let sheet = VirtualSheet::new(&MemoryGrid::blank("s", 1, 1)).unwrap();
/// let _copy = sheet.clone();
/// ```
#[derive(Debug)]
pub struct VirtualSheet {
    name: String,
    max_row: usize,
    max_col: usize,
    rows: SharedRows,
}

impl VirtualSheet {
    /// Materialize the full extent of `grid`
    pub fn new<G: Grid + ?Sized>(grid: &G) -> Result<Self> {
        let max_row = grid.max_rows();
        let max_col = grid.max_columns();
        let data = grid.read_block(1, 1, max_row, max_col)?;

        let widest = data.iter().map(Vec::len).max().unwrap_or(0);
        if data.len() != max_row || data.iter().any(|r| r.len() != max_col) {
            return Err(SheetError::ShapeViolation {
                rows: data.len(),
                cols: widest,
                max_rows: max_row,
                max_cols: max_col,
            });
        }

        tracing::debug!(
            sheet = grid.name(),
            max_row,
            max_col,
            last_row = grid.last_row(),
            last_column = grid.last_column(),
            "materialized virtual sheet"
        );

        Ok(VirtualSheet {
            name: grid.name().to_string(),
            max_row,
            max_col,
            rows: Rc::new(RefCell::new(data)),
        })
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_row(&self) -> usize {
        self.max_row
    }

    pub fn max_col(&self) -> usize {
        self.max_col
    }

    /// The live matrix handle; ranges taken from this sheet share it
    pub fn rows(&self) -> &SharedRows {
        &self.rows
    }

    /// Owned copy of every cell
    pub fn values(&self) -> Vec<Vec<CellValue>> {
        self.rows.borrow().clone()
    }

    /// Get a range anchored at the 1-based (`row`, `col`).
    ///
    /// The whole window must fit inside the sheet.
    pub fn get_range(
        &self,
        row: usize,
        col: usize,
        num_rows: usize,
        num_cols: usize,
    ) -> Result<VirtualRange> {
        if row < 1 || col < 1 {
            return Err(SheetError::InvalidCoordinate { row, col });
        }
        if num_rows < 1
            || num_cols < 1
            || !window_fits(row, num_rows, self.max_row)
            || !window_fits(col, num_cols, self.max_col)
        {
            tracing::debug!(
                sheet = %self.name,
                row,
                col,
                num_rows,
                num_cols,
                "range request outside sheet extent"
            );
            return Err(SheetError::OutOfRange {
                row,
                col,
                num_rows,
                num_cols,
                max_row: self.max_row,
                max_col: self.max_col,
            });
        }

        VirtualRange::window(
            Rc::clone(&self.rows),
            (row - 1, col - 1),
            row,
            col,
            num_rows,
            num_cols,
        )
    }

    /// Get a range from A1 notation, e.g. "B2:C3" or "A1"
    pub fn get_range_a1(&self, notation: &str) -> Result<VirtualRange> {
        let ((start_row, start_col), (end_row, end_col)) = parse_a1_range(notation)?;
        self.get_range(
            start_row,
            start_col,
            end_row - start_row + 1,
            end_col - start_col + 1,
        )
    }

    /// Single-cell range at the 1-based (`row`, `col`)
    pub fn get_cell(&self, row: usize, col: usize) -> Result<VirtualRange> {
        self.get_range(row, col, 1, 1)
    }

    /// Insert a blank row before the 1-based `row`
    pub fn insert_row_before(&mut self, row: usize) -> Result<()> {
        self.check_position(row, 1)?;

        self.rows
            .borrow_mut()
            .insert(row - 1, vec![CellValue::Null; self.max_col]);
        self.max_row += 1;

        tracing::debug!(sheet = %self.name, row, max_row = self.max_row, "inserted row");
        Ok(())
    }

    /// Insert a blank column before the 1-based `col`
    pub fn insert_column_before(&mut self, col: usize) -> Result<()> {
        self.check_position(1, col)?;

        for cells in self.rows.borrow_mut().iter_mut() {
            cells.insert(col - 1, CellValue::Null);
        }
        self.max_col += 1;

        tracing::debug!(sheet = %self.name, col, max_col = self.max_col, "inserted column");
        Ok(())
    }

    fn check_position(&self, row: usize, col: usize) -> Result<()> {
        if row < 1 || col < 1 {
            return Err(SheetError::InvalidCoordinate { row, col });
        }
        if row > self.max_row || col > self.max_col {
            return Err(SheetError::OutOfRange {
                row,
                col,
                num_rows: 1,
                num_cols: 1,
                max_row: self.max_row,
                max_col: self.max_col,
            });
        }
        Ok(())
    }
}
