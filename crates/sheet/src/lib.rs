//! Virtual sheets and ranges for offline spreadsheet logic
//!
//! Mimics a spreadsheet's sheet/range addressing model over an in-memory
//! snapshot, so code that manipulates sheets can run deterministically without
//! a live backend. Coordinates are 1-based, as in a spreadsheet.
//!
//! # Examples
//!
//! ## Reading and writing through a range
//!
//! ```
//! use offgrid_sheet::{CellValue, MemoryGrid, VirtualSheet};
//!
//! let grid = MemoryGrid::from_data("Data", vec![
//!     vec!["Name", "Age"],
//!     vec!["Alice", "30"],
//! ]);
//! let sheet = VirtualSheet::new(&grid).unwrap();
//!
//! let range = sheet.get_range(2, 1, 1, 2).unwrap();
//! assert_eq!(range.get_value(), CellValue::from("Alice"));
//!
//! range.set_values(vec![vec!["Bob", "25"]]).unwrap();
//! assert_eq!(sheet.values()[1][0], CellValue::from("Bob"));
//! ```
//!
//! ## A1 notation
//!
//! ```
//! use offgrid_sheet::{MemoryGrid, VirtualSheet};
//!
//! let sheet = VirtualSheet::new(&MemoryGrid::blank("Sheet1", 3, 3)).unwrap();
//! let range = sheet.get_range_a1("B2:C3").unwrap();
//!
//! assert_eq!((range.get_row(), range.get_column()), (2, 2));
//! assert_eq!(range.get_a1_notation(), "B2:C3");
//! assert!(sheet.get_range_a1("A1:D4").is_err());
//! ```
//!
//! # Sharing
//!
//! A sheet and its ranges share one `Rc<RefCell<..>>` matrix. The types are
//! neither `Send` nor `Sync`; callers needing concurrency must serialize
//! access per sheet.

mod a1_notation;
mod cell;
mod error;
mod grid;
mod range;
mod sheet;

/// Re-export A1 helpers.
pub use a1_notation::{column_index_to_letters, parse_a1, parse_a1_range, to_a1_notation};
/// Re-export cell value type.
pub use cell::CellValue;
/// Re-export sheet error types.
pub use error::{Result, SheetError};
/// Re-export grid sources and options.
pub use grid::{Grid, GridOptions, MemoryGrid};
/// Re-export range types.
pub use range::{SharedRows, VirtualRange};
/// Re-export sheet type.
pub use sheet::VirtualSheet;
