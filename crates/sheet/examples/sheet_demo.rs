//! Walk through virtual sheet and range operations.
//!
//! Run with: RUST_LOG=debug cargo run --example sheet_demo -p offgrid-sheet

use offgrid_sheet::{CellValue, MemoryGrid, VirtualSheet};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Virtual Sheet Demo ===\n");

    let grid = MemoryGrid::from_data(
        "Inventory",
        vec![
            vec!["Item", "Qty", "Price"],
            vec!["Widget", "4", "2.50"],
            vec!["Gadget", "10", "1.25"],
        ],
    );
    let mut sheet = VirtualSheet::new(&grid)?;
    println!(
        "Sheet '{}' is {}x{}",
        sheet.name(),
        sheet.max_row(),
        sheet.max_col()
    );

    let body = sheet.get_range_a1("A2:C3")?;
    println!("Body {}:", body.get_a1_notation());
    for row in body.get_values() {
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        println!("  {}", cells.join(" | "));
    }

    // Partial update: only the first row's quantity column
    let qty = sheet.get_range(2, 2, 2, 1)?;
    let stock = qty.get_value().as_int().unwrap_or(0);
    qty.set_values(vec![vec![stock + 1]])?;
    let total: f64 = qty
        .get_values()
        .iter()
        .filter_map(|row| row.first().and_then(CellValue::as_float))
        .sum();
    println!("\nAfter restock: {:?} ({total} units total)", sheet.values()[1]);

    match body.set_values(vec![vec!["too", "many", "columns", "here"]]) {
        Ok(()) => println!("Unexpectedly accepted oversized write"),
        Err(e) => println!("Rejected: {e}"),
    }

    match sheet.get_range(1, 1, 10, 10) {
        Ok(_) => println!("Unexpectedly got range"),
        Err(e) => println!("Rejected: {e}"),
    }

    sheet.insert_row_before(2)?;
    println!("\nAfter inserting a row: {} rows", sheet.max_row());
    for row in sheet.values() {
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        println!("  {}", cells.join(" | "));
    }

    Ok(())
}
