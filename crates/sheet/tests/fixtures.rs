use offgrid_sheet::{CellValue, Grid, MemoryGrid, SheetError, VirtualSheet};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_sheet_from_json_fixture() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("orders.json");
    fs::write(
        &path,
        r#"[["Order", "Qty", "Paid"], ["A-1", 3, true], ["A-2", 1.5, null]]"#,
    )
    .unwrap();

    let json = fs::read_to_string(&path).unwrap();
    let grid = MemoryGrid::from_json("orders", &json).unwrap();
    assert_eq!(grid.last_row(), 3);
    assert_eq!(grid.last_column(), 3);

    let sheet = VirtualSheet::new(&grid).unwrap();
    let body = sheet.get_range_a1("A2:C3").unwrap();
    assert_eq!(
        body.get_values(),
        vec![
            vec![
                CellValue::from("A-1"),
                CellValue::Int(3),
                CellValue::Bool(true)
            ],
            vec![CellValue::from("A-2"), CellValue::Float(1.5), CellValue::Null],
        ]
    );
}

#[test]
fn test_invalid_json_fixture() {
    let result = MemoryGrid::from_json("bad", "[[1, 2]");
    assert!(matches!(result, Err(SheetError::Json(_))));
}
