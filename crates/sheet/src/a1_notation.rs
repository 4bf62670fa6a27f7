use crate::error::{Result, SheetError};

/// Parse A1-style cell notation (e.g., "A1", "Z99", "AA1")
/// Returns (row, column) as 1-based coordinates
pub fn parse_a1(notation: &str) -> Result<(usize, usize)> {
    let notation = notation.trim().to_uppercase();

    // Letters first, then digits
    let split_pos = notation
        .bytes()
        .position(|b| b.is_ascii_digit())
        .ok_or_else(|| SheetError::InvalidNotation(notation.clone()))?;

    let (col_part, row_part) = notation.split_at(split_pos);
    if col_part.is_empty() || row_part.is_empty() {
        return Err(SheetError::InvalidNotation(notation));
    }

    let col = parse_column_letters(col_part)
        .ok_or_else(|| SheetError::InvalidNotation(notation.clone()))?;
    let row = row_part
        .parse::<usize>()
        .map_err(|_| SheetError::InvalidNotation(notation.clone()))?;

    if row == 0 {
        return Err(SheetError::InvalidNotation(notation));
    }

    Ok((row, col))
}

/// Parse A1-style range notation (e.g., "A1:C3")
/// Returns ((start_row, start_col), (end_row, end_col)) as 1-based coordinates
pub fn parse_a1_range(notation: &str) -> Result<((usize, usize), (usize, usize))> {
    let Some((start, end)) = notation.split_once(':') else {
        // If no colon, treat as single cell
        let cell = parse_a1(notation)?;
        return Ok((cell, cell));
    };

    let (start_row, start_col) = parse_a1(start)?;
    let (end_row, end_col) = parse_a1(end)?;

    Ok((
        (start_row.min(end_row), start_col.min(end_col)),
        (start_row.max(end_row), start_col.max(end_col)),
    ))
}

/// Convert column letters to a 1-based column index
/// A=1, B=2, ... Z=26, AA=27, ...
fn parse_column_letters(col_str: &str) -> Option<usize> {
    if col_str.is_empty() {
        return None;
    }

    col_str.bytes().try_fold(0usize, |col, b| {
        if b.is_ascii_uppercase() {
            col.checked_mul(26)?.checked_add((b - b'A') as usize + 1)
        } else {
            None
        }
    })
}

/// Convert a 1-based column index to column letters
/// 1=A, 2=B, ... 26=Z, 27=AA, ...
pub fn column_index_to_letters(mut col: usize) -> String {
    let mut result = String::new();

    while col > 0 {
        col -= 1;
        result.insert(0, ((col % 26) as u8 + b'A') as char);
        col /= 26;
    }

    result
}

/// Convert 1-based (row, col) to A1 notation
/// (1, 1) = "A1", (1, 2) = "B1", etc.
pub fn to_a1_notation(row: usize, col: usize) -> String {
    format!("{}{}", column_index_to_letters(col), row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_a1() {
        assert_eq!(parse_a1("A1").unwrap(), (1, 1));
        assert_eq!(parse_a1("B1").unwrap(), (1, 2));
        assert_eq!(parse_a1("A2").unwrap(), (2, 1));
        assert_eq!(parse_a1("Z1").unwrap(), (1, 26));
        assert_eq!(parse_a1("AA1").unwrap(), (1, 27));
        assert_eq!(parse_a1("ZZ1").unwrap(), (1, 702));

        // Case insensitive
        assert_eq!(parse_a1("a1").unwrap(), (1, 1));
        assert_eq!(parse_a1("aA1").unwrap(), (1, 27));
    }

    #[test]
    fn test_parse_a1_errors() {
        assert!(parse_a1("").is_err());
        assert!(parse_a1("A").is_err());
        assert!(parse_a1("1").is_err());
        assert!(parse_a1("A0").is_err()); // Row must be >= 1
        assert!(parse_a1("A1B").is_err());
        assert!(parse_a1("A-1").is_err());
    }

    #[test]
    fn test_parse_a1_range() {
        assert_eq!(parse_a1_range("A1:C3").unwrap(), ((1, 1), (3, 3)));

        // Reversed corners are normalized
        assert_eq!(parse_a1_range("C3:A1").unwrap(), ((1, 1), (3, 3)));

        // Single cell (no colon)
        assert_eq!(parse_a1_range("B2").unwrap(), ((2, 2), (2, 2)));
    }

    #[test]
    fn test_column_index_to_letters() {
        assert_eq!(column_index_to_letters(1), "A");
        assert_eq!(column_index_to_letters(26), "Z");
        assert_eq!(column_index_to_letters(27), "AA");
        assert_eq!(column_index_to_letters(52), "AZ");
        assert_eq!(column_index_to_letters(53), "BA");
        assert_eq!(column_index_to_letters(703), "AAA");
    }

    #[test]
    fn test_to_a1_notation() {
        assert_eq!(to_a1_notation(1, 1), "A1");
        assert_eq!(to_a1_notation(100, 26), "Z100");
        assert_eq!(to_a1_notation(1, 27), "AA1");
    }

    #[test]
    fn test_roundtrip() {
        for row in 1..10 {
            for col in 1..100 {
                let notation = to_a1_notation(row, col);
                assert_eq!(parse_a1(&notation).unwrap(), (row, col));
            }
        }
    }
}
