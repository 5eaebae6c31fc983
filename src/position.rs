//! Display geometry and cursor addressing
//!
//! Rows and columns are 1-based, as printed on most 2x16 module datasheets.
//! Each row maps to a fixed DDRAM base address; the cell address is that base
//! plus `column - 1`.
//!
//! ## Example
//!
//! ```
//! use serlcd::command::ROW_OFFSETS;
//! use serlcd::position::{Position, print_span};
//!
//! let pos = Position::new(2, 7);
//! assert_eq!(pos.map(|p| p.ddram_address(&ROW_OFFSETS)), Some(0x46));
//!
//! // Five characters starting at column 15 are clipped to two
//! assert_eq!(print_span(15, 5), 2);
//! ```

/// Number of character rows
pub const ROWS: u8 = 2;

/// Number of character columns per row
pub const COLUMNS: u8 = 16;

/// A validated character cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    row: u8,
    column: u8,
}

impl Position {
    /// Validate a 1-based `(row, column)` pair
    ///
    /// Returns `None` unless `1 <= row <= ROWS` and `1 <= column <= COLUMNS`.
    pub const fn new(row: u8, column: u8) -> Option<Self> {
        if is_valid_row(row) && column >= 1 && column <= COLUMNS {
            Some(Self { row, column })
        } else {
            None
        }
    }

    /// Like [`Position::new`] for a column computed with wider arithmetic
    pub(crate) fn from_wide(row: u8, column: usize) -> Option<Self> {
        u8::try_from(column)
            .ok()
            .and_then(|column| Self::new(row, column))
    }

    /// Row, 1-based
    pub const fn row(&self) -> u8 {
        self.row
    }

    /// Column, 1-based
    pub const fn column(&self) -> u8 {
        self.column
    }

    /// DDRAM address of this cell given per-row base addresses
    pub const fn ddram_address(&self, row_offsets: &[u8; 2]) -> u8 {
        row_offsets[(self.row - 1) as usize].wrapping_add(self.column - 1)
    }
}

/// Whether `row` addresses a physical row
pub const fn is_valid_row(row: u8) -> bool {
    row >= 1 && row <= ROWS
}

/// Number of elements a print starting at `column` may write
///
/// `min(COLUMNS + 1 - column, len)`: text never runs past the last column,
/// and a start column beyond the row yields zero.
pub fn print_span(column: u8, len: usize) -> usize {
    let room = usize::from(COLUMNS + 1).saturating_sub(usize::from(column));
    room.min(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ROW_OFFSETS;

    #[test]
    fn test_every_valid_cell_addresses_correctly() {
        for row in 1..=ROWS {
            for column in 1..=COLUMNS {
                let pos = Position::new(row, column).unwrap();
                let base = if row == 2 { 0x40 } else { 0x00 };
                assert_eq!(pos.ddram_address(&ROW_OFFSETS), (column - 1) + base);
            }
        }
    }

    #[test]
    fn test_invalid_rows_rejected() {
        assert_eq!(Position::new(0, 1), None);
        assert_eq!(Position::new(3, 1), None);
        assert_eq!(Position::new(255, 1), None);
    }

    #[test]
    fn test_invalid_columns_rejected() {
        assert_eq!(Position::new(1, 0), None);
        assert_eq!(Position::new(1, 17), None);
        assert_eq!(Position::new(2, 200), None);
    }

    #[test]
    fn test_from_wide_rejects_overflowing_columns() {
        assert_eq!(Position::from_wide(1, 16).map(|p| p.column()), Some(16));
        assert_eq!(Position::from_wide(1, 256 + 1), None);
    }

    #[test]
    fn test_print_span_clips_to_row_end() {
        assert_eq!(print_span(15, 5), 2);
        assert_eq!(print_span(1, 16), 16);
        assert_eq!(print_span(1, 20), 16);
        assert_eq!(print_span(16, 3), 1);
    }

    #[test]
    fn test_print_span_short_text() {
        assert_eq!(print_span(3, 4), 4);
        assert_eq!(print_span(3, 0), 0);
    }

    #[test]
    fn test_print_span_past_last_column_is_zero() {
        assert_eq!(print_span(17, 5), 0);
        assert_eq!(print_span(255, 5), 0);
    }

    #[test]
    fn test_print_span_column_zero() {
        // Column 0 is invalid but still bounds the loop at 17 elements
        assert_eq!(print_span(0, 30), 17);
    }
}
