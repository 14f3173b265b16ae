use std::fmt::Formatter;

use super::cell_position::CellPosition;

/// A rendered cell address, e.g. `A6` or `'Sheet1'!A6`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A1Notation(pub String);

impl std::fmt::Display for A1Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for A1Notation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<A1Notation> for String {
    fn from(a1_notation: A1Notation) -> Self {
        a1_notation.0
    }
}

pub trait ToA1Notation {
    fn to_a1_notation(&self, sheet_name: Option<&str>) -> A1Notation;
}

impl ToA1Notation for CellPosition {
    fn to_a1_notation(&self, sheet_name: Option<&str>) -> A1Notation {
        match sheet_name {
            Some(sheet_name) => A1Notation(format!("'{}'!{}{}", sheet_name, self.col, self.row)),
            None => A1Notation(format!("{}{}", self.col, self.row)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::domain::{column::Column, row::Row};

    #[test]
    fn test_cell_position_to_a1_notation() {
        let cell = CellPosition {
            col: Column::new(1),
            row: Row(6),
        };
        assert_eq!(cell.to_a1_notation(None).as_ref(), "A6");
    }

    #[test]
    fn test_cell_position_to_a1_notation_with_sheet_name() {
        let cell = CellPosition {
            col: Column::new(19),
            row: Row(6),
        };
        assert_eq!(cell.to_a1_notation(Some("Survey 2024")).as_ref(), "'Survey 2024'!S6");
    }
}
