use std::fmt::Formatter;

/// 1-based spreadsheet row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row(pub u32);

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Row {
    fn from(value: u32) -> Self {
        Row(value)
    }
}
