/// The one spreadsheet document and worksheet tab this process writes to.
#[derive(Debug, Clone)]
pub struct SpreadsheetConfig {
    pub spreadsheet_id: Box<str>,
    pub sheet_name: Box<str>,
}
