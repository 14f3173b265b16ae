use std::path::PathBuf;

use clap::Parser;

/// Updates service columns of the infrastructure survey spreadsheet.
///
/// The update payload is a JSON object keyed by column label, taken from
/// `--data` or, when absent, from standard input.
#[derive(Debug, Parser)]
#[command(name = "inventory-sheet", version, about)]
pub struct Cli {
    /// Id of the spreadsheet document to update.
    #[arg(long = "spreadsheet_id")]
    pub spreadsheet_id: String,

    /// Title of the worksheet tab holding the survey row.
    #[arg(long = "sheet_name")]
    pub sheet_name: String,

    /// Path to the service account key file (required in dev mode).
    #[arg(long = "service_account_file")]
    pub service_account_file: Option<PathBuf>,

    /// Update payload as a JSON object of column/value pairs.
    #[arg(long = "data")]
    pub data: Option<String>,

    /// Environment variable holding the service account key JSON (prod mode).
    #[arg(long = "env_var", default_value = "GOOGLE_SHEET_CREDENTIALS")]
    pub env_var: String,

    /// Credential mode: "dev" reads a key file, "prod" reads an environment
    /// variable.
    #[arg(long = "mode", env = "MODE", default_value = "dev")]
    pub mode: String,
}
