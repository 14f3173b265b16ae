use error_stack::{report, Context, Result, ResultExt};
use google_sheets4::{api::ValueRange, oauth2::ServiceAccountKey, Sheets};

use super::auth;
use super::config::SpreadsheetConfig;
use super::domain::{a1_notation::ToA1Notation, cell_position::CellPosition};
use super::http_client;

pub struct SpreadsheetManager {
    pub config: SpreadsheetConfig,
    hub: Sheets<
        google_sheets4::hyper_rustls::HttpsConnector<google_sheets4::hyper::client::HttpConnector>,
    >,
}

#[derive(Debug)]
pub enum SpreadsheetManagerError {
    FailedToCreateAuthenticator,
    FailedToFetchSpreadsheet,
    SheetNotFound,
    FailedToWriteRange,
}

impl std::fmt::Display for SpreadsheetManagerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Context for SpreadsheetManagerError {}

impl SpreadsheetManager {
    pub async fn connect(
        config: SpreadsheetConfig,
        key: ServiceAccountKey,
    ) -> Result<Self, SpreadsheetManagerError> {
        let client = http_client::http_client();
        let auth = auth::auth(key, client.clone())
            .await
            .change_context(SpreadsheetManagerError::FailedToCreateAuthenticator)?;
        let hub: Sheets<
            google_sheets4::hyper_rustls::HttpsConnector<
                google_sheets4::hyper::client::HttpConnector,
            >,
        > = Sheets::new(client.clone(), auth);

        let manager = SpreadsheetManager { config, hub };
        manager.ensure_sheet().await?;
        Ok(manager)
    }

    /// The configured tab must exist before any write is attempted; a wrong
    /// `sheet_name` fails here instead of on the first cell.
    async fn ensure_sheet(&self) -> Result<(), SpreadsheetManagerError> {
        let response = self
            .hub
            .spreadsheets()
            .get(&self.config.spreadsheet_id)
            .doit()
            .await
            .change_context(SpreadsheetManagerError::FailedToFetchSpreadsheet)?;

        let sheets = response
            .1
            .sheets
            .ok_or(report!(SpreadsheetManagerError::FailedToFetchSpreadsheet))?;

        let known = sheets.iter().any(|sheet| {
            sheet
                .properties
                .as_ref()
                .and_then(|props| props.title.as_deref())
                == Some(self.config.sheet_name.as_ref())
        });

        if known {
            Ok(())
        } else {
            Err(report!(SpreadsheetManagerError::SheetNotFound)
                .attach_printable(format!("no tab named '{}'", self.config.sheet_name)))
        }
    }

    pub async fn write_cell(
        &self,
        cell: CellPosition,
        value_range: ValueRange,
    ) -> Result<(), SpreadsheetManagerError> {
        let range = cell.to_a1_notation(Some(self.config.sheet_name.as_ref()));
        self.write_range(range.as_ref(), value_range).await
    }

    pub async fn write_range(
        &self,
        range: &str,
        value_range: ValueRange,
    ) -> Result<(), SpreadsheetManagerError> {
        self.hub
            .spreadsheets()
            .values_update(value_range, &self.config.spreadsheet_id, range)
            .value_input_option("USER_ENTERED")
            .doit()
            .await
            .map(|_| ())
            .change_context(SpreadsheetManagerError::FailedToWriteRange)
    }
}
