use std::str::FromStr;

use error_stack::{Report, Result, ResultExt};
use google_sheets4::api::ValueRange;
use serde_json::Value;
use thiserror::Error;

use crate::inventory::columns::ServiceColumn;
use crate::inventory::payload::UpdatePayload;
use crate::sheets::domain::a1_notation::ToA1Notation;
use crate::sheets::spreadsheet_manager::SpreadsheetManager;
use crate::sheets::value_range_factory::ValueRangeFactory;

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("column '{0}' is not part of the survey row")]
    UnknownColumn(String),
    #[error("failed to write column '{0}'")]
    WriteFailed(ServiceColumn),
}

/// Applies label/value updates to the survey row through the held manager.
pub struct InventoryUpdater {
    manager: SpreadsheetManager,
}

impl InventoryUpdater {
    pub fn new(manager: SpreadsheetManager) -> Self {
        InventoryUpdater { manager }
    }

    /// Pure label lookup, so unknown labels fail before any write.
    pub fn resolve_column(label: &str) -> Result<ServiceColumn, UpdateError> {
        ServiceColumn::from_str(label)
            .map_err(|_| Report::new(UpdateError::UnknownColumn(label.to_owned())))
    }

    pub async fn update_column(&self, label: &str, value: &Value) -> Result<(), UpdateError> {
        let column = Self::resolve_column(label)?;
        let cell = column.cell();
        self.manager
            .write_cell(cell, ValueRange::from_value(value.clone()))
            .await
            .change_context(UpdateError::WriteFailed(column))?;
        println!(
            "✅ Updated {} ({}) with value: {}",
            column,
            cell.to_a1_notation(None),
            display_value(value)
        );
        Ok(())
    }

    /// Applies entries in payload order; the first failure aborts the rest.
    /// Cells already written stay written.
    pub async fn update_multi(&self, payload: &UpdatePayload) -> Result<usize, UpdateError> {
        for (label, value) in payload.entries() {
            self.update_column(label, value).await?;
        }
        Ok(payload.len())
    }
}

/// Strings print bare; other scalars keep their JSON rendering.
fn display_value(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_owned(),
        None => value.to_string(),
    }
}
