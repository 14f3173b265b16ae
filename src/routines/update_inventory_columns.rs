use error_stack::ResultExt;

use crate::config::app_config::AppConfig;
use crate::inventory::payload::UpdatePayload;
use crate::inventory::updater::InventoryUpdater;
use crate::routines::routine::{Routine, RoutineError, RoutineResult};
use crate::sheets::auth;
use crate::sheets::spreadsheet_manager::SpreadsheetManager;

/// Resolves the credential, opens the spreadsheet and applies the payload.
pub struct UpdateInventoryColumnsRoutine {
    config: AppConfig,
    payload: UpdatePayload,
}

impl UpdateInventoryColumnsRoutine {
    pub fn new(config: AppConfig, payload: UpdatePayload) -> Self {
        UpdateInventoryColumnsRoutine { config, payload }
    }
}

#[async_trait::async_trait]
impl Routine for UpdateInventoryColumnsRoutine {
    fn name(&self) -> &'static str {
        "UpdateInventoryColumnsRoutine"
    }

    async fn run(&self) -> RoutineResult {
        let key = auth::service_account_key(&self.config.credentials)
            .await
            .change_context(RoutineError::RoutineFailure(
                "could not resolve the service account credential".to_owned(),
            ))?;

        let manager = SpreadsheetManager::connect(self.config.spreadsheet.clone(), key)
            .await
            .change_context(RoutineError::RoutineFailure(
                "could not open the spreadsheet".to_owned(),
            ))?;

        let updated = InventoryUpdater::new(manager)
            .update_multi(&self.payload)
            .await
            .change_context(RoutineError::RoutineFailure(
                "could not update the survey columns".to_owned(),
            ))?;

        log::info!("{} column(s) updated", updated);
        Ok(())
    }
}
