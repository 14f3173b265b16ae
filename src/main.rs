mod cli;
mod config;
mod inventory;
mod routines;
mod sheets;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use crate::config::app_config::AppConfig;
use crate::inventory::payload::UpdatePayload;
use crate::routines::routine::Routine;
use crate::routines::update_inventory_columns::UpdateInventoryColumnsRoutine;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let config = match AppConfig::load(&cli) {
        Ok(config) => config,
        Err(report) => {
            log::error!("{report:?}");
            return ExitCode::FAILURE;
        }
    };

    let payload = match UpdatePayload::resolve(cli.data.as_deref()).await {
        Ok(payload) => payload,
        Err(report) => {
            log::error!("{report:?}");
            return ExitCode::FAILURE;
        }
    };

    let routine = UpdateInventoryColumnsRoutine::new(config, payload);
    match routine.run().await {
        Ok(()) => {
            log::info!("✅ {}: OK", routine.name());
            ExitCode::SUCCESS
        }
        Err(report) => {
            log::error!("❌ {}: {:?}", routine.name(), report);
            ExitCode::FAILURE
        }
    }
}
