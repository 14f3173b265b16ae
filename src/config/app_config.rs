use std::str::FromStr;

use error_stack::{Report, Result};
use strum::EnumString;
use thiserror::Error;

use crate::cli::Cli;
use crate::config::credentials::CredentialSource;
use crate::sheets::config::SpreadsheetConfig;

/// Credential mode. Anything outside this enum is a configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    Dev,
    Prod,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid mode '{0}', expected 'dev' or 'prod'")]
    InvalidMode(String),
    #[error("--service_account_file is required in dev mode")]
    MissingServiceAccountFile,
    #[error("environment variable '{0}' is not set")]
    MissingCredentialVariable(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub spreadsheet: SpreadsheetConfig,
    pub credentials: CredentialSource,
}

impl AppConfig {
    /// Resolves the full configuration up front, including the single
    /// environment read the prod credential path needs.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mode = Mode::from_str(&cli.mode)
            .map_err(|_| Report::new(ConfigError::InvalidMode(cli.mode.clone())))?;

        let credentials = match mode {
            Mode::Dev => {
                let path = cli
                    .service_account_file
                    .clone()
                    .ok_or(ConfigError::MissingServiceAccountFile)?;
                CredentialSource::KeyFile(path)
            }
            Mode::Prod => {
                let blob = std::env::var(&cli.env_var).map_err(|_| {
                    Report::new(ConfigError::MissingCredentialVariable(cli.env_var.clone()))
                })?;
                CredentialSource::KeyJson(blob)
            }
        };

        Ok(AppConfig {
            spreadsheet: SpreadsheetConfig {
                spreadsheet_id: cli.spreadsheet_id.as_str().into(),
                sheet_name: cli.sheet_name.as_str().into(),
            },
            credentials,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(mode: &str, service_account_file: Option<&str>) -> Cli {
        Cli {
            spreadsheet_id: "sheet-id".to_owned(),
            sheet_name: "Sheet1".to_owned(),
            service_account_file: service_account_file.map(Into::into),
            data: None,
            env_var: "TEST_CREDENTIALS_UNSET".to_owned(),
            mode: mode.to_owned(),
        }
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(Mode::from_str("dev").unwrap(), Mode::Dev);
        assert_eq!(Mode::from_str("prod").unwrap(), Mode::Prod);
        assert!(Mode::from_str("staging").is_err());
        assert!(Mode::from_str("").is_err());
    }

    #[test]
    fn test_load_dev_uses_key_file() {
        let config = AppConfig::load(&cli("dev", Some("./key.json"))).unwrap();
        assert!(matches!(config.credentials, CredentialSource::KeyFile(_)));
        assert_eq!(config.spreadsheet.sheet_name.as_ref(), "Sheet1");
    }

    #[test]
    fn test_load_dev_without_key_file_fails() {
        let report = AppConfig::load(&cli("dev", None)).unwrap_err();
        assert!(matches!(
            report.current_context(),
            ConfigError::MissingServiceAccountFile
        ));
    }

    #[test]
    fn test_load_rejects_unknown_mode() {
        let report = AppConfig::load(&cli("staging", Some("./key.json"))).unwrap_err();
        assert!(matches!(
            report.current_context(),
            ConfigError::InvalidMode(mode) if mode == "staging"
        ));
    }

    #[test]
    fn test_load_prod_without_variable_fails() {
        let report = AppConfig::load(&cli("prod", None)).unwrap_err();
        assert!(matches!(
            report.current_context(),
            ConfigError::MissingCredentialVariable(name) if name == "TEST_CREDENTIALS_UNSET"
        ));
    }

    #[test]
    fn test_load_prod_reads_variable() {
        let mut cli = cli("prod", None);
        cli.env_var = "TEST_CREDENTIALS_SET".to_owned();
        std::env::set_var("TEST_CREDENTIALS_SET", "{}");
        let config = AppConfig::load(&cli).unwrap();
        assert!(
            matches!(config.credentials, CredentialSource::KeyJson(blob) if blob == "{}")
        );
    }
}
