use error_stack::{Result, ResultExt};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tokio::io::AsyncReadExt;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("update payload must be a JSON object keyed by column label")]
    Malformed,
    #[error("could not read update payload from stdin")]
    StdinUnreadable,
}

/// Column/value pairs to apply, in the order they appeared in the source
/// JSON document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct UpdatePayload(Map<String, Value>);

impl UpdatePayload {
    /// Takes `--data` when present, otherwise consumes stdin to EOF.
    pub async fn resolve(data: Option<&str>) -> Result<Self, PayloadError> {
        match data {
            Some(raw) => Self::parse(raw),
            None => {
                let mut raw = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut raw)
                    .await
                    .change_context(PayloadError::StdinUnreadable)?;
                Self::parse(&raw)
            }
        }
    }

    /// Empty or whitespace-only input is an empty payload, not an error.
    pub fn parse(raw: &str) -> Result<Self, PayloadError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).change_context(PayloadError::Malformed)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(label, value)| (label.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
