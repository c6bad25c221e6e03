// Agency configuration options

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgencyConfig {
    /// Sender address of confirmation mails
    pub sender_address: String,
    /// Days before departure by which participants must pay
    pub payment_notice_days: u32,
    /// Keep notifying the remaining observers when one of them fails
    pub isolate_observer_failures: bool,
}

impl Default for AgencyConfig {
    fn default() -> Self {
        Self {
            sender_address: "tours@agency.example".to_string(),
            payment_notice_days: 30,
            isolate_observer_failures: true,
        }
    }
}

impl AgencyConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AgencyConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.sender_address.contains('@') {
            return Err(ConfigError::InvalidValue {
                field: "sender_address",
                reason: format!("'{}' is not a mail address", self.sender_address),
            });
        }
        Ok(())
    }
}

pub const SAMPLE_CONFIG_PATH: &str = "samples/agency_config.json";
