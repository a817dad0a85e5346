#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_METERS_FILE: &str = "./meters.json";

/// Fully resolved settings for running the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_address: SocketAddr,
    pub meters_file: String,
    pub graphiql: bool,
    pub log_level: Option<String>,
    pub json_logs: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            meters_file: DEFAULT_METERS_FILE.to_string(),
            graphiql: true,
            log_level: None,
            json_logs: false,
        }
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data.meters_file", &self.meters_file)?;
        if let Some(level) = &self.log_level {
            validate_non_empty_string("logging.level", level)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.bind_address.to_string(), "127.0.0.1:8080");
        assert_eq!(config.meters_file, "./meters.json");
        assert!(config.graphiql);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_blank_values() {
        let config = ServiceConfig {
            meters_file: String::new(),
            ..ServiceConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ServiceConfig {
            log_level: Some(" ".to_string()),
            ..ServiceConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
