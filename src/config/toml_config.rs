use crate::config::ServiceConfig;
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::{validate_path, validate_socket_addr, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerConfig>,
    pub data: Option<DataConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_address: Option<String>,
    pub graphiql: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    pub meters_file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ServiceError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${METERS_FILE})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(addr) = self.server.as_ref().and_then(|s| s.bind_address.as_deref()) {
            validate_socket_addr("server.bind_address", addr)?;
        }

        if let Some(path) = self.data.as_ref().and_then(|d| d.meters_file.as_deref()) {
            validate_path("data.meters_file", path)?;
        }

        Ok(())
    }

    /// Overlays the values present in this file onto `config`.
    pub fn apply_to(&self, config: &mut ServiceConfig) -> Result<()> {
        if let Some(server) = &self.server {
            if let Some(addr) = &server.bind_address {
                config.bind_address = validate_socket_addr("server.bind_address", addr)?;
            }
            if let Some(graphiql) = server.graphiql {
                config.graphiql = graphiql;
            }
        }

        if let Some(meters_file) = self.data.as_ref().and_then(|d| d.meters_file.clone()) {
            config.meters_file = meters_file;
        }

        if let Some(logging) = &self.logging {
            if logging.level.is_some() {
                config.log_level = logging.level.clone();
            }
            if let Some(json) = logging.json {
                config.json_logs = json;
            }
        }

        Ok(())
    }

    pub fn to_service_config(&self) -> Result<ServiceConfig> {
        let mut config = ServiceConfig::default();
        self.apply_to(&mut config)?;
        Ok(config)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
