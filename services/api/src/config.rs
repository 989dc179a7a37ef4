use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    pub swagger_ui: bool,
    pub openapi_output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 3000)),
            log_level: Level::INFO,
            swagger_ui: true,
            openapi_output: PathBuf::from("openapi.json"),
        }
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        other => Err(ConfigError::InvalidValue(
            name.to_string(),
            format!("'{}' is not a boolean flag", other),
        )),
    }
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let bind_address_str =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let bind_address = bind_address_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string()))?;

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let swagger_ui = match std::env::var("SWAGGER_UI") {
            Ok(value) => parse_flag("SWAGGER_UI", &value)?,
            Err(_) => true,
        };

        let openapi_output = std::env::var("OPENAPI_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("openapi.json"));

        Ok(Self {
            bind_address,
            log_level,
            swagger_ui,
            openapi_output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use tracing::Level;

    fn clear_env_vars() {
        unsafe {
            env::remove_var("BIND_ADDRESS");
            env::remove_var("RUST_LOG");
            env::remove_var("SWAGGER_UI");
            env::remove_var("OPENAPI_OUTPUT");
        }
    }

    #[test]
    fn test_config_error_display() {
        let invalid_value =
            ConfigError::InvalidValue("TEST_VAR".to_string(), "bad_value".to_string());
        assert_eq!(
            format!("{}", invalid_value),
            "Invalid value for environment variable TEST_VAR: bad_value"
        );
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        clear_env_vars();

        let config = Config::from_env().expect("Config should load successfully");

        assert_eq!(config.bind_address.to_string(), "0.0.0.0:3000");
        assert_eq!(config.log_level, Level::INFO);
        assert!(config.swagger_ui);
        assert_eq!(config.openapi_output, PathBuf::from("openapi.json"));

        let default = Config::default();
        assert_eq!(config.bind_address, default.bind_address);
        assert_eq!(config.openapi_output, default.openapi_output);
    }

    #[test]
    #[serial]
    fn test_config_from_env_custom_values() {
        clear_env_vars();
        unsafe {
            env::set_var("BIND_ADDRESS", "127.0.0.1:8080");
            env::set_var("RUST_LOG", "debug");
            env::set_var("SWAGGER_UI", "off");
            env::set_var("OPENAPI_OUTPUT", "/tmp/api.json");
        }

        let config = Config::from_env().expect("Config should load successfully");

        assert_eq!(config.bind_address.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, Level::DEBUG);
        assert!(!config.swagger_ui);
        assert_eq!(config.openapi_output, PathBuf::from("/tmp/api.json"));

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_config_invalid_bind_address() {
        clear_env_vars();
        unsafe {
            env::set_var("BIND_ADDRESS", "not-a-valid-address");
        }

        let err = Config::from_env().unwrap_err();
        let ConfigError::InvalidValue(var, _) = err;
        assert_eq!(var, "BIND_ADDRESS");

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_config_invalid_log_level() {
        clear_env_vars();
        unsafe {
            env::set_var("RUST_LOG", "not-a-level");
        }

        let err = Config::from_env().unwrap_err();
        let ConfigError::InvalidValue(var, _) = err;
        assert_eq!(var, "RUST_LOG");

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_config_invalid_swagger_flag() {
        clear_env_vars();
        unsafe {
            env::set_var("SWAGGER_UI", "maybe");
        }

        let err = Config::from_env().unwrap_err();
        let ConfigError::InvalidValue(var, msg) = err;
        assert_eq!(var, "SWAGGER_UI");
        assert!(msg.contains("maybe"));

        clear_env_vars();
    }

    #[test]
    fn test_parse_flag_accepts_common_spellings() {
        for value in ["1", "true", "ON", " yes "] {
            assert!(parse_flag("X", value).unwrap());
        }
        for value in ["0", "False", "off", "no"] {
            assert!(!parse_flag("X", value).unwrap());
        }
    }
}
