//! Configuration management for lead intake.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honored if present.

use crate::error::{ConfigError, ConfigResult};
use crate::lead::{StepRules, DEFAULT_MIN_DESCRIPTION_CHARS, DEFAULT_ORIGIN};
use std::env;

/// Configuration for lead intake.
#[derive(Debug, Clone)]
pub struct Config {
    /// Minimum case description length in characters (default: 20)
    pub min_description_chars: usize,

    /// Origin tag attached to submissions (default: "web-landing")
    pub lead_origin: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LEAD_MIN_DESCRIPTION_CHARS`: Minimum case description length (default: 20)
    /// - `LEAD_ORIGIN`: Origin tag for submissions (default: "web-landing")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let min_description_chars =
            Self::parse_env_usize("LEAD_MIN_DESCRIPTION_CHARS", DEFAULT_MIN_DESCRIPTION_CHARS)?;
        if min_description_chars == 0 {
            return Err(ConfigError::InvalidValue {
                var: "LEAD_MIN_DESCRIPTION_CHARS".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let lead_origin = env::var("LEAD_ORIGIN").unwrap_or_else(|_| DEFAULT_ORIGIN.to_string());
        if lead_origin.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LEAD_ORIGIN".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            min_description_chars,
            lead_origin,
            log_level,
        })
    }

    /// Step rules derived from this configuration.
    pub fn step_rules(&self) -> StepRules {
        StepRules {
            min_description_chars: self.min_description_chars,
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            min_description_chars: DEFAULT_MIN_DESCRIPTION_CHARS,
            lead_origin: DEFAULT_ORIGIN.to_string(),
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.min_description_chars, 20);
        assert_eq!(config.lead_origin, "web-landing");
        assert_eq!(config.step_rules(), StepRules::default());
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("LEAD_MIN_DESCRIPTION_CHARS", "50");
        guard.set("LEAD_ORIGIN", "google-ads");

        let config = Config::from_env().unwrap();
        assert_eq!(config.min_description_chars, 50);
        assert_eq!(config.lead_origin, "google-ads");
        assert_eq!(config.step_rules().min_description_chars, 50);
    }

    #[test]
    #[serial]
    fn test_config_rejects_zero_description_length() {
        let mut guard = EnvGuard::new();
        guard.set("LEAD_MIN_DESCRIPTION_CHARS", "0");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "LEAD_MIN_DESCRIPTION_CHARS");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_rejects_blank_origin() {
        let mut guard = EnvGuard::new();
        guard.set("LEAD_ORIGIN", "  ");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "LEAD_ORIGIN");
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_usize() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_USIZE", "42");

        assert_eq!(Config::parse_env_usize("TEST_USIZE", 10).unwrap(), 42);
        assert_eq!(Config::parse_env_usize("NONEXISTENT_USIZE", 10).unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_usize_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_USIZE_INVALID", "not-a-number");

        assert!(Config::parse_env_usize("TEST_USIZE_INVALID", 10).is_err());
    }
}
