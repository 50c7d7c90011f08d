use crate::{ConfigError, FromEnv};
use std::env;

/// Origins the web front-end is served from during local development.
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";

/// Cross-origin configuration for browser clients
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Parses a comma-separated origin list. Whitespace is trimmed and empty
    /// entries are dropped.
    pub fn parse(origins: &str) -> Result<Self, ConfigError> {
        let allowed_origins: Vec<String> = origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if allowed_origins.is_empty() {
            return Err(ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: "at least one origin is required".to_string(),
            });
        }

        Ok(Self { allowed_origins })
    }
}

impl FromEnv for CorsConfig {
    /// Reads `CORS_ALLOWED_ORIGIN`, falling back to [`DEFAULT_ALLOWED_ORIGINS`]
    /// when it is unset.
    fn from_env() -> Result<Self, ConfigError> {
        match env::var("CORS_ALLOWED_ORIGIN") {
            Ok(value) => Self::parse(&value),
            Err(_) => Self::parse(DEFAULT_ALLOWED_ORIGINS),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .split(',')
                .map(str::to_string)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_defaults_when_unset() {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            let config = CorsConfig::from_env().unwrap();
            assert_eq!(
                config.allowed_origins,
                vec!["http://localhost:5173", "http://127.0.0.1:5173"]
            );
            assert_eq!(config, CorsConfig::default());
        });
    }

    #[test]
    fn test_cors_parses_and_trims() {
        temp_env::with_var(
            "CORS_ALLOWED_ORIGIN",
            Some(" https://app.example.com , ,http://localhost:3000"),
            || {
                let config = CorsConfig::from_env().unwrap();
                assert_eq!(
                    config.allowed_origins,
                    vec!["https://app.example.com", "http://localhost:3000"]
                );
            },
        );
    }

    #[test]
    fn test_cors_rejects_empty_list() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some(" , "), || {
            let err = CorsConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("CORS_ALLOWED_ORIGIN"));
        });
    }
}
