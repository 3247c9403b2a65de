//! Configuration loading from the environment.

use std::env;

use thiserror::Error;

use crate::config::schema::AppConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {raw:?}: {source}")]
    InvalidPort {
        raw: String,
        source: std::num::ParseIntError,
    },
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// Recognized variables:
    /// - `PORT`: listener port (default 8080)
    /// - `DATABASE_PATH`: SQLite file path (default "temp.db")
    ///
    /// Unset variables fall back to defaults; a set-but-unparseable
    /// `PORT` is a startup error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// `from_env` passes `env::var`; tests inject their own lookup so
    /// they stay independent of the process environment.
    fn load(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = AppConfig::default();

        if let Some(raw) = lookup("PORT") {
            config.listener.port = raw.parse().map_err(|source| ConfigError::InvalidPort {
                raw: raw.clone(),
                source,
            })?;
        }

        if let Some(path) = lookup("DATABASE_PATH") {
            config.database.path = path;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Lookup over a fixed variable table.
    fn vars<'a>(table: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            table
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = AppConfig::load(|_| None).unwrap();
        assert_eq!(config.listener.port, 8080);
        assert_eq!(config.listener.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.database.path, "temp.db");
    }

    #[test]
    fn test_port_and_database_path_overrides() {
        let config = AppConfig::load(vars(&[
            ("PORT", "9999"),
            ("DATABASE_PATH", "/tmp/people.db"),
        ]))
        .unwrap();
        assert_eq!(config.listener.port, 9999);
        assert_eq!(config.listener.bind_address(), "0.0.0.0:9999");
        assert_eq!(config.database.path, "/tmp/people.db");
    }

    #[test]
    fn test_port_override_alone_keeps_database_default() {
        let config = AppConfig::load(vars(&[("PORT", "3000")])).unwrap();
        assert_eq!(config.listener.port, 3000);
        assert_eq!(config.database.path, "temp.db");
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = AppConfig::load(vars(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("eighty"));
        let ConfigError::InvalidPort { raw, .. } = err;
        assert_eq!(raw, "eighty");
    }

    #[test]
    fn test_from_env_reads_process_environment() {
        // PORT and DATABASE_PATH are not read by any other test in
        // this binary, so touching them here cannot race.
        env::remove_var("PORT");
        env::set_var("DATABASE_PATH", "from-env.db");
        let config = AppConfig::from_env().unwrap();
        env::remove_var("DATABASE_PATH");

        assert_eq!(config.database.path, "from-env.db");
    }
}
