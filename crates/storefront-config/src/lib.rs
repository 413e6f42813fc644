//! Connection settings for the platform database, read from `DB_*`
//! environment variables.

use std::str::FromStr;
use std::time::Duration;

use storefront_common::{Error, Result};

const DEFAULT_PORT: u16 = 5432;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub user: String,
    pub password: String,
    pub ssl_mode: SslMode,
    pub connect_timeout: Duration,
}

/// TLS negotiation mode for the database connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SslMode {
    /// Never negotiate TLS.
    Disable,
    /// Use TLS when the server supports it.
    #[default]
    Prefer,
    /// Fail unless TLS is negotiated.
    Require,
}

impl FromStr for SslMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "disable" => Ok(SslMode::Disable),
            "prefer" => Ok(SslMode::Prefer),
            "require" => Ok(SslMode::Require),
            other => Err(Error::Config(format!(
                "unsupported ssl mode {other}, expected disable, prefer or require"
            ))),
        }
    }
}

impl DatabaseConfig {
    /// Reads settings from the process environment. `DB_HOST`, `DB_NAME`,
    /// `DB_USER` and `DB_PASSWORD` are required; `DB_PORT`, `DB_SSLMODE` and
    /// `DB_CONNECT_TIMEOUT_SECS` fall back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    fn from_source(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // Empty values count as unset.
        let lookup = |key: &str| get(key).filter(|value| !value.is_empty());
        let required = |key: &str| {
            lookup(key).ok_or_else(|| Error::Config(format!("{key} is not set")))
        };

        let host = required("DB_HOST")?;
        let dbname = required("DB_NAME")?;
        let user = required("DB_USER")?;
        let password = required("DB_PASSWORD")?;

        let port = match lookup("DB_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                Error::Config(format!("DB_PORT is not a valid port number: {raw}"))
            })?,
            None => DEFAULT_PORT,
        };

        let ssl_mode = match lookup("DB_SSLMODE") {
            Some(raw) => raw.parse()?,
            None => SslMode::default(),
        };

        let connect_timeout = match lookup("DB_CONNECT_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|_| {
                    Error::Config(format!("DB_CONNECT_TIMEOUT_SECS is not a number: {raw}"))
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self {
            host,
            port,
            dbname,
            user,
            password,
            ssl_mode,
            connect_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    const BASE: &[(&str, &str)] = &[
        ("DB_HOST", "db.internal"),
        ("DB_NAME", "storefront"),
        ("DB_USER", "migrator"),
        ("DB_PASSWORD", "hunter2"),
    ];

    #[test]
    fn reads_full_environment() {
        let pairs = [
            BASE,
            &[
                ("DB_PORT", "6432"),
                ("DB_SSLMODE", "require"),
                ("DB_CONNECT_TIMEOUT_SECS", "3"),
            ],
        ]
        .concat();
        let cfg = DatabaseConfig::from_source(source(&pairs)).unwrap();
        assert_eq!(cfg.host, "db.internal");
        assert_eq!(cfg.port, 6432);
        assert_eq!(cfg.dbname, "storefront");
        assert_eq!(cfg.user, "migrator");
        assert_eq!(cfg.password, "hunter2");
        assert_eq!(cfg.ssl_mode, SslMode::Require);
        assert_eq!(cfg.connect_timeout, Duration::from_secs(3));
    }

    #[test]
    fn optional_variables_fall_back_to_defaults() {
        let cfg = DatabaseConfig::from_source(source(BASE)).unwrap();
        assert_eq!(cfg.port, 5432);
        assert_eq!(cfg.ssl_mode, SslMode::Prefer);
        assert_eq!(cfg.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn missing_required_variable_is_a_config_error() {
        let pairs: Vec<(&str, &str)> = BASE
            .iter()
            .copied()
            .filter(|(k, _)| *k != "DB_PASSWORD")
            .collect();
        let err = DatabaseConfig::from_source(source(&pairs)).unwrap_err();
        assert!(err.to_string().contains("DB_PASSWORD"));
    }

    #[test]
    fn empty_value_counts_as_unset() {
        let pairs = [BASE, &[("DB_PORT", "")]].concat();
        let cfg = DatabaseConfig::from_source(source(&pairs)).unwrap();
        assert_eq!(cfg.port, 5432);

        let pairs = [
            &[("DB_HOST", "")][..],
            &BASE[1..],
        ]
        .concat();
        let err = DatabaseConfig::from_source(source(&pairs)).unwrap_err();
        assert!(err.to_string().contains("DB_HOST"));
    }

    #[test]
    fn rejects_malformed_port() {
        let pairs = [BASE, &[("DB_PORT", "not-a-port")]].concat();
        let err = DatabaseConfig::from_source(source(&pairs)).unwrap_err();
        assert!(err.to_string().contains("DB_PORT"));
    }

    #[test]
    fn ssl_mode_parsing_is_case_insensitive() {
        assert_eq!("DISABLE".parse::<SslMode>().unwrap(), SslMode::Disable);
        assert_eq!("Prefer".parse::<SslMode>().unwrap(), SslMode::Prefer);
        assert!("verify-full".parse::<SslMode>().is_err());
    }
}
