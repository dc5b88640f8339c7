//! # Configuration
//!
//! Connection settings are read from the environment, falling back to
//! development defaults. Nothing is compiled in except those defaults.
//!
//! ## Environment Variables
//! | Variable                 | Default            |
//! |--------------------------|--------------------|
//! | `STOCKROOM_DB_HOST`      | `localhost`        |
//! | `STOCKROOM_DB_PORT`      | `3306`             |
//! | `STOCKROOM_DB_USER`      | `root`             |
//! | `STOCKROOM_DB_PASSWORD`  | (empty)            |
//! | `STOCKROOM_DB_NAME`      | `inventory_system` |
//! | `STOCKROOM_DATABASE_URL` | (unset)            |
//!
//! `STOCKROOM_DATABASE_URL` replaces the individual settings, e.g.
//! `sqlite://inventory.db` for a local file.

use stockroom_db::DbConfig;

pub const ENV_HOST: &str = "STOCKROOM_DB_HOST";
pub const ENV_PORT: &str = "STOCKROOM_DB_PORT";
pub const ENV_USER: &str = "STOCKROOM_DB_USER";
pub const ENV_PASSWORD: &str = "STOCKROOM_DB_PASSWORD";
pub const ENV_NAME: &str = "STOCKROOM_DB_NAME";
pub const ENV_DATABASE_URL: &str = "STOCKROOM_DATABASE_URL";

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue { name: String, value: String },
}

/// Loads the database configuration from the process environment.
pub fn load() -> Result<DbConfig, ConfigError> {
    from_lookup(|name| std::env::var(name).ok())
}

/// Builds the configuration from any variable source.
///
/// Empty values count as unset.
pub fn from_lookup<F>(lookup: F) -> Result<DbConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| lookup(name).filter(|value| !value.is_empty());

    let host = var(ENV_HOST).unwrap_or_else(|| "localhost".to_string());
    let database = var(ENV_NAME).unwrap_or_else(|| "inventory_system".to_string());

    let mut config = DbConfig::new(host, database);

    if let Some(port) = var(ENV_PORT) {
        let parsed = port.parse().map_err(|_| ConfigError::InvalidValue {
            name: ENV_PORT.to_string(),
            value: port.clone(),
        })?;
        config = config.port(parsed);
    }

    if let Some(user) = var(ENV_USER) {
        config = config.user(user);
    }

    if let Some(password) = var(ENV_PASSWORD) {
        config = config.password(password);
    }

    if let Some(url) = var(ENV_DATABASE_URL) {
        config = config.database_url(url);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 3306);
        assert_eq!(config.user, "root");
        assert_eq!(config.password, "");
        assert_eq!(config.database, "inventory_system");
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = from_lookup(lookup(&[
            (ENV_HOST, "db.internal"),
            (ENV_PORT, "3307"),
            (ENV_USER, "clerk"),
            (ENV_PASSWORD, "pw"),
            (ENV_NAME, "stock"),
        ]))
        .unwrap();

        assert_eq!(
            config.connect_url().unwrap(),
            "mysql://clerk:pw@db.internal:3307/stock"
        );
    }

    #[test]
    fn test_url_override() {
        let config = from_lookup(lookup(&[(ENV_DATABASE_URL, "sqlite://inventory.db")])).unwrap();
        assert_eq!(config.connect_url().unwrap(), "sqlite://inventory.db");
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let config = from_lookup(lookup(&[(ENV_HOST, ""), (ENV_PORT, "")])).unwrap();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 3306);
    }

    #[test]
    fn test_bad_port() {
        let err = from_lookup(lookup(&[(ENV_PORT, "abc")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for STOCKROOM_DB_PORT: 'abc'");
    }
}
