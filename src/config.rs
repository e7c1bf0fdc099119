use std::env;

use eyre::{ensure, Result};
use sqlx::mysql::MySqlConnectOptions;

use crate::error::Error;

const REQUIRED_VARS: [&str; 4] = ["DB_HOST", "DB_NAME", "DB_USERNAME", "DB_PASSWORD"];
const DEFAULT_PORT: &str = "3306";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let missing: Vec<&str> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|name| lookup(name).is_none())
            .collect();
        ensure!(
            missing.is_empty(),
            Error::MissingEnvVars(missing.join(", "))
        );

        let raw_port = env::var("DB_PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
        let port = raw_port
            .parse::<u16>()
            .map_err(|_| Error::InvalidPort(raw_port.clone()))?;

        Ok(Config {
            host: env::var("DB_HOST")?,
            port,
            database: env::var("DB_NAME")?,
            username: env::var("DB_USERNAME")?,
            password: env::var("DB_PASSWORD")?,
        })
    }

    pub fn source_connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.database)
    }
}

// An empty value counts as unset.
fn lookup(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clear_env() {
        for name in REQUIRED_VARS {
            env::remove_var(name);
        }
        env::remove_var("DB_PORT");
    }

    // One test body so the env mutations never race a parallel test.
    #[test]
    fn reads_connection_parameters_from_the_environment() {
        clear_env();

        let err = Config::from_env().unwrap_err();
        match err.downcast_ref::<Error>() {
            Some(Error::MissingEnvVars(names)) => {
                assert!(names.contains("DB_HOST"));
                assert!(names.contains("DB_NAME"));
                assert!(names.contains("DB_USERNAME"));
                assert!(names.contains("DB_PASSWORD"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        env::set_var("DB_HOST", "");
        let err = Config::from_env().unwrap_err();
        match err.downcast_ref::<Error>() {
            Some(Error::MissingEnvVars(names)) => assert!(names.contains("DB_HOST")),
            other => panic!("unexpected error: {other:?}"),
        }

        env::set_var("DB_HOST", "db.example.org");
        env::set_var("DB_NAME", "PRD01");
        env::set_var("DB_USERNAME", "sync");
        env::set_var("DB_PASSWORD", "secret");

        let config = Config::from_env().unwrap();
        assert_eq!(config.host, "db.example.org");
        assert_eq!(config.port, 3306);
        assert_eq!(config.database, "PRD01");

        env::set_var("DB_PORT", "13306");
        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 13306);

        env::set_var("DB_PORT", "not-a-port");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidPort(_))
        ));

        clear_env();
    }
}
