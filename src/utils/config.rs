use std::env;

use dotenvy::dotenv;
use thiserror::Error;

use super::consts::{env as env_vars, DEFAULT_DATABASE_URL};

const DEV_SESSION_SECRET: &str = "chave-de-desenvolvimento-assembleia-fidelidade";
const MIN_SECRET_LEN: usize = 16;

#[derive(Clone, Debug)]
pub struct Config {
    database_url: String,
    session_secret: String,
}

impl Config {
    pub fn new(database_url: impl Into<String>, session_secret: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            session_secret: session_secret.into(),
        }
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn session_secret(&self) -> &str {
        &self.session_secret
    }

    pub fn is_sqlite(&self) -> bool {
        self.database_url.starts_with("sqlite:")
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let database_url =
            opt_var(env_vars::DATABASE_URL_ENV_VAR).unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        if database_url.trim().is_empty() {
            return Err(ConfigError::Invalid(env_vars::DATABASE_URL_ENV_VAR));
        }

        let session_secret = match opt_var(env_vars::SESSION_SECRET_ENV_VAR) {
            Some(secret) if secret.len() < MIN_SECRET_LEN => {
                return Err(ConfigError::WrongLen(
                    "SESSION_SECRET must be at least 16 bytes",
                ))
            }
            Some(secret) => secret,
            None => {
                log::warn!("SESSION_SECRET not set, using the development secret");
                DEV_SESSION_SECRET.into()
            }
        };

        Ok(Self {
            database_url,
            session_secret,
        })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid env var {0}")]
    Invalid(&'static str),
    #[error("{0}")]
    WrongLen(&'static str),
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok()
}
