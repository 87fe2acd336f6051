use std::time::Duration;

pub mod env {
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const SESSION_SECRET_ENV_VAR: &str = "SESSION_SECRET";
}

pub const DEFAULT_DATABASE_URL: &str = "sqlite://./test.db?mode=rwc";
pub const BIND_ADDRESS: &str = "0.0.0.0:5000";

pub const SESSION_COOKIE_NAME: &str = "sessao";
pub const FLASH_COOKIE_NAME: &str = "aviso";
pub const FLASH_TTL_SECONDS: i64 = 60;

pub const BOOTSTRAP_ATTEMPTS: u32 = 3;
pub const BOOTSTRAP_RETRY_DELAY: Duration = Duration::from_secs(2);
