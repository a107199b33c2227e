use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

/// Fallback admin password when `ADMIN_PASSWORD` is unset. Known weak; its
/// use is warned about at startup.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub admin_password: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", "8000"),
            database_url: require("DATABASE_URL"),
            admin_password: load_admin_password(),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| ())
}

fn require(key: &str) -> String {
    var(key)
        .map_err(|_| {
            warn!("Required environment variable {key} not set");
        })
        .expect("Environment misconfigured!")
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

fn load_admin_password() -> String {
    var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        warn!("ADMIN_PASSWORD not set, falling back to the default password");
        DEFAULT_ADMIN_PASSWORD.to_string()
    })
}
