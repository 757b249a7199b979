use dotenvy::dotenv;
use std::env;

const PORT: u16 = 8218;

/// Connection and listener settings, resolved once at startup and handed to
/// the rest of the application explicitly.
pub struct Config {
    pub db_host: String,
    pub db_name: String,
    pub db_user: String,
    pub db_pass: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        let _ = dotenv();

        Self {
            db_host: env_or("DB_HOST", "localhost"),
            db_name: env_or("DB_NAME", "automated_deploy"),
            db_user: env_or("DB_USER", "thiago"),
            db_pass: env_or("DB_PASS", "123"),
            port: PORT,
        }
    }

    pub fn addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
