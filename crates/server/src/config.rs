use std::env;
use std::num::ParseIntError;

/// Process configuration, sourced from the environment. Connection
/// parameters follow the conventional DB_* names; PORT is the HTTP listen
/// port.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ParseIntError> {
        Ok(Self {
            db_host: env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            db_port: env::var("DB_PORT")
                .unwrap_or_else(|_| "5432".to_string())
                .parse()?,
            db_user: env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
            db_password: env::var("DB_PASSWORD").unwrap_or_default(),
            db_name: env::var("DB_NAME").unwrap_or_else(|_| "stock".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8090".to_string())
                .parse()?,
        })
    }

    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.db_user, self.db_password, self.db_host, self.db_port, self.db_name
        )
    }
}
