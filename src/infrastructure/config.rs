use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(&'static str),
}

/// Connection settings for the hosted table service, read once at startup and
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct TableStoreConfig {
    pub base_url: String,
    pub api_key: String,
    pub table_name: String,
}

impl TableStoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: require("TABLE_API_URL")?,
            api_key: require("TABLE_API_KEY")?,
            table_name: require("TABLE_NAME")?,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    match dotenvy::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}
