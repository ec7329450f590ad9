use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_MAX_PAGE_SIZE: u64 = 100;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Default for the `with_flights` query parameter of the clone endpoint.
    pub clone_copies_flights: bool,
    /// Upper bound applied to the `per_page` listing parameter.
    pub max_page_size: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when it is unset
    ///
    /// # Returns
    /// - `Ok(Config)` - Every variable present and well-formed
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - `DATABASE_URL` is unset
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - A variable could not be parsed
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let clone_copies_flights = match lookup("CLONE_COPIES_FLIGHTS") {
            None => false,
            Some(value) => parse_bool(&value).ok_or_else(|| ConfigError::InvalidEnvVar {
                name: "CLONE_COPIES_FLIGHTS".to_string(),
                value,
            })?,
        };

        let max_page_size = match lookup("MAX_PAGE_SIZE") {
            None => DEFAULT_MAX_PAGE_SIZE,
            Some(value) => match value.trim().parse::<u64>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "MAX_PAGE_SIZE".to_string(),
                        value,
                    }
                    .into())
                }
            },
        };

        Ok(Self {
            database_url,
            bind_address,
            clone_copies_flights,
            max_page_size,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
