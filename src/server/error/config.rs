use thiserror::Error;

/// Startup configuration failures. Both abort the process before the listener binds.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `DATABASE_URL` or another mandatory variable is absent.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A variable such as `CLONE_COPIES_FLIGHTS` or `MAX_PAGE_SIZE` holds an unusable value.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar { name: String, value: String },
}
