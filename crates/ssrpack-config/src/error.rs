//! Error types for request normalization and environment resolution.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Cross-field invariants on the build request
    #[error("option \"build\" must be enabled for env {env}")]
    BuildRequired { env: String },

    #[error("option \"minify\" must be disabled when \"build\" is disabled for env {env}")]
    MinifyWithoutBuild { env: String },

    // Environment registry errors
    #[error("unknown environment \"{env}\" (known environments: {known})")]
    UnknownEnvironment { env: String, known: String },

    #[error("invalid environment registry: {0}")]
    InvalidRegistry(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
