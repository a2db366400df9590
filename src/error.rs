use api_client::error::ApiError;
use configuration::error::ConfigError;
use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Data access error: {0}")]
    Api(#[from] ApiError),

    #[error("Invalid input: {0}")]
    Core(#[from] CoreError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
