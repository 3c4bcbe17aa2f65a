use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] sp_config::ConfigError),

    #[error("Invalid input: {0}")]
    Core(#[from] sp_core::CoreError),

    #[error("Database error: {0}")]
    Db(#[from] sp_db::DbError),

    #[error("Cache error: {0}")]
    Cache(#[from] sp_cache::CacheError),

    #[error("Remote error: {0}")]
    Client(#[from] sp_client::ClientError),

    #[error("{0}")]
    Resolver(#[from] sp_session::ResolverError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Login failed: {message} {location}")]
    Otp {
        message: String,
        location: ErrorLocation,
    },

    #[error("{message}")]
    Usage { message: String },
}

impl AppError {
    #[track_caller]
    pub fn otp<S: Into<String>>(message: S) -> Self {
        Self::Otp {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn usage<S: Into<String>>(message: S) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
