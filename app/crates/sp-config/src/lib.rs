mod config;
mod error;
mod log_level;
mod logging_config;
mod remote_config;
mod storage_config;
mod sync_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use remote_config::RemoteConfig;
pub use storage_config::StorageConfig;
pub use sync_config::{MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS, SyncConfig};

pub const CONFIG_DIR_ENV: &str = "SP_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR_NAME: &str = ".support-plus";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_AUTH_URL: &str = "http://127.0.0.1:54321";
const DEFAULT_PROFILE_API_URL: &str = "https://otp-valhalla.vercel.app";
const DEFAULT_CATALOG_URL: &str = "http://127.0.0.1:5173";
const DEFAULT_DATABASE_FILENAME: &str = "data.db";
const DEFAULT_STORE_NAME: &str = "support-plus-storage";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
