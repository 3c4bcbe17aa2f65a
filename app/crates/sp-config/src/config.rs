use crate::{
    CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR_NAME,
    LoggingConfig, RemoteConfig, StorageConfig, SyncConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub remote: RemoteConfig,
    pub storage: StorageConfig,
    pub sync: SyncConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. `SP_CONFIG_DIR` env var, else `./.support-plus/`
    /// 2. Auto-create the config directory
    /// 3. Load `config.toml` if present, else defaults
    /// 4. Apply `SP_*` environment overrides
    ///
    /// Does NOT validate; call `validate()` after `load()`.
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: `SP_CONFIG_DIR` > `./.support-plus/` (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.remote.validate()?;
        self.storage.validate()?;
        self.sync.validate()?;

        if let Some(file) = &self.logging.file
            && (file.trim().is_empty() || file.contains('/') || file.contains('\\'))
        {
            return Err(ConfigError::logging(
                "logging.file must be a plain file name",
            ));
        }

        Ok(())
    }

    /// Absolute path to the SQLite file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.storage.path))
    }

    /// Absolute path to the log directory.
    pub fn log_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.logging.dir))
    }

    /// Log configuration summary (NEVER logs the API key).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  remote: auth={} profiles={} catalog={} (api key: {})",
            self.remote.auth_url,
            self.remote.profile_api_url,
            self.remote.catalog_url,
            if self.remote.api_key.is_some() {
                "set"
            } else {
                "none"
            }
        );
        info!(
            "  storage: {} (store: {})",
            self.storage.path, self.storage.store_name
        );
        info!("  sync: timeout={}s", self.sync.timeout_secs);
        info!(
            "  logging: {} -> {} (colored: {})",
            self.logging.level,
            self.logging.destination(),
            self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Remote
        Self::apply_env_string("SP_AUTH_URL", &mut self.remote.auth_url);
        Self::apply_env_option_string("SP_API_KEY", &mut self.remote.api_key);
        Self::apply_env_string("SP_PROFILE_API_URL", &mut self.remote.profile_api_url);
        Self::apply_env_string("SP_CATALOG_URL", &mut self.remote.catalog_url);

        // Storage
        Self::apply_env_string("SP_STORAGE_PATH", &mut self.storage.path);
        Self::apply_env_string("SP_STORAGE_STORE_NAME", &mut self.storage.store_name);

        // Sync
        Self::apply_env_parse("SP_SYNC_TIMEOUT_SECS", &mut self.sync.timeout_secs);

        // Logging
        Self::apply_env_parse("SP_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SP_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SP_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
