use crate::{
    BeamSettings, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub beam: BeamSettings,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for BEAM_CONFIG_DIR env var, else use ./.beam/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply BEAM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
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

    /// Get the config directory.
    /// Priority: BEAM_CONFIG_DIR env var > ./.beam/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.beam.validate()?;

        if let Some(file) = &self.logging.file
            && (Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::logging(
                "logging.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to the log file, if file logging is enabled.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = &self.logging.file else {
            return Ok(None);
        };
        let config_dir = Self::config_dir()?;
        Ok(Some(config_dir.join(&self.logging.dir).join(file)))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  beam: buffer={}, frame={}, log_connections={}, headers={}",
            self.beam.buffer_size,
            self.beam.frame,
            self.beam.log_connections,
            self.beam.headers.len()
        );
        info!(
            "  beam limits: message={}, frame={}",
            Self::describe_limit(self.beam.max_message_size),
            Self::describe_limit(self.beam.max_frame_size)
        );
    }

    fn describe_limit(limit: Option<usize>) -> String {
        limit.map_or_else(|| String::from("default"), |bytes| bytes.to_string())
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("BEAM_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("BEAM_SERVER_PORT", &mut self.server.port);

        // Logging
        Self::apply_env_parse("BEAM_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("BEAM_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("BEAM_LOG_FILE", &mut self.logging.file);

        // Beam
        Self::apply_env_parse("BEAM_BUFFER_SIZE", &mut self.beam.buffer_size);
        Self::apply_env_string("BEAM_FRAME", &mut self.beam.frame);
        Self::apply_env_bool("BEAM_LOG_CONNECTIONS", &mut self.beam.log_connections);
        Self::apply_env_option_parse("BEAM_MAX_MESSAGE_SIZE", &mut self.beam.max_message_size);
        Self::apply_env_option_parse("BEAM_MAX_FRAME_SIZE", &mut self.beam.max_frame_size);
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

    fn apply_env_option_parse<T: std::str::FromStr>(var_name: &str, target: &mut Option<T>) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = Some(parsed);
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
