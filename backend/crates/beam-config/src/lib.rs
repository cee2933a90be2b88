mod beam_settings;
mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use beam_settings::{
    BeamSettings, DEFAULT_BUFFER_SIZE, DEFAULT_FRAME, FRAME_BINARY, FRAME_TEXT, MAX_BUFFER_SIZE,
    MIN_BUFFER_SIZE,
};
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const CONFIG_DIR_ENV: &str = "BEAM_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".beam";
const CONFIG_FILE_NAME: &str = "config.toml";
