use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub client: ClientConfig,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

/// Buffering defaults applied when a function's config map leaves them unset.
#[derive(Debug, Deserialize)]
pub struct ClientConfig {
    pub autoflush: bool,
    pub write_buffer_size_mb: usize,
}

use std::env;

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("MULTICOL_PUT_CONFIG").unwrap_or_else(|_| "config".to_string());
    load_settings_from(&config_path)
}

pub fn load_settings_from(config_path: &str) -> Result<Settings, config::ConfigError> {
    let settings: Settings = config::Config::builder()
        .set_default("logging.log_dir", "logs")?
        .set_default("logging.stdout_level", "info")?
        .set_default("logging.file_level", "debug")?
        .set_default("client.autoflush", true)?
        .set_default("client.write_buffer_size_mb", 2)?
        .add_source(config::File::with_name(config_path).required(false))
        .add_source(config::Environment::with_prefix("MULTICOL_PUT").separator("__"))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
