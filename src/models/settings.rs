use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Base URL of the stats backend, from `api_server` in `Settings.toml`
    /// or the `API_SERVER` environment variable.
    pub api_server: String,
}

impl Settings {
    /// Reads settings from an optional `Settings.toml` next to the binary,
    /// with environment variables taking precedence.
    pub fn load() -> Result<Settings, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("Settings").required(false))
            .add_source(Environment::default())
            .build()?;
        config.try_deserialize::<Settings>()
    }
}
