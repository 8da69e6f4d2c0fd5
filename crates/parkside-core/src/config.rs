use anyhow::Result;
use config::Config;
use serde::Deserialize;

/// Settings for the API service.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Symmetric secret shared between token issuance and verification.
    pub secret: String,
    /// Admin account seeded at startup when absent.
    pub admin: Option<AdminSeedConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminSeedConfig {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the server address as a string in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads API configuration from `.env` file, environment variables, and an
    /// optional `config.toml`. Environment variables take precedence over
    /// `.env` file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("database.max_connections", 4)?
            .set_default("logging.level", "debug")?
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// Settings for the front-end service.
#[derive(Debug, Clone, Deserialize)]
pub struct WebSettings {
    pub server: ServerConfig,
    pub api: ApiClientConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiClientConfig {
    /// Base URL of the API service, e.g. `http://127.0.0.1:5000`.
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Cookie-session signing secret. Must be at least 64 bytes.
    pub secret: String,
}

impl WebSettings {
    /// ## Summary
    /// Loads front-end configuration from `.env` file, environment variables,
    /// and an optional `web.toml`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5100)?
            .set_default("api.base_url", "http://127.0.0.1:5000")?
            .set_default("logging.level", "debug")?
            .add_source(
                config::Environment::with_prefix("WEB")
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("web.toml").required(false))
            .build()?
            .try_deserialize::<WebSettings>()?)
    }
}

/// ## Summary
/// Loads API configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

/// ## Summary
/// Loads front-end configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_web_config() -> Result<WebSettings> {
    dotenvy::dotenv().ok();

    WebSettings::load()
}
