use secrecy::Secret;
use serde::Deserialize;
use std::env;

use crate::error::AppError;

/// Shared-secret token accepted on the protected endpoints when no
/// configuration overrides it.
const DEFAULT_TOKEN: &str = "9e4ce8c2-e125-4657-bb2b-4ac9c82dc123";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// Shared secret compared against the `Authorization: Bearer <token>`
    /// request header. Fixed for the lifetime of the process.
    pub token: Secret<String>,
}

impl Settings {
    /// Load settings from an optional `configuration` file plus
    /// `APP`-prefixed environment variables (e.g. `APP_SERVER__PORT`).
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080_i64)?
            .set_default("auth.token", DEFAULT_TOKEN)?
            .add_source(config::File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        let mut settings: Settings = config.try_deserialize()?;

        // PaaS platforms inject the listening port as a bare PORT variable.
        if let Ok(port) = env::var("PORT") {
            if let Ok(port) = port.parse() {
                settings.server.port = port;
            }
        }

        Ok(settings)
    }
}
