use std::env;

use super::ConfigError;

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Reported by `/health`; the device the inference backend runs on.
    pub device: String,
}

impl ServerSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue { name: "PORT", value })?,
            Err(_) => 8000,
        };
        let device = env::var("INFERENCE_DEVICE").unwrap_or_else(|_| "cpu".to_string());

        Ok(Self { host, port, device })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
