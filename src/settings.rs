use axum::http::HeaderValue;
use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settings {
    pub debug: bool,
    pub enable_swagger: bool,
    pub port: u16,
    /// Origin echoed in `Access-Control-Allow-Origin`.
    pub allowed_origin: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            enable_swagger: true,
            port: 8080,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            .set_default("debug", false)?
            .set_default("enable_swagger", true)?
            .set_default("port", 8080)?
            .set_default("allowed_origin", DEFAULT_ALLOWED_ORIGIN)?
            // APP_ALLOWED_ORIGIN -> allowed_origin, no nesting
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.origin_header()?;
        Ok(settings)
    }

    pub fn origin_header(&self) -> Result<HeaderValue, ConfigError> {
        HeaderValue::from_str(&self.allowed_origin).map_err(|err| {
            ConfigError::Message(format!(
                "allowed_origin {:?} is not a valid header value: {err}",
                self.allowed_origin
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    fn clear_env() {
        for key in [
            "APP_DEBUG",
            "APP_ENABLE_SWAGGER",
            "APP_PORT",
            "APP_ALLOWED_ORIGIN",
        ] {
            unsafe { std::env::remove_var(key) };
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.port, 8080);
        assert!(!settings.debug);
        assert!(settings.enable_swagger);
        assert_eq!(settings.allowed_origin, DEFAULT_ALLOWED_ORIGIN);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        unsafe {
            std::env::set_var("APP_PORT", "9090");
            std::env::set_var("APP_DEBUG", "true");
            std::env::set_var("APP_ALLOWED_ORIGIN", "https://sportsmate.example");
        }
        let settings = Settings::from_env().unwrap();
        clear_env();

        assert_eq!(settings.port, 9090);
        assert!(settings.debug);
        assert_eq!(settings.allowed_origin, "https://sportsmate.example");
    }

    #[test]
    #[serial]
    fn test_invalid_origin_rejected() {
        clear_env();
        unsafe { std::env::set_var("APP_ALLOWED_ORIGIN", "http://bad\norigin") };
        let result = Settings::from_env();
        clear_env();

        assert!(result.is_err());
    }

    #[test]
    fn test_default_origin_header() {
        let header = Settings::default().origin_header().unwrap();
        assert_eq!(header, DEFAULT_ALLOWED_ORIGIN);
    }
}
