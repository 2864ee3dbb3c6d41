use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Default send endpoint; overridable per install for staging gateways.
pub const DEFAULT_API_URL: &str = "https://api.sms-gateway.example/v3/sms/send";

/// Default sender label shown on recipients' phones.
pub const DEFAULT_SENDER_ID: &str = "SMSAlert";

/// The gateway rejects sender ids longer than this.
pub const MAX_SENDER_ID_LEN: usize = 11;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SMS gateway token is not configured; set SMSGW_API_TOKEN or add api_token to the config file")]
    MissingToken,
    #[error("sender id {0:?} is invalid: must be 1-{MAX_SENDER_ID_LEN} alphanumeric characters")]
    InvalidSenderId(String),
    #[error("no config directory available")]
    NoConfigDir,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Settings for reaching the gateway. The bearer token deliberately has no
/// baked-in fallback; it must come from the config file or the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_url: String,
    pub api_token: String,
    pub sender_id: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: String::new(),
            sender_id: DEFAULT_SENDER_ID.to_string(),
        }
    }
}

impl Settings {
    fn config_path() -> Option<PathBuf> {
        let base = BaseDirs::new()?;
        Some(base.config_dir().join("smsgw.toml"))
    }

    /// Read the TOML config if present, then let environment variables
    /// override individual fields. Never fails; validation happens when a
    /// client is built.
    pub fn load() -> Self {
        let mut settings = Self::default();
        if let Some(path) = Self::config_path() {
            if let Ok(bytes) = fs::read(&path) {
                if let Ok(text) = String::from_utf8(bytes) {
                    if let Ok(parsed) = toml::from_str::<Settings>(&text) {
                        settings = parsed;
                    }
                }
            }
        }
        if let Ok(url) = env::var("SMSGW_API_URL") {
            settings.api_url = url;
        }
        if let Ok(token) = env::var("SMSGW_API_TOKEN") {
            settings.api_token = token;
        }
        if let Ok(sender) = env::var("SMSGW_SENDER_ID") {
            settings.sender_id = sender;
        }
        settings.api_url = crate::utils::normalize_url(&settings.api_url);
        settings
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        fs::write(path, toml)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }
        let sender_ok = !self.sender_id.is_empty()
            && self.sender_id.len() <= MAX_SENDER_ID_LEN
            && self.sender_id.chars().all(|c| c.is_ascii_alphanumeric());
        if !sender_ok {
            return Err(ConfigError::InvalidSenderId(self.sender_id.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Settings {
        Settings {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: "secret".to_string(),
            sender_id: "SMSAlert".to_string(),
        }
    }

    #[test]
    fn validate_requires_a_token() {
        let mut settings = valid();
        settings.api_token = "   ".to_string();
        assert!(matches!(settings.validate(), Err(ConfigError::MissingToken)));
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn validate_enforces_sender_id_contract() {
        for bad in ["", "TWELVECHARSX", "BAD ID", "sms-alert"] {
            let mut settings = valid();
            settings.sender_id = bad.to_string();
            assert!(
                matches!(settings.validate(), Err(ConfigError::InvalidSenderId(_))),
                "sender id {bad:?} should be rejected"
            );
        }
        let mut settings = valid();
        settings.sender_id = "ELEVENCHARS".to_string();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn partial_config_files_fall_back_to_defaults() {
        let settings: Settings = toml::from_str("api_token = \"secret\"").unwrap();
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert_eq!(settings.sender_id, DEFAULT_SENDER_ID);
        assert_eq!(settings.api_token, "secret");
    }
}
