//! Environment-driven service configuration.
//!
//! | Variable              | Default                           |
//! |-----------------------|-----------------------------------|
//! | `BIND_ADDR`           | `0.0.0.0:8000`                    |
//! | `CORS_ALLOWED_ORIGIN` | `http://localhost:3000`           |
//! | `CHAT_API_KEY_VAR`    | `GROQ_API_KEY`                    |
//! | `CHAT_BASE_URL`       | `https://api.groq.com/openai/v1`  |
//! | `CHAT_MODEL`          | `llama-3.1-8b-instant`            |
//! | `CHAT_TIMEOUT_SECS`   | `30`                              |
//!
//! The chat credential itself is not part of this struct: it is read from the
//! variable named by `CHAT_API_KEY_VAR` on every chat call.

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

use fullstack_chat::{credentials::DEFAULT_API_KEY_VAR, ChatConfig};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Trusted browser origin allowed by CORS (credentials included).
    pub cors_origin: String,
    /// Name of the environment variable holding the chat credential.
    pub api_key_var: String,
    pub chat: ChatConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            api_key_var: DEFAULT_API_KEY_VAR.to_string(),
            chat: ChatConfig::default(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup. Unset or empty values fall back
    /// to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let bind_addr = match get("BIND_ADDR") {
            Some(v) => v.parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
                var: "BIND_ADDR",
                value: v.clone(),
                reason: e.to_string(),
            })?,
            None => defaults.bind_addr,
        };

        let timeout = match get("CHAT_TIMEOUT_SECS") {
            Some(v) => match v.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                Ok(_) => {
                    return Err(ConfigError::Invalid {
                        var: "CHAT_TIMEOUT_SECS",
                        value: v,
                        reason: "must be greater than zero".to_string(),
                    });
                }
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        var: "CHAT_TIMEOUT_SECS",
                        value: v,
                        reason: e.to_string(),
                    });
                }
            },
            None => defaults.chat.timeout,
        };

        Ok(Self {
            bind_addr,
            cors_origin: get("CORS_ALLOWED_ORIGIN").unwrap_or(defaults.cors_origin),
            api_key_var: get("CHAT_API_KEY_VAR").unwrap_or(defaults.api_key_var),
            chat: ChatConfig {
                base_url: get("CHAT_BASE_URL").unwrap_or(defaults.chat.base_url),
                model: get("CHAT_MODEL").unwrap_or(defaults.chat.model),
                timeout,
            },
        })
    }
}
