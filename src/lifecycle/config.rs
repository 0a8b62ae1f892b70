//! Runtime configuration read from the environment.
//!
//! | Variable             | Default     |
//! |----------------------|-------------|
//! | `PIZZA_HOST`         | `127.0.0.1` |
//! | `PIZZA_PORT`         | `5555`      |
//! | `PIZZA_SEED`         | `true`      |
//! | `PIZZA_ACTOR_BUFFER` | `32`        |
//!
//! An unset variable takes its default; a set but malformed one is an error.

use crate::api::ServerConfig;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5555;
pub const DEFAULT_ACTOR_BUFFER: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name}={value:?} is not a valid {expected}")]
    Invalid {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Insert the demo restaurants and pizzas at startup.
    pub seed: bool,
    /// Channel capacity of each actor. Never zero.
    pub actor_buffer: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed: true,
            actor_buffer: DEFAULT_ACTOR_BUFFER,
        }
    }
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// Call once at startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("PIZZA_HOST").unwrap_or(defaults.host);

        let port = match lookup("PIZZA_PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PIZZA_PORT",
                value,
                expected: "port number",
            })?,
            None => defaults.port,
        };

        let seed = match lookup("PIZZA_SEED") {
            Some(value) => parse_flag(&value).ok_or(ConfigError::Invalid {
                name: "PIZZA_SEED",
                value,
                expected: "boolean",
            })?,
            None => defaults.seed,
        };

        let actor_buffer = match lookup("PIZZA_ACTOR_BUFFER") {
            Some(value) => value
                .trim()
                .parse()
                .ok()
                .filter(|size: &usize| *size > 0)
                .ok_or(ConfigError::Invalid {
                    name: "PIZZA_ACTOR_BUFFER",
                    value,
                    expected: "positive buffer size",
                })?,
            None => defaults.actor_buffer,
        };

        Ok(Self {
            host,
            port,
            seed,
            actor_buffer,
        })
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig::new(self.host.clone(), self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
