//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 8080;

/// Environment variable holding the session signing secret.
pub const SECRET_KEY_VAR: &str = "SECRET_KEY";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {var}")]
    MissingSecret { var: &'static str },
    #[error("environment variable {var} is empty")]
    EmptySecret { var: &'static str },
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub secret_key: String,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

impl ServerConfig {
    /// Build typed server config from the process environment.
    ///
    /// Required:
    /// - `SECRET_KEY`: signs the session cookie
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 8080
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup(SECRET_KEY_VAR).ok_or(ConfigError::MissingSecret { var: SECRET_KEY_VAR })?;
        if secret_key.is_empty() {
            return Err(ConfigError::EmptySecret { var: SECRET_KEY_VAR });
        }

        let host = parse_or("HOST", lookup("HOST"), DEFAULT_HOST)?;
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;

        Ok(Self { host, port, secret_key })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
