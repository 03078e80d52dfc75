//! Listener and middleware settings read from the environment.
//!
//! Values come from process environment variables (`main` loads `.env`
//! into the environment first). Empty values are treated as unset.

use crate::errors::ConfigError;
use std::{
    net::{IpAddr, SocketAddr},
    time::Duration,
};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origin. `None` allows any origin.
    pub frontend_origin: Option<String>,
    pub request_timeout: Duration,
    pub max_concurrent_requests: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            frontend_origin: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_concurrent_requests: DEFAULT_MAX_CONCURRENT_REQUESTS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => parse_positive::<u16>("PORT", &raw)?,
            None => defaults.port,
        };

        let request_timeout = match get("REQUEST_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse_positive::<u64>("REQUEST_TIMEOUT_SECS", &raw)?),
            None => defaults.request_timeout,
        };

        let max_concurrent_requests = match get("MAX_CONCURRENT_REQUESTS") {
            Some(raw) => parse_positive::<usize>("MAX_CONCURRENT_REQUESTS", &raw)?,
            None => defaults.max_concurrent_requests,
        };

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            frontend_origin: get("FRONTEND_ORIGIN").filter(|origin| origin != "*"),
            request_timeout,
            max_concurrent_requests,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidAddress {
                host: self.host.clone(),
                port: self.port,
            })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

fn parse_positive<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialEq + Default,
{
    let value: T = raw.parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: raw.to_string(),
    })?;

    if value == T::default() {
        return Err(ConfigError::Zero { key });
    }

    Ok(value)
}
