//! Server configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TRIPS_API_URL: &str = "http://127.0.0.1:4000";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Errors raised while reading the environment at startup.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),

    /// `TRIPS_API_URL` is empty or not an http(s) URL.
    #[error("invalid TRIPS_API_URL '{0}' (expected http:// or https://)")]
    InvalidUpstream(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Trips API base URL without a trailing slash.
    pub trips_api_url: String,
    pub timeouts: UpstreamTimeouts,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `TRIPS_API_URL`: default `http://127.0.0.1:4000`
    /// - `TRIPS_API_TIMEOUT_SECS`: default 30
    /// - `TRIPS_API_CONNECT_TIMEOUT_SECS`: default 5
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let trips_api_url = parse_upstream(std::env::var("TRIPS_API_URL").ok().as_deref())?;
        let timeouts = UpstreamTimeouts {
            request_secs: env_parse_u64("TRIPS_API_TIMEOUT_SECS", DEFAULT_UPSTREAM_TIMEOUT_SECS),
            connect_secs: env_parse_u64("TRIPS_API_CONNECT_TIMEOUT_SECS", DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { port, trips_api_url, timeouts })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_PORT);
    };
    raw.trim()
        .parse::<u16>()
        .ok()
        .filter(|port| *port != 0)
        .ok_or_else(|| ConfigError::InvalidPort(raw.to_owned()))
}

fn parse_upstream(raw: Option<&str>) -> Result<String, ConfigError> {
    let url = raw.unwrap_or(DEFAULT_TRIPS_API_URL).trim();
    let has_host = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .is_some_and(|rest| !rest.trim_matches('/').is_empty());
    if !has_host {
        return Err(ConfigError::InvalidUpstream(url.to_owned()));
    }
    Ok(url.trim_end_matches('/').to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
