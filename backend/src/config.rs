use std::fmt;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://backend-cshm.onrender.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_PORT: u16 = 8081;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
    #[error("URL parsing failed: {0}")]
    UrlError(#[from] url::ParseError),
}

#[derive(Clone)]
pub struct GatewayConfig {
    pub upstream_base_url: Url,
    pub api_key: String,
    pub timeout: Duration,
    pub read_retry: bool,
    pub port: u16,
    pub frontend_dir: String,
}

// Keeps the API key out of logs.
impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("upstream_base_url", &self.upstream_base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("read_retry", &self.read_retry)
            .field("port", &self.port)
            .field("frontend_dir", &self.frontend_dir)
            .finish()
    }
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("UPSTREAM_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::Missing("UPSTREAM_API_KEY"))?;

        let base_url = lookup("UPSTREAM_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_UPSTREAM_BASE_URL.to_string());
        let upstream_base_url = normalize_base_url(base_url.trim())?;

        let timeout_secs = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "UPSTREAM_TIMEOUT_SECS",
                        value: raw,
                    });
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        let read_retry = match lookup("UPSTREAM_READ_RETRY") {
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::Invalid {
                name: "UPSTREAM_READ_RETRY",
                value: raw,
            })?,
            None => false,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let frontend_dir = lookup("FRONTEND_DIR").unwrap_or_else(|| {
            match lookup("CARGO_MANIFEST_DIR") {
                Some(manifest_dir) => format!("{}/../frontend/dist", manifest_dir),
                None => "/usr/src/app/frontend/dist".to_string(),
            }
        });

        Ok(Self {
            upstream_base_url,
            api_key,
            timeout: Duration::from_secs(timeout_secs),
            read_retry,
            port,
            frontend_dir,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

/// Endpoint paths are joined onto the base, so it has to end in a slash.
fn normalize_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw)?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid {
            name: "UPSTREAM_BASE_URL",
            value: raw.to_string(),
        });
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
