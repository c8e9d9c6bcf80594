use crate::errors::ConfigError;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_MAX_WORKERS: usize = 8;
const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 30;

/// Where listing records come from.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceConfig {
    Search {
        url: String,
        api_key: Option<String>,
        timeout: Duration,
    },
    Fixture {
        path: PathBuf,
    },
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub source: SourceConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any key lookup, so tests don't have to touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: "BIND_ADDR",
                reason: format!("{e}"),
            })?;

        let max_workers = parse_or("MAX_WORKERS", &lookup, DEFAULT_MAX_WORKERS)?;
        if max_workers == 0 {
            return Err(ConfigError::Invalid {
                name: "MAX_WORKERS",
                reason: "must be at least 1".into(),
            });
        }

        let source = match (lookup("SEARCH_URL"), lookup("FIXTURE_PATH")) {
            (Some(url), _) if !url.trim().is_empty() => {
                url::Url::parse(&url).map_err(|e| ConfigError::Invalid {
                    name: "SEARCH_URL",
                    reason: e.to_string(),
                })?;
                let secs = parse_or("SEARCH_TIMEOUT_SECS", &lookup, DEFAULT_SEARCH_TIMEOUT_SECS)?;
                SourceConfig::Search {
                    url,
                    api_key: lookup("SEARCH_API_KEY").filter(|k| !k.is_empty()),
                    timeout: Duration::from_secs(secs),
                }
            }
            (_, Some(path)) if !path.trim().is_empty() => SourceConfig::Fixture {
                path: PathBuf::from(path),
            },
            _ => return Err(ConfigError::NoSource),
        };

        Ok(Self {
            bind_addr,
            max_workers,
            source,
        })
    }
}

fn parse_or<F, T>(name: &'static str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
