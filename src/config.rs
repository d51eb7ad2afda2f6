//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::cache::InfoCachePolicy;
use crate::service::DEFAULT_CATALOG_SIZE;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Number of videos listed by the simulated remote service
    pub catalog_size: u32,
    /// Keying policy of the video info cache
    pub info_cache_policy: InfoCachePolicy,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CATALOG_SIZE` - Videos in the remote catalog (default: 3)
    /// - `INFO_CACHE_POLICY` - `per_id` or `single_slot` (default: per_id)
    pub fn from_env() -> Self {
        Self {
            server_port: env_or_default("SERVER_PORT", 3000),
            catalog_size: env_or_default("CATALOG_SIZE", DEFAULT_CATALOG_SIZE),
            info_cache_policy: env_or_default("INFO_CACHE_POLICY", InfoCachePolicy::default()),
        }
    }
}

/// Reads and parses `name`, falling back to `default` when unset.
///
/// A value that is set but does not parse is logged and replaced by the
/// default.
fn env_or_default<T>(name: &str, default: T) -> T
where
    T: FromStr + fmt::Display,
    T::Err: fmt::Display,
{
    match env::var(name) {
        Ok(raw) => parse_or_default(name, &raw, default),
        Err(_) => default,
    }
}

fn parse_or_default<T>(name: &str, raw: &str, default: T) -> T
where
    T: FromStr + fmt::Display,
    T::Err: fmt::Display,
{
    raw.trim().parse().unwrap_or_else(|err| {
        warn!("Invalid {}={:?} ({}), falling back to {}", name, raw, err, default);
        default
    })
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            catalog_size: DEFAULT_CATALOG_SIZE,
            info_cache_policy: InfoCachePolicy::default(),
        }
    }
}
