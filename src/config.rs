//! Server configuration from the environment

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MAX_SESSIONS: usize = 1000;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
    /// Live sessions allowed at once
    pub max_sessions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl ServerConfig {
    /// Read `TALENTSCOUT_BIND`, `TALENTSCOUT_PORT` and `TALENTSCOUT_MAX_SESSIONS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            bind: parse_or("TALENTSCOUT_BIND", lookup("TALENTSCOUT_BIND"), defaults.bind),
            port: parse_or("TALENTSCOUT_PORT", lookup("TALENTSCOUT_PORT"), defaults.port),
            max_sessions: parse_or(
                "TALENTSCOUT_MAX_SESSIONS",
                lookup("TALENTSCOUT_MAX_SESSIONS"),
                defaults.max_sessions,
            )
            .max(1),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    let Some(raw) = raw else {
        return default;
    };
    if let Ok(value) = raw.trim().parse() {
        value
    } else {
        tracing::warn!(key, value = %raw, "Ignoring invalid configuration value");
        default
    }
}
