//! Process configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

pub const BIND_ADDR_ENV: &str = "SHOPPORIUM_BIND_ADDR";
pub const DIST_DIR_ENV: &str = "SHOPPORIUM_DIST_DIR";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DIST_DIR: &str = "dist";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub dist_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind = lookup(BIND_ADDR_ENV).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse::<SocketAddr>()
            .with_context(|| format!("{BIND_ADDR_ENV}={bind} is not a socket address"))?;

        let dist_dir = lookup(DIST_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));

        Ok(Self { bind_addr, dist_dir })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(|key| match key {
            BIND_ADDR_ENV => Some("127.0.0.1:3000".into()),
            DIST_DIR_ENV => Some("/srv/shop".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.dist_dir, PathBuf::from("/srv/shop"));
    }

    #[test]
    fn rejects_bad_bind_addr() {
        let err = ServerConfig::from_lookup(|key| (key == BIND_ADDR_ENV).then(|| "nope".into()))
            .unwrap_err();
        assert!(err.to_string().contains(BIND_ADDR_ENV));
    }
}
