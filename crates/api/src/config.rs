//! Runtime configuration, read once from the environment at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_DATA_PATH: &str = "data/items.json";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:4001";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Location of the JSON item document (`CATALOG_DATA_PATH`).
    pub data_path: PathBuf,
    /// Listen address (`CATALOG_BIND_ADDR`).
    pub bind_addr: SocketAddr,
    /// Optional cap on `limit` (`CATALOG_MAX_PAGE_SIZE`); `None` is unbounded.
    pub max_page_size: Option<usize>,
    /// Allowed browser origin (`CATALOG_CORS_ORIGIN`); `None` allows any.
    pub cors_origin: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            bind_addr: default_bind_addr(),
            max_page_size: None,
            cors_origin: None,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 4001))
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Invalid values are logged and
    /// replaced by their defaults; configuration never aborts startup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let data_path = value("CATALOG_DATA_PATH").map(PathBuf::from).unwrap_or_else(|| {
            tracing::warn!("CATALOG_DATA_PATH not set; using {DEFAULT_DATA_PATH}");
            PathBuf::from(DEFAULT_DATA_PATH)
        });

        let bind_addr = match value("CATALOG_BIND_ADDR") {
            None => default_bind_addr(),
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("invalid CATALOG_BIND_ADDR {raw:?} ({e}); using {DEFAULT_BIND_ADDR}");
                default_bind_addr()
            }),
        };

        let max_page_size = value("CATALOG_MAX_PAGE_SIZE").and_then(|raw| match raw.parse::<usize>() {
            Ok(n) if n > 0 => Some(n),
            _ => {
                tracing::warn!("invalid CATALOG_MAX_PAGE_SIZE {raw:?}; page size stays unbounded");
                None
            }
        });

        Self {
            data_path,
            bind_addr,
            max_page_size,
            cors_origin: value("CATALOG_CORS_ORIGIN"),
        }
    }
}
