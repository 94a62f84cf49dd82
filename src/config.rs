use anyhow::{Context, Result};
use std::net::SocketAddr;

#[derive(Clone, Debug)]
pub struct RidesConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
}

impl RidesConfig {
    pub fn from_env() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://rides.db".to_string());

        let max_connections = std::env::var("MAX_CONNECTIONS")
            .ok()
            .and_then(|val| val.parse::<u32>().ok())
            .unwrap_or(15);

        let raw_bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8010".to_string());
        let bind_addr = raw_bind_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("BIND_ADDR '{}' is not a valid socket address", raw_bind_addr))?;

        Ok(Self {
            database_url,
            max_connections,
            bind_addr,
        })
    }

    // config for a throwaway database, used by tests
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        }
    }
}
