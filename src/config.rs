use std::net::SocketAddr;

use anyhow::{Context, Result};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Reads `BIND_ADDR`, after loading a `.env` file if one exists.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw.parse().with_context(|| format!("invalid BIND_ADDR: {raw}"))?;
        Ok(Self { bind_addr })
    }
}
