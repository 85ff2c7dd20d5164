//! Server configuration from environment variables

use std::{net::SocketAddr, path::PathBuf};

use anyhow::Context;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3001";
pub const DEFAULT_STATIC_DIR: &str = "dist";
pub const DEFAULT_POINTS: usize = 48;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `DECK_ADDR`
    pub addr: SocketAddr,
    /// `DECK_STATIC_DIR`: built frontend assets
    pub static_dir: PathBuf,
    /// `DECK_POINTS`: samples per generated chart
    pub points: usize,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; missing keys use defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let addr = lookup("DECK_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr
            .parse()
            .with_context(|| format!("DECK_ADDR is not a socket address: {addr}"))?;

        let static_dir = lookup("DECK_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let points = match lookup("DECK_POINTS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("DECK_POINTS is not a count: {raw}"))?,
            None => DEFAULT_POINTS,
        };

        Ok(Self {
            addr,
            static_dir,
            points,
        })
    }
}
