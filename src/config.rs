use std::net::SocketAddr;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";
pub const ADDR_VAR: &str = "DECK_SERVICE_ADDR";
pub const SEED_VAR: &str = "DECK_SERVICE_SHUFFLE_SEED";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Runtime settings for the server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    /// When set, shuffles are reproducible across runs.
    pub shuffle_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source; unset variables take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr_raw = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_raw
            .parse()
            .map_err(|_| ConfigError::Invalid { var: ADDR_VAR, value: addr_raw.clone() })?;
        let shuffle_seed = match lookup(SEED_VAR) {
            None => None,
            Some(raw) => {
                Some(raw.parse().map_err(|_| ConfigError::Invalid { var: SEED_VAR, value: raw })?)
            }
        };
        Ok(Self { addr, shuffle_seed })
    }
}
