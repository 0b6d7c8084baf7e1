use crate::error::ConfigError;
use crate::relay::{RelayCredentials, StaticIceServers, TurnRestCredentials};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Runtime settings of the broker.
#[derive(Debug, Clone)]
pub struct BrokerConfig {
    pub bind_addr: SocketAddr,
    /// Frontend assets served on every path not claimed by the broker.
    pub static_dir: Option<PathBuf>,
    pub stun_urls: Vec<String>,
    pub turn: Option<TurnConfig>,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5555)),
            static_dir: None,
            stun_urls: Vec::new(),
            turn: None,
        }
    }
}

impl BrokerConfig {
    pub fn relay_credentials(&self) -> Arc<dyn RelayCredentials> {
        match &self.turn {
            Some(turn) => Arc::new(TurnRestCredentials::new(
                self.stun_urls.clone(),
                turn.clone(),
            )),
            None => Arc::new(StaticIceServers::stun(&self.stun_urls)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TurnConfig {
    pub urls: Vec<String>,
    pub shared_secret: String,
    pub ttl: Duration,
}

impl TurnConfig {
    /// Builds the TURN section from loose settings. Neither urls nor secret
    /// means no TURN; one without the other is an error.
    pub fn from_parts(
        urls: Vec<String>,
        shared_secret: Option<String>,
        ttl_secs: u64,
    ) -> Result<Option<Self>, ConfigError> {
        let shared_secret = shared_secret.filter(|s| !s.is_empty());
        match (urls.is_empty(), shared_secret) {
            (true, None) => Ok(None),
            (false, None) => Err(ConfigError::MissingTurnSecret),
            (true, Some(_)) => Err(ConfigError::MissingTurnUrls),
            (false, Some(_)) if ttl_secs == 0 => Err(ConfigError::ZeroTurnTtl),
            (false, Some(shared_secret)) => Ok(Some(Self {
                urls,
                shared_secret,
                ttl: Duration::from_secs(ttl_secs),
            })),
        }
    }
}
