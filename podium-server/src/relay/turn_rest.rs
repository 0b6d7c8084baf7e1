use crate::config::TurnConfig;
use crate::error::RelayError;
use crate::relay::RelayCredentials;
use async_trait::async_trait;
use podium_core::{IceConfig, IceServerConfig};
use tracing::debug;

/// Mints time-limited TURN credentials from a secret shared with the TURN
/// server (the "TURN REST API" scheme: the username is the expiry timestamp,
/// the credential an HMAC of it).
pub struct TurnRestCredentials {
    stun_urls: Vec<String>,
    turn: TurnConfig,
}

impl TurnRestCredentials {
    pub fn new(stun_urls: Vec<String>, turn: TurnConfig) -> Self {
        Self { stun_urls, turn }
    }
}

#[async_trait]
impl RelayCredentials for TurnRestCredentials {
    async fn ice_config(&self) -> Result<IceConfig, RelayError> {
        let (username, credential) =
            turn::auth::generate_long_term_credentials(&self.turn.shared_secret, self.turn.ttl)
                .map_err(|e| RelayError::Mint(e.to_string()))?;
        debug!("Issued TURN credentials expiring at {}", username);

        let mut ice_servers: Vec<_> = self
            .stun_urls
            .iter()
            .map(|url| IceServerConfig::open(vec![url.clone()]))
            .collect();
        ice_servers.push(IceServerConfig {
            urls: self.turn.urls.clone(),
            username: Some(username),
            credential: Some(credential),
        });

        Ok(IceConfig { ice_servers })
    }
}
