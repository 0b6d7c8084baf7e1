use crate::error::RelayError;
use async_trait::async_trait;
use podium_core::{IceConfig, IceServerConfig};

/// Source of the ICE server list clients use to reach each other.
///
/// Implementations may mint short-lived relay credentials on every call.
#[async_trait]
pub trait RelayCredentials: Send + Sync {
    async fn ice_config(&self) -> Result<IceConfig, RelayError>;
}

/// Fixed ICE server list with no minted credentials.
#[derive(Debug, Clone, Default)]
pub struct StaticIceServers {
    ice_servers: Vec<IceServerConfig>,
}

impl StaticIceServers {
    pub fn new(ice_servers: Vec<IceServerConfig>) -> Self {
        Self { ice_servers }
    }

    /// STUN-only list; each url becomes its own entry.
    pub fn stun(urls: &[String]) -> Self {
        Self::new(
            urls.iter()
                .map(|url| IceServerConfig::open(vec![url.clone()]))
                .collect(),
        )
    }
}

#[async_trait]
impl RelayCredentials for StaticIceServers {
    async fn ice_config(&self) -> Result<IceConfig, RelayError> {
        Ok(IceConfig {
            ice_servers: self.ice_servers.clone(),
        })
    }
}
