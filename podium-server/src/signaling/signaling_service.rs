use crate::error::RelayError;
use crate::hub::Hub;
use crate::relay::RelayCredentials;
use podium_core::IceConfig;
use std::sync::Arc;

struct SignalingInner {
    hub: Hub,
    relay: Arc<dyn RelayCredentials>,
}

/// Shared state handed to every HTTP and WebSocket handler.
#[derive(Clone)]
pub struct SignalingService {
    inner: Arc<SignalingInner>,
}

impl SignalingService {
    pub fn new(hub: Hub, relay: Arc<dyn RelayCredentials>) -> Self {
        Self {
            inner: Arc::new(SignalingInner { hub, relay }),
        }
    }

    pub fn hub(&self) -> &Hub {
        &self.inner.hub
    }

    pub async fn ice_config(&self) -> Result<IceConfig, RelayError> {
        self.inner.relay.ice_config().await
    }
}
