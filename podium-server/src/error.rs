use thiserror::Error;

/// Failures delivering a frame to one connection.
///
/// These never travel back to the sender of a relayed message; callers log
/// them and move on to the next recipient.
#[derive(Debug, Error)]
pub enum SignalingError {
    #[error("outbound channel closed")]
    Closed,

    #[error("failed to encode control message: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("failed to mint relay credentials: {0}")]
    Mint(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("TURN urls were given without a shared secret")]
    MissingTurnSecret,

    #[error("a TURN shared secret was given without any TURN urls")]
    MissingTurnUrls,

    #[error("TURN credential lifetime must be at least one second")]
    ZeroTurnTtl,
}
