mod frame;
mod ice;
mod session;
mod signaling;

pub use frame::Frame;
pub use ice::{IceConfig, IceServerConfig};
pub use session::SessionId;
pub use signaling::{ControlMessage, ErrorReason, SignalKind};
