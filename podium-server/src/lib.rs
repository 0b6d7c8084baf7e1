mod config;
mod error;
mod hub;
mod relay;
mod router;
mod signaling;

pub use config::*;
pub use error::*;
pub use hub::*;
pub use relay::*;
pub use router::*;
pub use signaling::*;
