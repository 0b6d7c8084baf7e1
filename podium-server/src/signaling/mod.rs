mod dispatcher;
mod signaling_service;
mod ws_handler;

pub use dispatcher::*;
pub use signaling_service::*;
pub use ws_handler::*;
