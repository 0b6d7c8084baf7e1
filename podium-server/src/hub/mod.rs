mod hub;
mod room;
mod session;

pub use hub::*;
pub use room::*;
pub use session::*;
