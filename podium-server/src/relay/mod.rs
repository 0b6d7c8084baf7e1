mod relay_credentials;
mod turn_rest;

pub use relay_credentials::*;
pub use turn_rest::*;
