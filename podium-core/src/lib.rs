pub mod field;
pub mod model;

pub use field::extract_field;
pub use model::*;
