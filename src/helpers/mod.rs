pub(crate) mod json;
pub mod password;

pub use json::*;
