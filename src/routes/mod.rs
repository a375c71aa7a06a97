pub mod comment;
pub mod health_checks;
pub mod review;

pub use health_checks::*;
