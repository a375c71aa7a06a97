mod comment;
mod review;

pub use comment::*;
pub use review::*;
