pub mod review_scope;

pub use review_scope::{ReviewId, ReviewScope};
