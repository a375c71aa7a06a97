pub mod comment;
pub mod review;
