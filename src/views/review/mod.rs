mod detail;
mod summary;

pub use detail::Detail;
pub use summary::Summary;
