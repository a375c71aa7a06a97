mod detail;

pub use detail::Detail;
