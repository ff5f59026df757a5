#[cfg(feature = "chrono")]
pub mod chrono;
pub mod core;
pub mod fixture;
