pub mod format;
pub mod sampling;
