pub mod format;
pub mod lenient;
