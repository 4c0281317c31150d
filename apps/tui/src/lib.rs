// Export our modules for use in binaries and tests
pub mod config;
pub mod data;
pub mod domain;
pub mod favorites;
pub mod logging;
pub mod map;

pub use domain::{CenterFallback, Segment};
