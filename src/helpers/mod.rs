//! Helper Utilities
//!
//! Common utilities used across the application.

pub mod distinct;
mod fs;

pub use fs::*;
