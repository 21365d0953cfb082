//! Service Layer
//!
//! I/O that runs off the UI thread. The only service is the one-shot dataset load.

pub mod loader;
