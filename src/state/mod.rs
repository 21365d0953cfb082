//! State - Dashboard and GPUI Entity State Modules
//!
//! `dashboard` and `playback` are plain Rust state machines; `preferences` and
//! `i18n_state` back the global GPUI entities.

pub mod dashboard;
pub mod i18n_state;
pub mod playback;
pub mod preferences;
