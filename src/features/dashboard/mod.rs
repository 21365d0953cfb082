//! Dashboard Feature
//!
//! Playback page with the two strategy charts and their building overlays.

pub mod chart_view;
pub mod controller;
pub mod overlay_view;
pub mod page;
