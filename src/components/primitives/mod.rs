//! Primitive Components
//!
//! Basic building blocks: buttons and the seek slider.

pub mod button;
pub mod slider;
