//! RTU Dashboard Library
//!
//! Replays one day of minute-resolution building load data for two control
//! strategies side by side: rooftop HVAC units (RTUs) running uncoordinated versus
//! coordinated, optionally with EV charging and energy storage.

pub mod app;
pub mod chart;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
