//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI: the parsed records, view selection, chart
//! series and the per-frame overlay derivation.

pub mod overlay;
pub mod record;
pub mod series;
pub mod view_mode;
