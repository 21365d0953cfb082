//! Chart Layer
//!
//! Surface trait, renderable model, scales and cursor mirroring for the two
//! strategy charts.

pub mod cursor;
pub mod model;
pub mod scale;
pub mod surface;

pub use model::{ChartModel, PlotRect};
pub use surface::{ChartSurface, CursorPosition, NormalizedPoint, PlotSize};
