//! Cursor Mirroring
//!
//! Only the chart under the pointer reports positions. Each report is replayed onto
//! the other chart so both charts appear to share one cursor.

use crate::chart::surface::{CursorPosition, NormalizedPoint, PlotSize};
use crate::domain::record::Strategy;

/// Map a normalized pointer position onto a plot of `target` size
pub fn mirror_cursor(point: NormalizedPoint, target: PlotSize) -> CursorPosition {
    CursorPosition {
        x: point.x * target.width,
        y: target.height - point.y * target.height,
    }
}

/// Inverse of [`mirror_cursor`]: normalize a plot position on a plot of `size`
pub fn normalize_cursor(position: CursorPosition, size: PlotSize) -> NormalizedPoint {
    let x = if size.width > 0.0 {
        position.x / size.width
    } else {
        0.0
    };
    let y = if size.height > 0.0 {
        1.0 - position.y / size.height
    } else {
        0.0
    };
    NormalizedPoint {
        x: x.clamp(0.0, 1.0),
        y: y.clamp(0.0, 1.0),
    }
}

/// Tracks which chart is currently hovered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorSync {
    active: Option<Strategy>,
}

impl CursorSync {
    pub fn active(&self) -> Option<Strategy> {
        self.active
    }

    pub fn enter(&mut self, chart: Strategy) {
        self.active = Some(chart);
    }

    /// Unset `chart` as active. A leave that arrives after another chart was
    /// entered keeps the newer chart active.
    pub fn leave(&mut self, chart: Strategy) {
        if self.active == Some(chart) {
            self.active = None;
        }
    }

    /// Chart that should mirror a move reported by `source`, if `source` is active
    pub fn mirror_target(&self, source: Strategy) -> Option<Strategy> {
        (self.active == Some(source)).then(|| source.other())
    }
}
