//! Series - Per-Chart Points Seeded From the Record Sequence

use chrono::NaiveDateTime;

use crate::domain::record::{Record, Strategy};
use crate::domain::view_mode::ViewMode;

/// The two line series every chart carries; exactly one is visible at a time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    #[default]
    Rtu,
    Ev,
}

impl From<ViewMode> for SeriesKind {
    fn from(view: ViewMode) -> Self {
        match view {
            ViewMode::Rtu => SeriesKind::Rtu,
            ViewMode::Ev => SeriesKind::Ev,
        }
    }
}

/// A single chart point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub date: NaiveDateTime,
    pub rtu: f64,
    pub ev: f64,
}

impl ChartPoint {
    pub fn value(&self, kind: SeriesKind) -> f64 {
        match kind {
            SeriesKind::Rtu => self.rtu,
            SeriesKind::Ev => self.ev,
        }
    }
}

/// Build the fixed-length point array for one strategy's chart
pub fn build_series(records: &[Record], strategy: Strategy) -> Vec<ChartPoint> {
    records
        .iter()
        .map(|record| ChartPoint {
            date: record.time,
            rtu: record.building_load(strategy),
            ev: record.building_load_with_ev(strategy),
        })
        .collect()
}
