//! ChartModel - Renderable Chart State
//!
//! Holds everything the chart view paints. The dashboard writes to it through
//! [`ChartSurface`]; the view reads it back during render and records the plot's
//! on-screen rectangle while painting.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::chart::cursor::normalize_cursor;
use crate::chart::scale::PlotScale;
use crate::chart::surface::{ChartSurface, CursorPosition, NormalizedPoint, PlotSize};
use crate::domain::record::Strategy;
use crate::domain::series::{ChartPoint, SeriesKind};
use crate::utils::format::format_kw;

/// Peak label shown before the first value arrives
const PEAK_PLACEHOLDER: &str = "PEAK DEMAND";

/// Plot rectangle in window pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlotRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PlotRect {
    pub fn size(&self) -> PlotSize {
        PlotSize {
            width: self.width,
            height: self.height,
        }
    }

    /// Window point relative to the plot origin, `None` when outside
    pub fn local(&self, x: f32, y: f32) -> Option<CursorPosition> {
        let local = CursorPosition {
            x: x - self.x,
            y: y - self.y,
        };
        let inside =
            (0.0..=self.width).contains(&local.x) && (0.0..=self.height).contains(&local.y);
        inside.then_some(local)
    }
}

/// State of one rendered chart
#[derive(Debug, Clone)]
pub struct ChartModel {
    strategy: Strategy,
    points: Arc<[ChartPoint]>,
    title_key: &'static str,
    peak_text: String,
    series: SeriesKind,
    axis_max: f64,
    marker: Option<NaiveDateTime>,
    cursor: Option<CursorPosition>,
    plot: Rc<Cell<PlotRect>>,
}

impl ChartModel {
    /// Seed a chart with its fixed point array
    pub fn new(strategy: Strategy, points: Vec<ChartPoint>) -> Self {
        Self {
            strategy,
            points: points.into(),
            title_key: "",
            peak_text: PEAK_PLACEHOLDER.to_string(),
            series: SeriesKind::default(),
            axis_max: 0.0,
            marker: None,
            cursor: None,
            plot: Rc::new(Cell::new(PlotRect::default())),
        }
    }

    // ==================== Getters ====================

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    pub fn title_key(&self) -> &'static str {
        self.title_key
    }

    pub fn peak_text(&self) -> &str {
        &self.peak_text
    }

    pub fn series(&self) -> SeriesKind {
        self.series
    }

    pub fn axis_max(&self) -> f64 {
        self.axis_max
    }

    pub fn marker(&self) -> Option<NaiveDateTime> {
        self.marker
    }

    pub fn cursor(&self) -> Option<CursorPosition> {
        self.cursor
    }

    /// Shared cell the view writes the painted plot rectangle into
    pub fn plot_cell(&self) -> Rc<Cell<PlotRect>> {
        self.plot.clone()
    }

    /// Scale for the current plot size and axis ceiling
    pub fn scale(&self) -> Option<PlotScale> {
        PlotScale::for_points(&self.points, self.axis_max, self.plot_size())
    }

    /// Normalize a window-space pointer position, `None` outside the plot
    pub fn normalize_window_point(&self, x: f32, y: f32) -> Option<NormalizedPoint> {
        let rect = self.plot.get();
        rect.local(x, y).map(|local| normalize_cursor(local, rect.size()))
    }

    /// Tooltip for the visible series at the cursor, e.g. `312.4 kW`
    pub fn tooltip(&self) -> Option<String> {
        let cursor = self.cursor?;
        let index = self.scale()?.nearest_index(&self.points, cursor.x)?;
        Some(format_kw(self.points[index].value(self.series)))
    }
}

impl ChartSurface for ChartModel {
    fn set_title(&mut self, title_key: &'static str) {
        self.title_key = title_key;
    }

    fn set_peak_text(&mut self, text: &str) {
        self.peak_text = text.to_string();
    }

    fn set_active_series(&mut self, kind: SeriesKind) {
        self.series = kind;
    }

    fn set_axis_max(&mut self, max: f64) {
        self.axis_max = max;
    }

    fn set_marker(&mut self, date: NaiveDateTime) {
        self.marker = Some(date);
    }

    fn set_cursor(&mut self, cursor: Option<CursorPosition>) {
        self.cursor = cursor;
    }

    fn plot_size(&self) -> PlotSize {
        self.plot.get().size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::fixtures::blank_day;
    use crate::domain::series::build_series;

    fn model() -> ChartModel {
        let mut records = blank_day(1439);
        records[719].bldg_coord = 123.44;
        records[719].bldg_ev_ess_coord = 150.0;
        let mut model = ChartModel::new(
            Strategy::Coordinated,
            build_series(&records, Strategy::Coordinated),
        );
        model.plot_cell().set(PlotRect {
            x: 50.0,
            y: 20.0,
            width: 1000.0,
            height: 200.0,
        });
        model.set_axis_max(400.0);
        model
    }

    #[test]
    fn test_initial_peak_placeholder() {
        assert_eq!(model().peak_text(), "PEAK DEMAND");
    }

    #[test]
    fn test_normalize_window_point() {
        let model = model();
        assert_eq!(
            model.normalize_window_point(300.0, 70.0),
            Some(NormalizedPoint { x: 0.25, y: 0.75 })
        );
        assert_eq!(model.normalize_window_point(10.0, 70.0), None);
    }

    #[test]
    fn test_tooltip_follows_series() {
        let mut model = model();
        assert_eq!(model.tooltip(), None);

        model.set_cursor(Some(CursorPosition { x: 500.0, y: 10.0 }));
        assert_eq!(model.tooltip().as_deref(), Some("123.4 kW"));

        model.set_active_series(SeriesKind::Ev);
        assert_eq!(model.tooltip().as_deref(), Some("150.0 kW"));
    }
}
