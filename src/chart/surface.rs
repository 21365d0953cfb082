//! ChartSurface - What the Dashboard Needs From a Chart
//!
//! The dashboard never touches chart internals. It drives each chart through this
//! small surface, which the gpui-backed [`ChartModel`](super::model::ChartModel)
//! implements and tests replace with a recording double.

use chrono::NaiveDateTime;

use crate::domain::series::SeriesKind;

/// Plot area size in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlotSize {
    pub width: f32,
    pub height: f32,
}

/// Cursor location in plot pixels, origin at the top-left corner
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorPosition {
    pub x: f32,
    pub y: f32,
}

/// Pointer location as fractions of the plot, `x` from the left and `y` from the bottom
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NormalizedPoint {
    pub x: f32,
    pub y: f32,
}

/// One chart instance as seen by the dashboard state machine
pub trait ChartSurface {
    /// Title translation key
    fn set_title(&mut self, title_key: &'static str);

    fn set_peak_text(&mut self, text: &str);

    /// Show `kind` and hide the other series
    fn set_active_series(&mut self, kind: SeriesKind);

    /// Value-axis ceiling (the floor is always 0)
    fn set_axis_max(&mut self, max: f64);

    /// Move the vertical time marker
    fn set_marker(&mut self, date: NaiveDateTime);

    /// Show the cursor at a plot position, or hide it
    fn set_cursor(&mut self, cursor: Option<CursorPosition>);

    fn plot_size(&self) -> PlotSize;
}
