//! PlotScale - Data to Pixel Mapping

use chrono::{NaiveDateTime, Timelike};

use crate::chart::surface::PlotSize;
use crate::domain::series::ChartPoint;

/// Linear date/value scale for one plot area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotScale {
    start: NaiveDateTime,
    end: NaiveDateTime,
    y_max: f64,
    size: PlotSize,
}

impl PlotScale {
    /// Scale spanning the first to the last point. Returns `None` without points.
    pub fn for_points(points: &[ChartPoint], y_max: f64, size: PlotSize) -> Option<Self> {
        let start = points.first()?.date;
        let end = points.last()?.date;
        Some(Self {
            start,
            end,
            y_max,
            size,
        })
    }

    fn span_seconds(&self) -> f64 {
        (self.end - self.start).num_seconds() as f64
    }

    /// Horizontal pixel for `date`
    pub fn x_for(&self, date: NaiveDateTime) -> f32 {
        let span = self.span_seconds();
        if span <= 0.0 {
            return 0.0;
        }
        let offset = (date - self.start).num_seconds() as f64;
        ((offset / span) * self.size.width as f64) as f32
    }

    /// Vertical pixel for `value`, clamped to the plot
    pub fn y_for(&self, value: f64) -> f32 {
        if self.y_max <= 0.0 {
            return self.size.height;
        }
        let ratio = (value / self.y_max).clamp(0.0, 1.0);
        (self.size.height as f64 * (1.0 - ratio)) as f32
    }

    /// Index of the point whose date lies nearest to pixel `x`
    pub fn nearest_index(&self, points: &[ChartPoint], x: f32) -> Option<usize> {
        if points.is_empty() {
            return None;
        }
        let fraction = if self.size.width > 0.0 {
            (x / self.size.width).clamp(0.0, 1.0) as f64
        } else {
            0.0
        };
        let offset =
            chrono::Duration::milliseconds((self.span_seconds() * fraction * 1000.0) as i64);
        let target = self.start + offset;

        let after = points.partition_point(|p| p.date < target);
        let candidates = [after.checked_sub(1), Some(after).filter(|&i| i < points.len())];
        candidates.into_iter().flatten().min_by_key(|&i| {
            (points[i].date - target).num_milliseconds().abs()
        })
    }

    /// Whole-hour ticks every `step` hours inside the span, as `(x, hour)`
    pub fn hour_ticks(&self, step: u32) -> Vec<(f32, u32)> {
        let step = step.max(1);
        let mut ticks = Vec::new();

        let Some(first) = self
            .start
            .with_minute(0)
            .and_then(|t| t.with_second(0))
            .and_then(|t| t.with_nanosecond(0))
        else {
            return ticks;
        };

        let mut tick = if first < self.start {
            first + chrono::Duration::hours(1)
        } else {
            first
        };
        while tick <= self.end {
            if tick.hour() % step == 0 {
                ticks.push((self.x_for(tick), tick.hour()));
            }
            tick += chrono::Duration::hours(1);
        }
        ticks
    }

    /// `count` evenly spaced value gridlines above zero, as `(y, value)`
    pub fn value_ticks(&self, count: usize) -> Vec<(f32, f64)> {
        if count == 0 || self.y_max <= 0.0 {
            return Vec::new();
        }
        (0..=count)
            .map(|i| {
                let value = self.y_max * i as f64 / count as f64;
                (self.y_for(value), value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::fixtures::blank_day;
    use crate::domain::record::Strategy;
    use crate::domain::series::build_series;

    fn scale(len: u32) -> (Vec<ChartPoint>, PlotScale) {
        let points = build_series(&blank_day(len), Strategy::Uncoordinated);
        let size = PlotSize {
            width: 1000.0,
            height: 200.0,
        };
        let scale = PlotScale::for_points(&points, 400.0, size).expect("points");
        (points, scale)
    }

    #[test]
    fn test_x_spans_width() {
        let (points, scale) = scale(1439);
        assert_eq!(scale.x_for(points[0].date), 0.0);
        assert!((scale.x_for(points[1438].date) - 1000.0).abs() < 1e-3);
        assert!((scale.x_for(points[719].date) - 500.0).abs() < 1e-3);
    }

    #[test]
    fn test_y_is_inverted_and_clamped() {
        let (_, scale) = scale(10);
        assert_eq!(scale.y_for(0.0), 200.0);
        assert_eq!(scale.y_for(400.0), 0.0);
        assert_eq!(scale.y_for(100.0), 150.0);
        assert_eq!(scale.y_for(900.0), 0.0);
    }

    #[test]
    fn test_nearest_index() {
        let (points, scale) = scale(1439);
        assert_eq!(scale.nearest_index(&points, 0.0), Some(0));
        assert_eq!(scale.nearest_index(&points, 500.0), Some(719));
        assert_eq!(scale.nearest_index(&points, 2000.0), Some(1438));
        assert_eq!(scale.nearest_index(&[], 10.0), None);
    }

    #[test]
    fn test_hour_ticks_every_three_hours() {
        let (_, scale) = scale(1439);
        let hours: Vec<u32> = scale.hour_ticks(3).into_iter().map(|(_, h)| h).collect();
        assert_eq!(hours, vec![0, 3, 6, 9, 12, 15, 18, 21]);
    }

    #[test]
    fn test_value_ticks() {
        let (_, scale) = scale(10);
        let ticks = scale.value_ticks(4);
        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks[0], (200.0, 0.0));
        assert_eq!(ticks[4], (0.0, 400.0));
    }
}
