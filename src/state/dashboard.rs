//! Dashboard - Playback, View and Cursor State Machine
//!
//! Owns the parsed records, the playback cursor, the active view and one
//! [`ChartSurface`] per strategy. All transitions go through [`Dashboard::handle`],
//! which updates the surfaces synchronously and returns the [`Effect`]s the shell
//! has to carry out (timer start/stop, preference writes).

use std::sync::Arc;
use std::time::Duration;

use crate::chart::cursor::{CursorSync, mirror_cursor};
use crate::chart::surface::{ChartSurface, NormalizedPoint};
use crate::domain::overlay::{OverlayState, build_overlay};
use crate::domain::record::{Record, Strategy};
use crate::domain::series::{ChartPoint, SeriesKind, build_series};
use crate::domain::view_mode::ViewMode;
use crate::error::{EmptyDatasetSnafu, Result};
use crate::eventing::dashboard_event::{DashboardEvent, Effect};
use crate::helpers::distinct::Distinct;
use crate::state::playback::{Direction, PlaybackState, TimerCommand};

pub struct Dashboard<S> {
    records: Arc<[Record]>,
    view: ViewMode,
    playback: PlaybackState,
    charts: [S; 2],
    cursor: CursorSync,
    overlay: OverlayState,
    peak_filters: [Distinct<String>; 2],
    icon_filters: [Distinct<String>; 2],
}

impl<S: ChartSurface> Dashboard<S> {
    /// Seed both charts from `records` and show the first record under `view`.
    ///
    /// `make_surface` is called once per strategy, in [`Strategy::ALL`] order.
    pub fn new(
        records: Arc<[Record]>,
        view: ViewMode,
        duration: Duration,
        mut make_surface: impl FnMut(Strategy, Vec<ChartPoint>) -> S,
    ) -> Result<Self> {
        let Some(first) = records.first() else {
            return EmptyDatasetSnafu.fail();
        };
        let overlay = build_overlay(first, view);
        let charts = Strategy::ALL
            .map(|strategy| make_surface(strategy, build_series(&records, strategy)));

        let mut dashboard = Self {
            playback: PlaybackState::new(records.len() - 1, duration),
            records,
            view,
            charts,
            cursor: CursorSync::default(),
            overlay,
            peak_filters: [Distinct::new(), Distinct::new()],
            icon_filters: [Distinct::new(), Distinct::new()],
        };
        dashboard.apply_view();
        dashboard.refresh();
        Ok(dashboard)
    }

    // ==================== Getters ====================

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    pub fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn chart(&self, strategy: Strategy) -> &S {
        &self.charts[strategy.index()]
    }

    /// Record under the playback cursor
    pub fn current_record(&self) -> &Record {
        &self.records[self.playback.current()]
    }

    // ==================== Transitions ====================

    /// Apply one event and return the effects the shell must run
    pub fn handle(&mut self, event: DashboardEvent) -> Vec<Effect> {
        match event {
            DashboardEvent::Tick => {
                // A tick can still be queued after the timer was dropped
                if self.playback.is_playing() {
                    self.playback.advance(Direction::Forward);
                    self.refresh();
                }
                Vec::new()
            }
            DashboardEvent::TogglePlayback => {
                let command = self.playback.toggle();
                match command {
                    TimerCommand::Start(interval) => {
                        tracing::info!(
                            interval_ms = interval.as_secs_f64() * 1000.0,
                            "Playback started"
                        );
                    }
                    TimerCommand::Stop => {
                        tracing::info!(index = self.playback.current(), "Playback paused");
                    }
                }
                vec![Effect::Timer(command)]
            }
            DashboardEvent::Step(direction) => {
                self.playback.advance(direction);
                self.refresh();
                Vec::new()
            }
            DashboardEvent::Seek(index) => {
                self.playback.seek(index);
                self.refresh();
                Vec::new()
            }
            DashboardEvent::SetView(view) => {
                tracing::debug!(view = %view, "Switching view");
                self.view = view;
                self.apply_view();
                self.refresh();
                vec![Effect::PersistView(view)]
            }
            DashboardEvent::PointerEntered(chart) => {
                self.cursor.enter(chart);
                Vec::new()
            }
            DashboardEvent::PointerMoved { chart, point } => {
                self.move_cursor(chart, point);
                Vec::new()
            }
            DashboardEvent::PointerLeft(chart) => {
                self.cursor.leave(chart);
                for chart in &mut self.charts {
                    chart.set_cursor(None);
                }
                Vec::new()
            }
        }
    }

    // ==================== Internals ====================

    /// Titles, axis ceiling and visible series for the current view
    fn apply_view(&mut self) {
        let view = self.view;
        let axis_max = self.records.last().map(|last| view.axis_max(last)).unwrap_or_default();
        for strategy in Strategy::ALL {
            let chart = &mut self.charts[strategy.index()];
            chart.set_title(view.title_key(strategy));
            chart.set_axis_max(axis_max);
            chart.set_active_series(SeriesKind::from(view));
        }
    }

    /// Recompute everything derived from the cursor position
    fn refresh(&mut self) {
        let record = &self.records[self.playback.current()];
        let next = build_overlay(record, self.view);

        for strategy in Strategy::ALL {
            let side = strategy.index();
            let chart = &mut self.charts[side];
            chart.set_marker(record.time);

            if let Some(text) = self.peak_filters[side].offer(next.peak(strategy).to_string()) {
                chart.set_peak_text(text);
            }

            let icons = next.icons(strategy);
            if let Some(css) = self.icon_filters[side].offer(icons.to_css()) {
                tracing::trace!(chart = strategy.chart_id(), icons = %css, "Icon stack changed");
                let slot = match strategy {
                    Strategy::Uncoordinated => &mut self.overlay.icons_left,
                    Strategy::Coordinated => &mut self.overlay.icons_right,
                };
                *slot = icons.clone();
            }
        }

        self.overlay.peak_left = next.peak_left;
        self.overlay.peak_right = next.peak_right;
    }

    fn move_cursor(&mut self, chart: Strategy, point: NormalizedPoint) {
        let Some(target) = self.cursor.mirror_target(chart) else {
            return;
        };
        for strategy in [chart, target] {
            let surface = &mut self.charts[strategy.index()];
            let position = mirror_cursor(point, surface.plot_size());
            surface.set_cursor(Some(position));
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::chart::surface::{CursorPosition, PlotSize};
    use crate::domain::record::fixtures::blank_day;

    /// Surface double that keeps the last value of every setter
    #[derive(Debug, Clone, PartialEq)]
    struct RecordingSurface {
        strategy: Strategy,
        points: usize,
        title: &'static str,
        peak: Option<String>,
        peak_writes: usize,
        series: Option<SeriesKind>,
        axis_max: Option<f64>,
        marker: Option<NaiveDateTime>,
        cursor: Option<CursorPosition>,
        size: PlotSize,
    }

    impl RecordingSurface {
        fn new(strategy: Strategy, points: Vec<ChartPoint>) -> Self {
            let size = match strategy {
                Strategy::Uncoordinated => PlotSize {
                    width: 800.0,
                    height: 300.0,
                },
                Strategy::Coordinated => PlotSize {
                    width: 400.0,
                    height: 200.0,
                },
            };
            Self {
                strategy,
                points: points.len(),
                title: "",
                peak: None,
                peak_writes: 0,
                series: None,
                axis_max: None,
                marker: None,
                cursor: None,
                size,
            }
        }
    }

    impl ChartSurface for RecordingSurface {
        fn set_title(&mut self, title_key: &'static str) {
            self.title = title_key;
        }

        fn set_peak_text(&mut self, text: &str) {
            self.peak = Some(text.to_string());
            self.peak_writes += 1;
        }

        fn set_active_series(&mut self, kind: SeriesKind) {
            self.series = Some(kind);
        }

        fn set_axis_max(&mut self, max: f64) {
            self.axis_max = Some(max);
        }

        fn set_marker(&mut self, date: NaiveDateTime) {
            self.marker = Some(date);
        }

        fn set_cursor(&mut self, cursor: Option<CursorPosition>) {
            self.cursor = cursor;
        }

        fn plot_size(&self) -> PlotSize {
            self.size
        }
    }

    /// Drives `Tick` events from a manually advanced clock
    #[derive(Default)]
    struct VirtualTimer {
        interval: Option<Duration>,
        starts: usize,
        stops: usize,
    }

    impl VirtualTimer {
        fn apply(&mut self, effects: Vec<Effect>) {
            for effect in effects {
                match effect {
                    Effect::Timer(TimerCommand::Start(interval)) => {
                        assert!(self.interval.is_none(), "second timer started");
                        self.interval = Some(interval);
                        self.starts += 1;
                    }
                    Effect::Timer(TimerCommand::Stop) => {
                        self.interval = None;
                        self.stops += 1;
                    }
                    Effect::PersistView(_) => {}
                }
            }
        }

        fn run_for(&mut self, elapsed: Duration, dashboard: &mut Dashboard<RecordingSurface>) {
            let Some(interval) = self.interval else {
                return;
            };
            let ticks = elapsed.as_nanos() / interval.as_nanos().max(1);
            for _ in 0..ticks {
                let effects = dashboard.handle(DashboardEvent::Tick);
                self.apply(effects);
            }
        }
    }

    fn sample_day(len: u32) -> Vec<Record> {
        let mut records = blank_day(len);
        for (i, record) in records.iter_mut().enumerate() {
            let load = 100.0 + i as f64;
            record.bldg_uncoord = load;
            record.bldg_coord = load - 20.0;
            record.bldg_ev_uncoord = load + 30.0;
            record.bldg_ev_ess_coord = load + 10.0;
            record.peak_running_uncoord = 200.0 + (i / 10) as f64;
            record.peak_running_coord = 180.0 + (i / 10) as f64;
            record.peak_ev_coord = 250.0;
            record.peak_ess_coord = 230.0;
            if i % 3 == 0 {
                record.rtu_on_count_uncoord = 1.0;
                record.rtu1_state_uncoord = 1.0;
            }
            if i % 4 == 0 {
                record.port1 = 7.2;
            }
        }
        records
    }

    fn dashboard_with(records: Vec<Record>, view: ViewMode) -> Dashboard<RecordingSurface> {
        Dashboard::new(records.into(), view, Duration::from_secs(60), RecordingSurface::new)
            .expect("dataset is not empty")
    }

    #[test]
    fn test_empty_dataset_is_rejected() {
        let result = Dashboard::new(
            Vec::<Record>::new().into(),
            ViewMode::Rtu,
            Duration::from_secs(60),
            RecordingSurface::new,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_initial_frame_shows_first_record() {
        let mut records = blank_day(1439);
        records[0].peak_running_uncoord = 512.34;
        records[0].peak_running_coord = 401.0;
        records[0].rtu_on_count_uncoord = 1.0;
        records[0].rtu3_state_uncoord = 1.0;
        records[1438].peak_running_uncoord = 640.0;

        let dashboard = dashboard_with(records.clone(), ViewMode::Rtu);

        assert_eq!(dashboard.playback().current(), 0);
        assert_eq!(dashboard.playback().max(), 1438);
        assert_eq!(dashboard.overlay().peak_left, "PEAK DEMAND: 512.3 kW");
        assert_eq!(dashboard.overlay().peak_right, "PEAK DEMAND: 401.0 kW");
        assert_eq!(dashboard.overlay().icons_left.names(), vec!["rtu3", "base"]);
        assert_eq!(dashboard.overlay().icons_right.names(), vec!["base"]);

        for strategy in Strategy::ALL {
            let chart = dashboard.chart(strategy);
            assert_eq!(chart.points, 1439);
            assert_eq!(chart.title, ViewMode::Rtu.title_key(strategy));
            assert_eq!(chart.axis_max, Some(640.0));
            assert_eq!(chart.series, Some(SeriesKind::Rtu));
            assert_eq!(chart.marker, Some(records[0].time));
        }
        assert_eq!(
            dashboard.chart(Strategy::Uncoordinated).peak.as_deref(),
            Some("PEAK DEMAND: 512.3 kW")
        );
    }

    #[test]
    fn test_seek_matches_overlay_builder() {
        let records = sample_day(40);
        let mut dashboard = dashboard_with(records.clone(), ViewMode::Ev);

        for index in [39, 0, 7, 12, 12, 33] {
            dashboard.handle(DashboardEvent::Seek(index));
            assert_eq!(dashboard.overlay(), &build_overlay(&records[index], ViewMode::Ev));
            assert_eq!(
                dashboard.chart(Strategy::Coordinated).marker,
                Some(records[index].time)
            );
        }
    }

    #[test]
    fn test_step_wraps_at_bounds() {
        let records = sample_day(10);
        let mut dashboard = dashboard_with(records.clone(), ViewMode::Rtu);

        dashboard.handle(DashboardEvent::Step(Direction::Backward));
        assert_eq!(dashboard.playback().current(), 9);
        assert_eq!(dashboard.overlay(), &build_overlay(&records[9], ViewMode::Rtu));

        dashboard.handle(DashboardEvent::Step(Direction::Forward));
        assert_eq!(dashboard.playback().current(), 0);
    }

    #[test]
    fn test_toggle_drives_single_timer() {
        let mut dashboard = dashboard_with(sample_day(1439), ViewMode::Rtu);
        let mut timer = VirtualTimer::default();

        timer.apply(dashboard.handle(DashboardEvent::TogglePlayback));
        let interval = timer.interval.expect("timer running");
        assert_eq!(interval, Duration::from_secs(60).div_f64(1438.0));

        timer.run_for(interval * 10, &mut dashboard);
        assert_eq!(dashboard.playback().current(), 10);

        timer.apply(dashboard.handle(DashboardEvent::TogglePlayback));
        assert!(timer.interval.is_none());
        timer.run_for(Duration::from_secs(5), &mut dashboard);
        assert_eq!(dashboard.playback().current(), 10);

        // A tick already in flight when paused changes nothing
        dashboard.handle(DashboardEvent::Tick);
        assert_eq!(dashboard.playback().current(), 10);

        timer.apply(dashboard.handle(DashboardEvent::TogglePlayback));
        timer.apply(dashboard.handle(DashboardEvent::TogglePlayback));
        assert_eq!(timer.starts, 2);
        assert_eq!(timer.stops, 2);
    }

    #[test]
    fn test_full_pass_wraps_to_start() {
        let mut dashboard = dashboard_with(sample_day(20), ViewMode::Rtu);
        let mut timer = VirtualTimer::default();

        timer.apply(dashboard.handle(DashboardEvent::TogglePlayback));
        let interval = timer.interval.expect("timer running");
        timer.run_for(interval * 20, &mut dashboard);
        assert_eq!(dashboard.playback().current(), 0);
    }

    #[test]
    fn test_set_view_is_idempotent() {
        let records = sample_day(30);
        let mut once = dashboard_with(records.clone(), ViewMode::Rtu);
        let mut twice = dashboard_with(records.clone(), ViewMode::Rtu);
        once.handle(DashboardEvent::Seek(17));
        twice.handle(DashboardEvent::Seek(17));

        let effects = once.handle(DashboardEvent::SetView(ViewMode::Ev));
        assert_eq!(effects, vec![Effect::PersistView(ViewMode::Ev)]);
        twice.handle(DashboardEvent::SetView(ViewMode::Ev));
        twice.handle(DashboardEvent::SetView(ViewMode::Ev));

        assert_eq!(once.overlay(), twice.overlay());
        assert_eq!(once.view(), twice.view());
        for strategy in Strategy::ALL {
            let (a, b) = (once.chart(strategy), twice.chart(strategy));
            assert_eq!(a.title, b.title);
            assert_eq!(a.axis_max, b.axis_max);
            assert_eq!(a.series, b.series);
            assert_eq!(a.peak, b.peak);
            assert_eq!(a.marker, b.marker);
        }
    }

    #[test]
    fn test_ev_view_uses_ev_columns() {
        let records = sample_day(30);
        let mut dashboard = dashboard_with(records, ViewMode::Rtu);
        dashboard.handle(DashboardEvent::SetView(ViewMode::Ev));

        let left = dashboard.chart(Strategy::Uncoordinated);
        assert_eq!(left.title, "chart-title-base-ev");
        assert_eq!(left.axis_max, Some(250.0));
        assert_eq!(left.series, Some(SeriesKind::Ev));
        assert_eq!(dashboard.overlay().peak_left, "PEAK DEMAND: 250.0 kW");
        assert_eq!(dashboard.overlay().peak_right, "PEAK DEMAND: 230.0 kW");
        assert_eq!(
            dashboard.overlay().icons_right.names(),
            vec!["storage", "tesla-x", "tesla-3-translucent", "charger", "base"]
        );
    }

    #[test]
    fn test_peak_text_pushed_only_on_change() {
        // Peak values step every 10 records
        let mut dashboard = dashboard_with(sample_day(30), ViewMode::Rtu);
        assert_eq!(dashboard.chart(Strategy::Uncoordinated).peak_writes, 1);

        for _ in 0..9 {
            dashboard.handle(DashboardEvent::Step(Direction::Forward));
        }
        assert_eq!(dashboard.chart(Strategy::Uncoordinated).peak_writes, 1);

        dashboard.handle(DashboardEvent::Step(Direction::Forward));
        assert_eq!(dashboard.chart(Strategy::Uncoordinated).peak_writes, 2);
        assert_eq!(
            dashboard.chart(Strategy::Uncoordinated).peak.as_deref(),
            Some("PEAK DEMAND: 201.0 kW")
        );
    }

    #[test]
    fn test_cursor_is_mirrored_from_active_chart() {
        let mut dashboard = dashboard_with(sample_day(10), ViewMode::Rtu);
        let point = NormalizedPoint { x: 0.25, y: 0.75 };

        // Not active yet
        dashboard.handle(DashboardEvent::PointerMoved {
            chart: Strategy::Uncoordinated,
            point,
        });
        assert_eq!(dashboard.chart(Strategy::Coordinated).cursor, None);

        dashboard.handle(DashboardEvent::PointerEntered(Strategy::Uncoordinated));
        dashboard.handle(DashboardEvent::PointerMoved {
            chart: Strategy::Uncoordinated,
            point,
        });
        assert_eq!(
            dashboard.chart(Strategy::Coordinated).cursor,
            Some(CursorPosition { x: 100.0, y: 50.0 })
        );
        assert_eq!(
            dashboard.chart(Strategy::Uncoordinated).cursor,
            Some(CursorPosition { x: 200.0, y: 75.0 })
        );

        // Moves reported by the passive chart are ignored
        dashboard.handle(DashboardEvent::PointerMoved {
            chart: Strategy::Coordinated,
            point: NormalizedPoint { x: 1.0, y: 1.0 },
        });
        assert_eq!(
            dashboard.chart(Strategy::Coordinated).cursor,
            Some(CursorPosition { x: 100.0, y: 50.0 })
        );

        dashboard.handle(DashboardEvent::PointerLeft(Strategy::Uncoordinated));
        for strategy in Strategy::ALL {
            assert_eq!(dashboard.chart(strategy).cursor, None);
        }
    }

    #[test]
    fn test_leave_reported_after_enter_of_other_chart() {
        let mut dashboard = dashboard_with(sample_day(10), ViewMode::Rtu);
        dashboard.handle(DashboardEvent::PointerEntered(Strategy::Uncoordinated));

        // Jumping straight across: the new chart's enter is handled before the old leave
        dashboard.handle(DashboardEvent::PointerEntered(Strategy::Coordinated));
        dashboard.handle(DashboardEvent::PointerLeft(Strategy::Uncoordinated));
        dashboard.handle(DashboardEvent::PointerMoved {
            chart: Strategy::Coordinated,
            point: NormalizedPoint { x: 0.5, y: 0.5 },
        });

        assert_eq!(
            dashboard.chart(Strategy::Coordinated).cursor,
            Some(CursorPosition { x: 200.0, y: 100.0 })
        );
        assert_eq!(
            dashboard.chart(Strategy::Uncoordinated).cursor,
            Some(CursorPosition { x: 400.0, y: 150.0 })
        );

        dashboard.handle(DashboardEvent::PointerLeft(Strategy::Coordinated));
        for strategy in Strategy::ALL {
            assert_eq!(dashboard.chart(strategy).cursor, None);
        }
    }

    #[test]
    fn test_surface_order_and_strategy() {
        let dashboard = dashboard_with(sample_day(5), ViewMode::Rtu);
        assert_eq!(
            dashboard.chart(Strategy::Uncoordinated).strategy,
            Strategy::Uncoordinated
        );
        assert_eq!(dashboard.chart(Strategy::Coordinated).strategy, Strategy::Coordinated);
    }
}
