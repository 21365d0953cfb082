//! Dashboard Page
//!
//! Two strategy charts side by side, each with its building illustration, under a
//! playback bar. Keyboard actions, button clicks, slider drags, pointer motion and
//! timer ticks all become [`DashboardEvent`]s fed to the [`Dashboard`].

use std::path::PathBuf;
use std::sync::Arc;

use gpui::{
    actions, div, prelude::*, px, AnyElement, ClickEvent, Context, FocusHandle, InteractiveElement,
    IntoElement, MouseMoveEvent, ParentElement, Render, SharedString, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::chart::model::ChartModel;
use crate::chart::surface::NormalizedPoint;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::slider::Slider;
use crate::domain::record::{Record, Strategy};
use crate::domain::view_mode::ViewMode;
use crate::error::Result;
use crate::eventing::dashboard_event::DashboardEvent;
use crate::features::dashboard::chart_view::ChartView;
use crate::features::dashboard::controller::{spawn_load, DashboardController};
use crate::features::dashboard::overlay_view::OverlayView;
use crate::i18n::{t, Locale};
use crate::state::dashboard::Dashboard;
use crate::state::playback::Direction;
use crate::theme::colors::DashboardColors;
use crate::theme::typography::Typography;
use crate::utils::format::format_clock;

/// Key context for the dashboard bindings
pub const KEY_CONTEXT: &str = "Dashboard";

actions!(
    dashboard,
    [TogglePlayback, StepForward, StepBackward, ShowRtuView, ShowEvView]
);

/// Data file lifecycle. Leaves `Pending` exactly once.
enum LoadState {
    Pending,
    Ready(Box<Dashboard<ChartModel>>),
    Failed(SharedString),
}

/// Dashboard page component
pub struct DashboardPage {
    entities: AppEntities,
    focus_handle: FocusHandle,
    controller: DashboardController,
    state: LoadState,
}

impl DashboardPage {
    pub fn new(
        entities: AppEntities,
        data_path: PathBuf,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        let focus_handle = cx.focus_handle();
        focus_handle.focus(window);

        spawn_load(data_path, cx);

        Self {
            entities,
            focus_handle,
            controller: DashboardController::new(),
            state: LoadState::Pending,
        }
    }

    /// Accept the background load result
    pub(crate) fn finish_load(&mut self, result: Result<Arc<[Record]>>, cx: &mut Context<Self>) {
        if !matches!(self.state, LoadState::Pending) {
            tracing::warn!("Dataset already loaded, ignoring second result");
            return;
        }

        let prefs = self.entities.preferences.read(cx);
        let view = prefs.view_mode();
        let duration = prefs.playback_duration();

        let dashboard =
            result.and_then(|records| Dashboard::new(records, view, duration, ChartModel::new));
        self.state = match dashboard {
            Ok(dashboard) => {
                tracing::info!(
                    view = %view,
                    records = dashboard.records().len(),
                    "Dashboard ready"
                );
                LoadState::Ready(Box::new(dashboard))
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load dataset");
                LoadState::Failed(e.to_string().into())
            }
        };
        cx.notify();
    }

    /// Feed one event to the dashboard and run its effects. No-op until loaded.
    pub fn dispatch(&mut self, event: DashboardEvent, cx: &mut Context<Self>) {
        let LoadState::Ready(dashboard) = &mut self.state else {
            return;
        };
        let effects = dashboard.handle(event);
        self.controller.run_effects(effects, cx);
        cx.notify();
    }

    fn seek_to_fraction(&mut self, fraction: f32, cx: &mut Context<Self>) {
        let LoadState::Ready(dashboard) = &self.state else {
            return;
        };
        let index = dashboard.playback().index_at_fraction(fraction);
        if index != dashboard.playback().current() {
            self.dispatch(DashboardEvent::Seek(index), cx);
        }
    }

    fn pointer_point(&self, strategy: Strategy, event: &MouseMoveEvent) -> Option<NormalizedPoint> {
        let LoadState::Ready(dashboard) = &self.state else {
            return None;
        };
        dashboard
            .chart(strategy)
            .normalize_window_point(f32::from(event.position.x), f32::from(event.position.y))
    }

    // ==================== Actions ====================

    fn on_toggle_playback(
        &mut self,
        _: &TogglePlayback,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.dispatch(DashboardEvent::TogglePlayback, cx);
    }

    fn on_step_forward(&mut self, _: &StepForward, _window: &mut Window, cx: &mut Context<Self>) {
        self.dispatch(DashboardEvent::Step(Direction::Forward), cx);
    }

    fn on_step_backward(&mut self, _: &StepBackward, _window: &mut Window, cx: &mut Context<Self>) {
        self.dispatch(DashboardEvent::Step(Direction::Backward), cx);
    }

    fn on_show_rtu_view(&mut self, _: &ShowRtuView, _window: &mut Window, cx: &mut Context<Self>) {
        self.dispatch(DashboardEvent::SetView(ViewMode::Rtu), cx);
    }

    fn on_show_ev_view(&mut self, _: &ShowEvView, _window: &mut Window, cx: &mut Context<Self>) {
        self.dispatch(DashboardEvent::SetView(ViewMode::Ev), cx);
    }

    // ==================== Rendering ====================

    fn render_placeholder(&self, locale: Locale) -> AnyElement {
        let (message, detail) = match &self.state {
            LoadState::Failed(detail) => (t(locale, "status-load-failed"), Some(detail.clone())),
            _ => (t(locale, "status-loading"), None),
        };

        div()
            .flex_1()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_2()
            .child(
                div()
                    .text_size(px(Typography::TEXT_LG))
                    .text_color(DashboardColors::text_secondary())
                    .child(message),
            )
            .children(detail.map(|detail| {
                div()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(DashboardColors::danger())
                    .child(detail)
            }))
            .into_any_element()
    }

    fn render_controls(
        &self,
        dashboard: &Dashboard<ChartModel>,
        locale: Locale,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        let playback = dashboard.playback();
        let play_label = if playback.is_playing() {
            t(locale, "action-pause")
        } else {
            t(locale, "action-play")
        };
        let view = dashboard.view();

        div()
            .flex()
            .items_center()
            .gap_4()
            .child(
                Button::primary("toggle-playback", play_label)
                    .on_click(cx.listener(|page, _: &ClickEvent, _window, cx| {
                        page.dispatch(DashboardEvent::TogglePlayback, cx);
                    })),
            )
            .child(
                div()
                    .w(px(96.0))
                    .text_size(px(Typography::TEXT_BASE))
                    .text_color(DashboardColors::text_primary())
                    .child(format_clock(&dashboard.current_record().time)),
            )
            .child(
                div().flex_1().child(
                    Slider::new("playback-slider", playback.fraction()).on_seek(cx.listener(
                        |page, fraction: &f32, _window, cx| page.seek_to_fraction(*fraction, cx),
                    )),
                ),
            )
            .child(
                Button::new("view-rtu", t(locale, "view-rtu"))
                    .size(ButtonSize::Small)
                    .selected(view == ViewMode::Rtu)
                    .on_click(cx.listener(|page, _: &ClickEvent, _window, cx| {
                        page.dispatch(DashboardEvent::SetView(ViewMode::Rtu), cx);
                    })),
            )
            .child(
                Button::new("view-ev", t(locale, "view-ev"))
                    .size(ButtonSize::Small)
                    .selected(view == ViewMode::Ev)
                    .on_click(cx.listener(|page, _: &ClickEvent, _window, cx| {
                        page.dispatch(DashboardEvent::SetView(ViewMode::Ev), cx);
                    })),
            )
    }

    fn render_strategy(
        &self,
        dashboard: &Dashboard<ChartModel>,
        strategy: Strategy,
        locale: Locale,
        asset_dir: PathBuf,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        let chart = ChartView::new(dashboard.chart(strategy).clone(), locale)
            .on_hover(cx.listener(move |page, hovered: &bool, _window, cx| {
                let event = if *hovered {
                    DashboardEvent::PointerEntered(strategy)
                } else {
                    DashboardEvent::PointerLeft(strategy)
                };
                page.dispatch(event, cx);
            }))
            .on_pointer_move(cx.listener(move |page, event: &MouseMoveEvent, _window, cx| {
                if let Some(point) = page.pointer_point(strategy, event) {
                    page.dispatch(DashboardEvent::PointerMoved { chart: strategy, point }, cx);
                }
            }));

        div()
            .flex_1()
            .flex()
            .flex_col()
            .items_center()
            .gap_4()
            .child(div().w_full().child(chart))
            .child(OverlayView::new(
                dashboard.overlay().icons(strategy).clone(),
                asset_dir,
            ))
    }

    fn render_dashboard(
        &self,
        dashboard: &Dashboard<ChartModel>,
        locale: Locale,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let asset_dir = self.entities.preferences.read(cx).asset_dir();
        let controls = self.render_controls(dashboard, locale, cx);
        let columns: Vec<_> = Strategy::ALL
            .into_iter()
            .map(|strategy| {
                self.render_strategy(dashboard, strategy, locale, asset_dir.clone(), cx)
            })
            .collect();

        div()
            .flex_1()
            .flex()
            .flex_col()
            .gap_4()
            .child(controls)
            .child(div().flex().flex_row().gap_4().children(columns))
            .child(
                div()
                    .text_size(px(Typography::TEXT_XS))
                    .text_color(DashboardColors::text_muted())
                    .child(t(locale, "playback-hint")),
            )
            .into_any_element()
    }
}

impl Render for DashboardPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;

        let content = match &self.state {
            LoadState::Ready(dashboard) => self.render_dashboard(dashboard, locale, cx),
            _ => self.render_placeholder(locale),
        };

        div()
            .key_context(KEY_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_toggle_playback))
            .on_action(cx.listener(Self::on_step_forward))
            .on_action(cx.listener(Self::on_step_backward))
            .on_action(cx.listener(Self::on_show_rtu_view))
            .on_action(cx.listener(Self::on_show_ev_view))
            .size_full()
            .flex()
            .flex_col()
            .p_4()
            .bg(DashboardColors::background())
            .child(content)
    }
}
