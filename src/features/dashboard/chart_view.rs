//! Chart View
//!
//! Paints one [`ChartModel`]: the visible series, value gridlines, time marker,
//! hover crosshair and tooltip, plus title, peak banner and axis labels.

use gpui::{
    canvas, div, fill, point, prelude::*, px, size, App, Bounds, Div, Hsla, InteractiveElement,
    IntoElement, MouseMoveEvent, ParentElement, PathBuilder, Pixels, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::chart::model::{ChartModel, PlotRect};
use crate::chart::scale::PlotScale;
use crate::chart::surface::PlotSize;
use crate::constants::{
    CHART_HEIGHT, HOUR_TICK_STEP, MARKER_WIDTH, SERIES_WIDTH, VALUE_TICKS, X_AXIS_HEIGHT,
    Y_AXIS_WIDTH,
};
use crate::i18n::{t, Locale};
use crate::theme::colors::DashboardColors;
use crate::theme::typography::Typography;
use crate::utils::format::format_hour_label;

type HoverHandler = Box<dyn Fn(&bool, &mut Window, &mut App) + 'static>;
type MoveHandler = Box<dyn Fn(&MouseMoveEvent, &mut Window, &mut App) + 'static>;

/// Rendered chart for one strategy
#[derive(IntoElement)]
pub struct ChartView {
    model: ChartModel,
    locale: Locale,
    on_hover: Option<HoverHandler>,
    on_pointer_move: Option<MoveHandler>,
}

impl ChartView {
    pub fn new(model: ChartModel, locale: Locale) -> Self {
        Self {
            model,
            locale,
            on_hover: None,
            on_pointer_move: None,
        }
    }

    /// Called with `true` when the pointer enters the plot and `false` when it leaves
    pub fn on_hover(mut self, handler: impl Fn(&bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_hover = Some(Box::new(handler));
        self
    }

    pub fn on_pointer_move(
        mut self,
        handler: impl Fn(&MouseMoveEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_pointer_move = Some(Box::new(handler));
        self
    }

    fn render_header(&self) -> Div {
        div()
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .text_size(px(Typography::TEXT_LG))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(DashboardColors::text_primary())
                    .child(t(self.locale, self.model.title_key())),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_BASE))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(DashboardColors::series(self.model.strategy()))
                    .child(SharedString::from(self.model.peak_text().to_string())),
            )
    }

    /// Value labels, positioned from the last painted plot size
    fn render_value_axis(&self, scale: Option<PlotScale>) -> Div {
        let labels = scale
            .map(|scale| scale.value_ticks(VALUE_TICKS))
            .unwrap_or_default();

        div()
            .relative()
            .w(px(Y_AXIS_WIDTH))
            .h_full()
            .child(
                div()
                    .absolute()
                    .top_0()
                    .left_0()
                    .text_size(px(Typography::TEXT_XS))
                    .text_color(DashboardColors::text_secondary())
                    .child(t(self.locale, "axis-kw")),
            )
            .children(labels.into_iter().skip(1).map(|(y, value)| {
                div()
                    .absolute()
                    .top(px(y - 7.0))
                    .right(px(6.0))
                    .text_size(px(Typography::TEXT_XS))
                    .text_color(DashboardColors::text_muted())
                    .child(format!("{value:.0}"))
            }))
    }

    fn render_time_axis(&self, scale: Option<PlotScale>) -> Div {
        let ticks = scale
            .map(|scale| scale.hour_ticks(HOUR_TICK_STEP))
            .unwrap_or_default();

        div()
            .relative()
            .h(px(X_AXIS_HEIGHT))
            .ml(px(Y_AXIS_WIDTH))
            .children(ticks.into_iter().map(|(x, hour)| {
                div()
                    .absolute()
                    .top_0()
                    .left(px(x - 14.0))
                    .text_size(px(Typography::TEXT_XS))
                    .text_color(DashboardColors::text_muted())
                    .child(format_hour_label(hour))
            }))
            .child(
                div()
                    .absolute()
                    .bottom_0()
                    .w_full()
                    .flex()
                    .justify_center()
                    .text_size(px(Typography::TEXT_XS))
                    .text_color(DashboardColors::text_secondary())
                    .child(t(self.locale, "axis-time")),
            )
    }
}

/// Everything the paint pass needs, detached from the model
struct PlotPaint {
    model: ChartModel,
}

impl PlotPaint {
    fn paint(&self, bounds: Bounds<Pixels>, window: &mut Window) {
        let plot_size = PlotSize {
            width: f32::from(bounds.size.width),
            height: f32::from(bounds.size.height),
        };
        let Some(scale) =
            PlotScale::for_points(self.model.points(), self.model.axis_max(), plot_size)
        else {
            return;
        };
        let at = |x: f32, y: f32| point(bounds.origin.x + px(x), bounds.origin.y + px(y));

        // Gridlines
        let grid = Hsla::from(DashboardColors::grid());
        for (y, _) in scale.value_ticks(VALUE_TICKS) {
            window.paint_quad(fill(
                Bounds::new(at(0.0, y), size(bounds.size.width, px(1.0))),
                grid,
            ));
        }

        // Series
        let series = self.model.series();
        let mut builder = PathBuilder::stroke(px(SERIES_WIDTH));
        for (i, p) in self.model.points().iter().enumerate() {
            let position = at(scale.x_for(p.date), scale.y_for(p.value(series)));
            if i == 0 {
                builder.move_to(position);
            } else {
                builder.line_to(position);
            }
        }
        if let Ok(path) = builder.build() {
            window.paint_path(path, Hsla::from(DashboardColors::series(self.model.strategy())));
        }

        // Time marker
        if let Some(marker) = self.model.marker() {
            let x = scale.x_for(marker) - MARKER_WIDTH / 2.0;
            window.paint_quad(fill(
                Bounds::new(at(x, 0.0), size(px(MARKER_WIDTH), bounds.size.height)),
                DashboardColors::marker_hsla(),
            ));
        }

        // Crosshair
        if let Some(cursor) = self.model.cursor() {
            let color = Hsla::from(DashboardColors::cursor());
            window.paint_quad(fill(
                Bounds::new(at(cursor.x, 0.0), size(px(1.0), bounds.size.height)),
                color,
            ));
            window.paint_quad(fill(
                Bounds::new(at(0.0, cursor.y), size(bounds.size.width, px(1.0))),
                color,
            ));
        }
    }
}

impl RenderOnce for ChartView {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let scale = self.model.scale();
        let header = self.render_header();
        let value_axis = self.render_value_axis(scale);
        let time_axis = self.render_time_axis(scale);

        let plot_cell = self.model.plot_cell();
        let painter = PlotPaint {
            model: self.model.clone(),
        };

        let tooltip = self
            .model
            .cursor()
            .zip(self.model.tooltip())
            .map(|(cursor, text)| {
                div()
                    .absolute()
                    .left(px(cursor.x + 8.0))
                    .top(px((cursor.y - 28.0).max(0.0)))
                    .px_2()
                    .py_1()
                    .rounded_sm()
                    .bg(DashboardColors::tooltip_bg())
                    .text_color(DashboardColors::text_header())
                    .text_size(px(Typography::TEXT_XS))
                    .child(text)
            });

        let mut plot = div()
            .id(self.model.strategy().chart_id())
            .relative()
            .flex_1()
            .h_full()
            .border_l_1()
            .border_b_1()
            .border_color(DashboardColors::border())
            .child(
                canvas(
                    move |bounds, _window, _cx| {
                        plot_cell.set(PlotRect {
                            x: f32::from(bounds.origin.x),
                            y: f32::from(bounds.origin.y),
                            width: f32::from(bounds.size.width),
                            height: f32::from(bounds.size.height),
                        });
                    },
                    move |bounds, _, window, _cx| painter.paint(bounds, window),
                )
                .size_full(),
            )
            .children(tooltip);

        if let Some(handler) = self.on_hover {
            plot = plot.on_hover(handler);
        }
        if let Some(handler) = self.on_pointer_move {
            plot = plot.on_mouse_move(handler);
        }

        div()
            .flex()
            .flex_col()
            .flex_1()
            .gap_2()
            .p_3()
            .rounded_md()
            .border_1()
            .border_color(DashboardColors::border())
            .bg(DashboardColors::content_bg())
            .child(header)
            .child(
                div()
                    .flex()
                    .flex_row()
                    .h(px(CHART_HEIGHT))
                    .child(value_axis)
                    .child(plot),
            )
            .child(time_axis)
    }
}
