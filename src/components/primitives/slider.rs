//! Slider Component
//!
//! Horizontal seek bar. Reports the pointer position along the track as a fraction
//! in `[0, 1]` on press and while dragging with the left button held.

use std::cell::Cell;
use std::rc::Rc;

use gpui::{
    canvas, div, prelude::*, px, relative, App, Bounds, ElementId, InteractiveElement,
    IntoElement, MouseButton, MouseDownEvent, MouseMoveEvent, ParentElement, Pixels, Point,
    RenderOnce, Styled, Window,
};

use crate::theme::colors::DashboardColors;

type SeekHandler = Rc<dyn Fn(&f32, &mut Window, &mut App) + 'static>;

const TRACK_HEIGHT: f32 = 4.0;
const THUMB_SIZE: f32 = 14.0;

/// Fraction of `bounds` width at `position`, clamped to the track
fn fraction_at(bounds: Bounds<Pixels>, position: Point<Pixels>) -> f32 {
    let width = f32::from(bounds.size.width);
    if width <= 0.0 {
        return 0.0;
    }
    (f32::from(position.x - bounds.origin.x) / width).clamp(0.0, 1.0)
}

/// A seek slider
#[derive(IntoElement)]
pub struct Slider {
    id: ElementId,
    fraction: f32,
    on_seek: Option<SeekHandler>,
}

impl Slider {
    pub fn new(id: impl Into<ElementId>, fraction: f32) -> Self {
        Self {
            id: id.into(),
            fraction: fraction.clamp(0.0, 1.0),
            on_seek: None,
        }
    }

    /// Called with the new fraction on press and drag
    pub fn on_seek(mut self, handler: impl Fn(&f32, &mut Window, &mut App) + 'static) -> Self {
        self.on_seek = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for Slider {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let track = Rc::new(Cell::new(Bounds::<Pixels>::default()));
        let track_for_paint = track.clone();

        let mut element = div()
            .id(self.id)
            .relative()
            .h(px(THUMB_SIZE + 6.0))
            .w_full()
            .flex()
            .items_center()
            .cursor_pointer()
            .child(
                canvas(
                    move |bounds, _window, _cx| track_for_paint.set(bounds),
                    |_bounds, _, _window, _cx| {},
                )
                .absolute()
                .size_full(),
            )
            .child(
                div()
                    .h(px(TRACK_HEIGHT))
                    .w_full()
                    .rounded_full()
                    .bg(DashboardColors::slider_track()),
            )
            .child(
                div()
                    .absolute()
                    .left_0()
                    .h(px(TRACK_HEIGHT))
                    .w(relative(self.fraction))
                    .rounded_full()
                    .bg(DashboardColors::slider_fill()),
            )
            .child(
                div()
                    .absolute()
                    .left(relative(self.fraction))
                    .ml(px(-THUMB_SIZE / 2.0))
                    .size(px(THUMB_SIZE))
                    .rounded_full()
                    .border_2()
                    .border_color(DashboardColors::slider_fill())
                    .bg(DashboardColors::slider_thumb()),
            );

        if let Some(handler) = self.on_seek {
            let press_track = track.clone();
            let press_handler = handler.clone();
            element = element
                .on_mouse_down(MouseButton::Left, move |event: &MouseDownEvent, window, cx| {
                    press_handler(&fraction_at(press_track.get(), event.position), window, cx);
                })
                .on_mouse_move(move |event: &MouseMoveEvent, window, cx| {
                    if event.pressed_button == Some(MouseButton::Left) {
                        handler(&fraction_at(track.get(), event.position), window, cx);
                    }
                });
        }

        element
    }
}
