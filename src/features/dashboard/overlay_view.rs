//! Overlay View
//!
//! Draws an icon stack as layered building illustrations, back to front.

use std::path::PathBuf;

use gpui::{
    div, img, px, App, IntoElement, ObjectFit, ParentElement, RenderOnce, Styled,
    StyledImage, Window,
};

use crate::constants::OVERLAY_SIZE;
use crate::domain::overlay::IconStack;
use crate::theme::colors::DashboardColors;

/// Layered illustration for one strategy
#[derive(IntoElement)]
pub struct OverlayView {
    icons: IconStack,
    asset_dir: PathBuf,
}

impl OverlayView {
    pub fn new(icons: IconStack, asset_dir: PathBuf) -> Self {
        Self { icons, asset_dir }
    }
}

impl RenderOnce for OverlayView {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let layers = self.icons.iter_paint_order().map(|layer| {
            let path = self.asset_dir.join(format!("{}.png", layer.name()));
            img(path)
                .absolute()
                .top_0()
                .left_0()
                .size_full()
                .object_fit(ObjectFit::Contain)
        });

        div()
            .relative()
            .flex_none()
            .size(px(OVERLAY_SIZE))
            .rounded_md()
            .border_1()
            .border_color(DashboardColors::border())
            .bg(DashboardColors::content_bg())
            .children(layers)
    }
}
