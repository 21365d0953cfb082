//! Workspace - Main Shell with Layout
//!
//! The workspace is the main container that holds the header and the dashboard page.

use std::path::PathBuf;

use gpui::{div, prelude::*, Context, Entity, IntoElement, ParentElement, Render, Styled, Window};

use crate::app::entities::AppEntities;
use crate::components::layout::header::Header;
use crate::features::dashboard::page::DashboardPage;
use crate::theme::colors::DashboardColors;

/// Main workspace containing the application layout
pub struct Workspace {
    header: Entity<Header>,
    dashboard: Entity<DashboardPage>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        data_path: PathBuf,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let dashboard = cx.new(|cx| DashboardPage::new(entities, data_path, window, cx));

        Self { header, dashboard }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(DashboardColors::background())
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .child(self.dashboard.clone()),
            )
    }
}
