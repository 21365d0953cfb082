//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use std::path::PathBuf;

use gpui::{
    actions, px, App, AppContext, Application, Bounds, KeyBinding, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::features::dashboard::page::{
    KEY_CONTEXT, ShowEvView, ShowRtuView, StepBackward, StepForward, TogglePlayback,
};
use crate::i18n::{t, Locale};
use crate::state::preferences::Preferences;

actions!(rtu_dashboard, [Quit]);

fn bind_keys(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("secondary-q", Quit, None),
        KeyBinding::new("space", TogglePlayback, Some(KEY_CONTEXT)),
        KeyBinding::new("right", StepForward, Some(KEY_CONTEXT)),
        KeyBinding::new("left", StepBackward, Some(KEY_CONTEXT)),
        KeyBinding::new("secondary-1", ShowRtuView, Some(KEY_CONTEXT)),
        KeyBinding::new("secondary-2", ShowEvView, Some(KEY_CONTEXT)),
    ]);
}

/// Run the dashboard. `data_override` replaces the configured data file.
pub fn run_app(data_override: Option<PathBuf>) {
    Application::new().run(move |cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        bind_keys(cx);

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let preferences = Preferences::try_load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Could not read settings, using defaults");
            Preferences::default()
        });
        let data_path = data_override.unwrap_or_else(|| preferences.data_path());
        let title = t(Locale::from_code(preferences.locale()), "app-title");

        // Initialize global entities
        let entities = AppEntities::init(preferences, cx);
        cx.set_global(entities.clone());

        // Create main window
        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(title),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            cx.new(|cx| Workspace::new(entities, data_path, window, cx))
        });
        if let Err(e) = opened {
            tracing::error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
