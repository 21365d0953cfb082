//! Dashboard Controller
//!
//! Runs the effects the dashboard state machine asks for: the playback timer and
//! view persistence. Also owns the one-shot background load of the data file.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use gpui::{App, Context, Task};

use crate::domain::record::Record;
use crate::domain::view_mode::ViewMode;
use crate::error::Result;
use crate::eventing::dashboard_event::{DashboardEvent, Effect};
use crate::features::dashboard::page::DashboardPage;
use crate::services::loader::load_records;
use crate::state::playback::TimerCommand;
use crate::state::preferences::update_preferences_and_save;

/// Dashboard page controller
#[derive(Default)]
pub struct DashboardController {
    timer: Option<Task<()>>,
}

impl DashboardController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute effects returned by `Dashboard::handle`
    pub fn run_effects(&mut self, effects: Vec<Effect>, cx: &mut Context<DashboardPage>) {
        for effect in effects {
            match effect {
                Effect::Timer(TimerCommand::Start(interval)) => self.start_timer(interval, cx),
                Effect::Timer(TimerCommand::Stop) => self.stop_timer(),
                Effect::PersistView(view) => persist_view(view, cx),
            }
        }
    }

    /// Start the periodic tick, replacing any running timer
    fn start_timer(&mut self, interval: Duration, cx: &mut Context<DashboardPage>) {
        if self.timer.is_some() {
            tracing::warn!("Playback timer already running, restarting");
        }

        let task = cx.spawn(async move |page, cx| {
            loop {
                cx.background_executor().timer(interval).await;

                let ticked = page.update(cx, |page, cx| {
                    page.dispatch(DashboardEvent::Tick, cx);
                });
                if ticked.is_err() {
                    break;
                }
            }
        });

        self.timer = Some(task);
        tracing::debug!(interval = ?interval, "Started playback timer");
    }

    /// Cancel the periodic tick
    fn stop_timer(&mut self) {
        if let Some(task) = self.timer.take() {
            drop(task);
            tracing::debug!("Stopped playback timer");
        }
    }
}

fn persist_view(view: ViewMode, cx: &App) {
    update_preferences_and_save(cx, "view", move |prefs| prefs.set_view(view));
}

/// Parse the data file on the background executor and hand the result to the page once
pub fn spawn_load(path: PathBuf, cx: &mut Context<DashboardPage>) {
    tracing::info!(path = ?path, "Loading dataset");

    cx.spawn(async move |page, cx| {
        let result: Result<Arc<[Record]>> = cx
            .background_executor()
            .spawn(async move { load_records(&path).map(Arc::from) })
            .await;

        page.update(cx, |page, cx| page.finish_load(result, cx)).ok();
    })
    .detach();
}
