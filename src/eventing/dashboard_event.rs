//! DashboardEvent - Inputs and Outputs of the Dashboard State Machine
//!
//! Every user gesture and timer tick becomes a [`DashboardEvent`]. Handling an event
//! may ask the shell to do something outside the state machine, expressed as an
//! [`Effect`].

use crate::chart::surface::NormalizedPoint;
use crate::domain::record::Strategy;
use crate::domain::view_mode::ViewMode;
use crate::state::playback::{Direction, TimerCommand};

/// Discrete inputs to [`Dashboard::handle`](crate::state::dashboard::Dashboard::handle)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashboardEvent {
    /// Playback timer fired
    Tick,

    /// Space bar or play button
    TogglePlayback,

    /// Arrow keys
    Step(Direction),

    /// Slider drag
    Seek(usize),

    /// View buttons
    SetView(ViewMode),

    /// Pointer entered a chart, making it the active one
    PointerEntered(Strategy),

    /// Pointer moved over a chart
    PointerMoved {
        chart: Strategy,
        point: NormalizedPoint,
    },

    /// Pointer left a chart
    PointerLeft(Strategy),
}

/// Side effects requested by the state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Start or cancel the playback timer
    Timer(TimerCommand),

    /// Write the view preference
    PersistView(ViewMode),
}
