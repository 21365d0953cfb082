//! PlaybackState - Time Cursor and Play/Pause

use std::time::Duration;

/// Step direction for keyboard and timer advances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// What the shell must do with its periodic timer after a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Start firing `advance(Forward)` every interval
    Start(Duration),
    /// Cancel the running timer
    Stop,
}

/// Bounded, wrapping cursor over the record sequence
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    current: usize,
    min: usize,
    max: usize,
    playing: bool,
    /// Wall-clock time for one pass from `min` to `max`
    duration: Duration,
}

impl PlaybackState {
    /// Create a paused cursor at 0 over `0..=max`
    pub fn new(max: usize, duration: Duration) -> Self {
        Self {
            current: 0,
            min: 0,
            max,
            playing: false,
            duration,
        }
    }

    // ==================== Getters ====================

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Timer period: the whole range plays back over `duration`
    pub fn frame_interval(&self) -> Duration {
        let span = (self.max - self.min).max(1);
        self.duration.div_f64(span as f64)
    }

    /// Cursor position as a fraction of the range, for the slider
    pub fn fraction(&self) -> f32 {
        let span = self.max - self.min;
        if span == 0 {
            return 0.0;
        }
        (self.current - self.min) as f32 / span as f32
    }

    /// Nearest index for a slider fraction; out-of-range fractions are clamped
    pub fn index_at_fraction(&self, fraction: f32) -> usize {
        let span = (self.max - self.min) as f32;
        let offset = (fraction.clamp(0.0, 1.0) * span).round() as usize;
        self.min + offset
    }

    // ==================== Transitions ====================

    /// Move the cursor to `index`. Callers keep `index` within bounds.
    pub fn seek(&mut self, index: usize) -> usize {
        debug_assert!((self.min..=self.max).contains(&index), "seek out of range");
        self.current = index.clamp(self.min, self.max);
        self.current
    }

    /// Step one index, wrapping past either bound
    pub fn advance(&mut self, direction: Direction) -> usize {
        self.current = match direction {
            Direction::Forward if self.current >= self.max => self.min,
            Direction::Forward => self.current + 1,
            Direction::Backward if self.current <= self.min => self.max,
            Direction::Backward => self.current - 1,
        };
        self.current
    }

    /// Flip play/pause and report the timer change it requires
    pub fn toggle(&mut self) -> TimerCommand {
        self.playing = !self.playing;
        if self.playing {
            TimerCommand::Start(self.frame_interval())
        } else {
            TimerCommand::Stop
        }
    }
}
