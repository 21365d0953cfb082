//! Dashboard Constants
//!
//! Centralized constants for playback, layout and default paths.

/// Minute samples in the simulated day (indices 0..=1438)
pub const DAY_SAMPLES: usize = 1439;

/// Wall-clock seconds for one full playback of the day
pub const DEFAULT_PLAYBACK_SECS: f64 = 60.0;

/// Default dataset location, relative to the working directory
pub const DEFAULT_DATA_PATH: &str = "assets/rtu.csv";

/// Default directory holding the overlay PNGs
pub const DEFAULT_IMAGE_DIR: &str = "assets/images";

/// Settings file name inside the platform config directory
pub const SETTINGS_FILE: &str = "rtu-dashboard.toml";

/// Log file prefix inside the platform data directory
pub const LOG_FILE_PREFIX: &str = "rtu-dashboard.log";

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1440.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Chart layout
pub const CHART_HEIGHT: f32 = 320.0;
pub const Y_AXIS_WIDTH: f32 = 48.0;
pub const X_AXIS_HEIGHT: f32 = 36.0;
/// Hours between date-axis ticks
pub const HOUR_TICK_STEP: u32 = 3;
/// Number of value-axis gridlines above zero
pub const VALUE_TICKS: usize = 5;

/// Marker line width in pixels
pub const MARKER_WIDTH: f32 = 2.0;
/// Series line width in pixels
pub const SERIES_WIDTH: f32 = 1.5;

/// Overlay illustration size
pub const OVERLAY_SIZE: f32 = 280.0;
