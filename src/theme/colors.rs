//! Colors - Dashboard Theme Colors

use gpui::{rgb, rgba, Hsla, Rgba};

use crate::domain::record::Strategy;

/// Dashboard color palette - All colors are accessed via associated functions
pub struct DashboardColors;

impl DashboardColors {
    // Chrome
    /// Header background - Navy
    pub fn header_bg() -> Rgba { rgb(0x1f2a5c) }
    /// Header text
    pub fn text_header() -> Rgba { rgb(0xffffff) }
    /// Main background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Chart card background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text (axis labels)
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }

    // Status colors
    /// Error/Danger - Red
    pub fn danger() -> Rgba { rgb(0xef4444) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
    /// Grid lines
    pub fn grid() -> Rgba { rgb(0xf0f0f0) }

    // Series colors
    /// Uncoordinated strategy - Indigo
    pub fn series_uncoord() -> Rgba { rgb(0x283890) }
    /// Coordinated strategy - Green
    pub fn series_coord() -> Rgba { rgb(0x3ab54a) }
    /// Time marker - Red
    pub fn marker() -> Rgba { rgb(0xff0000) }
    /// Hover cursor crosshair
    pub fn cursor() -> Rgba { rgba(0x1f293799) }
    /// Tooltip background
    pub fn tooltip_bg() -> Rgba { rgba(0x1f2937e6) }

    // Button colors
    /// Primary button background
    pub fn button_primary_bg() -> Rgba { rgb(0x283890) }
    /// Primary button hover
    pub fn button_primary_hover() -> Rgba { rgb(0x1f2c73) }
    /// Primary button text
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    /// Secondary button background
    pub fn button_secondary_bg() -> Rgba { rgb(0xe5e7eb) }
    /// Secondary button hover
    pub fn button_secondary_hover() -> Rgba { rgb(0xd1d5db) }

    // Slider colors
    /// Slider track
    pub fn slider_track() -> Rgba { rgb(0xd1d5db) }
    /// Slider filled range
    pub fn slider_fill() -> Rgba { rgb(0x283890) }
    /// Slider thumb
    pub fn slider_thumb() -> Rgba { rgb(0xffffff) }
}

impl DashboardColors {
    /// Line color for a strategy's chart
    pub fn series(strategy: Strategy) -> Rgba {
        match strategy {
            Strategy::Uncoordinated => Self::series_uncoord(),
            Strategy::Coordinated => Self::series_coord(),
        }
    }

    pub fn marker_hsla() -> Hsla {
        Hsla::from(Self::marker())
    }
}
