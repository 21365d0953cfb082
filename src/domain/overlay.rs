//! Overlay - Peak Demand Labels and Icon Layer Stacks
//!
//! The overlay is a pure function of the current record and view mode. Each side of the
//! dashboard gets a peak-demand string and a stack of image layers drawn on top of the
//! building illustration.

use std::collections::VecDeque;
use std::fmt;

use crate::domain::record::{EvPort, RTU_COUNT, Record, Strategy};
use crate::domain::view_mode::ViewMode;
use crate::utils::format::format_peak_demand;

/// Directory the stylesheet-style rendering of a stack points into
pub const IMAGE_ASSET_DIR: &str = "assets/images";

/// One image layer of the building illustration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconLayer {
    /// The building itself, always at the back
    Base,
    /// A running rooftop unit, 1-based
    Rtu(u8),
    Charger,
    /// Model X on port 1
    TeslaX { charging: bool },
    /// Model 3 on port 2
    Tesla3 { charging: bool },
    Storage,
}

impl IconLayer {
    /// Asset name without extension
    pub fn name(&self) -> String {
        match self {
            IconLayer::Base => "base".to_string(),
            IconLayer::Rtu(n) => format!("rtu{n}"),
            IconLayer::Charger => "charger".to_string(),
            IconLayer::TeslaX { charging: true } => "tesla-x".to_string(),
            IconLayer::TeslaX { charging: false } => "tesla-x-translucent".to_string(),
            IconLayer::Tesla3 { charging: true } => "tesla-3".to_string(),
            IconLayer::Tesla3 { charging: false } => "tesla-3-translucent".to_string(),
            IconLayer::Storage => "storage".to_string(),
        }
    }

    /// Relative image path following the `assets/images/{name}.png` convention
    pub fn asset_path(&self) -> String {
        format!("{IMAGE_ASSET_DIR}/{}.png", self.name())
    }
}

impl fmt::Display for IconLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Ordered image layers, frontmost first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconStack {
    layers: VecDeque<IconLayer>,
}

impl IconStack {
    /// A stack holding only the base layer
    pub fn new() -> Self {
        Self {
            layers: VecDeque::from([IconLayer::Base]),
        }
    }

    /// Put `layer` in front of everything pushed so far
    pub fn push_front(&mut self, layer: IconLayer) {
        self.layers.push_front(layer);
    }

    /// Layers in paint order (back to front)
    pub fn iter_paint_order(&self) -> impl Iterator<Item = &IconLayer> {
        self.layers.iter().rev()
    }

    /// Asset names, front first
    pub fn names(&self) -> Vec<String> {
        self.layers.iter().map(IconLayer::name).collect()
    }

    /// Composed `background-image` value, e.g. `url("assets/images/rtu1.png"), url(...)`
    pub fn to_css(&self) -> String {
        self.layers
            .iter()
            .map(|layer| format!("url(\"{}\")", layer.asset_path()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for IconStack {
    fn default() -> Self {
        Self::new()
    }
}

/// Derived display state for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayState {
    pub peak_left: String,
    pub peak_right: String,
    pub icons_left: IconStack,
    pub icons_right: IconStack,
}

impl OverlayState {
    pub fn peak(&self, strategy: Strategy) -> &str {
        match strategy {
            Strategy::Uncoordinated => &self.peak_left,
            Strategy::Coordinated => &self.peak_right,
        }
    }

    pub fn icons(&self, strategy: Strategy) -> &IconStack {
        match strategy {
            Strategy::Uncoordinated => &self.icons_left,
            Strategy::Coordinated => &self.icons_right,
        }
    }
}

/// Compute the overlay for `record` under `view`
pub fn build_overlay(record: &Record, view: ViewMode) -> OverlayState {
    OverlayState {
        peak_left: format_peak_demand(view.peak_value(record, Strategy::Uncoordinated)),
        peak_right: format_peak_demand(view.peak_value(record, Strategy::Coordinated)),
        icons_left: build_icon_stack(record, view, Strategy::Uncoordinated),
        icons_right: build_icon_stack(record, view, Strategy::Coordinated),
    }
}

/// Build one side's icon stack.
///
/// Running units are only considered while the side's `RTU On Count` is positive; the
/// EV layers do not depend on it.
pub fn build_icon_stack(record: &Record, view: ViewMode, strategy: Strategy) -> IconStack {
    let mut stack = IconStack::new();

    if record.rtu_on_count(strategy) > 0.0 {
        for unit in 1..=RTU_COUNT {
            if record.is_rtu_on(strategy, unit) {
                stack.push_front(IconLayer::Rtu(unit));
            }
        }
    }

    if view == ViewMode::Ev {
        stack.push_front(IconLayer::Charger);
        stack.push_front(IconLayer::Tesla3 {
            charging: record.port_load(EvPort::Two) > 0.0,
        });
        stack.push_front(IconLayer::TeslaX {
            charging: record.port_load(EvPort::One) > 0.0,
        });
        if strategy == Strategy::Coordinated {
            stack.push_front(IconLayer::Storage);
        }
    }

    stack
}
