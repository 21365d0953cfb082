//! ViewMode - Which Scenario the Dashboard Shows

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::record::{Record, Strategy};

/// Display mode, persisted under the `view` preference key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Building load and rooftop units only
    #[default]
    Rtu,
    /// Adds EV chargers and, on the coordinated side, energy storage
    Ev,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Rtu => "rtu",
            ViewMode::Ev => "ev",
        }
    }

    /// Parse a persisted value, ignoring anything that is not a known mode
    pub fn from_persisted(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    /// Translation key of the chart title for `strategy`
    pub fn title_key(self, strategy: Strategy) -> &'static str {
        match (self, strategy) {
            (ViewMode::Rtu, Strategy::Uncoordinated) => "chart-title-base",
            (ViewMode::Rtu, Strategy::Coordinated) => "chart-title-rtu-coord",
            (ViewMode::Ev, Strategy::Uncoordinated) => "chart-title-base-ev",
            (ViewMode::Ev, Strategy::Coordinated) => "chart-title-rtu-coord-ev-ess",
        }
    }

    /// Y-axis ceiling for both charts, taken from the day's final record
    pub fn axis_max(self, last: &Record) -> f64 {
        match self {
            ViewMode::Rtu => last.peak_running_uncoord,
            ViewMode::Ev => last.peak_ev_coord,
        }
    }

    /// Peak demand column shown above the chart for `strategy`
    pub fn peak_value(self, record: &Record, strategy: Strategy) -> f64 {
        match (self, strategy) {
            (ViewMode::Rtu, strategy) => record.peak_running(strategy),
            (ViewMode::Ev, Strategy::Uncoordinated) => record.peak_ev_coord,
            (ViewMode::Ev, Strategy::Coordinated) => record.peak_ess_coord,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rtu" => Ok(ViewMode::Rtu),
            "ev" => Ok(ViewMode::Ev),
            other => Err(format!("unknown view mode {other:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::fixtures::blank_record;

    #[test]
    fn test_from_persisted_ignores_invalid() {
        assert_eq!(ViewMode::from_persisted(Some("ev")), ViewMode::Ev);
        assert_eq!(ViewMode::from_persisted(Some("rtu")), ViewMode::Rtu);
        assert_eq!(ViewMode::from_persisted(Some("EV")), ViewMode::Rtu);
        assert_eq!(ViewMode::from_persisted(Some("")), ViewMode::Rtu);
        assert_eq!(ViewMode::from_persisted(None), ViewMode::Rtu);
    }

    #[test]
    fn test_axis_max_uses_view_column() {
        let mut last = blank_record(1438);
        last.peak_running_uncoord = 310.0;
        last.peak_ev_coord = 355.5;

        assert_eq!(ViewMode::Rtu.axis_max(&last), 310.0);
        assert_eq!(ViewMode::Ev.axis_max(&last), 355.5);
    }

    #[test]
    fn test_peak_value_columns() {
        let mut record = blank_record(10);
        record.peak_running_uncoord = 1.0;
        record.peak_running_coord = 2.0;
        record.peak_ev_coord = 3.0;
        record.peak_ess_coord = 4.0;

        assert_eq!(ViewMode::Rtu.peak_value(&record, Strategy::Uncoordinated), 1.0);
        assert_eq!(ViewMode::Rtu.peak_value(&record, Strategy::Coordinated), 2.0);
        assert_eq!(ViewMode::Ev.peak_value(&record, Strategy::Uncoordinated), 3.0);
        assert_eq!(ViewMode::Ev.peak_value(&record, Strategy::Coordinated), 4.0);
    }
}
