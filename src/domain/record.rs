//! Record - One Minute of Building Energy Data

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Number of rooftop units tracked per strategy
pub const RTU_COUNT: u8 = 6;

/// Accepted layouts for the `Time` column, tried in order after RFC 3339
const TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parse a `Time` cell into a wall-clock timestamp
pub fn parse_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

fn deserialize_time<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_time(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognized time {value:?}")))
}

/// Control strategy a column family belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Base building, units run on their own thermostats
    Uncoordinated,
    /// Units (and in EV view, chargers plus storage) are coordinated
    Coordinated,
}

impl Strategy {
    /// Both strategies in display order (left, right)
    pub const ALL: [Strategy; 2] = [Strategy::Uncoordinated, Strategy::Coordinated];

    /// Mount identifier of the chart showing this strategy
    pub fn chart_id(self) -> &'static str {
        match self {
            Strategy::Uncoordinated => "chart-uncoord",
            Strategy::Coordinated => "chart-coord",
        }
    }

    /// The strategy shown on the opposite chart
    pub fn other(self) -> Self {
        match self {
            Strategy::Uncoordinated => Strategy::Coordinated,
            Strategy::Coordinated => Strategy::Uncoordinated,
        }
    }

    /// Position in [`Strategy::ALL`]
    pub fn index(self) -> usize {
        match self {
            Strategy::Uncoordinated => 0,
            Strategy::Coordinated => 1,
        }
    }
}

/// EV charger port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvPort {
    /// Port 1, charging the Model X
    One,
    /// Port 2, charging the Model 3
    Two,
}

/// One CSV row. Column names follow the exported simulation header verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Time", deserialize_with = "deserialize_time")]
    pub time: NaiveDateTime,

    #[serde(rename = "Bldg (kW) UnCoord")]
    pub bldg_uncoord: f64,
    #[serde(rename = "Peak Running (kW) UnCoord")]
    pub peak_running_uncoord: f64,
    #[serde(rename = "Bldg RTU (kW) UnCoord")]
    pub bldg_rtu_uncoord: f64,
    #[serde(rename = "Bldg Other (kW) UnCoord")]
    pub bldg_other_uncoord: f64,
    #[serde(rename = "RTU On Count UnCoord")]
    pub rtu_on_count_uncoord: f64,
    #[serde(rename = "RTU 1 State UnCoord")]
    pub rtu1_state_uncoord: f64,
    #[serde(rename = "RTU 2 State UnCoord")]
    pub rtu2_state_uncoord: f64,
    #[serde(rename = "RTU 3 State UnCoord")]
    pub rtu3_state_uncoord: f64,
    #[serde(rename = "RTU 4 State UnCoord")]
    pub rtu4_state_uncoord: f64,
    #[serde(rename = "RTU 5 State UnCoord")]
    pub rtu5_state_uncoord: f64,
    #[serde(rename = "RTU 6 State UnCoord")]
    pub rtu6_state_uncoord: f64,
    #[serde(rename = "Bldg + EV (kW) UnCoord")]
    pub bldg_ev_uncoord: f64,

    #[serde(rename = "Bldg (kW) Coord")]
    pub bldg_coord: f64,
    #[serde(rename = "Peak Running (kW) Coord")]
    pub peak_running_coord: f64,
    #[serde(rename = "Bldg RTU (kW) Coord")]
    pub bldg_rtu_coord: f64,
    #[serde(rename = "Bldg Other (kW) Coord")]
    pub bldg_other_coord: f64,
    #[serde(rename = "RTU On Count Coord")]
    pub rtu_on_count_coord: f64,
    #[serde(rename = "RTU 1 State Coord")]
    pub rtu1_state_coord: f64,
    #[serde(rename = "RTU 2 State Coord")]
    pub rtu2_state_coord: f64,
    #[serde(rename = "RTU 3 State Coord")]
    pub rtu3_state_coord: f64,
    #[serde(rename = "RTU 4 State Coord")]
    pub rtu4_state_coord: f64,
    #[serde(rename = "RTU 5 State Coord")]
    pub rtu5_state_coord: f64,
    #[serde(rename = "RTU 6 State Coord")]
    pub rtu6_state_coord: f64,

    #[serde(rename = "Port 1 (kW)")]
    pub port1: f64,
    #[serde(rename = "Port 2 (kW)")]
    pub port2: f64,
    #[serde(rename = "Bldg + EV (kW) Coord")]
    pub bldg_ev_coord: f64,
    #[serde(rename = "Bldg + EV + ESS (kW) Coord")]
    pub bldg_ev_ess_coord: f64,
    #[serde(rename = "Peak EV (kW) Coord")]
    pub peak_ev_coord: f64,
    #[serde(rename = "Peak ESS (kW) Coord")]
    pub peak_ess_coord: f64,
}

impl Record {
    /// Whole-building load without EVs
    pub fn building_load(&self, strategy: Strategy) -> f64 {
        match strategy {
            Strategy::Uncoordinated => self.bldg_uncoord,
            Strategy::Coordinated => self.bldg_coord,
        }
    }

    /// Building load including EV charging (and storage on the coordinated side)
    pub fn building_load_with_ev(&self, strategy: Strategy) -> f64 {
        match strategy {
            Strategy::Uncoordinated => self.bldg_ev_uncoord,
            Strategy::Coordinated => self.bldg_ev_ess_coord,
        }
    }

    /// Running peak demand so far in the day
    pub fn peak_running(&self, strategy: Strategy) -> f64 {
        match strategy {
            Strategy::Uncoordinated => self.peak_running_uncoord,
            Strategy::Coordinated => self.peak_running_coord,
        }
    }

    pub fn rtu_on_count(&self, strategy: Strategy) -> f64 {
        match strategy {
            Strategy::Uncoordinated => self.rtu_on_count_uncoord,
            Strategy::Coordinated => self.rtu_on_count_coord,
        }
    }

    /// Raw on/off state of unit `unit` (1-based). Units outside `1..=6` read as off.
    pub fn rtu_state(&self, strategy: Strategy, unit: u8) -> f64 {
        match (strategy, unit) {
            (Strategy::Uncoordinated, 1) => self.rtu1_state_uncoord,
            (Strategy::Uncoordinated, 2) => self.rtu2_state_uncoord,
            (Strategy::Uncoordinated, 3) => self.rtu3_state_uncoord,
            (Strategy::Uncoordinated, 4) => self.rtu4_state_uncoord,
            (Strategy::Uncoordinated, 5) => self.rtu5_state_uncoord,
            (Strategy::Uncoordinated, 6) => self.rtu6_state_uncoord,
            (Strategy::Coordinated, 1) => self.rtu1_state_coord,
            (Strategy::Coordinated, 2) => self.rtu2_state_coord,
            (Strategy::Coordinated, 3) => self.rtu3_state_coord,
            (Strategy::Coordinated, 4) => self.rtu4_state_coord,
            (Strategy::Coordinated, 5) => self.rtu5_state_coord,
            (Strategy::Coordinated, 6) => self.rtu6_state_coord,
            _ => 0.0,
        }
    }

    /// Whether the unit's state column reads exactly 1
    pub fn is_rtu_on(&self, strategy: Strategy, unit: u8) -> bool {
        self.rtu_state(strategy, unit) == 1.0
    }

    pub fn port_load(&self, port: EvPort) -> f64 {
        match port {
            EvPort::One => self.port1,
            EvPort::Two => self.port2,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// A record at `minute` past midnight with every numeric column zeroed
    pub fn blank_record(minute: u32) -> Record {
        let time = chrono::NaiveDate::from_ymd_opt(2019, 7, 3)
            .and_then(|d| d.and_hms_opt(minute / 60, minute % 60, 0))
            .expect("valid fixture time");
        Record {
            time,
            bldg_uncoord: 0.0,
            peak_running_uncoord: 0.0,
            bldg_rtu_uncoord: 0.0,
            bldg_other_uncoord: 0.0,
            rtu_on_count_uncoord: 0.0,
            rtu1_state_uncoord: 0.0,
            rtu2_state_uncoord: 0.0,
            rtu3_state_uncoord: 0.0,
            rtu4_state_uncoord: 0.0,
            rtu5_state_uncoord: 0.0,
            rtu6_state_uncoord: 0.0,
            bldg_ev_uncoord: 0.0,
            bldg_coord: 0.0,
            peak_running_coord: 0.0,
            bldg_rtu_coord: 0.0,
            bldg_other_coord: 0.0,
            rtu_on_count_coord: 0.0,
            rtu1_state_coord: 0.0,
            rtu2_state_coord: 0.0,
            rtu3_state_coord: 0.0,
            rtu4_state_coord: 0.0,
            rtu5_state_coord: 0.0,
            rtu6_state_coord: 0.0,
            port1: 0.0,
            port2: 0.0,
            bldg_ev_coord: 0.0,
            bldg_ev_ess_coord: 0.0,
            peak_ev_coord: 0.0,
            peak_ess_coord: 0.0,
        }
    }

    /// A full day of blank records, one per minute
    pub fn blank_day(len: u32) -> Vec<Record> {
        (0..len).map(blank_record).collect()
    }
}
