//! Format - Formatting Utilities

use chrono::{NaiveDateTime, Timelike};

/// Format as `0.0`, rounding the exact stored value. Exact ties go away from zero.
///
/// A double only lands exactly on a one-decimal tie when its fraction is `.25` or
/// `.75`; literals like `1.45` are stored below the midpoint and round down.
pub fn format_one_decimal(value: f64) -> String {
    let quarters = value * 4.0;
    let is_tie = quarters.fract() == 0.0 && quarters % 2.0 != 0.0;
    if is_tie {
        format!("{:.1}", (value * 10.0).round() / 10.0)
    } else {
        format!("{value:.1}")
    }
}

/// Format a kilowatt value the way chart tooltips show it
pub fn format_kw(value: f64) -> String {
    format!("{} kW", format_one_decimal(value))
}

/// Peak demand label text, e.g. `PEAK DEMAND: 1234.6 kW`
pub fn format_peak_demand(value: f64) -> String {
    format!("PEAK DEMAND: {}", format_kw(value))
}

/// Hour tick label in 12-hour form without minutes (`12AM`, `3PM`)
pub fn format_hour_label(hour: u32) -> String {
    let suffix = if hour % 24 < 12 { "AM" } else { "PM" };
    let h12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{h12}{suffix}")
}

/// Wall-clock time of a sample for the playback readout
pub fn format_clock(dt: &NaiveDateTime) -> String {
    format!(
        "{} {:02}:{:02}",
        dt.format("%b %-d"),
        dt.hour(),
        dt.minute()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_peak_demand() {
        assert_eq!(format_peak_demand(1234.56), "PEAK DEMAND: 1234.6 kW");
        assert_eq!(format_peak_demand(0.0), "PEAK DEMAND: 0.0 kW");
        assert_eq!(format_peak_demand(87.25), "PEAK DEMAND: 87.3 kW");
        assert_eq!(format_peak_demand(1010.25), "PEAK DEMAND: 1010.3 kW");
        assert_eq!(format_peak_demand(0.75), "PEAK DEMAND: 0.8 kW");
    }

    #[test]
    fn test_format_one_decimal_uses_stored_value() {
        // Stored just below the midpoint
        assert_eq!(format_one_decimal(0.15), "0.1");
        assert_eq!(format_one_decimal(1.45), "1.4");
        assert_eq!(format_one_decimal(8.95), "8.9");
        // Stored just above it
        assert_eq!(format_one_decimal(1.55), "1.6");
        assert_eq!(format_one_decimal(-87.25), "-87.3");
    }

    #[test]
    fn test_format_hour_label() {
        assert_eq!(format_hour_label(0), "12AM");
        assert_eq!(format_hour_label(3), "3AM");
        assert_eq!(format_hour_label(12), "12PM");
        assert_eq!(format_hour_label(21), "9PM");
        assert_eq!(format_hour_label(24), "12AM");
    }

    #[test]
    fn test_format_clock() {
        let dt = chrono::NaiveDate::from_ymd_opt(2019, 7, 3)
            .and_then(|d| d.and_hms_opt(9, 5, 0))
            .expect("valid date");
        assert_eq!(format_clock(&dt), "Jul 3 09:05");
    }
}
