//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use std::sync::OnceLock;

/// Remove ANSI colour sequences, for measuring visible width.
pub fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex"));
    re.replace_all(s, "").into_owned()
}

/// Compact "XhYm" form used by duration summaries, e.g. `8h0m`, `2h30m`.
pub fn format_hm(mins: i64) -> String {
    let m = mins.max(0);
    format!("{}h{}m", m / 60, m % 60)
}

/// Human readable distance: meters below 1 km, kilometers above.
pub fn format_distance(meters: f64) -> String {
    if !meters.is_finite() {
        return "n/a".to_string();
    }
    if meters < 1000.0 {
        format!("{:.0} m", meters)
    } else {
        format!("{:.2} km", meters / 1000.0)
    }
}

/// Placeholder for an optional project/task id.
pub fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}
