//! Timing fit: category → time-of-day affinity, adjusted for recovery.

use attune_core::models::{ProtocolCandidate, TimeOfDay};

/// Fit when the category has a window and the current time is inside it.
const IN_WINDOW: f64 = 0.9;
/// Fit for categories with no particular window.
const ANY_TIME: f64 = 0.7;
/// Fit when the current time misses the category's window.
const OUT_OF_WINDOW: f64 = 0.3;
/// Damping applied to intense categories when the body is not ready.
const LOW_RECOVERY_DAMPING: f64 = 0.5;
/// Recovery score below which intense protocols are damped.
const LOW_RECOVERY_THRESHOLD: u32 = 30;
/// HRV deviation (percent, negative = below baseline) treated as low recovery.
const HRV_STRAIN_THRESHOLD: f64 = -20.0;

/// Preferred delivery windows per protocol category. `None` = any time.
fn preferred_windows(category: &str) -> Option<&'static [TimeOfDay]> {
    match category.to_lowercase().as_str() {
        "circadian" | "light" => Some(&[TimeOfDay::Morning]),
        "movement" | "exercise" => Some(&[TimeOfDay::Morning, TimeOfDay::Afternoon]),
        "focus" | "fasting" => Some(&[TimeOfDay::Morning, TimeOfDay::Afternoon]),
        "sleep" | "wind_down" => Some(&[TimeOfDay::Evening]),
        _ => None,
    }
}

/// Categories that demand physical readiness.
fn is_intense(category: &str) -> bool {
    matches!(category.to_lowercase().as_str(), "movement" | "exercise" | "cold_exposure")
}

pub fn calculate(
    protocol: &ProtocolCandidate,
    time_of_day: TimeOfDay,
    recovery_score: Option<u32>,
    hrv_deviation: Option<f64>,
) -> f64 {
    let base = match preferred_windows(&protocol.category) {
        Some(windows) if windows.contains(&time_of_day) => IN_WINDOW,
        Some(_) => OUT_OF_WINDOW,
        None => ANY_TIME,
    };

    let strained = recovery_score.map_or(false, |r| r < LOW_RECOVERY_THRESHOLD)
        || hrv_deviation.map_or(false, |d| d <= HRV_STRAIN_THRESHOLD);

    if strained && is_intense(&protocol.category) {
        base * LOW_RECOVERY_DAMPING
    } else {
        base
    }
}
