//! Parses call duration text into fractional minutes.

/// Converts a raw duration value into minutes.
///
/// Accepts `H:MM:SS` / `HH:MM:SS` clock text, or a bare number that is
/// already in minutes. Anything else (including empty text) counts as zero;
/// distinguishing "missing" from "zero" is the caller's concern.
pub fn parse_minutes(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }
    if let Some(minutes) = parse_clock(raw) {
        return minutes;
    }
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .unwrap_or(0.0)
}

fn parse_clock(raw: &str) -> Option<f64> {
    let mut parts = raw.split(':');
    let hours = parts.next()?;
    let minutes = parts.next()?;
    let seconds = parts.next()?;
    if parts.next().is_some() || hours.is_empty() || hours.len() > 2 {
        return None;
    }
    let hours = hours.parse::<u32>().ok()? as f64;
    let minutes = minutes.parse::<u32>().ok()? as f64;
    let seconds = seconds.parse::<u32>().ok()? as f64;
    Some(hours * 60.0 + minutes + seconds / 60.0)
}
