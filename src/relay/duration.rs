// src/relay/duration.rs
//! Blink duration normalisation. Bad input never fails, it falls back.

use serde_json::Value;

pub const DEFAULT_BLINK_MS: u64 = 3000;

pub fn clamp_duration(ms: i64) -> u64 {
    ms.max(0) as u64
}

/// Integer text only; anything else is the default.
pub fn parse_duration_str(raw: &str) -> u64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return DEFAULT_BLINK_MS;
    }
    raw.parse::<i64>().map(clamp_duration).unwrap_or(DEFAULT_BLINK_MS)
}

/// Resolve a `duration_ms` taken from a request body or query string
pub fn resolve_duration(raw: Option<&Value>) -> u64 {
    match raw {
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                clamp_duration(i)
            } else if let Some(u) = n.as_u64() {
                u
            } else {
                match n.as_f64() {
                    Some(f) if f.is_finite() => clamp_duration(f.trunc() as i64),
                    _ => DEFAULT_BLINK_MS,
                }
            }
        }
        Some(Value::String(s)) => parse_duration_str(s),
        _ => DEFAULT_BLINK_MS,
    }
}
