use serde::Serialize;

use crate::gpio::PinLevel;

/// Snapshot returned by `RelayCoordinator::status`. Serializes with a
/// `status` tag of `mock`, `ok` or `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RelayStatus {
    /// No hardware behind the driver
    Mock { relay_pin: u8 },
    Ok {
        relay_pin: u8,
        pin_state: PinLevel,
        relay_on: bool,
        active_high: bool,
    },
    /// The pin could not be read
    Error { relay_pin: u8, error: String },
}

impl RelayStatus {
    pub fn is_error(&self) -> bool {
        matches!(self, RelayStatus::Error { .. })
    }

    pub fn relay_on(&self) -> Option<bool> {
        match self {
            RelayStatus::Ok { relay_on, .. } => Some(*relay_on),
            _ => None,
        }
    }

    /// Whether the snapshot came from real pin state; unknown after a fault.
    pub fn gpio_available(&self) -> Option<bool> {
        match self {
            RelayStatus::Mock { .. } => Some(false),
            RelayStatus::Ok { .. } => Some(true),
            RelayStatus::Error { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub gpio_available: bool,
    pub gpio_enabled: bool,
    pub relay_pin: u8,
    pub active_high: bool,
}
