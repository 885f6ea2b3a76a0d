use std::fmt;

use serde::Serialize;

/// Physical level of the output pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PinLevel {
    High,
    Low,
}

impl PinLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PinLevel::High => "HIGH",
            PinLevel::Low => "LOW",
        }
    }
}

impl fmt::Display for PinLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical relay intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayLevel {
    On,
    Off,
}

impl RelayLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelayLevel::On => "ON",
            RelayLevel::Off => "OFF",
        }
    }

    pub fn is_on(&self) -> bool {
        matches!(self, RelayLevel::On)
    }
}

impl fmt::Display for RelayLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps logical ON/OFF to HIGH/LOW. Active-low boards energise the coil on LOW.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Polarity {
    pub active_high: bool,
}

impl Polarity {
    pub fn new(active_high: bool) -> Self {
        Self { active_high }
    }

    pub fn pin_level(&self, level: RelayLevel) -> PinLevel {
        match (self.active_high, level) {
            (true, RelayLevel::On) | (false, RelayLevel::Off) => PinLevel::High,
            (true, RelayLevel::Off) | (false, RelayLevel::On) => PinLevel::Low,
        }
    }

    /// `relay_on = (pin == HIGH) == active_high`
    pub fn relay_level(&self, pin: PinLevel) -> RelayLevel {
        if (pin == PinLevel::High) == self.active_high {
            RelayLevel::On
        } else {
            RelayLevel::Off
        }
    }
}
