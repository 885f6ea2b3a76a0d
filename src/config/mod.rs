// src/config/mod.rs

//! Service configuration, read once from the environment at startup

mod from_env;
mod from_lookup;
mod parse_flag;
mod listen_addr;

pub use parse_flag::parse_flag;

pub const DEFAULT_RELAY_PIN: u8 = 17;
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Which pin backend the driver should try to open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Raspberry Pi GPIO through `rppal`
    Rppal,
    /// In-memory pin, useful on development machines
    Simulated,
}

impl BackendKind {
    pub fn as_str(&self) -> &str {
        match self {
            BackendKind::Rppal => "rppal",
            BackendKind::Simulated => "simulated",
        }
    }
}

/// Immutable after startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub relay_pin: u8,
    pub active_high: bool,
    pub gpio_enabled: bool,
    pub backend: BackendKind,
    pub host: String,
    pub port: u16,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            relay_pin: DEFAULT_RELAY_PIN,
            active_high: false,
            gpio_enabled: true,
            backend: BackendKind::Rppal,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
