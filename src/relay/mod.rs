// src/relay/mod.rs

//! Relay coordinator: serializes commands and owns the single in-flight blink

mod blink;
mod coordinator;
mod duration;
mod status;

use std::time::Duration;

pub use coordinator::RelayCoordinator;
pub use duration::{clamp_duration, parse_duration_str, resolve_duration, DEFAULT_BLINK_MS};
pub use status::{HealthReport, RelayStatus};

/// How long a superseding command waits for the running blink to stop
pub const SUPERSEDE_TIMEOUT: Duration = Duration::from_secs(1);

/// How long shutdown waits for the running blink to stop
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);
