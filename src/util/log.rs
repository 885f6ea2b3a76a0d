// src/util/log.rs

//! Logger Utility - routes the crate's log macros through `tracing`
use tracing_subscriber::EnvFilter;

#[doc(hidden)]
pub use tracing;

/// Target every crate log line is emitted under
pub const LOG_TARGET: &str = "gpio_relay";

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    pub fn as_str(&self) -> &str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }

    /// Default level when `RUST_LOG` is not set
    pub fn from_debug_flag(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => LogLevel::Debug,
            _ => LogLevel::Info,
        }
    }
}

/// Install the global fmt subscriber. Safe to call more than once.
pub fn init() {
    let debug_var = std::env::var("DEBUG").ok();
    let level = LogLevel::from_debug_flag(debug_var.as_deref());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Convenience macro for error logging with formatting
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        $crate::util::log::tracing::error!(target: $crate::util::log::LOG_TARGET, $($arg)*);
    }};
}

/// Convenience macro for warning logging with formatting
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        $crate::util::log::tracing::warn!(target: $crate::util::log::LOG_TARGET, $($arg)*);
    }};
}

/// Convenience macro for info logging with formatting
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        $crate::util::log::tracing::info!(target: $crate::util::log::LOG_TARGET, $($arg)*);
    }};
}

/// Convenience macro for debug logging with formatting
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        $crate::util::log::tracing::debug!(target: $crate::util::log::LOG_TARGET, $($arg)*);
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flag_selects_level() {
        assert_eq!(LogLevel::from_debug_flag(Some("true")), LogLevel::Debug);
        assert_eq!(LogLevel::from_debug_flag(Some("TRUE")), LogLevel::Debug);
        assert_eq!(LogLevel::from_debug_flag(Some("1")), LogLevel::Debug);
        assert_eq!(LogLevel::from_debug_flag(Some("no")), LogLevel::Info);
        assert_eq!(LogLevel::from_debug_flag(None), LogLevel::Info);
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init();
        init();
        log_info!("logger initialised {}", "twice");
    }
}
