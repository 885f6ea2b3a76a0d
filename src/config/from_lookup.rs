use crate::error::{RelayError, Result};

use super::{parse_flag, BackendKind, RelayConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_RELAY_PIN};

impl RelayConfig {
    /// Build the config from any key lookup. `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let relay_pin = match lookup("RELAY_PIN") {
            Some(raw) => raw.trim().parse::<u8>().map_err(|e| {
                RelayError::Config(format!("RELAY_PIN must be a pin number, got {:?}: {}", raw, e))
            })?,
            None => DEFAULT_RELAY_PIN,
        };

        let active_high = parse_flag(lookup("RELAY_ACTIVE_HIGH").as_deref(), false);
        let gpio_enabled = parse_flag(lookup("GPIO_ENABLED").as_deref(), true);

        let backend = match lookup("GPIO_BACKEND") {
            None => BackendKind::Rppal,
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "" | "rppal" => BackendKind::Rppal,
                "simulated" | "sim" => BackendKind::Simulated,
                other => {
                    return Err(RelayError::Config(format!(
                        "GPIO_BACKEND must be 'rppal' or 'simulated', got {:?}",
                        other
                    )))
                }
            },
        };

        let host = lookup("GPIO_SERVICE_HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("GPIO_SERVICE_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                RelayError::Config(format!("GPIO_SERVICE_PORT must be a port, got {:?}: {}", raw, e))
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            relay_pin,
            active_high,
            gpio_enabled,
            backend,
            host,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = RelayConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, RelayConfig::default());
        assert_eq!(config.relay_pin, 17);
        assert!(!config.active_high);
        assert!(config.gpio_enabled);
        assert_eq!(config.listen_addr(), "0.0.0.0:3001");
    }

    #[test]
    fn test_reads_every_variable() {
        let config = RelayConfig::from_lookup(lookup_from(&[
            ("RELAY_PIN", "27"),
            ("RELAY_ACTIVE_HIGH", "true"),
            ("GPIO_ENABLED", "0"),
            ("GPIO_BACKEND", "simulated"),
            ("GPIO_SERVICE_HOST", "127.0.0.1"),
            ("GPIO_SERVICE_PORT", "8080"),
        ]))
        .unwrap();

        assert_eq!(config.relay_pin, 27);
        assert!(config.active_high);
        assert!(!config.gpio_enabled);
        assert_eq!(config.backend, BackendKind::Simulated);
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_bad_pin_is_config_error() {
        let err = RelayConfig::from_lookup(lookup_from(&[("RELAY_PIN", "seventeen")])).unwrap_err();
        assert!(matches!(err, RelayError::Config(_)));
    }

    #[test]
    fn test_unknown_backend_is_config_error() {
        let err = RelayConfig::from_lookup(lookup_from(&[("GPIO_BACKEND", "sysfs")])).unwrap_err();
        assert!(matches!(err, RelayError::Config(_)));
    }
}
