// src/gpio/backend/simulated.rs
//! In-memory pin. Cloned handles share state, so tests can watch a pin the
//! coordinator owns.

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use tokio::time::Instant;

use crate::{
    error::{RelayError, Result},
    gpio::PinLevel,
};

use super::PinBackend;

/// One recorded write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinWrite {
    pub level: PinLevel,
    pub at: Instant,
}

#[derive(Debug, Default)]
struct SimState {
    pin: Option<u8>,
    level: Option<PinLevel>,
    writes: Vec<PinWrite>,
    released: bool,
    fail_setup: bool,
    fail_writes: bool,
    fail_reads: bool,
    write_delay: Option<Duration>,
}

#[derive(Debug, Clone, Default)]
pub struct SimulatedPin {
    state: Arc<Mutex<SimState>>,
}

impl SimulatedPin {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, SimState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current level, `None` before `setup_output`
    pub fn level(&self) -> Option<PinLevel> {
        self.state().level
    }

    pub fn pin(&self) -> Option<u8> {
        self.state().pin
    }

    /// Every level written, including the initial one from `setup_output`
    pub fn writes(&self) -> Vec<PinWrite> {
        self.state().writes.clone()
    }

    pub fn levels(&self) -> Vec<PinLevel> {
        self.state().writes.iter().map(|w| w.level).collect()
    }

    pub fn is_released(&self) -> bool {
        self.state().released
    }

    pub fn set_fail_setup(&self, fail: bool) {
        self.state().fail_setup = fail;
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.state().fail_writes = fail;
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.state().fail_reads = fail;
    }

    /// Make every later write block the calling thread for `delay`, like a
    /// wedged GPIO line.
    pub fn set_write_delay(&self, delay: Duration) {
        self.state().write_delay = Some(delay);
    }
}

impl PinBackend for SimulatedPin {
    fn name(&self) -> &str {
        "simulated"
    }

    fn setup_output(&mut self, pin: u8, initial: PinLevel) -> Result<()> {
        let mut state = self.state();
        if state.fail_setup {
            return Err(RelayError::GpioUnavailable(format!("simulated setup failure on pin {}", pin)));
        }
        state.pin = Some(pin);
        state.level = Some(initial);
        state.released = false;
        state.writes.push(PinWrite { level: initial, at: Instant::now() });
        Ok(())
    }

    fn write(&mut self, level: PinLevel) -> Result<()> {
        let delay = self.state().write_delay;
        if let Some(delay) = delay {
            std::thread::sleep(delay);
        }

        let mut state = self.state();
        if state.fail_writes {
            return Err(RelayError::Gpio("simulated write fault".to_string()));
        }
        if state.pin.is_none() || state.released {
            return Err(RelayError::Gpio("pin not configured as output".to_string()));
        }
        state.level = Some(level);
        state.writes.push(PinWrite { level, at: Instant::now() });
        Ok(())
    }

    fn read(&self) -> Result<PinLevel> {
        let state = self.state();
        if state.fail_reads {
            return Err(RelayError::Gpio("simulated read fault".to_string()));
        }
        state
            .level
            .ok_or_else(|| RelayError::Gpio("pin not configured as output".to_string()))
    }

    fn release(&mut self) -> Result<()> {
        self.state().released = true;
        Ok(())
    }
}
