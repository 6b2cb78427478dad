//! Diagnostic side channel for key state transitions.
//!
//! A sink is injected when the keypad is built and receives one record per
//! state change. It observes; it never influences scanning, and the default
//! [`NoTrace`] discards everything.

use crate::debounce::KeyState;
use crate::key_codes::KeyCode;

/// Snapshot of one key state change, handed to the sink during a scan.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    /// Position of the key in its keypad.
    pub index: usize,
    /// The key's identity.
    pub code: KeyCode,
    /// State before the scan pass.
    pub from: KeyState,
    /// State after the scan pass.
    pub to: KeyState,
    /// Tick at which the change was observed.
    pub tick: u32,
}

/// Receiver for [`Transition`] records.
pub trait TraceSink {
    fn record(&mut self, transition: &Transition);
}

/// Sink that discards every record.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    fn record(&mut self, _transition: &Transition) {}
}

/// Sink that forwards records to the `log` facade.
#[cfg(feature = "log")]
#[derive(Copy, Clone, Debug, Default)]
pub struct LogTrace;

#[cfg(feature = "log")]
impl TraceSink for LogTrace {
    fn record(&mut self, t: &Transition) {
        log::debug!("key {} ({:?}): {:?} -> {:?} at {}", t.index, t.code, t.from, t.to, t.tick);
    }
}

/// Sink that forwards records to `defmt`.
#[cfg(feature = "defmt")]
#[derive(Copy, Clone, Debug, Default)]
pub struct DefmtTrace;

#[cfg(feature = "defmt")]
impl TraceSink for DefmtTrace {
    fn record(&mut self, t: &Transition) {
        defmt::debug!("key {} ({}): {} -> {} at {}", t.index, t.code, t.from, t.to, t.tick);
    }
}
