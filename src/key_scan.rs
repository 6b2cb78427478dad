//! Keypad registry and the per-tick scan engine.
//!
//! A [`Keypad`] owns a fixed, ordered set of [`Key`]s. The caller invokes
//! [`Keypad::scan`] at a bounded polling interval with its own tick counter;
//! each scan strobes, samples, and advances every key exactly once, in
//! order, and the caller reads the resulting states back between scans.

use crate::debounce::{self, KeyState, Timings};
use crate::driver::PinDriver;
use crate::key_codes::KeyCode;
use crate::trace::{NoTrace, TraceSink, Transition};

/// How a key is attached to the hardware.
#[derive(Copy, Clone, Debug)]
pub enum Wiring<Out> {
    /// Dedicated input line, sampled directly.
    Direct,
    /// Row/column intersection on a scanned matrix. `strobe` is driven high
    /// immediately before the shared input line is sampled and back low
    /// right after, so intersections on the same line cannot cross-talk.
    Matrix {
        /// Output line selecting this key's row/column.
        strobe: Out,
    },
}

/// One physical or logical button.
///
/// `Out` and `In` are the line-handle types of the [`PinDriver`] that will
/// scan this key. Keys sharing a physical line hold equal handles.
pub struct Key<Out, In> {
    code: KeyCode,
    wiring: Wiring<Out>,
    input: In,
    state: KeyState,
    last_action_time: u32,
    last_processed_time: u32,
}

impl<Out, In> Key<Out, In> {
    /// A discrete button with its own input line. No strobing involved.
    pub fn button(code: KeyCode, input: In) -> Self {
        Self::with_wiring(code, Wiring::Direct, input)
    }

    /// A matrix-scanned key: `strobe` is pulsed around every sample of
    /// `input`.
    pub fn matrix(code: KeyCode, strobe: Out, input: In) -> Self {
        Self::with_wiring(code, Wiring::Matrix { strobe }, input)
    }

    fn with_wiring(code: KeyCode, wiring: Wiring<Out>, input: In) -> Self {
        Self {
            code,
            wiring,
            input,
            state: KeyState::Idle,
            last_action_time: 0,
            last_processed_time: 0,
        }
    }

    /// The key's identity.
    pub fn code(&self) -> KeyCode {
        self.code
    }

    /// How the key is wired.
    pub fn wiring(&self) -> &Wiring<Out> {
        &self.wiring
    }

    /// Current debounced state.
    pub fn state(&self) -> KeyState {
        self.state
    }

    /// Whether the key is currently down (`Pressed` or `Held`).
    pub fn is_pressed(&self) -> bool {
        matches!(self.state, KeyState::Pressed | KeyState::Held)
    }

    /// Tick at which the current state was entered or last confirmed.
    pub fn last_action_time(&self) -> u32 {
        self.last_action_time
    }

    /// Tick of the most recent scan pass over this key. Reserved for
    /// rate-limiting; nothing consults it yet.
    pub fn last_processed_time(&self) -> u32 {
        self.last_processed_time
    }

    fn reset(&mut self) {
        self.state = KeyState::Idle;
        self.last_action_time = 0;
        self.last_processed_time = 0;
    }

    /// One strobe/sample/advance pass. Returns the transition edge when the
    /// state changed.
    fn step<D>(&mut self, io: &mut D, timings: &Timings, now: u32) -> Option<(KeyState, KeyState)>
    where
        D: PinDriver<Output = Out, Input = In>,
    {
        if let Wiring::Matrix { strobe } = &self.wiring {
            io.set_output_high(strobe);
        }
        let pressed = io.read_input(&self.input);
        if let Wiring::Matrix { strobe } = &self.wiring {
            io.set_output_low(strobe);
        }

        let old = self.state;
        let elapsed = now.wrapping_sub(self.last_action_time);
        let next = debounce::advance(old, pressed, elapsed, timings);

        // A release observation confirms Released even when the state does
        // not change, keeping the idle window sliding while releases keep
        // arriving. A re-press inside the window must not touch the clock.
        if next != old || (next == KeyState::Released && !pressed) {
            self.last_action_time = now;
        }
        self.state = next;
        self.last_processed_time = now;

        (next != old).then_some((old, next))
    }
}

/// Aggregate wiring of a keypad. Descriptive only; scanning never branches
/// on it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeypadKind {
    /// Every key is a discrete button.
    Buttons,
    /// Every key sits on a scanned matrix.
    Matrix,
    /// Both kinds are present.
    Mixed,
}

impl KeypadKind {
    fn of<Out, In>(keys: &[Key<Out, In>]) -> Self {
        let mut buttons = false;
        let mut matrix = false;
        for key in keys {
            match key.wiring {
                Wiring::Direct => buttons = true,
                Wiring::Matrix { .. } => matrix = true,
            }
        }
        match (buttons, matrix) {
            (false, true) => KeypadKind::Matrix,
            (true, true) => KeypadKind::Mixed,
            // An empty keypad counts as buttons-only.
            (_, false) => KeypadKind::Buttons,
        }
    }
}

/// A fixed, ordered collection of keys plus the scan configuration.
///
/// Built once at startup; wiring never changes afterwards. [`init`] resets
/// the tracked states, [`scan`] is the only mutator from then on, and the
/// structure lives for the life of the firmware. `&mut self` on both keeps
/// scans serialized in safe Rust; callers with multiple execution contexts
/// (a scan in an interrupt handler, say) must wrap calls in the platform's
/// critical-section primitive.
///
/// [`init`]: Keypad::init
/// [`scan`]: Keypad::scan
pub struct Keypad<Out, In, S, const N: usize> {
    kind: KeypadKind,
    timings: Timings,
    trace: S,
    keys: [Key<Out, In>; N],
}

impl<Out, In, const N: usize> Keypad<Out, In, NoTrace, N> {
    /// Builds a keypad over `keys` with default [`Timings`] and no
    /// diagnostics. The aggregate [`KeypadKind`] is inferred from the keys'
    /// wiring. `N = 0` is fine; such a keypad scans as a no-op.
    pub fn new(keys: [Key<Out, In>; N]) -> Self {
        Self { kind: KeypadKind::of(&keys), timings: Timings::default(), trace: NoTrace, keys }
    }
}

impl<Out, In, S: TraceSink, const N: usize> Keypad<Out, In, S, N> {
    /// Replaces the timing thresholds.
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    /// Installs a diagnostic sink. Sinks only observe; scanning behaves
    /// identically with or without one.
    pub fn with_trace<S2: TraceSink>(self, trace: S2) -> Keypad<Out, In, S2, N> {
        let Keypad { kind, timings, keys, trace: _ } = self;
        Keypad { kind, timings, trace, keys }
    }

    /// Resets every key to `Idle` with zeroed timestamps, regardless of
    /// prior content. A no-op over zero keys.
    pub fn init(&mut self) {
        for key in self.keys.iter_mut() {
            key.reset();
        }
    }

    /// One full pass: for every key in order, strobe (matrix keys), sample,
    /// and advance the debounce state. `now` is the caller's tick counter
    /// and must be monotonically non-decreasing modulo u32 wraparound.
    ///
    /// Strobe pulses never overlap: a key's line goes low again before the
    /// next key's line goes high.
    pub fn scan<D>(&mut self, io: &mut D, now: u32)
    where
        D: PinDriver<Output = Out, Input = In>,
    {
        for (index, key) in self.keys.iter_mut().enumerate() {
            if let Some((from, to)) = key.step(io, &self.timings, now) {
                self.trace.record(&Transition { index, code: key.code, from, to, tick: now });
            }
        }
    }

    /// The keys, in scan order. States are read back through this between
    /// scans.
    pub fn keys(&self) -> &[Key<Out, In>] {
        &self.keys
    }

    /// The first key carrying `code`, if any.
    pub fn key(&self, code: KeyCode) -> Option<&Key<Out, In>> {
        self.keys.iter().find(|key| key.code == code)
    }

    /// Aggregate wiring of this keypad.
    pub fn kind(&self) -> KeypadKind {
        self.kind
    }

    /// The thresholds scans run with.
    pub fn timings(&self) -> Timings {
        self.timings
    }

    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }
}
