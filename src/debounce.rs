//! Time-threshold debouncing for a single key slot.
//!
//! # Algorithm
//! A key advances through `Idle -> Pressed -> Held` while its input stays
//! high, and drops back through `Released -> Idle` once the input goes low.
//! `Released` is a short observation window: a release seen again within
//! [`IDLE_TIME`] ticks keeps reporting `Released`, while a release first
//! noticed after the window has already passed settles straight to `Idle`.
//! A re-press inside the window stays `Released`, so contact bounce never
//! produces a second `Pressed` edge.
//!
//! # Ticks
//! Ticks are of arbitrary unit (commonly milliseconds); the caller owns the
//! counter and hands the current value to every scan. Elapsed time is
//! computed with wrapping arithmetic, so the counter overflowing is fine.

/// Debounced state of one key.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyState {
    /// No press in sight.
    #[default]
    Idle,
    /// Input went high; not yet high long enough to count as held.
    Pressed,
    /// Input stayed high for longer than the hold threshold.
    Held,
    /// Input went low within the last idle-threshold ticks.
    Released,
}

/// Default number of ticks a key must stay pressed before it counts as held.
pub const HOLD_TIME: u32 = 500;

/// Default number of ticks a released key lingers in `Released` before
/// settling to `Idle`.
pub const IDLE_TIME: u32 = 100;

/// Timing thresholds shared by every key of a keypad.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timings {
    /// Ticks of continuous press after which `Pressed` becomes `Held`.
    pub hold_ticks: u32,
    /// Ticks a release observation stays visible as `Released`.
    pub idle_ticks: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self { hold_ticks: HOLD_TIME, idle_ticks: IDLE_TIME }
    }
}

/// Computes the next state from the sampled input bit and the ticks elapsed
/// since the state was last entered or confirmed. Thresholds are strict:
/// `elapsed` equal to a threshold does not cross it.
pub(crate) fn advance(state: KeyState, pressed: bool, elapsed: u32, timings: &Timings) -> KeyState {
    match (state, pressed) {
        (KeyState::Idle, true) => KeyState::Pressed,
        (KeyState::Pressed, true) if elapsed > timings.hold_ticks => KeyState::Held,
        // Held stays Held; Released stays Released (bounce re-press).
        (state, true) => state,
        (KeyState::Idle, false) => KeyState::Idle,
        (_, false) if elapsed > timings.idle_ticks => KeyState::Idle,
        (_, false) => KeyState::Released,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TIMINGS: Timings = Timings { hold_ticks: HOLD_TIME, idle_ticks: IDLE_TIME };

    #[test]
    fn idle_key_reacts_to_press_immediately() {
        assert_eq!(advance(KeyState::Idle, true, 0, &TIMINGS), KeyState::Pressed);
        assert_eq!(advance(KeyState::Idle, true, 10_000, &TIMINGS), KeyState::Pressed);
    }

    #[test]
    fn pressed_key_becomes_held_strictly_after_hold_time() {
        assert_eq!(advance(KeyState::Pressed, true, HOLD_TIME, &TIMINGS), KeyState::Pressed);
        assert_eq!(advance(KeyState::Pressed, true, HOLD_TIME + 1, &TIMINGS), KeyState::Held);
    }

    #[test]
    fn held_key_stays_held_while_pressed() {
        assert_eq!(advance(KeyState::Held, true, 0, &TIMINGS), KeyState::Held);
        assert_eq!(advance(KeyState::Held, true, HOLD_TIME * 4, &TIMINGS), KeyState::Held);
    }

    #[test]
    fn repress_during_release_window_does_not_restart_the_press() {
        assert_eq!(advance(KeyState::Released, true, 3, &TIMINGS), KeyState::Released);
    }

    #[test]
    fn release_within_idle_window_reports_released() {
        for state in [KeyState::Pressed, KeyState::Held, KeyState::Released] {
            assert_eq!(advance(state, false, IDLE_TIME, &TIMINGS), KeyState::Released);
        }
    }

    #[test]
    fn release_observed_late_settles_straight_to_idle() {
        for state in [KeyState::Pressed, KeyState::Held, KeyState::Released] {
            assert_eq!(advance(state, false, IDLE_TIME + 1, &TIMINGS), KeyState::Idle);
        }
    }

    #[test]
    fn idle_key_ignores_a_low_input() {
        assert_eq!(advance(KeyState::Idle, false, 0, &TIMINGS), KeyState::Idle);
        assert_eq!(advance(KeyState::Idle, false, u32::MAX, &TIMINGS), KeyState::Idle);
    }

    fn any_state() -> impl Strategy<Value = KeyState> {
        prop_oneof![
            Just(KeyState::Idle),
            Just(KeyState::Pressed),
            Just(KeyState::Held),
            Just(KeyState::Released),
        ]
    }

    proptest! {
        // A high input can never push a key toward Idle, and a low input can
        // never push it toward Pressed or Held.
        #[test]
        fn high_input_never_yields_idle(state in any_state(), elapsed in any::<u32>()) {
            prop_assert_ne!(advance(state, true, elapsed, &TIMINGS), KeyState::Idle);
        }

        #[test]
        fn low_input_never_yields_a_press(state in any_state(), elapsed in any::<u32>()) {
            let next = advance(state, false, elapsed, &TIMINGS);
            prop_assert_ne!(next, KeyState::Pressed);
            prop_assert_ne!(next, KeyState::Held);
        }

        // With no elapsed time the settled states are fixed points.
        #[test]
        fn settled_states_are_stable_at_zero_elapsed(state in any_state()) {
            match state {
                KeyState::Held => prop_assert_eq!(advance(state, true, 0, &TIMINGS), KeyState::Held),
                KeyState::Idle => prop_assert_eq!(advance(state, false, 0, &TIMINGS), KeyState::Idle),
                _ => {}
            }
        }
    }
}
