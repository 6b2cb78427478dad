//! Polling debouncer and state tracker for embedded key input.
//!
//! Discrete buttons and matrix-scanned keypads share one engine: the caller
//! owns a periodic tick and the pin I/O, and calls [`Keypad::scan`] once per
//! tick. Each scan strobes matrix lines, samples inputs, and advances every
//! key through `Idle -> Pressed -> Held -> Released -> Idle` using the
//! time thresholds in [`Timings`]. No allocation, no interrupts, no
//! platform assumptions beyond the [`PinDriver`] capability.
//!
//! ```
//! use keyscan::{Key, KeyCode, KeyState, Keypad, PinDriver};
//!
//! // The platform supplies the pin I/O; line handles are whatever type the
//! // driver wants them to be.
//! struct Sim {
//!     row: bool,
//!     button: bool,
//! }
//!
//! impl PinDriver for Sim {
//!     type Output = u8;
//!     type Input = u8;
//!
//!     fn set_output_high(&mut self, _line: &u8) {}
//!     fn set_output_low(&mut self, _line: &u8) {}
//!     fn read_input(&mut self, line: &u8) -> bool {
//!         match line {
//!             0 => self.row,
//!             _ => self.button,
//!         }
//!     }
//! }
//!
//! // Three keys strobed onto one shared row, plus a discrete button on its
//! // own input line.
//! let mut keypad = Keypad::new([
//!     Key::matrix(KeyCode::Num1, 0, 0),
//!     Key::matrix(KeyCode::Num2, 1, 0),
//!     Key::matrix(KeyCode::Num3, 2, 0),
//!     Key::button(KeyCode::Enter, 1),
//! ]);
//! keypad.init();
//!
//! let mut io = Sim { row: false, button: true };
//! keypad.scan(&mut io, 1);
//!
//! assert_eq!(keypad.key(KeyCode::Enter).unwrap().state(), KeyState::Pressed);
//! assert!(!keypad.keys()[0].is_pressed());
//! ```

#![cfg_attr(not(test), no_std)]

pub mod debounce;
pub mod driver;
pub mod key_codes;
pub mod key_scan;
pub mod pins;
pub mod trace;

pub use debounce::{KeyState, Timings, HOLD_TIME, IDLE_TIME};
pub use driver::PinDriver;
pub use key_codes::KeyCode;
pub use key_scan::{Key, Keypad, KeypadKind, Wiring};
pub use trace::{NoTrace, TraceSink, Transition};
