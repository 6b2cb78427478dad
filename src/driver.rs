//! The seam between the scan engine and the platform's pin I/O.

/// Pin-level capabilities a [`Keypad`](crate::Keypad) scan consumes.
///
/// Implementations own the physical I/O; the engine only ever sees opaque
/// line handles and booleans. Handles for lines shared between keys (the
/// usual case on a matrix) simply compare equal; the engine never assumes
/// handles are distinct.
///
/// Strobe calls come in non-overlapping high/low pairs, one pair per
/// matrix key per scan, so implementations need no nesting bookkeeping.
pub trait PinDriver {
    /// Handle to a strobe (output) line.
    type Output;
    /// Handle to a sampled (input) line.
    type Input;

    /// Drives a strobe line to logical high.
    fn set_output_high(&mut self, line: &Self::Output);

    /// Drives a strobe line back to logical low.
    fn set_output_low(&mut self, line: &Self::Output);

    /// Samples an input line; `true` means the key contact is closed.
    fn read_input(&mut self, line: &Self::Input) -> bool;
}
