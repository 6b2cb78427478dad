//! Logical key identities reported by a keypad.

/// The closed set of key codes a [`Key`](crate::Key) can carry.
///
/// Codes are identity only; they never influence scanning or debouncing.
#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyCode {
    Num0 = 0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,
    A,
    B,
    C,
    D,
    E,
    F,
    Star,
    Sharp,
    Enter,
    Escape,
    Back,
    Plus,
    Minus,
    Multiply,
    Divide,
    Play,
    Stop,
    Next,
    Prev,
}
