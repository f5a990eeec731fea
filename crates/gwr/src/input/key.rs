/// Keyboard key identifier.
///
/// Only keys demos and simple tools poll for are named; everything else maps
/// to `Unknown` with the platform key code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Tab,
    Backspace,

    Up,
    Down,
    Left,
    Right,

    W,
    A,
    S,
    D,
    Q,
    E,
    R,

    F1,
    F2,
    F3,
    F4,
    F5,

    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}
