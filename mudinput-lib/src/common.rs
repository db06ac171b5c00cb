use core::fmt;

/// Width of the client framebuffer in pixels.
pub const FRAMEBUFFER_WIDTH: i32 = 512;
/// Height of the client framebuffer in pixels.
pub const FRAMEBUFFER_HEIGHT: i32 = 346;

/// Mouse buttons as numbered by the client's pointer callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    Left = 1,
    Right = 3,
}

impl MouseButton {
    pub const fn number(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MouseButton::Left => write!(f, "Left"),
            MouseButton::Right => write!(f, "Right"),
        }
    }
}
