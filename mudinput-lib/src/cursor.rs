use crate::{
    common::{FRAMEBUFFER_HEIGHT, FRAMEBUFFER_WIDTH},
    controller::Buttons,
};

/// A mouse pointer driven by the directional pad.
///
/// The position is always inside the framebuffer after [`VirtualCursor::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VirtualCursor {
    x: i32,
    y: i32,
}

impl VirtualCursor {
    /// Pixels moved per frame while a direction is held.
    pub const DPAD_SPEED: i32 = 5;

    pub const fn new() -> Self {
        Self {
            x: FRAMEBUFFER_WIDTH / 2,
            y: FRAMEBUFFER_HEIGHT / 2,
        }
    }

    pub const fn x(&self) -> i32 {
        self.x
    }

    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Moves the cursor one frame's worth for every held direction, then clamps it.
    pub fn step(&mut self, buttons: Buttons) {
        if buttons.contains(Buttons::DPAD_UP) {
            self.y -= Self::DPAD_SPEED;
        }
        if buttons.contains(Buttons::DPAD_DOWN) {
            self.y += Self::DPAD_SPEED;
        }
        if buttons.contains(Buttons::DPAD_LEFT) {
            self.x -= Self::DPAD_SPEED;
        }
        if buttons.contains(Buttons::DPAD_RIGHT) {
            self.x += Self::DPAD_SPEED;
        }

        self.x = self.x.clamp(0, FRAMEBUFFER_WIDTH - 1);
        self.y = self.y.clamp(0, FRAMEBUFFER_HEIGHT - 1);
    }
}

impl Default for VirtualCursor {
    fn default() -> Self {
        Self::new()
    }
}
