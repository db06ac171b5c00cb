use bitflags::bitflags;

bitflags! {
    /// Digital button state of a Dreamcast-style controller.
    ///
    /// Bit positions follow the KallistiOS `CONT_*` layout.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Buttons: u32 {
        const C = 1 << 0;
        const B = 1 << 1;
        const A = 1 << 2;
        const START = 1 << 3;
        const DPAD_UP = 1 << 4;
        const DPAD_DOWN = 1 << 5;
        const DPAD_LEFT = 1 << 6;
        const DPAD_RIGHT = 1 << 7;
        const Z = 1 << 8;
        const Y = 1 << 9;
        const X = 1 << 10;
        const D = 1 << 11;
    }
}

/// One snapshot of the first connected controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ControllerState {
    pub buttons: Buttons,
    /// Left trigger, 0..=255.
    pub ltrig: u8,
    /// Right trigger, 0..=255.
    pub rtrig: u8,
}

impl ControllerState {
    /// Trigger level a trigger has to exceed to count as a scroll.
    pub const TRIGGER_THRESHOLD: u8 = 10;

    /// Scroll delta requested by the triggers this frame, if any.
    ///
    /// The right trigger is evaluated last and wins when both are held.
    pub fn scroll_delta(&self) -> Option<i32> {
        let mut delta = None;
        if self.ltrig > Self::TRIGGER_THRESHOLD {
            delta = Some(-1);
        }
        if self.rtrig > Self::TRIGGER_THRESHOLD {
            delta = Some(1);
        }
        delta
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Pressed,
    Released,
}

/// Remembers whether a button was down on the previous poll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonLatch {
    held: bool,
}

impl ButtonLatch {
    pub const fn is_held(&self) -> bool {
        self.held
    }

    /// Feeds the current state and returns the transition, if one happened.
    pub fn update(&mut self, down: bool) -> Option<Edge> {
        match (self.held, down) {
            (false, true) => {
                self.held = true;
                Some(Edge::Pressed)
            }
            (true, false) => {
                self.held = false;
                Some(Edge::Released)
            }
            _ => None,
        }
    }
}
