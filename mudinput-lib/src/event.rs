use crate::{controller::ControllerState, keys::KeySym};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformEvent {
    Quit,
    KeyDown(KeySym),
    KeyUp(KeySym),
    /// SDL 1.2 style resize, carrying the new size.
    VideoResize { width: u32, height: u32 },
    /// SDL 2 style resize notification.
    WindowResized,
    Other,
}

/// The windowing and input layer underneath the client.
pub trait Platform {
    /// State of the first connected game controller, if there is one.
    fn controller_state(&mut self) -> Option<ControllerState>;
    /// Moves the native pointer.
    fn warp_mouse(&mut self, x: i32, y: i32);
    fn poll_event(&mut self) -> Option<PlatformEvent>;
}
