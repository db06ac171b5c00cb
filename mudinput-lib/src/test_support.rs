use std::collections::VecDeque;

use crate::{
    client::{Client, ClientOptions, ServerConfig},
    common::MouseButton,
    controller::ControllerState,
    event::{Platform, PlatformEvent},
    keys::KeySym,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    MouseMoved(i32, i32),
    MousePressed(i32, i32, MouseButton),
    MouseReleased(i32, i32, MouseButton),
    KeyPressed(u32, Option<char>),
    KeyReleased(u32),
    ResizedTo(u32, u32),
    Resized,
}

#[derive(Debug, Default)]
pub struct RecordingClient {
    pub calls: Vec<Call>,
    pub scroll_delta: Option<i32>,
    pub options: ClientOptions,
    pub server: ServerConfig,
}

impl Client for RecordingClient {
    fn mouse_moved(&mut self, x: i32, y: i32) {
        self.calls.push(Call::MouseMoved(x, y));
    }

    fn mouse_pressed(&mut self, x: i32, y: i32, button: MouseButton) {
        self.calls.push(Call::MousePressed(x, y, button));
    }

    fn mouse_released(&mut self, x: i32, y: i32, button: MouseButton) {
        self.calls.push(Call::MouseReleased(x, y, button));
    }

    fn key_pressed(&mut self, code: u32, character: Option<char>) {
        self.calls.push(Call::KeyPressed(code, character));
    }

    fn key_released(&mut self, code: u32) {
        self.calls.push(Call::KeyReleased(code));
    }

    fn resized_to(&mut self, width: u32, height: u32) {
        self.calls.push(Call::ResizedTo(width, height));
    }

    fn resized(&mut self) {
        self.calls.push(Call::Resized);
    }

    fn set_mouse_scroll_delta(&mut self, delta: i32) {
        self.scroll_delta = Some(delta);
    }

    fn options_mut(&mut self) -> &mut ClientOptions {
        &mut self.options
    }

    fn server_mut(&mut self) -> &mut ServerConfig {
        &mut self.server
    }
}

/// Plays back controller frames and native events queued by a test.
#[derive(Debug, Default)]
pub struct ScriptedPlatform {
    pub frames: VecDeque<Option<ControllerState>>,
    pub events: VecDeque<PlatformEvent>,
    pub warps: Vec<(i32, i32)>,
}

impl ScriptedPlatform {
    pub fn key_down(&mut self, keysym: KeySym) {
        self.events.push_back(PlatformEvent::KeyDown(keysym));
    }

    pub fn key_up(&mut self, keysym: KeySym) {
        self.events.push_back(PlatformEvent::KeyUp(keysym));
    }
}

impl Platform for ScriptedPlatform {
    fn controller_state(&mut self) -> Option<ControllerState> {
        self.frames.pop_front().flatten()
    }

    fn warp_mouse(&mut self, x: i32, y: i32) {
        self.warps.push((x, y));
    }

    fn poll_event(&mut self) -> Option<PlatformEvent> {
        self.events.pop_front()
    }
}
