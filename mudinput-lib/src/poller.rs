use log::debug;

use crate::{
    client::Client,
    common::MouseButton,
    controller::{ButtonLatch, Buttons, ControllerState, Edge},
    cursor::VirtualCursor,
    event::{Platform, PlatformEvent},
    keyboard::KeyboardBuffer,
    keys::{self, code, sym, KeySym},
};

/// What the host should do after a poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Continue,
    /// The native layer asked to quit. Remaining events are left in the queue.
    Quit,
}

/// Per-frame input state: the emulated pointer, its buttons and the typed text.
#[derive(Debug, Clone, Default)]
pub struct InputPoller {
    cursor: VirtualCursor,
    left: ButtonLatch,
    right: ButtonLatch,
    keyboard: KeyboardBuffer,
}

impl InputPoller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> VirtualCursor {
        self.cursor
    }

    pub fn keyboard(&self) -> &KeyboardBuffer {
        &self.keyboard
    }

    pub fn reset_keyboard(&mut self) {
        self.keyboard.reset();
    }

    /// Runs one frame: controller first, then every pending native event.
    pub fn poll<P, C>(&mut self, platform: &mut P, client: &mut C) -> PollOutcome
    where
        P: Platform,
        C: Client,
    {
        if let Some(state) = platform.controller_state() {
            self.poll_controller(&state, platform, client);
        }

        while let Some(event) = platform.poll_event() {
            match event {
                PlatformEvent::Quit => return PollOutcome::Quit,
                PlatformEvent::KeyDown(keysym) => self.key_down(&keysym, client),
                PlatformEvent::KeyUp(keysym) => {
                    if let Some(key) = keys::translate(&keysym) {
                        debug!("Key released: {}", key.code);
                        client.key_released(key.code);
                    }
                }
                PlatformEvent::VideoResize { width, height } => client.resized_to(width, height),
                PlatformEvent::WindowResized => client.resized(),
                PlatformEvent::Other => {}
            }
        }

        PollOutcome::Continue
    }

    fn poll_controller<P, C>(&mut self, state: &ControllerState, platform: &mut P, client: &mut C)
    where
        P: Platform,
        C: Client,
    {
        self.cursor.step(state.buttons);
        let (x, y) = (self.cursor.x(), self.cursor.y());
        client.mouse_moved(x, y);
        platform.warp_mouse(x, y);

        let buttons = [
            (&mut self.left, Buttons::A, MouseButton::Left),
            (&mut self.right, Buttons::B, MouseButton::Right),
        ];
        for (latch, mask, button) in buttons {
            match latch.update(state.buttons.contains(mask)) {
                Some(Edge::Pressed) => client.mouse_pressed(x, y, button),
                Some(Edge::Released) => client.mouse_released(x, y, button),
                None => {}
            }
        }

        if let Some(delta) = state.scroll_delta() {
            client.set_mouse_scroll_delta(delta);
        }
    }

    fn key_down<C: Client>(&mut self, keysym: &KeySym, client: &mut C) {
        if let Some(key) = keys::translate(keysym) {
            debug!("Key pressed: {} ({:?})", key.code, key.character);
            if let Some(c) = key.printable() {
                // Overflow is logged by the buffer; the key is still forwarded.
                let _ = self.keyboard.append(c);
            } else if key.code == code::K_BACKSPACE {
                self.keyboard.backspace();
            }
            client.key_pressed(key.code, key.character);
        }

        if keysym.sym == sym::F2 {
            let options = client.options_mut();
            options.display_fps = !options.display_fps;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        keys::Modifiers,
        test_support::{Call, RecordingClient, ScriptedPlatform},
    };
    use test_log::test;

    fn pad(buttons: Buttons) -> ControllerState {
        ControllerState {
            buttons,
            ..Default::default()
        }
    }

    #[test]
    fn no_controller_no_pointer_events() {
        let mut poller = InputPoller::new();
        let mut platform = ScriptedPlatform::default();
        let mut client = RecordingClient::default();

        assert_eq!(
            PollOutcome::Continue,
            poller.poll(&mut platform, &mut client)
        );
        assert!(client.calls.is_empty());
        assert!(platform.warps.is_empty());
    }

    #[test]
    fn dpad_moves_and_warps() {
        let mut poller = InputPoller::new();
        let mut platform = ScriptedPlatform::default();
        let mut client = RecordingClient::default();

        platform.frames.push_back(Some(pad(Buttons::DPAD_DOWN)));
        poller.poll(&mut platform, &mut client);

        assert_eq!(vec![Call::MouseMoved(256, 178)], client.calls);
        assert_eq!(vec![(256, 178)], platform.warps);
    }

    #[test]
    fn buttons_fire_once_per_edge() {
        let mut poller = InputPoller::new();
        let mut platform = ScriptedPlatform::default();
        let mut client = RecordingClient::default();

        for buttons in [
            Buttons::A,
            Buttons::A,
            Buttons::A | Buttons::B,
            Buttons::B,
            Buttons::empty(),
            Buttons::empty(),
        ] {
            platform.frames.push_back(Some(pad(buttons)));
            poller.poll(&mut platform, &mut client);
        }

        let clicks: Vec<_> = client
            .calls
            .into_iter()
            .filter(|call| !matches!(call, Call::MouseMoved(..)))
            .collect();
        assert_eq!(
            vec![
                Call::MousePressed(256, 173, MouseButton::Left),
                Call::MousePressed(256, 173, MouseButton::Right),
                Call::MouseReleased(256, 173, MouseButton::Left),
                Call::MouseReleased(256, 173, MouseButton::Right),
            ],
            clicks
        );
    }

    #[test]
    fn click_reports_cursor_after_move() {
        let mut poller = InputPoller::new();
        let mut platform = ScriptedPlatform::default();
        let mut client = RecordingClient::default();

        platform
            .frames
            .push_back(Some(pad(Buttons::A | Buttons::DPAD_LEFT)));
        poller.poll(&mut platform, &mut client);

        assert_eq!(
            vec![
                Call::MouseMoved(251, 173),
                Call::MousePressed(251, 173, MouseButton::Left),
            ],
            client.calls
        );
    }

    #[test]
    fn triggers_scroll() {
        let mut poller = InputPoller::new();
        let mut platform = ScriptedPlatform::default();
        let mut client = RecordingClient::default();

        platform.frames.push_back(Some(ControllerState {
            ltrig: 15,
            rtrig: 5,
            ..Default::default()
        }));
        poller.poll(&mut platform, &mut client);
        assert_eq!(Some(-1), client.scroll_delta);

        platform.frames.push_back(Some(ControllerState {
            ltrig: 255,
            rtrig: 255,
            ..Default::default()
        }));
        poller.poll(&mut platform, &mut client);
        assert_eq!(Some(1), client.scroll_delta);

        // Released triggers leave the delta alone.
        client.scroll_delta = None;
        platform.frames.push_back(Some(ControllerState::default()));
        poller.poll(&mut platform, &mut client);
        assert_eq!(None, client.scroll_delta);
    }

    #[test]
    fn typing_fills_keyboard_buffer() {
        let mut poller = InputPoller::new();
        let mut platform = ScriptedPlatform::default();
        let mut client = RecordingClient::default();

        platform.key_down(KeySym::new(sym::H).with_modifiers(Modifiers::LSHIFT));
        platform.key_down(KeySym::new(sym::I));
        platform.key_down(KeySym::new(sym::NUM_1).with_unicode(u16::from(b'!')));
        platform.key_down(KeySym::new(sym::TAB));
        platform.key_up(KeySym::new(sym::I));
        poller.poll(&mut platform, &mut client);

        assert_eq!("Hi!", poller.keyboard().as_str());
        assert_eq!(
            vec![
                Call::KeyPressed(u32::from(b'h'), Some('H')),
                Call::KeyPressed(u32::from(b'i'), Some('i')),
                Call::KeyPressed(u32::from(b'!'), Some('!')),
                Call::KeyPressed(code::K_TAB, Some('\t')),
                Call::KeyReleased(u32::from(b'i')),
            ],
            client.calls
        );
    }

    #[test]
    fn backspace_pops_keyboard_buffer() {
        let mut poller = InputPoller::new();
        let mut platform = ScriptedPlatform::default();
        let mut client = RecordingClient::default();

        platform.key_down(KeySym::new(sym::BACKSPACE));
        platform.key_down(KeySym::new(sym::A));
        platform.key_down(KeySym::new(sym::B));
        platform.key_down(KeySym::new(sym::BACKSPACE));
        poller.poll(&mut platform, &mut client);

        assert_eq!("a", poller.keyboard().as_str());
        assert_eq!(
            Some(&Call::KeyPressed(code::K_BACKSPACE, Some('\x08'))),
            client.calls.last()
        );

        poller.reset_keyboard();
        assert!(poller.keyboard().is_empty());
    }

    #[test]
    fn full_keyboard_buffer_still_forwards_key() {
        let mut poller = InputPoller::new();
        let mut platform = ScriptedPlatform::default();
        let mut client = RecordingClient::default();

        for _ in 0..KeyboardBuffer::SIZE + 4 {
            platform.key_down(KeySym::new(sym::Z));
        }
        poller.poll(&mut platform, &mut client);

        assert_eq!(KeyboardBuffer::SIZE - 1, poller.keyboard().len());
        assert_eq!(KeyboardBuffer::SIZE + 4, client.calls.len());
    }

    #[test]
    fn unresolved_keys_are_ignored() {
        let mut poller = InputPoller::new();
        let mut platform = ScriptedPlatform::default();
        let mut client = RecordingClient::default();

        platform.key_down(KeySym::new(sym::HOME));
        platform.key_up(KeySym::new(sym::HOME));
        poller.poll(&mut platform, &mut client);

        assert!(client.calls.is_empty());
    }

    #[test]
    fn f2_toggles_fps() {
        let mut poller = InputPoller::new();
        let mut platform = ScriptedPlatform::default();
        let mut client = RecordingClient::default();

        platform.key_down(KeySym::new(sym::F2));
        poller.poll(&mut platform, &mut client);
        assert!(client.options.display_fps);
        assert_eq!(vec![Call::KeyPressed(sym::F2, None)], client.calls);

        platform.key_down(KeySym::new(sym::F2));
        platform.key_up(KeySym::new(sym::F2));
        poller.poll(&mut platform, &mut client);
        assert!(!client.options.display_fps);
    }

    #[test]
    fn resize_events() {
        let mut poller = InputPoller::new();
        let mut platform = ScriptedPlatform::default();
        let mut client = RecordingClient::default();

        platform.events.push_back(PlatformEvent::VideoResize {
            width: 640,
            height: 480,
        });
        platform.events.push_back(PlatformEvent::Other);
        platform.events.push_back(PlatformEvent::WindowResized);
        poller.poll(&mut platform, &mut client);

        assert_eq!(
            vec![Call::ResizedTo(640, 480), Call::Resized],
            client.calls
        );
    }

    #[test]
    fn quit_stops_draining() {
        let mut poller = InputPoller::new();
        let mut platform = ScriptedPlatform::default();
        let mut client = RecordingClient::default();

        platform.key_down(KeySym::new(sym::A));
        platform.events.push_back(PlatformEvent::Quit);
        platform.key_down(KeySym::new(sym::B));

        assert_eq!(PollOutcome::Quit, poller.poll(&mut platform, &mut client));
        assert_eq!(vec![Call::KeyPressed(97, Some('a'))], client.calls);
        assert_eq!(1, platform.events.len());
    }
}
