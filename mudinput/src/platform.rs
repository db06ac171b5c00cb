use anyhow::anyhow;
use log::{debug, info};
use mudinput_lib::{
    controller::{Buttons, ControllerState},
    event::{Platform, PlatformEvent},
    keys::{self, sym, KeySym, Modifiers},
};
use sdl2::{
    controller::{Axis, Button, GameController},
    event::{Event, WindowEvent},
    keyboard::{Keycode, Mod},
    mouse::MouseUtil,
    video::Window,
    EventPump, GameControllerSubsystem, Sdl,
};

/// SDL 2 backed window, keyboard and game controller.
pub struct SdlPlatform {
    _sdl: Sdl,
    window: Window,
    mouse: MouseUtil,
    events: EventPump,
    controllers: GameControllerSubsystem,
    controller: Option<GameController>,
}

impl SdlPlatform {
    /// Initialises SDL and opens the game window.
    pub fn start_application(title: &str, width: u32, height: u32) -> anyhow::Result<Self> {
        info!("Starting {title} ({width}x{height})");
        let sdl = sdl2::init().map_err(|e| anyhow!("SDL_Init(): {e}"))?;
        let video = sdl.video().map_err(|e| anyhow!("SDL video: {e}"))?;
        let _timer = sdl.timer().map_err(|e| anyhow!("SDL timer: {e}"))?;
        let controllers = sdl
            .game_controller()
            .map_err(|e| anyhow!("SDL game controller: {e}"))?;

        let window = video
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()?;
        video.text_input().start();

        let mut platform = Self {
            mouse: sdl.mouse(),
            events: sdl.event_pump().map_err(|e| anyhow!("SDL events: {e}"))?,
            _sdl: sdl,
            window,
            controllers,
            controller: None,
        };
        platform.open_first_controller();
        Ok(platform)
    }

    fn open_first_controller(&mut self) {
        let count = self.controllers.num_joysticks().unwrap_or(0);
        self.controller = (0..count)
            .filter(|&i| self.controllers.is_game_controller(i))
            .find_map(|i| self.controllers.open(i).ok());
        if let Some(controller) = &self.controller {
            info!("Using controller: {}", controller.name());
        }
    }
}

impl Platform for SdlPlatform {
    fn controller_state(&mut self) -> Option<ControllerState> {
        let controller = self.controller.as_ref()?;
        let buttons = [
            (Button::A, Buttons::A),
            (Button::B, Buttons::B),
            (Button::X, Buttons::X),
            (Button::Y, Buttons::Y),
            (Button::Start, Buttons::START),
            (Button::DPadUp, Buttons::DPAD_UP),
            (Button::DPadDown, Buttons::DPAD_DOWN),
            (Button::DPadLeft, Buttons::DPAD_LEFT),
            (Button::DPadRight, Buttons::DPAD_RIGHT),
        ]
        .into_iter()
        .filter(|(button, _)| controller.button(*button))
        .fold(Buttons::empty(), |acc, (_, bit)| acc | bit);

        Some(ControllerState {
            buttons,
            ltrig: trigger_level(controller.axis(Axis::TriggerLeft)),
            rtrig: trigger_level(controller.axis(Axis::TriggerRight)),
        })
    }

    fn warp_mouse(&mut self, x: i32, y: i32) {
        self.mouse.warp_mouse_in_window(&self.window, x, y);
    }

    fn poll_event(&mut self) -> Option<PlatformEvent> {
        let event = self.events.poll_event()?;
        Some(match event {
            Event::ControllerDeviceAdded { .. } if self.controller.is_none() => {
                self.open_first_controller();
                PlatformEvent::Other
            }
            Event::ControllerDeviceRemoved { which, .. } => {
                if self
                    .controller
                    .as_ref()
                    .is_some_and(|c| c.instance_id() == which)
                {
                    debug!("Controller removed");
                    self.controller = None;
                    self.open_first_controller();
                }
                PlatformEvent::Other
            }
            event => native_event(&event),
        })
    }
}

/// Converts the SDL 2 events the client cares about.
///
/// Key repeats are dropped: the client expects one key-down per press.
pub fn native_event(event: &Event) -> PlatformEvent {
    match *event {
        Event::Quit { .. } => PlatformEvent::Quit,
        Event::KeyDown { repeat: true, .. } => PlatformEvent::Other,
        Event::KeyDown {
            keycode: Some(keycode),
            keymod,
            ..
        } => PlatformEvent::KeyDown(keysym(keycode, keymod)),
        // Only key-downs carry text.
        Event::KeyUp {
            keycode: Some(keycode),
            keymod,
            ..
        } => PlatformEvent::KeyUp(keysym(keycode, keymod).with_unicode(0)),
        Event::Window {
            win_event: WindowEvent::Resized(..),
            ..
        } => PlatformEvent::WindowResized,
        _ => PlatformEvent::Other,
    }
}

/// Scales an SDL trigger axis (0..=32767) to 0..=255.
pub fn trigger_level(axis: i16) -> u8 {
    (i32::from(axis.max(0)) * 255 / i32::from(i16::MAX)) as u8
}

/// Converts an SDL 2 key press into the SDL 1.2 numbering, with the text it types.
pub fn keysym(keycode: Keycode, keymod: Mod) -> KeySym {
    let sym = key_symbol(keycode);
    let modifiers = modifiers(keymod);
    KeySym::new(sym)
        .with_modifiers(modifiers)
        .with_unicode(key_text(sym, modifiers))
}

/// The printable character a US keyboard types for `sym`, or 0.
fn key_text(sym: u32, modifiers: Modifiers) -> u16 {
    let shift = modifiers.intersects(Modifiers::SHIFT);
    let c = match char::from_u32(sym) {
        Some(' ') => Some(' '),
        Some(c) if c.is_ascii_lowercase() => {
            if shift != modifiers.contains(Modifiers::CAPS) {
                Some(c.to_ascii_uppercase())
            } else {
                Some(c)
            }
        }
        _ => keys::lookup(sym).and_then(|mapping| mapping.resolve(shift).printable()),
    };
    c.map_or(0, |c| c as u16)
}

fn key_symbol(keycode: Keycode) -> u32 {
    match keycode {
        Keycode::Up => sym::UP,
        Keycode::Down => sym::DOWN,
        Keycode::Right => sym::RIGHT,
        Keycode::Left => sym::LEFT,
        Keycode::Insert => sym::INSERT,
        Keycode::Home => sym::HOME,
        Keycode::End => sym::END,
        Keycode::PageUp => sym::PAGEUP,
        Keycode::PageDown => sym::PAGEDOWN,
        Keycode::F1 => sym::F1,
        Keycode::F2 => sym::F2,
        Keycode::F3 => sym::F3,
        Keycode::F4 => sym::F4,
        Keycode::F5 => sym::F5,
        Keycode::F6 => sym::F6,
        Keycode::F7 => sym::F7,
        Keycode::F8 => sym::F8,
        Keycode::F9 => sym::F9,
        Keycode::F10 => sym::F10,
        Keycode::F11 => sym::F11,
        Keycode::F12 => sym::F12,
        // Keys with an ascii value share it across both versions.
        other => match other as i32 {
            code @ 0..=127 => code as u32,
            _ => 0,
        },
    }
}

fn modifiers(keymod: Mod) -> Modifiers {
    [
        (Mod::LSHIFTMOD, Modifiers::LSHIFT),
        (Mod::RSHIFTMOD, Modifiers::RSHIFT),
        (Mod::LCTRLMOD, Modifiers::LCTRL),
        (Mod::RCTRLMOD, Modifiers::RCTRL),
        (Mod::LALTMOD, Modifiers::LALT),
        (Mod::RALTMOD, Modifiers::RALT),
        (Mod::LGUIMOD, Modifiers::LMETA),
        (Mod::RGUIMOD, Modifiers::RMETA),
        (Mod::NUMMOD, Modifiers::NUM),
        (Mod::CAPSMOD, Modifiers::CAPS),
        (Mod::MODEMOD, Modifiers::MODE),
    ]
    .into_iter()
    .filter(|(sdl, _)| keymod.contains(*sdl))
    .fold(Modifiers::empty(), |acc, (_, bit)| acc | bit)
}
