use log::{debug, info};
use mudinput_lib::{
    client::{Client, ClientOptions, ServerConfig},
    common::{MouseButton, FRAMEBUFFER_HEIGHT, FRAMEBUFFER_WIDTH},
};

/// A stand-in for the game client that keeps the state the input layer drives
/// and logs every callback.
#[derive(Debug, Clone)]
pub struct LoggingClient {
    pub options: ClientOptions,
    pub server: ServerConfig,
    pub game_width: u32,
    pub game_height: u32,
    pub mouse_x: i32,
    pub mouse_y: i32,
    pub mouse_scroll_delta: i32,
    pub last_key: Option<u32>,
}

impl LoggingClient {
    pub fn new() -> Self {
        Self {
            options: ClientOptions::default(),
            server: ServerConfig::default(),
            game_width: FRAMEBUFFER_WIDTH as u32,
            game_height: FRAMEBUFFER_HEIGHT as u32,
            mouse_x: 0,
            mouse_y: 0,
            mouse_scroll_delta: 0,
            last_key: None,
        }
    }

    /// Points the client at a server before the world list gets a chance to.
    pub fn with_server(mut self, server: Option<String>, port: Option<u16>) -> Self {
        if let Some(server) = server {
            self.server.server = server;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }

    /// Scroll delta for this frame; reading it clears it.
    pub fn take_scroll_delta(&mut self) -> i32 {
        std::mem::take(&mut self.mouse_scroll_delta)
    }
}

impl Default for LoggingClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Client for LoggingClient {
    fn mouse_moved(&mut self, x: i32, y: i32) {
        self.mouse_x = x;
        self.mouse_y = y;
    }

    fn mouse_pressed(&mut self, x: i32, y: i32, button: MouseButton) {
        info!("{button} button pressed at ({x}, {y})");
    }

    fn mouse_released(&mut self, x: i32, y: i32, button: MouseButton) {
        info!("{button} button released at ({x}, {y})");
    }

    fn key_pressed(&mut self, code: u32, character: Option<char>) {
        debug!("key_pressed({code}, {character:?})");
        self.last_key = Some(code);
    }

    fn key_released(&mut self, code: u32) {
        debug!("key_released({code})");
        if self.last_key == Some(code) {
            self.last_key = None;
        }
    }

    fn resized_to(&mut self, width: u32, height: u32) {
        info!("Resized to {width}x{height}");
        self.game_width = width;
        self.game_height = height;
    }

    fn resized(&mut self) {
        info!("Window resized");
    }

    fn set_mouse_scroll_delta(&mut self, delta: i32) {
        self.mouse_scroll_delta = delta;
    }

    fn options_mut(&mut self) -> &mut ClientOptions {
        &mut self.options
    }

    fn server_mut(&mut self) -> &mut ServerConfig {
        &mut self.server
    }
}
