use crate::common::MouseButton;

/// Options of the client the input layer is allowed to touch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
    pub display_fps: bool,
    pub last_world: u32,
}

/// Where and how the client logs in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    pub server: String,
    pub port: u16,
    pub rsa_exponent: String,
    pub rsa_modulus: String,
}

/// The callback surface of the game client.
pub trait Client {
    fn mouse_moved(&mut self, x: i32, y: i32);
    fn mouse_pressed(&mut self, x: i32, y: i32, button: MouseButton);
    fn mouse_released(&mut self, x: i32, y: i32, button: MouseButton);
    fn key_pressed(&mut self, code: u32, character: Option<char>);
    fn key_released(&mut self, code: u32);
    /// The window was resized to the given dimensions.
    fn resized_to(&mut self, width: u32, height: u32);
    /// The window was resized; the client queries the new size itself.
    fn resized(&mut self);
    fn set_mouse_scroll_delta(&mut self, delta: i32);
    fn options_mut(&mut self) -> &mut ClientOptions;
    fn server_mut(&mut self) -> &mut ServerConfig;
}
