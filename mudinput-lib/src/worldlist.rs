//! Fallback world selection.
//!
//! There is no interactive world list: the client is pointed at the default
//! server the first time this runs.

use log::info;

use crate::client::Client;

pub const DEFAULT_SERVER: &str = "game.openrsc.com";
pub const DEFAULT_RSA_EXPONENT: &str = "00010001";
pub const DEFAULT_RSA_MODULUS: &str = "87cef754966ecb19806238d9fecf0f421e816976f74f365c86a584e51049794d41fefbdc5fed3a3ed3b7495ba24262bb7d1dd5d2ff9e306b5bbf5522a2e85b25";

/// How the client reaches the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transport {
    Tcp,
    WebSocket,
}

impl Transport {
    /// The transport this build talks.
    pub const fn current() -> Self {
        if cfg!(any(target_arch = "wasm32", feature = "websockets")) {
            Transport::WebSocket
        } else {
            Transport::Tcp
        }
    }

    pub const fn default_port(self) -> u16 {
        match self {
            Transport::Tcp => 43596,
            Transport::WebSocket => 43496,
        }
    }
}

/// Selects the default world unless a server is already configured.
pub fn worldlist_new<C: Client>(client: &mut C) {
    if client.server_mut().server.is_empty() {
        select_default(client, Transport::current());
    }
}

/// Pointer input for the world list. Nothing to interact with.
pub fn worldlist_handle_mouse<C: Client>(_client: &mut C) {}

fn select_default<C: Client>(client: &mut C, transport: Transport) {
    let server = client.server_mut();
    server.server = DEFAULT_SERVER.to_string();
    server.port = transport.default_port();
    server.rsa_exponent = DEFAULT_RSA_EXPONENT.to_string();
    server.rsa_modulus = DEFAULT_RSA_MODULUS.to_string();
    client.options_mut().last_world = 0;
    info!("Using default server: OpenRSC Preservation");
}
