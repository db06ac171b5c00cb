//! Native key symbol to client key code translation.
//!
//! Native symbols use the SDL 1.2 `SDLKey` numbering. Platforms with a different
//! numbering (SDL 2, for instance) convert into it before calling [`translate`].

use bitflags::bitflags;

use crate::{error::InputError, MiResult};

/// SDL 1.2 key symbols.
pub mod sym {
    pub const BACKSPACE: u32 = 8;
    pub const TAB: u32 = 9;
    pub const RETURN: u32 = 13;
    pub const ESCAPE: u32 = 27;
    pub const SPACE: u32 = 32;
    pub const QUOTE: u32 = 39;
    pub const COMMA: u32 = 44;
    pub const MINUS: u32 = 45;
    pub const PERIOD: u32 = 46;
    pub const SLASH: u32 = 47;
    pub const NUM_0: u32 = 48;
    pub const NUM_1: u32 = 49;
    pub const NUM_2: u32 = 50;
    pub const NUM_3: u32 = 51;
    pub const NUM_4: u32 = 52;
    pub const NUM_5: u32 = 53;
    pub const NUM_6: u32 = 54;
    pub const NUM_7: u32 = 55;
    pub const NUM_8: u32 = 56;
    pub const NUM_9: u32 = 57;
    pub const SEMICOLON: u32 = 59;
    pub const EQUALS: u32 = 61;
    pub const LEFTBRACKET: u32 = 91;
    pub const BACKSLASH: u32 = 92;
    pub const RIGHTBRACKET: u32 = 93;
    pub const BACKQUOTE: u32 = 96;
    pub const A: u32 = 97;
    pub const B: u32 = 98;
    pub const C: u32 = 99;
    pub const D: u32 = 100;
    pub const E: u32 = 101;
    pub const F: u32 = 102;
    pub const G: u32 = 103;
    pub const H: u32 = 104;
    pub const I: u32 = 105;
    pub const J: u32 = 106;
    pub const K: u32 = 107;
    pub const L: u32 = 108;
    pub const M: u32 = 109;
    pub const N: u32 = 110;
    pub const O: u32 = 111;
    pub const P: u32 = 112;
    pub const Q: u32 = 113;
    pub const R: u32 = 114;
    pub const S: u32 = 115;
    pub const T: u32 = 116;
    pub const U: u32 = 117;
    pub const V: u32 = 118;
    pub const W: u32 = 119;
    pub const X: u32 = 120;
    pub const Y: u32 = 121;
    pub const Z: u32 = 122;
    pub const DELETE: u32 = 127;
    pub const UP: u32 = 273;
    pub const DOWN: u32 = 274;
    pub const RIGHT: u32 = 275;
    pub const LEFT: u32 = 276;
    pub const INSERT: u32 = 277;
    pub const HOME: u32 = 278;
    pub const END: u32 = 279;
    pub const PAGEUP: u32 = 280;
    pub const PAGEDOWN: u32 = 281;
    pub const F1: u32 = 282;
    pub const F2: u32 = 283;
    pub const F3: u32 = 284;
    pub const F4: u32 = 285;
    pub const F5: u32 = 286;
    pub const F6: u32 = 287;
    pub const F7: u32 = 288;
    pub const F8: u32 = 289;
    pub const F9: u32 = 290;
    pub const F10: u32 = 291;
    pub const F11: u32 = 292;
    pub const F12: u32 = 293;
}

/// Key codes understood by the client, for keys that have no code of their own.
pub mod code {
    pub const K_BACKSPACE: u32 = 8;
    pub const K_TAB: u32 = 9;
    pub const K_ENTER: u32 = 10;
    pub const K_ESCAPE: u32 = 27;
}

bitflags! {
    /// SDL 1.2 `SDLMod` modifier state.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u16 {
        const LSHIFT = 0x0001;
        const RSHIFT = 0x0002;
        const LCTRL = 0x0040;
        const RCTRL = 0x0080;
        const LALT = 0x0100;
        const RALT = 0x0200;
        const LMETA = 0x0400;
        const RMETA = 0x0800;
        const NUM = 0x1000;
        const CAPS = 0x2000;
        const MODE = 0x4000;

        const SHIFT = Self::LSHIFT.bits() | Self::RSHIFT.bits();
    }
}

/// A key event as reported by the native layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct KeySym {
    pub sym: u32,
    pub modifiers: Modifiers,
    /// Character the native layer resolved for this key, or 0.
    pub unicode: u16,
}

impl KeySym {
    pub const fn new(sym: u32) -> Self {
        Self {
            sym,
            modifiers: Modifiers::empty(),
            unicode: 0,
        }
    }

    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub const fn with_unicode(mut self, unicode: u16) -> Self {
        self.unicode = unicode;
        self
    }

    pub fn shift(&self) -> bool {
        self.modifiers.intersects(Modifiers::SHIFT)
    }

    /// The native character, if it is printable ascii.
    fn printable_unicode(&self) -> Option<char> {
        let c = char::from_u32(u32::from(self.unicode))?;
        (c.is_ascii_graphic() || c == ' ').then_some(c)
    }
}

/// What the client receives for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TranslatedKey {
    pub code: u32,
    pub character: Option<char>,
}

impl TranslatedKey {
    /// Whether the character belongs in a line of typed text.
    pub fn printable(&self) -> Option<char> {
        self.character
            .filter(|c| c.is_ascii_graphic() || *c == ' ')
    }
}

/// One row of the key table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMapping {
    pub sym: u32,
    pub code: u32,
    pub plain: Option<char>,
    pub shifted: Option<char>,
}

impl KeyMapping {
    const fn control(sym: u32, code: u32, c: Option<char>) -> Self {
        Self {
            sym,
            code,
            plain: c,
            shifted: c,
        }
    }

    const fn special(sym: u32) -> Self {
        Self::control(sym, sym, None)
    }

    const fn printable(sym: u32, plain: char, shifted: char) -> Self {
        Self {
            sym,
            code: sym,
            plain: Some(plain),
            shifted: Some(shifted),
        }
    }

    pub const fn resolve(&self, shift: bool) -> TranslatedKey {
        TranslatedKey {
            code: self.code,
            character: if shift { self.shifted } else { self.plain },
        }
    }
}

pub static KEYMAP: &[KeyMapping] = &[
    KeyMapping::control(sym::TAB, code::K_TAB, Some('\t')),
    KeyMapping::control(sym::BACKSPACE, code::K_BACKSPACE, Some('\x08')),
    KeyMapping::control(sym::RETURN, code::K_ENTER, Some('\r')),
    KeyMapping::control(sym::ESCAPE, code::K_ESCAPE, None),
    // Arrows
    KeyMapping::special(sym::LEFT),
    KeyMapping::special(sym::RIGHT),
    KeyMapping::special(sym::UP),
    KeyMapping::special(sym::DOWN),
    // Function keys
    KeyMapping::special(sym::F1),
    KeyMapping::special(sym::F2),
    KeyMapping::special(sym::F3),
    KeyMapping::special(sym::F4),
    KeyMapping::special(sym::F5),
    KeyMapping::special(sym::F6),
    KeyMapping::special(sym::F7),
    KeyMapping::special(sym::F8),
    KeyMapping::special(sym::F9),
    KeyMapping::special(sym::F10),
    KeyMapping::special(sym::F11),
    KeyMapping::special(sym::F12),
    // Letters
    KeyMapping::printable(sym::A, 'a', 'A'),
    KeyMapping::printable(sym::B, 'b', 'B'),
    KeyMapping::printable(sym::C, 'c', 'C'),
    KeyMapping::printable(sym::D, 'd', 'D'),
    KeyMapping::printable(sym::E, 'e', 'E'),
    KeyMapping::printable(sym::F, 'f', 'F'),
    KeyMapping::printable(sym::G, 'g', 'G'),
    KeyMapping::printable(sym::H, 'h', 'H'),
    KeyMapping::printable(sym::I, 'i', 'I'),
    KeyMapping::printable(sym::J, 'j', 'J'),
    KeyMapping::printable(sym::K, 'k', 'K'),
    KeyMapping::printable(sym::L, 'l', 'L'),
    KeyMapping::printable(sym::M, 'm', 'M'),
    KeyMapping::printable(sym::N, 'n', 'N'),
    KeyMapping::printable(sym::O, 'o', 'O'),
    KeyMapping::printable(sym::P, 'p', 'P'),
    KeyMapping::printable(sym::Q, 'q', 'Q'),
    KeyMapping::printable(sym::R, 'r', 'R'),
    KeyMapping::printable(sym::S, 's', 'S'),
    KeyMapping::printable(sym::T, 't', 'T'),
    KeyMapping::printable(sym::U, 'u', 'U'),
    KeyMapping::printable(sym::V, 'v', 'V'),
    KeyMapping::printable(sym::W, 'w', 'W'),
    KeyMapping::printable(sym::X, 'x', 'X'),
    KeyMapping::printable(sym::Y, 'y', 'Y'),
    KeyMapping::printable(sym::Z, 'z', 'Z'),
    // Digits, US layout
    KeyMapping::printable(sym::NUM_1, '1', '!'),
    KeyMapping::printable(sym::NUM_2, '2', '@'),
    KeyMapping::printable(sym::NUM_3, '3', '#'),
    KeyMapping::printable(sym::NUM_4, '4', '$'),
    KeyMapping::printable(sym::NUM_5, '5', '%'),
    KeyMapping::printable(sym::NUM_6, '6', '^'),
    KeyMapping::printable(sym::NUM_7, '7', '&'),
    KeyMapping::printable(sym::NUM_8, '8', '*'),
    KeyMapping::printable(sym::NUM_9, '9', '('),
    KeyMapping::printable(sym::NUM_0, '0', ')'),
    // Punctuation, US layout
    KeyMapping::printable(sym::MINUS, '-', '_'),
    KeyMapping::printable(sym::EQUALS, '=', '+'),
    KeyMapping::printable(sym::BACKQUOTE, '`', '~'),
    KeyMapping::printable(sym::LEFTBRACKET, '[', '{'),
    KeyMapping::printable(sym::RIGHTBRACKET, ']', '}'),
    KeyMapping::printable(sym::BACKSLASH, '\\', '|'),
    KeyMapping::printable(sym::SEMICOLON, ';', ':'),
    KeyMapping::printable(sym::QUOTE, '\'', '"'),
    KeyMapping::printable(sym::COMMA, ',', '<'),
    KeyMapping::printable(sym::PERIOD, '.', '>'),
    KeyMapping::printable(sym::SLASH, '/', '?'),
];

pub fn lookup(sym: u32) -> Option<&'static KeyMapping> {
    KEYMAP.iter().find(|mapping| mapping.sym == sym)
}

/// Resolves a native key into the client's code and character.
///
/// `None` means the key has no meaning for the client and the event should be dropped.
pub fn translate(keysym: &KeySym) -> Option<TranslatedKey> {
    // Text the native layer already resolved wins over the table.
    if let Some(c) = keysym.printable_unicode() {
        return Some(TranslatedKey {
            code: u32::from(keysym.unicode),
            character: Some(c),
        });
    }

    if let Some(mapping) = lookup(keysym.sym) {
        return Some(mapping.resolve(keysym.shift()));
    }

    (keysym.unicode > 0).then(|| TranslatedKey {
        code: u32::from(keysym.unicode),
        character: char::from_u32(u32::from(keysym.unicode)),
    })
}

/// Parses a key given by name (`"a"`, `"F2"`, `"return"`, `"273"`) into its symbol.
pub fn parse_key_name(name: &str) -> MiResult<u32> {
    let lower = name.to_ascii_lowercase();
    let named = match lower.as_str() {
        "backspace" => Some(sym::BACKSPACE),
        "tab" => Some(sym::TAB),
        "return" | "enter" => Some(sym::RETURN),
        "escape" | "esc" => Some(sym::ESCAPE),
        "space" => Some(sym::SPACE),
        "delete" => Some(sym::DELETE),
        "up" => Some(sym::UP),
        "down" => Some(sym::DOWN),
        "left" => Some(sym::LEFT),
        "right" => Some(sym::RIGHT),
        "insert" => Some(sym::INSERT),
        "home" => Some(sym::HOME),
        "end" => Some(sym::END),
        "pageup" => Some(sym::PAGEUP),
        "pagedown" => Some(sym::PAGEDOWN),
        _ => None,
    };
    if let Some(sym) = named {
        return Ok(sym);
    }

    if let Some(n) = lower
        .strip_prefix('f')
        .and_then(|n| n.parse::<u32>().ok())
        .filter(|n| (1..=12).contains(n))
    {
        return Ok(sym::F1 + n - 1);
    }

    let mut chars = lower.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_graphic() => Ok(u32::from(c)),
        _ => lower
            .parse::<u32>()
            .map_err(|_| InputError::InvalidKeyName(name.to_string())),
    }
}
