use log::warn;

use crate::{error::InputError, MiResult};

const KEYBOARD_BUFFER_SIZE: usize = 64;

/// Line-editing scratch buffer fed by key presses.
///
/// The buffer is NUL terminated, so it holds at most `SIZE - 1` characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardBuffer {
    data: [u8; KEYBOARD_BUFFER_SIZE],
    pos: usize,
}

impl KeyboardBuffer {
    pub const SIZE: usize = KEYBOARD_BUFFER_SIZE;

    pub const fn new() -> Self {
        Self {
            data: [0; Self::SIZE],
            pos: 0,
        }
    }

    pub fn reset(&mut self) {
        self.data = [0; Self::SIZE];
        self.pos = 0;
    }

    /// Appends a character.
    ///
    /// A full buffer logs a warning and returns [`InputError::KeyboardBufferFull`];
    /// the returned error is what callers and tests check, the buffer is left as it was.
    pub fn append(&mut self, c: char) -> MiResult<()> {
        if !c.is_ascii() {
            return Err(InputError::NotAscii(c));
        }

        if self.pos >= Self::SIZE - 1 {
            warn!("Keyboard buffer full, cannot append character: {c}");
            return Err(InputError::KeyboardBufferFull(c));
        }

        self.data[self.pos] = c as u8;
        self.pos += 1;
        self.data[self.pos] = 0;
        Ok(())
    }

    /// Removes the last character. Does nothing on an empty buffer.
    pub fn backspace(&mut self) {
        if self.pos > 0 {
            self.pos -= 1;
            self.data[self.pos] = 0;
        }
    }

    pub fn len(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    pub fn as_str(&self) -> &str {
        // Only ascii is ever written.
        core::str::from_utf8(&self.data[..self.pos]).unwrap_or_default()
    }

    /// The raw contents, including the terminating NUL.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.data[..=self.pos]
    }
}

impl Default for KeyboardBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn full_buffer() -> KeyboardBuffer {
        let mut buffer = KeyboardBuffer::new();
        for _ in 0..KeyboardBuffer::SIZE - 1 {
            buffer.append('x').unwrap();
        }
        buffer
    }

    #[test]
    fn append_and_read_back() {
        let mut buffer = KeyboardBuffer::new();
        for c in "::bank".chars() {
            buffer.append(c).unwrap();
        }
        assert_eq!("::bank", buffer.as_str());
        assert_eq!(b"::bank\0", buffer.as_bytes_with_nul());
    }

    #[test]
    fn append_to_full_buffer_reports_error() {
        let mut buffer = full_buffer();
        let before = buffer.clone();
        assert_eq!(63, buffer.len());
        assert_eq!(
            Err(InputError::KeyboardBufferFull('y')),
            buffer.append('y')
        );
        assert_eq!(before, buffer);
        assert_eq!(Some(&0), buffer.as_bytes_with_nul().last());
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let mut buffer = KeyboardBuffer::new();
        buffer.backspace();
        assert!(buffer.is_empty());
        assert_eq!(KeyboardBuffer::new(), buffer);
    }

    #[test]
    fn backspace_frees_room() {
        let mut buffer = full_buffer();
        buffer.backspace();
        buffer.append('y').unwrap();
        assert!(buffer.as_str().ends_with("xy"));
    }

    #[test]
    fn rejects_non_ascii() {
        let mut buffer = KeyboardBuffer::new();
        assert_eq!(Err(InputError::NotAscii('é')), buffer.append('é'));
        assert!(buffer.is_empty());
    }

    #[test]
    fn reset_clears() {
        let mut buffer = full_buffer();
        buffer.reset();
        assert_eq!(KeyboardBuffer::new(), buffer);
    }
}
