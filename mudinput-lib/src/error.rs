use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    KeyboardBufferFull(char),
    NotAscii(char),
    InvalidKeyName(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::KeyboardBufferFull(c) => {
                write!(f, "keyboard buffer full, cannot append character: {c:?}")
            }
            InputError::NotAscii(c) => {
                write!(f, "keyboard buffer only holds ascii, received {c:?}")
            }
            InputError::InvalidKeyName(name) => write!(f, "unknown key name: {name}"),
        }
    }
}

impl std::error::Error for InputError {}
