pub mod client;
pub mod common;
pub mod controller;
pub mod cursor;
pub mod error;
pub mod event;
pub mod keyboard;
pub mod keys;
pub mod poller;
pub mod worldlist;

#[cfg(test)]
mod test_support;

pub use error::InputError;

pub type MiResult<T> = Result<T, InputError>;
