//! Raw keyboard input and accelerator matching

mod event;
mod matcher;

pub use event::{code_for_key, key_from_code, KeyEventKind, RawKeyEvent};
pub use matcher::InputEventMatcher;
