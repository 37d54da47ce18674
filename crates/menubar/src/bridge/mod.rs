//! Interfaces to the native host and their in-memory implementations
//!
//! The trait-based design lets the same core drive a native menu bar, the
//! FFI host, or the recording doubles used in tests.

mod memory;
mod traits;

pub use memory::{InMemoryMenuBridge, InMemoryShortcutRegistry, RecordingDispatcher};
pub use traits::{ActionDispatcher, MenuBridge, ShortcutBridge, ShortcutCallback};
