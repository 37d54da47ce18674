//! Focus-scoped global shortcuts

mod hidden;

pub use hidden::{hidden_zoom_in, HiddenShortcut, HiddenShortcutManager, HiddenShortcutSet};
