//! Bridge trait definitions
//!
//! The core never touches native menus or the global shortcut registry
//! itself. Hosts implement these traits over whatever toolkit they run on.

use std::sync::Arc;

use crate::accelerator::AcceleratorDescriptor;
use crate::error::Result;
use crate::menu::MenuSnapshot;
use crate::models::ActionRef;

/// Zero-argument callback fired when a global shortcut triggers
pub type ShortcutCallback = Arc<dyn Fn() + Send + Sync>;

/// Native application menu
pub trait MenuBridge: Send + Sync {
    /// Make `snapshot` the application menu
    fn install_menu(&self, snapshot: &MenuSnapshot);

    /// Release native resources held for `snapshot`.
    /// Only ever called for snapshots that are no longer installed.
    fn dispose_menu(&self, snapshot: &MenuSnapshot);
}

/// Process-wide global shortcut registry
pub trait ShortcutBridge: Send + Sync {
    /// Bind `accelerator` system-wide. Fails with
    /// [`MenuError::RegistrationConflict`](crate::MenuError::RegistrationConflict)
    /// when the OS refuses.
    fn register_global_shortcut(
        &self,
        accelerator: &AcceleratorDescriptor,
        callback: ShortcutCallback,
    ) -> Result<()>;

    /// Release a binding made by `register_global_shortcut`
    fn unregister_global_shortcut(&self, accelerator: &AcceleratorDescriptor) -> Result<()>;
}

/// Executes actions; resolved by the host to command handlers
pub trait ActionDispatcher: Send + Sync {
    fn dispatch(&self, action: &ActionRef);
}
