//! FFI-friendly type wrappers for UniFFI export
//!
//! These types convert internal Rust types to FFI-compatible versions:
//! - `AcceleratorDescriptor` → accelerator `String` (`Ctrl+Shift+N`)
//! - `ActionRef` → action `String` (`zoomIn`, `switchAccount:<id>`)
//! - the menu tree → a flat item list with parent indices

use crate::error::MenuError;
use crate::input::{KeyEventKind, RawKeyEvent};
use crate::menu::{MenuItemNode, MenuSnapshot};
use crate::models::{AccountSummary, Platform};

// ============================================================================
// Error Types
// ============================================================================

/// FFI-friendly error type
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum MenuServiceError {
    #[error("Invalid accelerator: {message}")]
    InvalidAccelerator { message: String },

    #[error("Invalid action: {action}")]
    InvalidAction { action: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl From<MenuError> for MenuServiceError {
    fn from(e: MenuError) -> Self {
        match e {
            MenuError::MalformedAccelerator { .. } | MenuError::RegistrationConflict { .. } => {
                MenuServiceError::InvalidAccelerator {
                    message: e.to_string(),
                }
            }
            MenuError::Config { message } => MenuServiceError::Config { message },
            MenuError::StaleSnapshotDisposal { .. } => MenuServiceError::Config {
                message: e.to_string(),
            },
        }
    }
}

impl From<anyhow::Error> for MenuServiceError {
    fn from(e: anyhow::Error) -> Self {
        // Keep the context chain
        MenuServiceError::Config {
            message: format!("{:#}", e),
        }
    }
}

// ============================================================================
// Platform
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiPlatform {
    MacOs,
    Windows,
    Linux,
}

impl From<FfiPlatform> for Platform {
    fn from(p: FfiPlatform) -> Self {
        match p {
            FfiPlatform::MacOs => Platform::MacOs,
            FfiPlatform::Windows => Platform::Windows,
            FfiPlatform::Linux => Platform::Linux,
        }
    }
}

// ============================================================================
// Account Types
// ============================================================================

/// FFI-friendly account representation
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAccount {
    pub id: String,
    pub display_name: String,
    /// Enabled service types in sidebar order
    pub services: Vec<String>,
}

impl From<FfiAccount> for AccountSummary {
    fn from(a: FfiAccount) -> Self {
        AccountSummary::new(a.id, a.display_name).with_services(a.services)
    }
}

// ============================================================================
// Key Events
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiKeyEventKind {
    KeyDown,
    KeyUp,
    Char,
}

/// Raw key event from the content view
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiKeyEvent {
    pub kind: FfiKeyEventKind,
    pub key: String,
    /// Physical key code (`KeyA`, `Digit3`), empty if unknown
    pub code: String,
    pub meta: bool,
    pub control: bool,
    pub shift: bool,
    pub alt: bool,
}

impl From<FfiKeyEvent> for RawKeyEvent {
    fn from(e: FfiKeyEvent) -> Self {
        let kind = match e.kind {
            FfiKeyEventKind::KeyDown => KeyEventKind::KeyDown,
            FfiKeyEventKind::KeyUp => KeyEventKind::KeyUp,
            FfiKeyEventKind::Char => KeyEventKind::Char,
        };
        RawKeyEvent {
            kind,
            key: e.key,
            code: e.code,
            meta: e.meta,
            control: e.control,
            shift: e.shift,
            alt: e.alt,
        }
    }
}

// ============================================================================
// Menu Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiMenuItemKind {
    Action,
    Separator,
    Radio,
    Submenu,
}

/// One menu entry. `parent` indexes into the same item list; top-level
/// groups have none. Children follow their parent in display order.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMenuItem {
    pub kind: FfiMenuItemKind,
    pub parent: Option<u32>,
    pub label: String,
    pub action: Option<String>,
    pub accelerator: Option<String>,
    pub checked: bool,
}

impl FfiMenuItem {
    fn from_node(node: &MenuItemNode, parent: Option<u32>) -> Self {
        let kind = match node {
            MenuItemNode::Action { .. } => FfiMenuItemKind::Action,
            MenuItemNode::Separator => FfiMenuItemKind::Separator,
            MenuItemNode::Radio { .. } => FfiMenuItemKind::Radio,
            MenuItemNode::Submenu { .. } => FfiMenuItemKind::Submenu,
        };
        Self {
            kind,
            parent,
            label: node.label().unwrap_or_default().to_string(),
            action: node.action_ref().map(ToString::to_string),
            accelerator: node.accelerator().map(ToString::to_string),
            checked: matches!(node, MenuItemNode::Radio { checked: true, .. }),
        }
    }
}

/// A built menu, flattened
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMenu {
    pub generation: u64,
    pub items: Vec<FfiMenuItem>,
}

impl From<&MenuSnapshot> for FfiMenu {
    fn from(snapshot: &MenuSnapshot) -> Self {
        let mut items = Vec::new();
        for group in snapshot.tree().children() {
            flatten(group, None, &mut items);
        }
        Self {
            generation: snapshot.generation(),
            items,
        }
    }
}

fn flatten(node: &MenuItemNode, parent: Option<u32>, items: &mut Vec<FfiMenuItem>) {
    let index = items.len() as u32;
    items.push(FfiMenuItem::from_node(node, parent));
    for child in node.children() {
        flatten(child, Some(index), items);
    }
}

// ============================================================================
// Host Callbacks
// ============================================================================

/// Native application menu owned by the host
#[uniffi::export(callback_interface)]
pub trait NativeMenuHost: Send + Sync {
    /// Make `menu` the application menu
    fn install_menu(&self, menu: FfiMenu);
    /// Release the native menu built for `generation`; it is no longer installed
    fn dispose_menu(&self, generation: u64);
}

/// OS-level global shortcut registry
#[uniffi::export(callback_interface)]
pub trait GlobalShortcutHost: Send + Sync {
    /// Bind `accelerator` system-wide. Return false if the OS refused.
    /// When it fires, call `MenuService::trigger_global_shortcut`.
    fn register(&self, accelerator: String) -> bool;
    fn unregister(&self, accelerator: String);
}

/// Executes actions chosen from the menu, raw input or a shortcut
#[uniffi::export(callback_interface)]
pub trait ActionHost: Send + Sync {
    fn perform(&self, action: String);
}

// ============================================================================
// Log Callback
// ============================================================================

/// Log level for FFI callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<log::Level> for FfiLogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => FfiLogLevel::Error,
            log::Level::Warn => FfiLogLevel::Warn,
            log::Level::Info => FfiLogLevel::Info,
            log::Level::Debug => FfiLogLevel::Debug,
            log::Level::Trace => FfiLogLevel::Trace,
        }
    }
}

impl From<FfiLogLevel> for log::Level {
    fn from(level: FfiLogLevel) -> Self {
        match level {
            FfiLogLevel::Error => log::Level::Error,
            FfiLogLevel::Warn => log::Level::Warn,
            FfiLogLevel::Info => log::Level::Info,
            FfiLogLevel::Debug => log::Level::Debug,
            FfiLogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Receives log messages from Rust.
///
/// On Apple platforms implement this with os_log/Logger.
#[uniffi::export(callback_interface)]
pub trait LogCallback: Send + Sync {
    /// `target` is the module path, e.g. "menubar::lifecycle::manager"
    fn on_log(&self, level: FfiLogLevel, target: String, message: String);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accelerator::AcceleratorSet;
    use crate::menu::MenuBuilder;

    #[test]
    fn test_flatten_parents() {
        let accounts = vec![
            AccountSummary::new("a1", "Work"),
            AccountSummary::new("a2", "Home"),
        ];
        let snapshot =
            MenuBuilder::new(Platform::MacOs).build(&AcceleratorSet::factory(), &accounts, Some(&accounts[1]), None);
        let menu = FfiMenu::from(&snapshot);

        let top: Vec<&FfiMenuItem> = menu.items.iter().filter(|i| i.parent.is_none()).collect();
        assert_eq!(top.len(), snapshot.tree().children().len());
        assert!(top.iter().all(|i| i.kind == FfiMenuItemKind::Submenu));

        // Parents always precede children
        for (index, item) in menu.items.iter().enumerate() {
            if let Some(parent) = item.parent {
                assert!((parent as usize) < index);
                assert_eq!(menu.items[parent as usize].kind, FfiMenuItemKind::Submenu);
            }
        }

        let checked: Vec<&FfiMenuItem> = menu.items.iter().filter(|i| i.checked).collect();
        assert_eq!(checked.len(), 1);
        assert_eq!(checked[0].action.as_deref(), Some("switchAccount:a2"));
        assert_eq!(checked[0].accelerator.as_deref(), Some("Cmd+2"));
    }

    #[test]
    fn test_key_event_conversion() {
        let event = RawKeyEvent::from(FfiKeyEvent {
            kind: FfiKeyEventKind::KeyDown,
            key: "a".to_string(),
            code: "KeyA".to_string(),
            meta: false,
            control: true,
            shift: false,
            alt: false,
        });
        assert_eq!(event.kind, KeyEventKind::KeyDown);
        assert!(event.control);
    }

    #[test]
    fn test_error_mapping() {
        let err: MenuServiceError = MenuError::Config {
            message: "bad".to_string(),
        }
        .into();
        assert!(matches!(err, MenuServiceError::Config { message } if message == "bad"));
    }
}
