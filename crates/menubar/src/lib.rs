//! Menubar crate - application menu and accelerator synchronization
//!
//! This crate provides the platform-independent core behind Lantern's
//! application menu:
//! - Accelerator parsing and normalization (`CmdOrCtrl+Shift+N`, `Alt+Number`)
//! - A pure menu builder producing immutable snapshots with an accelerator index
//! - Lifecycle management that rebuilds only when inputs change
//! - Focus-scoped hidden global shortcuts
//! - Matching raw key events that bypassed the native menu
//!
//! Native menus, the OS shortcut registry and command execution sit behind
//! the [`bridge`] traits. The crate has zero UI dependencies and exports a
//! UniFFI surface for native hosts.

uniffi::setup_scaffolding!();

pub mod accelerator;
pub mod bridge;
pub mod config;
pub mod controller;
pub mod error;
pub mod ffi;
pub mod input;
pub mod lifecycle;
pub mod menu;
pub mod models;
pub mod shortcuts;

pub use accelerator::{
    Accelerator, AcceleratorDescriptor, AcceleratorName, AcceleratorParser, AcceleratorSet,
    AcceleratorTemplate, Key, Modifiers, INDEXED_SLOTS,
};
pub use bridge::{
    ActionDispatcher, InMemoryMenuBridge, InMemoryShortcutRegistry, MenuBridge,
    RecordingDispatcher, ShortcutBridge, ShortcutCallback,
};
pub use crate::config::ACCELERATORS_FILE;
pub use controller::{MenuController, MenuEvent};
pub use error::{MenuError, Result};
pub use input::{InputEventMatcher, KeyEventKind, RawKeyEvent};
pub use lifecycle::{InputChange, MenuInputs, MenuLifecycleManager};
pub use menu::{MenuBuilder, MenuItemNode, MenuSnapshot, APP_NAME};
pub use models::{
    AccountId, AccountSignature, AccountState, AccountSummary, ActionRef, Platform, ServiceType,
};
pub use shortcuts::{HiddenShortcutManager, HiddenShortcutSet};
