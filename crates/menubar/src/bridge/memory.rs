//! In-memory bridge implementations
//!
//! Used by tests and the command line tool, where there is no native menu
//! or shortcut registry to talk to. They record every call so resource
//! pairing can be asserted.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::RwLock;

use super::{ActionDispatcher, MenuBridge, ShortcutBridge, ShortcutCallback};
use crate::accelerator::AcceleratorDescriptor;
use crate::error::{MenuError, Result};
use crate::menu::MenuSnapshot;
use crate::models::ActionRef;

/// Menu bridge that tracks which snapshot generations hold a "native" menu
#[derive(Default)]
pub struct InMemoryMenuBridge {
    installed: RwLock<Option<u64>>,
    live: RwLock<BTreeSet<u64>>,
    install_count: RwLock<usize>,
    dispose_log: RwLock<Vec<u64>>,
}

impl InMemoryMenuBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generation currently set as the application menu
    pub fn installed_generation(&self) -> Option<u64> {
        *self.installed.read().unwrap()
    }

    /// Number of menus installed and not yet disposed
    pub fn live_count(&self) -> usize {
        self.live.read().unwrap().len()
    }

    pub fn install_count(&self) -> usize {
        *self.install_count.read().unwrap()
    }

    /// Disposed generations, in disposal order
    pub fn disposed(&self) -> Vec<u64> {
        self.dispose_log.read().unwrap().clone()
    }
}

impl MenuBridge for InMemoryMenuBridge {
    fn install_menu(&self, snapshot: &MenuSnapshot) {
        *self.installed.write().unwrap() = Some(snapshot.generation());
        self.live.write().unwrap().insert(snapshot.generation());
        *self.install_count.write().unwrap() += 1;
    }

    fn dispose_menu(&self, snapshot: &MenuSnapshot) {
        let generation = snapshot.generation();
        self.live.write().unwrap().remove(&generation);
        let mut installed = self.installed.write().unwrap();
        if *installed == Some(generation) {
            *installed = None;
        }
        self.dispose_log.write().unwrap().push(generation);
    }
}

/// Shortcut registry that can simulate OS-level conflicts
#[derive(Default)]
pub struct InMemoryShortcutRegistry {
    registered: RwLock<BTreeMap<AcceleratorDescriptor, ShortcutCallback>>,
    /// Accelerators "owned by another application"
    conflicts: RwLock<BTreeSet<AcceleratorDescriptor>>,
}

impl InMemoryShortcutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make future registrations of `accelerator` fail
    pub fn add_conflict(&self, accelerator: AcceleratorDescriptor) {
        self.conflicts.write().unwrap().insert(accelerator);
    }

    pub fn clear_conflicts(&self) {
        self.conflicts.write().unwrap().clear();
    }

    pub fn is_registered(&self, accelerator: &AcceleratorDescriptor) -> bool {
        self.registered.read().unwrap().contains_key(accelerator)
    }

    /// Registered accelerators in sorted order
    pub fn registered(&self) -> Vec<AcceleratorDescriptor> {
        self.registered.read().unwrap().keys().cloned().collect()
    }

    /// Simulate the OS firing a global shortcut. Returns false if nothing
    /// is bound to it.
    pub fn trigger(&self, accelerator: &AcceleratorDescriptor) -> bool {
        let callback = self.registered.read().unwrap().get(accelerator).cloned();
        match callback {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}

impl ShortcutBridge for InMemoryShortcutRegistry {
    fn register_global_shortcut(
        &self,
        accelerator: &AcceleratorDescriptor,
        callback: ShortcutCallback,
    ) -> Result<()> {
        if self.conflicts.read().unwrap().contains(accelerator) {
            return Err(MenuError::RegistrationConflict {
                accelerator: accelerator.to_string(),
            });
        }
        self.registered
            .write()
            .unwrap()
            .insert(accelerator.normalized(), callback);
        Ok(())
    }

    fn unregister_global_shortcut(&self, accelerator: &AcceleratorDescriptor) -> Result<()> {
        self.registered.write().unwrap().remove(accelerator);
        Ok(())
    }
}

/// Dispatcher that remembers every action it was handed
#[derive(Default)]
pub struct RecordingDispatcher {
    actions: RwLock<Vec<ActionRef>>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> Vec<ActionRef> {
        self.actions.read().unwrap().clone()
    }

    pub fn last(&self) -> Option<ActionRef> {
        self.actions.read().unwrap().last().cloned()
    }
}

impl ActionDispatcher for RecordingDispatcher {
    fn dispatch(&self, action: &ActionRef) {
        self.actions.write().unwrap().push(action.clone());
    }
}
