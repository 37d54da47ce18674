//! Hidden global shortcuts
//!
//! Some bindings must work even though no menu item shows them, e.g. the
//! unshifted `Ctrl+=` next to the menu's `Ctrl+Plus` zoom. They are bound
//! through the global shortcut registry, and only while our window has
//! focus so they never steal keys from other applications.

use log::debug;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::accelerator::{AcceleratorDescriptor, AcceleratorName, AcceleratorSet, Key, Modifiers};
use crate::bridge::{ActionDispatcher, ShortcutBridge, ShortcutCallback};
use crate::models::{ActionRef, Platform};

/// One hidden binding: the action it stands for and the callback handed
/// to the registry
#[derive(Clone)]
pub struct HiddenShortcut {
    pub action: ActionRef,
    callback: ShortcutCallback,
}

impl HiddenShortcut {
    pub fn callback(&self) -> ShortcutCallback {
        self.callback.clone()
    }
}

impl std::fmt::Debug for HiddenShortcut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HiddenShortcut")
            .field("action", &self.action)
            .finish_non_exhaustive()
    }
}

/// Hidden shortcuts keyed by accelerator
#[derive(Debug, Clone, Default)]
pub struct HiddenShortcutSet {
    entries: BTreeMap<AcceleratorDescriptor, HiddenShortcut>,
}

impl HiddenShortcutSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, accelerator: AcceleratorDescriptor, shortcut: HiddenShortcut) {
        self.entries.insert(accelerator.normalized(), shortcut);
    }

    pub fn get(&self, accelerator: &AcceleratorDescriptor) -> Option<&HiddenShortcut> {
        self.entries.get(accelerator)
    }

    pub fn contains(&self, accelerator: &AcceleratorDescriptor) -> bool {
        self.entries.contains_key(accelerator)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AcceleratorDescriptor, &HiddenShortcut)> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Secondary zoom-in key for the platform
pub fn hidden_zoom_in(platform: Platform) -> AcceleratorDescriptor {
    let modifier = if platform.is_mac() {
        Modifiers::META
    } else {
        Modifiers::CONTROL
    };
    AcceleratorDescriptor::new(modifier, Key::named("="))
}

/// Owns the hidden shortcut set and mirrors it into the global registry
pub struct HiddenShortcutManager {
    platform: Platform,
    bridge: Arc<dyn ShortcutBridge>,
    dispatcher: Arc<dyn ActionDispatcher>,
    desired: HiddenShortcutSet,
    bound: BTreeSet<AcceleratorDescriptor>,
    focused: bool,
}

impl HiddenShortcutManager {
    pub fn new(
        platform: Platform,
        bridge: Arc<dyn ShortcutBridge>,
        dispatcher: Arc<dyn ActionDispatcher>,
    ) -> Self {
        Self {
            platform,
            bridge,
            dispatcher,
            desired: HiddenShortcutSet::new(),
            bound: BTreeSet::new(),
            focused: false,
        }
    }

    /// Hidden shortcuts the given configuration calls for
    pub fn desired_for(&self, accelerators: &AcceleratorSet) -> HiddenShortcutSet {
        let mut set = HiddenShortcutSet::new();
        // Only while zoom-in keeps its factory binding
        if accelerators.is_default(AcceleratorName::ZoomIn) {
            set.insert(hidden_zoom_in(self.platform), self.shortcut(ActionRef::ZoomIn));
        }
        set
    }

    fn shortcut(&self, action: ActionRef) -> HiddenShortcut {
        let dispatcher = self.dispatcher.clone();
        let target = action.clone();
        HiddenShortcut {
            action,
            callback: Arc::new(move || dispatcher.dispatch(&target)),
        }
    }

    /// Recompute the desired set and reconcile the registry with it.
    ///
    /// Bound entries that are no longer desired (or now mean a different
    /// action) are unregistered. New entries are registered only while
    /// focused; otherwise the next focus gain picks them up.
    pub fn sync(&mut self, accelerators: &AcceleratorSet) {
        let desired = self.desired_for(accelerators);

        let stale: Vec<AcceleratorDescriptor> = self
            .bound
            .iter()
            .filter(|accelerator| match (desired.get(accelerator), self.desired.get(accelerator)) {
                (Some(new), Some(old)) => new.action != old.action,
                (None, _) => true,
                (Some(_), None) => false,
            })
            .cloned()
            .collect();
        for accelerator in &stale {
            self.unbind(accelerator);
        }

        self.desired = desired;
        if self.focused {
            self.bind_missing();
        }
        debug!(
            "Hidden shortcuts synced: {} desired, {} bound",
            self.desired.len(),
            self.bound.len()
        );
    }

    /// Window gained focus: register every desired shortcut
    pub fn on_focus_gained(&mut self) {
        self.focused = true;
        self.bind_missing();
    }

    /// Window lost focus: release every bound shortcut
    pub fn on_focus_lost(&mut self) {
        self.focused = false;
        self.unbind_all();
    }

    /// Release everything ahead of window teardown
    pub fn teardown(&mut self) {
        self.focused = false;
        self.unbind_all();
        self.desired.clear();
    }

    pub fn desired(&self) -> &HiddenShortcutSet {
        &self.desired
    }

    /// Accelerators currently registered with the OS
    pub fn bound(&self) -> impl Iterator<Item = &AcceleratorDescriptor> {
        self.bound.iter()
    }

    pub fn is_bound(&self, accelerator: &AcceleratorDescriptor) -> bool {
        self.bound.contains(accelerator)
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    fn bind_missing(&mut self) {
        let pending: Vec<(AcceleratorDescriptor, ShortcutCallback)> = self
            .desired
            .iter()
            .filter(|(accelerator, _)| !self.bound.contains(*accelerator))
            .map(|(accelerator, shortcut)| (accelerator.clone(), shortcut.callback()))
            .collect();

        for (accelerator, callback) in pending {
            match self.bridge.register_global_shortcut(&accelerator, callback) {
                Ok(()) => {
                    self.bound.insert(accelerator);
                }
                // Not user visible; retried on the next sync or focus gain
                Err(e) => debug!("Hidden shortcut {} not bound: {}", accelerator, e),
            }
        }
    }

    fn unbind(&mut self, accelerator: &AcceleratorDescriptor) {
        if let Err(e) = self.bridge.unregister_global_shortcut(accelerator) {
            debug!("Hidden shortcut {} not released cleanly: {}", accelerator, e);
        }
        self.bound.remove(accelerator);
    }

    fn unbind_all(&mut self) {
        let bound: Vec<AcceleratorDescriptor> = self.bound.iter().cloned().collect();
        for accelerator in &bound {
            self.unbind(accelerator);
        }
    }
}
