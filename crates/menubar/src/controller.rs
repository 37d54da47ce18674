//! Event sink for the state providers
//!
//! Account, configuration, focus and raw input sources push immutable
//! values in here. The controller keeps the latest of each and drives the
//! lifecycle manager and the input matcher from them.

use log::debug;
use std::sync::Arc;

use crate::accelerator::{AcceleratorDescriptor, AcceleratorSet};
use crate::bridge::{ActionDispatcher, MenuBridge, ShortcutBridge};
use crate::input::{InputEventMatcher, RawKeyEvent};
use crate::lifecycle::MenuLifecycleManager;
use crate::menu::MenuSnapshot;
use crate::models::{AccountState, ActionRef, Platform};

/// A change pushed by one of the providers
#[derive(Debug, Clone)]
pub enum MenuEvent {
    AccountsChanged(AccountState),
    AcceleratorsChanged(AcceleratorSet),
    FocusGained,
    FocusLost,
    KeyInput(RawKeyEvent),
}

pub struct MenuController {
    lifecycle: MenuLifecycleManager,
    matcher: InputEventMatcher,
    dispatcher: Arc<dyn ActionDispatcher>,
    accelerators: AcceleratorSet,
    accounts: AccountState,
}

impl MenuController {
    /// Create the controller and install the initial menu (no accounts)
    pub fn new(
        platform: Platform,
        accelerators: AcceleratorSet,
        menu_bridge: Arc<dyn MenuBridge>,
        shortcut_bridge: Arc<dyn ShortcutBridge>,
        dispatcher: Arc<dyn ActionDispatcher>,
    ) -> Self {
        let mut controller = Self {
            lifecycle: MenuLifecycleManager::new(
                platform,
                menu_bridge,
                shortcut_bridge,
                dispatcher.clone(),
            ),
            matcher: InputEventMatcher::new(platform),
            dispatcher,
            accelerators,
            accounts: AccountState::default(),
        };
        controller.rebuild();
        controller
    }

    pub fn platform(&self) -> Platform {
        self.lifecycle.platform()
    }

    /// Apply one event. Returns true if it rebuilt the menu or dispatched
    /// an action.
    pub fn handle(&mut self, event: MenuEvent) -> bool {
        match event {
            MenuEvent::AccountsChanged(state) => self.on_accounts_changed(state),
            MenuEvent::AcceleratorsChanged(accelerators) => self.on_accelerators_changed(accelerators),
            MenuEvent::FocusGained => {
                self.on_focus_gained();
                false
            }
            MenuEvent::FocusLost => {
                self.on_focus_lost();
                false
            }
            MenuEvent::KeyInput(event) => self.on_input_event(&event),
        }
    }

    pub fn on_accounts_changed(&mut self, state: AccountState) -> bool {
        self.accounts = state;
        self.rebuild()
    }

    pub fn on_accelerators_changed(&mut self, accelerators: AcceleratorSet) -> bool {
        if accelerators == self.accelerators && self.lifecycle.current().is_some() {
            debug!("Accelerator configuration unchanged");
            return false;
        }
        self.accelerators = accelerators;
        self.rebuild()
    }

    pub fn on_focus_gained(&mut self) {
        self.lifecycle.on_focus_gained();
    }

    pub fn on_focus_lost(&mut self) {
        self.lifecycle.on_focus_lost();
    }

    /// Action `event` maps to in the live menu, without dispatching it
    pub fn resolve_input(&self, event: &RawKeyEvent) -> Option<ActionRef> {
        let snapshot = self.lifecycle.current()?;
        self.matcher.match_event(event, &snapshot)
    }

    /// Match `event` and dispatch the bound action. Returns whether
    /// anything was dispatched.
    pub fn on_input_event(&mut self, event: &RawKeyEvent) -> bool {
        match self.resolve_input(event) {
            Some(action) => {
                debug!("Dispatching {} from raw input", action);
                self.dispatcher.dispatch(&action);
                true
            }
            None => false,
        }
    }

    /// A menu item was clicked
    pub fn activate(&self, action: &ActionRef) {
        self.dispatcher.dispatch(action);
    }

    pub fn snapshot(&self) -> Option<Arc<MenuSnapshot>> {
        self.lifecycle.current()
    }

    pub fn accelerators(&self) -> &AcceleratorSet {
        &self.accelerators
    }

    pub fn accounts(&self) -> &AccountState {
        &self.accounts
    }

    /// Hidden shortcuts currently registered with the OS
    pub fn hidden_shortcuts(&self) -> Vec<AcceleratorDescriptor> {
        self.lifecycle.shortcuts().bound().cloned().collect()
    }

    pub fn matcher(&self) -> &InputEventMatcher {
        &self.matcher
    }

    /// Release the menu and every hidden shortcut. A later event rebuilds.
    pub fn teardown(&mut self) {
        self.lifecycle.teardown();
    }

    fn rebuild(&mut self) -> bool {
        self.lifecycle.rebuild_if_changed(
            &self.accelerators,
            &self.accounts.accounts,
            self.accounts.active_account.as_ref(),
            self.accounts.active_service.as_ref(),
        )
    }
}
