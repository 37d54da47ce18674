//! MenuService facade for UniFFI export
//!
//! Wraps a [`MenuController`] behind a mutex and adapts the host's callback
//! interfaces to the bridge traits. Actions are always handed to the host
//! after the lock is released, so a host may call back into the service
//! from `ActionHost::perform`.

use log::{debug, info};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use crate::accelerator::{AcceleratorDescriptor, AcceleratorParser, AcceleratorSet};
use crate::bridge::{ActionDispatcher, MenuBridge, ShortcutBridge, ShortcutCallback};
use crate::controller::MenuController;
use crate::error::MenuError;
use crate::ffi::types::*;
use crate::input::RawKeyEvent;
use crate::menu::MenuSnapshot;
use crate::models::{AccountId, AccountState, AccountSummary, ActionRef, Platform, ServiceType};

// ============================================================================
// Bridge Adapters
// ============================================================================

struct HostMenuBridge {
    host: Box<dyn NativeMenuHost>,
}

impl MenuBridge for HostMenuBridge {
    fn install_menu(&self, snapshot: &MenuSnapshot) {
        self.host.install_menu(FfiMenu::from(snapshot));
    }

    fn dispose_menu(&self, snapshot: &MenuSnapshot) {
        self.host.dispose_menu(snapshot.generation());
    }
}

/// Keeps the callbacks for shortcuts the host has bound, so
/// `trigger_global_shortcut` can find them
struct HostShortcutBridge {
    host: Box<dyn GlobalShortcutHost>,
    callbacks: RwLock<BTreeMap<AcceleratorDescriptor, ShortcutCallback>>,
}

impl HostShortcutBridge {
    fn callback_for(&self, accelerator: &AcceleratorDescriptor) -> Option<ShortcutCallback> {
        self.callbacks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(accelerator)
            .cloned()
    }
}

impl ShortcutBridge for HostShortcutBridge {
    fn register_global_shortcut(
        &self,
        accelerator: &AcceleratorDescriptor,
        callback: ShortcutCallback,
    ) -> crate::error::Result<()> {
        if !self.host.register(accelerator.to_string()) {
            return Err(MenuError::RegistrationConflict {
                accelerator: accelerator.to_string(),
            });
        }
        self.callbacks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(accelerator.normalized(), callback);
        Ok(())
    }

    fn unregister_global_shortcut(&self, accelerator: &AcceleratorDescriptor) -> crate::error::Result<()> {
        self.host.unregister(accelerator.to_string());
        self.callbacks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(accelerator);
        Ok(())
    }
}

struct HostActionDispatcher {
    host: Box<dyn ActionHost>,
}

impl ActionDispatcher for HostActionDispatcher {
    fn dispatch(&self, action: &ActionRef) {
        self.host.perform(action.to_string());
    }
}

// ============================================================================
// Service
// ============================================================================

/// Main service object for the native menu host
///
/// Swift/Kotlin create one per window-owning process and forward account,
/// settings, focus and key events to it.
#[derive(uniffi::Object)]
pub struct MenuService {
    controller: Mutex<MenuController>,
    shortcuts: Arc<HostShortcutBridge>,
    dispatcher: Arc<dyn ActionDispatcher>,
    parser: AcceleratorParser,
}

impl MenuService {
    fn controller(&self) -> MutexGuard<'_, MenuController> {
        self.controller.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn parse_overrides(overrides_json: Option<&str>) -> Result<AcceleratorSet, MenuServiceError> {
        match overrides_json {
            Some(json) if !json.trim().is_empty() => Ok(AcceleratorSet::from_json(json)?),
            _ => Ok(AcceleratorSet::factory()),
        }
    }
}

#[uniffi::export]
impl MenuService {
    /// Create the service and install the initial menu
    ///
    /// # Arguments
    /// * `platform` - Platform the menu is built for
    /// * `overrides_json` - Accelerator overrides object, `None` for factory defaults
    /// * `menu_host` / `shortcut_host` / `action_host` - Native implementations
    #[uniffi::constructor]
    pub fn new(
        platform: FfiPlatform,
        overrides_json: Option<String>,
        menu_host: Box<dyn NativeMenuHost>,
        shortcut_host: Box<dyn GlobalShortcutHost>,
        action_host: Box<dyn ActionHost>,
    ) -> Result<Arc<Self>, MenuServiceError> {
        let accelerators = Self::parse_overrides(overrides_json.as_deref())?;
        let platform = Platform::from(platform);

        let shortcuts = Arc::new(HostShortcutBridge {
            host: shortcut_host,
            callbacks: RwLock::new(BTreeMap::new()),
        });
        let dispatcher: Arc<dyn ActionDispatcher> = Arc::new(HostActionDispatcher { host: action_host });
        let controller = MenuController::new(
            platform,
            accelerators,
            Arc::new(HostMenuBridge { host: menu_host }),
            shortcuts.clone(),
            dispatcher.clone(),
        );
        info!("Menu service started for {}", platform);

        Ok(Arc::new(Self {
            controller: Mutex::new(controller),
            shortcuts,
            dispatcher,
            parser: AcceleratorParser::new(platform),
        }))
    }

    // ========================================================================
    // Provider Updates
    // ========================================================================

    /// Push the account list and selection. Returns whether the menu was rebuilt.
    pub fn update_accounts(
        &self,
        accounts: Vec<FfiAccount>,
        active_account_id: Option<String>,
        active_service: Option<String>,
    ) -> bool {
        let accounts: Vec<AccountSummary> = accounts.into_iter().map(AccountSummary::from).collect();
        let mut state = AccountState::new(accounts);
        if let Some(id) = active_account_id {
            state = state.with_active(&AccountId::new(id), active_service.map(ServiceType::new));
        }
        self.controller().on_accounts_changed(state)
    }

    /// Push a new accelerator overrides object. Returns whether the menu was rebuilt.
    pub fn update_accelerators(&self, overrides_json: String) -> Result<bool, MenuServiceError> {
        let accelerators = Self::parse_overrides(Some(&overrides_json))?;
        Ok(self.controller().on_accelerators_changed(accelerators))
    }

    pub fn focus_gained(&self) {
        self.controller().on_focus_gained();
    }

    pub fn focus_lost(&self) {
        self.controller().on_focus_lost();
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Match a key event the native menu did not consume and perform the
    /// bound action. Returns the action name, if any.
    pub fn handle_key_event(&self, event: FfiKeyEvent) -> Option<String> {
        let event = RawKeyEvent::from(event);
        let action = self.controller().resolve_input(&event)?;
        debug!("Key event resolved to {}", action);
        self.dispatcher.dispatch(&action);
        Some(action.to_string())
    }

    /// A menu item was chosen
    pub fn activate(&self, action: String) -> Result<(), MenuServiceError> {
        let action: ActionRef = action
            .parse()
            .map_err(|_| MenuServiceError::InvalidAction { action })?;
        self.dispatcher.dispatch(&action);
        Ok(())
    }

    /// Called by the host when a global shortcut it registered fires.
    /// Returns false if the service has nothing bound to it.
    pub fn trigger_global_shortcut(&self, accelerator: String) -> bool {
        let Ok(descriptor) = self.parser.parse(&accelerator) else {
            return false;
        };
        match self.shortcuts.callback_for(&descriptor) {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The installed menu, if any
    pub fn current_menu(&self) -> Option<FfiMenu> {
        let snapshot = self.controller().snapshot()?;
        Some(FfiMenu::from(snapshot.as_ref()))
    }

    /// Accelerators currently bound as hidden global shortcuts
    pub fn hidden_shortcuts(&self) -> Vec<String> {
        self.controller()
            .hidden_shortcuts()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Unregister every global shortcut and dispose the installed menu
    pub fn teardown(&self) {
        self.controller().teardown();
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// Normalize an accelerator string for display, e.g. `cmdorctrl+plus`
/// becomes `Ctrl+Plus` on Linux. Templates such as `Alt+Number` are
/// returned as their first slot.
#[uniffi::export]
pub fn normalize_accelerator(platform: FfiPlatform, raw: String) -> Result<String, MenuServiceError> {
    let parser = AcceleratorParser::new(platform.into());
    let descriptor = parser.materialize_indexed(&raw, 0)?.ok_or_else(|| {
        MenuServiceError::InvalidAccelerator {
            message: raw.clone(),
        }
    })?;
    Ok(descriptor.to_string())
}

/// The factory accelerator strings as a JSON object keyed by name
#[uniffi::export]
pub fn factory_accelerators_json() -> String {
    let defaults: BTreeMap<_, _> = crate::accelerator::AcceleratorName::ALL
        .iter()
        .map(|name| (*name, name.factory_default()))
        .collect();
    serde_json::to_string(&defaults).unwrap_or_else(|_| "{}".to_string())
}
