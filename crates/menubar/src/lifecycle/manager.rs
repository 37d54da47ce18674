//! Menu lifecycle manager
//!
//! Decides when the application menu must be rebuilt, swaps it in, and
//! keeps the hidden shortcuts in step with the accelerator configuration.

use log::{debug, error, info};
use std::sync::Arc;

use super::inputs::MenuInputs;
use crate::accelerator::AcceleratorSet;
use crate::bridge::{ActionDispatcher, MenuBridge, ShortcutBridge};
use crate::error::{MenuError, Result};
use crate::menu::{MenuBuilder, MenuSnapshot};
use crate::models::{AccountSummary, Platform, ServiceType};
use crate::shortcuts::HiddenShortcutManager;

pub struct MenuLifecycleManager {
    builder: MenuBuilder,
    bridge: Arc<dyn MenuBridge>,
    shortcuts: HiddenShortcutManager,
    last_accelerators: Option<AcceleratorSet>,
    last_inputs: Option<MenuInputs>,
    current: Option<Arc<MenuSnapshot>>,
    generation: u64,
}

impl MenuLifecycleManager {
    pub fn new(
        platform: Platform,
        menu_bridge: Arc<dyn MenuBridge>,
        shortcut_bridge: Arc<dyn ShortcutBridge>,
        dispatcher: Arc<dyn ActionDispatcher>,
    ) -> Self {
        Self {
            builder: MenuBuilder::new(platform),
            bridge: menu_bridge,
            shortcuts: HiddenShortcutManager::new(platform, shortcut_bridge, dispatcher),
            last_accelerators: None,
            last_inputs: None,
            current: None,
            generation: 0,
        }
    }

    pub fn platform(&self) -> Platform {
        self.builder.platform()
    }

    /// Rebuild and install the menu if anything it depends on changed.
    ///
    /// A different accelerator set always rebuilds. Otherwise the account
    /// inputs are compared (see [`MenuInputs::changed_from`]). Returns
    /// whether a new snapshot was installed.
    pub fn rebuild_if_changed(
        &mut self,
        accelerators: &AcceleratorSet,
        accounts: &[AccountSummary],
        active_account: Option<&AccountSummary>,
        active_service: Option<&ServiceType>,
    ) -> bool {
        let inputs = MenuInputs::from_state(accounts, active_account, active_service);

        let reason = match (&self.current, &self.last_accelerators, &self.last_inputs) {
            (Some(_), Some(last_accelerators), Some(last_inputs)) => {
                if last_accelerators != accelerators {
                    "accelerators changed".to_string()
                } else if let Some(change) = inputs.changed_from(last_inputs) {
                    change.to_string()
                } else {
                    debug!("Menu inputs unchanged, skipping rebuild");
                    return false;
                }
            }
            _ => "no menu installed".to_string(),
        };
        debug!("Rebuilding menu: {}", reason);

        self.generation += 1;
        let snapshot = Arc::new(
            self.builder
                .build(accelerators, accounts, active_account, active_service)
                .with_generation(self.generation),
        );

        // Install before disposing the previous snapshot
        self.bridge.install_menu(&snapshot);
        info!(
            "Installed menu generation {} ({} accelerators)",
            snapshot.generation(),
            snapshot.accelerator_index().len()
        );
        let previous = self.current.replace(snapshot);
        if let Some(previous) = previous {
            self.retire(&previous);
        }

        self.shortcuts.sync(accelerators);
        self.last_accelerators = Some(accelerators.clone());
        self.last_inputs = Some(inputs);
        true
    }

    /// Hand a replaced snapshot back to the bridge for disposal
    fn retire(&self, snapshot: &MenuSnapshot) {
        if let Err(e) = self.dispose(snapshot) {
            error!("{}", e);
            debug_assert!(false, "{}", e);
        }
    }

    fn dispose(&self, snapshot: &MenuSnapshot) -> Result<()> {
        if self
            .current
            .as_ref()
            .is_some_and(|installed| installed.generation() == snapshot.generation())
        {
            return Err(MenuError::StaleSnapshotDisposal {
                generation: snapshot.generation(),
            });
        }
        self.bridge.dispose_menu(snapshot);
        debug!("Disposed menu generation {}", snapshot.generation());
        Ok(())
    }

    /// The installed snapshot, if any
    pub fn current(&self) -> Option<Arc<MenuSnapshot>> {
        self.current.clone()
    }

    pub fn last_accelerators(&self) -> Option<&AcceleratorSet> {
        self.last_accelerators.as_ref()
    }

    pub fn shortcuts(&self) -> &HiddenShortcutManager {
        &self.shortcuts
    }

    pub fn on_focus_gained(&mut self) {
        self.shortcuts.on_focus_gained();
    }

    pub fn on_focus_lost(&mut self) {
        self.shortcuts.on_focus_lost();
    }

    /// Unregister every hidden shortcut and dispose the installed menu.
    /// The next `rebuild_if_changed` starts from scratch.
    pub fn teardown(&mut self) {
        self.shortcuts.teardown();
        if let Some(installed) = self.current.take() {
            self.bridge.dispose_menu(&installed);
            info!("Tore down menu generation {}", installed.generation());
        }
        self.last_accelerators = None;
        self.last_inputs = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accelerator::{AcceleratorDescriptor, AcceleratorName, Key, Modifiers};
    use crate::bridge::{InMemoryMenuBridge, InMemoryShortcutRegistry, RecordingDispatcher};

    struct Harness {
        manager: MenuLifecycleManager,
        menus: Arc<InMemoryMenuBridge>,
        registry: Arc<InMemoryShortcutRegistry>,
    }

    fn harness() -> Harness {
        let menus = Arc::new(InMemoryMenuBridge::new());
        let registry = Arc::new(InMemoryShortcutRegistry::new());
        let manager = MenuLifecycleManager::new(
            Platform::Linux,
            menus.clone(),
            registry.clone(),
            Arc::new(RecordingDispatcher::new()),
        );
        Harness {
            manager,
            menus,
            registry,
        }
    }

    fn accounts() -> Vec<AccountSummary> {
        vec![
            AccountSummary::new("a1", "Work").with_services(["mail"]),
            AccountSummary::new("a2", "Work").with_services(["mail"]),
        ]
    }

    #[test]
    fn test_first_call_builds() {
        let mut h = harness();
        assert!(h.manager.current().is_none());
        assert!(h.manager.rebuild_if_changed(&AcceleratorSet::factory(), &[], None, None));
        let current = h.manager.current().unwrap();
        assert_eq!(current.generation(), 1);
        assert_eq!(h.menus.installed_generation(), Some(1));
    }

    #[test]
    fn test_rebuild_idempotent() {
        let mut h = harness();
        let accelerators = AcceleratorSet::factory();
        let accounts = accounts();
        assert!(h.manager.rebuild_if_changed(&accelerators, &accounts, Some(&accounts[0]), None));
        assert!(!h.manager.rebuild_if_changed(&accelerators, &accounts, Some(&accounts[0]), None));
        assert_eq!(h.menus.install_count(), 1);
    }

    #[test]
    fn test_switching_identical_accounts_rebuilds() {
        let mut h = harness();
        let accelerators = AcceleratorSet::factory();
        let accounts = accounts();
        h.manager.rebuild_if_changed(&accelerators, &accounts, Some(&accounts[0]), None);
        assert!(h.manager.rebuild_if_changed(&accelerators, &accounts, Some(&accounts[1]), None));
        assert_eq!(h.menus.install_count(), 2);
    }

    #[test]
    fn test_accelerator_change_rebuilds() {
        let mut h = harness();
        let accelerators = AcceleratorSet::factory();
        h.manager.rebuild_if_changed(&accelerators, &[], None, None);

        let changed = accelerators.clone().with(AcceleratorName::Reload, "F5");
        assert!(h.manager.rebuild_if_changed(&changed, &[], None, None));
        let f5 = AcceleratorDescriptor::new(Modifiers::empty(), Key::named("F5"));
        assert!(h.manager.current().unwrap().action_for(&f5).is_some());
    }

    #[test]
    fn test_previous_disposed_after_install() {
        let mut h = harness();
        let accounts = accounts();
        let accelerators = AcceleratorSet::factory();
        h.manager.rebuild_if_changed(&accelerators, &accounts, Some(&accounts[0]), None);
        h.manager.rebuild_if_changed(&accelerators, &accounts, Some(&accounts[1]), None);

        assert_eq!(h.menus.disposed(), vec![1]);
        assert_eq!(h.menus.installed_generation(), Some(2));
        assert_eq!(h.menus.live_count(), 1);
    }

    #[test]
    fn test_rebuild_syncs_hidden_shortcuts() {
        let mut h = harness();
        h.manager.on_focus_gained();
        h.manager.rebuild_if_changed(&AcceleratorSet::factory(), &[], None, None);
        let ctrl_eq = AcceleratorDescriptor::new(Modifiers::CONTROL, Key::named("="));
        assert!(h.registry.is_registered(&ctrl_eq));

        let rebound = AcceleratorSet::factory().with(AcceleratorName::ZoomIn, "Ctrl+Shift+=");
        h.manager.rebuild_if_changed(&rebound, &[], None, None);
        assert!(!h.registry.is_registered(&ctrl_eq));
    }

    #[test]
    fn test_teardown_releases_resources() {
        let mut h = harness();
        h.manager.on_focus_gained();
        h.manager.rebuild_if_changed(&AcceleratorSet::factory(), &[], None, None);
        h.manager.teardown();

        assert!(h.manager.current().is_none());
        assert_eq!(h.menus.live_count(), 0);
        assert!(h.registry.registered().is_empty());

        // Starts over after teardown
        assert!(h.manager.rebuild_if_changed(&AcceleratorSet::factory(), &[], None, None));
        assert_eq!(h.menus.live_count(), 1);
    }

    #[test]
    fn test_dispose_installed_is_refused() {
        let mut h = harness();
        h.manager.rebuild_if_changed(&AcceleratorSet::factory(), &[], None, None);
        let installed = h.manager.current().unwrap();
        let result = h.manager.dispose(&installed);
        assert_eq!(
            result,
            Err(MenuError::StaleSnapshotDisposal { generation: 1 })
        );
        assert!(h.menus.disposed().is_empty());
    }
}
