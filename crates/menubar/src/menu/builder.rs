//! Pure menu construction
//!
//! `MenuBuilder::build` maps (accelerators, accounts, active account,
//! active service) to a [`MenuSnapshot`]. It never talks to the OS, so every
//! platform and account permutation can be unit tested.

use log::warn;

use super::node::{MenuItemNode, MenuSnapshot};
use crate::accelerator::{AcceleratorDescriptor, AcceleratorName, AcceleratorParser, AcceleratorSet};
use crate::models::{AccountSummary, ActionRef, Platform, ServiceType};

/// Product name used in a handful of labels
pub const APP_NAME: &str = "Lantern";

/// Top-level group labels, in menu bar order (without platform prefix)
pub mod groups {
    pub const FILE: &str = "File";
    pub const APPLICATION: &str = "Application";
    pub const EDIT: &str = "Edit";
    pub const VIEW: &str = "View";
    pub const ACCOUNTS: &str = "Accounts";
    pub const WINDOW: &str = "Window";
    pub const HELP: &str = "Help";
}

/// Builds menu snapshots for one platform
#[derive(Debug, Clone, Copy)]
pub struct MenuBuilder {
    platform: Platform,
    parser: AcceleratorParser,
}

impl MenuBuilder {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            parser: AcceleratorParser::new(platform),
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Build the full application menu
    pub fn build(
        &self,
        accelerators: &AcceleratorSet,
        accounts: &[AccountSummary],
        active_account: Option<&AccountSummary>,
        active_service: Option<&ServiceType>,
    ) -> MenuSnapshot {
        let ctx = BuildContext {
            builder: self,
            accelerators,
        };
        let multi_service = active_account.is_some_and(AccountSummary::has_additional_services);

        let root = MenuItemNode::submenu(
            "",
            vec![
                self.application_group(&ctx),
                self.edit_group(&ctx),
                self.view_group(&ctx),
                self.accounts_group(&ctx, accounts, active_account, active_service),
                self.window_group(&ctx, accounts.len() > 1 || multi_service),
                self.help_group(),
            ],
        );
        MenuSnapshot::new(root)
    }

    /// Linux menus get a `&` mnemonic so Alt opens them
    fn top_label(&self, label: &str) -> String {
        match self.platform {
            Platform::Linux => format!("&{}", label),
            _ => label.to_string(),
        }
    }

    fn application_group(&self, ctx: &BuildContext<'_>) -> MenuItemNode {
        let mac = self.platform.is_mac();
        let mut items = vec![
            MenuItemNode::action("About", ActionRef::About),
            MenuItemNode::action("Check for Update", ActionRef::CheckForUpdate),
            MenuItemNode::Separator,
            MenuItemNode::action("Add Account", ActionRef::AddAccount),
            ctx.item("Preferences", ActionRef::Preferences, AcceleratorName::Preferences),
            MenuItemNode::Separator,
            ctx.item("Compose Mail", ActionRef::ComposeMail, AcceleratorName::ComposeMail),
            MenuItemNode::Separator,
        ];
        if mac {
            // Filled in by the OS
            items.push(MenuItemNode::submenu("Services", Vec::new()));
            items.push(MenuItemNode::Separator);
        }
        items.push(ctx.item("Close Window", ActionRef::CloseWindow, AcceleratorName::CloseWindow));
        if mac {
            items.push(ctx.item(
                format!("Hide {}", APP_NAME),
                ActionRef::HideWindow,
                AcceleratorName::Hide,
            ));
            items.push(ctx.item("Hide Others", ActionRef::HideOthers, AcceleratorName::HideOthers));
        } else {
            items.push(ctx.item("Hide Window", ActionRef::HideWindow, AcceleratorName::Hide));
        }
        items.push(MenuItemNode::action("Show All", ActionRef::ShowAll));
        items.push(MenuItemNode::Separator);
        items.push(ctx.item("Quit", ActionRef::Quit, AcceleratorName::Quit));

        let label = if mac { groups::APPLICATION } else { groups::FILE };
        MenuItemNode::submenu(self.top_label(label), items)
    }

    fn edit_group(&self, ctx: &BuildContext<'_>) -> MenuItemNode {
        MenuItemNode::submenu(
            self.top_label(groups::EDIT),
            vec![
                ctx.item("Undo", ActionRef::Undo, AcceleratorName::Undo),
                ctx.item("Redo", ActionRef::Redo, AcceleratorName::Redo),
                MenuItemNode::Separator,
                ctx.item("Cut", ActionRef::Cut, AcceleratorName::Cut),
                ctx.item("Copy", ActionRef::Copy, AcceleratorName::Copy),
                ctx.item("Paste", ActionRef::Paste, AcceleratorName::Paste),
                ctx.item(
                    "Paste and match style",
                    ActionRef::PasteAndMatchStyle,
                    AcceleratorName::PasteAndMatchStyle,
                ),
                ctx.item("Select All", ActionRef::SelectAll, AcceleratorName::SelectAll),
                MenuItemNode::Separator,
                ctx.item(
                    "Copy Current Tab URL",
                    ActionRef::CopyCurrentTabUrl,
                    AcceleratorName::CopyCurrentTabUrl,
                ),
                MenuItemNode::Separator,
                ctx.item("Find", ActionRef::Find, AcceleratorName::Find),
                ctx.item("Find Next", ActionRef::FindNext, AcceleratorName::FindNext),
            ],
        )
    }

    fn view_group(&self, ctx: &BuildContext<'_>) -> MenuItemNode {
        let mut items = vec![
            ctx.item("Toggle Full Screen", ActionRef::ToggleFullscreen, AcceleratorName::ToggleFullscreen),
            ctx.item("Toggle Sidebar", ActionRef::ToggleSidebar, AcceleratorName::ToggleSidebar),
        ];
        if !self.platform.is_mac() {
            items.push(ctx.item("Toggle Menu", ActionRef::ToggleMenu, AcceleratorName::ToggleMenu));
        }
        items.extend([
            MenuItemNode::Separator,
            ctx.item("Navigate Back", ActionRef::NavigateBack, AcceleratorName::NavigateBack),
            ctx.item("Navigate Forward", ActionRef::NavigateForward, AcceleratorName::NavigateForward),
            MenuItemNode::Separator,
            ctx.item("Zoom In", ActionRef::ZoomIn, AcceleratorName::ZoomIn),
            ctx.item("Zoom Out", ActionRef::ZoomOut, AcceleratorName::ZoomOut),
            ctx.item("Reset Zoom", ActionRef::ZoomReset, AcceleratorName::ZoomReset),
            MenuItemNode::Separator,
            ctx.item("Reload", ActionRef::Reload, AcceleratorName::Reload),
            MenuItemNode::submenu(
                "Developer",
                vec![
                    ctx.item("Developer Tools", ActionRef::DeveloperTools, AcceleratorName::DeveloperTools),
                    MenuItemNode::Separator,
                    ctx.item(
                        format!("Reload {} Window", APP_NAME),
                        ActionRef::ReloadWindow,
                        AcceleratorName::ReloadWindow,
                    ),
                    ctx.item(
                        format!("{} Developer Tools", APP_NAME),
                        ActionRef::DeveloperToolsWindow,
                        AcceleratorName::DeveloperToolsWindow,
                    ),
                ],
            ),
        ]);
        MenuItemNode::submenu(self.top_label(groups::VIEW), items)
    }

    fn accounts_group(
        &self,
        ctx: &BuildContext<'_>,
        accounts: &[AccountSummary],
        active_account: Option<&AccountSummary>,
        active_service: Option<&ServiceType>,
    ) -> MenuItemNode {
        let mut items = Vec::new();

        if accounts.len() > 1 {
            items.push(ctx.item("Previous Account", ActionRef::PreviousAccount, AcceleratorName::PreviousMailbox));
            items.push(ctx.item("Next Account", ActionRef::NextAccount, AcceleratorName::NextMailbox));
            items.push(MenuItemNode::Separator);
            let active_id = active_account.map(|a| &a.id);
            for (index, account) in accounts.iter().enumerate() {
                items.push(MenuItemNode::Radio {
                    label: account.menu_label().to_string(),
                    checked: Some(&account.id) == active_id,
                    action: ActionRef::SwitchAccount {
                        account: account.id.clone(),
                    },
                    accelerator: ctx.indexed(AcceleratorName::MailboxIndex, index),
                });
            }
        }

        if let Some(active) = active_account.filter(|a| a.has_additional_services()) {
            if !items.is_empty() {
                items.push(MenuItemNode::Separator);
            }
            items.push(ctx.item("Previous Service", ActionRef::PreviousService, AcceleratorName::ServicePrevious));
            items.push(ctx.item("Next Service", ActionRef::NextService, AcceleratorName::ServiceNext));
            items.push(MenuItemNode::Separator);
            for (index, service) in active.enabled_service_types.iter().enumerate() {
                items.push(MenuItemNode::Radio {
                    label: service.humanized(),
                    checked: Some(service) == active_service,
                    action: ActionRef::SwitchService {
                        account: active.id.clone(),
                        service: service.clone(),
                    },
                    accelerator: ctx.indexed(AcceleratorName::ServiceIndex, index),
                });
            }
        }

        MenuItemNode::submenu(self.top_label(groups::ACCOUNTS), items)
    }

    fn window_group(&self, ctx: &BuildContext<'_>, has_tabs: bool) -> MenuItemNode {
        let mut items = vec![
            ctx.item("Minimize", ActionRef::Minimize, AcceleratorName::Minimize),
            ctx.item("Cycle Windows", ActionRef::CycleWindows, AcceleratorName::CycleWindows),
            ctx.item(
                format!("Toggle {} Mini", APP_NAME),
                ActionRef::ToggleMiniWindow,
                AcceleratorName::ToggleMiniWindow,
            ),
        ];
        if has_tabs {
            items.push(MenuItemNode::Separator);
            items.push(ctx.item("Previous Tab", ActionRef::PreviousTab, AcceleratorName::PrevTab));
            items.push(ctx.item("Next Tab", ActionRef::NextTab, AcceleratorName::NextTab));
        }
        MenuItemNode::submenu(self.top_label(groups::WINDOW), items)
    }

    fn help_group(&self) -> MenuItemNode {
        MenuItemNode::submenu(
            self.top_label(groups::HELP),
            vec![
                MenuItemNode::action(format!("{} Website", APP_NAME), ActionRef::OpenWebsite),
                MenuItemNode::action(format!("{} Blog", APP_NAME), ActionRef::OpenBlog),
                MenuItemNode::action(format!("{} on GitHub", APP_NAME), ActionRef::OpenGithub),
                MenuItemNode::Separator,
                MenuItemNode::action("Support Center", ActionRef::SupportCenter),
                MenuItemNode::action("What's new", ActionRef::WhatsNew),
                MenuItemNode::Separator,
                MenuItemNode::action("Privacy", ActionRef::Privacy),
                MenuItemNode::action("EULA", ActionRef::Eula),
            ],
        )
    }
}

/// Accelerator resolution for a single build
struct BuildContext<'a> {
    builder: &'a MenuBuilder,
    accelerators: &'a AcceleratorSet,
}

impl BuildContext<'_> {
    /// Action entry with the accelerator configured under `name`.
    /// Unset or malformed accelerators leave the entry unbound.
    fn item(&self, label: impl Into<String>, action: ActionRef, name: AcceleratorName) -> MenuItemNode {
        MenuItemNode::Action {
            label: label.into(),
            action,
            accelerator: self.fixed(name),
        }
    }

    fn fixed(&self, name: AcceleratorName) -> Option<AcceleratorDescriptor> {
        let raw = self.accelerators.get(name)?;
        match self.builder.parser.parse(raw) {
            Ok(descriptor) => Some(descriptor),
            Err(e) => {
                warn!("Leaving {:?} unbound: {}", name, e);
                None
            }
        }
    }

    /// Slot `index` of the template configured under `name`
    fn indexed(&self, name: AcceleratorName, index: usize) -> Option<AcceleratorDescriptor> {
        let raw = self.accelerators.get(name)?;
        match self.builder.parser.materialize_indexed(raw, index) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                warn!("Leaving {:?} slot {} unbound: {}", name, index + 1, e);
                None
            }
        }
    }
}
