//! Action references bound to menu items and shortcuts
//!
//! The core never executes these. It hands them to an
//! [`ActionDispatcher`](crate::bridge::ActionDispatcher) that lives outside.

use std::str::FromStr;

use super::account::{AccountId, ServiceType};
use crate::error::MenuError;

/// A command the menu or a shortcut can trigger
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionRef {
    // Application
    About,
    CheckForUpdate,
    AddAccount,
    Preferences,
    ComposeMail,
    CloseWindow,
    HideWindow,
    HideOthers,
    ShowAll,
    Quit,
    // Edit
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    PasteAndMatchStyle,
    SelectAll,
    CopyCurrentTabUrl,
    Find,
    FindNext,
    // View
    ToggleFullscreen,
    ToggleSidebar,
    ToggleMenu,
    NavigateBack,
    NavigateForward,
    ZoomIn,
    ZoomOut,
    ZoomReset,
    Reload,
    DeveloperTools,
    ReloadWindow,
    DeveloperToolsWindow,
    // Accounts
    PreviousAccount,
    NextAccount,
    SwitchAccount { account: AccountId },
    PreviousService,
    NextService,
    SwitchService { account: AccountId, service: ServiceType },
    // Window
    Minimize,
    CycleWindows,
    ToggleMiniWindow,
    PreviousTab,
    NextTab,
    // Help
    OpenWebsite,
    OpenBlog,
    OpenGithub,
    SupportCenter,
    WhatsNew,
    Privacy,
    Eula,
}

macro_rules! simple_actions {
    ($($variant:ident => $name:literal),* $(,)?) => {
        impl ActionRef {
            fn simple_name(&self) -> Option<&'static str> {
                match self {
                    $(ActionRef::$variant => Some($name),)*
                    _ => None,
                }
            }

            fn from_simple_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(ActionRef::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

simple_actions! {
    About => "about",
    CheckForUpdate => "checkForUpdate",
    AddAccount => "addAccount",
    Preferences => "preferences",
    ComposeMail => "composeMail",
    CloseWindow => "closeWindow",
    HideWindow => "hideWindow",
    HideOthers => "hideOthers",
    ShowAll => "showAll",
    Quit => "quit",
    Undo => "undo",
    Redo => "redo",
    Cut => "cut",
    Copy => "copy",
    Paste => "paste",
    PasteAndMatchStyle => "pasteAndMatchStyle",
    SelectAll => "selectAll",
    CopyCurrentTabUrl => "copyCurrentTabUrl",
    Find => "find",
    FindNext => "findNext",
    ToggleFullscreen => "toggleFullscreen",
    ToggleSidebar => "toggleSidebar",
    ToggleMenu => "toggleMenu",
    NavigateBack => "navigateBack",
    NavigateForward => "navigateForward",
    ZoomIn => "zoomIn",
    ZoomOut => "zoomOut",
    ZoomReset => "zoomReset",
    Reload => "reload",
    DeveloperTools => "developerTools",
    ReloadWindow => "reloadWindow",
    DeveloperToolsWindow => "developerToolsWindow",
    PreviousAccount => "previousAccount",
    NextAccount => "nextAccount",
    PreviousService => "previousService",
    NextService => "nextService",
    Minimize => "minimize",
    CycleWindows => "cycleWindows",
    ToggleMiniWindow => "toggleMiniWindow",
    PreviousTab => "previousTab",
    NextTab => "nextTab",
    OpenWebsite => "openWebsite",
    OpenBlog => "openBlog",
    OpenGithub => "openGithub",
    SupportCenter => "supportCenter",
    WhatsNew => "whatsNew",
    Privacy => "privacy",
    Eula => "eula",
}

const SWITCH_ACCOUNT: &str = "switchAccount";
const SWITCH_SERVICE: &str = "switchService";

impl std::fmt::Display for ActionRef {
    /// Stable text form: `zoomIn`, `switchAccount:<id>`, `switchService:<id>:<service>`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionRef::SwitchAccount { account } => write!(f, "{}:{}", SWITCH_ACCOUNT, account),
            ActionRef::SwitchService { account, service } => {
                write!(f, "{}:{}:{}", SWITCH_SERVICE, account, service)
            }
            other => f.write_str(other.simple_name().unwrap_or("unknown")),
        }
    }
}

impl FromStr for ActionRef {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || MenuError::Config {
            message: format!("Unknown action `{}`", s),
        };

        // Account ids may contain ':' so only the service part is split from the right
        if let Some(rest) = s.strip_prefix(SWITCH_SERVICE).and_then(|r| r.strip_prefix(':')) {
            let (account, service) = rest.rsplit_once(':').ok_or_else(unknown)?;
            if account.is_empty() || service.is_empty() {
                return Err(unknown());
            }
            return Ok(ActionRef::SwitchService {
                account: AccountId::new(account),
                service: ServiceType::new(service),
            });
        }
        if let Some(account) = s.strip_prefix(SWITCH_ACCOUNT).and_then(|r| r.strip_prefix(':')) {
            if account.is_empty() {
                return Err(unknown());
            }
            return Ok(ActionRef::SwitchAccount {
                account: AccountId::new(account),
            });
        }

        ActionRef::from_simple_name(s).ok_or_else(unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_names() {
        assert_eq!(ActionRef::ZoomIn.to_string(), "zoomIn");
        assert_eq!("zoomIn".parse::<ActionRef>().unwrap(), ActionRef::ZoomIn);
        assert_eq!("eula".parse::<ActionRef>().unwrap(), ActionRef::Eula);
    }

    #[test]
    fn test_switch_account_text() {
        let action = ActionRef::SwitchAccount {
            account: AccountId::new("acc-1"),
        };
        assert_eq!(action.to_string(), "switchAccount:acc-1");
        assert_eq!(action.to_string().parse::<ActionRef>().unwrap(), action);
    }

    #[test]
    fn test_switch_service_with_colon_in_id() {
        let action = ActionRef::SwitchService {
            account: AccountId::new("urn:acc"),
            service: ServiceType::new("calendar"),
        };
        let text = action.to_string();
        assert_eq!(text, "switchService:urn:acc:calendar");
        assert_eq!(text.parse::<ActionRef>().unwrap(), action);
    }

    #[test]
    fn test_unknown_action() {
        assert!("launchRockets".parse::<ActionRef>().is_err());
        assert!("switchAccount:".parse::<ActionRef>().is_err());
        assert!("switchService:acc".parse::<ActionRef>().is_err());
    }
}
