//! Named accelerator configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Every accelerator the settings screen lets the user rebind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AcceleratorName {
    Preferences,
    ComposeMail,
    CloseWindow,
    Hide,
    HideOthers,
    Quit,
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
    PreviousMailbox,
    NextMailbox,
    MailboxIndex,
    ServicePrevious,
    ServiceNext,
    ServiceIndex,
    Minimize,
    CycleWindows,
    ToggleMiniWindow,
    PrevTab,
    NextTab,
}

impl AcceleratorName {
    pub const ALL: [AcceleratorName; 39] = [
        AcceleratorName::Preferences,
        AcceleratorName::ComposeMail,
        AcceleratorName::CloseWindow,
        AcceleratorName::Hide,
        AcceleratorName::HideOthers,
        AcceleratorName::Quit,
        AcceleratorName::Undo,
        AcceleratorName::Redo,
        AcceleratorName::Cut,
        AcceleratorName::Copy,
        AcceleratorName::Paste,
        AcceleratorName::PasteAndMatchStyle,
        AcceleratorName::SelectAll,
        AcceleratorName::CopyCurrentTabUrl,
        AcceleratorName::Find,
        AcceleratorName::FindNext,
        AcceleratorName::ToggleFullscreen,
        AcceleratorName::ToggleSidebar,
        AcceleratorName::ToggleMenu,
        AcceleratorName::NavigateBack,
        AcceleratorName::NavigateForward,
        AcceleratorName::ZoomIn,
        AcceleratorName::ZoomOut,
        AcceleratorName::ZoomReset,
        AcceleratorName::Reload,
        AcceleratorName::DeveloperTools,
        AcceleratorName::ReloadWindow,
        AcceleratorName::DeveloperToolsWindow,
        AcceleratorName::PreviousMailbox,
        AcceleratorName::NextMailbox,
        AcceleratorName::MailboxIndex,
        AcceleratorName::ServicePrevious,
        AcceleratorName::ServiceNext,
        AcceleratorName::ServiceIndex,
        AcceleratorName::Minimize,
        AcceleratorName::CycleWindows,
        AcceleratorName::ToggleMiniWindow,
        AcceleratorName::PrevTab,
        AcceleratorName::NextTab,
    ];

    /// Factory default. An empty string means unbound.
    pub fn factory_default(self) -> &'static str {
        use AcceleratorName::*;
        match self {
            Preferences => "CmdOrCtrl+,",
            ComposeMail => "CmdOrCtrl+N",
            CloseWindow => "CmdOrCtrl+W",
            Hide => "CmdOrCtrl+H",
            HideOthers => "CmdOrCtrl+Alt+H",
            Quit => "CmdOrCtrl+Q",
            Undo => "CmdOrCtrl+Z",
            Redo => "CmdOrCtrl+Shift+Z",
            Cut => "CmdOrCtrl+X",
            Copy => "CmdOrCtrl+C",
            Paste => "CmdOrCtrl+V",
            PasteAndMatchStyle => "CmdOrCtrl+Alt+Shift+V",
            SelectAll => "CmdOrCtrl+A",
            CopyCurrentTabUrl => "CmdOrCtrl+Alt+Shift+C",
            Find => "CmdOrCtrl+F",
            FindNext => "CmdOrCtrl+G",
            ToggleFullscreen => "F11",
            ToggleSidebar => "CmdOrCtrl+Alt+S",
            ToggleMenu => "CmdOrCtrl+\\",
            NavigateBack => "CmdOrCtrl+Left",
            NavigateForward => "CmdOrCtrl+Right",
            ZoomIn => "CmdOrCtrl+Plus",
            ZoomOut => "CmdOrCtrl+-",
            ZoomReset => "CmdOrCtrl+0",
            Reload => "CmdOrCtrl+R",
            DeveloperTools => "CmdOrCtrl+Alt+J",
            ReloadWindow => "CmdOrCtrl+Shift+R",
            DeveloperToolsWindow => "",
            PreviousMailbox => "CmdOrCtrl+<",
            NextMailbox => "CmdOrCtrl+>",
            MailboxIndex => "CmdOrCtrl+Number",
            ServicePrevious => "CmdOrCtrl+Alt+<",
            ServiceNext => "CmdOrCtrl+Alt+>",
            ServiceIndex => "CmdOrCtrl+Alt+Number",
            Minimize => "CmdOrCtrl+M",
            CycleWindows => "CmdOrCtrl+`",
            ToggleMiniWindow => "",
            PrevTab => "Ctrl+Shift+Tab",
            NextTab => "Ctrl+Tab",
        }
    }
}

/// Raw accelerator strings keyed by name, alongside their defaults.
///
/// Values are opaque text until the menu builder parses them. A missing or
/// empty value means the action has no shortcut.
///
/// Serializes as the overrides object: only names whose value differs from
/// the default. Deserializing applies the object on top of the factory set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<AcceleratorName, String>",
    into = "BTreeMap<AcceleratorName, String>"
)]
pub struct AcceleratorSet {
    values: BTreeMap<AcceleratorName, String>,
    defaults: BTreeMap<AcceleratorName, String>,
}

impl Default for AcceleratorSet {
    fn default() -> Self {
        Self::factory()
    }
}

impl From<BTreeMap<AcceleratorName, String>> for AcceleratorSet {
    fn from(overrides: BTreeMap<AcceleratorName, String>) -> Self {
        Self::factory().apply_overrides(overrides)
    }
}

impl From<AcceleratorSet> for BTreeMap<AcceleratorName, String> {
    fn from(set: AcceleratorSet) -> Self {
        set.overrides()
    }
}

impl AcceleratorSet {
    /// Every name bound to its factory default
    pub fn factory() -> Self {
        let defaults: BTreeMap<_, _> = AcceleratorName::ALL
            .iter()
            .map(|name| (*name, name.factory_default().to_string()))
            .collect();
        Self {
            values: defaults.clone(),
            defaults,
        }
    }

    /// No values and no defaults
    pub fn empty() -> Self {
        Self {
            values: BTreeMap::new(),
            defaults: BTreeMap::new(),
        }
    }

    /// Configured value, `None` when unset or blank
    pub fn get(&self, name: AcceleratorName) -> Option<&str> {
        self.values
            .get(&name)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }

    /// Default value, `None` when unset or blank
    pub fn default_value(&self, name: AcceleratorName) -> Option<&str> {
        self.defaults
            .get(&name)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }

    /// True when a value is configured and still equals its default.
    ///
    /// A disabled accelerator whose default is also blank is not "default":
    /// there is no binding left to stand in for.
    pub fn is_default(&self, name: AcceleratorName) -> bool {
        match (self.get(name), self.default_value(name)) {
            (Some(value), Some(default)) => value == default,
            _ => false,
        }
    }

    pub fn set(&mut self, name: AcceleratorName, value: impl Into<String>) {
        self.values.insert(name, value.into());
    }

    pub fn with(mut self, name: AcceleratorName, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn with_default(mut self, name: AcceleratorName, value: impl Into<String>) -> Self {
        self.defaults.insert(name, value.into());
        self
    }

    /// Apply user overrides on top of the current values
    pub fn apply_overrides(mut self, overrides: BTreeMap<AcceleratorName, String>) -> Self {
        self.values.extend(overrides);
        self
    }

    /// Values that differ from their defaults, as stored in the overrides file
    pub fn overrides(&self) -> BTreeMap<AcceleratorName, String> {
        self.values
            .iter()
            .filter(|(name, value)| self.defaults.get(*name) != Some(*value))
            .map(|(name, value)| (*name, value.clone()))
            .collect()
    }

    /// Configured `(name, value)` pairs with a non-empty value
    pub fn iter(&self) -> impl Iterator<Item = (AcceleratorName, &str)> {
        self.values
            .keys()
            .filter_map(|name| self.get(*name).map(|value| (*name, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_has_every_name() {
        let set = AcceleratorSet::factory();
        for name in AcceleratorName::ALL {
            assert_eq!(set.values.get(&name).map(String::as_str), Some(name.factory_default()));
        }
        assert!(set.overrides().is_empty());
    }

    #[test]
    fn test_blank_is_unset() {
        let set = AcceleratorSet::empty().with(AcceleratorName::Quit, "  ");
        assert_eq!(set.get(AcceleratorName::Quit), None);
        assert_eq!(set.get(AcceleratorName::Undo), None);
    }

    #[test]
    fn test_is_default() {
        let set = AcceleratorSet::factory();
        assert!(set.is_default(AcceleratorName::ZoomIn));

        let set = set.with(AcceleratorName::ZoomIn, "Ctrl+Shift+=");
        assert!(!set.is_default(AcceleratorName::ZoomIn));

        // Both unset is not "still the default"
        assert!(!AcceleratorSet::empty().is_default(AcceleratorName::ZoomIn));
        let blank = AcceleratorSet::empty()
            .with(AcceleratorName::ZoomIn, "")
            .with_default(AcceleratorName::ZoomIn, "");
        assert!(!blank.is_default(AcceleratorName::ZoomIn));
    }

    #[test]
    fn test_overrides() {
        let set = AcceleratorSet::factory()
            .with(AcceleratorName::Quit, "Ctrl+Alt+Q")
            .with(AcceleratorName::Undo, AcceleratorName::Undo.factory_default());
        let overrides = set.overrides();
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides[&AcceleratorName::Quit], "Ctrl+Alt+Q");
    }

    #[test]
    fn test_name_json_keys() {
        let json = serde_json::to_string(&AcceleratorName::ZoomIn).unwrap();
        assert_eq!(json, "\"zoomIn\"");
        let name: AcceleratorName = serde_json::from_str("\"mailboxIndex\"").unwrap();
        assert_eq!(name, AcceleratorName::MailboxIndex);
    }
}
