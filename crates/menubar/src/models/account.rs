//! Account projections consumed by the menu
//!
//! These are read-only views of the account store. The core only needs
//! enough to draw the Accounts menu and to notice when it must be redrawn.

use serde::{Deserialize, Serialize};

/// Unique identifier for an account
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for AccountId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of service hosted inside an account (mail, calendar, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceType(pub String);

impl ServiceType {
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human readable name for menu labels ("team_drive" -> "Team drive")
    pub fn humanized(&self) -> String {
        let spaced = self.0.replace(['_', '-'], " ");
        let mut chars = spaced.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => "Service".to_string(),
        }
    }
}

impl From<&str> for ServiceType {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Menu-relevant projection of an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub id: AccountId,
    /// User-facing name; empty when the user never set one
    #[serde(default)]
    pub display_name: String,
    /// Enabled services in sidebar order
    #[serde(default)]
    pub enabled_service_types: Vec<ServiceType>,
}

impl AccountSummary {
    pub fn new(id: impl Into<AccountId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            enabled_service_types: Vec::new(),
        }
    }

    /// Set the enabled services, in order
    pub fn with_services<I, S>(mut self, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ServiceType>,
    {
        self.enabled_service_types = services.into_iter().map(Into::into).collect();
        self
    }

    /// True when the account shows a per-service switcher
    pub fn has_additional_services(&self) -> bool {
        self.enabled_service_types.len() > 1
    }

    /// Label for the account's radio entry
    pub fn menu_label(&self) -> &str {
        if self.display_name.is_empty() {
            "Untitled"
        } else {
            &self.display_name
        }
    }

    /// Change-detection signature: name plus joined service types.
    /// Deliberately ignores the id and anything else on the account.
    pub fn signature(&self) -> AccountSignature {
        let services: Vec<&str> = self
            .enabled_service_types
            .iter()
            .map(|s| s.as_str())
            .collect();
        AccountSignature {
            display_name: self.display_name.clone(),
            services: services.join(";"),
        }
    }
}

impl From<String> for ServiceType {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// What the menu cares about for one account when deciding to rebuild
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountSignature {
    pub display_name: String,
    pub services: String,
}

/// Snapshot pushed by the account provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountState {
    #[serde(default)]
    pub accounts: Vec<AccountSummary>,
    #[serde(default)]
    pub active_account: Option<AccountSummary>,
    #[serde(default)]
    pub active_service: Option<ServiceType>,
}

impl AccountState {
    pub fn new(accounts: Vec<AccountSummary>) -> Self {
        Self {
            accounts,
            active_account: None,
            active_service: None,
        }
    }

    /// Mark the account with `id` active. Unknown ids clear the selection,
    /// service included.
    pub fn with_active(mut self, id: &AccountId, service: Option<ServiceType>) -> Self {
        self.active_account = self.accounts.iter().find(|a| &a.id == id).cloned();
        self.active_service = service.filter(|_| self.active_account.is_some());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_label_untitled() {
        let account = AccountSummary::new("a1", "");
        assert_eq!(account.menu_label(), "Untitled");
        let account = AccountSummary::new("a1", "Work");
        assert_eq!(account.menu_label(), "Work");
    }

    #[test]
    fn test_signature_ignores_id() {
        let a = AccountSummary::new("a1", "Work").with_services(["mail", "calendar"]);
        let b = AccountSummary::new("b2", "Work").with_services(["mail", "calendar"]);
        assert_eq!(a.signature(), b.signature());
        assert_eq!(a.signature().services, "mail;calendar");
    }

    #[test]
    fn test_signature_tracks_service_order() {
        let a = AccountSummary::new("a1", "Work").with_services(["mail", "calendar"]);
        let b = AccountSummary::new("a1", "Work").with_services(["calendar", "mail"]);
        assert_ne!(a.signature(), b.signature());
    }

    #[test]
    fn test_humanized_service() {
        assert_eq!(ServiceType::new("calendar").humanized(), "Calendar");
        assert_eq!(ServiceType::new("team_drive").humanized(), "Team drive");
        assert_eq!(ServiceType::new("").humanized(), "Service");
    }

    #[test]
    fn test_with_active() {
        let state = AccountState::new(vec![
            AccountSummary::new("a1", "One"),
            AccountSummary::new("a2", "Two"),
        ])
        .with_active(&AccountId::new("a2"), Some(ServiceType::new("mail")));
        assert_eq!(state.active_account.unwrap().display_name, "Two");
        assert_eq!(state.active_service, Some(ServiceType::new("mail")));
    }

    #[test]
    fn test_with_active_unknown_id_drops_service() {
        let state = AccountState::new(vec![AccountSummary::new("a1", "One")])
            .with_active(&AccountId::new("gone"), Some(ServiceType::new("mail")));
        assert!(state.active_account.is_none());
        assert!(state.active_service.is_none());
    }

    #[test]
    fn test_account_state_json() {
        let json = r#"{
            "accounts": [
                { "id": "a1", "displayName": "Work", "enabledServiceTypes": ["mail", "calendar"] },
                { "id": "a2" }
            ]
        }"#;
        let state: AccountState = serde_json::from_str(json).unwrap();
        assert_eq!(state.accounts.len(), 2);
        assert!(state.accounts[0].has_additional_services());
        assert_eq!(state.accounts[1].menu_label(), "Untitled");
        assert!(state.active_account.is_none());
    }
}
