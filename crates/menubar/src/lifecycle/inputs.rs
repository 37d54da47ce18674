//! Change detection inputs
//!
//! Pure functions over the account state, so rebuild decisions can be
//! tested without any bridge.

use crate::models::{AccountId, AccountSignature, AccountSummary, ServiceType};

/// Everything account-related that can change the built menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuInputs {
    pub active_account_id: Option<AccountId>,
    pub active_service: Option<ServiceType>,
    pub account_signatures: Vec<AccountSignature>,
}

/// Which part of [`MenuInputs`] differed first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputChange {
    ActiveAccount,
    ActiveService,
    Accounts,
}

impl std::fmt::Display for InputChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            InputChange::ActiveAccount => "active account changed",
            InputChange::ActiveService => "active service changed",
            InputChange::Accounts => "account list changed",
        };
        f.write_str(reason)
    }
}

impl MenuInputs {
    pub fn from_state(
        accounts: &[AccountSummary],
        active_account: Option<&AccountSummary>,
        active_service: Option<&ServiceType>,
    ) -> Self {
        Self {
            active_account_id: active_account.map(|a| a.id.clone()),
            // A service without an account selects nothing
            active_service: active_account.and(active_service).cloned(),
            account_signatures: accounts.iter().map(AccountSummary::signature).collect(),
        }
    }

    /// Compare against the previous inputs in a fixed order: active id,
    /// active service, then per-account signatures.
    ///
    /// Signatures leave out the id, so two accounts with the same name and
    /// services swapping places is not a change. Switching between them
    /// still is, through the active id.
    pub fn changed_from(&self, previous: &MenuInputs) -> Option<InputChange> {
        if self.active_account_id != previous.active_account_id {
            Some(InputChange::ActiveAccount)
        } else if self.active_service != previous.active_service {
            Some(InputChange::ActiveService)
        } else if self.account_signatures != previous.account_signatures {
            Some(InputChange::Accounts)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn twins() -> Vec<AccountSummary> {
        vec![
            AccountSummary::new("a1", "Work").with_services(["mail"]),
            AccountSummary::new("a2", "Work").with_services(["mail"]),
        ]
    }

    #[test]
    fn test_identical_inputs_unchanged() {
        let accounts = twins();
        let a = MenuInputs::from_state(&accounts, Some(&accounts[0]), None);
        let b = MenuInputs::from_state(&accounts, Some(&accounts[0]), None);
        assert_eq!(b.changed_from(&a), None);
    }

    #[test]
    fn test_same_signature_different_id() {
        let accounts = twins();
        let before = MenuInputs::from_state(&accounts, Some(&accounts[0]), None);
        let after = MenuInputs::from_state(&accounts, Some(&accounts[1]), None);
        assert_eq!(before.account_signatures, after.account_signatures);
        assert_eq!(after.changed_from(&before), Some(InputChange::ActiveAccount));
    }

    #[test]
    fn test_active_service_change() {
        let accounts = twins();
        let mail = ServiceType::new("mail");
        let before = MenuInputs::from_state(&accounts, Some(&accounts[0]), None);
        let after = MenuInputs::from_state(&accounts, Some(&accounts[0]), Some(&mail));
        assert_eq!(after.changed_from(&before), Some(InputChange::ActiveService));
    }

    #[test]
    fn test_rename_is_accounts_change() {
        let mut accounts = twins();
        let before = MenuInputs::from_state(&accounts, None, None);
        accounts[1].display_name = "Home".to_string();
        let after = MenuInputs::from_state(&accounts, None, None);
        assert_eq!(after.changed_from(&before), Some(InputChange::Accounts));
    }

    #[test]
    fn test_order_of_checks() {
        let accounts = twins();
        let before = MenuInputs::from_state(&accounts, Some(&accounts[0]), None);
        let after = MenuInputs::from_state(&accounts[..1], Some(&accounts[1]), None);
        // Both differ, the active id is reported
        assert_eq!(after.changed_from(&before), Some(InputChange::ActiveAccount));
    }

    #[test]
    fn test_service_without_account_ignored() {
        let accounts = vec![AccountSummary::new("a1", "Work")];
        let mail = ServiceType::new("mail");
        let inputs = MenuInputs::from_state(&accounts, None, Some(&mail));
        assert_eq!(inputs, MenuInputs::from_state(&accounts, None, None));
    }
}
