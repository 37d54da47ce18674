//! Domain models shared by the menu, shortcut and input layers

mod account;
mod action;
mod platform;

pub use account::{AccountId, AccountSignature, AccountState, AccountSummary, ServiceType};
pub use action::ActionRef;
pub use platform::Platform;
