//! FFI bindings for UniFFI export
//!
//! This module provides Swift/Kotlin bindings for the menubar crate via UniFFI.
//!
//! ## Usage from Swift
//!
//! ```swift
//! import MenubarFFI
//!
//! // Route Rust logs to os_log
//! initializeLogging(callback: myLogCallback, maxLevel: .info)
//!
//! // Create the service with the user's accelerator overrides
//! let service = try MenuService(
//!     platform: .macOs,
//!     overridesJson: overridesJson,
//!     menuHost: nativeMenu,
//!     shortcutHost: globalShortcuts,
//!     actionHost: commands
//! )
//!
//! // Forward state and window events
//! service.updateAccounts(accounts: accounts, activeAccountId: activeId, activeService: nil)
//! service.focusGained()
//!
//! // Key events the content view swallowed
//! if let action = service.handleKeyEvent(event: event) { ... }
//! ```

mod logging;
mod service;
mod types;

// Re-export all FFI types and the MenuService
pub use logging::{init_ffi_logger, initialize_logging, set_log_callback, set_log_level, update_log_level};
pub use service::*;
pub use types::*;
