//! Error types for the menubar core
//!
//! None of these reach the user. Parse and registration failures degrade to
//! "this shortcut does not fire" and the rest of the menu keeps working.

/// Errors produced by the accelerator and menu machinery
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    /// The accelerator string uses tokens outside the known vocabulary,
    /// or does not name exactly one key
    #[error("Malformed accelerator `{raw}`: {reason}")]
    MalformedAccelerator { raw: String, reason: String },

    /// The OS refused to bind a global shortcut (usually another app owns it)
    #[error("Global shortcut {accelerator} is already registered elsewhere")]
    RegistrationConflict { accelerator: String },

    /// Something asked to dispose the snapshot that is still installed
    #[error("Refusing to dispose installed menu snapshot (generation {generation})")]
    StaleSnapshotDisposal { generation: u64 },

    /// Accelerator configuration could not be read or understood
    #[error("Accelerator configuration error: {message}")]
    Config { message: String },
}

impl MenuError {
    pub(crate) fn malformed(raw: &str, reason: impl Into<String>) -> Self {
        MenuError::MalformedAccelerator {
            raw: raw.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = MenuError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message() {
        let err = MenuError::malformed("Ctrl+Banana", "unknown token `Banana`");
        assert_eq!(
            err.to_string(),
            "Malformed accelerator `Ctrl+Banana`: unknown token `Banana`"
        );
    }

    #[test]
    fn test_registration_conflict_message() {
        let err = MenuError::RegistrationConflict {
            accelerator: "Ctrl+=".to_string(),
        };
        assert!(err.to_string().contains("Ctrl+="));
    }
}
