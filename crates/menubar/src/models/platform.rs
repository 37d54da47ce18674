//! Host platform tag
//!
//! Everything platform-dependent in the core (menu labels, `CmdOrCtrl`
//! resolution, the hidden zoom key) is a function of this value, never of
//! the process it happens to run in.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[serde(alias = "darwin", alias = "mac")]
    MacOs,
    #[serde(alias = "win32")]
    Windows,
    Linux,
}

impl Platform {
    /// The platform this binary was compiled for
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }

    pub fn is_mac(self) -> bool {
        self == Platform::MacOs
    }

    /// Parse a platform name as accepted on the command line and over FFI
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "macos" | "mac" | "darwin" | "osx" => Some(Platform::MacOs),
            "windows" | "win32" | "win" => Some(Platform::Windows),
            "linux" => Some(Platform::Linux),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::MacOs => "macos",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Platform::from_name("darwin"), Some(Platform::MacOs));
        assert_eq!(Platform::from_name(" Linux "), Some(Platform::Linux));
        assert_eq!(Platform::from_name("win32"), Some(Platform::Windows));
        assert_eq!(Platform::from_name("beos"), None);
    }

    #[test]
    fn test_serde_aliases() {
        let p: Platform = serde_json::from_str("\"darwin\"").unwrap();
        assert_eq!(p, Platform::MacOs);
        assert_eq!(serde_json::to_string(&Platform::Linux).unwrap(), "\"linux\"");
    }
}
