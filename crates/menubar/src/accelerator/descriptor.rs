//! Normalized accelerator value type

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

bitflags::bitflags! {
    /// Canonical modifier set. Configuration synonyms (Cmd, Super, Option,
    /// CmdOrCtrl, ...) are folded into these four by the parser.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
    pub struct Modifiers: u8 {
        const META = 1 << 0;
        const CONTROL = 1 << 1;
        const SHIFT = 1 << 2;
        const ALT = 1 << 3;
    }
}

/// The non-modifier part of an accelerator
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Canonical key name: `A`, `F5`, `Enter`, `=`, `+`, ...
    Named(String),
    /// Top-row digit, regardless of whether it came from a key name,
    /// a numeric placeholder, or an input event's `Digit<n>` code
    Digit(u8),
}

impl Key {
    pub fn named(name: impl Into<String>) -> Self {
        Key::Named(name.into())
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Digit(n) => write!(f, "{}", n),
            // "+" is the separator, so it prints by name
            Key::Named(name) if name == "+" => f.write_str("Plus"),
            Key::Named(name) => f.write_str(name),
        }
    }
}

/// A parsed accelerator: modifiers plus exactly one key.
///
/// `indexed` records that the descriptor was materialized from a template
/// such as `Alt+Number`. It is provenance only: equality, ordering and
/// hashing look at modifiers and key alone, so `Alt+3` typed in config and
/// slot 2 of `Alt+Number` are the same accelerator.
#[derive(Debug, Clone)]
pub struct AcceleratorDescriptor {
    modifiers: Modifiers,
    key: Key,
    indexed: bool,
}

impl AcceleratorDescriptor {
    pub fn new(modifiers: Modifiers, key: Key) -> Self {
        Self {
            modifiers,
            key,
            indexed: false,
        }
    }

    pub(crate) fn materialized(modifiers: Modifiers, key: Key) -> Self {
        Self {
            modifiers,
            key,
            indexed: true,
        }
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn is_indexed(&self) -> bool {
        self.indexed
    }

    /// Form stored in a snapshot's accelerator index
    pub fn normalized(&self) -> Self {
        Self::new(self.modifiers, self.key.clone())
    }
}

impl PartialEq for AcceleratorDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.modifiers == other.modifiers && self.key == other.key
    }
}

impl Eq for AcceleratorDescriptor {}

impl Hash for AcceleratorDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.modifiers.hash(state);
        self.key.hash(state);
    }
}

impl PartialOrd for AcceleratorDescriptor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AcceleratorDescriptor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.modifiers
            .cmp(&other.modifiers)
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl std::fmt::Display for AcceleratorDescriptor {
    /// Prints in configuration syntax, e.g. `Cmd+Shift+Plus`. The output
    /// parses back to an equal descriptor on every platform.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = [
            (Modifiers::META, "Cmd"),
            (Modifiers::CONTROL, "Ctrl"),
            (Modifiers::ALT, "Alt"),
            (Modifiers::SHIFT, "Shift"),
        ];
        for (flag, name) in names {
            if self.modifiers.contains(flag) {
                write!(f, "{}+", name)?;
            }
        }
        write!(f, "{}", self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_indexed_flag_ignored_by_equality() {
        let literal = AcceleratorDescriptor::new(Modifiers::ALT, Key::Digit(3));
        let slot = AcceleratorDescriptor::materialized(Modifiers::ALT, Key::Digit(3));
        assert!(slot.is_indexed());
        assert_eq!(literal, slot);

        let mut set = HashSet::new();
        set.insert(literal);
        assert!(set.contains(&slot));
    }

    #[test]
    fn test_normalized_clears_indexed() {
        let slot = AcceleratorDescriptor::materialized(Modifiers::ALT, Key::Digit(1));
        assert!(!slot.normalized().is_indexed());
    }

    #[test]
    fn test_display() {
        let d = AcceleratorDescriptor::new(
            Modifiers::CONTROL | Modifiers::SHIFT,
            Key::named("+"),
        );
        assert_eq!(d.to_string(), "Ctrl+Shift+Plus");

        let d = AcceleratorDescriptor::new(Modifiers::META, Key::Digit(0));
        assert_eq!(d.to_string(), "Cmd+0");
    }

    #[test]
    fn test_modifiers_distinguish() {
        let a = AcceleratorDescriptor::new(Modifiers::CONTROL, Key::named("="));
        let b = AcceleratorDescriptor::new(Modifiers::CONTROL | Modifiers::SHIFT, Key::named("="));
        assert_ne!(a, b);
    }
}
