//! Accelerator string parser
//!
//! Accepts the configuration syntax used by the settings screen:
//! - `CmdOrCtrl+Shift+N` - modifiers then exactly one key
//! - `Ctrl++` or `Ctrl+Plus` - the plus key
//! - `Alt+Number` - a template expanded to `Alt+1` .. `Alt+9`
//!
//! Tokens are case-insensitive. Anything outside the vocabulary in
//! [`keys`](super::keys) is a [`MenuError::MalformedAccelerator`].

use super::descriptor::{AcceleratorDescriptor, Key, Modifiers};
use super::keys::{classify, Token};
use crate::error::{MenuError, Result};
use crate::models::Platform;

/// Number of positional slots a template expands to
pub const INDEXED_SLOTS: usize = 9;

/// A parsed accelerator string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accelerator {
    /// A single concrete accelerator
    Fixed(AcceleratorDescriptor),
    /// A template with a positional placeholder
    Indexed(AcceleratorTemplate),
}

impl Accelerator {
    /// Every concrete descriptor this accelerator stands for
    pub fn candidates(&self) -> Vec<AcceleratorDescriptor> {
        match self {
            Accelerator::Fixed(descriptor) => vec![descriptor.clone()],
            Accelerator::Indexed(template) => template.candidates().collect(),
        }
    }
}

/// Modifiers around a numeric placeholder, e.g. the `Alt` in `Alt+Number`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceleratorTemplate {
    modifiers: Modifiers,
}

impl AcceleratorTemplate {
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Bind the placeholder to slot `index` (0-based, shown as `index + 1`).
    /// Returns `None` past the last slot.
    pub fn materialize(&self, index: usize) -> Option<AcceleratorDescriptor> {
        if index >= INDEXED_SLOTS {
            return None;
        }
        Some(AcceleratorDescriptor::materialized(
            self.modifiers,
            Key::Digit(index as u8 + 1),
        ))
    }

    /// All nine materialized slots, in slot order
    pub fn candidates(&self) -> impl Iterator<Item = AcceleratorDescriptor> + '_ {
        (0..INDEXED_SLOTS).filter_map(|i| self.materialize(i))
    }
}

/// Parser bound to a platform, which decides what `CmdOrCtrl` means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceleratorParser {
    platform: Platform,
}

impl AcceleratorParser {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Parse a concrete accelerator. Templates are rejected here; use
    /// [`parse_accelerator`](Self::parse_accelerator) or
    /// [`materialize_indexed`](Self::materialize_indexed) for those.
    pub fn parse(&self, raw: &str) -> Result<AcceleratorDescriptor> {
        match self.parse_accelerator(raw)? {
            Accelerator::Fixed(descriptor) => Ok(descriptor),
            Accelerator::Indexed(_) => Err(MenuError::malformed(
                raw,
                "positional placeholder must be materialized to a slot",
            )),
        }
    }

    /// Parse a concrete accelerator or a template
    pub fn parse_accelerator(&self, raw: &str) -> Result<Accelerator> {
        let mut modifiers = Modifiers::empty();
        let mut key: Option<Key> = None;
        let mut placeholder = false;

        for token in tokenize(raw) {
            if token.is_empty() {
                return Err(MenuError::malformed(raw, "empty token"));
            }
            match classify(token, self.platform) {
                Some(Token::Modifier(m)) => modifiers |= m,
                Some(Token::Key(k)) => {
                    if key.is_some() || placeholder {
                        return Err(MenuError::malformed(raw, "more than one key"));
                    }
                    key = Some(k);
                }
                Some(Token::Placeholder) => {
                    if key.is_some() || placeholder {
                        return Err(MenuError::malformed(raw, "more than one key"));
                    }
                    placeholder = true;
                }
                None => {
                    return Err(MenuError::malformed(
                        raw,
                        format!("unknown token `{}`", token),
                    ));
                }
            }
        }

        match (key, placeholder) {
            (Some(key), _) => Ok(Accelerator::Fixed(AcceleratorDescriptor::new(modifiers, key))),
            (None, true) => Ok(Accelerator::Indexed(AcceleratorTemplate { modifiers })),
            (None, false) => Err(MenuError::malformed(raw, "no key")),
        }
    }

    /// Materialize slot `index` of `raw`.
    ///
    /// `Ok(None)` when `index` is past the ninth slot. A string without a
    /// placeholder materializes to itself for every in-range slot.
    pub fn materialize_indexed(&self, raw: &str, index: usize) -> Result<Option<AcceleratorDescriptor>> {
        if index >= INDEXED_SLOTS {
            return Ok(None);
        }
        Ok(match self.parse_accelerator(raw)? {
            Accelerator::Fixed(descriptor) => Some(descriptor),
            Accelerator::Indexed(template) => template.materialize(index),
        })
    }
}

/// Split on `+`, treating a trailing `++` (or a lone `+`) as the plus key
fn tokenize(raw: &str) -> Vec<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return vec![""];
    }
    if trimmed == "+" {
        return vec!["+"];
    }
    match trimmed.strip_suffix("++") {
        Some(head) => {
            let mut tokens: Vec<&str> = head.split('+').map(str::trim).collect();
            tokens.push("+");
            tokens
        }
        None => trimmed.split('+').map(str::trim).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linux() -> AcceleratorParser {
        AcceleratorParser::new(Platform::Linux)
    }

    #[test]
    fn test_parse_basic() {
        let d = linux().parse("Ctrl+Shift+N").unwrap();
        assert_eq!(d.modifiers(), Modifiers::CONTROL | Modifiers::SHIFT);
        assert_eq!(d.key(), &Key::named("N"));
        assert!(!d.is_indexed());
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(
            linux().parse("ctrl+shift+n").unwrap(),
            linux().parse("Ctrl+Shift+N").unwrap()
        );
    }

    #[test]
    fn test_cmd_or_ctrl() {
        let mac = AcceleratorParser::new(Platform::MacOs);
        assert_eq!(mac.parse("CmdOrCtrl+Q").unwrap(), mac.parse("Cmd+Q").unwrap());
        assert_eq!(linux().parse("CmdOrCtrl+Q").unwrap(), linux().parse("Ctrl+Q").unwrap());
    }

    #[test]
    fn test_modifier_synonyms() {
        let p = linux();
        assert_eq!(p.parse("Super+A").unwrap(), p.parse("Meta+A").unwrap());
        assert_eq!(p.parse("Command+A").unwrap(), p.parse("Cmd+A").unwrap());
        assert_eq!(p.parse("Option+A").unwrap(), p.parse("Alt+A").unwrap());
    }

    #[test]
    fn test_plus_key() {
        let p = linux();
        let expected = AcceleratorDescriptor::new(Modifiers::CONTROL, Key::named("+"));
        assert_eq!(p.parse("Ctrl++").unwrap(), expected);
        assert_eq!(p.parse("Ctrl+Plus").unwrap(), expected);
        assert_eq!(p.parse("+").unwrap().key(), &Key::named("+"));
    }

    #[test]
    fn test_digit_key_reclassified() {
        let d = linux().parse("Alt+3").unwrap();
        assert_eq!(d.key(), &Key::Digit(3));
    }

    #[test]
    fn test_malformed() {
        let p = linux();
        assert!(matches!(
            p.parse("Ctrl+Banana"),
            Err(MenuError::MalformedAccelerator { .. })
        ));
        assert!(p.parse("").is_err());
        assert!(p.parse("Ctrl+Shift").is_err());
        assert!(p.parse("Ctrl+A+B").is_err());
        assert!(p.parse("Ctrl++A").is_err());
        assert!(p.parse("Alt+Number+3").is_err());
    }

    #[test]
    fn test_parse_rejects_template() {
        assert!(linux().parse("Alt+Number").is_err());
        assert!(matches!(
            linux().parse_accelerator("Alt+Number").unwrap(),
            Accelerator::Indexed(_)
        ));
    }

    #[test]
    fn test_materialize_in_range() {
        let p = linux();
        for index in 0..9 {
            let d = p.materialize_indexed("Alt+Number", index).unwrap().unwrap();
            assert_eq!(d.key(), &Key::Digit(index as u8 + 1));
            assert_eq!(d.modifiers(), Modifiers::ALT);
            assert!(d.is_indexed());
        }
    }

    #[test]
    fn test_materialize_out_of_range() {
        let p = linux();
        assert_eq!(p.materialize_indexed("Alt+Number", 9).unwrap(), None);
        assert_eq!(p.materialize_indexed("Alt+Number", 42).unwrap(), None);
    }

    #[test]
    fn test_materialize_without_placeholder() {
        let d = linux().materialize_indexed("Ctrl+K", 4).unwrap().unwrap();
        assert_eq!(d, linux().parse("Ctrl+K").unwrap());
        assert!(!d.is_indexed());
    }

    #[test]
    fn test_materialized_equals_literal() {
        let p = linux();
        let slot = p.materialize_indexed("Alt+Number", 2).unwrap().unwrap();
        assert_eq!(slot, p.parse("Alt+3").unwrap());
    }

    #[test]
    fn test_display_round_trip() {
        let p = AcceleratorParser::new(Platform::MacOs);
        for raw in ["CmdOrCtrl+Shift+Plus", "Alt+F4", "Ctrl+Alt+Delete", "Cmd+,", "Shift+Tab"] {
            let d = p.parse(raw).unwrap();
            assert_eq!(p.parse(&d.to_string()).unwrap(), d, "{}", raw);
        }
    }

    #[test]
    fn test_template_candidates() {
        let Accelerator::Indexed(template) = linux().parse_accelerator("Ctrl+Number").unwrap() else {
            panic!("expected template");
        };
        let candidates: Vec<_> = template.candidates().collect();
        assert_eq!(candidates.len(), INDEXED_SLOTS);
        assert_eq!(candidates[0].key(), &Key::Digit(1));
        assert_eq!(candidates[8].key(), &Key::Digit(9));
    }
}
