//! Raw keyboard events as delivered by the content surface

use crate::accelerator::{canonical_key, AcceleratorDescriptor, Key, Modifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    KeyDown,
    KeyUp,
    Char,
}

/// Keyboard event that bypassed the native menu.
///
/// `key` is the layout-dependent value ("a", "+", "3"). `code` is the
/// physical key ("KeyA", "Equal", "Digit3") and may be empty when the
/// source does not report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawKeyEvent {
    pub kind: KeyEventKind,
    pub key: String,
    pub code: String,
    pub meta: bool,
    pub control: bool,
    pub shift: bool,
    pub alt: bool,
}

/// Physical codes that do not follow the `Digit*`/`Key*`/`Numpad*` patterns
const CODE_KEYS: &[(&str, &str)] = &[
    ("Equal", "="),
    ("Minus", "-"),
    ("Comma", ","),
    ("Period", "."),
    ("Slash", "/"),
    ("Backslash", "\\"),
    ("Semicolon", ";"),
    ("Quote", "'"),
    ("BracketLeft", "["),
    ("BracketRight", "]"),
    ("Backquote", "`"),
    ("Space", "Space"),
    ("Enter", "Enter"),
    ("NumpadEnter", "Enter"),
    ("Tab", "Tab"),
    ("Escape", "Escape"),
    ("Backspace", "Backspace"),
    ("Delete", "Delete"),
    ("Insert", "Insert"),
    ("Home", "Home"),
    ("End", "End"),
    ("PageUp", "PageUp"),
    ("PageDown", "PageDown"),
    ("ArrowUp", "Up"),
    ("ArrowDown", "Down"),
    ("ArrowLeft", "Left"),
    ("ArrowRight", "Right"),
    ("NumpadAdd", "numadd"),
    ("NumpadSubtract", "numsub"),
    ("NumpadMultiply", "nummult"),
    ("NumpadDivide", "numdiv"),
    ("NumpadDecimal", "numdec"),
];

/// Canonical key for a physical key code
pub fn key_from_code(code: &str) -> Option<Key> {
    if let Some(digit) = code.strip_prefix("Digit") {
        return canonical_key(digit).filter(|k| matches!(k, Key::Digit(_)));
    }
    if let Some(n) = code.strip_prefix("Numpad").and_then(|n| n.parse::<u8>().ok()) {
        return (n <= 9).then(|| Key::Named(format!("num{}", n)));
    }
    if let Some(letter) = code.strip_prefix("Key") {
        return canonical_key(letter).filter(|_| letter.len() == 1);
    }
    if let Some((_, name)) = CODE_KEYS.iter().find(|(c, _)| *c == code) {
        return Some(Key::named(*name));
    }
    // F1..F24 share their names
    canonical_key(code).filter(|k| matches!(k, Key::Named(n) if n.starts_with('F') && n.len() > 1))
}

/// Physical code that produces `key`, if there is one
pub fn code_for_key(key: &Key) -> Option<String> {
    match key {
        Key::Digit(n) => Some(format!("Digit{}", n)),
        Key::Named(name) => {
            let mut chars = name.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                if c.is_ascii_uppercase() {
                    return Some(format!("Key{}", c));
                }
            }
            if let Some(n) = name.strip_prefix("num").and_then(|n| n.parse::<u8>().ok()) {
                return Some(format!("Numpad{}", n));
            }
            if name.starts_with('F') && name[1..].parse::<u8>().is_ok() {
                return Some(name.clone());
            }
            CODE_KEYS
                .iter()
                .find(|(_, k)| k == name)
                .map(|(code, _)| (*code).to_string())
        }
    }
}

impl RawKeyEvent {
    pub fn key_down(key: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            kind: KeyEventKind::KeyDown,
            key: key.into(),
            code: code.into(),
            meta: false,
            control: false,
            shift: false,
            alt: false,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.meta = modifiers.contains(Modifiers::META);
        self.control = modifiers.contains(Modifiers::CONTROL);
        self.shift = modifiers.contains(Modifiers::SHIFT);
        self.alt = modifiers.contains(Modifiers::ALT);
        self
    }

    /// Synthesize the key-down event a user would produce for `descriptor`
    pub fn from_descriptor(descriptor: &AcceleratorDescriptor) -> Self {
        let key = match descriptor.key() {
            Key::Digit(n) => n.to_string(),
            Key::Named(name) => name.clone(),
        };
        let code = code_for_key(descriptor.key()).unwrap_or_default();
        Self::key_down(key, code).with_modifiers(descriptor.modifiers())
    }

    pub fn modifiers(&self) -> Modifiers {
        let mut modifiers = Modifiers::empty();
        modifiers.set(Modifiers::META, self.meta);
        modifiers.set(Modifiers::CONTROL, self.control);
        modifiers.set(Modifiers::SHIFT, self.shift);
        modifiers.set(Modifiers::ALT, self.alt);
        modifiers
    }

    /// The single descriptor this event stands for.
    ///
    /// Digits come from a `Digit*` code, or from a digit `key` when no code
    /// was reported. Every other key follows the layout `key`; `code` is
    /// consulted only when `key` is empty or unidentified.
    pub fn descriptor(&self) -> Option<AcceleratorDescriptor> {
        let from_code = key_from_code(&self.code);
        let key = match canonical_key(&self.key) {
            _ if matches!(from_code, Some(Key::Digit(_))) => from_code?,
            Some(Key::Digit(n)) if self.code.is_empty() => Key::Digit(n),
            Some(Key::Digit(_)) | None => from_code?,
            Some(key) => key,
        };
        Some(AcceleratorDescriptor::new(self.modifiers(), key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_table() {
        assert_eq!(key_from_code("Digit3"), Some(Key::Digit(3)));
        assert_eq!(key_from_code("KeyA"), Some(Key::named("A")));
        assert_eq!(key_from_code("Equal"), Some(Key::named("=")));
        assert_eq!(key_from_code("Numpad4"), Some(Key::named("num4")));
        assert_eq!(key_from_code("F11"), Some(Key::named("F11")));
        assert_eq!(key_from_code("ArrowLeft"), Some(Key::named("Left")));
        assert_eq!(key_from_code(""), None);
        assert_eq!(key_from_code("ShiftLeft"), None);
    }

    #[test]
    fn test_code_for_key() {
        assert_eq!(code_for_key(&Key::Digit(7)).as_deref(), Some("Digit7"));
        assert_eq!(code_for_key(&Key::named("Q")).as_deref(), Some("KeyQ"));
        assert_eq!(code_for_key(&Key::named("=")).as_deref(), Some("Equal"));
        assert_eq!(code_for_key(&Key::named("Enter")).as_deref(), Some("Enter"));
        assert_eq!(code_for_key(&Key::named("+")), None);
    }

    #[test]
    fn test_shifted_digit_uses_code() {
        // Shift+3 on a US layout reports key "#"
        let event = RawKeyEvent::key_down("#", "Digit3").with_modifiers(Modifiers::SHIFT);
        assert_eq!(
            event.descriptor(),
            Some(AcceleratorDescriptor::new(Modifiers::SHIFT, Key::Digit(3)))
        );
    }

    #[test]
    fn test_digit_key_reclassified() {
        let event = RawKeyEvent::key_down("5", "");
        assert_eq!(
            event.descriptor(),
            Some(AcceleratorDescriptor::new(Modifiers::empty(), Key::Digit(5)))
        );
    }

    #[test]
    fn test_letters_follow_layout_key() {
        // AZERTY: the key labelled "a" sits where US has Q
        let azerty = RawKeyEvent::key_down("a", "KeyQ").with_modifiers(Modifiers::CONTROL);
        assert_eq!(azerty.descriptor().unwrap().key(), &Key::named("A"));

        // Dvorak: "w" sits on the US comma key
        let dvorak = RawKeyEvent::key_down("w", "Comma").with_modifiers(Modifiers::CONTROL);
        assert_eq!(dvorak.descriptor().unwrap().key(), &Key::named("W"));
    }

    #[test]
    fn test_numpad_digit_is_not_top_row() {
        let event = RawKeyEvent::key_down("0", "Numpad0").with_modifiers(Modifiers::CONTROL);
        assert_eq!(event.descriptor().unwrap().key(), &Key::named("num0"));
    }

    #[test]
    fn test_code_used_when_key_unidentified() {
        let event = RawKeyEvent::key_down("Unidentified", "KeyN").with_modifiers(Modifiers::CONTROL);
        assert_eq!(event.descriptor().unwrap().key(), &Key::named("N"));
        let empty = RawKeyEvent::key_down("", "Equal");
        assert_eq!(empty.descriptor().unwrap().key(), &Key::named("="));
        assert_eq!(RawKeyEvent::key_down("Dead", "").descriptor(), None);
    }

    #[test]
    fn test_from_descriptor_modifiers() {
        let descriptor = AcceleratorDescriptor::new(Modifiers::META | Modifiers::ALT, Key::Digit(2));
        let event = RawKeyEvent::from_descriptor(&descriptor);
        assert!(event.meta && event.alt);
        assert!(!event.control && !event.shift);
        assert_eq!(event.code, "Digit2");
        assert_eq!(event.modifiers(), descriptor.modifiers());
    }
}
