//! Accelerator token vocabulary

use super::descriptor::{Key, Modifiers};
use crate::models::Platform;

/// Placeholder token replaced by a 1-based slot number
pub const PLACEHOLDER: &str = "number";

/// Single-character keys usable directly in an accelerator
const PUNCTUATION: &str = ")!@#$%^&*(:;+=<,_->.?/~`{]}[|\\\"'";

/// Named keys: (lowercase alias, canonical name)
const NAMED_KEYS: &[(&str, &str)] = &[
    ("plus", "+"),
    ("space", "Space"),
    ("tab", "Tab"),
    ("capslock", "Capslock"),
    ("numlock", "Numlock"),
    ("scrolllock", "Scrolllock"),
    ("backspace", "Backspace"),
    ("delete", "Delete"),
    ("del", "Delete"),
    ("insert", "Insert"),
    ("ins", "Insert"),
    ("return", "Enter"),
    ("enter", "Enter"),
    ("up", "Up"),
    ("arrowup", "Up"),
    ("down", "Down"),
    ("arrowdown", "Down"),
    ("left", "Left"),
    ("arrowleft", "Left"),
    ("right", "Right"),
    ("arrowright", "Right"),
    ("home", "Home"),
    ("end", "End"),
    ("pageup", "PageUp"),
    ("pagedown", "PageDown"),
    ("escape", "Escape"),
    ("esc", "Escape"),
    ("volumeup", "VolumeUp"),
    ("volumedown", "VolumeDown"),
    ("volumemute", "VolumeMute"),
    ("medianexttrack", "MediaNextTrack"),
    ("mediaprevioustrack", "MediaPreviousTrack"),
    ("mediastop", "MediaStop"),
    ("mediaplaypause", "MediaPlayPause"),
    ("printscreen", "PrintScreen"),
    ("numdec", "numdec"),
    ("numadd", "numadd"),
    ("numsub", "numsub"),
    ("nummult", "nummult"),
    ("numdiv", "numdiv"),
];

/// A classified accelerator token
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Modifier(Modifiers),
    Key(Key),
    Placeholder,
}

/// Classify one `+`-separated token for the given platform
pub(crate) fn classify(token: &str, platform: Platform) -> Option<Token> {
    if let Some(modifier) = modifier(token, platform) {
        return Some(Token::Modifier(modifier));
    }
    if token.eq_ignore_ascii_case(PLACEHOLDER) {
        return Some(Token::Placeholder);
    }
    canonical_key(token).map(Token::Key)
}

fn modifier(token: &str, platform: Platform) -> Option<Modifiers> {
    match token.to_ascii_lowercase().as_str() {
        "cmd" | "command" | "super" | "meta" => Some(Modifiers::META),
        "ctrl" | "control" => Some(Modifiers::CONTROL),
        "alt" | "option" | "altgr" => Some(Modifiers::ALT),
        "shift" => Some(Modifiers::SHIFT),
        "cmdorctrl" | "commandorcontrol" => Some(if platform.is_mac() {
            Modifiers::META
        } else {
            Modifiers::CONTROL
        }),
        _ => None,
    }
}

/// Canonicalize a key name. Decimal digits become [`Key::Digit`].
pub fn canonical_key(token: &str) -> Option<Key> {
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(n) = c.to_digit(10) {
            return Some(Key::Digit(n as u8));
        }
        if c.is_ascii_alphabetic() {
            return Some(Key::Named(c.to_ascii_uppercase().to_string()));
        }
        if PUNCTUATION.contains(c) {
            return Some(Key::Named(c.to_string()));
        }
        return None;
    }

    let lower = token.to_ascii_lowercase();
    if let Some((_, name)) = NAMED_KEYS.iter().find(|(alias, _)| *alias == lower) {
        return Some(Key::Named((*name).to_string()));
    }
    if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        if (1..=24).contains(&n) {
            return Some(Key::Named(format!("F{}", n)));
        }
    }
    if let Some(n) = lower.strip_prefix("num").and_then(|n| n.parse::<u8>().ok()) {
        if n <= 9 {
            return Some(Key::Named(format!("num{}", n)));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_reclassified() {
        assert_eq!(canonical_key("7"), Some(Key::Digit(7)));
    }

    #[test]
    fn test_letters_uppercased() {
        assert_eq!(canonical_key("k"), Some(Key::named("K")));
    }

    #[test]
    fn test_aliases() {
        assert_eq!(canonical_key("Return"), Some(Key::named("Enter")));
        assert_eq!(canonical_key("esc"), Some(Key::named("Escape")));
        assert_eq!(canonical_key("Plus"), Some(Key::named("+")));
        assert_eq!(canonical_key("f12"), Some(Key::named("F12")));
        assert_eq!(canonical_key("num5"), Some(Key::named("num5")));
    }

    #[test]
    fn test_unknown_keys() {
        assert_eq!(canonical_key("F25"), None);
        assert_eq!(canonical_key("Banana"), None);
        assert_eq!(canonical_key("é"), None);
    }

    #[test]
    fn test_cmd_or_ctrl_by_platform() {
        assert_eq!(
            classify("CmdOrCtrl", Platform::MacOs),
            Some(Token::Modifier(Modifiers::META))
        );
        assert_eq!(
            classify("CommandOrControl", Platform::Linux),
            Some(Token::Modifier(Modifiers::CONTROL))
        );
    }

    #[test]
    fn test_placeholder_any_case() {
        assert_eq!(classify("Number", Platform::Linux), Some(Token::Placeholder));
        assert_eq!(classify("NUMBER", Platform::Linux), Some(Token::Placeholder));
    }
}
