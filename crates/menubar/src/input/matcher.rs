//! Match raw input against configured accelerators

use log::trace;

use super::event::{KeyEventKind, RawKeyEvent};
use crate::accelerator::AcceleratorParser;
use crate::menu::MenuSnapshot;
use crate::models::{ActionRef, Platform};

/// Recovers shortcut dispatch for key events the native menu never saw
#[derive(Debug, Clone, Copy)]
pub struct InputEventMatcher {
    parser: AcceleratorParser,
}

impl InputEventMatcher {
    pub fn new(platform: Platform) -> Self {
        Self {
            parser: AcceleratorParser::new(platform),
        }
    }

    /// Action bound to `event` in `snapshot`'s accelerator index.
    /// Only key-down events match; lookup is exact on modifiers and key.
    pub fn match_event(&self, event: &RawKeyEvent, snapshot: &MenuSnapshot) -> Option<ActionRef> {
        if event.kind != KeyEventKind::KeyDown {
            return None;
        }
        let action = event
            .descriptor()
            .and_then(|descriptor| snapshot.action_for(&descriptor).cloned());
        trace!("Key event {:?} matched {:?}", event, action);
        action
    }

    /// Whether `event` triggers the configured accelerator `raw`.
    ///
    /// Templates match any of their nine slots. Malformed or empty strings
    /// never match.
    pub fn matches(&self, event: &RawKeyEvent, raw: &str) -> bool {
        if event.kind != KeyEventKind::KeyDown {
            return false;
        }
        let Ok(accelerator) = self.parser.parse_accelerator(raw) else {
            return false;
        };
        let Some(descriptor) = event.descriptor() else {
            return false;
        };
        accelerator.candidates().contains(&descriptor)
    }
}
