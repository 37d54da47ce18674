//! Accelerator parsing and configuration
//!
//! This module provides:
//! - The normalized [`AcceleratorDescriptor`] every other layer compares
//! - A platform-aware parser for configuration strings and `Number` templates
//! - The named [`AcceleratorSet`] supplied by configuration

mod descriptor;
mod keys;
mod parser;
mod set;

pub use descriptor::{AcceleratorDescriptor, Key, Modifiers};
pub use keys::canonical_key;
pub use parser::{Accelerator, AcceleratorParser, AcceleratorTemplate, INDEXED_SLOTS};
pub use set::{AcceleratorName, AcceleratorSet};
