//! Menu rebuild decisions and snapshot lifecycle

mod inputs;
mod manager;

pub use inputs::{InputChange, MenuInputs};
pub use manager::MenuLifecycleManager;
