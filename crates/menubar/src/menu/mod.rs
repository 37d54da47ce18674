//! Application menu model and builder

mod builder;
mod node;

pub use builder::{groups, MenuBuilder, APP_NAME};
pub use node::{MenuItemNode, MenuSnapshot};
