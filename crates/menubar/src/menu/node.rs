//! Menu tree and snapshot types

use std::collections::HashMap;

use crate::accelerator::AcceleratorDescriptor;
use crate::models::ActionRef;

/// One entry of the application menu
#[derive(Debug, Clone, PartialEq)]
pub enum MenuItemNode {
    Action {
        label: String,
        action: ActionRef,
        accelerator: Option<AcceleratorDescriptor>,
    },
    Separator,
    Radio {
        label: String,
        checked: bool,
        action: ActionRef,
        accelerator: Option<AcceleratorDescriptor>,
    },
    Submenu {
        label: String,
        children: Vec<MenuItemNode>,
    },
}

impl MenuItemNode {
    pub fn action(label: impl Into<String>, action: ActionRef) -> Self {
        MenuItemNode::Action {
            label: label.into(),
            action,
            accelerator: None,
        }
    }

    pub fn submenu(label: impl Into<String>, children: Vec<MenuItemNode>) -> Self {
        MenuItemNode::Submenu {
            label: label.into(),
            children,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            MenuItemNode::Action { label, .. }
            | MenuItemNode::Radio { label, .. }
            | MenuItemNode::Submenu { label, .. } => Some(label),
            MenuItemNode::Separator => None,
        }
    }

    pub fn action_ref(&self) -> Option<&ActionRef> {
        match self {
            MenuItemNode::Action { action, .. } | MenuItemNode::Radio { action, .. } => Some(action),
            _ => None,
        }
    }

    pub fn accelerator(&self) -> Option<&AcceleratorDescriptor> {
        match self {
            MenuItemNode::Action { accelerator, .. } | MenuItemNode::Radio { accelerator, .. } => {
                accelerator.as_ref()
            }
            _ => None,
        }
    }

    pub fn children(&self) -> &[MenuItemNode] {
        match self {
            MenuItemNode::Submenu { children, .. } => children.as_slice(),
            _ => &[],
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, MenuItemNode::Separator)
    }

    /// Direct child submenu whose label, without mnemonic `&`, equals `label`
    pub fn find_submenu(&self, label: &str) -> Option<&MenuItemNode> {
        self.children().iter().find(|child| {
            matches!(child, MenuItemNode::Submenu { .. })
                && child.label().map(|l| l.trim_start_matches('&')) == Some(label)
        })
    }

    /// Depth-first, construction-order walk over this node and its descendants
    pub fn walk(&self) -> Vec<&MenuItemNode> {
        let mut out = vec![self];
        for child in self.children() {
            out.extend(child.walk());
        }
        out
    }
}

/// An immutable built menu plus its flattened accelerator index
#[derive(Debug, Clone)]
pub struct MenuSnapshot {
    tree: MenuItemNode,
    accelerator_index: HashMap<AcceleratorDescriptor, ActionRef>,
    generation: u64,
}

impl MenuSnapshot {
    /// Build the index from the tree. Nodes are visited in construction
    /// order, so on a duplicate accelerator the later node wins.
    pub(crate) fn new(tree: MenuItemNode) -> Self {
        let mut accelerator_index = HashMap::new();
        for node in tree.walk() {
            if let (Some(accelerator), Some(action)) = (node.accelerator(), node.action_ref()) {
                accelerator_index.insert(accelerator.normalized(), action.clone());
            }
        }
        Self {
            tree,
            accelerator_index,
            generation: 0,
        }
    }

    /// Stamp the install generation; done once by the lifecycle manager
    pub(crate) fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    pub fn tree(&self) -> &MenuItemNode {
        &self.tree
    }

    pub fn accelerator_index(&self) -> &HashMap<AcceleratorDescriptor, ActionRef> {
        &self.accelerator_index
    }

    /// Exact lookup in the accelerator index
    pub fn action_for(&self, accelerator: &AcceleratorDescriptor) -> Option<&ActionRef> {
        self.accelerator_index.get(accelerator)
    }

    /// Install generation (0 until installed)
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Top-level group by label, ignoring the Linux mnemonic prefix
    pub fn group(&self, label: &str) -> Option<&MenuItemNode> {
        self.tree.find_submenu(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accelerator::{Key, Modifiers};

    fn accel(key: &str) -> Option<AcceleratorDescriptor> {
        Some(AcceleratorDescriptor::new(Modifiers::CONTROL, Key::named(key)))
    }

    #[test]
    fn test_index_one_entry_per_accelerated_node() {
        let tree = MenuItemNode::submenu(
            "",
            vec![MenuItemNode::submenu(
                "File",
                vec![
                    MenuItemNode::Action {
                        label: "Quit".into(),
                        action: ActionRef::Quit,
                        accelerator: accel("Q"),
                    },
                    MenuItemNode::Separator,
                    MenuItemNode::action("About", ActionRef::About),
                ],
            )],
        );
        let snapshot = MenuSnapshot::new(tree);
        assert_eq!(snapshot.accelerator_index().len(), 1);
        assert_eq!(
            snapshot.action_for(&accel("Q").unwrap()),
            Some(&ActionRef::Quit)
        );
    }

    #[test]
    fn test_duplicate_accelerator_later_wins() {
        let tree = MenuItemNode::submenu(
            "",
            vec![
                MenuItemNode::Action {
                    label: "Find".into(),
                    action: ActionRef::Find,
                    accelerator: accel("F"),
                },
                MenuItemNode::submenu(
                    "View",
                    vec![MenuItemNode::Action {
                        label: "Full screen".into(),
                        action: ActionRef::ToggleFullscreen,
                        accelerator: accel("F"),
                    }],
                ),
            ],
        );
        let snapshot = MenuSnapshot::new(tree);
        assert_eq!(snapshot.accelerator_index().len(), 1);
        assert_eq!(
            snapshot.action_for(&accel("F").unwrap()),
            Some(&ActionRef::ToggleFullscreen)
        );
    }

    #[test]
    fn test_find_submenu_ignores_mnemonic() {
        let tree = MenuItemNode::submenu("", vec![MenuItemNode::submenu("&Edit", vec![])]);
        let snapshot = MenuSnapshot::new(tree);
        assert!(snapshot.group("Edit").is_some());
        assert!(snapshot.group("View").is_none());
    }
}
