//! Terminal rendering of forests via `termtree`.

use std::fmt::Display;

use termtree::Tree;

use crate::node::Node;
use crate::traversal::Traversal;

/// Conversion into a [`termtree::Tree`] for terminal display.
pub trait TreeFormat {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: Display> TreeFormat for Node<T> {
    fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = self.children.iter().map(|c| c.to_tree_string()).collect();
        Tree::new(self.value.to_string()).with_leaves(leaves)
    }
}

/// Renders a whole forest, one rendered tree per root, each block
/// ending in a single newline.
pub fn forest_to_string<T: Display>(roots: &[Node<T>]) -> String {
    let mut out = String::new();
    for root in roots {
        let rendered = root.to_tree_string().to_string();
        out.push_str(&rendered);
        if !rendered.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

impl<T: Display> Traversal<'_, T> {
    /// Renders the viewed forest; see [`forest_to_string`].
    pub fn render(&self) -> String {
        forest_to_string(self.roots())
    }
}
