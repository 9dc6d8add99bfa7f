//! N-ary tree container with bidirectional pre-order traversal.
//!
//! A forest is a caller-owned `Vec` of [`Node`]s; [`Traversal`] wraps it
//! for navigation and [`TraversalMut`] for structural editing.
//! Navigation is cursor-based: a [`Cursor`] walks the forest in
//! pre-order in both directions as a stack of (sibling list, position)
//! frames, converts to and from index paths, and reports its depth and
//! sibling position.
//!
//! ```
//! use treenav::{Node, Traversal};
//!
//! let roots = vec![
//!     Node::branch(1, [34, 45]),
//!     Node::branch(2, [Node::branch(3, [78, 89, 96])]),
//! ];
//!
//! let traversal = Traversal::new(&roots);
//! let values: Vec<i32> = traversal.iter().map(|n| n.value).collect();
//! assert_eq!(values, vec![1, 34, 45, 2, 3, 78, 89, 96]);
//!
//! assert_eq!(traversal.get(&[1, 0, 2]).map(|n| n.value), Some(96));
//! ```
//!
//! Structural edits take index paths and return index paths: any edit
//! invalidates all outstanding cursors over the same forest, and the
//! editing API requires `&mut`, so the borrow checker enforces that
//! contract at compile time.

pub mod cursor;
pub mod display;
pub mod errors;
pub mod iter;
pub mod node;
pub mod traversal;

pub use cursor::Cursor;
pub use display::{forest_to_string, TreeFormat};
pub use errors::{TreeError, TreeResult};
pub use iter::{PreOrderIter, ValuesMut};
pub use node::Node;
pub use traversal::{Traversal, TraversalMut};
