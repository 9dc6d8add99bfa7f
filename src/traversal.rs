//! Pre-order navigation and structural editing over a caller-owned
//! forest.
//!
//! [`Traversal`] borrows the root sibling list for navigation;
//! [`TraversalMut`] borrows it exclusively and adds the structural
//! edits. An edit invalidates every position held over the same forest,
//! which is why the editing API exchanges index paths rather than live
//! cursors: the borrow checker rules out a cursor kept across an edit.

use std::ops::{Index, IndexMut};

use tracing::{debug, instrument};

use crate::cursor::Cursor;
use crate::errors::{TreeError, TreeResult};
use crate::iter::{PreOrderIter, ValuesMut};
use crate::node::Node;

/// Shared pre-order view over a forest.
///
/// Owns no nodes; the forest must outlive the view. Cursors borrow the
/// forest directly and stay usable after the `Traversal` value itself
/// is dropped.
pub struct Traversal<'t, T> {
    roots: &'t [Node<T>],
}

impl<T> Clone for Traversal<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Traversal<'_, T> {}

impl<'t, T> Traversal<'t, T> {
    pub fn new(roots: &'t [Node<T>]) -> Self {
        Self { roots }
    }

    /// Root sibling list this view was built over.
    pub fn roots(&self) -> &'t [Node<T>] {
        self.roots
    }

    pub fn iter(&self) -> PreOrderIter<'t, T> {
        PreOrderIter::new(self.roots)
    }

    /// Cursor at the first node in pre-order; equal to the end cursor
    /// for an empty forest.
    pub fn cursor(&self) -> Cursor<'t, T> {
        Cursor::begin(self.roots)
    }

    /// Cursor one past the last node in pre-order.
    pub fn cursor_end(&self) -> Cursor<'t, T> {
        Cursor::end(self.roots)
    }

    /// Builds a cursor addressing the node at `path`.
    ///
    /// Fails with [`TreeError::PathOutOfRange`] if any path component
    /// is not a valid sibling position at its depth. The empty path
    /// yields a degenerate depth-0 cursor addressing no node.
    #[instrument(level = "debug", skip(self))]
    pub fn make_cursor(&self, path: &[usize]) -> TreeResult<Cursor<'t, T>> {
        Cursor::resolve(self.roots, path)
    }

    /// True iff `path` addresses a node: non-empty, every component a
    /// valid sibling position at its depth, no component descending
    /// past a leaf. Never fails.
    #[instrument(level = "trace", skip(self))]
    pub fn is_valid(&self, path: &[usize]) -> bool {
        !path.is_empty() && self.get(path).is_some()
    }

    /// Node addressed by `path`, or `None` when `path` is not valid.
    pub fn get(&self, path: &[usize]) -> Option<&'t Node<T>> {
        let (&first, rest) = path.split_first()?;
        let mut node = self.roots.get(first)?;
        for &pos in rest {
            node = node.children.get(pos)?;
        }
        Some(node)
    }
}

impl<'t, T> IntoIterator for Traversal<'t, T> {
    type Item = &'t Node<T>;
    type IntoIter = PreOrderIter<'t, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'t, T> IntoIterator for &Traversal<'t, T> {
    type Item = &'t Node<T>;
    type IntoIter = PreOrderIter<'t, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'p, T> Index<&'p [usize]> for Traversal<'_, T> {
    type Output = Node<T>;

    /// # Panics
    ///
    /// Panics if `path` does not address a node; pre-check with
    /// [`Traversal::is_valid`] or use [`Traversal::get`].
    fn index(&self, path: &'p [usize]) -> &Self::Output {
        self.get(path)
            .unwrap_or_else(|| panic!("index path {path:?} does not address a node"))
    }
}

/// Exclusive pre-order view over a forest; adds structural editing.
///
/// Every edit takes `&mut self`, so no cursor or iterator over the same
/// forest can be kept across [`insert`](TraversalMut::insert),
/// [`insert_after`](TraversalMut::insert_after) or
/// [`erase`](TraversalMut::erase); the edits exchange index paths
/// instead, and [`view`](TraversalMut::view) re-materializes cursors
/// afterwards.
pub struct TraversalMut<'t, T> {
    roots: &'t mut Vec<Node<T>>,
}

impl<'t, T> TraversalMut<'t, T> {
    pub fn new(roots: &'t mut Vec<Node<T>>) -> Self {
        Self { roots }
    }

    /// Shared view for navigation; cursors it hands out expire at the
    /// next edit.
    pub fn view(&self) -> Traversal<'_, T> {
        Traversal::new(self.roots)
    }

    pub fn roots(&self) -> &[Node<T>] {
        self.roots
    }

    pub fn iter(&self) -> PreOrderIter<'_, T> {
        PreOrderIter::new(self.roots)
    }

    /// Pre-order iteration over mutable payloads.
    pub fn values_mut(&mut self) -> ValuesMut<'_, T> {
        ValuesMut::new(self.roots)
    }

    pub fn get(&self, path: &[usize]) -> Option<&Node<T>> {
        self.view().get(path)
    }

    /// Mutable access to the node addressed by `path`.
    pub fn get_mut(&mut self, path: &[usize]) -> Option<&mut Node<T>> {
        let (&first, rest) = path.split_first()?;
        let mut node = self.roots.get_mut(first)?;
        for &pos in rest {
            node = node.children.get_mut(pos)?;
        }
        Some(node)
    }

    pub fn is_valid(&self, path: &[usize]) -> bool {
        self.view().is_valid(path)
    }

    pub fn make_cursor(&self, path: &[usize]) -> TreeResult<Cursor<'_, T>> {
        self.view().make_cursor(path)
    }

    /// Inserts `node` as a sibling immediately before the position
    /// addressed by `at`, within that position's own sibling list.
    ///
    /// The last component of `at` may equal the sibling count, which
    /// appends to that list. Returns the path of the inserted node,
    /// which is `at` itself.
    #[instrument(level = "debug", skip(self, node))]
    pub fn insert(&mut self, at: &[usize], node: Node<T>) -> TreeResult<Vec<usize>> {
        let Some((&pos, parents)) = at.split_last() else {
            return Err(TreeError::EmptyPath {
                operation: "insert",
            });
        };
        let list = self.resolve_children_mut(at, parents)?;
        if pos > list.len() {
            return Err(TreeError::PathOutOfRange {
                path: at.to_vec(),
                depth: at.len() - 1,
                position: pos,
                len: list.len(),
            });
        }
        list.insert(pos, node);
        Ok(at.to_vec())
    }

    /// Inserts `node` immediately after the node addressed by `at`,
    /// which must exist. Returns the new node's path.
    #[instrument(level = "debug", skip(self, node))]
    pub fn insert_after(&mut self, at: &[usize], node: Node<T>) -> TreeResult<Vec<usize>> {
        let Some((&pos, parents)) = at.split_last() else {
            return Err(TreeError::EmptyPath {
                operation: "insert_after",
            });
        };
        let list = self.resolve_children_mut(at, parents)?;
        if pos >= list.len() {
            return Err(TreeError::PathOutOfRange {
                path: at.to_vec(),
                depth: at.len() - 1,
                position: pos,
                len: list.len(),
            });
        }
        list.insert(pos + 1, node);

        let mut result = at.to_vec();
        if let Some(last) = result.last_mut() {
            *last += 1;
        }
        Ok(result)
    }

    /// Removes the subtree addressed by `at`.
    ///
    /// Returns the path of the node following the removed one in
    /// pre-order, or `None` when the removed subtree held the last node
    /// of the traversal. The vacated position points at the former next
    /// sibling; when it falls off the end of its list, levels are
    /// popped and the ancestor position advanced, exactly the
    /// tail-unwind of the pre-order step.
    #[instrument(level = "debug", skip(self))]
    pub fn erase(&mut self, at: &[usize]) -> TreeResult<Option<Vec<usize>>> {
        let Some((&pos, parents)) = at.split_last() else {
            return Err(TreeError::EmptyPath { operation: "erase" });
        };
        {
            let list = self.resolve_children_mut(at, parents)?;
            if pos >= list.len() {
                return Err(TreeError::PathOutOfRange {
                    path: at.to_vec(),
                    depth: at.len() - 1,
                    position: pos,
                    len: list.len(),
                });
            }
            list.remove(pos);
        }

        let mut stack = at.to_vec();
        loop {
            let len = self.sibling_len(&stack[..stack.len() - 1]);
            if stack.last().is_some_and(|&p| p < len) {
                return Ok(Some(stack));
            }
            if stack.len() == 1 {
                debug!("erase removed the final node of the traversal");
                return Ok(None);
            }
            stack.pop();
            if let Some(last) = stack.last_mut() {
                *last += 1;
            }
        }
    }

    /// Resolves the sibling list that the last component of `full`
    /// indexes into, i.e. the child list of the node at `parents` (the
    /// root list when `parents` is empty).
    fn resolve_children_mut(
        &mut self,
        full: &[usize],
        parents: &[usize],
    ) -> TreeResult<&mut Vec<Node<T>>> {
        let mut list = &mut *self.roots;
        for (depth, &pos) in parents.iter().enumerate() {
            let len = list.len();
            list = &mut list
                .get_mut(pos)
                .ok_or_else(|| TreeError::PathOutOfRange {
                    path: full.to_vec(),
                    depth,
                    position: pos,
                    len,
                })?
                .children;
        }
        Ok(list)
    }

    fn sibling_len(&self, parents: &[usize]) -> usize {
        if parents.is_empty() {
            self.roots.len()
        } else {
            self.view().get(parents).map_or(0, |n| n.children.len())
        }
    }
}

impl<'p, T> Index<&'p [usize]> for TraversalMut<'_, T> {
    type Output = Node<T>;

    /// # Panics
    ///
    /// Panics if `path` does not address a node.
    fn index(&self, path: &'p [usize]) -> &Self::Output {
        self.get(path)
            .unwrap_or_else(|| panic!("index path {path:?} does not address a node"))
    }
}

impl<'p, T> IndexMut<&'p [usize]> for TraversalMut<'_, T> {
    fn index_mut(&mut self, path: &'p [usize]) -> &mut Self::Output {
        self.get_mut(path)
            .unwrap_or_else(|| panic!("index path {path:?} does not address a node"))
    }
}
