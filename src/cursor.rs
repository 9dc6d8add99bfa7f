//! Bidirectional pre-order cursor over a forest.
//!
//! The cursor is a stack of frames, one per tree level. Each frame
//! references the sibling list active at that level and the current
//! position within it; `frames[0]` always refers to the root list.
//! Stack depth equals the depth of the addressed node. Every position
//! is a valid index into its list, except that the deepest frame sits
//! one past its list's end while the cursor as a whole is the end
//! cursor.

use std::cmp::Ordering;
use std::fmt;

use tracing::instrument;

use crate::errors::{TreeError, TreeResult};
use crate::node::Node;

/// One level of the cursor stack: a sibling list and a position in it.
pub(crate) struct Frame<'t, T> {
    list: &'t [Node<T>],
    pos: usize,
}

impl<T> Clone for Frame<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Frame<'_, T> {}

/// Bidirectional pre-order cursor.
///
/// Obtained from [`Traversal`](crate::Traversal). Comparison is
/// lexicographic over the position stack, which matches pre-order
/// visiting order; it is only meaningful between cursors of the same
/// traversal.
pub struct Cursor<'t, T> {
    frames: Vec<Frame<'t, T>>,
}

impl<'t, T> Cursor<'t, T> {
    pub(crate) fn begin(roots: &'t [Node<T>]) -> Self {
        Self {
            frames: vec![Frame { list: roots, pos: 0 }],
        }
    }

    pub(crate) fn end(roots: &'t [Node<T>]) -> Self {
        Self {
            frames: vec![Frame {
                list: roots,
                pos: roots.len(),
            }],
        }
    }

    /// Builds the frame stack addressed by `path`, validating each
    /// component against the sibling count at its depth.
    pub(crate) fn resolve(roots: &'t [Node<T>], path: &[usize]) -> TreeResult<Self> {
        let mut frames = Vec::with_capacity(path.len());
        let mut list = roots;
        for (depth, &pos) in path.iter().enumerate() {
            let Some(node) = list.get(pos) else {
                return Err(TreeError::PathOutOfRange {
                    path: path.to_vec(),
                    depth,
                    position: pos,
                    len: list.len(),
                });
            };
            frames.push(Frame { list, pos });
            list = &node.children;
        }
        Ok(Self { frames })
    }

    /// Number of levels on the cursor stack; the depth of the addressed
    /// node, counting roots as depth 1.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// True iff the cursor is one past the last node of the traversal.
    pub fn is_end(&self) -> bool {
        match self.frames.as_slice() {
            [frame] => frame.pos == frame.list.len(),
            _ => false,
        }
    }

    /// Returns the addressed node, or `None` at the end position (and
    /// for a degenerate depth-0 cursor).
    pub fn get(&self) -> Option<&'t Node<T>> {
        let top = self.frames.last()?;
        top.list.get(top.pos)
    }

    /// Returns the addressed node.
    ///
    /// # Panics
    ///
    /// Panics if the cursor addresses no node; see [`Cursor::get`] for
    /// the checked variant.
    pub fn node(&self) -> &'t Node<T> {
        let top = self.frames.last().expect("cursor has no position");
        &top.list[top.pos]
    }

    /// Index path of the addressed node, root-relative: the position
    /// within the sibling list at each level.
    pub fn index(&self) -> Vec<usize> {
        self.frames.iter().map(|f| f.pos).collect()
    }

    /// Node addressed at stack level `level`, where level 0 is the root
    /// list and `depth() - 1` is the node the cursor points at.
    ///
    /// # Panics
    ///
    /// Panics if `level >= self.depth()`.
    pub fn at_level(&self, level: usize) -> &'t Node<T> {
        let frame = &self.frames[level];
        &frame.list[frame.pos]
    }

    /// True iff the addressed node is the last of its sibling list.
    /// False at the end position.
    pub fn is_last_child(&self) -> bool {
        match self.frames.last() {
            Some(frame) => frame.pos + 1 == frame.list.len(),
            None => false,
        }
    }

    /// Moves to the next node in pre-order: descends into a non-empty
    /// child list before advancing within the current sibling list,
    /// then unwinds exhausted levels, advancing the ancestor position
    /// at each pop. The root frame is never popped; once it is
    /// exhausted the cursor is the end cursor.
    ///
    /// Calling this on the end cursor is a contract violation, caught
    /// by a debug assertion only.
    #[instrument(level = "trace", skip(self))]
    pub fn advance(&mut self) {
        debug_assert!(!self.is_end(), "advance past the end of the traversal");
        debug_assert!(self.depth() > 0, "advance on a depth-0 cursor");

        match self.get() {
            Some(node) if !node.children.is_empty() => {
                self.frames.push(Frame {
                    list: &node.children,
                    pos: 0,
                });
            }
            _ => {
                if let Some(top) = self.frames.last_mut() {
                    top.pos += 1;
                }
            }
        }

        // Tail-unwind.
        while self.frames.len() > 1 && self.frames.last().is_some_and(|f| f.pos == f.list.len()) {
            self.frames.pop();
            if let Some(parent) = self.frames.last_mut() {
                parent.pos += 1;
            }
        }
    }

    /// Moves to the previous node in pre-order: pops one level when
    /// already at the first sibling, otherwise steps back and descends
    /// to the last, deepest descendant of the newly-addressed node.
    ///
    /// Calling this on the begin cursor is a contract violation, caught
    /// by a debug assertion only.
    #[instrument(level = "trace", skip(self))]
    pub fn retreat(&mut self) {
        debug_assert!(self.depth() > 0, "retreat on a depth-0 cursor");

        let Some(top) = self.frames.last_mut() else {
            return;
        };
        if top.pos == 0 {
            debug_assert!(
                self.frames.len() > 1,
                "retreat past the begin of the traversal"
            );
            self.frames.pop();
            return;
        }
        top.pos -= 1;

        while let Some(node) = self.get() {
            if node.children.is_empty() {
                break;
            }
            self.frames.push(Frame {
                list: &node.children,
                pos: node.children.len() - 1,
            });
        }
    }

    fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.frames.iter().map(|f| f.pos)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            frames: self.frames.clone(),
        }
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.positions().eq(other.positions())
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialOrd for Cursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Cursor<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.positions().cmp(other.positions())
    }
}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor{:?}", self.index())
    }
}
