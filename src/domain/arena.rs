//! Arena-backed binary trees.
//!
//! Nodes live in a `generational_arena::Arena` and link to each other by
//! index, with a parent link on every node. All walks use explicit stacks.

use generational_arena::{Arena, Index};
use tracing::instrument;

/// Which child slot of the parent a node occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Tree node in the arena-based representation.
#[derive(Debug)]
pub struct ArenaNode<T> {
    pub value: T,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    pub left: Option<Index>,
    pub right: Option<Index>,
}

impl<T> ArenaNode<T> {
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn children(&self) -> impl DoubleEndedIterator<Item = Index> {
        self.left.into_iter().chain(self.right)
    }
}

/// Arena-backed binary tree.
///
/// Nodes refer to each other by generational index instead of owning
/// pointers. Handy when parent links are needed or when the tree is too
/// large for boxed recursion.
#[derive(Debug)]
pub struct TreeArena<T> {
    arena: Arena<ArenaNode<T>>,
    root: Option<Index>,
}

impl<T> Default for TreeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TreeArena<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Builds the arena from values in level-order array layout.
    ///
    /// Same shape as [`crate::domain::tree::build_tree`]: the element at
    /// index `i` is the parent of `2i + 1` and `2i + 2`.
    #[instrument(level = "debug", skip(values))]
    pub fn from_level_order(values: impl IntoIterator<Item = T>) -> Self {
        let mut tree = Self::new();
        let mut slots: Vec<Index> = Vec::new();
        for (i, value) in values.into_iter().enumerate() {
            let parent = if i == 0 {
                None
            } else {
                let side = if i % 2 == 1 { Side::Left } else { Side::Right };
                Some((slots[(i - 1) / 2], side))
            };
            slots.push(tree.insert_node(value, parent));
        }
        tree
    }

    /// Inserts a node under `parent`, or as the new root when `parent` is None.
    ///
    /// An existing child in the same slot is detached but stays in the arena.
    #[instrument(level = "trace", skip(self, value))]
    pub fn insert_node(&mut self, value: T, parent: Option<(Index, Side)>) -> Index {
        let node = ArenaNode {
            value,
            parent: parent.map(|(idx, _)| idx),
            left: None,
            right: None,
        };
        let node_idx = self.arena.insert(node);

        if let Some((parent_idx, side)) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                match side {
                    Side::Left => parent.left = Some(node_idx),
                    Side::Right => parent.right = Some(node_idx),
                }
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&ArenaNode<T>> {
        self.arena.get(idx)
    }

    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut ArenaNode<T>> {
        self.arena.get_mut(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    /// Number of nodes reachable from the root.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Number of nodes held by the arena, including detached ones.
    pub fn stored_len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels below and including the root, computed with an
    /// explicit `(node, level)` stack.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(Index, usize)> = self.root.into_iter().map(|idx| (idx, 1)).collect();

        while let Some((node_idx, level)) = stack.pop() {
            if let Some(node) = self.get_node(node_idx) {
                max_depth = max_depth.max(level);
                stack.extend(node.children().map(|child| (child, level + 1)));
            }
        }

        max_depth
    }

    /// Values of the leaf nodes reachable from the root, left to right.
    pub fn leaf_values(&self) -> Vec<&T> {
        self.iter()
            .filter(|(_, node)| node.is_leaf())
            .map(|(_, node)| &node.value)
            .collect()
    }

    /// Pre-order walk from the root.
    pub fn iter(&self) -> TreeIterator<'_, T> {
        TreeIterator::new(self)
    }

    pub fn iter_postorder(&self) -> PostOrderIterator<'_, T> {
        PostOrderIterator::new(self)
    }

    /// In-order values, computed with an explicit stack.
    pub fn inorder(&self) -> Vec<&T> {
        let mut rlt = Vec::new();
        let mut stack: Vec<&ArenaNode<T>> = Vec::new();
        let mut current = self.root.and_then(|idx| self.get_node(idx));
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.and_then(|idx| self.get_node(idx));
            }
            let Some(node) = stack.pop() else {
                break;
            };
            rlt.push(&node.value);
            current = node.right.and_then(|idx| self.get_node(idx));
        }
        rlt
    }
}

pub struct TreeIterator<'a, T> {
    arena: &'a TreeArena<T>,
    stack: Vec<Index>,
}

impl<'a, T> TreeIterator<'a, T> {
    fn new(arena: &'a TreeArena<T>) -> Self {
        Self {
            arena,
            stack: arena.root().into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for TreeIterator<'a, T> {
    type Item = (Index, &'a ArenaNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                self.stack.extend(node.children().rev());
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a, T> {
    arena: &'a TreeArena<T>,
    stack: Vec<(Index, bool)>,
}

impl<'a, T> PostOrderIterator<'a, T> {
    fn new(arena: &'a TreeArena<T>) -> Self {
        Self {
            arena,
            stack: arena.root().into_iter().map(|idx| (idx, false)).collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrderIterator<'a, T> {
    type Item = (Index, &'a ArenaNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for child in node.children().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}
