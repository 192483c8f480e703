//! Explicit-stack traversals.
//!
//! The recursive functions in [`crate::domain::tree`] are the default. These
//! iterators borrow the tree and keep their own stack (or queue), so a
//! degenerate tree cannot exhaust the call stack.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::error::DomainError;
use crate::domain::tree::{inorder_traverse, postorder_traverse, preorder_traverse, TreeNode};

/// Depth-first: node, left, right.
pub struct PreOrderIter<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
}

impl<'a, T> PreOrderIter<'a, T> {
    pub fn new(root: Option<&'a TreeNode<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // right first so left is popped first
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(&node.value)
    }
}

/// Depth-first: left, node, right.
pub struct InOrderIter<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
    current: Option<&'a TreeNode<T>>,
}

impl<'a, T> InOrderIter<'a, T> {
    pub fn new(root: Option<&'a TreeNode<T>>) -> Self {
        Self {
            stack: Vec::new(),
            current: root,
        }
    }
}

impl<'a, T> Iterator for InOrderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left.as_deref();
        }
        let node = self.stack.pop()?;
        self.current = node.right.as_deref();
        Some(&node.value)
    }
}

/// Depth-first: left, right, node.
pub struct PostOrderIter<'a, T> {
    stack: Vec<(&'a TreeNode<T>, bool)>,
}

impl<'a, T> PostOrderIter<'a, T> {
    pub fn new(root: Option<&'a TreeNode<T>>) -> Self {
        Self {
            stack: root.into_iter().map(|n| (n, false)).collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, visited)) = self.stack.pop() {
            if visited {
                return Some(&node.value);
            }
            self.stack.push((node, true));
            if let Some(right) = node.right.as_deref() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left.as_deref() {
                self.stack.push((left, false));
            }
        }
        None
    }
}

/// Breadth-first, one level at a time.
pub struct LevelOrderIter<'a, T> {
    queue: VecDeque<&'a TreeNode<T>>,
}

impl<'a, T> LevelOrderIter<'a, T> {
    pub fn new(root: Option<&'a TreeNode<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children());
        Some(&node.value)
    }
}

impl<T> TreeNode<T> {
    pub fn iter_preorder(&self) -> PreOrderIter<'_, T> {
        PreOrderIter::new(Some(self))
    }

    pub fn iter_inorder(&self) -> InOrderIter<'_, T> {
        InOrderIter::new(Some(self))
    }

    pub fn iter_postorder(&self) -> PostOrderIter<'_, T> {
        PostOrderIter::new(Some(self))
    }

    pub fn iter_level_order(&self) -> LevelOrderIter<'_, T> {
        LevelOrderIter::new(Some(self))
    }
}

/// Visit order of a traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Traversal {
    #[default]
    Pre,
    In,
    Post,
    Level,
}

impl Traversal {
    pub const ALL: [Traversal; 4] = [Traversal::Pre, Traversal::In, Traversal::Post, Traversal::Level];

    /// Collects values using the recursive traversals.
    ///
    /// Level order has no recursive form and always uses the queue.
    #[instrument(level = "debug", skip(root))]
    pub fn collect<T: Clone>(self, root: Option<&TreeNode<T>>) -> Vec<T> {
        match self {
            Traversal::Pre => preorder_traverse(root),
            Traversal::In => inorder_traverse(root),
            Traversal::Post => postorder_traverse(root),
            Traversal::Level => LevelOrderIter::new(root).cloned().collect(),
        }
    }

    /// Borrowing iterator over `root` in this order.
    pub fn walk<'a, T>(self, root: Option<&'a TreeNode<T>>) -> Box<dyn Iterator<Item = &'a T> + 'a> {
        match self {
            Traversal::Pre => Box::new(PreOrderIter::new(root)),
            Traversal::In => Box::new(InOrderIter::new(root)),
            Traversal::Post => Box::new(PostOrderIter::new(root)),
            Traversal::Level => Box::new(LevelOrderIter::new(root)),
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Traversal::Pre => "pre",
            Traversal::In => "in",
            Traversal::Post => "post",
            Traversal::Level => "level",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Traversal {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pre" | "preorder" => Ok(Traversal::Pre),
            "in" | "inorder" => Ok(Traversal::In),
            "post" | "postorder" => Ok(Traversal::Post),
            "level" | "levelorder" | "bfs" => Ok(Traversal::Level),
            _ => Err(DomainError::UnknownTraversal(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tree::build_tree;

    #[test]
    fn test_iterators_match_recursive_forms() {
        for n in 0..=40 {
            let root = build_tree(0..n);
            let root = root.as_deref();
            let pre: Vec<i32> = PreOrderIter::new(root).copied().collect();
            let ino: Vec<i32> = InOrderIter::new(root).copied().collect();
            let post: Vec<i32> = PostOrderIter::new(root).copied().collect();
            assert_eq!(pre, preorder_traverse(root), "pre n = {}", n);
            assert_eq!(ino, inorder_traverse(root), "in n = {}", n);
            assert_eq!(post, postorder_traverse(root), "post n = {}", n);
        }
    }

    #[test]
    fn test_level_order_returns_input_sequence() {
        let input: Vec<u32> = (10..30).collect();
        let root = build_tree(input.clone()).unwrap();
        let levels: Vec<u32> = root.iter_level_order().copied().collect();
        assert_eq!(levels, input);
    }

    #[test]
    fn test_iterators_handle_degenerate_tree() {
        // left spine deep enough that a recursive walk would be risky
        let mut root = TreeNode::new(0u32);
        for v in 1..100_000u32 {
            root = TreeNode::with_children(v, Some(Box::new(root)), None);
        }
        assert_eq!(root.iter_preorder().count(), 100_000);
        assert_eq!(root.iter_inorder().next(), Some(&0));
        assert_eq!(root.iter_postorder().last(), Some(&99_999));

        // Box drop is recursive as well, unlink iteratively
        let mut link = root.left.take();
        while let Some(mut node) = link {
            link = node.left.take();
        }
    }

    #[test]
    fn test_collect_dispatches_by_order() {
        let root = build_tree(1..=7);
        let root = root.as_deref();
        assert_eq!(Traversal::Pre.collect(root), vec![1, 2, 4, 5, 3, 6, 7]);
        assert_eq!(Traversal::In.collect(root), vec![4, 2, 5, 1, 6, 3, 7]);
        assert_eq!(Traversal::Post.collect(root), vec![4, 5, 2, 6, 7, 3, 1]);
        assert_eq!(Traversal::Level.collect(root), vec![1, 2, 3, 4, 5, 6, 7]);
        for order in Traversal::ALL {
            let walked: Vec<i32> = order.walk(root).copied().collect();
            assert_eq!(walked, order.collect(root));
        }
    }

    #[test]
    fn test_traversal_parse_and_display() {
        for order in Traversal::ALL {
            assert_eq!(order.to_string().parse::<Traversal>(), Ok(order));
        }
        assert_eq!("InOrder".parse::<Traversal>(), Ok(Traversal::In));
        assert_eq!(
            "sideways".parse::<Traversal>(),
            Err(DomainError::UnknownTraversal("sideways".to_string()))
        );
    }
}
