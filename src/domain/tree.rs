//! Boxed binary trees built from a level-order array layout, with the
//! recursive in-order, pre-order and post-order traversals.

use std::fmt;

use termtree::Tree;
use tracing::{debug, instrument};

/// Owning link to a subtree, `None` for an absent child.
pub type Link<T> = Option<Box<TreeNode<T>>>;

/// Binary tree node. Each node exclusively owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    pub value: T,
    pub left: Link<T>,
    pub right: Link<T>,
}

impl<T> TreeNode<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn with_children(value: T, left: Link<T>, right: Link<T>) -> Self {
        Self { value, left, right }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of nodes in this subtree.
    pub fn len(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |n| n.len()) + self.right.as_ref().map_or(0, |n| n.len())
    }

    /// Number of levels, a single node has depth 1.
    pub fn depth(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |n| n.depth());
        let right = self.right.as_ref().map_or(0, |n| n.depth());
        1 + left.max(right)
    }

    /// Values of all leaf nodes, left to right.
    pub fn leaf_values(&self) -> Vec<&T> {
        let mut leaves = Vec::new();
        collect_leaves(self, &mut leaves);
        leaves
    }

    pub fn children(&self) -> impl Iterator<Item = &TreeNode<T>> {
        self.left.as_deref().into_iter().chain(self.right.as_deref())
    }
}

fn collect_leaves<'a, T>(node: &'a TreeNode<T>, leaves: &mut Vec<&'a T>) {
    if node.is_leaf() {
        leaves.push(&node.value);
    } else {
        for child in node.children() {
            collect_leaves(child, leaves);
        }
    }
}

impl<T: fmt::Display> TreeNode<T> {
    /// Converts the subtree into a `termtree` for terminal display.
    pub fn to_display_tree(&self) -> Tree<String> {
        let leaves: Vec<_> = self.children().map(|c| c.to_display_tree()).collect();
        Tree::new(self.value.to_string()).with_leaves(leaves)
    }
}

/// Builds a linked tree from values in level-order array layout.
///
/// The element at index `i` has its children at `2i + 1` and `2i + 2`.
/// An empty input yields `None`. Values are moved into the nodes.
#[instrument(level = "debug", skip(values))]
pub fn build_tree<T>(values: impl IntoIterator<Item = T>) -> Link<T> {
    let mut slots: Vec<Option<T>> = values.into_iter().map(Some).collect();
    debug!("building tree from {} values", slots.len());
    insert_level_order(&mut slots, 0)
}

fn insert_level_order<T>(slots: &mut [Option<T>], i: usize) -> Link<T> {
    let value = slots.get_mut(i)?.take()?;
    let left = insert_level_order(slots, 2 * i + 1);
    let right = insert_level_order(slots, 2 * i + 2);
    Some(Box::new(TreeNode::with_children(value, left, right)))
}

/// Left subtree, node, right subtree.
#[instrument(level = "trace", skip(root))]
pub fn inorder_traverse<T: Clone>(root: Option<&TreeNode<T>>) -> Vec<T> {
    let mut rlt = Vec::new();
    in_order(root, &mut rlt);
    rlt
}

fn in_order<T: Clone>(node: Option<&TreeNode<T>>, rlt: &mut Vec<T>) {
    if let Some(node) = node {
        in_order(node.left.as_deref(), rlt);
        rlt.push(node.value.clone());
        in_order(node.right.as_deref(), rlt);
    }
}

/// Node, left subtree, right subtree.
#[instrument(level = "trace", skip(root))]
pub fn preorder_traverse<T: Clone>(root: Option<&TreeNode<T>>) -> Vec<T> {
    let mut rlt = Vec::new();
    pre_order(root, &mut rlt);
    rlt
}

fn pre_order<T: Clone>(node: Option<&TreeNode<T>>, rlt: &mut Vec<T>) {
    if let Some(node) = node {
        rlt.push(node.value.clone());
        pre_order(node.left.as_deref(), rlt);
        pre_order(node.right.as_deref(), rlt);
    }
}

/// Left subtree, right subtree, node.
#[instrument(level = "trace", skip(root))]
pub fn postorder_traverse<T: Clone>(root: Option<&TreeNode<T>>) -> Vec<T> {
    let mut rlt = Vec::new();
    post_order(root, &mut rlt);
    rlt
}

fn post_order<T: Clone>(node: Option<&TreeNode<T>>, rlt: &mut Vec<T>) {
    if let Some(node) = node {
        post_order(node.left.as_deref(), rlt);
        post_order(node.right.as_deref(), rlt);
        rlt.push(node.value.clone());
    }
}
