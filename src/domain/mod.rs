//! Domain layer: the algorithms themselves
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod error;
pub mod palindrome;
pub mod traversal;
pub mod tree;

pub use arena::{ArenaNode, Side, TreeArena};
pub use error::{DomainError, DomainResult};
pub use palindrome::{digits, is_palindrome, is_palindrome_unsigned, verdict};
pub use traversal::{InOrderIter, LevelOrderIter, PostOrderIter, PreOrderIter, Traversal};
pub use tree::{build_tree, inorder_traverse, postorder_traverse, preorder_traverse, Link, TreeNode};
