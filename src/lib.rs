//! Digit palindromes and level-order binary trees.
//!
//! ```
//! use algokit::domain::{build_tree, inorder_traverse, is_palindrome};
//!
//! assert_eq!(is_palindrome(12321), Ok(true));
//!
//! let root = build_tree([1, 2, 3]);
//! assert_eq!(inorder_traverse(root.as_deref()), vec![2, 1, 3]);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
