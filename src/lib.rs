//! This crate exposes a self-balancing Binary Search Tree (an AVL tree) alongside a plain,
//! never-rebalancing one that serves as a baseline for comparison.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will store an
//! element and will sometimes have child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! Both trees here hold unique elements: inserting an element equal to one
//! already present is ignored.
//!
//! ## AVL trees
//!
//! Searching a BST takes `O(height)`. Without any care, inserting elements in
//! ascending order builds a chain whose height is `N - 1`. An AVL tree also
//! keeps, for every `Node`, the heights of its two subtrees within one of each
//! other. After each insert or remove the `Node`s on the path back to the root
//! are rotated as needed, which bounds the height by `O(lg N)`.
//!
//! ```
//! use avl::{balanced, unbalanced};
//!
//! let balanced: balanced::Tree<_> = (0..1000).collect();
//! let unbalanced: unbalanced::Tree<_> = (0..1000).collect();
//!
//! assert!(balanced.height() < 15);
//! assert_eq!(unbalanced.height(), 999);
//! assert!(balanced.traverse().eq(unbalanced.traverse()));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod balanced;
mod error;
pub mod unbalanced;
mod util;

pub use error::UnderflowError;
