//! This crate exposes an unbalanced Binary Search Tree (BST) along with the small amount of
//! plumbing needed to feed it integers from a file and read them back, sorted, through a queue.
//! It is mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert and enumerate stored
//! values in order. BSTs are typically defined recursively using the notion of a `Node`. A `Node`
//! stores the value that was inserted and will sometimes have child `Node`s. The most important
//! invariants of this BST are:
//!
//! 1. For every `Node` in the BST, all the `Node`s in its left subtree have a value less than its
//!    own value.
//! 2. For every `Node` in the BST, all the `Node`s in its right subtree have a value greater than
//!    or equal to its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! BSTs naturally support sorted iteration by visiting the left subtree, then the subtree root,
//! then the right subtree (an "inorder" traversal). The cost of most operations is `O(height)`
//! where `height` is the number of `Node`s on the longest path from the root to a leaf. Without
//! any balancing that height depends entirely on insertion order: inserting sorted values gives a
//! "degenerate" tree that is no better than a linked list.
//!
//! ## Modules
//!
//! - [`unbalanced`]: the tree itself.
//! - [`source`]: reads whitespace separated values to insert.
//! - [`report`]: statistics and value listings for display.
//! - [`menu`]: the interactive session driving all of the above.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod menu;
pub mod report;
pub mod source;
pub mod unbalanced;

pub use unbalanced::BinarySearchTree;
