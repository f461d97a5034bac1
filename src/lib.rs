//! This crate provides the node algebra that balanced binary search trees are built from, a family
//! of traversals over it, and a plain Binary Search Tree (BST) on top.
//!
//! ## Nodes
//!
//! A [`node::Node`] stores a key, a value, a red/black [`node::Color`] and a cached height, along
//! with links to its parent and two children. Because a parent and its children point at each
//! other, nodes live in a [`node::Arena`] and link by [`node::NodeId`]. The arena offers the
//! primitives a balancing policy needs:
//!
//! 1. Classification (`is_left_child`, `sibling`, `uncle`, ...) and queries (`size`,
//!    `higher_child`, `balance_factor`).
//! 2. Height maintenance, where `update_height_above` stops at the first unchanged ancestor.
//! 3. Rotations and the "3+4" restructuring (`connect34`), which between them cover every AVL and
//!    red-black fix-up shape.
//! 4. In-order `successor` and `precursor`.
//!
//! > Heights follow the red/black convention: red nodes do not count. Nodes start black, so an
//! > uncolored tree gets ordinary heights, with an absent node at `-1` and a leaf at `0`.
//!
//! ## Traversals
//!
//! [`traverse`] visits a subtree in level, pre-, in- or post-order. The depth-first orders can be
//! recursive, use an explicit stack, or use Morris threading, which needs only `O(1)` extra space.
//! It temporarily rewrites right links and restores them before returning.
//!
//! ## Binary Search Tree
//!
//! [`bst::Bst`] keeps the order invariant (every key in a node's left subtree is smaller, every key
//! in its right subtree is larger) and rejects duplicate keys. It also caches the *hot* node: the
//! parent of wherever the last search ended. That is exactly where an insertion attaches and where
//! a removal's height fix-up starts.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod bst;
pub mod collections;
pub mod error;
pub mod node;
pub mod traverse;


pub use bst::{Bst, InsertResult};
pub use error::{Error, Result};
