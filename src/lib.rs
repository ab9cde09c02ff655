//! This crate exposes a 2D tree: a Binary Search Tree (BST) over points in
//! the plane.
//!
//! ## 2D Tree
//!
//! A 2D tree stores integer [`Point`]s in `Node`s just like a regular BST
//! stores keys, except that there is no single ordering of points. Instead,
//! every `Node` carries an [`Axis`] and compares points only on that
//! coordinate. The root compares on `y`, its children on `x`, their children
//! on `y` again and so on. The invariants are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a
//!    coordinate less than or equal to its own on that `Node`'s axis.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a
//!    coordinate strictly greater than its own on that `Node`'s axis.
//! 3. A `Node`'s axis is always the opposite of its parent's.
//!
//! > Note that points tied on a `Node`'s axis (including exact duplicates)
//! > always land in its left subtree.
//!
//! Besides exact membership queries, these invariants make rectangular range
//! queries cheap: once a `Node` lies below the rectangle on its own axis, its
//! whole left subtree does too and can be skipped. The same holds for the
//! right subtree of a `Node` above the rectangle.
//!
//! The tree is never rebalanced, so its height depends only on insertion order.
//! Inserting sorted points produces a tree as tall as it has points.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod point;
pub mod tree;

pub use point::{Axis, ParsePointError, Point, Rect};
pub use tree::{Iter, TwoDTree};

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
