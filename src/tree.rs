//! A 2D tree: a binary search tree over planar points whose levels
//! alternately discriminate on the `y` and `x` coordinates.
//!
//! The tree never rebalances, so its shape is entirely decided by insertion
//! order. Duplicate points are kept as separate nodes.
//!
//! # Examples
//!
//! ```
//! use twodtree::{Point, TwoDTree};
//!
//! let tree: TwoDTree = [(2, 3), (4, 2), (4, 5), (5, 4), (9, 6), (7, 8)]
//!     .iter()
//!     .map(|&p| Point::from(p))
//!     .collect();
//!
//! assert!(tree.search(&Point::new(5, 4)));
//! assert!(!tree.search(&Point::new(5, 5)));
//!
//! let mut found = tree.range_search(Point::new(3, 1), Point::new(8, 5));
//! found.sort_by_key(|p| (p.x, p.y));
//! assert_eq!(found, vec![Point::new(4, 2), Point::new(4, 5), Point::new(5, 4)]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use tracing::{debug, trace};

use crate::point::{Axis, Point, Rect};

/// A two-dimensional binary search tree of [`Point`]s supporting insertion,
/// exact membership queries and closed rectangular range queries.
pub struct TwoDTree {
    root: Option<Box<Node>>,
    root_axis: Axis,
    len: usize,
}

impl Default for TwoDTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TwoDTree {
    // Sorted input produces a list-shaped tree, so release it without recursing.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Re-inserting in pre-order visits every node after all of its ancestors, so
/// each point takes the same path and the copy has the same shape.
impl Clone for TwoDTree {
    fn clone(&self) -> Self {
        let mut tree = Self::with_root_axis(self.root_axis);
        tree.extend(self.iter().copied());
        tree
    }
}

impl fmt::Debug for TwoDTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwoDTree")
            .field("root_axis", &self.root_axis)
            .field("len", &self.len)
            .field("points", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl TwoDTree {
    /// Generates a new, empty `TwoDTree` whose root compares on `y`.
    pub fn new() -> Self {
        Self::with_root_axis(Axis::Y)
    }

    /// Generates a new, empty `TwoDTree` whose root compares on `root_axis`.
    /// Levels below still alternate.
    ///
    /// # Examples
    ///
    /// ```
    /// use twodtree::{Axis, Point, TwoDTree};
    ///
    /// let mut tree = TwoDTree::with_root_axis(Axis::X);
    /// tree.insert(Point::new(1, 1));
    ///
    /// assert_eq!(tree.root_axis(), Axis::X);
    /// assert!(tree.search(&Point::new(1, 1)));
    /// ```
    pub fn with_root_axis(root_axis: Axis) -> Self {
        Self {
            root: None,
            root_axis,
            len: 0,
        }
    }

    /// The axis the root level discriminates on.
    pub fn root_axis(&self) -> Axis {
        self.root_axis
    }

    /// Number of stored points, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no point has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels on the longest root-to-leaf path. An empty tree has a
    /// height of 0.
    pub fn height(&self) -> usize {
        let mut stack: Vec<(&Node, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        let mut height = 0;
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            for child in node.children() {
                stack.push((child, depth + 1));
            }
        }
        height
    }

    /// Adds `point` to the tree. Points equal to a node on that node's axis go
    /// into its left subtree, and exact duplicates are stored again.
    ///
    /// # Examples
    ///
    /// ```
    /// use twodtree::{Point, TwoDTree};
    ///
    /// let mut tree = TwoDTree::new();
    /// tree.insert(Point::new(1, 2));
    /// tree.insert(Point::new(1, 2));
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert!(tree.search(&Point::new(1, 2)));
    /// ```
    pub fn insert(&mut self, point: Point) {
        let mut axis = self.root_axis;
        let mut depth = 0;
        let mut link = &mut self.root;
        while let Some(node) = link {
            axis = node.axis.flip();
            depth += 1;
            link = match node.axis.compare(&point, &node.point) {
                Ordering::Less | Ordering::Equal => &mut node.left,
                Ordering::Greater => &mut node.right,
            };
        }
        trace!(x = point.x, y = point.y, depth, axis = ?axis, "inserting point");
        *link = Some(Node::new_boxed(point, axis));
        self.len += 1;
    }

    /// Whether a point with exactly these coordinates has been inserted.
    /// Always `false` on an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use twodtree::{Point, TwoDTree};
    ///
    /// let mut tree = TwoDTree::new();
    /// assert!(!tree.search(&Point::new(0, 0)));
    ///
    /// tree.insert(Point::new(0, 0));
    /// assert!(tree.search(&Point::new(0, 0)));
    /// assert!(!tree.search(&Point::new(0, 1)));
    /// ```
    pub fn search(&self, point: &Point) -> bool {
        self.root.as_deref().map_or(false, |root| root.search(point))
    }

    /// Every stored point inside the closed rectangle spanned by the corners
    /// `p1` and `p2`, which may be given in any order. The order of the result
    /// follows the traversal and is otherwise unspecified.
    ///
    /// # Examples
    ///
    /// ```
    /// use twodtree::{Point, TwoDTree};
    ///
    /// let tree: TwoDTree = vec![Point::new(1, 1), Point::new(5, 5)].into();
    ///
    /// assert_eq!(tree.range_search(Point::new(2, 0), Point::new(0, 2)), vec![Point::new(1, 1)]);
    /// assert!(TwoDTree::new().range_search(Point::new(0, 0), Point::new(9, 9)).is_empty());
    /// ```
    pub fn range_search(&self, p1: Point, p2: Point) -> Vec<Point> {
        self.points_in(&Rect::from_corners(p1, p2))
    }

    /// Every stored point inside `rect`. See [`TwoDTree::range_search`].
    pub fn points_in(&self, rect: &Rect) -> Vec<Point> {
        let mut found = Vec::new();
        if let Some(root) = self.root.as_deref() {
            root.range_search(rect, &mut found);
        }
        debug!(
            bottom_left = %rect.bottom_left(),
            top_right = %rect.top_right(),
            found = found.len(),
            "range search"
        );
        found
    }

    /// Iterates over the stored points in pre-order (a node before its left
    /// subtree, then its right subtree).
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: self.root.as_deref().into_iter().collect(),
            remaining: self.len,
        }
    }
}

impl From<Vec<Point>> for TwoDTree {
    fn from(points: Vec<Point>) -> Self {
        points.into_iter().collect()
    }
}

impl FromIterator<Point> for TwoDTree {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<Point> for TwoDTree {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for point in iter {
            self.insert(point);
        }
    }
}

impl<'a> IntoIterator for &'a TwoDTree {
    type Item = &'a Point;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator over the points of a [`TwoDTree`].
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Point;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on the stack first so the left subtree comes out first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        self.remaining -= 1;
        Some(&node.point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// One stored point. Children are only ever attached, never replaced.
struct Node {
    point: Point,
    axis: Axis,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new_boxed(point: Point, axis: Axis) -> Box<Self> {
        Box::new(Self {
            point,
            axis,
            left: None,
            right: None,
        })
    }

    fn children(&self) -> impl Iterator<Item = &Node> {
        self.left.as_deref().into_iter().chain(self.right.as_deref())
    }

    fn search(&self, point: &Point) -> bool {
        let mut current = Some(self);
        while let Some(node) = current {
            if node.point == *point {
                return true;
            }
            // Insert sends ties on this axis left and the right subtree only
            // holds strictly greater coordinates. Routing a tie right would
            // lose points that `insert` put on the left.
            current = match node.axis.compare(point, &node.point) {
                Ordering::Less | Ordering::Equal => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    fn range_search(&self, rect: &Rect, found: &mut Vec<Point>) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if rect.contains(&node.point) {
                found.push(node.point);
            }
            // The left subtree is bounded above by this node on `node.axis`,
            // the right subtree strictly bounded below. Right is pushed first
            // so the left subtree is visited first.
            if let Some(right) = node.right.as_deref() {
                if node.axis.compare(&node.point, &rect.top_right()) != Ordering::Greater {
                    stack.push(right);
                }
            }
            if let Some(left) = node.left.as_deref() {
                if node.axis.compare(&node.point, &rect.bottom_left()) != Ordering::Less {
                    stack.push(left);
                }
            }
        }
    }
}
