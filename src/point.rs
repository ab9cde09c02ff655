//! Planar integer points and the axis-aligned rectangles used to query them.
//!
//! # Examples
//!
//! ```
//! use twodtree::point::{Axis, Point, Rect};
//! use std::cmp::Ordering;
//!
//! let a = Point::new(2, 3);
//! let b: Point = "(4, 2)".parse().unwrap();
//!
//! assert_eq!(Axis::X.compare(&a, &b), Ordering::Less);
//! assert_eq!(Axis::Y.compare(&a, &b), Ordering::Greater);
//!
//! // Corners may be given in any order.
//! let rect = Rect::from_corners(b, a);
//! assert_eq!(rect.bottom_left(), Point::new(2, 2));
//! assert!(rect.contains(&Point::new(3, 3)));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

/// An immutable pair of integer coordinates.
///
/// Points have no `Ord` implementation. They are only ever ordered along one
/// [`Axis`] at a time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Creates the point `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Reasons a string could not be read as a [`Point`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePointError {
    /// Fewer than two coordinates were given.
    #[error("expected two coordinates")]
    MissingCoordinate,
    /// Something followed the second coordinate.
    #[error("unexpected input after the second coordinate")]
    TrailingInput,
    /// A coordinate was not an `i32`.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(#[from] ParseIntError),
}

/// Accepts `"x,y"`, `"x y"` and `"(x, y)"`, ignoring surrounding whitespace.
impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix('(')
            .and_then(|inner| inner.strip_suffix(')'))
            .unwrap_or(s);

        let mut coords = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|c| !c.is_empty());
        let x = coords
            .next()
            .ok_or(ParsePointError::MissingCoordinate)?
            .parse()?;
        let y = coords
            .next()
            .ok_or(ParsePointError::MissingCoordinate)?
            .parse()?;

        match coords.next() {
            Some(_) => Err(ParsePointError::TrailingInput),
            None => Ok(Self::new(x, y)),
        }
    }
}

/// The coordinate a tree level discriminates on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Compare on `x`.
    X,
    /// Compare on `y`.
    Y,
}

impl Axis {
    /// The axis used by the level below this one.
    pub fn flip(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// Picks this axis' coordinate out of `point`.
    pub fn coordinate(self, point: &Point) -> i32 {
        match self {
            Self::X => point.x,
            Self::Y => point.y,
        }
    }

    /// Orders `a` relative to `b` looking only at this axis' coordinate.
    pub fn compare(self, a: &Point, b: &Point) -> Ordering {
        self.coordinate(a).cmp(&self.coordinate(b))
    }
}

/// A closed, axis-aligned rectangle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    bottom_left: Point,
    top_right: Point,
}

impl Rect {
    /// Builds the rectangle spanned by two opposite corners given in any order.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        Self {
            bottom_left: Point::new(p1.x.min(p2.x), p1.y.min(p2.y)),
            top_right: Point::new(p1.x.max(p2.x), p1.y.max(p2.y)),
        }
    }

    /// The corner with the smallest coordinates.
    pub fn bottom_left(&self) -> Point {
        self.bottom_left
    }

    /// The corner with the largest coordinates.
    pub fn top_right(&self) -> Point {
        self.top_right
    }

    /// Whether `point` lies inside the rectangle or on its border.
    pub fn contains(&self, point: &Point) -> bool {
        (self.bottom_left.x..=self.top_right.x).contains(&point.x)
            && (self.bottom_left.y..=self.top_right.y).contains(&point.y)
    }
}
