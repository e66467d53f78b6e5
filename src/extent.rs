use crate::{ContinuousPoint, Point};

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A Cartesian product of 3 inclusive integer ranges: `[x_min..=x_max] * [y_min..=y_max] *
/// [z_min..=z_max]`.
///
/// An extent may be empty (any maximum less than the corresponding minimum). The empty extent
/// from `Extent::empty` is the identity for `expand_to_include`.
#[derive(Copy, Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Extent {
    /// Point in the extent that's lesser than all other points in the extent.
    minimum: Point,

    /// Point in the extent that's greater than all other points in the extent.
    maximum: Point,
}

impl Default for Extent {
    fn default() -> Self {
        Extent::empty()
    }
}

impl Add<Point> for Extent {
    type Output = Self;

    fn add(self, rhs: Point) -> Extent {
        let mut ret = self;
        ret.shift(&rhs);

        ret
    }
}

impl Sub<Point> for Extent {
    type Output = Self;

    fn sub(self, rhs: Point) -> Extent {
        self + (-rhs)
    }
}

impl Extent {
    /// The extent with minima at +infinity and maxima at -infinity, containing no points.
    pub fn empty() -> Self {
        Self {
            minimum: Point::new(std::i32::MAX, std::i32::MAX, std::i32::MAX),
            maximum: Point::new(std::i32::MIN, std::i32::MIN, std::i32::MIN),
        }
    }

    /// The extent containing exactly `p`.
    pub fn from_point(p: Point) -> Self {
        Self {
            minimum: p,
            maximum: p,
        }
    }

    /// The extent with `minimum` as the least element and `world_max` as the greatest element.
    pub fn from_min_and_world_max(minimum: Point, world_max: Point) -> Self {
        Self {
            minimum,
            maximum: world_max,
        }
    }

    /// The extent with `minimum` as the least element and `local_sup` as the size.
    pub fn from_min_and_local_supremum(minimum: Point, local_sup: Point) -> Self {
        Self {
            minimum,
            maximum: minimum + local_sup - [1, 1, 1].into(),
        }
    }

    /// Grows `self` (if necessary) so that it contains `p`.
    pub fn expand_to_include(&mut self, p: &Point) {
        self.minimum = self.minimum.meet(p);
        self.maximum = self.maximum.join(p);
    }

    /// Translates the extent by `offset`. Empty extents stay empty.
    pub fn shift(&mut self, offset: &Point) {
        if self.is_empty() {
            return;
        }
        self.minimum = self.minimum + *offset;
        self.maximum = self.maximum + *offset;
    }

    /// Get the least element.
    pub fn get_minimum(&self) -> Point {
        self.minimum
    }

    /// Get the greatest element.
    pub fn get_world_max(&self) -> Point {
        self.maximum
    }

    /// Get the number of points along each axis (i.e. the size). Zero for empty extents.
    pub fn get_local_supremum(&self) -> Point {
        if self.is_empty() {
            return Point::zero();
        }

        self.maximum - self.minimum + [1, 1, 1].into()
    }

    /// Get the geometric center, which may lie between lattice points.
    pub fn get_center(&self) -> ContinuousPoint {
        let min = self.minimum.to_continuous();
        let max = self.maximum.to_continuous();

        (min + max) * 0.5
    }

    /// Number of lattice points in the extent.
    pub fn volume(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let size = self.get_local_supremum();

        size.x as usize * size.y as usize * size.z as usize
    }

    /// Returns `true` iff `self` contains no points.
    pub fn is_empty(&self) -> bool {
        self.maximum.x < self.minimum.x
            || self.maximum.y < self.minimum.y
            || self.maximum.z < self.minimum.z
    }

    /// Translates `p` from world coordinates to local coordinates.
    pub fn local_point_from_world_point(&self, p: &Point) -> Point {
        *p - self.minimum
    }

    /// Returns true iff `world_point` is an element of `self`.
    pub fn contains_world(&self, world_point: &Point) -> bool {
        self.minimum <= *world_point && *world_point <= self.maximum
    }

    /// Returns true iff `p` lies on the min or max X or Y face of `self`.
    pub fn is_on_xy_boundary(&self, p: &Point) -> bool {
        p.x == self.minimum.x
            || p.x == self.maximum.x
            || p.y == self.minimum.y
            || p.y == self.maximum.y
    }
}

/// Returns the smallest extent containing all of the given points.
pub fn bounding_extent<I>(points: I) -> Extent
where
    I: Iterator<Item = Point>,
{
    let mut extent = Extent::empty();
    for p in points {
        extent.expand_to_include(&p);
    }

    extent
}

/// Visits every point of an extent in raster order: X outermost, then Y, Z innermost, all
/// ascending.
#[derive(Debug)]
pub struct ExtentIterator {
    extent: Extent,
    cursor: Point,
    completed: bool,
}

impl ExtentIterator {
    pub fn new(extent: Extent) -> Self {
        ExtentIterator {
            extent,
            cursor: extent.minimum,
            completed: extent.is_empty(),
        }
    }
}

/// Returns a `Point` for each world coordinate in the extent.
impl Iterator for ExtentIterator {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.completed {
            return None;
        }

        let old_cursor = self.cursor;

        if self.cursor.z < self.extent.maximum.z {
            self.cursor.z += 1;
        } else {
            self.cursor.z = self.extent.minimum.z;
            if self.cursor.y < self.extent.maximum.y {
                self.cursor.y += 1;
            } else {
                self.cursor.y = self.extent.minimum.y;
                if self.cursor.x < self.extent.maximum.x {
                    self.cursor.x += 1;
                } else {
                    self.completed = true;
                }
            }
        }

        Some(old_cursor)
    }
}

impl IntoIterator for &Extent {
    type Item = Point;
    type IntoIter = ExtentIterator;

    fn into_iter(self) -> Self::IntoIter {
        ExtentIterator::new(*self)
    }
}

impl IntoIterator for Extent {
    type Item = Point;
    type IntoIter = ExtentIterator;

    fn into_iter(self) -> Self::IntoIter {
        ExtentIterator::new(self)
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
