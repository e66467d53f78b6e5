use serde::{Deserialize, Serialize};
use std::cmp::{max, min, Ordering};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// An integer lattice coordinate.
#[derive(Copy, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<Point> for [i32; 3] {
    fn from(p: Point) -> [i32; 3] {
        [p.x, p.y, p.z]
    }
}

impl From<[i32; 3]> for Point {
    fn from(other: [i32; 3]) -> Self {
        Point::new(other[0], other[1], other[2])
    }
}

impl Point {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        [0, 0, 0].into()
    }

    pub fn xyz(&self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    pub fn join(&self, other: &Self) -> Self {
        [
            max(self.x, other.x),
            max(self.y, other.y),
            max(self.z, other.z),
        ]
        .into()
    }

    /// Componentwise minimum.
    pub fn meet(&self, other: &Self) -> Self {
        [
            min(self.x, other.x),
            min(self.y, other.y),
            min(self.z, other.z),
        ]
        .into()
    }

    pub fn to_continuous(&self) -> ContinuousPoint {
        ContinuousPoint::new(self.x as f64, self.y as f64, self.z as f64)
    }
}

/// This particular partial order allows us to say that an extent E contains a point iff
/// p is GEQ the minimum of E and p is LEQ the maximum of E.
impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self < other {
            Some(Ordering::Less)
        } else if self > other {
            Some(Ordering::Greater)
        } else if self.x == other.x && self.y == other.y && self.z == other.z {
            Some(Ordering::Equal)
        } else {
            None
        }
    }

    fn lt(&self, other: &Self) -> bool {
        self.x < other.x && self.y < other.y && self.z < other.z
    }

    fn gt(&self, other: &Self) -> bool {
        self.x > other.x && self.y > other.y && self.z > other.z
    }

    fn le(&self, other: &Self) -> bool {
        self.x <= other.x && self.y <= other.y && self.z <= other.z
    }

    fn ge(&self, other: &Self) -> bool {
        self.x >= other.x && self.y >= other.y && self.z >= other.z
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        [self.x + other.x, self.y + other.y, self.z + other.z].into()
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        [-self.x, -self.y, -self.z].into()
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + (-other)
    }
}

/// A real-valued 3D point, used for centers of mass and render geometry.
#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ContinuousPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl fmt::Display for ContinuousPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<[f64; 3]> for ContinuousPoint {
    fn from(other: [f64; 3]) -> Self {
        ContinuousPoint::new(other[0], other[1], other[2])
    }
}

impl From<ContinuousPoint> for [f64; 3] {
    fn from(p: ContinuousPoint) -> [f64; 3] {
        [p.x, p.y, p.z]
    }
}

impl ContinuousPoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn distance(&self, other: &Self) -> f64 {
        (*self - *other).norm()
    }

    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl Add for ContinuousPoint {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        [self.x + other.x, self.y + other.y, self.z + other.z].into()
    }
}

impl Neg for ContinuousPoint {
    type Output = Self;

    fn neg(self) -> Self {
        [-self.x, -self.y, -self.z].into()
    }
}

impl Sub for ContinuousPoint {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + (-other)
    }
}

impl Mul<f64> for ContinuousPoint {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        [rhs * self.x, rhs * self.y, rhs * self.z].into()
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
