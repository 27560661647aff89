#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::math::{Direction, Point, Real, Vector};

/// An infinite plane, the set of points `p` such that `normal · p = offset`.
///
/// Points on the side the normal points to are "above" the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Plane {
    normal: Direction,
    offset: Real,
}

impl Plane {
    /// Creates a plane from a non-zero normal, normalizing it.
    pub fn new(normal: Vector, offset: Real) -> Result<Self, Error> {
        if !offset.is_finite() {
            return Err(Error::invalid_geometry(format!("plane offset {}", offset)));
        }

        let normal = Direction::try_new(normal, Real::EPSILON)
            .filter(|n| n.iter().all(|e| e.is_finite()))
            .ok_or_else(|| Error::invalid_geometry("degenerate plane normal"))?;

        Ok(Plane { normal, offset })
    }

    /// Creates a plane from an already normalized normal.
    pub fn from_unit_normal(normal: Direction, offset: Real) -> Self {
        Plane { normal, offset }
    }

    #[inline]
    pub fn normal(&self) -> &Direction {
        &self.normal
    }

    #[inline]
    pub fn offset(&self) -> Real {
        self.offset
    }

    /// Signed distance from `point` to this plane, positive above it.
    #[inline]
    pub fn distance(&self, point: &Point) -> Real {
        self.normal.dot(&point.coords) - self.offset
    }
}
