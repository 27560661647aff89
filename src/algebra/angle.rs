use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::math::Real;

/// An angle, stored in radians.
///
/// Equality and ordering compare the raw radian values exactly. Use
/// [`Angle::approx_eq`] or [`Angle::shortest_distance`] when a tolerance or
/// wrap-around is wanted.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Angle {
    radian: Real,
}

impl Angle {
    /// The zero angle.
    pub const ZERO: Angle = Angle::from_radians(0.0);
    /// Half a turn.
    pub const PI: Angle = Angle::from_radians(std::f64::consts::PI);
    /// A quarter turn.
    pub const HALF_PI: Angle = Angle::from_radians(std::f64::consts::FRAC_PI_2);
    /// A full turn.
    pub const TWO_PI: Angle = Angle::from_radians(std::f64::consts::TAU);

    /// Creates an angle from a value in radians.
    #[inline]
    pub const fn from_radians(radian: Real) -> Self {
        Angle { radian }
    }

    /// Creates an angle from a value in degrees.
    #[inline]
    pub fn from_degrees(degree: Real) -> Self {
        Angle {
            radian: degree.to_radians(),
        }
    }

    /// The value of this angle in radians.
    #[inline]
    pub fn radian(&self) -> Real {
        self.radian
    }

    /// The value of this angle in degrees.
    #[inline]
    pub fn degree(&self) -> Real {
        self.radian.to_degrees()
    }

    /// Sets the value of this angle in radians.
    #[inline]
    pub fn set_radian(&mut self, radian: Real) {
        self.radian = radian;
    }

    /// Sets the value of this angle in degrees.
    #[inline]
    pub fn set_degree(&mut self, degree: Real) {
        self.radian = degree.to_radians();
    }

    /// Whether the radian value is neither NaN nor infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.radian.is_finite()
    }

    /// Wraps this angle into `(-pi, pi]` in place.
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// This angle wrapped into `(-pi, pi]`.
    ///
    /// Angles already inside the range are returned bit-for-bit unchanged.
    pub fn normalized(&self) -> Self {
        let pi = std::f64::consts::PI;

        if self.radian > -pi && self.radian <= pi {
            *self
        } else {
            Angle::from_radians(self.radian.sin().atan2(self.radian.cos()))
        }
    }

    /// The absolute value of this angle.
    #[inline]
    pub fn abs(&self) -> Self {
        Angle::from_radians(self.radian.abs())
    }

    /// The signed angle to travel from `self` to `other` along the shorter arc.
    pub fn shortest_distance(&self, other: &Angle) -> Self {
        (*other - *self).normalized()
    }

    /// Compares two angles up to an absolute tolerance in radians.
    pub fn approx_eq(&self, other: &Angle, tolerance: Real) -> bool {
        (self.radian - other.radian).abs() <= tolerance
    }
}

impl From<Real> for Angle {
    #[inline]
    fn from(radian: Real) -> Self {
        Angle::from_radians(radian)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.radian)
    }
}

impl Neg for Angle {
    type Output = Angle;

    #[inline]
    fn neg(self) -> Angle {
        Angle::from_radians(-self.radian)
    }
}

macro_rules! impl_angle_op(
    ($Trait: ident, $method: ident, $TraitAssign: ident, $method_assign: ident, $op: tt) => {
        impl $Trait<Angle> for Angle {
            type Output = Angle;

            #[inline]
            fn $method(self, rhs: Angle) -> Angle {
                Angle::from_radians(self.radian $op rhs.radian)
            }
        }

        impl $Trait<Real> for Angle {
            type Output = Angle;

            #[inline]
            fn $method(self, rhs: Real) -> Angle {
                Angle::from_radians(self.radian $op rhs)
            }
        }

        impl $TraitAssign<Angle> for Angle {
            #[inline]
            fn $method_assign(&mut self, rhs: Angle) {
                self.radian = self.radian $op rhs.radian;
            }
        }

        impl $TraitAssign<Real> for Angle {
            #[inline]
            fn $method_assign(&mut self, rhs: Real) {
                self.radian = self.radian $op rhs;
            }
        }
    }
);

impl_angle_op!(Add, add, AddAssign, add_assign, +);
impl_angle_op!(Sub, sub, SubAssign, sub_assign, -);
impl_angle_op!(Mul, mul, MulAssign, mul_assign, *);
impl_angle_op!(Div, div, DivAssign, div_assign, /);
