use std::fmt;
use std::ops::Neg;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::algebra::Angle;
use crate::math::{Real, Vector};

/// A 3D coordinate vector, either metric or spherical.
///
/// The representation is fixed at construction. Every component may be
/// individually absent, which models partially known positions; conversions
/// reject such vectors.
///
/// Equality is exact and compares the representation and every component.
/// Use [`CoordinateVector3::equal_with_tolerance`] for approximate comparisons.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum CoordinateVector3 {
    /// Cartesian coordinates, in meters.
    Metric {
        x: Option<Real>,
        y: Option<Real>,
        z: Option<Real>,
    },
    /// Geodetic coordinates: latitude, longitude and elevation in meters.
    Spherical {
        lat: Option<Angle>,
        lon: Option<Angle>,
        elevation: Option<Real>,
    },
}

impl CoordinateVector3 {
    /// A metric vector with all three components present.
    pub fn metric(x: Real, y: Real, z: Real) -> Self {
        CoordinateVector3::Metric {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    /// A metric vector with the components of `v`.
    pub fn from_vector(v: &Vector) -> Self {
        Self::metric(v.x, v.y, v.z)
    }

    /// A spherical vector with all three components present.
    pub fn spherical(lat: Angle, lon: Angle, elevation: Real) -> Self {
        CoordinateVector3::Spherical {
            lat: Some(lat),
            lon: Some(lon),
            elevation: Some(elevation),
        }
    }

    #[inline]
    pub fn is_metric(&self) -> bool {
        matches!(self, CoordinateVector3::Metric { .. })
    }

    #[inline]
    pub fn is_spherical(&self) -> bool {
        matches!(self, CoordinateVector3::Spherical { .. })
    }

    /// Whether every present component is a finite number.
    ///
    /// A vector with no component at all is finite.
    pub fn is_finite(&self) -> bool {
        match *self {
            CoordinateVector3::Metric { x, y, z } => [x, y, z]
                .iter()
                .all(|c| c.map_or(true, Real::is_finite)),
            CoordinateVector3::Spherical {
                lat,
                lon,
                elevation,
            } => {
                lat.map_or(true, |a| a.is_finite())
                    && lon.map_or(true, |a| a.is_finite())
                    && elevation.map_or(true, Real::is_finite)
            }
        }
    }

    /// Whether all three components are present.
    pub fn is_complete(&self) -> bool {
        match *self {
            CoordinateVector3::Metric { x, y, z } => x.is_some() && y.is_some() && z.is_some(),
            CoordinateVector3::Spherical {
                lat,
                lon,
                elevation,
            } => lat.is_some() && lon.is_some() && elevation.is_some(),
        }
    }

    /// The X component, if this vector is metric and it is present.
    pub fn x(&self) -> Option<Real> {
        match *self {
            CoordinateVector3::Metric { x, .. } => x,
            CoordinateVector3::Spherical { .. } => None,
        }
    }

    /// The Y component, if this vector is metric and it is present.
    pub fn y(&self) -> Option<Real> {
        match *self {
            CoordinateVector3::Metric { y, .. } => y,
            CoordinateVector3::Spherical { .. } => None,
        }
    }

    /// The Z component, if this vector is metric and it is present.
    pub fn z(&self) -> Option<Real> {
        match *self {
            CoordinateVector3::Metric { z, .. } => z,
            CoordinateVector3::Spherical { .. } => None,
        }
    }

    /// The latitude, if this vector is spherical and it is present.
    pub fn lat(&self) -> Option<Angle> {
        match *self {
            CoordinateVector3::Spherical { lat, .. } => lat,
            CoordinateVector3::Metric { .. } => None,
        }
    }

    /// The longitude, if this vector is spherical and it is present.
    pub fn lon(&self) -> Option<Angle> {
        match *self {
            CoordinateVector3::Spherical { lon, .. } => lon,
            CoordinateVector3::Metric { .. } => None,
        }
    }

    /// The elevation, if this vector is spherical and it is present.
    pub fn elevation(&self) -> Option<Real> {
        match *self {
            CoordinateVector3::Spherical { elevation, .. } => elevation,
            CoordinateVector3::Metric { .. } => None,
        }
    }

    /// The metric components as a vector, if this vector is metric and complete.
    pub fn as_metric_vector(&self) -> Option<Vector> {
        match *self {
            CoordinateVector3::Metric {
                x: Some(x),
                y: Some(y),
                z: Some(z),
            } => Some(Vector::new(x, y, z)),
            _ => None,
        }
    }

    /// Compares two vectors of the same representation component-wise.
    ///
    /// Metric components and the elevation are compared up to `tolerance`,
    /// angles up to `angle_tolerance` along the shortest arc, so that `π` and
    /// `-π` are equal. Absent components only match absent components.
    pub fn equal_with_tolerance(
        &self,
        other: &CoordinateVector3,
        tolerance: Real,
        angle_tolerance: Angle,
    ) -> bool {
        fn close(a: Option<Real>, b: Option<Real>, tolerance: Real) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => (a - b).abs() <= tolerance,
                (None, None) => true,
                _ => false,
            }
        }

        fn close_angle(a: Option<Angle>, b: Option<Angle>, tolerance: Angle) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => a.shortest_distance(&b).abs() <= tolerance,
                (None, None) => true,
                _ => false,
            }
        }

        match (*self, *other) {
            (
                CoordinateVector3::Metric { x, y, z },
                CoordinateVector3::Metric {
                    x: ox,
                    y: oy,
                    z: oz,
                },
            ) => close(x, ox, tolerance) && close(y, oy, tolerance) && close(z, oz, tolerance),
            (
                CoordinateVector3::Spherical {
                    lat,
                    lon,
                    elevation,
                },
                CoordinateVector3::Spherical {
                    lat: olat,
                    lon: olon,
                    elevation: oelevation,
                },
            ) => {
                close_angle(lat, olat, angle_tolerance)
                    && close_angle(lon, olon, angle_tolerance)
                    && close(elevation, oelevation, tolerance)
            }
            _ => false,
        }
    }

    /// Component-wise sum.
    ///
    /// Returns `None` if the representations differ or a component is absent.
    pub fn checked_add(&self, other: &CoordinateVector3) -> Option<CoordinateVector3> {
        self.zip_with(other, |a, b| a + b, |a, b| a + b)
    }

    /// Component-wise difference.
    ///
    /// Returns `None` if the representations differ or a component is absent.
    pub fn checked_sub(&self, other: &CoordinateVector3) -> Option<CoordinateVector3> {
        self.zip_with(other, |a, b| a - b, |a, b| a - b)
    }

    fn zip_with(
        &self,
        other: &CoordinateVector3,
        f: impl Fn(Real, Real) -> Real,
        g: impl Fn(Angle, Angle) -> Angle,
    ) -> Option<CoordinateVector3> {
        match (*self, *other) {
            (
                CoordinateVector3::Metric { x, y, z },
                CoordinateVector3::Metric {
                    x: ox,
                    y: oy,
                    z: oz,
                },
            ) => Some(CoordinateVector3::metric(
                f(x?, ox?),
                f(y?, oy?),
                f(z?, oz?),
            )),
            (
                CoordinateVector3::Spherical {
                    lat,
                    lon,
                    elevation,
                },
                CoordinateVector3::Spherical {
                    lat: olat,
                    lon: olon,
                    elevation: oelevation,
                },
            ) => Some(CoordinateVector3::spherical(
                g(lat?, olat?),
                g(lon?, olon?),
                f(elevation?, oelevation?),
            )),
            _ => None,
        }
    }
}

impl Default for CoordinateVector3 {
    /// The metric zero vector.
    fn default() -> Self {
        CoordinateVector3::metric(0.0, 0.0, 0.0)
    }
}

impl From<Vector> for CoordinateVector3 {
    fn from(v: Vector) -> Self {
        CoordinateVector3::from_vector(&v)
    }
}

impl Neg for CoordinateVector3 {
    type Output = CoordinateVector3;

    fn neg(self) -> Self::Output {
        match self {
            CoordinateVector3::Metric { x, y, z } => CoordinateVector3::Metric {
                x: x.map(Neg::neg),
                y: y.map(Neg::neg),
                z: z.map(Neg::neg),
            },
            CoordinateVector3::Spherical {
                lat,
                lon,
                elevation,
            } => CoordinateVector3::Spherical {
                lat: lat.map(Neg::neg),
                lon: lon.map(Neg::neg),
                elevation: elevation.map(Neg::neg),
            },
        }
    }
}

struct Component<T>(Option<T>);

impl fmt::Display for Component<Real> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{}", v),
            None => f.write_str("_"),
        }
    }
}

impl fmt::Display for Component<Angle> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(a) => write!(f, "{}°", a.degree()),
            None => f.write_str("_"),
        }
    }
}

impl fmt::Display for CoordinateVector3 {
    /// Metric vectors print as `x y z`, spherical ones as `lat° lon° elevation`
    /// with angles in degrees. Absent components print as `_`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CoordinateVector3::Metric { x, y, z } => {
                write!(f, "{} {} {}", Component(x), Component(y), Component(z))
            }
            CoordinateVector3::Spherical {
                lat,
                lon,
                elevation,
            } => write!(
                f,
                "{} {} {}",
                Component(lat),
                Component(lon),
                Component(elevation)
            ),
        }
    }
}
