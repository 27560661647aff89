//! Reference ellipsoids of the surfaces coordinates can be expressed on.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::math::Real;

/// Equatorial axis of the WGS84 ellipsoid, in meters.
pub const WGS84_AXIS_EQUATORIAL: Real = 6_378_137.0;
/// Polar axis of the WGS84 ellipsoid, in meters.
pub const WGS84_AXIS_POLAR: Real = 6_356_752.314245;
/// Flattening of the WGS84 ellipsoid.
pub const WGS84_FLATTENING: Real = 1.0 / 298.257223563;
/// Mean radius of the Earth, in meters.
pub const EARTH_RADIUS: Real = 6_371_000.0;

/// Equatorial axis of the Moon, in meters.
pub const MOON_AXIS_EQUATORIAL: Real = 1_738_100.0;
/// Polar axis of the Moon, in meters.
pub const MOON_AXIS_POLAR: Real = 1_736_000.0;
/// Flattening of the Moon.
pub const MOON_FLATTENING: Real = 0.0012;
/// Mean radius of the Moon, in meters.
pub const MOON_RADIUS: Real = 1_737_400.0;

/// The surfaces geodetic coordinates can refer to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum SurfaceType {
    /// The Earth, modeled by the WGS84 ellipsoid.
    #[default]
    EarthWgs84,
    /// The Moon, modeled by the Selenographic Coordinate System ellipsoid.
    MoonScs,
    /// A user-supplied ellipsoid.
    Custom,
}

impl SurfaceType {
    /// The ellipsoid of this surface, `None` for `Custom`.
    pub fn ellipsoid(self) -> Option<Ellipsoid> {
        match self {
            SurfaceType::EarthWgs84 => Some(Ellipsoid::WGS84),
            SurfaceType::MoonScs => Some(Ellipsoid::MOON),
            SurfaceType::Custom => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SurfaceType::EarthWgs84 => "EARTH_WGS84",
            SurfaceType::MoonScs => "MOON_SCS",
            SurfaceType::Custom => "CUSTOM_SURFACE",
        }
    }
}

impl fmt::Display for SurfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SurfaceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EARTH_WGS84" => Ok(SurfaceType::EarthWgs84),
            "MOON_SCS" => Ok(SurfaceType::MoonScs),
            "CUSTOM_SURFACE" => Ok(SurfaceType::Custom),
            _ => Err(Error::UnknownSurface(s.to_string())),
        }
    }
}

/// An oblate ellipsoid of revolution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Ellipsoid {
    equatorial: Real,
    polar: Real,
    flattening: Real,
    radius: Real,
}

impl Ellipsoid {
    /// The WGS84 Earth ellipsoid.
    pub const WGS84: Ellipsoid = Ellipsoid {
        equatorial: WGS84_AXIS_EQUATORIAL,
        polar: WGS84_AXIS_POLAR,
        flattening: WGS84_FLATTENING,
        radius: EARTH_RADIUS,
    };

    /// The Moon ellipsoid.
    pub const MOON: Ellipsoid = Ellipsoid {
        equatorial: MOON_AXIS_EQUATORIAL,
        polar: MOON_AXIS_POLAR,
        flattening: MOON_FLATTENING,
        radius: MOON_RADIUS,
    };

    /// Creates an ellipsoid from its equatorial and polar semi-axes.
    ///
    /// Both must be positive and finite, and the polar axis may not exceed the
    /// equatorial one. The mean radius is `(2a + b) / 3`.
    pub fn from_axes(equatorial: Real, polar: Real) -> Result<Self, Error> {
        let valid = equatorial > 0.0
            && polar > 0.0
            && polar <= equatorial
            && equatorial.is_finite()
            && polar.is_finite();

        if !valid {
            return Err(Error::InvalidSurface { equatorial, polar });
        }

        Ok(Ellipsoid {
            equatorial,
            polar,
            flattening: (equatorial - polar) / equatorial,
            radius: (2.0 * equatorial + polar) / 3.0,
        })
    }

    /// The equatorial (semi-major) axis `a`.
    #[inline]
    pub fn equatorial(&self) -> Real {
        self.equatorial
    }

    /// The polar (semi-minor) axis `b`.
    #[inline]
    pub fn polar(&self) -> Real {
        self.polar
    }

    #[inline]
    pub fn flattening(&self) -> Real {
        self.flattening
    }

    /// The mean radius, used for great-circle distances.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The first eccentricity `sqrt(1 - b²/a²)`.
    pub fn first_eccentricity(&self) -> Real {
        let ratio = self.polar / self.equatorial;
        (1.0 - ratio * ratio).sqrt()
    }

    /// The second eccentricity `sqrt(a²/b² - 1)`.
    pub fn second_eccentricity(&self) -> Real {
        let ratio = self.equatorial / self.polar;
        (ratio * ratio - 1.0).sqrt()
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Ellipsoid::WGS84
    }
}
