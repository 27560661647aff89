//! Geodetic coordinates and frame conversions.

pub use self::coordinate_vector3::CoordinateVector3;
pub use self::spherical_coordinates::{CoordinateType, SphericalCoordinates};
pub use self::surface::{
    Ellipsoid, SurfaceType, EARTH_RADIUS, MOON_AXIS_EQUATORIAL, MOON_AXIS_POLAR, MOON_FLATTENING,
    MOON_RADIUS, WGS84_AXIS_EQUATORIAL, WGS84_AXIS_POLAR, WGS84_FLATTENING,
};

mod coordinate_vector3;
mod spherical_coordinates;
mod surface;
