//! Conversions between geodetic, earth-centered and local tangent-plane frames.

use std::fmt;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::algebra::Angle;
use crate::error::Error;
use crate::geodesy::{CoordinateVector3, Ellipsoid, SurfaceType, EARTH_RADIUS};
use crate::math::{Matrix, Real, Rotation, Vector};

/// Maximum number of refinement steps of the ECEF to geodetic conversion.
const GEODETIC_MAX_ITERATIONS: usize = 10;
/// Latitude change, in radians, below which the refinement stops.
const GEODETIC_CONVERGENCE: Real = 1.0e-12;

/// The frames a [`CoordinateVector3`] can be expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum CoordinateType {
    /// Latitude, longitude and elevation on the reference ellipsoid.
    Spherical,
    /// Earth-centered, earth-fixed Cartesian frame.
    Ecef,
    /// East-North-Up frame whose origin is the reference point.
    Global,
    /// The `Global` frame rotated about its up axis by the heading offset.
    Local,
}

impl fmt::Display for CoordinateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CoordinateType::Spherical => "SPHERICAL",
            CoordinateType::Ecef => "ECEF",
            CoordinateType::Global => "GLOBAL",
            CoordinateType::Local => "LOCAL",
        };

        f.write_str(name)
    }
}

/// A reference point on an ellipsoidal surface, and the frames attached to it.
///
/// The reference point is given by its latitude, longitude and elevation. The
/// `Global` frame is the East-North-Up frame at this point. The `Local` frame
/// is the `Global` frame rotated by the heading offset: a positive heading is
/// an anticlockwise rotation about the up axis from East to the local `x` axis,
/// so a heading of `π/2` makes local `x` point North and local `y` point West.
///
/// The rotation matrices and the earth-centered position of the reference
/// point are cached and recomputed by every setter.
#[derive(Clone, Debug)]
pub struct SphericalCoordinates {
    surface: SurfaceType,
    ellipsoid: Ellipsoid,
    latitude: Angle,
    longitude: Angle,
    elevation: Real,
    heading: Angle,

    // Cached from the fields above.
    ecef_to_global: Rotation,
    heading_rotation: Rotation,
    origin: Vector,
}

impl SphericalCoordinates {
    /// Creates a reference point at latitude, longitude and elevation zero on `surface`.
    ///
    /// A `Custom` surface has no known axes and uses the WGS84 ellipsoid until
    /// [`SphericalCoordinates::set_custom_surface`] is called.
    pub fn new(surface: SurfaceType) -> Self {
        let mut res = SphericalCoordinates {
            surface,
            ellipsoid: Ellipsoid::WGS84,
            latitude: Angle::ZERO,
            longitude: Angle::ZERO,
            elevation: 0.0,
            heading: Angle::ZERO,
            ecef_to_global: Rotation::identity(),
            heading_rotation: Rotation::identity(),
            origin: Vector::zeros(),
        };

        res.set_surface(surface);
        res
    }

    /// Creates a reference point with the given pose on `surface`.
    ///
    /// Angles are normalized. Fails if any value is not finite.
    pub fn with_reference(
        surface: SurfaceType,
        latitude: Angle,
        longitude: Angle,
        elevation: Real,
        heading: Angle,
    ) -> Result<Self, Error> {
        if !(latitude.is_finite()
            && longitude.is_finite()
            && elevation.is_finite()
            && heading.is_finite())
        {
            return Err(Error::NonFiniteInput);
        }

        let mut res = Self::new(surface);
        res.latitude = latitude.normalized();
        res.longitude = longitude.normalized();
        res.elevation = elevation;
        res.heading = heading.normalized();
        res.update_transformation_matrices();

        Ok(res)
    }

    /// Creates a reference point at latitude, longitude and elevation zero on
    /// a custom ellipsoid.
    pub fn with_custom_surface(axis_equatorial: Real, axis_polar: Real) -> Result<Self, Error> {
        let mut res = Self::new(SurfaceType::EarthWgs84);
        res.set_custom_surface(axis_equatorial, axis_polar)?;
        Ok(res)
    }

    /// The surface type.
    #[inline]
    pub fn surface(&self) -> SurfaceType {
        self.surface
    }

    /// The ellipsoid used by the conversions.
    #[inline]
    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// The mean radius of the surface.
    #[inline]
    pub fn surface_radius(&self) -> Real {
        self.ellipsoid.radius()
    }

    #[inline]
    pub fn latitude_reference(&self) -> Angle {
        self.latitude
    }

    #[inline]
    pub fn longitude_reference(&self) -> Angle {
        self.longitude
    }

    #[inline]
    pub fn elevation_reference(&self) -> Real {
        self.elevation
    }

    #[inline]
    pub fn heading_offset(&self) -> Angle {
        self.heading
    }

    /// Selects a named surface.
    ///
    /// Selecting `Custom` this way gives no axes: the current ellipsoid is kept
    /// and a warning is logged. Use [`SphericalCoordinates::set_custom_surface`]
    /// to change the axes.
    pub fn set_surface(&mut self, surface: SurfaceType) {
        match surface.ellipsoid() {
            Some(ellipsoid) => self.ellipsoid = ellipsoid,
            None => warn!(
                surface = %surface,
                equatorial = self.ellipsoid.equatorial(),
                polar = self.ellipsoid.polar(),
                "custom surface selected without axes, keeping current ellipsoid"
            ),
        }
        self.surface = surface;
        self.update_transformation_matrices();
    }

    /// Selects a custom ellipsoid given by its semi-axes.
    ///
    /// Leaves `self` unchanged if the axes are invalid.
    pub fn set_custom_surface(
        &mut self,
        axis_equatorial: Real,
        axis_polar: Real,
    ) -> Result<(), Error> {
        self.ellipsoid = Ellipsoid::from_axes(axis_equatorial, axis_polar)?;
        self.surface = SurfaceType::Custom;
        self.update_transformation_matrices();
        Ok(())
    }

    /// Sets the reference latitude, normalized.
    pub fn set_latitude_reference(&mut self, latitude: Angle) -> Result<(), Error> {
        check_finite(latitude.radian())?;
        self.latitude = latitude.normalized();
        self.update_transformation_matrices();
        Ok(())
    }

    /// Sets the reference longitude, normalized.
    pub fn set_longitude_reference(&mut self, longitude: Angle) -> Result<(), Error> {
        check_finite(longitude.radian())?;
        self.longitude = longitude.normalized();
        self.update_transformation_matrices();
        Ok(())
    }

    /// Sets the reference elevation.
    pub fn set_elevation_reference(&mut self, elevation: Real) -> Result<(), Error> {
        check_finite(elevation)?;
        self.elevation = elevation;
        self.update_transformation_matrices();
        Ok(())
    }

    /// Sets the heading offset, normalized.
    pub fn set_heading_offset(&mut self, heading: Angle) -> Result<(), Error> {
        check_finite(heading.radian())?;
        self.heading = heading.normalized();
        self.update_transformation_matrices();
        Ok(())
    }

    fn update_transformation_matrices(&mut self) {
        let (sin_lat, cos_lat) = self.latitude.radian().sin_cos();
        let (sin_lon, cos_lon) = self.longitude.radian().sin_cos();

        #[rustfmt::skip]
        let ecef_to_global = Matrix::new(
            -sin_lon,           cos_lon,            0.0,
            -cos_lon * sin_lat, -sin_lon * sin_lat, cos_lat,
            cos_lon * cos_lat,  sin_lon * cos_lat,  sin_lat,
        );

        self.ecef_to_global = Rotation::from_matrix_unchecked(ecef_to_global);
        self.heading_rotation = Rotation::from_axis_angle(&Vector::z_axis(), self.heading.radian());
        self.origin = self.spherical_to_ecef(self.latitude, self.longitude, self.elevation);
    }

    fn spherical_to_ecef(&self, latitude: Angle, longitude: Angle, elevation: Real) -> Vector {
        let a = self.ellipsoid.equatorial();
        let b = self.ellipsoid.polar();
        let e = self.ellipsoid.first_eccentricity();
        let (sin_lat, cos_lat) = latitude.radian().sin_cos();
        let (sin_lon, cos_lon) = longitude.radian().sin_cos();

        // Prime vertical radius of curvature.
        let n = a / (1.0 - e * e * sin_lat * sin_lat).sqrt();

        Vector::new(
            (elevation + n) * cos_lat * cos_lon,
            (elevation + n) * cos_lat * sin_lon,
            ((b * b) / (a * a) * n + elevation) * sin_lat,
        )
    }

    fn ecef_to_spherical(&self, ecef: &Vector) -> CoordinateVector3 {
        let a = self.ellipsoid.equatorial();
        let b = self.ellipsoid.polar();
        let e2 = self.ellipsoid.first_eccentricity().powi(2);
        let ep2 = self.ellipsoid.second_eccentricity().powi(2);
        let p = ecef.x.hypot(ecef.y);

        // Bowring's estimate, then fixed-point refinement.
        let theta = (ecef.z * a).atan2(p * b);
        let mut lat = (ecef.z + ep2 * b * theta.sin().powi(3))
            .atan2(p - e2 * a * theta.cos().powi(3));

        for _ in 0..GEODETIC_MAX_ITERATIONS {
            let sin_lat = lat.sin();
            let n = a / (1.0 - e2 * sin_lat * sin_lat).sqrt();
            let new_lat = (ecef.z + e2 * n * sin_lat).atan2(p);
            let delta = (new_lat - lat).abs();
            lat = new_lat;

            if delta < GEODETIC_CONVERGENCE {
                break;
            }
        }

        let lon = ecef.y.atan2(ecef.x);
        let (sin_lat, cos_lat) = lat.sin_cos();
        let elevation = p * cos_lat + ecef.z * sin_lat - a * (1.0 - e2 * sin_lat * sin_lat).sqrt();

        CoordinateVector3::spherical(Angle::from_radians(lat), Angle::from_radians(lon), elevation)
    }

    /// Converts a position between two frames.
    ///
    /// `position` must be spherical if `from` is [`CoordinateType::Spherical`]
    /// and metric otherwise. It must be complete and finite. The result is
    /// spherical if `to` is [`CoordinateType::Spherical`] and metric otherwise.
    pub fn position_transform(
        &self,
        position: &CoordinateVector3,
        from: CoordinateType,
        to: CoordinateType,
    ) -> Result<CoordinateVector3, Error> {
        let ecef = match from {
            CoordinateType::Spherical => match *position {
                CoordinateVector3::Spherical {
                    lat: Some(lat),
                    lon: Some(lon),
                    elevation: Some(elevation),
                } if position.is_finite() => self.spherical_to_ecef(lat, lon, elevation),
                _ => return Err(reject(position, from)),
            },
            _ => {
                let v = metric_input(position, from)?;
                match from {
                    CoordinateType::Local => {
                        self.origin + self.global_to_ecef(&(self.heading_rotation * v))
                    }
                    CoordinateType::Global => self.origin + self.global_to_ecef(&v),
                    _ => v,
                }
            }
        };

        let res = match to {
            CoordinateType::Spherical => self.ecef_to_spherical(&ecef),
            CoordinateType::Ecef => CoordinateVector3::from_vector(&ecef),
            CoordinateType::Global => {
                CoordinateVector3::from_vector(&(self.ecef_to_global * (ecef - self.origin)))
            }
            CoordinateType::Local => {
                let global = self.ecef_to_global * (ecef - self.origin);
                let local = self.heading_rotation.inverse_transform_vector(&global);
                CoordinateVector3::from_vector(&local)
            }
        };

        Ok(res)
    }

    /// Converts a velocity between two metric frames.
    ///
    /// Velocities are free vectors: only the rotations between frames apply.
    /// Fails if either frame is [`CoordinateType::Spherical`] or `velocity` is
    /// not a complete, finite metric vector.
    pub fn velocity_transform(
        &self,
        velocity: &CoordinateVector3,
        from: CoordinateType,
        to: CoordinateType,
    ) -> Result<CoordinateVector3, Error> {
        if from == CoordinateType::Spherical
            || to == CoordinateType::Spherical
            || velocity.is_spherical()
        {
            let err = Error::SphericalVelocity;
            debug!(error = %err, %from, %to, "velocity transform rejected");
            return Err(err);
        }

        let v = metric_input(velocity, from)?;
        let ecef = match from {
            CoordinateType::Local => self.global_to_ecef(&(self.heading_rotation * v)),
            CoordinateType::Global => self.global_to_ecef(&v),
            _ => v,
        };

        let res = match to {
            CoordinateType::Global => self.ecef_to_global * ecef,
            CoordinateType::Local => self
                .heading_rotation
                .inverse_transform_vector(&(self.ecef_to_global * ecef)),
            _ => ecef,
        };

        Ok(CoordinateVector3::from_vector(&res))
    }

    fn global_to_ecef(&self, v: &Vector) -> Vector {
        self.ecef_to_global.inverse_transform_vector(v)
    }

    /// Converts a position from the local frame to geodetic coordinates.
    pub fn spherical_from_local_position(
        &self,
        position: &CoordinateVector3,
    ) -> Result<CoordinateVector3, Error> {
        self.position_transform(position, CoordinateType::Local, CoordinateType::Spherical)
    }

    /// Converts a position from geodetic coordinates to the local frame.
    pub fn local_from_spherical_position(
        &self,
        position: &CoordinateVector3,
    ) -> Result<CoordinateVector3, Error> {
        self.position_transform(position, CoordinateType::Spherical, CoordinateType::Local)
    }

    /// Converts a velocity from the local frame to the East-North-Up frame.
    pub fn global_from_local_velocity(
        &self,
        velocity: &CoordinateVector3,
    ) -> Result<CoordinateVector3, Error> {
        self.velocity_transform(velocity, CoordinateType::Local, CoordinateType::Global)
    }

    /// Converts a velocity from the East-North-Up frame to the local frame.
    pub fn local_from_global_velocity(
        &self,
        velocity: &CoordinateVector3,
    ) -> Result<CoordinateVector3, Error> {
        self.velocity_transform(velocity, CoordinateType::Global, CoordinateType::Local)
    }

    /// Great-circle distance between two points on a sphere of the mean Earth radius.
    pub fn distance_wgs84(lat_a: Angle, lon_a: Angle, lat_b: Angle, lon_b: Angle) -> Real {
        haversine(lat_a, lon_a, lat_b, lon_b) * EARTH_RADIUS
    }

    /// Great-circle distance between two points on a sphere of the mean radius
    /// of this surface.
    pub fn distance_between_points(
        &self,
        lat_a: Angle,
        lon_a: Angle,
        lat_b: Angle,
        lon_b: Angle,
    ) -> Real {
        haversine(lat_a, lon_a, lat_b, lon_b) * self.surface_radius()
    }
}

impl Default for SphericalCoordinates {
    fn default() -> Self {
        SphericalCoordinates::new(SurfaceType::EarthWgs84)
    }
}

impl PartialEq for SphericalCoordinates {
    fn eq(&self, other: &Self) -> bool {
        self.surface == other.surface
            && self.latitude == other.latitude
            && self.longitude == other.longitude
            && self.elevation == other.elevation
            && self.heading == other.heading
    }
}

fn check_finite(value: Real) -> Result<(), Error> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteInput)
    }
}

/// The error explaining why `v` is not a valid input in the `frame` frame.
fn reject(v: &CoordinateVector3, frame: CoordinateType) -> Error {
    let err = if v.is_spherical() != (frame == CoordinateType::Spherical) {
        Error::RepresentationMismatch { frame }
    } else if !v.is_complete() {
        Error::IncompleteInput
    } else {
        Error::NonFiniteInput
    };

    debug!(error = %err, input = %v, "coordinate transform rejected");
    err
}

fn metric_input(v: &CoordinateVector3, frame: CoordinateType) -> Result<Vector, Error> {
    match v.as_metric_vector() {
        Some(res) if v.is_finite() => Ok(res),
        _ => Err(reject(v, frame)),
    }
}

/// Central angle between two points, by the haversine formula.
fn haversine(lat_a: Angle, lon_a: Angle, lat_b: Angle, lon_b: Angle) -> Real {
    let d_lat = (lat_b - lat_a).radian();
    let d_lon = (lon_b - lon_a).radian();

    let a = (d_lat / 2.0).sin().powi(2)
        + (d_lon / 2.0).sin().powi(2) * lat_a.radian().cos() * lat_b.radian().cos();

    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}
