//! Configuration of a local frame origin.
//!
//! [`SphericalCoordinatesConfig`] describes the reference point of a world the
//! way a scene description does, with angles in degrees, and builds the
//! corresponding [`SphericalCoordinates`].

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::algebra::Angle;
use crate::error::Error;
use crate::geodesy::{Ellipsoid, SphericalCoordinates, SurfaceType};
use crate::math::Real;

/// Description of a reference point and the surface it lies on.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(default))]
pub struct SphericalCoordinatesConfig {
    /// Surface model.
    pub surface: SurfaceType,
    /// Reference latitude (degrees).
    pub latitude_deg: Real,
    /// Reference longitude (degrees).
    pub longitude_deg: Real,
    /// Reference elevation (meters).
    pub elevation: Real,
    /// Heading offset of the local frame (degrees).
    pub heading_deg: Real,
    /// Equatorial axis of a custom surface (meters).
    pub axis_equatorial: Option<Real>,
    /// Polar axis of a custom surface (meters).
    pub axis_polar: Option<Real>,
}

impl Default for SphericalCoordinatesConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceType::EarthWgs84,
            latitude_deg: 0.0,
            longitude_deg: 0.0,
            elevation: 0.0,
            heading_deg: 0.0,
            axis_equatorial: None,
            axis_polar: None,
        }
    }
}

impl SphericalCoordinatesConfig {
    /// Create a configuration for a reference point on the WGS84 ellipsoid.
    #[must_use]
    pub fn wgs84(latitude_deg: Real, longitude_deg: Real, elevation: Real) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            elevation,
            ..Default::default()
        }
    }

    /// Set the surface.
    #[must_use]
    pub fn with_surface(mut self, surface: SurfaceType) -> Self {
        self.surface = surface;
        self
    }

    /// Use a custom surface with the given semi-axes.
    #[must_use]
    pub fn with_custom_axes(mut self, axis_equatorial: Real, axis_polar: Real) -> Self {
        self.surface = SurfaceType::Custom;
        self.axis_equatorial = Some(axis_equatorial);
        self.axis_polar = Some(axis_polar);
        self
    }

    /// Set the reference latitude in degrees.
    #[must_use]
    pub fn with_latitude(mut self, latitude_deg: Real) -> Self {
        self.latitude_deg = latitude_deg;
        self
    }

    /// Set the reference longitude in degrees.
    #[must_use]
    pub fn with_longitude(mut self, longitude_deg: Real) -> Self {
        self.longitude_deg = longitude_deg;
        self
    }

    /// Set the reference elevation in meters.
    #[must_use]
    pub fn with_elevation(mut self, elevation: Real) -> Self {
        self.elevation = elevation;
        self
    }

    /// Set the heading offset in degrees.
    #[must_use]
    pub fn with_heading(mut self, heading_deg: Real) -> Self {
        self.heading_deg = heading_deg;
        self
    }

    /// Validate the configuration.
    ///
    /// Custom axes are only checked when the surface is custom and both are given.
    pub fn validate(&self) -> Result<(), Error> {
        let finite = [
            self.latitude_deg,
            self.longitude_deg,
            self.elevation,
            self.heading_deg,
        ]
        .iter()
        .all(|v| v.is_finite());

        if !finite {
            return Err(Error::NonFiniteInput);
        }

        if let (SurfaceType::Custom, Some(a), Some(b)) =
            (self.surface, self.axis_equatorial, self.axis_polar)
        {
            Ellipsoid::from_axes(a, b)?;
        }

        Ok(())
    }

    /// Build the reference point described by this configuration.
    pub fn build(&self) -> Result<SphericalCoordinates, Error> {
        self.validate()?;

        let mut res = match (self.surface, self.axis_equatorial, self.axis_polar) {
            (SurfaceType::Custom, Some(a), Some(b)) => {
                SphericalCoordinates::with_custom_surface(a, b)?
            }
            (surface, _, _) => SphericalCoordinates::new(surface),
        };

        res.set_latitude_reference(Angle::from_degrees(self.latitude_deg))?;
        res.set_longitude_reference(Angle::from_degrees(self.longitude_deg))?;
        res.set_elevation_reference(self.elevation)?;
        res.set_heading_offset(Angle::from_degrees(self.heading_deg))?;

        Ok(res)
    }
}

#[cfg(test)]
mod test {
    use super::SphericalCoordinatesConfig;
    use crate::algebra::Angle;
    use crate::error::Error;
    use crate::geodesy::{SphericalCoordinates, SurfaceType};

    #[test]
    fn default_config() {
        let config = SphericalCoordinatesConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.build().unwrap(), SphericalCoordinates::default());
    }

    #[test]
    fn builder() {
        let config =
            SphericalCoordinatesConfig::wgs84(37.3877349, -122.0651166, 32.0).with_heading(90.0);
        let sc = config.build().unwrap();

        let expected = SphericalCoordinates::with_reference(
            SurfaceType::EarthWgs84,
            Angle::from_degrees(37.3877349),
            Angle::from_degrees(-122.0651166),
            32.0,
            Angle::from_degrees(90.0),
        )
        .unwrap();
        assert_eq!(sc, expected);

        let moon = SphericalCoordinatesConfig::default()
            .with_surface(SurfaceType::MoonScs)
            .with_latitude(10.0)
            .with_longitude(20.0)
            .with_elevation(-3.0)
            .build()
            .unwrap();
        assert_eq!(moon.surface(), SurfaceType::MoonScs);
        assert_eq!(moon.elevation_reference(), -3.0);
    }

    #[test]
    fn custom_surface() {
        let sc = SphericalCoordinatesConfig::default()
            .with_custom_axes(10.0, 9.0)
            .build()
            .unwrap();
        assert_eq!(sc.surface(), SurfaceType::Custom);
        assert_eq!(sc.ellipsoid().polar(), 9.0);

        let invalid = SphericalCoordinatesConfig::default().with_custom_axes(9.0, 10.0);
        assert_eq!(
            invalid.validate(),
            Err(Error::InvalidSurface {
                equatorial: 9.0,
                polar: 10.0
            })
        );
        assert!(invalid.build().is_err());

        // Without axes the WGS84 parameters are used.
        let fallback = SphericalCoordinatesConfig::default()
            .with_surface(SurfaceType::Custom)
            .build()
            .unwrap();
        assert_eq!(fallback.surface(), SurfaceType::Custom);
        assert_eq!(fallback.ellipsoid().equatorial(), 6378137.0);
    }

    #[test]
    fn non_finite_values() {
        let config = SphericalCoordinatesConfig::default().with_latitude(f64::NAN);
        assert_eq!(config.validate(), Err(Error::NonFiniteInput));
        assert_eq!(config.build().unwrap_err(), Error::NonFiniteInput);
    }

    #[cfg(feature = "serde-serialize")]
    #[test]
    fn serde_roundtrip() {
        let config = SphericalCoordinatesConfig::wgs84(46.25, -122.25, 100.0)
            .with_heading(15.0)
            .with_custom_axes(6378137.0, 6356752.314245);

        let json = serde_json::to_string(&config).unwrap();
        let parsed: SphericalCoordinatesConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);

        let partial: SphericalCoordinatesConfig =
            serde_json::from_str(r#"{ "surface": "MoonScs", "elevation": 12.0 }"#).unwrap();
        assert_eq!(partial.surface, SurfaceType::MoonScs);
        assert_eq!(partial.elevation, 12.0);
        assert_eq!(partial.axis_polar, None);
    }
}
