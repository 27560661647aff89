//! Error types shared by the mass-properties and geodesy modules.

use thiserror::Error;

use crate::geodesy::CoordinateType;

/// Errors returned by fallible operations of this crate.
///
/// None of these is fatal: the value that produced the error is left untouched
/// and the caller may retry with corrected input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A shape parameter is negative, zero where a positive value is required, or not finite.
    #[error("invalid geometry: {reason}")]
    InvalidGeometry {
        /// Description of the offending parameter.
        reason: String,
    },

    /// A material name matches no entry of the density table.
    #[error("unknown material: {0}")]
    UnknownMaterial(String),

    /// A density that cannot produce a physical mass.
    #[error("invalid density: {0} (must be positive and finite)")]
    InvalidDensity(f64),

    /// A mass that cannot be used to derive other properties.
    #[error("invalid mass: {0} (must be positive and finite)")]
    InvalidMass(f64),

    /// The inertia tensor is not positive semi-definite or violates the triangle inequality.
    #[error("inertia tensor is not physically valid")]
    InvalidInertia,

    /// A coordinate component is NaN or infinite.
    #[error("coordinate vector has a non-finite component")]
    NonFiniteInput,

    /// A coordinate component required by the conversion is absent.
    #[error("coordinate vector is missing a component")]
    IncompleteInput,

    /// The vector representation does not match the frame it is declared in.
    #[error("coordinate vector representation does not match the {frame} frame")]
    RepresentationMismatch {
        /// The frame the vector was declared in.
        frame: CoordinateType,
    },

    /// Velocities have no meaning in geodetic coordinates.
    #[error("velocity cannot be expressed in spherical coordinates")]
    SphericalVelocity,

    /// Custom ellipsoid axes that do not describe an oblate ellipsoid.
    #[error("invalid surface axes: equatorial {equatorial}, polar {polar}")]
    InvalidSurface {
        /// Requested equatorial (semi-major) axis.
        equatorial: f64,
        /// Requested polar (semi-minor) axis.
        polar: f64,
    },

    /// A surface name that matches no known surface.
    #[error("unknown surface type: {0}")]
    UnknownSurface(String),
}

impl Error {
    /// Create an invalid geometry error.
    #[must_use]
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            reason: reason.into(),
        }
    }

    /// Check if this error was caused by a shape parameter.
    #[must_use]
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Self::InvalidGeometry { .. })
    }

    /// Check if this error was caused by the content of a coordinate vector.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::NonFiniteInput
                | Self::IncompleteInput
                | Self::RepresentationMismatch { .. }
                | Self::SphericalVelocity
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::invalid_geometry("negative radius -1");
        assert!(err.to_string().contains("-1"));

        let err = Error::RepresentationMismatch {
            frame: CoordinateType::Local,
        };
        assert!(err.to_string().contains("LOCAL"));

        let err = Error::InvalidSurface {
            equatorial: -1.0,
            polar: 3.0,
        };
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn error_predicates() {
        assert!(Error::invalid_geometry("x").is_geometry_error());
        assert!(!Error::invalid_geometry("x").is_input_error());
        assert!(Error::NonFiniteInput.is_input_error());
        assert!(Error::SphericalVelocity.is_input_error());
        assert!(!Error::InvalidDensity(0.0).is_input_error());
    }
}
