//! Traits to compute inertial properties.

use tracing::debug;

use crate::algebra::MassMatrix3;
use crate::error::Error;
use crate::material::Material;
use crate::math::{Matrix, Point, Real, Vector};

/// Trait implemented by shapes made of a homogeneous material.
///
/// Implementors provide the closed-form geometric quantities; mass and inertia
/// are derived from them and from the density of the shape's material.
pub trait Volumetric {
    /// Computes the area of this object.
    fn area(&self) -> Real;

    /// Computes the volume of this object.
    fn volume(&self) -> Real;

    /// Computes the center of mass of this object, in its local frame.
    fn center_of_mass(&self) -> Point;

    /// Computes the angular inertia tensor of this object for a unit mass.
    fn unit_angular_inertia(&self) -> Matrix;

    /// The material this object is made of.
    fn material(&self) -> &Material;

    /// Replaces the material this object is made of.
    fn set_material(&mut self, material: Material);

    /// Checks that the geometry encloses a strictly positive, finite volume.
    fn check_geometry(&self) -> Result<(), Error>;

    /// The mass of this object given the density of its material.
    fn mass(&self) -> Real {
        self.volume() * self.material().density()
    }

    /// Given its mass, this computes the angular inertia of this object.
    fn angular_inertia(&self, mass: Real) -> Matrix {
        self.unit_angular_inertia() * mass
    }

    /// Computes the mass and the inertia tensor about the center of mass.
    ///
    /// Fails if the geometry is degenerate or if the density of the material
    /// is not strictly positive, and never returns a matrix holding an
    /// overflowed mass or moment.
    fn mass_matrix(&self) -> Result<MassMatrix3, Error> {
        if let Err(err) = self.check_geometry() {
            debug!(error = %err, "mass matrix rejected");
            return Err(err);
        }

        let density = self.material().density();
        if !(density > 0.0) || !density.is_finite() {
            let err = Error::InvalidDensity(density);
            debug!(error = %err, "mass matrix rejected");
            return Err(err);
        }

        let mass = self.mass();
        if !(mass > 0.0) || !mass.is_finite() {
            let err = Error::invalid_geometry(format!("mass {} is out of range", mass));
            debug!(error = %err, "mass matrix rejected");
            return Err(err);
        }

        let mut res = MassMatrix3::new(mass, Vector::zeros(), Vector::zeros());
        if !res.set_moi(&self.angular_inertia(mass)) {
            debug!(mass, "mass matrix rejected: invalid inertia tensor");
            return Err(Error::InvalidInertia);
        }

        Ok(res)
    }

    /// The density this object would need to weigh `mass`.
    ///
    /// Returns `None` if the mass is not strictly positive, the geometry is
    /// degenerate, or the resulting density is not a positive finite number.
    fn density_from_mass(&self, mass: Real) -> Option<Real> {
        if !(mass > 0.0) || !mass.is_finite() || self.check_geometry().is_err() {
            return None;
        }

        Some(mass / self.volume()).filter(|density| *density > 0.0 && density.is_finite())
    }

    /// Sets the density of the material so that this object weighs `mass`.
    ///
    /// The material is left unchanged on failure.
    fn set_density_from_mass(&mut self, mass: Real) -> Result<(), Error> {
        self.check_geometry()?;

        let density = self
            .density_from_mass(mass)
            .ok_or(Error::InvalidMass(mass))?;
        let mut material = self.material().clone();
        material.set_density(density);
        self.set_material(material);

        Ok(())
    }
}
