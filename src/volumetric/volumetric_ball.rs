use std::f64::consts::PI;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::material::Material;
use crate::math::{Matrix, Point, Real};
use crate::volumetric::{Plane, Volumetric};

/// The volume of a ball.
#[inline]
pub fn ball_volume(radius: Real) -> Real {
    PI * radius * radius * radius * 4.0 / 3.0
}

/// The area of a ball.
#[inline]
pub fn ball_area(radius: Real) -> Real {
    PI * radius * radius * 4.0
}

/// The center of mass of a ball.
#[inline]
pub fn ball_center_of_mass() -> Point {
    Point::origin()
}

/// The unit angular inertia of a ball.
#[inline]
pub fn ball_unit_angular_inertia(radius: Real) -> Matrix {
    Matrix::from_diagonal_element(radius * radius * 2.0 / 5.0)
}

fn check_radius(radius: Real) -> Result<(), Error> {
    if radius >= 0.0 && radius.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid_geometry(format!("sphere radius {}", radius)))
    }
}

/// A solid sphere centered at the origin of its local frame.
///
/// The radius is always finite and non-negative. A zero-radius sphere is a
/// valid value with zero volume, but has no mass matrix.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Sphere {
    radius: Real,
    material: Material,
}

impl Sphere {
    /// Creates a sphere of the given radius made of the default material.
    pub fn new(radius: Real) -> Result<Self, Error> {
        Self::with_material(radius, Material::default())
    }

    /// Creates a sphere of the given radius and material.
    pub fn with_material(radius: Real, material: Material) -> Result<Self, Error> {
        check_radius(radius)?;
        Ok(Sphere { radius, material })
    }

    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Sets the radius, leaving the sphere unchanged if it is negative or not finite.
    pub fn set_radius(&mut self, radius: Real) -> Result<(), Error> {
        check_radius(radius)?;
        self.radius = radius;
        Ok(())
    }

    /// The volume of the part of this sphere below `plane`.
    ///
    /// The plane is expressed in the local frame of the sphere.
    pub fn volume_below(&self, plane: &Plane) -> Real {
        let r = self.radius;
        let dist = plane.distance(&Point::origin());

        if dist < -r {
            self.volume()
        } else if dist > r {
            0.0
        } else {
            // Spherical cap of height h.
            let h = r - dist;
            PI * h * h * (3.0 * r - h) / 3.0
        }
    }

    /// The centroid of the part of this sphere below `plane`.
    ///
    /// Returns `None` if no volume lies below the plane: the sphere is above or
    /// tangent to it, or its radius is zero.
    pub fn center_of_volume_below(&self, plane: &Plane) -> Option<Point> {
        let r = self.radius;
        let dist = plane.distance(&Point::origin());

        if !(r > 0.0) || dist >= r {
            return None;
        }

        if dist <= -r {
            return Some(Point::origin());
        }

        let h = r - dist;
        let numerator = 2.0 * r - h;
        let z = 3.0 * numerator * numerator / (4.0 * (3.0 * r - h));

        Some(Point::from(plane.normal().into_inner() * -z))
    }
}

impl Volumetric for Sphere {
    fn area(&self) -> Real {
        ball_area(self.radius)
    }

    fn volume(&self) -> Real {
        ball_volume(self.radius)
    }

    fn center_of_mass(&self) -> Point {
        ball_center_of_mass()
    }

    fn unit_angular_inertia(&self) -> Matrix {
        ball_unit_angular_inertia(self.radius)
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    fn check_geometry(&self) -> Result<(), Error> {
        if self.radius > 0.0 {
            Ok(())
        } else {
            Err(Error::invalid_geometry(format!(
                "sphere radius {} encloses no volume",
                self.radius
            )))
        }
    }
}

#[cfg(test)]
mod test {
    use super::Sphere;
    use crate::algebra::MassMatrix3;
    use crate::error::Error;
    use crate::material::{Material, MaterialType};
    use crate::math::{Point, Vector};
    use crate::volumetric::{Plane, Volumetric};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn construction() {
        let sphere = Sphere::default();
        assert_eq!(sphere.radius(), 0.0);
        assert_eq!(sphere.material(), &Material::default());
        assert_eq!(sphere.volume(), 0.0);

        assert!(Sphere::new(-1.0).unwrap_err().is_geometry_error());
        assert!(Sphere::new(f64::NAN).is_err());
        assert!(Sphere::new(f64::INFINITY).is_err());

        let mut sphere = Sphere::new(1.5).unwrap();
        assert!(sphere.set_radius(-2.0).is_err());
        assert_eq!(sphere.radius(), 1.5);
        assert!(sphere.set_radius(3.0).is_ok());
        assert_eq!(sphere.radius(), 3.0);
    }

    #[test]
    fn equality() {
        let wood = Material::new(MaterialType::Wood);
        let a = Sphere::with_material(1.0, wood.clone()).unwrap();
        assert_eq!(a, Sphere::with_material(1.0, Material::from_density(700.0)).unwrap());
        assert_ne!(a, Sphere::with_material(1.0 + 1e-12, wood).unwrap());
        assert_ne!(a, Sphere::new(1.0).unwrap());
    }

    #[test]
    fn volume_and_area() {
        let sphere = Sphere::new(2.0).unwrap();
        assert_relative_eq!(sphere.volume(), 33.510321638291124, epsilon = 1e-12);
        assert_relative_eq!(sphere.volume(), 4.0 / 3.0 * PI * 8.0, epsilon = 1e-12);
        assert_relative_eq!(sphere.area(), 16.0 * PI, epsilon = 1e-12);
        assert_eq!(sphere.center_of_mass(), Point::origin());
    }

    #[test]
    fn mass_matrix_follows_material() {
        let mut sphere = Sphere::with_material(2.0, Material::new(MaterialType::Pine)).unwrap();
        let pine = sphere.mass_matrix().unwrap();
        assert_relative_eq!(pine.mass(), 373.0 * sphere.volume(), epsilon = 1e-9);
        assert_relative_eq!(
            pine.diagonal_moments(),
            Vector::repeat(0.4 * pine.mass() * 4.0),
            epsilon = 1e-9
        );
        assert_eq!(pine.off_diagonal_moments(), Vector::zeros());

        sphere.set_material(Material::new(MaterialType::Styrofoam));
        let styrofoam = sphere.mass_matrix().unwrap();
        assert_relative_eq!(styrofoam.mass() / pine.mass(), 75.0 / 373.0, epsilon = 1e-12);

        let mut expected = MassMatrix3::zero();
        assert!(expected.set_from_sphere(&Material::new(MaterialType::Styrofoam), 2.0));
        assert_relative_eq!(styrofoam.mass(), expected.mass(), epsilon = 1e-9);
        assert_relative_eq!(styrofoam.moi(), expected.moi(), epsilon = 1e-9);
    }

    #[test]
    fn mass_matrix_failures() {
        let zero = Sphere::with_material(0.0, Material::new(MaterialType::Iron)).unwrap();
        assert!(zero.mass_matrix().unwrap_err().is_geometry_error());

        let unknown = Sphere::new(1.0).unwrap();
        assert_eq!(unknown.mass_matrix(), Err(Error::InvalidDensity(0.0)));

        let negative = Sphere::with_material(1.0, Material::from_density(-5.0)).unwrap();
        assert_eq!(negative.mass_matrix(), Err(Error::InvalidDensity(-5.0)));
    }

    #[test]
    fn density_from_mass() {
        let mut sphere = Sphere::new(1.0).unwrap();
        let volume = sphere.volume();

        assert_relative_eq!(sphere.density_from_mass(2.0 * volume).unwrap(), 2.0, epsilon = 1e-12);
        assert_eq!(sphere.density_from_mass(0.0), None);
        assert_eq!(sphere.density_from_mass(-1.0), None);
        assert_eq!(Sphere::default().density_from_mass(1.0), None);

        assert_eq!(sphere.set_density_from_mass(-1.0), Err(Error::InvalidMass(-1.0)));
        assert_eq!(sphere.material().density(), 0.0);

        sphere.set_density_from_mass(700.0 * volume).unwrap();
        assert_relative_eq!(sphere.material().density(), 700.0, epsilon = 1e-9);
        assert_relative_eq!(sphere.mass_matrix().unwrap().mass(), 700.0 * volume, epsilon = 1e-9);
    }

    #[test]
    fn volume_below() {
        let r = 2.0;
        let sphere = Sphere::new(r).unwrap();

        // Fully below.
        let plane = Plane::new(Vector::z(), 2.0 * r).unwrap();
        assert_relative_eq!(sphere.volume_below(&plane), sphere.volume(), epsilon = 1e-3);
        let plane = Plane::new(-Vector::z(), 2.0 * r).unwrap();
        assert_relative_eq!(sphere.volume_below(&plane), sphere.volume(), epsilon = 1e-3);

        // Fully above.
        let plane = Plane::new(Vector::z(), -2.0 * r).unwrap();
        assert_relative_eq!(sphere.volume_below(&plane), 0.0, epsilon = 1e-3);

        // Hemisphere.
        let plane = Plane::new(Vector::z(), 0.0).unwrap();
        assert_relative_eq!(sphere.volume_below(&plane), sphere.volume() / 2.0, epsilon = 1e-3);

        let plane = Plane::new(Vector::z(), 0.5).unwrap();
        assert_relative_eq!(sphere.volume_below(&plane), 22.90745, epsilon = 1e-3);
        let plane = Plane::new(Vector::z(), -0.5).unwrap();
        assert_relative_eq!(sphere.volume_below(&plane), 10.60288, epsilon = 1e-3);
    }

    #[test]
    fn center_of_volume_below() {
        let r = 2.0;
        let sphere = Sphere::new(r).unwrap();

        let plane = Plane::new(Vector::z(), 2.0 * r).unwrap();
        assert_eq!(sphere.center_of_volume_below(&plane), Some(Point::origin()));

        let plane = Plane::new(Vector::z(), -2.0 * r).unwrap();
        assert_eq!(sphere.center_of_volume_below(&plane), None);

        // Centroid of a hemisphere lies 3r/8 below the cut.
        let plane = Plane::new(Vector::z(), 0.0).unwrap();
        let center = sphere.center_of_volume_below(&plane).unwrap();
        assert_relative_eq!(center, Point::new(0.0, 0.0, -3.0 * r / 8.0), epsilon = 1e-12);
    }

    #[test]
    fn center_of_volume_below_tangent_plane() {
        let sphere = Sphere::new(1.0).unwrap();

        // Touching the bottom of the sphere: nothing is below.
        let plane = Plane::new(Vector::z(), -1.0).unwrap();
        assert_eq!(sphere.volume_below(&plane), 0.0);
        assert_eq!(sphere.center_of_volume_below(&plane), None);

        // Touching the top: the whole sphere is below.
        let plane = Plane::new(Vector::z(), 1.0).unwrap();
        assert_relative_eq!(sphere.volume_below(&plane), sphere.volume(), epsilon = 1e-12);
        assert_eq!(sphere.center_of_volume_below(&plane), Some(Point::origin()));
    }

    #[test]
    fn center_of_volume_below_zero_radius() {
        let sphere = Sphere::new(0.0).unwrap();

        for offset in [-1.0, 0.0, 1.0] {
            let plane = Plane::new(Vector::z(), offset).unwrap();
            assert_eq!(sphere.volume_below(&plane), 0.0);
            assert_eq!(sphere.center_of_volume_below(&plane), None);
        }
    }
}
