use approx::assert_relative_eq;
use nprimitives::material::{Material, MaterialType};
use nprimitives::math::Vector;
use nprimitives::volumetric::{Sphere, Volumetric};
use nprimitives::{Error, MassMatrix3};
use proptest::prelude::*;
use std::f64::consts::PI;

#[test]
fn sphere_volume() {
    let sphere = Sphere::new(2.0).unwrap();
    assert_relative_eq!(sphere.volume(), 33.5103, epsilon = 1e-4);
    assert_eq!(Sphere::new(0.0).unwrap().volume(), 0.0);
}

#[test]
fn changing_material_scales_mass() {
    let mut sphere = Sphere::new(2.0).unwrap();
    sphere.set_material(Material::new(MaterialType::Pine));
    let pine = sphere.mass_matrix().unwrap();

    sphere.set_material(Material::new(MaterialType::Styrofoam));
    let styrofoam = sphere.mass_matrix().unwrap();

    assert_eq!(sphere.radius(), 2.0);
    assert_relative_eq!(
        styrofoam.mass() / pine.mass(),
        Material::density_of(MaterialType::Styrofoam).unwrap()
            / Material::density_of(MaterialType::Pine).unwrap(),
        epsilon = 1e-12
    );
    assert_relative_eq!(
        styrofoam.ixx() / pine.ixx(),
        75.0 / 373.0,
        epsilon = 1e-12
    );
}

#[test]
fn degenerate_spheres_have_no_mass_matrix() {
    let zero = Sphere::with_material(0.0, Material::new(MaterialType::Tungsten)).unwrap();
    assert!(zero.mass_matrix().is_err());

    let weightless = Sphere::with_material(1.0, Material::from_density(0.0)).unwrap();
    assert!(weightless.mass_matrix().is_err());

    let negative = Sphere::with_material(1.0, Material::from_density(-1000.0)).unwrap();
    assert!(negative.mass_matrix().is_err());

    assert!(Sphere::new(-0.5).is_err());
}

#[test]
fn out_of_range_spheres_have_no_mass_matrix() {
    let tungsten = Material::new(MaterialType::Tungsten);

    // The volume overflows.
    let huge = Sphere::with_material(1e105, tungsten.clone()).unwrap();
    assert!(huge.mass_matrix().unwrap_err().is_geometry_error());

    // The mass is finite but the moments overflow.
    let large = Sphere::with_material(1e100, tungsten.clone()).unwrap();
    assert!(large.mass().is_finite());
    assert_eq!(large.mass_matrix(), Err(Error::InvalidInertia));

    // The volume underflows to zero.
    let tiny = Sphere::with_material(1e-110, tungsten).unwrap();
    assert!(tiny.mass_matrix().unwrap_err().is_geometry_error());
    assert_eq!(tiny.density_from_mass(1.0), None);

    let mut tiny = tiny;
    assert_eq!(tiny.set_density_from_mass(1.0), Err(Error::InvalidMass(1.0)));
    assert_eq!(tiny.material().density(), 19300.0);
}

#[test]
fn every_tabulated_material_gives_a_valid_mass_matrix() {
    for material in Material::predefined() {
        let sphere = Sphere::with_material(0.25, material.clone()).unwrap();
        let m = sphere.mass_matrix().unwrap();
        assert!(m.is_valid(), "{}", material);
        assert!(m.is_positive(), "{}", material);
    }
}

proptest! {
    #[test]
    fn solid_sphere_formula(radius in 1e-3..100.0f64, density in 1.0..20000.0f64) {
        let sphere = Sphere::with_material(radius, Material::from_density(density)).unwrap();
        let m = sphere.mass_matrix().unwrap();

        let volume = 4.0 / 3.0 * PI * radius.powi(3);
        let mass = density * volume;
        let moment = 0.4 * mass * radius * radius;

        prop_assert!((sphere.volume() - volume).abs() <= 1e-9 * volume);
        prop_assert!((m.mass() - mass).abs() <= 1e-9 * mass);
        prop_assert!((m.diagonal_moments() - Vector::repeat(moment)).amax() <= 1e-9 * moment);
        prop_assert_eq!(m.off_diagonal_moments(), Vector::zeros());
        prop_assert!(m.is_valid());

        let mut expected = MassMatrix3::zero();
        prop_assert!(expected.set_from_sphere_mass(m.mass(), radius));
        prop_assert!((expected.moi() - m.moi()).amax() <= 1e-9 * moment);
    }

    #[test]
    fn density_round_trip(radius in 1e-2..10.0f64, mass in 1e-3..1e4f64) {
        let mut sphere = Sphere::new(radius).unwrap();
        sphere.set_density_from_mass(mass).unwrap();
        prop_assert!((sphere.mass() - mass).abs() <= 1e-9 * mass);
    }
}
