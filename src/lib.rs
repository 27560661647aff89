/*!
nprimitives
===========

**nprimitives** computes the physical properties of simple solids and moves
points between geodetic and local reference frames. It is meant to be used
by robotics simulators:

* mass, center of mass and inertia tensor of shapes made of a homogeneous
  material, with a table of common material densities,
* a validated 3x3 mass matrix type,
* coordinate vectors that are either metric or spherical (latitude,
  longitude, elevation),
* conversions between geodetic coordinates, the earth-centered earth-fixed
  frame, and East-North-Up tangent frames rotated by a heading, on the WGS84
  ellipsoid, the Moon, or a custom ellipsoid.

All scalars are `f64` and the linear algebra is done with `nalgebra`.

```
use nprimitives::geodesy::{CoordinateVector3, SphericalCoordinates, SurfaceType};
use nprimitives::material::{Material, MaterialType};
use nprimitives::volumetric::{Sphere, Volumetric};
use nprimitives::Angle;

let ball = Sphere::with_material(0.5, Material::new(MaterialType::Oak)).unwrap();
let mass_matrix = ball.mass_matrix().unwrap();
assert!(mass_matrix.is_valid());

let origin = SphericalCoordinates::with_reference(
    SurfaceType::EarthWgs84,
    Angle::from_degrees(37.3877349),
    Angle::from_degrees(-122.0651166),
    32.0,
    Angle::ZERO,
)
.unwrap();
let local = CoordinateVector3::metric(100.0, 50.0, 0.0);
let geodetic = origin.spherical_from_local_position(&local).unwrap();
assert!(geodetic.is_spherical());
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]

extern crate nalgebra as na;

pub mod algebra;
pub mod config;
pub mod error;
pub mod geodesy;
pub mod material;
pub mod math;
pub mod volumetric;

pub use crate::algebra::{Angle, MassMatrix3};
pub use crate::config::SphericalCoordinatesConfig;
pub use crate::error::Error;
pub use crate::geodesy::{CoordinateType, CoordinateVector3, SphericalCoordinates, SurfaceType};
pub use crate::material::{Material, MaterialType};
pub use crate::volumetric::{Plane, Sphere, Volumetric};
