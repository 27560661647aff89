//! Volume and inertia tensor computation.

#[doc(inline)]
pub use self::volumetric::Volumetric;

pub use self::plane::Plane;
pub use self::volumetric_ball::{
    ball_area, ball_center_of_mass, ball_unit_angular_inertia, ball_volume, Sphere,
};

#[doc(hidden)]
pub mod volumetric;

mod plane;
mod volumetric_ball;
