//! Aliases for the nalgebra types used throughout the crate.

/// The scalar type.
pub type Real = f64;

/// A 3D vector.
pub type Vector = na::Vector3<Real>;

/// A 3D point.
pub type Point = na::Point3<Real>;

/// A 3x3 matrix, used for inertia tensors and frame rotations.
pub type Matrix = na::Matrix3<Real>;

/// A 3D rotation stored as a matrix.
pub type Rotation = na::Rotation3<Real>;

/// A normalized 3D vector.
pub type Direction = na::Unit<Vector>;
