#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::material::Material;
use crate::math::{Matrix, Real, Rotation, Vector};
use crate::volumetric::{ball_unit_angular_inertia, ball_volume};

/// The relative tolerance used by the validity checks when none is given.
pub const DEFAULT_TOLERANCE: Real = 10.0;

/// Relative tolerance below which product moments are considered zero by
/// [`MassMatrix3::principal_moments`].
const PRINCIPAL_MOMENTS_TOLERANCE: Real = 1.0e-6;

/// The mass of a body together with its rotational inertia about its center of mass.
///
/// The inertia tensor is symmetric and stored as its three diagonal moments
/// `(Ixx, Iyy, Izz)` and its three product moments `(Ixy, Ixz, Iyz)`. Nothing
/// prevents this structure from holding a non-physical tensor: use
/// [`MassMatrix3::is_valid`] to check it. Every setter returns the validity of
/// the matrix after the update.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MassMatrix3 {
    mass: Real,
    diagonal: Vector,
    off_diagonal: Vector,
}

impl MassMatrix3 {
    /// Creates a mass matrix from its mass, diagonal moments and product moments.
    pub fn new(mass: Real, diagonal: Vector, off_diagonal: Vector) -> Self {
        MassMatrix3 {
            mass,
            diagonal,
            off_diagonal,
        }
    }

    /// A mass matrix with zero mass and zero inertia.
    pub fn zero() -> Self {
        MassMatrix3::new(0.0, Vector::zeros(), Vector::zeros())
    }

    /// The mass.
    #[inline]
    pub fn mass(&self) -> Real {
        self.mass
    }

    /// Sets the mass.
    pub fn set_mass(&mut self, mass: Real) -> bool {
        self.mass = mass;
        self.is_valid()
    }

    /// The diagonal moments `(Ixx, Iyy, Izz)`.
    #[inline]
    pub fn diagonal_moments(&self) -> Vector {
        self.diagonal
    }

    /// Sets the diagonal moments `(Ixx, Iyy, Izz)`.
    pub fn set_diagonal_moments(&mut self, diagonal: Vector) -> bool {
        self.diagonal = diagonal;
        self.is_valid()
    }

    /// The product moments `(Ixy, Ixz, Iyz)`.
    #[inline]
    pub fn off_diagonal_moments(&self) -> Vector {
        self.off_diagonal
    }

    /// Sets the product moments `(Ixy, Ixz, Iyz)`.
    pub fn set_off_diagonal_moments(&mut self, off_diagonal: Vector) -> bool {
        self.off_diagonal = off_diagonal;
        self.is_valid()
    }

    #[inline]
    pub fn ixx(&self) -> Real {
        self.diagonal.x
    }

    #[inline]
    pub fn iyy(&self) -> Real {
        self.diagonal.y
    }

    #[inline]
    pub fn izz(&self) -> Real {
        self.diagonal.z
    }

    #[inline]
    pub fn ixy(&self) -> Real {
        self.off_diagonal.x
    }

    #[inline]
    pub fn ixz(&self) -> Real {
        self.off_diagonal.y
    }

    #[inline]
    pub fn iyz(&self) -> Real {
        self.off_diagonal.z
    }

    pub fn set_ixx(&mut self, v: Real) -> bool {
        self.diagonal.x = v;
        self.is_valid()
    }

    pub fn set_iyy(&mut self, v: Real) -> bool {
        self.diagonal.y = v;
        self.is_valid()
    }

    pub fn set_izz(&mut self, v: Real) -> bool {
        self.diagonal.z = v;
        self.is_valid()
    }

    pub fn set_ixy(&mut self, v: Real) -> bool {
        self.off_diagonal.x = v;
        self.is_valid()
    }

    pub fn set_ixz(&mut self, v: Real) -> bool {
        self.off_diagonal.y = v;
        self.is_valid()
    }

    pub fn set_iyz(&mut self, v: Real) -> bool {
        self.off_diagonal.z = v;
        self.is_valid()
    }

    /// The full, symmetric, moment of inertia matrix.
    pub fn moi(&self) -> Matrix {
        let d = &self.diagonal;
        let o = &self.off_diagonal;

        Matrix::new(
            d.x, o.x, o.y, //
            o.x, d.y, o.z, //
            o.y, o.z, d.z,
        )
    }

    /// Sets the moment of inertia matrix.
    ///
    /// Only the symmetric part of `moi` is kept: each product moment is the
    /// average of the two corresponding off-diagonal entries.
    pub fn set_moi(&mut self, moi: &Matrix) -> bool {
        self.diagonal = moi.diagonal();
        self.off_diagonal = Vector::new(
            0.5 * (moi[(0, 1)] + moi[(1, 0)]),
            0.5 * (moi[(0, 2)] + moi[(2, 0)]),
            0.5 * (moi[(1, 2)] + moi[(2, 1)]),
        );
        self.is_valid()
    }

    /// This mass matrix expressed in a frame rotated by `rotation`.
    pub fn rotated(&self, rotation: &Rotation) -> Self {
        let rot = rotation.matrix();
        let mut res = MassMatrix3::new(self.mass, Vector::zeros(), Vector::zeros());
        let _ = res.set_moi(&(rot * self.moi() * rot.transpose()));
        res
    }

    /// The absolute error allowed by the validity checks of this matrix.
    pub fn epsilon(&self, tolerance: Real) -> Real {
        Self::epsilon_for(&self.diagonal, tolerance)
    }

    /// The absolute error allowed when checking the given moments.
    ///
    /// This is `tolerance` machine epsilons of the largest moment of inertia
    /// compatible with `moments`, bounded above by half of their trace.
    pub fn epsilon_for(moments: &Vector, tolerance: Real) -> Real {
        let max_possible_moi = 0.5 * moments.sum().abs();
        tolerance * Real::EPSILON * max_possible_moi
    }

    /// Whether the mass is non-negative and the inertia tensor positive semi-definite.
    pub fn is_near_positive(&self) -> bool {
        self.is_near_positive_with_tolerance(DEFAULT_TOLERANCE)
    }

    /// Same as [`MassMatrix3::is_near_positive`] with an explicit tolerance.
    pub fn is_near_positive_with_tolerance(&self, tolerance: Real) -> bool {
        let epsilon = self.epsilon(tolerance);

        // Sylvester's criterion on the leading principal minors.
        self.mass >= 0.0
            && self.ixx() + epsilon >= 0.0
            && self.ixx() * self.iyy() - self.ixy().powi(2) + epsilon >= 0.0
            && self.moi().determinant() + epsilon >= 0.0
    }

    /// Whether the mass is positive and the inertia tensor positive definite.
    pub fn is_positive(&self) -> bool {
        self.is_positive_with_tolerance(DEFAULT_TOLERANCE)
    }

    /// Same as [`MassMatrix3::is_positive`] with an explicit tolerance.
    pub fn is_positive_with_tolerance(&self, tolerance: Real) -> bool {
        let epsilon = self.epsilon(tolerance);

        self.mass > 0.0
            && self.ixx() + epsilon > 0.0
            && self.ixx() * self.iyy() - self.ixy().powi(2) + epsilon > 0.0
            && self.moi().determinant() + epsilon > 0.0
    }

    /// Whether the mass and every moment are finite.
    pub fn is_finite(&self) -> bool {
        self.mass.is_finite()
            && self.diagonal.iter().all(|e| e.is_finite())
            && self.off_diagonal.iter().all(|e| e.is_finite())
    }

    /// Whether this describes a physically possible rigid body.
    ///
    /// All values must be finite, the tensor must be positive semi-definite
    /// and its principal moments must satisfy the triangle inequality.
    pub fn is_valid(&self) -> bool {
        self.is_valid_with_tolerance(DEFAULT_TOLERANCE)
    }

    /// Same as [`MassMatrix3::is_valid`] with an explicit tolerance.
    pub fn is_valid_with_tolerance(&self, tolerance: Real) -> bool {
        self.is_finite()
            && self.is_near_positive_with_tolerance(tolerance)
            && Self::valid_moments(&self.principal_moments(), tolerance)
    }

    /// Returns `Err(Error::InvalidInertia)` if this matrix is not valid.
    pub fn validate(&self) -> Result<(), Error> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::InvalidInertia)
        }
    }

    /// Whether principal moments are non-negative and satisfy the triangle inequality.
    pub fn valid_moments(moments: &Vector, tolerance: Real) -> bool {
        let epsilon = Self::epsilon_for(moments, tolerance);

        moments.x + epsilon >= 0.0
            && moments.y + epsilon >= 0.0
            && moments.z + epsilon >= 0.0
            && moments.x + moments.y + epsilon >= moments.z
            && moments.y + moments.z + epsilon >= moments.x
            && moments.z + moments.x + epsilon >= moments.y
    }

    /// The principal moments of inertia, i.e., the eigenvalues of the inertia tensor.
    ///
    /// If the product moments are negligible the diagonal moments are returned
    /// in their current order. Otherwise the eigenvalues are sorted in
    /// increasing order.
    pub fn principal_moments(&self) -> Vector {
        if self.has_negligible_products() {
            return self.diagonal;
        }

        let eigenvalues = self.moi().symmetric_eigenvalues();
        let mut moments = [eigenvalues[0], eigenvalues[1], eigenvalues[2]];
        moments.sort_by(|a, b| a.total_cmp(b));

        Vector::new(moments[0], moments[1], moments[2])
    }

    /// The rotation from the principal axes frame to the frame of this matrix.
    ///
    /// Its columns are the principal axes, in the order of
    /// [`MassMatrix3::principal_moments`]: `R * diag(principal_moments) * Rᵀ`
    /// is the moment of inertia matrix.
    pub fn principal_axes_offset(&self) -> Rotation {
        if self.has_negligible_products() {
            return Rotation::identity();
        }

        let eigen = self.moi().symmetric_eigen();
        let mut order = [0usize, 1, 2];
        order.sort_by(|&a, &b| eigen.eigenvalues[a].total_cmp(&eigen.eigenvalues[b]));

        let mut axes = Matrix::from_columns(&[
            eigen.eigenvectors.column(order[0]).into_owned(),
            eigen.eigenvectors.column(order[1]).into_owned(),
            eigen.eigenvectors.column(order[2]).into_owned(),
        ]);

        // Keep the basis right-handed.
        if axes.determinant() < 0.0 {
            let flipped = -axes.column(2);
            axes.set_column(2, &flipped);
        }

        Rotation::from_matrix_unchecked(axes)
    }

    /// The box of uniform density with the same mass matrix.
    ///
    /// Returns the side lengths along the principal axes and the rotation of
    /// the box, see [`MassMatrix3::principal_axes_offset`]. Returns `None` if
    /// this matrix is not positive definite or not valid.
    pub fn equivalent_box(&self) -> Option<(Vector, Rotation)> {
        if !self.is_positive() || !self.is_valid() {
            return None;
        }

        let moments = self.principal_moments();
        let side = |a: Real, b: Real, c: Real| (6.0 * (b + c - a) / self.mass).max(0.0).sqrt();
        let size = Vector::new(
            side(moments.x, moments.y, moments.z),
            side(moments.y, moments.z, moments.x),
            side(moments.z, moments.x, moments.y),
        );

        Some((size, self.principal_axes_offset()))
    }

    fn has_negligible_products(&self) -> bool {
        let tol = PRINCIPAL_MOMENTS_TOLERANCE * self.diagonal.max();
        self.off_diagonal.iter().all(|e| e.abs() <= tol.abs())
    }

    /// Sets this to the mass matrix of a uniform solid sphere made of `material`.
    ///
    /// Returns `false`, leaving `self` unchanged, if the density or the radius
    /// is not strictly positive.
    pub fn set_from_sphere(&mut self, material: &Material, radius: Real) -> bool {
        if !(material.density() > 0.0) || !(radius > 0.0) {
            return false;
        }

        self.set_from_sphere_mass(material.density() * ball_volume(radius), radius)
    }

    /// Sets this to the mass matrix of a uniform solid sphere with the given mass.
    ///
    /// Returns `false`, leaving `self` unchanged, if the mass or the radius is
    /// not strictly positive.
    pub fn set_from_sphere_mass(&mut self, mass: Real, radius: Real) -> bool {
        if !(mass > 0.0) || !(radius > 0.0) {
            return false;
        }

        self.mass = mass;
        self.set_from_sphere_radius(radius)
    }

    /// Sets the inertia to that of a uniform solid sphere, keeping the current mass.
    pub fn set_from_sphere_radius(&mut self, radius: Real) -> bool {
        if !(self.mass > 0.0) || !(radius > 0.0) {
            return false;
        }

        self.set_moi(&(ball_unit_angular_inertia(radius) * self.mass))
    }
}
