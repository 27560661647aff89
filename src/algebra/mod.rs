//! Algebraic entities: angles and mass matrices.

pub use self::angle::Angle;
pub use self::mass_matrix3::{MassMatrix3, DEFAULT_TOLERANCE};

mod angle;
mod mass_matrix3;
