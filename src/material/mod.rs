//! Material data structures and the density table.

pub use self::material::Material;
pub use self::material_type::MaterialType;

mod material;
mod material_type;
