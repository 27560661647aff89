use std::fmt;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::material::MaterialType;
use crate::math::Real;

/// A homogeneous material, described by its density.
///
/// Two materials are equal if their densities are equal, whatever their kind
/// and name: a `Custom` material of 700 kg/m³ is the same material as `Wood`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Material {
    kind: MaterialType,
    name: String,
    density: Real,
}

impl Material {
    /// Creates a material of the given kind, its density taken from the table.
    ///
    /// `Unknown` and `Custom` have no tabulated density and get a zero density.
    pub fn new(kind: MaterialType) -> Self {
        Material {
            kind,
            name: kind.name().to_string(),
            density: kind.density().unwrap_or(0.0),
        }
    }

    /// Creates a `Custom` material with the given density in kg/m³.
    pub fn from_density(density: Real) -> Self {
        Material {
            kind: MaterialType::Custom,
            name: String::new(),
            density,
        }
    }

    /// Creates a material from a tabulated name such as `"pine"`, ignoring case.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        name.parse::<MaterialType>().map(Material::new)
    }

    /// The tabulated density of `kind`, or `None` for `Unknown` and `Custom`.
    #[inline]
    pub fn density_of(kind: MaterialType) -> Option<Real> {
        kind.density()
    }

    /// All the tabulated materials, by increasing density.
    pub fn predefined() -> impl Iterator<Item = Material> {
        MaterialType::ALL.into_iter().map(Material::new)
    }

    /// The kind of this material.
    #[inline]
    pub fn kind(&self) -> MaterialType {
        self.kind
    }

    /// Sets the kind of this material without touching its name or density.
    pub fn set_kind(&mut self, kind: MaterialType) {
        self.kind = kind;
    }

    /// The name of this material.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The density of this material in kg/m³.
    #[inline]
    pub fn density(&self) -> Real {
        self.density
    }

    pub fn set_density(&mut self, density: Real) {
        self.density = density;
    }

    /// Replaces this material by the tabulated one of closest density, if any
    /// lies within `epsilon` of `density`.
    ///
    /// Returns `false` and leaves `self` unchanged if there is none.
    pub fn set_to_nearest_density(&mut self, density: Real, epsilon: Real) -> bool {
        match MaterialType::nearest_to_density(density, epsilon) {
            Some(kind) => {
                *self = Material::new(kind);
                true
            }
            None => false,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::new(MaterialType::Unknown)
    }
}

impl From<MaterialType> for Material {
    fn from(kind: MaterialType) -> Self {
        Material::new(kind)
    }
}

impl PartialEq for Material {
    fn eq(&self, other: &Self) -> bool {
        self.density == other.density
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} kg/m³)", self.kind, self.density)
    }
}
