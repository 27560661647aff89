use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::math::Real;

/// The kinds of materials with a tabulated density.
///
/// `Unknown` is the kind of a default material and `Custom` the kind of a
/// material built from an explicit density. Neither has a table entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum MaterialType {
    /// Styrofoam, 75 kg/m³.
    Styrofoam,
    /// Pine, 373 kg/m³.
    Pine,
    /// Wood, 700 kg/m³.
    Wood,
    /// Oak, 710 kg/m³.
    Oak,
    /// Plastic, 1175 kg/m³.
    Plastic,
    /// Concrete, 2000 kg/m³.
    Concrete,
    /// Aluminum, 2700 kg/m³.
    Aluminum,
    /// Steel alloy, 7600 kg/m³.
    SteelAlloy,
    /// Stainless steel, 7800 kg/m³.
    SteelStainless,
    /// Iron, 7870 kg/m³.
    Iron,
    /// Brass, 8600 kg/m³.
    Brass,
    /// Copper, 8940 kg/m³.
    Copper,
    /// Tungsten, 19300 kg/m³.
    Tungsten,
    /// No material.
    #[default]
    Unknown,
    /// A material defined by its density alone.
    Custom,
}

/// Name and density (kg/m³) of each tabulated material.
///
/// Entries are sorted by increasing density.
const MATERIAL_DATA: [(MaterialType, &str, Real); 13] = [
    (MaterialType::Styrofoam, "styrofoam", 75.0),
    (MaterialType::Pine, "pine", 373.0),
    (MaterialType::Wood, "wood", 700.0),
    (MaterialType::Oak, "oak", 710.0),
    (MaterialType::Plastic, "plastic", 1175.0),
    (MaterialType::Concrete, "concrete", 2000.0),
    (MaterialType::Aluminum, "aluminum", 2700.0),
    (MaterialType::SteelAlloy, "steel_alloy", 7600.0),
    (MaterialType::SteelStainless, "steel_stainless", 7800.0),
    (MaterialType::Iron, "iron", 7870.0),
    (MaterialType::Brass, "brass", 8600.0),
    (MaterialType::Copper, "copper", 8940.0),
    (MaterialType::Tungsten, "tungsten", 19300.0),
];

impl MaterialType {
    /// Every tabulated material kind, by increasing density.
    pub const ALL: [MaterialType; 13] = [
        MaterialType::Styrofoam,
        MaterialType::Pine,
        MaterialType::Wood,
        MaterialType::Oak,
        MaterialType::Plastic,
        MaterialType::Concrete,
        MaterialType::Aluminum,
        MaterialType::SteelAlloy,
        MaterialType::SteelStainless,
        MaterialType::Iron,
        MaterialType::Brass,
        MaterialType::Copper,
        MaterialType::Tungsten,
    ];

    fn entry(self) -> Option<&'static (MaterialType, &'static str, Real)> {
        MATERIAL_DATA.iter().find(|entry| entry.0 == self)
    }

    /// The lowercase name of this material, or an empty string for `Unknown` and `Custom`.
    pub fn name(self) -> &'static str {
        self.entry().map(|entry| entry.1).unwrap_or("")
    }

    /// The tabulated density in kg/m³, or `None` for `Unknown` and `Custom`.
    pub fn density(self) -> Option<Real> {
        self.entry().map(|entry| entry.2)
    }

    /// The tabulated kind whose density is closest to `density`, if any lies within `epsilon`.
    pub fn nearest_to_density(density: Real, epsilon: Real) -> Option<MaterialType> {
        MATERIAL_DATA
            .iter()
            .map(|entry| (entry.0, (entry.2 - density).abs()))
            .filter(|(_, diff)| *diff < epsilon)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(kind, _)| kind)
    }
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterialType::Unknown => write!(f, "unknown"),
            MaterialType::Custom => write!(f, "custom"),
            _ => write!(f, "{}", self.name()),
        }
    }
}

impl FromStr for MaterialType {
    type Err = Error;

    /// Parses a tabulated material name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();

        MATERIAL_DATA
            .iter()
            .find(|entry| entry.1 == lower)
            .map(|entry| entry.0)
            .ok_or_else(|| Error::UnknownMaterial(s.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::MaterialType;
    use crate::error::Error;

    #[test]
    fn table_lookup() {
        assert_eq!(MaterialType::Pine.density(), Some(373.0));
        assert_eq!(MaterialType::Tungsten.density(), Some(19300.0));
        assert_eq!(MaterialType::SteelStainless.name(), "steel_stainless");
        assert_eq!(MaterialType::Unknown.density(), None);
        assert_eq!(MaterialType::Custom.density(), None);
        assert_eq!(MaterialType::Unknown.name(), "");
        assert_eq!(MaterialType::default(), MaterialType::Unknown);

        for kind in MaterialType::ALL.iter() {
            assert!(kind.density().unwrap() > 0.0);
        }
    }

    #[test]
    fn parse_names() {
        assert_eq!("oak".parse::<MaterialType>(), Ok(MaterialType::Oak));
        assert_eq!("STEEL_ALLOY".parse::<MaterialType>(), Ok(MaterialType::SteelAlloy));
        assert_eq!(
            "unobtainium".parse::<MaterialType>(),
            Err(Error::UnknownMaterial("unobtainium".to_string()))
        );
        assert!("unknown".parse::<MaterialType>().is_err());
        assert_eq!(MaterialType::Brass.to_string(), "brass");
        assert_eq!(MaterialType::Custom.to_string(), "custom");
    }

    #[test]
    fn nearest_density() {
        assert_eq!(MaterialType::nearest_to_density(705.0, 10.0), Some(MaterialType::Wood));
        assert_eq!(MaterialType::nearest_to_density(706.0, 10.0), Some(MaterialType::Oak));
        assert_eq!(MaterialType::nearest_to_density(19000.0, 10.0), None);
    }
}
