//! Vehicles competing for slots

use super::policy::Placement;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Vehicle class, which selects the placement policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    /// Fits any single slot
    #[serde(alias = "MOTORCYCLE")]
    Motorcycle,
    /// Needs a single regular slot
    #[serde(alias = "CAR", alias = "car")]
    Standard,
    /// Needs two adjacent regular slots in one row
    #[serde(alias = "VAN", alias = "van")]
    Wide,
}

impl VehicleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Motorcycle => "motorcycle",
            VehicleCategory::Standard => "standard",
            VehicleCategory::Wide => "wide",
        }
    }

    /// Placement policy used when allocating for this category
    pub fn placement(&self) -> Placement {
        match self {
            VehicleCategory::Motorcycle => Placement::AnySingle,
            VehicleCategory::Standard => Placement::RegularSingle,
            VehicleCategory::Wide => Placement::RegularPair,
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "motorcycle" | "moto" => Ok(VehicleCategory::Motorcycle),
            "standard" | "car" => Ok(VehicleCategory::Standard),
            "wide" | "van" => Ok(VehicleCategory::Wide),
            other => Err(Error::InvalidArgument(format!(
                "Unknown vehicle category: {}",
                other
            ))),
        }
    }
}

/// A vehicle requesting slots
///
/// Identity is the id alone: two vehicles with the same id are the same
/// vehicle regardless of category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    id: String,
    category: VehicleCategory,
}

impl Vehicle {
    pub fn new(id: impl Into<String>, category: VehicleCategory) -> Self {
        Self {
            id: id.into(),
            category,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn category(&self) -> VehicleCategory {
        self.category
    }
}

impl PartialEq for Vehicle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vehicle {}

impl Hash for Vehicle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identity_is_id_only() {
        let a = Vehicle::new("V1", VehicleCategory::Wide);
        let b = Vehicle::new("V1", VehicleCategory::Motorcycle);
        assert_eq!(a, b);

        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_category_aliases() {
        assert_eq!("car".parse::<VehicleCategory>().unwrap(), VehicleCategory::Standard);
        assert_eq!("VAN".parse::<VehicleCategory>().unwrap(), VehicleCategory::Wide);
        assert_eq!("Moto".parse::<VehicleCategory>().unwrap(), VehicleCategory::Motorcycle);
        assert!("truck".parse::<VehicleCategory>().is_err());

        let wide: VehicleCategory = serde_json::from_str("\"VAN\"").unwrap();
        assert_eq!(wide, VehicleCategory::Wide);
    }

    #[test]
    fn test_category_placement() {
        assert_eq!(VehicleCategory::Motorcycle.placement(), Placement::AnySingle);
        assert_eq!(VehicleCategory::Standard.placement(), Placement::RegularSingle);
        assert_eq!(VehicleCategory::Wide.placement(), Placement::RegularPair);
    }
}
