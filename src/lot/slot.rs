//! Slot management for the parking lot

use super::vehicle::Vehicle;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Physical size category of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SlotCategory {
    #[serde(alias = "compact")]
    Compact,
    #[serde(alias = "regular")]
    Regular,
}

impl SlotCategory {
    /// All categories, in reporting order
    pub const ALL: [SlotCategory; 2] = [SlotCategory::Compact, SlotCategory::Regular];

    pub fn as_str(&self) -> &'static str {
        match self {
            SlotCategory::Compact => "COMPACT",
            SlotCategory::Regular => "REGULAR",
        }
    }
}

impl fmt::Display for SlotCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(SlotCategory::Compact),
            "regular" => Ok(SlotCategory::Regular),
            other => Err(Error::InvalidArgument(format!(
                "Unknown slot category: {}",
                other
            ))),
        }
    }
}

/// Position of a slot in the layout
///
/// Both coordinates are 1-based and rendered as `R<row>-<position>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlotId {
    /// Row number (1-based)
    pub row: u32,
    /// Position within the row (1-based)
    pub position: u32,
}

impl SlotId {
    /// Create a new slot ID
    pub fn new(row: u32, position: u32) -> Self {
        Self { row, position }
    }

    /// Zero-based (row, position) indices into the layout
    pub(crate) fn indices(&self) -> Option<(usize, usize)> {
        let row = (self.row as usize).checked_sub(1)?;
        let position = (self.position as usize).checked_sub(1)?;
        Some((row, position))
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}-{}", self.row, self.position)
    }
}

impl FromStr for SlotId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidArgument(format!("Malformed slot id: {}", s));

        let rest = s.strip_prefix('R').ok_or_else(invalid)?;
        let (row, position) = rest.split_once('-').ok_or_else(invalid)?;
        let row: u32 = row.parse().map_err(|_| invalid())?;
        let position: u32 = position.parse().map_err(|_| invalid())?;

        if row == 0 || position == 0 {
            return Err(invalid());
        }

        Ok(Self { row, position })
    }
}

impl TryFrom<String> for SlotId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<SlotId> for String {
    fn from(id: SlotId) -> Self {
        id.to_string()
    }
}

/// A single parking slot
///
/// The occupant is only ever changed by the lot state while it holds the
/// lot lock, so it always agrees with the allocation records.
#[derive(Debug, Clone)]
pub struct Slot {
    id: SlotId,
    category: SlotCategory,
    occupant: Option<Vehicle>,
}

impl Slot {
    /// Create a new free slot
    pub fn new(id: SlotId, category: SlotCategory) -> Self {
        Self {
            id,
            category,
            occupant: None,
        }
    }

    pub fn id(&self) -> SlotId {
        self.id
    }

    pub fn category(&self) -> SlotCategory {
        self.category
    }

    pub fn occupant(&self) -> Option<&Vehicle> {
        self.occupant.as_ref()
    }

    pub fn is_available(&self) -> bool {
        self.occupant.is_none()
    }

    pub(crate) fn occupy(&mut self, vehicle: Vehicle) {
        debug_assert!(self.occupant.is_none(), "slot {} already occupied", self.id);
        self.occupant = Some(vehicle);
    }

    pub(crate) fn vacate(&mut self) -> Option<Vehicle> {
        self.occupant.take()
    }
}
