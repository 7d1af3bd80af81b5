//! Placement policies
//!
//! Each vehicle category maps to one [`Placement`]. A placement is a window
//! width plus a predicate on slot category; the search is the same for all of
//! them: rows in order, windows within a row from the lowest position, first
//! window whose slots are all free and acceptable wins. Windows never cross a
//! row boundary.

use super::layout::Layout;
use super::slot::{Slot, SlotCategory, SlotId};

/// Scan-and-claim strategy for a vehicle category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// One free slot of any category
    AnySingle,
    /// One free regular slot
    RegularSingle,
    /// Two adjacent free regular slots in the same row
    RegularPair,
}

impl Placement {
    /// Number of contiguous slots this placement claims
    pub fn width(&self) -> usize {
        match self {
            Placement::AnySingle | Placement::RegularSingle => 1,
            Placement::RegularPair => 2,
        }
    }

    /// Whether a slot of this category may be part of the placement
    pub fn accepts(&self, category: SlotCategory) -> bool {
        match self {
            Placement::AnySingle => true,
            Placement::RegularSingle | Placement::RegularPair => category == SlotCategory::Regular,
        }
    }

    fn fits(&self, slot: &Slot) -> bool {
        slot.is_available() && self.accepts(slot.category())
    }

    /// Find the first feasible window, row-major then position-major
    ///
    /// Returns the slot ids in ascending position order, or `None` when no
    /// row has a feasible window.
    pub fn find(&self, layout: &Layout) -> Option<Vec<SlotId>> {
        let width = self.width();
        layout.rows().iter().find_map(|row| {
            row.windows(width)
                .find(|window| window.iter().all(|slot| self.fits(slot)))
                .map(|window| window.iter().map(Slot::id).collect())
        })
    }
}
