//! Occupancy status aggregation
//!
//! A single read-only pass over the layout. Wide-vehicle accounting looks at
//! slot occupants directly rather than the allocation records, so the result
//! only depends on what the slots say.

use super::layout::Layout;
use super::slot::{Slot, SlotCategory};
use super::vehicle::VehicleCategory;
use serde::Serialize;
use std::collections::HashSet;

/// Slot count for one category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub total: usize,
    pub available: usize,
}

impl CategoryCount {
    /// Full means no free slot left; a category with no slots is never full
    pub fn is_full(&self) -> bool {
        self.available == 0 && self.total > 0
    }

    fn record(&mut self, slot: &Slot) {
        self.total += 1;
        if slot.is_available() {
            self.available += 1;
        }
    }
}

/// Per-row occupancy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowSummary {
    /// Row number (1-based)
    pub row: usize,
    pub total_spots: usize,
    pub available_spots: usize,
    pub compact_available: usize,
    pub regular_available: usize,
    #[serde(rename = "occupiedSpotsByWide")]
    pub occupied_by_wide: usize,
}

/// Snapshot of lot occupancy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LotStatus {
    pub total_spots: usize,
    pub available_spots: usize,
    pub occupied_spots: usize,
    pub compact_spots: usize,
    pub compact_available: usize,
    pub regular_spots: usize,
    pub regular_available: usize,
    pub is_full: bool,
    pub is_empty: bool,
    pub is_compact_full: bool,
    pub is_regular_full: bool,
    /// Slots held by wide vehicles
    #[serde(rename = "occupiedSpotsByWide")]
    pub occupied_by_wide: usize,
    /// Distinct wide vehicles holding at least one slot
    #[serde(rename = "distinctWideRequesterCount")]
    pub wide_vehicles: usize,
    #[serde(rename = "perRowSummary")]
    pub rows: Vec<RowSummary>,
}

impl LotStatus {
    /// Aggregate the current state of a layout
    pub fn collect(layout: &Layout) -> Self {
        let mut compact = CategoryCount::default();
        let mut regular = CategoryCount::default();
        let mut occupied_by_wide = 0;
        let mut wide_ids: HashSet<&str> = HashSet::new();
        let mut rows = Vec::with_capacity(layout.rows().len());

        for (index, row) in layout.rows().iter().enumerate() {
            let mut row_compact = CategoryCount::default();
            let mut row_regular = CategoryCount::default();
            let mut row_wide = 0;

            for slot in row {
                match slot.category() {
                    SlotCategory::Compact => row_compact.record(slot),
                    SlotCategory::Regular => row_regular.record(slot),
                }

                if let Some(vehicle) = slot.occupant() {
                    if vehicle.category() == VehicleCategory::Wide {
                        row_wide += 1;
                        wide_ids.insert(vehicle.id());
                    }
                }
            }

            rows.push(RowSummary {
                row: index + 1,
                total_spots: row.len(),
                available_spots: row_compact.available + row_regular.available,
                compact_available: row_compact.available,
                regular_available: row_regular.available,
                occupied_by_wide: row_wide,
            });

            compact.total += row_compact.total;
            compact.available += row_compact.available;
            regular.total += row_regular.total;
            regular.available += row_regular.available;
            occupied_by_wide += row_wide;
        }

        let total_spots = compact.total + regular.total;
        let available_spots = compact.available + regular.available;

        Self {
            total_spots,
            available_spots,
            occupied_spots: total_spots - available_spots,
            compact_spots: compact.total,
            compact_available: compact.available,
            regular_spots: regular.total,
            regular_available: regular.available,
            is_full: available_spots == 0,
            is_empty: available_spots == total_spots,
            is_compact_full: compact.is_full(),
            is_regular_full: regular.is_full(),
            occupied_by_wide,
            wide_vehicles: wide_ids.len(),
            rows,
        }
    }

    /// Counts for a single slot category
    pub fn category(&self, category: SlotCategory) -> CategoryCount {
        match category {
            SlotCategory::Compact => CategoryCount {
                total: self.compact_spots,
                available: self.compact_available,
            },
            SlotCategory::Regular => CategoryCount {
                total: self.regular_spots,
                available: self.regular_available,
            },
        }
    }
}
