//! Parking lot allocator

use super::layout::Layout;
use super::slot::{SlotCategory, SlotId};
use super::status::LotStatus;
use super::vehicle::Vehicle;
use crate::config::LotConfig;
use crate::metrics::{self, AllocationOutcome};
use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Layout occupancy plus the vehicle → slots records
///
/// Only this type writes slot occupants, and it always updates both sides
/// together, so slots and records cannot disagree.
#[derive(Debug)]
struct LotState {
    layout: Layout,
    allocations: HashMap<String, Vec<SlotId>>,
}

impl LotState {
    fn allocate(&mut self, vehicle: &Vehicle) -> (Vec<SlotId>, AllocationOutcome) {
        if let Some(existing) = self.allocations.get(vehicle.id()) {
            return (existing.clone(), AllocationOutcome::Existing);
        }

        let Some(slots) = vehicle.category().placement().find(&self.layout) else {
            return (Vec::new(), AllocationOutcome::Rejected);
        };

        for &id in &slots {
            if let Some(slot) = self.layout.slot_mut(id) {
                slot.occupy(vehicle.clone());
            }
        }
        self.allocations
            .insert(vehicle.id().to_string(), slots.clone());

        (slots, AllocationOutcome::Granted)
    }

    fn release(&mut self, vehicle_id: &str) -> Option<usize> {
        let slots = self.allocations.remove(vehicle_id)?;
        for &id in &slots {
            if let Some(slot) = self.layout.slot_mut(id) {
                slot.vacate();
            }
        }
        Some(slots.len())
    }
}

/// Slot allocator for a parking lot
///
/// All operations take one exclusive lock over the whole lot. Allocation has
/// to scan across rows anyway, and a single lock means `status` never sees a
/// slot and its record out of step.
///
/// # Example
///
/// ```
/// use lotkeeper::{ParkingLot, SlotCategory, Vehicle, VehicleCategory};
///
/// let lot = ParkingLot::new(vec![vec![SlotCategory::Regular; 4]]);
/// let van = Vehicle::new("V1", VehicleCategory::Wide);
///
/// let slots = lot.allocate(&van);
/// assert_eq!(slots.len(), 2);
/// assert_eq!(slots[0].to_string(), "R1-1");
/// assert!(lot.release("V1"));
/// ```
#[derive(Debug)]
pub struct ParkingLot {
    state: Mutex<LotState>,
}

impl ParkingLot {
    /// Create a lot from a category matrix
    pub fn new<R, I>(config: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = SlotCategory>,
    {
        let layout = Layout::new(config);
        info!(
            rows = layout.rows().len(),
            slots = layout.len(),
            "Initializing parking lot"
        );

        Self {
            state: Mutex::new(LotState {
                layout,
                allocations: HashMap::new(),
            }),
        }
    }

    /// Create a lot from a loaded configuration
    pub fn from_config(config: &LotConfig) -> Self {
        info!(name = %config.name, "Building lot from configuration");
        Self::new(config.rows.iter().map(|row| row.iter().copied()))
    }

    /// Allocate slots for a vehicle
    ///
    /// A vehicle that already holds slots gets the same slots back and
    /// nothing changes. Otherwise the first feasible placement for its
    /// category is claimed. An empty result means nothing fits right now.
    pub fn allocate(&self, vehicle: &Vehicle) -> Vec<SlotId> {
        let (slots, outcome) = self.state.lock().allocate(vehicle);

        match outcome {
            AllocationOutcome::Rejected => warn!(
                vehicle = vehicle.id(),
                category = %vehicle.category(),
                "No feasible slots"
            ),
            _ => debug!(
                vehicle = vehicle.id(),
                category = %vehicle.category(),
                outcome = outcome.as_str(),
                slots = ?slots,
                "Allocated slots"
            ),
        }
        metrics::record_allocation(vehicle.category().as_str(), outcome, slots.len());

        slots
    }

    /// Release every slot held by a vehicle
    ///
    /// Returns `false` if the vehicle holds nothing.
    pub fn release(&self, vehicle_id: &str) -> bool {
        let freed = self.state.lock().release(vehicle_id);

        match freed {
            Some(count) => debug!(vehicle = vehicle_id, slots = count, "Released slots"),
            None => debug!(vehicle = vehicle_id, "Release of unknown vehicle"),
        }
        metrics::record_release(freed);

        freed.is_some()
    }

    /// Occupancy snapshot
    pub fn status(&self) -> LotStatus {
        LotStatus::collect(&self.state.lock().layout)
    }

    /// Slots currently held by a vehicle
    pub fn allocation(&self, vehicle_id: &str) -> Option<Vec<SlotId>> {
        self.state.lock().allocations.get(vehicle_id).cloned()
    }

    /// Vehicle occupying a slot, if any
    pub fn occupant(&self, id: SlotId) -> Option<Vehicle> {
        self.state.lock().layout.slot(id)?.occupant().cloned()
    }

    /// Free slots in scan order
    pub fn available_slots(&self) -> Vec<SlotId> {
        self.state
            .lock()
            .layout
            .slots()
            .filter(|slot| slot.is_available())
            .map(|slot| slot.id())
            .collect()
    }

    /// Number of vehicles holding slots
    pub fn parked_count(&self) -> usize {
        self.state.lock().allocations.len()
    }

    /// Total number of slots
    pub fn capacity(&self) -> usize {
        self.state.lock().layout.len()
    }
}
