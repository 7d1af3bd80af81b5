//! Parking lot allocation
//!
//! Typed slots arranged in rows, allocated to typed vehicles with a
//! deterministic first-fit scan.
//!
//! # Architecture
//!
//! ```text
//! ParkingLot (one Mutex)
//!   └─→ LotState
//!        ├─→ Layout
//!        │     ├─→ Row 1: [R1-1 REGULAR] [R1-2 REGULAR] [R1-3 COMPACT]
//!        │     └─→ Row 2: [R2-1 REGULAR] [R2-2 COMPACT]
//!        └─→ Allocations
//!              ├─→ V1 → [R1-1, R1-2]
//!              └─→ M1 → [R1-3]
//!
//! Placement (by vehicle category):
//!   ├─→ motorcycle → AnySingle     (1 slot, any category)
//!   ├─→ standard   → RegularSingle (1 regular slot)
//!   └─→ wide       → RegularPair   (2 adjacent regular slots, same row)
//! ```
//!
//! Rows are scanned in order and positions from the lowest up; the first
//! feasible placement wins.

pub mod allocator;
pub mod layout;
pub mod policy;
pub mod slot;
pub mod status;
pub mod vehicle;

pub use allocator::ParkingLot;
pub use layout::Layout;
pub use policy::Placement;
pub use slot::{Slot, SlotCategory, SlotId};
pub use status::{CategoryCount, LotStatus, RowSummary};
pub use vehicle::{Vehicle, VehicleCategory};
