//! End-to-end allocation behaviour of ParkingLot

use lotkeeper::{ParkingLot, SlotCategory, SlotId, Vehicle, VehicleCategory};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use SlotCategory::{Compact, Regular};

fn labels(slots: &[SlotId]) -> Vec<String> {
    slots.iter().map(SlotId::to_string).collect()
}

fn car(id: &str) -> Vehicle {
    Vehicle::new(id, VehicleCategory::Standard)
}

fn van(id: &str) -> Vehicle {
    Vehicle::new(id, VehicleCategory::Wide)
}

fn moto(id: &str) -> Vehicle {
    Vehicle::new(id, VehicleCategory::Motorcycle)
}

#[test]
fn test_deterministic_allocation_row_major() {
    let lot = ParkingLot::new(vec![vec![Regular; 4]]);

    // Van takes the first two positions
    assert_eq!(labels(&lot.allocate(&van("V1"))), ["R1-1", "R1-2"]);

    // Car takes the first remaining regular slot
    assert_eq!(labels(&lot.allocate(&car("C1"))), ["R1-3"]);
}

#[test]
fn test_van_requires_two_contiguous_regular_same_row() {
    let lot = ParkingLot::new(vec![vec![Regular, Compact], vec![Regular, Regular]]);

    assert_eq!(labels(&lot.allocate(&car("C1"))), ["R1-1"]);
    assert_eq!(labels(&lot.allocate(&car("C2"))), ["R2-1"]);

    // Only R1-2 (compact) and R2-2 remain: no same-row regular pair
    assert!(lot.allocate(&van("V1")).is_empty());
    assert_eq!(lot.allocation("V1"), None);
}

#[test]
fn test_repeat_allocation_is_idempotent() {
    let lot = ParkingLot::new(vec![vec![Regular, Compact, Regular, Regular, Regular, Regular]]);

    for vehicle in [moto("M1"), car("C1"), van("V1")] {
        let first = lot.allocate(&vehicle);
        assert!(!first.is_empty());
        let available = lot.status().available_spots;

        let second = lot.allocate(&vehicle);
        assert_eq!(first, second, "{} got different slots", vehicle.id());
        assert_eq!(lot.status().available_spots, available);
    }
}

#[test]
fn test_release_unknown_mutates_nothing() {
    let lot = ParkingLot::new(vec![vec![Regular, Regular], vec![Compact]]);
    lot.allocate(&car("C1"));
    let before = lot.status();

    assert!(!lot.release("ghost"));
    assert_eq!(lot.status(), before);
    assert_eq!(lot.parked_count(), 1);
}

#[test]
fn test_allocate_release_round_trip() {
    let lot = ParkingLot::new(vec![
        vec![Compact, Regular, Regular],
        vec![Regular, Regular, Compact],
    ]);
    lot.allocate(&car("C1"));

    for vehicle in [moto("M1"), car("C2"), van("V1")] {
        let before = lot.available_slots();
        assert!(!lot.allocate(&vehicle).is_empty());
        assert!(lot.release(vehicle.id()));
        assert_eq!(lot.available_slots(), before);
    }
}

#[test]
fn test_status_flags_and_counts() {
    let lot = ParkingLot::new(vec![vec![Regular], vec![Compact]]);

    let s0 = lot.status();
    assert!(!s0.is_full);
    assert!(s0.is_empty);
    assert!(!s0.is_regular_full);
    assert!(!s0.is_compact_full);

    lot.allocate(&car("C1"));
    let s1 = lot.status();
    assert_eq!(s1.regular_available, 0);
    assert!(!s1.is_full);
    assert!(s1.is_regular_full);

    lot.allocate(&moto("M1"));
    let s2 = lot.status();
    assert!(s2.is_full);
    assert!(!s2.is_empty);
    assert!(s2.is_regular_full);
    assert!(s2.is_compact_full);
    assert_eq!(s2.available_spots + s2.occupied_spots, s2.total_spots);
}

#[test]
fn test_wide_accounting() {
    let lot = ParkingLot::new(vec![vec![Regular; 3], vec![Regular, Regular]]);

    lot.allocate(&van("V1"));
    let status = lot.status();
    assert_eq!(status.occupied_by_wide, 2);
    assert_eq!(status.wide_vehicles, 1);

    lot.allocate(&van("V2"));
    let status = lot.status();
    assert_eq!(status.occupied_by_wide, 4);
    assert_eq!(status.wide_vehicles, 2);
    assert_eq!(status.rows[0].occupied_by_wide, 2);
    assert_eq!(status.rows[1].occupied_by_wide, 2);

    // Cars and motorcycles do not count
    lot.allocate(&moto("M1"));
    assert_eq!(lot.status().occupied_by_wide, 4);
}

#[test]
fn test_empty_layouts_have_no_capacity() {
    for lot in [
        ParkingLot::new(Vec::<Vec<SlotCategory>>::new()),
        ParkingLot::new(vec![Vec::<SlotCategory>::new(), Vec::new()]),
    ] {
        assert!(lot.allocate(&moto("M1")).is_empty());
        let status = lot.status();
        assert_eq!(status.total_spots, 0);
        assert!(status.is_full && status.is_empty);
        assert!(!status.is_compact_full && !status.is_regular_full);
    }
}

#[test]
fn test_status_invariants_through_mixed_workload() {
    let lot = ParkingLot::new(vec![
        vec![Regular, Regular, Compact, Regular],
        vec![Compact, Compact],
        vec![],
        vec![Regular, Regular, Regular],
    ]);

    let vehicles: Vec<Vehicle> = (0..12)
        .map(|i| {
            let category = match i % 3 {
                0 => VehicleCategory::Wide,
                1 => VehicleCategory::Standard,
                _ => VehicleCategory::Motorcycle,
            };
            Vehicle::new(format!("X{}", i), category)
        })
        .collect();

    for (step, vehicle) in vehicles.iter().enumerate() {
        lot.allocate(vehicle);
        if step % 4 == 3 {
            lot.release(vehicles[step - 2].id());
        }

        let status = lot.status();
        assert_eq!(status.available_spots + status.occupied_spots, status.total_spots);
        assert_eq!(status.is_full, status.available_spots == 0);
        assert_eq!(status.is_empty, status.available_spots == status.total_spots);
        assert_eq!(
            status.rows.iter().map(|r| r.available_spots).sum::<usize>(),
            status.available_spots
        );
        assert_eq!(
            status.compact_available + status.regular_available,
            status.available_spots
        );
    }
}

#[test]
fn test_concurrent_allocation_never_double_books() {
    let lot = Arc::new(ParkingLot::new(vec![
        vec![Regular; 8],
        vec![Compact; 4],
        vec![Regular, Compact, Regular, Regular],
    ]));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let lot = Arc::clone(&lot);
            thread::spawn(move || {
                for i in 0..20 {
                    let category = match (t + i) % 3 {
                        0 => VehicleCategory::Wide,
                        1 => VehicleCategory::Standard,
                        _ => VehicleCategory::Motorcycle,
                    };
                    let id = format!("T{}-{}", t, i);
                    let slots = lot.allocate(&Vehicle::new(id.as_str(), category));
                    let _ = lot.status();
                    if i % 2 == 0 && !slots.is_empty() {
                        assert!(lot.release(&id));
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }

    // Every occupied slot belongs to exactly one live record
    let mut seen = HashSet::new();
    let mut held = 0;
    for t in 0..8 {
        for i in 0..20 {
            let id = format!("T{}-{}", t, i);
            if let Some(slots) = lot.allocation(&id) {
                for slot in slots {
                    assert!(seen.insert(slot), "{} handed out twice", slot);
                    assert_eq!(lot.occupant(slot).map(|v| v.id().to_string()), Some(id.clone()));
                    held += 1;
                }
            }
        }
    }
    assert_eq!(held, lot.status().occupied_spots);
}
