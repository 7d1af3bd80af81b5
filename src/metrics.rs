//! Prometheus metrics for allocation activity
//!
//! Collectors live in a crate-wide registry and are shared by every lot in
//! the process.

use prometheus::{Encoder, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};
use std::sync::Once;
use tracing::{error, info};

lazy_static::lazy_static! {
    /// Global metrics registry
    pub static ref METRICS_REGISTRY: Registry = Registry::new();

    pub static ref ALLOCATIONS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("lotkeeper_allocations_total", "Allocation requests by vehicle category and outcome"),
        &["vehicle", "outcome"]
    ).expect("valid allocation counter");

    pub static ref RELEASES_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("lotkeeper_releases_total", "Release requests by outcome"),
        &["outcome"]
    ).expect("valid release counter");

    pub static ref OCCUPIED_SLOTS: IntGauge = IntGauge::new(
        "lotkeeper_occupied_slots",
        "Slots currently held by a vehicle"
    ).expect("valid occupancy gauge");
}

static INIT: Once = Once::new();

/// Outcome of an allocation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationOutcome {
    /// New slots were claimed
    Granted,
    /// The vehicle already held slots
    Existing,
    /// No feasible slots
    Rejected,
}

impl AllocationOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            AllocationOutcome::Granted => "granted",
            AllocationOutcome::Existing => "existing",
            AllocationOutcome::Rejected => "rejected",
        }
    }
}

/// Register all collectors; safe to call more than once
pub fn init_metrics() {
    INIT.call_once(|| {
        info!("Initializing Prometheus metrics");
        METRICS_REGISTRY.register(Box::new(ALLOCATIONS_TOTAL.clone())).ok();
        METRICS_REGISTRY.register(Box::new(RELEASES_TOTAL.clone())).ok();
        METRICS_REGISTRY.register(Box::new(OCCUPIED_SLOTS.clone())).ok();
    });
}

pub(crate) fn record_allocation(vehicle: &str, outcome: AllocationOutcome, claimed: usize) {
    ALLOCATIONS_TOTAL
        .with_label_values(&[vehicle, outcome.as_str()])
        .inc();
    if outcome == AllocationOutcome::Granted {
        OCCUPIED_SLOTS.add(claimed as i64);
    }
}

pub(crate) fn record_release(freed: Option<usize>) {
    match freed {
        Some(count) => {
            RELEASES_TOTAL.with_label_values(&["released"]).inc();
            OCCUPIED_SLOTS.sub(count as i64);
        }
        None => RELEASES_TOTAL.with_label_values(&["not_found"]).inc(),
    }
}

/// Render all registered metrics in the Prometheus text format
pub fn export_metrics() -> String {
    let encoder = TextEncoder::new();
    let families = METRICS_REGISTRY.gather();
    let mut buffer = Vec::new();

    if let Err(e) = encoder.encode(&families, &mut buffer) {
        error!("Failed to encode metrics: {}", e);
        return String::new();
    }

    String::from_utf8(buffer).unwrap_or_default()
}
