// Lotkeeper - typed slot allocation for parking facilities
// Rows of compact and regular slots, shared by motorcycles, cars and vans

#![warn(rust_2018_idioms)]

pub mod config;
pub mod lot;
pub mod metrics;
pub mod script;

// Re-exports for convenience
pub use crate::config::LotConfig;
pub use crate::lot::{
    LotStatus, ParkingLot, RowSummary, SlotCategory, SlotId, Vehicle, VehicleCategory,
};

/// Lotkeeper error types
///
/// Allocation itself never fails: an infeasible request is an empty slot
/// list and an unknown release is `false`. These errors come from the
/// surfaces around the allocator.
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum Error {
        #[error("Configuration error: {0}")]
        Config(String),

        #[error("Invalid argument: {0}")]
        InvalidArgument(String),

        #[error("Serialization error: {0}")]
        Serialization(String),
    }

    pub type Result<T> = std::result::Result<T, Error>;
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
