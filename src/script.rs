//! Line-oriented command scripts
//!
//! ```text
//! # comment
//! park V1 wide
//! park C1 car
//! leave V1
//! status
//! ```
//!
//! Each command runs against a [`ParkingLot`] and yields one JSON object.

use crate::error::{Error, Result};
use crate::lot::{ParkingLot, Vehicle, VehicleCategory};
use serde_json::{json, Value};

/// A parsed script command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Allocate slots for a vehicle
    Park(String, VehicleCategory),
    /// Release a vehicle's slots
    Leave(String),
    /// Report occupancy
    Status,
}

impl Command {
    /// Parse one script line
    ///
    /// Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let command = match parts.as_slice() {
            ["park", id, category] => Command::Park(id.to_string(), category.parse()?),
            ["leave", id] => Command::Leave(id.to_string()),
            ["status"] => Command::Status,
            _ => {
                return Err(Error::InvalidArgument(format!(
                    "Unrecognized command: {}",
                    line
                )))
            }
        };

        Ok(Some(command))
    }

    /// Run the command and describe the result
    pub fn execute(&self, lot: &ParkingLot) -> Result<Value> {
        let result = match self {
            Command::Park(id, category) => {
                let slots = lot.allocate(&Vehicle::new(id.as_str(), *category));
                json!({
                    "op": "park",
                    "vehicle": id,
                    "parked": !slots.is_empty(),
                    "slots": slots,
                })
            }
            Command::Leave(id) => json!({
                "op": "leave",
                "vehicle": id,
                "released": lot.release(id),
            }),
            Command::Status => {
                let status = serde_json::to_value(lot.status())
                    .map_err(|e| Error::Serialization(format!("Failed to encode status: {}", e)))?;
                json!({ "op": "status", "status": status })
            }
        };

        Ok(result)
    }
}

/// Run every command in a script, stopping at the first malformed line
pub fn run_script(lot: &ParkingLot, script: &str) -> Result<Vec<Value>> {
    let mut results = Vec::new();

    for (number, line) in script.lines().enumerate() {
        let command = Command::parse(line)
            .map_err(|e| Error::InvalidArgument(format!("line {}: {}", number + 1, e)))?;
        if let Some(command) = command {
            results.push(command.execute(lot)?);
        }
    }

    Ok(results)
}
