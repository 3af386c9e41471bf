use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Atomic telemetry for one chassis.
///
/// A record exists only if the Thermal, Power and Voltages sub-resources
/// were all retrieved successfully; the sub-resource documents are passed
/// through unmodified.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ChassisRecord {
    /// Chassis identifier, unique within a snapshot.
    #[serde(rename = "Id")]
    pub id: String,

    /// Raw Thermal resource.
    #[serde(rename = "Thermal")]
    pub thermal: Value,

    /// Raw Power resource.
    #[serde(rename = "Power")]
    pub power: Value,

    /// Raw Voltages resource.
    #[serde(rename = "Voltages")]
    pub voltages: Value,
}

/// Aggregated telemetry for every chassis in the fleet at one point in
/// time, in directory order. Built fresh per read; never cached.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FleetSnapshot {
    /// One record per chassis known to the directory at fetch time.
    #[serde(rename = "Chassis")]
    pub chassis: Vec<ChassisRecord>,
}
