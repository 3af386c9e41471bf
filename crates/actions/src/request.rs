use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// A typed control action targeting one chassis.
///
/// A closed tagged union matched exhaustively at dispatch time; an unknown
/// tag is only reachable at the boundary, through [`Self::from_value`].
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActionRequest {
    /// Set per-fan speed percentages.
    Fan {
        /// Target chassis.
        chassis_id: String,

        /// Fan name to integer speed percentage, keys unique.
        data: BTreeMap<String, u64>,
    },

    /// Set critical voltage thresholds for one rail.
    Voltage {
        /// Target chassis.
        chassis_id: String,

        /// Rail name and threshold pair.
        data: VoltageThresholds,
    },

    /// Set the chassis power limit.
    Power {
        /// Target chassis.
        chassis_id: String,

        /// Limit in watts.
        data: PowerLimit,
    },
}

/// Critical thresholds for one voltage rail.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct VoltageThresholds {
    /// Voltage rail name, e.g. `"12V Rail"`.
    pub rail_name: String,

    /// `UpperThresholdCritical`, volts.
    pub upper: f64,

    /// `LowerThresholdCritical`, volts.
    pub lower: f64,
}

/// Chassis power limit.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PowerLimit {
    /// `LimitInWatts`, e.g. 450.
    pub limit_watts: u64,
}

impl ActionRequest {
    const KNOWN_TYPES: [&'static str; 3] = ["fan", "voltage", "power"];

    /// Builds a request from a validated inbound payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidActionType`] for an unknown or missing
    /// `type` tag (side-effect-free, before any network call) and
    /// [`Error::Malformed`] when the tag is known but the shape is not.
    pub fn from_value(value: &Value) -> Result<Self> {
        let tag = value.get("type").and_then(Value::as_str).unwrap_or_default();
        if !Self::KNOWN_TYPES.contains(&tag) {
            return Err(Error::InvalidActionType {
                tag: tag.to_owned(),
            });
        }
        serde_json::from_value(value.clone()).map_err(Error::Malformed)
    }

    /// The chassis this request targets.
    #[must_use]
    pub fn chassis_id(&self) -> &str {
        match self {
            Self::Fan { chassis_id, .. }
            | Self::Voltage { chassis_id, .. }
            | Self::Power { chassis_id, .. } => chassis_id,
        }
    }
}
