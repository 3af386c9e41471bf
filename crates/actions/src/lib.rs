//! Typed control actions dispatched to chassis management endpoints.
//!
//! Each [`ActionRequest`] variant resolves to exactly one endpoint/payload
//! pair. A successful call is handed to the [`ActionRecorder`] before the
//! response reaches the caller; failed calls are returned as typed errors
//! and are not recorded.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;
mod request;

pub use error::{CallError, Error, Result};
pub use request::{ActionRequest, PowerLimit, VoltageThresholds};

use chrono::Utc;
use fleet_action_recorder::{ActionRecord, ActionRecorder};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::{debug, info};
use url::Url;

/// Actor written into the audit trail for gateway-initiated actions.
const ACTOR: &str = "agent";

/// Resolves typed control actions to concrete chassis endpoints, issues the
/// call, and records each success.
#[derive(Clone, Debug)]
pub struct ActionDispatcher<R>
where
    R: ActionRecorder,
{
    client: Client,
    base_url: Url,
    recorder: R,
}

impl<R> ActionDispatcher<R>
where
    R: ActionRecorder,
{
    /// Creates a new dispatcher from a shared HTTP client, the management
    /// API base URL, and the audit record sink.
    #[must_use]
    pub const fn new(client: Client, base_url: Url, recorder: R) -> Self {
        Self {
            client,
            base_url,
            recorder,
        }
    }

    /// Dispatches one control action and returns the raw endpoint response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Call`] if the control endpoint call fails at the
    /// transport or protocol level (nothing is recorded), and
    /// [`Error::Record`] if the call succeeded but the audit record could
    /// not be appended.
    pub async fn dispatch(&self, action: &ActionRequest) -> Result<Value> {
        let (endpoint, payload) = self.resolve(action);
        debug!(%endpoint, "dispatching control action");

        let response = self
            .client
            .post(&endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|source| Error::Call {
                endpoint: endpoint.clone(),
                cause: CallError::Transport(source),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Call {
                endpoint,
                cause: CallError::Status(status),
            });
        }

        let body: Value = response.json().await.map_err(|source| Error::Call {
            endpoint: endpoint.clone(),
            cause: CallError::Transport(source),
        })?;

        // Success-only audit trail; failed calls are not recorded.
        self.recorder
            .record(ActionRecord {
                timestamp: Utc::now(),
                actor: ACTOR.to_owned(),
                endpoint: endpoint.clone(),
                payload,
                response: body.clone(),
            })
            .await
            .map_err(|source| Error::Record(Box::new(source)))?;

        info!(%endpoint, "control action dispatched and recorded");
        Ok(body)
    }

    fn resolve(&self, action: &ActionRequest) -> (String, Value) {
        match action {
            ActionRequest::Fan { chassis_id, data } => (
                format!("{}/Chassis/{chassis_id}/Thermal/Fans", self.base_url),
                json!(data),
            ),
            ActionRequest::Voltage { chassis_id, data } => (
                format!(
                    "{}/Chassis/{chassis_id}/Power/Voltages/Actions/Voltage.SetThresholds",
                    self.base_url
                ),
                json!({
                    "Name": data.rail_name,
                    "UpperThresholdCritical": data.upper,
                    "LowerThresholdCritical": data.lower,
                }),
            ),
            ActionRequest::Power { chassis_id, data } => (
                format!(
                    "{}/Chassis/{chassis_id}/Power/Actions/Power.SetPowerLimit",
                    self.base_url
                ),
                json!({ "LimitInWatts": data.limit_watts }),
            ),
        }
    }
}
