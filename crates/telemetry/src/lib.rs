//! Chassis telemetry aggregation over a Redfish-style management API.
//!
//! One [`TelemetryFetcher`] owns the shared HTTP client and base URL. Reads
//! are all-or-nothing at two levels: a chassis record exists only if all
//! three of its sub-resources were retrieved, and a fleet snapshot exists
//! only if every chassis record could be built.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;
mod types;

pub use error::{CallError, Error, Result};
pub use types::{ChassisRecord, FleetSnapshot};

use futures::future::join_all;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

#[derive(Debug, Deserialize)]
struct ChassisCollection {
    #[serde(rename = "Members", default)]
    members: Vec<ChassisMember>,
}

#[derive(Debug, Deserialize)]
struct ChassisMember {
    #[serde(rename = "Id")]
    id: Option<String>,
    #[serde(rename = "@odata.id")]
    odata_id: Option<String>,
}

impl ChassisMember {
    /// An explicit `Id` wins; otherwise the final path segment of the
    /// member's self-referential link.
    fn chassis_id(&self) -> Option<String> {
        match (&self.id, &self.odata_id) {
            (Some(id), _) => Some(id.clone()),
            (None, Some(link)) => link.rsplit('/').next().map(ToOwned::to_owned),
            (None, None) => None,
        }
    }
}

/// Fetches live telemetry for one or all chassis behind a Redfish-style API.
#[derive(Clone, Debug)]
pub struct TelemetryFetcher {
    client: Client,
    base_url: Url,
}

impl TelemetryFetcher {
    /// Creates a new fetcher from a shared HTTP client and the management
    /// API base URL (e.g. `http://bmc:8001/redfish/v1`).
    #[must_use]
    pub const fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Lists the identifiers of all known chassis, in directory order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Discovery`] if the discovery request fails and
    /// [`Error::MemberWithoutId`] if any member entry carries neither an
    /// `Id` nor an `@odata.id`. Never partially succeeds.
    pub async fn list_chassis(&self) -> Result<Vec<String>> {
        let url = format!("{}/Chassis", self.base_url);
        let collection: ChassisCollection =
            self.get_json(&url).await.map_err(Error::Discovery)?;

        collection
            .members
            .iter()
            .map(|member| member.chassis_id().ok_or(Error::MemberWithoutId))
            .collect()
    }

    /// Retrieves the Thermal, Power and Voltages resources for one chassis
    /// and assembles them into one atomic record.
    ///
    /// The three requests run concurrently; total latency approximates the
    /// slowest of the three.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChassisFetch`] if any of the three calls fails. The
    /// successful responses, if any, are discarded; no partial record is
    /// ever exposed.
    pub async fn fetch_chassis(&self, id: &str) -> Result<ChassisRecord> {
        let thermal_url = format!("{}/Chassis/{id}/Thermal", self.base_url);
        let power_url = format!("{}/Chassis/{id}/Power", self.base_url);
        let voltages_url = format!("{}/Chassis/{id}/Power/Voltages", self.base_url);

        let (thermal, power, voltages) = tokio::try_join!(
            self.get_json::<Value>(&thermal_url),
            self.get_json::<Value>(&power_url),
            self.get_json::<Value>(&voltages_url),
        )
        .map_err(|cause| Error::ChassisFetch {
            id: id.to_owned(),
            cause,
        })?;

        Ok(ChassisRecord {
            id: id.to_owned(),
            thermal,
            power,
            voltages,
        })
    }

    /// Fetches telemetry for every chassis the directory knows about.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Aggregation`] if any chassis fetch fails, even when
    /// every other chassis succeeded; no partial snapshot is returned.
    pub async fn fetch_all(&self) -> Result<FleetSnapshot> {
        let ids = self.list_chassis().await?;
        debug!(count = ids.len(), "fetching telemetry across fleet");

        // Collect-all-then-fail: every per-chassis fetch settles before the
        // first failure (in directory order) decides the outcome.
        let results = join_all(ids.iter().map(|id| self.fetch_chassis(id))).await;

        let mut chassis = Vec::with_capacity(results.len());
        for result in results {
            match result {
                Ok(record) => chassis.push(record),
                Err(Error::ChassisFetch { id, cause }) => {
                    return Err(Error::Aggregation {
                        failed_id: id,
                        cause,
                    });
                }
                Err(other) => return Err(other),
            }
        }

        Ok(FleetSnapshot { chassis })
    }

    async fn get_json<T>(&self, url: &str) -> std::result::Result<T, CallError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CallError::Status(status));
        }
        Ok(response.json().await?)
    }
}
