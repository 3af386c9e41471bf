//! HTTP surface for the fleet gateway: aggregated telemetry reads, control
//! action dispatch, and the telemetry chat flow.
//!
//! This layer is thin endpoint wiring: it validates inbound payloads, calls
//! into the core components, and translates their typed failures into
//! status codes.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod chat;
mod error;
mod routes;

pub use error::ApiError;
pub use routes::router;

use fleet_action_recorder::ActionRecorder;
use fleet_actions::ActionDispatcher;
use fleet_blob_store::BlobStore;
use fleet_summary_store::SummaryStore;
use fleet_telemetry::TelemetryFetcher;
use fleet_window_extractor::WindowExtractor;

/// Everything a request handler needs, built once at startup and shared by
/// every in-flight request.
#[derive(Clone, Debug)]
pub struct Gateway<E, S, B, R>
where
    E: WindowExtractor,
    S: SummaryStore,
    B: BlobStore,
    R: ActionRecorder,
{
    telemetry: TelemetryFetcher,
    dispatcher: ActionDispatcher<R>,
    extractor: E,
    summaries: S,
    blobs: B,
}

impl<E, S, B, R> Gateway<E, S, B, R>
where
    E: WindowExtractor,
    S: SummaryStore,
    B: BlobStore,
    R: ActionRecorder,
{
    /// Assembles a gateway from its collaborators.
    pub const fn new(
        telemetry: TelemetryFetcher,
        dispatcher: ActionDispatcher<R>,
        extractor: E,
        summaries: S,
        blobs: B,
    ) -> Self {
        Self {
            telemetry,
            dispatcher,
            extractor,
            summaries,
            blobs,
        }
    }
}
