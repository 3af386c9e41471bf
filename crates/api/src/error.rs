use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

/// Gateway-level error, translated into a status code at the edge.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Upstream telemetry failure.
    #[error(transparent)]
    Telemetry(#[from] fleet_telemetry::Error),

    /// Action validation or dispatch failure.
    #[error(transparent)]
    Action(#[from] fleet_actions::Error),

    /// A collaborator (extractor, store, recorder) failed.
    #[error("collaborator error: {0}")]
    Collaborator(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
    pub(crate) fn collaborator<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Collaborator(Box::new(error))
    }

    const fn status(&self) -> StatusCode {
        match self {
            Self::Telemetry(_)
            | Self::Action(fleet_actions::Error::Call { .. }) => StatusCode::BAD_GATEWAY,
            Self::Action(
                fleet_actions::Error::InvalidActionType { .. }
                | fleet_actions::Error::Malformed(_),
            ) => StatusCode::BAD_REQUEST,
            Self::Action(fleet_actions::Error::Record(_)) | Self::Collaborator(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(%status, error = %self, "request failed");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
