use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use fleet_action_recorder::ActionRecorder;
use fleet_actions::ActionRequest;
use fleet_blob_store::BlobStore;
use fleet_summary_store::SummaryStore;
use fleet_telemetry::FleetSnapshot;
use fleet_window_extractor::WindowExtractor;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::{Gateway, chat};

const RECENT_CHAT_LIMIT: usize = 10;

/// Builds the gateway router.
pub fn router<E, S, B, R>(gateway: Arc<Gateway<E, S, B, R>>) -> Router
where
    E: WindowExtractor,
    S: SummaryStore,
    B: BlobStore,
    R: ActionRecorder,
{
    Router::new()
        .route("/telemetry", get(read_telemetry::<E, S, B, R>))
        .route("/actions", post(dispatch_action::<E, S, B, R>))
        .route("/chat", post(chat_message::<E, S, B, R>))
        .route("/chat/recent", get(recent_chats::<E, S, B, R>))
        .with_state(gateway)
}

async fn read_telemetry<E, S, B, R>(
    State(gateway): State<Arc<Gateway<E, S, B, R>>>,
) -> Result<Json<FleetSnapshot>, ApiError>
where
    E: WindowExtractor,
    S: SummaryStore,
    B: BlobStore,
    R: ActionRecorder,
{
    Ok(Json(gateway.telemetry.fetch_all().await?))
}

async fn dispatch_action<E, S, B, R>(
    State(gateway): State<Arc<Gateway<E, S, B, R>>>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError>
where
    E: WindowExtractor,
    S: SummaryStore,
    B: BlobStore,
    R: ActionRecorder,
{
    let action = ActionRequest::from_value(&body)?;
    let response = gateway.dispatcher.dispatch(&action).await?;
    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
struct ChatBody {
    message: String,
}

async fn chat_message<E, S, B, R>(
    State(gateway): State<Arc<Gateway<E, S, B, R>>>,
    Json(body): Json<ChatBody>,
) -> Result<Json<Value>, ApiError>
where
    E: WindowExtractor,
    S: SummaryStore,
    B: BlobStore,
    R: ActionRecorder,
{
    let reply = chat::answer(&gateway, &body.message).await?;
    Ok(Json(json!({ "response": reply })))
}

async fn recent_chats<E, S, B, R>(
    State(gateway): State<Arc<Gateway<E, S, B, R>>>,
) -> Result<Json<Value>, ApiError>
where
    E: WindowExtractor,
    S: SummaryStore,
    B: BlobStore,
    R: ActionRecorder,
{
    let logs = gateway
        .summaries
        .recent_chat_logs(RECENT_CHAT_LIMIT)
        .await
        .map_err(ApiError::collaborator)?;
    Ok(Json(json!({ "messages": logs })))
}
