//! Integration tests for the action dispatcher against a mock control
//! endpoint.

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::routing::post;
use axum::{Json, Router};
use fleet_action_recorder_memory::MemoryActionRecorder;
use fleet_actions::{
    ActionDispatcher, ActionRequest, CallError, Error, PowerLimit, VoltageThresholds,
};
use reqwest::Client;
use serde_json::{Value, json};
use tokio::sync::Mutex;
use url::Url;

#[derive(Clone, Default)]
struct ControlEndpoint {
    posts: Arc<Mutex<Vec<(String, Value)>>>,
    fail: bool,
}

async fn capture(
    State(endpoint): State<ControlEndpoint>,
    uri: Uri,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    endpoint.posts.lock().await.push((uri.path().to_owned(), body));
    if endpoint.fail {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(Json(json!({"status": "ok"})))
}

async fn serve(endpoint: ControlEndpoint) -> SocketAddr {
    let app = Router::new()
        .route("/redfish/v1/Chassis/{id}/Thermal/Fans", post(capture))
        .route(
            "/redfish/v1/Chassis/{id}/Power/Voltages/Actions/Voltage.SetThresholds",
            post(capture),
        )
        .route(
            "/redfish/v1/Chassis/{id}/Power/Actions/Power.SetPowerLimit",
            post(capture),
        )
        .with_state(endpoint);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });
    addr
}

fn dispatcher_for(
    addr: SocketAddr,
    recorder: MemoryActionRecorder,
) -> ActionDispatcher<MemoryActionRecorder> {
    let base_url = Url::parse(&format!("http://{addr}/redfish/v1")).unwrap();
    ActionDispatcher::new(Client::new(), base_url, recorder)
}

#[tokio::test]
async fn test_fan_action_posts_once_and_records_once() {
    let _ = tracing_subscriber::fmt::try_init();

    let endpoint = ControlEndpoint::default();
    let posts = endpoint.posts.clone();
    let addr = serve(endpoint).await;
    let recorder = MemoryActionRecorder::new();
    let dispatcher = dispatcher_for(addr, recorder.clone());

    let action = ActionRequest::Fan {
        chassis_id: "1".to_string(),
        data: BTreeMap::from([("Fan1".to_string(), 20)]),
    };
    let response = dispatcher.dispatch(&action).await.unwrap();

    assert_eq!(response, json!({"status": "ok"}));

    let posts = posts.lock().await;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].0, "/redfish/v1/Chassis/1/Thermal/Fans");
    assert_eq!(posts[0].1, json!({"Fan1": 20}));

    let records = recorder.records().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].actor, "agent");
    assert_eq!(
        records[0].endpoint,
        format!("http://{addr}/redfish/v1/Chassis/1/Thermal/Fans")
    );
    assert_eq!(records[0].payload, json!({"Fan1": 20}));
    assert_eq!(records[0].response, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_voltage_action_builds_threshold_payload() {
    let endpoint = ControlEndpoint::default();
    let posts = endpoint.posts.clone();
    let addr = serve(endpoint).await;
    let dispatcher = dispatcher_for(addr, MemoryActionRecorder::new());

    let action = ActionRequest::Voltage {
        chassis_id: "3".to_string(),
        data: VoltageThresholds {
            rail_name: "12V Rail".to_string(),
            upper: 12.6,
            lower: 11.4,
        },
    };
    dispatcher.dispatch(&action).await.unwrap();

    let posts = posts.lock().await;
    assert_eq!(
        posts[0].0,
        "/redfish/v1/Chassis/3/Power/Voltages/Actions/Voltage.SetThresholds"
    );
    assert_eq!(
        posts[0].1,
        json!({
            "Name": "12V Rail",
            "UpperThresholdCritical": 12.6,
            "LowerThresholdCritical": 11.4,
        })
    );
}

#[tokio::test]
async fn test_power_action_builds_limit_payload() {
    let endpoint = ControlEndpoint::default();
    let posts = endpoint.posts.clone();
    let addr = serve(endpoint).await;
    let dispatcher = dispatcher_for(addr, MemoryActionRecorder::new());

    let action = ActionRequest::Power {
        chassis_id: "2".to_string(),
        data: PowerLimit { limit_watts: 450 },
    };
    dispatcher.dispatch(&action).await.unwrap();

    let posts = posts.lock().await;
    assert_eq!(
        posts[0].0,
        "/redfish/v1/Chassis/2/Power/Actions/Power.SetPowerLimit"
    );
    assert_eq!(posts[0].1, json!({"LimitInWatts": 450}));
}

#[tokio::test]
async fn test_failed_call_is_typed_and_unrecorded() {
    let endpoint = ControlEndpoint {
        fail: true,
        ..ControlEndpoint::default()
    };
    let addr = serve(endpoint).await;
    let recorder = MemoryActionRecorder::new();
    let dispatcher = dispatcher_for(addr, recorder.clone());

    let action = ActionRequest::Power {
        chassis_id: "2".to_string(),
        data: PowerLimit { limit_watts: 450 },
    };
    let error = dispatcher.dispatch(&action).await.unwrap_err();

    match error {
        Error::Call {
            cause: CallError::Status(status),
            ..
        } => assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR),
        other => panic!("expected call failure, got {other:?}"),
    }
    assert!(recorder.records().await.is_empty());
}

#[tokio::test]
async fn test_invalid_tag_never_reaches_the_network() {
    let endpoint = ControlEndpoint::default();
    let posts = endpoint.posts.clone();
    let addr = serve(endpoint).await;
    let recorder = MemoryActionRecorder::new();
    let _dispatcher = dispatcher_for(addr, recorder.clone());

    let error =
        ActionRequest::from_value(&json!({"type": "bogus", "chassis_id": "1", "data": {}}))
            .unwrap_err();

    assert!(matches!(error, Error::InvalidActionType { .. }));
    assert!(posts.lock().await.is_empty());
    assert!(recorder.records().await.is_empty());
}
