//! HTTP routes and handlers

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;

use crate::pipeline::MountError;
use crate::registry::{RegistryError, SlotInfo};
use crate::source::{resolve_source_uri, AddStreamQuery};

use super::AppState;

/// Build the control API router.
///
/// `/requestStream` is the canonical add endpoint; `/addStream` and
/// `/add_demo_stream` are aliases kept for older clients. Status is served
/// on both `/status` and `/streams`.
pub fn router(state: AppState) -> Router {
    let add = get(add_stream).post(add_stream);

    Router::new()
        .route("/status", get(status))
        .route("/streams", get(status))
        .route("/requestStream", add.clone())
        .route("/addStream", add.clone())
        .route("/add_demo_stream", add)
        .fallback(not_found)
        .with_state(state)
}

/// Response body for the status endpoint
#[derive(Debug, Serialize)]
struct StatusResponse {
    max: u32,
    streams: Vec<SlotInfo>,
}

/// Response body for a successful add-request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StreamCreated {
    stream_id: u32,
    ingest: String,
    rtsp_url: String,
    path: String,
    udp: u16,
    encoder: String,
}

/// Per-request failure, mapped onto an HTTP response
#[derive(Debug)]
pub enum ApiError {
    /// All slots allocated; reported with the configured maximum
    Capacity { max: u32 },
    /// The pipeline failed to materialize the slot
    Mount(MountError),
}

impl From<RegistryError> for ApiError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::CapacityExceeded { max } => ApiError::Capacity { max },
        }
    }
}

impl From<MountError> for ApiError {
    fn from(e: MountError) -> Self {
        ApiError::Mount(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Capacity { max } => (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({ "error": "capacity_exceeded", "max": max })),
            )
                .into_response(),
            ApiError::Mount(e) => {
                tracing::error!(error = %e, "Branch mount failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Error").into_response()
            }
        }
    }
}

async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let streams = state.registry.snapshot().await;

    Json(StatusResponse {
        max: state.registry.max_streams(),
        streams,
    })
}

/// Admit a new stream: allocate a slot, mount it, resolve the source and
/// announce it to the pipeline backend.
///
/// A mount failure leaks the allocated index on purpose; backend delivery is
/// best-effort and never changes the response.
async fn add_stream(
    State(state): State<AppState>,
    Query(query): Query<AddStreamQuery>,
    body: Bytes,
) -> Result<Json<StreamCreated>, ApiError> {
    let index = state.registry.allocate().await?;
    let mount = state.mounter.mount(index)?;
    state.registry.commit(index, &mount).await;

    let source_uri = resolve_source_uri(&state.config, &query, &body);
    state.backend.notify_camera_add(index, &source_uri).await;

    tracing::info!(
        index,
        ingest = %source_uri,
        rtsp = %mount.rtsp_url,
        "Stream admitted"
    );

    Ok(Json(StreamCreated {
        stream_id: index,
        ingest: source_uri,
        rtsp_url: mount.rtsp_url,
        path: mount.path,
        udp: mount.udp_port,
        encoder: mount.enc_kind.unwrap_or_else(|| "unknown".to_string()),
    }))
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
