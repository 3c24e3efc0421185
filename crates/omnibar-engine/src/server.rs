//! HTTP front end: `GET /api/{message}` returns the action list for one
//! sentence.

use crate::formatter::{OutputStyle, format_actions};
use crate::pipeline::{Pipeline, PipelineError};
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },
    #[error("Server stopped: {0}")]
    Serve(#[from] std::io::Error),
}

#[derive(Clone)]
struct AppState {
    pipeline: Arc<Pipeline>,
    style: OutputStyle,
}

pub struct ApiServer {
    state: AppState,
}

impl ApiServer {
    pub fn new(pipeline: Arc<Pipeline>, style: OutputStyle) -> Self {
        Self {
            state: AppState { pipeline, style },
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/:message", get(handle_message))
            .route("/health", get(health))
            .with_state(self.state.clone())
    }

    pub async fn bind(host: &str, port: u16) -> Result<TcpListener, ServerError> {
        let addr = format!("{}:{}", host, port);
        TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })
    }

    /// Serve requests on `listener` until the task is dropped or fails.
    pub async fn serve(self, listener: TcpListener) -> Result<(), ServerError> {
        if let Ok(addr) = listener.local_addr() {
            info!("API server listening on: {}", addr);
        }
        axum::serve(listener, self.router()).await?;
        Ok(())
    }

    /// Bind an ephemeral port, serve in the background and return the
    /// address.
    pub async fn spawn_local(self) -> Result<SocketAddr, ServerError> {
        let listener = Self::bind("127.0.0.1", 0).await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            if let Err(e) = self.serve(listener).await {
                error!("API server stopped: {}", e);
            }
        });
        Ok(addr)
    }
}

async fn handle_message(State(state): State<AppState>, Path(message): Path<String>) -> Response {
    match state.pipeline.resolve(&message).await {
        Ok(actions) => match format_actions(actions.as_slice(), state.style) {
            Ok(body) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response(),
            Err(e) => {
                error!("Failed to serialize actions: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
        },
        Err(PipelineError::Nlu(e)) => {
            let status = if e.is_remote() {
                StatusCode::BAD_GATEWAY
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, e.to_string()).into_response()
        }
    }
}

async fn health() -> &'static str {
    "ok"
}
