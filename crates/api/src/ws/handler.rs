use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use kdmip_core::error::CoreError;
use serde::Deserialize;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;
use crate::ws::manager::WsManager;

#[derive(Debug, Deserialize)]
pub struct WsParams {
    /// Session token. Browsers cannot set headers on a WebSocket upgrade.
    pub token: Option<String>,
}

/// Upgrade to WebSocket.
///
/// Anonymous connections are allowed and receive publish announcements. A
/// token, if given, must be valid; admin sessions also receive upload events.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    Query(params): Query<WsParams>,
) -> Result<impl IntoResponse, AppError> {
    let session = match params.token {
        Some(token) => {
            let claims = validate_token(&token, &state.config.jwt).map_err(|_| {
                AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
            })?;
            Some((claims.sub, claims.role))
        }
        None => None,
    };

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state.ws_manager, session)))
}

async fn handle_socket(
    socket: WebSocket,
    ws_manager: Arc<WsManager>,
    session: Option<(String, String)>,
) {
    let conn_id = uuid::Uuid::new_v4().to_string();
    let subject = session.as_ref().map(|(s, _)| s.clone()).unwrap_or_default();
    tracing::info!(conn_id = %conn_id, subject = %subject, "WebSocket connected");

    let mut rx = ws_manager.add(conn_id.clone(), session).await;

    let (mut sink, mut stream) = socket.split();

    let sender_conn_id = conn_id.clone();
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sink.send(msg).await.is_err() {
                tracing::debug!(conn_id = %sender_conn_id, "WebSocket sink closed");
                break;
            }
        }
    });

    // Inbound traffic is ignored apart from Close and Pong.
    while let Some(result) = stream.next().await {
        match result {
            Ok(Message::Close(_)) => break,
            Ok(Message::Pong(_)) => {
                tracing::trace!(conn_id = %conn_id, "Pong received");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(conn_id = %conn_id, error = %e, "WebSocket receive error");
                break;
            }
        }
    }

    ws_manager.remove(&conn_id).await;
    send_task.abort();
    tracing::info!(conn_id = %conn_id, "WebSocket disconnected");
}
