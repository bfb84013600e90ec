//! WebSocket handler for client connections.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use log::{debug, warn};

use crate::api::AppState;

use super::hub::ChatHub;
use super::types::{ClientEvent, ServerEvent};

/// WebSocket upgrade handler.
///
/// GET /ws
pub async fn ws_handler(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    debug!("websocket upgrade request");
    let hub = state.hub.clone();
    ws.on_upgrade(move |socket| handle_connection(socket, hub))
}

/// Drive one connection: pump hub events out and client frames in.
async fn handle_connection(socket: WebSocket, hub: Arc<ChatHub>) {
    let (mut sender, mut receiver) = socket.split();

    let (id, mut event_rx) = hub.register();

    // Forward broadcasts to this client.
    let send_task = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            let json = match serde_json::to_string(&event) {
                Ok(json) => json,
                Err(err) => {
                    warn!("failed to serialize event: {err}");
                    continue;
                }
            };
            if sender.send(Message::Text(json.into())).await.is_err() {
                break;
            }
        }
    });

    // Process incoming frames in arrival order.
    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => match serde_json::from_str::<ClientEvent>(text.as_str()) {
                Ok(ClientEvent::ChatMessage(payload)) => {
                    hub.broadcast(&ServerEvent::ChatMessage(payload));
                }
                Err(err) => {
                    warn!("ignoring unparseable frame from connection {id}: {err}");
                }
            },
            Ok(Message::Binary(_)) => {
                debug!("ignoring binary frame from connection {id}");
            }
            Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => {}
            Ok(Message::Close(_)) => break,
            Err(err) => {
                warn!("websocket error on connection {id}: {err}");
                break;
            }
        }
    }

    send_task.abort();
    hub.unregister(id);
}
