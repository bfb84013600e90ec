//! Test utilities and common setup.

use std::net::SocketAddr;

use axum::Router;
use chatter::api::{self, AppState};
use chatter::ws::ChatHub;

/// Create a test application with a fresh hub.
pub fn test_app() -> Router {
    let state = AppState::new(ChatHub::new());
    api::create_router(state)
}

/// Serve a test application on an ephemeral local port.
#[allow(dead_code)]
pub async fn spawn_app() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("binding test listener");
    let addr = listener.local_addr().expect("test listener address");

    tokio::spawn(async move {
        axum::serve(listener, test_app())
            .await
            .expect("serving test app");
    });

    addr
}
