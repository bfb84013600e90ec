//! End-to-end broadcast behavior over real WebSocket connections.

use std::net::SocketAddr;
use std::time::Duration;

use futures::{SinkExt, StreamExt};
use serde_json::{Value, json};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

mod common;

type WsClient = WebSocketStream<MaybeTlsStream<TcpStream>>;

async fn connect(addr: SocketAddr) -> WsClient {
    let (client, _) = connect_async(format!("ws://{addr}/ws"))
        .await
        .expect("websocket handshake");
    // Give the server a moment to register the connection.
    tokio::time::sleep(Duration::from_millis(50)).await;
    client
}

async fn send_chat(client: &mut WsClient, payload: Value) {
    let frame = json!({ "event": "chat message", "payload": payload }).to_string();
    client
        .send(Message::Text(frame.into()))
        .await
        .expect("sending frame");
}

async fn recv_chat(client: &mut WsClient) -> Value {
    let msg = timeout(Duration::from_secs(2), client.next())
        .await
        .expect("timed out waiting for frame")
        .expect("stream ended")
        .expect("frame error");
    let text = msg.into_text().expect("text frame");
    let value: Value = serde_json::from_str(text.as_str()).expect("valid json frame");
    assert_eq!(value["event"], "chat message");
    value["payload"].clone()
}

/// A message from one client reaches every connected client, the sender
/// included.
#[tokio::test]
async fn test_broadcast_reaches_all_clients() {
    let addr = common::spawn_app().await;

    let mut a = connect(addr).await;
    let mut b = connect(addr).await;

    send_chat(&mut a, json!("hello")).await;

    assert_eq!(recv_chat(&mut a).await, json!("hello"));
    assert_eq!(recv_chat(&mut b).await, json!("hello"));
}

/// A client that disconnected before a broadcast does not receive it.
#[tokio::test]
async fn test_disconnected_client_is_excluded() {
    let addr = common::spawn_app().await;

    let mut a = connect(addr).await;
    let mut b = connect(addr).await;

    b.close(None).await.expect("closing b");
    tokio::time::sleep(Duration::from_millis(100)).await;

    send_chat(&mut a, json!("bye")).await;
    assert_eq!(recv_chat(&mut a).await, json!("bye"));
}

/// Payloads are forwarded unchanged, whatever their shape.
#[tokio::test]
async fn test_payload_is_forwarded_verbatim() {
    let addr = common::spawn_app().await;

    let mut a = connect(addr).await;

    let payload = json!({ "nested": [1, 2, 3], "text": "olá mundo" });
    send_chat(&mut a, payload.clone()).await;
    assert_eq!(recv_chat(&mut a).await, payload);
}

/// Sending the same payload twice yields two independent broadcasts.
#[tokio::test]
async fn test_duplicate_sends_are_not_deduplicated() {
    let addr = common::spawn_app().await;

    let mut a = connect(addr).await;

    send_chat(&mut a, json!("again")).await;
    send_chat(&mut a, json!("again")).await;

    assert_eq!(recv_chat(&mut a).await, json!("again"));
    assert_eq!(recv_chat(&mut a).await, json!("again"));
}

/// A frame that does not parse as a known event is dropped without
/// disturbing the connection.
#[tokio::test]
async fn test_malformed_frame_is_ignored() {
    let addr = common::spawn_app().await;

    let mut a = connect(addr).await;

    a.send(Message::Text("not json".into()))
        .await
        .expect("sending garbage");

    send_chat(&mut a, json!("still alive")).await;
    assert_eq!(recv_chat(&mut a).await, json!("still alive"));
}
