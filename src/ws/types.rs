//! Wire types for the relay protocol.
//!
//! The event name is the wire contract: both directions carry
//! `{"event": "chat message", "payload": <any JSON>}` text frames. The
//! payload is opaque and forwarded unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Events (Server -> Client)
// ============================================================================

/// Events sent from the relay to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "payload")]
pub enum ServerEvent {
    /// A chat message rebroadcast to every connected client.
    #[serde(rename = "chat message")]
    ChatMessage(Value),
}

// ============================================================================
// Events (Client -> Server)
// ============================================================================

/// Events sent from clients to the relay.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", content = "payload")]
pub enum ClientEvent {
    /// A chat message to rebroadcast. The payload is not validated.
    #[serde(rename = "chat message")]
    ChatMessage(Value),
}

// ============================================================================
// Internal Types
// ============================================================================

/// Lifecycle state of a connection.
///
/// Disconnected is terminal: a reconnecting client is a new connection
/// with a new identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connecting,
    Connected,
    Disconnected,
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionState::Connecting => write!(f, "connecting"),
            ConnectionState::Connected => write!(f, "connected"),
            ConnectionState::Disconnected => write!(f, "disconnected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn server_event_carries_the_wire_event_name() {
        let event = ServerEvent::ChatMessage(json!("hi"));
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event"], "chat message");
        assert_eq!(value["payload"], "hi");
    }

    #[test]
    fn client_event_preserves_arbitrary_payloads() {
        let frame = r#"{"event":"chat message","payload":{"nested":[1,2,3],"text":"olá"}}"#;
        let ClientEvent::ChatMessage(payload) = serde_json::from_str(frame).unwrap();
        assert_eq!(payload, json!({"nested": [1, 2, 3], "text": "olá"}));
    }

    #[test]
    fn unknown_event_names_are_rejected() {
        let frame = r#"{"event":"typing","payload":"x"}"#;
        assert!(serde_json::from_str::<ClientEvent>(frame).is_err());
    }

    #[test]
    fn connection_state_display() {
        assert_eq!(ConnectionState::Connecting.to_string(), "connecting");
        assert_eq!(ConnectionState::Connected.to_string(), "connected");
        assert_eq!(ConnectionState::Disconnected.to_string(), "disconnected");
    }
}
