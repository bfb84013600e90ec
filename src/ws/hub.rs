//! Hub owning the connection set and performing broadcast.

use dashmap::DashMap;
use log::{info, warn};
use tokio::sync::mpsc;
use uuid::Uuid;

use super::types::{ConnectionState, ServerEvent};

/// Size of the per-connection send buffer.
const CONNECTION_BUFFER_SIZE: usize = 64;

/// Opaque identifier assigned to a connection at registration.
pub type ConnectionId = Uuid;

/// A sender for events to a specific client.
pub type ConnectionSender = mpsc::Sender<ServerEvent>;

/// Hub managing all live connections.
///
/// The connection set is the only shared mutable state in the system.
/// It is mutated exclusively through [`register`](ChatHub::register) and
/// [`unregister`](ChatHub::unregister); a connection is a member of the
/// set if and only if it is currently connected.
pub struct ChatHub {
    /// Connection ID -> sender for that client's outbound events.
    connections: DashMap<ConnectionId, ConnectionSender>,
}

impl ChatHub {
    /// Create a new hub with an empty connection set.
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
        }
    }

    /// Register a new connection.
    ///
    /// Returns the assigned connection ID and a receiver for events
    /// targeted at this connection.
    pub fn register(&self) -> (ConnectionId, mpsc::Receiver<ServerEvent>) {
        let (tx, rx) = mpsc::channel(CONNECTION_BUFFER_SIZE);
        let id = Uuid::new_v4();
        self.connections.insert(id, tx);
        info!("connection {} {}", id, ConnectionState::Connected);
        (id, rx)
    }

    /// Remove a connection from the set.
    pub fn unregister(&self, id: ConnectionId) {
        if self.connections.remove(&id).is_some() {
            info!("connection {} {}", id, ConnectionState::Disconnected);
        }
    }

    /// Deliver `event` to every connection currently in the set, the
    /// sender included.
    ///
    /// Delivery is fire-and-forget: no acknowledgment, no retry, no
    /// backpressure. A connection whose buffer is full or whose receiver
    /// is gone is skipped; its transport is responsible for surfacing
    /// the disconnect.
    pub fn broadcast(&self, event: &ServerEvent) {
        for entry in self.connections.iter() {
            if let Err(err) = entry.value().try_send(event.clone()) {
                warn!("dropping event for connection {}: {}", entry.key(), err);
            }
        }
    }

    /// Number of currently connected clients.
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Whether `id` is currently a member of the connection set.
    pub fn is_connected(&self, id: ConnectionId) -> bool {
        self.connections.contains_key(&id)
    }
}

impl Default for ChatHub {
    fn default() -> Self {
        Self::new()
    }
}
