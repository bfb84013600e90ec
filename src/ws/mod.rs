//! WebSocket relay: connection tracking and message broadcast.
//!
//! A client loads the chat page over HTTP, opens a socket to `/ws`, and
//! from then on all communication is `"chat message"` events over that
//! socket. The hub holds the set of live connections and fans every
//! message out to all of them, the sender included. There is no queue,
//! no history, and no delivery guarantee beyond best effort.

mod handler;
mod hub;
mod types;

pub use handler::ws_handler;
pub use hub::{ChatHub, ConnectionId, ConnectionSender};
pub use types::{ClientEvent, ConnectionState, ServerEvent};
