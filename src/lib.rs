//! Chat relay library.
//!
//! A web server that serves a static chat page and rebroadcasts every
//! `"chat message"` event to all connected WebSocket clients.

pub mod api;
pub mod ws;
