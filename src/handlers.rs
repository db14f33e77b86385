//! Event handlers.
//!
//! Handlers are pure with respect to the socket: they log and return the
//! outbound messages for the originating connection. The receive loop in
//! `routes::ws` owns all sending.

use tracing::info;
use uuid::Uuid;

use crate::event::{CONNECT_EVENT, CONNECT_EVENT_DATA, CONNECT_MESSAGE, Event, MESSAGE_ACK, Outbound};

/// Route an event to its handler.
#[must_use]
pub fn dispatch(conn_id: Uuid, event: &Event) -> Vec<Outbound> {
    match event {
        Event::Connect => handle_connect(conn_id),
        Event::Message(text) => handle_message(conn_id, text),
        Event::Disconnect => {
            handle_disconnect(conn_id);
            Vec::new()
        }
    }
}

/// Greets a freshly upgraded connection with a plain message followed by a
/// tagged event.
#[must_use]
pub fn handle_connect(conn_id: Uuid) -> Vec<Outbound> {
    info!(%conn_id, "ws: connection established");
    vec![Outbound::message(CONNECT_MESSAGE), Outbound::emit(CONNECT_EVENT, CONNECT_EVENT_DATA)]
}

/// Acknowledges one inbound text frame. The text is logged, never parsed.
#[must_use]
pub fn handle_message(conn_id: Uuid, text: &str) -> Vec<Outbound> {
    info!(%conn_id, data = %text, "ws: data received");
    vec![Outbound::message(MESSAGE_ACK)]
}

pub fn handle_disconnect(conn_id: Uuid) {
    info!(%conn_id, "ws: connection terminated");
}

#[cfg(test)]
#[path = "handlers_test.rs"]
mod tests;
