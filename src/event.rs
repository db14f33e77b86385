//! Event kinds and outbound messages exchanged over a WebSocket connection.
//!
//! DESIGN
//! ======
//! - Inbound traffic is a closed set of lifecycle events: connect, one
//!   message per text frame, disconnect.
//! - Outbound traffic is either a plain text message or a tagged event.
//!   Plain messages go on the wire as the raw text. Tagged events go on the
//!   wire as `{"event": <name>, "data": <payload>}`.

// =============================================================================
// PROTOCOL CONSTANTS
// =============================================================================

/// Plain message sent to every client right after the upgrade.
pub const CONNECT_MESSAGE: &str = "Send data";

/// Name of the tagged event sent right after the upgrade.
pub const CONNECT_EVENT: &str = "EmitKeyWord";

/// Payload of [`CONNECT_EVENT`].
pub const CONNECT_EVENT_DATA: &str = "Emit Data";

/// Fixed reply to every inbound text frame. The spelling is part of the
/// wire contract.
pub const MESSAGE_ACK: &str = "Data recieved from web";

// =============================================================================
// TYPES
// =============================================================================

/// Lifecycle event delivered to the handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Connect,
    /// One inbound text frame, verbatim.
    Message(String),
    Disconnect,
}

impl Event {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Connect => "connect",
            Event::Message(_) => "message",
            Event::Disconnect => "disconnect",
        }
    }
}

/// Message queued for the originating connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    /// Default message channel: the text is sent as-is.
    Message(String),
    /// Named event with a text payload.
    Emit { event: String, data: String },
}

impl Outbound {
    #[must_use]
    pub fn message(text: impl Into<String>) -> Self {
        Outbound::Message(text.into())
    }

    #[must_use]
    pub fn emit(event: impl Into<String>, data: impl Into<String>) -> Self {
        Outbound::Emit { event: event.into(), data: data.into() }
    }

    /// Encode for a single WebSocket text frame.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Outbound::Message(text) => text.clone(),
            Outbound::Emit { event, data } => serde_json::json!({ "event": event, "data": data }).to_string(),
        }
    }
}

#[cfg(test)]
#[path = "event_test.rs"]
mod tests;
