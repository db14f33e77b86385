//! Per-connection lifecycle.
//!
//! DESIGN
//! ======
//! `Connecting → Open → Closed`. The receive loop drives one `Connection`
//! per socket and routes every event through it, so handler ordering holds
//! no matter how the transport ends:
//! - connect fires once, on `Connecting → Open`
//! - message fires only while `Open`
//! - disconnect fires once, on `Open → Closed`; `Closed` is terminal

use uuid::Uuid;

use crate::event::{Event, Outbound};
use crate::handlers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connecting,
    Open,
    Closed,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("connection {id} cannot accept {event} while {state:?}")]
pub struct LifecycleError {
    pub id: Uuid,
    pub event: &'static str,
    pub state: ConnectionState,
}

/// Opaque handle for one duplex channel. The id only appears in logs.
#[derive(Debug)]
pub struct Connection {
    id: Uuid,
    state: ConnectionState,
}

impl Default for Connection {
    fn default() -> Self {
        Self::new()
    }
}

impl Connection {
    #[must_use]
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    #[must_use]
    pub fn with_id(id: Uuid) -> Self {
        Self { id, state: ConnectionState::Connecting }
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Complete the upgrade and return the greeting.
    ///
    /// # Errors
    ///
    /// Fails unless the connection is still `Connecting`.
    pub fn open(&mut self) -> Result<Vec<Outbound>, LifecycleError> {
        self.expect_state(ConnectionState::Connecting, &Event::Connect)?;
        self.state = ConnectionState::Open;
        Ok(handlers::dispatch(self.id, &Event::Connect))
    }

    /// Handle one inbound text frame and return the reply.
    ///
    /// # Errors
    ///
    /// Fails unless the connection is `Open`.
    pub fn receive(&mut self, text: impl Into<String>) -> Result<Vec<Outbound>, LifecycleError> {
        let event = Event::Message(text.into());
        self.expect_state(ConnectionState::Open, &event)?;
        Ok(handlers::dispatch(self.id, &event))
    }

    /// Mark the transport closed. Returns `true` when this call fired the
    /// disconnect handler; a connection that never opened closes silently.
    pub fn close(&mut self) -> bool {
        let was_open = self.state == ConnectionState::Open;
        self.state = ConnectionState::Closed;
        if was_open {
            let outbound = handlers::dispatch(self.id, &Event::Disconnect);
            debug_assert!(outbound.is_empty());
        }
        was_open
    }

    fn expect_state(&self, expected: ConnectionState, event: &Event) -> Result<(), LifecycleError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(LifecycleError { id: self.id, event: event.kind(), state: self.state })
        }
    }
}

#[cfg(test)]
#[path = "connection_test.rs"]
mod tests;
