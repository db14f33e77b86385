//! WebSocket handler: per-connection receive loop.
//!
//! DESIGN
//! ======
//! Each upgraded socket gets its own task and its own `Connection`. The loop
//! feeds lifecycle events into the connection and writes whatever the
//! handlers return back to the same socket. Nothing is shared between
//! connections, so replies can never reach another client.
//!
//! LIFECYCLE
//! =========
//! 1. Upgrade → connect handler → greeting frames
//! 2. Each text frame → message handler → ack frame
//! 3. Close frame, stream end, receive error or send error → disconnect handler

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use tracing::{debug, warn};

use crate::connection::Connection;
use crate::event::Outbound;

/// Why the receive loop stopped.
#[derive(Debug, thiserror::Error)]
enum LoopExit {
    #[error("peer closed the connection")]
    PeerClosed,
    #[error("receive failed: {0}")]
    Recv(axum::Error),
    #[error("send failed: {0}")]
    Send(axum::Error),
    #[error(transparent)]
    Lifecycle(#[from] crate::connection::LifecycleError),
}

// =============================================================================
// UPGRADE
// =============================================================================

pub async fn handle_ws(ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(run_ws)
}

// =============================================================================
// CONNECTION
// =============================================================================

async fn run_ws(mut socket: WebSocket) {
    let mut conn = Connection::new();
    let conn_id = conn.id();

    let exit = serve_connection(&mut socket, &mut conn).await;
    match &exit {
        LoopExit::PeerClosed => debug!(%conn_id, "ws: peer closed"),
        other => warn!(%conn_id, reason = %other, "ws: connection ended abnormally"),
    }

    let disconnect_fired = conn.close();
    debug!(%conn_id, state = ?conn.state(), disconnect_fired, "ws: receive loop finished");
}

async fn serve_connection(socket: &mut WebSocket, conn: &mut Connection) -> LoopExit {
    match conn.open() {
        Ok(greeting) => {
            if let Err(e) = send_all(socket, &greeting).await {
                return e;
            }
        }
        Err(e) => return e.into(),
    }

    loop {
        let Some(msg) = socket.recv().await else {
            return LoopExit::PeerClosed;
        };
        let msg = match msg {
            Ok(msg) => msg,
            Err(e) => return LoopExit::Recv(e),
        };

        match msg {
            Message::Text(text) => {
                let replies = match conn.receive(text.as_str()) {
                    Ok(replies) => replies,
                    Err(e) => return e.into(),
                };
                if let Err(e) = send_all(socket, &replies).await {
                    return e;
                }
            }
            Message::Close(_) => return LoopExit::PeerClosed,
            Message::Binary(bytes) => {
                debug!(conn_id = %conn.id(), len = bytes.len(), "ws: ignoring binary frame");
            }
            // Pings are answered by the transport.
            Message::Ping(_) | Message::Pong(_) => {}
        }
    }
}

// =============================================================================
// HELPERS
// =============================================================================

async fn send_all(socket: &mut WebSocket, outbound: &[Outbound]) -> Result<(), LoopExit> {
    for out in outbound {
        socket
            .send(Message::Text(out.to_text().into()))
            .await
            .map_err(LoopExit::Send)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "ws_test.rs"]
mod tests;
