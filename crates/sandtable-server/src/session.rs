//! The transport seam: WebSocket handshake, frame decode, and the
//! reader/writer task pair serving one viewer.

use futures_util::{SinkExt, StreamExt};
use thiserror::Error;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;

use sandtable_core::protocol::{ClientToServer, ServerToClient};

use crate::world::{encode, WorldEvent};

/// Unique identifier for one connected viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub u64);

/// Why an inbound frame was rejected. The variant picks the error text
/// echoed to the sender; neither case terminates the session.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed message: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unsupported message type: {0}")]
    UnknownType(String),
}

const KNOWN_TYPES: [&str; 3] = ["simCommand", "addWaypoint", "setTarget"];

/// Decode one text frame into a client message, distinguishing frames
/// that are not JSON (or carry a broken payload) from frames whose
/// `type` tag we simply do not speak.
pub fn parse_frame(text: &str) -> Result<ClientToServer, ProtocolError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let tag = value
        .get("type")
        .and_then(|t| t.as_str())
        .unwrap_or("<none>")
        .to_string();
    match serde_json::from_value(value) {
        Ok(msg) => Ok(msg),
        Err(e) if KNOWN_TYPES.contains(&tag.as_str()) => Err(ProtocolError::Malformed(e)),
        Err(_) => Err(ProtocolError::UnknownType(tag)),
    }
}

/// Serve one connection until its transport closes.
///
/// The writer task drains an unbounded outbound queue so a slow socket
/// can never block the world task or delivery to other sessions. The
/// reader loop decodes frames: well-formed ones go to the world task,
/// rejected ones are answered with an `error` frame directly.
pub async fn run_session(
    stream: TcpStream,
    id: SessionId,
    events: mpsc::UnboundedSender<WorldEvent>,
) {
    let ws = match accept_async(stream).await {
        Ok(ws) => ws,
        Err(e) => {
            tracing::warn!("WebSocket handshake failed for session {}: {e}", id.0);
            return;
        }
    };
    let (mut sink, mut source) = ws.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();

    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sink.send(msg).await.is_err() {
                break;
            }
        }
        let _ = sink.close().await;
    });

    if events
        .send(WorldEvent::Connected { id, tx: tx.clone() })
        .is_err()
    {
        return; // world task gone, server is shutting down
    }

    while let Some(frame) = source.next().await {
        match frame {
            Ok(Message::Text(text)) => match parse_frame(&text) {
                Ok(msg) => {
                    if events.send(WorldEvent::Frame { id, msg }).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    tracing::debug!("rejected frame from session {}: {err}", id.0);
                    let reply = ServerToClient::Error {
                        message: err.to_string(),
                    };
                    if let Some(text) = encode(&reply) {
                        let _ = tx.send(Message::text(text));
                    }
                }
            },
            Ok(Message::Close(_)) => break,
            Ok(_) => {} // binary/ping/pong: nothing to do
            Err(e) => {
                tracing::debug!("transport error on session {}: {e}", id.0);
                break;
            }
        }
    }

    let _ = events.send(WorldEvent::Disconnected { id });
}
