//! WebSocket echo endpoint.
//!
//! Every text frame is answered with `Echo: {data}`. The loop ends when the
//! client closes the socket or the connection errors.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures_util::{SinkExt, StreamExt};

/// GET /ws - Upgrade to a WebSocket echo session.
pub async fn ws_handler(ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(handle_ws_connection)
}

async fn handle_ws_connection(socket: WebSocket) {
    let (mut ws_sender, mut ws_receiver) = socket.split();
    tracing::debug!("websocket connected");

    while let Some(msg_result) = ws_receiver.next().await {
        match msg_result {
            Ok(Message::Text(text)) => {
                let reply = echo_reply(text.as_str());
                if ws_sender.send(Message::Text(reply.into())).await.is_err() {
                    // Client disconnected
                    break;
                }
            }
            Ok(Message::Close(_)) => break,
            // Ping/pong are answered by axum; binary frames are ignored.
            Ok(_) => {}
            Err(err) => {
                tracing::debug!("WebSocket receive error: {err}");
                break;
            }
        }
    }

    tracing::debug!("websocket closed");
}

fn echo_reply(data: &str) -> String {
    format!("Echo: {data}")
}
