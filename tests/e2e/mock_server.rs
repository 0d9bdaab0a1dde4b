//! Mock log server for integration testing
//!
//! Serves canned JSON for the HTTP endpoints and accepts WebSocket upgrades
//! on `/logs/ws`, all on one ephemeral port. Requests are routed by the
//! longest matching path prefix.
//!
//! # Limitations
//!
//! - One HTTP request per connection (`Connection: close`)
//! - WebSocket detection peeks at the request line only
//! - Every stream connection receives the same scripted frames

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use futures_util::{SinkExt, StreamExt};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use tokio_tungstenite::tungstenite::protocol::{CloseFrame, Message as WsMessage};

/// A canned HTTP response for every path starting with `prefix`.
#[derive(Debug, Clone)]
pub struct Route {
    pub prefix: &'static str,
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn ok(prefix: &'static str, body: impl Into<String>) -> Self {
        Self {
            prefix,
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(prefix: &'static str, status: u16, body: impl Into<String>) -> Self {
        Self {
            prefix,
            status,
            body: body.into(),
        }
    }
}

/// What each stream connection does after the handshake.
#[derive(Debug, Clone, Default)]
pub struct StreamScript {
    /// Text frames pushed right after the handshake.
    pub frames: Vec<String>,
    /// Close the socket with this reason after the frames instead of
    /// echoing client text.
    pub close_with: Option<String>,
}

pub struct MockLogServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
    received: mpsc::UnboundedReceiver<String>,
    task: JoinHandle<()>,
}

impl MockLogServer {
    pub async fn start(routes: Vec<Route>, script: StreamScript) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let (received_tx, received) = mpsc::unbounded_channel();

        let routes = Arc::new(routes);
        let script = Arc::new(script);
        let seen = Arc::clone(&requests);
        let task = tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                let routes = Arc::clone(&routes);
                let script = Arc::clone(&script);
                let seen = Arc::clone(&seen);
                let received_tx = received_tx.clone();
                tokio::spawn(async move {
                    if is_stream_upgrade(&socket).await {
                        serve_stream(socket, &script, received_tx).await;
                    } else {
                        serve_http(socket, &routes, &seen).await;
                    }
                });
            }
        });

        Self {
            addr,
            requests,
            received,
            task,
        }
    }

    /// HTTP-only server.
    pub async fn http(routes: Vec<Route>) -> Self {
        Self::start(routes, StreamScript::default()).await
    }

    /// Stream-only server.
    pub async fn stream(script: StreamScript) -> Self {
        Self::start(Vec::new(), script).await
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn stream_url(&self) -> String {
        format!("ws://{}/logs/ws", self.addr)
    }

    /// Request targets (path and query) seen so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Next text frame written by a stream client.
    pub async fn next_client_text(&mut self) -> Option<String> {
        tokio::time::timeout(std::time::Duration::from_secs(5), self.received.recv())
            .await
            .ok()
            .flatten()
    }
}

impl Drop for MockLogServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn is_stream_upgrade(socket: &TcpStream) -> bool {
    let mut head = [0u8; 64];
    match socket.peek(&mut head).await {
        Ok(n) => String::from_utf8_lossy(&head[..n]).starts_with("GET /logs/ws"),
        Err(_) => false,
    }
}

async fn serve_stream(
    socket: TcpStream,
    script: &StreamScript,
    received_tx: mpsc::UnboundedSender<String>,
) {
    let Ok(mut ws) = accept_async(socket).await else {
        return;
    };

    for frame in &script.frames {
        if ws.send(WsMessage::Text(frame.clone().into())).await.is_err() {
            return;
        }
    }

    if let Some(reason) = &script.close_with {
        let frame = CloseFrame {
            code: CloseCode::Away,
            reason: reason.clone().into(),
        };
        let _ = ws.close(Some(frame)).await;
        return;
    }

    while let Some(Ok(msg)) = ws.next().await {
        match msg {
            WsMessage::Text(text) => {
                let text = text.to_string();
                let _ = received_tx.send(text.clone());
                if ws.send(WsMessage::Text(text.into())).await.is_err() {
                    break;
                }
            }
            WsMessage::Close(_) => break,
            _ => {}
        }
    }
}

async fn serve_http(mut socket: TcpStream, routes: &[Route], seen: &Mutex<Vec<String>>) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
        if buf.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }

    let head = String::from_utf8_lossy(&buf);
    let target = head.split_whitespace().nth(1).unwrap_or("/").to_string();
    seen.lock().unwrap().push(target.clone());

    let (status, body) = routes
        .iter()
        .filter(|route| target.starts_with(route.prefix))
        .max_by_key(|route| route.prefix.len())
        .map(|route| (route.status, route.body.clone()))
        .unwrap_or((404, r#"{"detail":"Not Found"}"#.to_string()));

    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        _ => "Error",
    };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}
