/// Test helpers: a throwaway HTTP provider served from a local socket
use premium_services::modules::discovery::DiscoveryConfig;
use premium_services::shared::utils::init_logger;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Address nothing listens on; connecting fails immediately
pub const DEAD_PROVIDER: &str = "127.0.0.1:1";

/// Canned answer for one request path
#[derive(Clone)]
pub struct StubRoute {
    pub path: &'static str,
    pub status: u16,
    pub body: String,
    pub delay: Option<Duration>,
}

impl StubRoute {
    pub fn ok(path: &'static str, body: impl Into<String>) -> Self {
        Self {
            path,
            status: 200,
            body: body.into(),
            delay: None,
        }
    }

    pub fn status(path: &'static str, status: u16) -> Self {
        Self {
            path,
            status,
            body: r#"{"error":"unavailable"}"#.to_string(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Start a provider on an ephemeral port and return its `host:port` identifier
pub async fn spawn_stub_provider(routes: Vec<StubRoute>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub provider");
    let address = listener
        .local_addr()
        .expect("Stub provider has no local address")
        .to_string();
    let routes = Arc::new(routes);

    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            let routes = Arc::clone(&routes);
            tokio::spawn(async move {
                serve_one(socket, &routes).await;
            });
        }
    });

    address
}

async fn serve_one(mut socket: TcpStream, routes: &[StubRoute]) {
    let mut request = Vec::new();
    let mut chunk = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&chunk[..n]),
        }
    }

    let head = String::from_utf8_lossy(&request);
    let path = head.split_whitespace().nth(1).unwrap_or("/").to_string();
    let route = routes
        .iter()
        .find(|r| r.path == path)
        .cloned()
        .unwrap_or_else(|| StubRoute::status("/", 404));

    if let Some(delay) = route.delay {
        tokio::time::sleep(delay).await;
    }

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        route.status,
        reason_phrase(route.status),
        route.body.len(),
        route.body
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        204 => "No Content",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// Plain-HTTP discovery config for the given stub providers; also sets up logging
pub fn local_config(providers: &[&str]) -> DiscoveryConfig {
    init_logger();
    DiscoveryConfig::default()
        .with_providers(providers.iter().copied())
        .with_scheme("http")
        .with_timeout_seconds(2)
}
