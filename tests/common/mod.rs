//! Canned Toggl API server for integration tests.
//!
//! Serves fixed responses per request path and records the raw request
//! heads so tests can inspect headers and query strings.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use toggl2sgu::api::toggl::TogglConfig;

pub const TEST_TOKEN: &str = "secret";
/// base64("secret:api_token")
pub const TEST_BASIC_AUTH: &str = "Basic c2VjcmV0OmFwaV90b2tlbg==";

pub const ME_JSON: &str = r#"{"id": 7, "default_workspace_id": 42, "fullname": "Jane Doe"}"#;

pub const PROJECTS_JSON: &str = r#"[
    {"id": 1, "name": "Alpha", "active": true, "workspace_id": 42},
    {"id": 2, "name": "Beta", "active": false, "workspace_id": 42}
]"#;

pub const TIME_ENTRIES_JSON: &str = r#"[
    {"id": 11, "project_id": 1, "start": "2024-03-05T09:00:00Z", "stop": "2024-03-05T10:30:00Z",
     "duration": 5400, "description": "Fix login bug #ABC-123", "tags": ["dev"]},
    {"id": 12, "project_id": 1, "start": "2024-03-05T14:00:00Z", "stop": "2024-03-05T16:15:00Z",
     "duration": 8100, "description": "Fix login bug", "tags": ["dev"]},
    {"id": 13, "project_id": 2, "start": "2024-03-06T09:00:00+00:00", "stop": "2024-03-06T09:45:00+00:00",
     "duration": 2700, "description": "Planning", "tags": ["meeting", "team"]},
    {"id": 14, "project_id": null, "start": "2024-03-06T11:00:00Z", "stop": "2024-03-06T12:01:01Z",
     "duration": 3661, "description": null, "tags": null}
]"#;

#[derive(Clone)]
pub struct Route {
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

pub struct MockToggl {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockToggl {
    /// Server answering the three report endpoints with the fixtures above.
    pub async fn with_fixtures() -> Self {
        Self::start(vec![
            ("/api/v9/me", Route::ok(ME_JSON)),
            ("/api/v9/workspaces/42/projects", Route::ok(PROJECTS_JSON)),
            ("/api/v9/me/time_entries", Route::ok(TIME_ENTRIES_JSON)),
        ])
        .await
    }

    /// Starts a server on an ephemeral port. Unknown paths get a 404.
    pub async fn start(routes: Vec<(&str, Route)>) -> Self {
        let routes: Arc<HashMap<String, Route>> =
            Arc::new(routes.into_iter().map(|(path, route)| (path.to_string(), route)).collect());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let recorded = requests.clone();
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let routes = routes.clone();
                let recorded = recorded.clone();
                tokio::spawn(async move {
                    let head = read_head(&mut socket).await;
                    let path = request_path(&head);
                    recorded.lock().unwrap().push(head);

                    let route = routes.get(&path).cloned().unwrap_or_else(|| Route::status(404, "{}"));
                    let response = format!(
                        "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        route.status,
                        route.body.len(),
                        route.body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self { addr, requests }
    }

    pub fn config(&self) -> TogglConfig {
        TogglConfig {
            api_token: TEST_TOKEN.to_string(),
            api_url: format!("http://{}/api/v9", self.addr),
        }
    }

    /// Raw request heads in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn read_head(socket: &mut tokio::net::TcpStream) -> String {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..n]);
        if buffer.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }
    String::from_utf8_lossy(&buffer).to_string()
}

/// Request target of the first line, without the query string.
fn request_path(head: &str) -> String {
    let target = head.lines().next().and_then(|line| line.split_whitespace().nth(1)).unwrap_or("/");
    target.split('?').next().unwrap_or(target).to_string()
}

/// Request target of the first line, with the query string.
pub fn request_target(head: &str) -> String {
    head.lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or_default()
        .to_string()
}

/// Value of a header in a raw request head, matched case-insensitively.
pub fn header_value(head: &str, name: &str) -> Option<String> {
    head.lines().skip(1).find_map(|line| {
        let (key, value) = line.split_once(':')?;
        key.trim().eq_ignore_ascii_case(name).then(|| value.trim().to_string())
    })
}
