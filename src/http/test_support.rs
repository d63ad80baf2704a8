use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Canned answer for one request path.
#[derive(Debug, Clone)]
pub(crate) struct MockRoute {
    pub(crate) path: String,
    pub(crate) status: u16,
    pub(crate) body: String,
}

impl MockRoute {
    pub(crate) fn json(path: &str, body: &serde_json::Value) -> Self {
        Self {
            path: path.to_owned(),
            status: 200,
            body: body.to_string(),
        }
    }

    pub(crate) fn raw(path: &str, status: u16, body: &str) -> Self {
        Self {
            path: path.to_owned(),
            status,
            body: body.to_owned(),
        }
    }
}

/// In-process stand-in for the Alyvix Server API.
pub(crate) struct MockServer {
    base_url: String,
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl MockServer {
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawns the mock server, or returns `None` where the sandbox forbids sockets.
pub(crate) fn spawn_mock_server_or_skip(
    routes: Vec<MockRoute>,
) -> Result<Option<MockServer>, String> {
    match spawn_mock_server(routes) {
        Ok(server) => Ok(Some(server)),
        Err(err) if err.contains("Operation not permitted") => {
            eprintln!("Skipping mock server test: {}", err);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn spawn_mock_server(routes: Vec<MockRoute>) -> Result<MockServer, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let routes = Arc::new(routes);
    let (shutdown_tx, shutdown_rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    let routes = Arc::clone(&routes);
                    thread::spawn(move || handle_client(stream, &routes));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(10));
                }
                Err(_) => break,
            }
        }
    });

    Ok(MockServer {
        base_url: format!("http://{}", addr),
        shutdown: shutdown_tx,
        thread: Some(handle),
    })
}

/// Address nothing listens on.
pub(crate) fn closed_base_url() -> Result<String, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    drop(listener);
    Ok(format!("http://{}", addr))
}

fn handle_client(mut stream: TcpStream, routes: &[MockRoute]) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    let mut buffer = [0u8; 4096];
    let Ok(read) = stream.read(&mut buffer) else {
        return;
    };
    let request = String::from_utf8_lossy(buffer.get(..read).unwrap_or_default());
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or_default();

    let (status, body) = routes
        .iter()
        .find(|route| route.path == path)
        .map_or((404, "{\"detail\": \"Not found.\"}"), |route| {
            (route.status, route.body.as_str())
        });
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason(status),
        body.len(),
        body
    );
    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

const fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
