//! Test fixtures: an isolated config home and a local joke server

use anyhow::Result;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use tempfile::TempDir;

/// Temporary directory holding the config file and log directory
pub struct TestHome {
    dir: TempDir,
}

impl TestHome {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write the `[search]` table of the config file
    pub fn write_search_config(&self, endpoint: &str, delay_ms: u64) -> Result<()> {
        let contents = format!(
            "[search]\nendpoint = \"{}\"\ndelay_ms = {}\ntimeout_secs = 5\n",
            endpoint, delay_ms
        );
        std::fs::write(self.path().join("config.toml"), contents)?;
        Ok(())
    }
}

/// Minimal HTTP server answering every request with the same JSON body
pub struct JokeServer {
    endpoint: String,
    requests: Arc<Mutex<Vec<String>>>,
    _handle: JoinHandle<()>,
}

impl JokeServer {
    /// Serve up to `max_requests` requests, then stop accepting
    pub fn start(body: &'static str, max_requests: usize) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let endpoint = format!("http://{}/search", listener.local_addr()?);
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        let handle = std::thread::spawn(move || {
            for stream in listener.incoming().take(max_requests) {
                let Ok(mut stream) = stream else { break };

                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                loop {
                    let n = match stream.read(&mut buf) {
                        Ok(n) => n,
                        Err(_) => break,
                    };
                    request.extend_from_slice(&buf[..n]);
                    if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }

                let text = String::from_utf8_lossy(&request).to_string();
                let request_line = text.lines().next().unwrap_or_default().to_string();
                seen.lock().unwrap().push(request_line);

                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        Ok(Self {
            endpoint,
            requests,
            _handle: handle,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request lines received so far (e.g. `GET /search?term=dog HTTP/1.1`)
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}
