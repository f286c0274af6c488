//! Minimal HTTP/1.1 server serving one fixed response for integration tests.
//!
//! Every request gets the same status and body, regardless of method or path
//! (a proxy endpoint and a direct page look identical to the client).

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Copy)]
pub struct PageServerOptions {
    /// Status line suffix, e.g. "200 OK" or "404 Not Found".
    pub status: &'static str,
    pub content_type: &'static str,
}

impl Default for PageServerOptions {
    fn default() -> Self {
        Self {
            status: "200 OK",
            content_type: "text/html; charset=utf-8",
        }
    }
}

/// Starts a server in a background thread serving `body`. Returns the base URL
/// (e.g. "http://127.0.0.1:12345/"). The server runs until the process exits.
pub fn start(body: &str) -> String {
    start_with_options(body, PageServerOptions::default())
}

/// Like `start` but allows customizing the status line and content type.
pub fn start_with_options(body: &str, opts: PageServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body.to_string());
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, &body, opts));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: std::net::TcpStream, body: &str, opts: PageServerOptions) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));

    // Consume the request before answering; the contents don't matter.
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        opts.status,
        opts.content_type,
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body.as_bytes());
}
