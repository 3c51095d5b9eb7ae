//! One-shot HTTP server for client tests

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// Serves a single response, then exits.
///
/// The handle yields the request line (e.g. `GET /changes/13.0/hammerhead HTTP/1.1`).
pub struct OneShotServer {
    pub base_url: String,
    handle: JoinHandle<String>,
}

impl OneShotServer {
    pub fn respond(status: &str, content_type: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            content_type,
            body.len(),
            body
        );

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            loop {
                let mut header = String::new();
                let n = reader.read_line(&mut header).unwrap();
                if n == 0 || header == "\r\n" {
                    break;
                }
            }

            let mut stream = reader.into_inner();
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            request_line.trim_end().to_string()
        });

        Self { base_url, handle }
    }

    pub fn json(body: &str) -> Self {
        Self::respond("200 OK", "application/json", body)
    }

    /// Request line received by the server
    pub fn request_line(self) -> String {
        self.handle.join().unwrap()
    }
}
