//! HTTP transport for the collector wire protocol
//!
//! POSTs each record to the configured endpoint as a JSON document. Any
//! 2xx response counts as an accepted delivery; the acknowledgment body is
//! ignored. Anything else, including transport-level failures, is a
//! delivery failure for the caller to recover from.

use super::Transport;
use crate::core::error::{LoggerError, Result};
use crate::core::record::LogRecord;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Create a transport posting to the given collector URL
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| {
                LoggerError::config("HttpTransport", format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn deliver(&self, record: &LogRecord) -> Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(record)
            .send()
            .await
            .map_err(|e| LoggerError::transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(LoggerError::rejected(status.as_u16()))
        }
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::log_level::LogLevel;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    /// Accept one request on a loopback socket and answer with the given
    /// status line, returning the URL to post to and the received request.
    fn spawn_collector(status_line: &'static str) -> (String, std::thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let addr = listener.local_addr().unwrap();

        let handle = std::thread::spawn(move || {
            let (mut socket, _) = listener.accept().expect("accept");
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];

            // read headers, then the content-length body
            let header_end = loop {
                let n = socket.read(&mut chunk).expect("read request");
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };
            let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
            let content_length: usize = head
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    if name.eq_ignore_ascii_case("content-length") {
                        value.trim().parse().ok()
                    } else {
                        None
                    }
                })
                .unwrap_or(0);
            while buf.len() < header_end + content_length {
                let n = socket.read(&mut chunk).expect("read body");
                buf.extend_from_slice(&chunk[..n]);
            }

            let body = "{\"ok\":true}";
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).expect("write response");
            String::from_utf8_lossy(&buf).to_string()
        });

        (format!("http://{}/logs", addr), handle)
    }

    fn record() -> LogRecord {
        LogRecord::new(LogLevel::Info, "UI", "shortener", "created link")
    }

    #[tokio::test]
    async fn test_2xx_is_accepted() {
        let (url, server) = spawn_collector("201 Created");
        let transport = HttpTransport::new(&url).unwrap();

        transport.deliver(&record()).await.unwrap();

        let request = server.join().unwrap();
        assert!(request.starts_with("POST /logs"));
        assert!(request.contains("content-type: application/json"));
        assert!(request.contains("\"message\":\"created link\""));
    }

    #[tokio::test]
    async fn test_non_success_status_is_rejected() {
        let (url, server) = spawn_collector("500 Internal Server Error");
        let transport = HttpTransport::new(&url).unwrap();

        let result = transport.deliver(&record()).await;
        assert!(matches!(
            result,
            Err(LoggerError::DeliveryRejected { status: 500 })
        ));
        server.join().unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_failure() {
        // bind then drop to get a port nothing is listening on
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let transport = HttpTransport::new(format!("http://127.0.0.1:{}/logs", port)).unwrap();

        let result = transport.deliver(&record()).await;
        assert!(matches!(result, Err(LoggerError::TransportFailure { .. })));
    }
}
