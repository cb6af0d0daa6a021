//! reqwest-backed implementation of the [`AssistantGateway`] port.

use assist_application::ports::assistant_gateway::AssistantGateway;
use assist_domain::{AssistantConfig, AssistantRequest, AssistantResponse, Query, TransportCause};
use async_trait::async_trait;
use std::error::Error as _;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Fixed upper bound on one round trip, connect to last body byte.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP gateway to the hosted assistant.
///
/// Holds no per-call state; the credential and endpoint arrive with each
/// call in the [`AssistantConfig`].
pub struct HttpAssistantGateway {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpAssistantGateway {
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub(crate) fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("dental-assist/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn transport_cause(&self, err: &reqwest::Error) -> TransportCause {
        if err.is_timeout() {
            TransportCause::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else if err.is_connect() {
            TransportCause::Connect {
                message: describe(err),
            }
        } else {
            TransportCause::Other {
                message: describe(err),
            }
        }
    }
}

/// Error message with its source chain, e.g. the underlying DNS or socket
/// error behind reqwest's "error sending request".
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[async_trait]
impl AssistantGateway for HttpAssistantGateway {
    async fn ask(&self, config: &AssistantConfig, query: &Query) -> AssistantResponse {
        let request = AssistantRequest::from_query(query, config.client_id());
        let start = Instant::now();

        let sent = self
            .client
            .post(config.endpoint())
            .bearer_auth(config.credential().expose())
            .json(&request)
            .send()
            .await;

        let response = match sent {
            Ok(r) => r,
            Err(e) => {
                let cause = self.transport_cause(&e);
                warn!("Assistant request failed: {}", cause);
                return AssistantResponse::transport(cause);
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(b) => b,
            Err(e) => {
                let cause = self.transport_cause(&e);
                warn!("Failed to read assistant response body: {}", cause);
                return AssistantResponse::transport(cause);
            }
        };

        debug!(
            "Assistant replied {} ({} bytes) in {} ms",
            status.as_u16(),
            body.len(),
            start.elapsed().as_millis()
        );
        if !status.is_success() {
            warn!(
                "Assistant returned HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            );
        }

        AssistantResponse::from_http(status.as_u16(), body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assist_domain::{Audience, Credential, Findings, Question};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    // ==================== Mock endpoint ====================

    /// Read one HTTP/1.1 request (head plus Content-Length body).
    async fn read_request(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..pos]).to_string();
                let content_length = head
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= pos + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).to_string()
    }

    /// Serve a single canned response; the handle yields the raw request.
    async fn serve_once(status_line: &'static str, body: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!(
            "http://{}/v1/chat-messages",
            listener.local_addr().unwrap()
        );

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let request = read_request(&mut stream).await;
            let response = format!(
                "HTTP/1.1 {}\r\n\
                 Content-Type: application/json\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\r\n\
                 {}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.ok();
            request
        });

        (url, handle)
    }

    fn config(endpoint: &str) -> AssistantConfig {
        let credential = Credential::parse(Some("app-abc123XYZ")).unwrap();
        AssistantConfig::new(credential)
            .with_endpoint(endpoint)
            .with_client_id("test-client")
    }

    fn query(question: &str) -> Query {
        Query::new(Question::try_new(question).unwrap())
    }

    fn request_body(raw: &str) -> serde_json::Value {
        let start = raw.find("\r\n\r\n").unwrap() + 4;
        serde_json::from_str(&raw[start..]).unwrap()
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_answered_round_trip() {
        let (url, server) = serve_once("200 OK", r#"{"answer": "X"}"#.to_string()).await;
        let gateway = HttpAssistantGateway::new().unwrap();

        let response = gateway.ask(&config(&url), &query("Stage?")).await;

        assert_eq!(
            response,
            AssistantResponse::Answered {
                answer: "X".to_string()
            }
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_request_shape_and_headers() {
        let (url, server) = serve_once("200 OK", r#"{"answer": "ok"}"#.to_string()).await;
        let gateway = HttpAssistantGateway::new().unwrap();

        let question = "What defines periodontitis according to AAP 2018?";
        gateway
            .ask(
                &config(&url),
                &query(question).with_audience(Audience::Clinician),
            )
            .await;

        let raw = server.await.unwrap();
        let head = raw[..raw.find("\r\n\r\n").unwrap()].to_ascii_lowercase();
        assert!(head.starts_with("post /v1/chat-messages http/1.1"));
        assert!(head.contains("authorization: bearer app-abc123xyz"));
        assert!(head.contains("content-type: application/json"));

        assert_eq!(
            request_body(&raw),
            serde_json::json!({
                "inputs": { "audience": "clinician", "findings_json": "" },
                "query": question,
                "response_mode": "blocking",
                "user": "test-client"
            })
        );
    }

    #[tokio::test]
    async fn test_invalid_findings_sent_verbatim() {
        let (url, server) = serve_once("200 OK", r#"{"answer": "ok"}"#.to_string()).await;
        let gateway = HttpAssistantGateway::new().unwrap();

        let raw = "tooth 30: {bone_loss_pct: 40%, furcation: II";
        let q = query("Stage?")
            .with_audience(Audience::Patient)
            .with_findings(Findings::new(raw));
        gateway.ask(&config(&url), &q).await;

        let body = request_body(&server.await.unwrap());
        assert_eq!(body["inputs"]["findings_json"], raw);
        assert_eq!(body["inputs"]["audience"], "patient");
    }

    #[tokio::test]
    async fn test_success_without_answer_keeps_body() {
        let body = r#"{"event":"message","answer":"","metadata":{"usage":{}}}"#.to_string();
        let (url, server) = serve_once("200 OK", body.clone()).await;
        let gateway = HttpAssistantGateway::new().unwrap();

        let response = gateway.ask(&config(&url), &query("Stage?")).await;

        assert_eq!(response, AssistantResponse::EmptyAnswer { body });
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_server_error_body_preserved() {
        let (url, server) =
            serve_once("500 Internal Server Error", "internal error".to_string()).await;
        let gateway = HttpAssistantGateway::new().unwrap();

        let response = gateway.ask(&config(&url), &query("Stage?")).await;

        assert_eq!(
            response,
            AssistantResponse::RemoteError {
                status: 500,
                body: "internal error".to_string()
            }
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unresponsive_endpoint_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/v1/chat-messages", listener.local_addr().unwrap());
        let server = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            read_request(&mut stream).await;
            // Hold the connection open without answering.
            tokio::time::sleep(Duration::from_secs(10)).await;
        });

        let gateway = HttpAssistantGateway::with_timeout(Duration::from_secs(1)).unwrap();
        let started = Instant::now();
        let response = gateway.ask(&config(&url), &query("Stage?")).await;

        assert_eq!(
            response,
            AssistantResponse::TransportFailure {
                cause: TransportCause::Timeout { seconds: 1 }
            }
        );
        assert!(started.elapsed() < Duration::from_secs(5));
        server.abort();
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway = HttpAssistantGateway::new().unwrap();
        let url = format!("http://{}/v1/chat-messages", addr);
        let response = gateway.ask(&config(&url), &query("Stage?")).await;

        match response {
            AssistantResponse::TransportFailure {
                cause: TransportCause::Connect { message },
            } => assert!(!message.contains("abc123XYZ")),
            other => panic!("expected connect failure, got {:?}", other),
        }
    }

    #[test]
    fn test_default_timeout_is_bounded() {
        assert!(REQUEST_TIMEOUT >= Duration::from_secs(30));
        assert!(REQUEST_TIMEOUT <= Duration::from_secs(60));
    }
}
