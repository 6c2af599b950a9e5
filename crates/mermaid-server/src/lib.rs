//! MCP (Model Context Protocol) server for Mermaid diagram conversion.
//!
//! Built on `rmcp`, which owns JSON-RPC framing, the initialize handshake and
//! method dispatch. This crate supplies the handler:
//! - `convert_mermaid_to_image`: render a diagram via mermaid.ink
//! - `validate_mermaid_syntax`: check that mermaid.ink accepts a diagram
//! - `get_supported_options`: list formats and themes
//! - `mermaid://examples/{diagram_type}`: example sources as resources
//!
//! Stdout carries the protocol, so logs must go to stderr.

pub mod resources;
mod server;

use rmcp::ServiceExt;
use rmcp::transport::stdio;

pub use server::{MermaidServer, SERVER_NAME, ValidateParams};

/// Server error.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The MCP handshake over stdio failed.
    #[error("Failed to start MCP server: {0}")]
    Start(String),

    /// The service task ended abnormally.
    #[error("MCP server task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Serve MCP over stdin/stdout until the client disconnects.
///
/// # Errors
///
/// Returns [`ServerError::Start`] if the handshake fails and
/// [`ServerError::Task`] if the service task panics.
pub async fn serve_stdio(server: MermaidServer) -> Result<(), ServerError> {
    tracing::info!("Starting Mermaid MCP server on stdio");
    let service = server
        .serve(stdio())
        .await
        .map_err(|e| ServerError::Start(e.to_string()))?;

    let reason = service.waiting().await?;
    tracing::info!(?reason, "MCP server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mermaid_ink::MermaidConverter;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, ReadHalf, WriteHalf};
    use tokio::io::{DuplexStream, duplex, split};

    use super::*;

    /// Line-delimited JSON-RPC client end of an in-memory session.
    struct Session {
        lines: Lines<BufReader<ReadHalf<DuplexStream>>>,
        writer: WriteHalf<DuplexStream>,
    }

    impl Session {
        fn start() -> Self {
            let (client, server_io) = duplex(64 * 1024);
            let server = MermaidServer::new(MermaidConverter::new("http://127.0.0.1:9"), "1.2.3");
            tokio::spawn(async move {
                if let Ok(service) = server.serve(split(server_io)).await {
                    let _ = service.waiting().await;
                }
            });

            let (reader, writer) = split(client);
            Self {
                lines: BufReader::new(reader).lines(),
                writer,
            }
        }

        async fn send(&mut self, message: &Value) {
            let line = format!("{message}\n");
            self.writer.write_all(line.as_bytes()).await.unwrap();
            self.writer.flush().await.unwrap();
        }

        async fn receive(&mut self) -> Value {
            let line = tokio::time::timeout(Duration::from_secs(5), self.lines.next_line())
                .await
                .expect("server did not answer")
                .unwrap()
                .unwrap();
            serde_json::from_str(&line).unwrap()
        }

        async fn request(&mut self, id: u64, method: &str, params: Value) -> Value {
            self.send(&json!({"jsonrpc": "2.0", "id": id, "method": method, "params": params}))
                .await;
            let response = self.receive().await;
            assert_eq!(response["id"], id);
            response
        }

        async fn initialize(&mut self) -> Value {
            let response = self
                .request(
                    1,
                    "initialize",
                    json!({
                        "protocolVersion": "2024-11-05",
                        "capabilities": {},
                        "clientInfo": {"name": "test-client", "version": "0.0.0"}
                    }),
                )
                .await;
            self.send(&json!({"jsonrpc": "2.0", "method": "notifications/initialized"}))
                .await;
            response
        }
    }

    #[tokio::test]
    async fn test_initialize_handshake() {
        let mut session = Session::start();
        let response = session.initialize().await;

        assert_eq!(response["result"]["serverInfo"]["name"], SERVER_NAME);
        assert_eq!(response["result"]["serverInfo"]["version"], "1.2.3");
        assert!(response["result"]["capabilities"]["tools"].is_object());
        assert!(response["result"]["capabilities"]["resources"].is_object());
    }

    #[tokio::test]
    async fn test_tools_over_the_wire() {
        let mut session = Session::start();
        session.initialize().await;

        let listed = session.request(2, "tools/list", json!({})).await;
        assert_eq!(listed["result"]["tools"].as_array().unwrap().len(), 3);

        let called = session
            .request(
                3,
                "tools/call",
                json!({"name": "get_supported_options", "arguments": {}}),
            )
            .await;
        let text = called["result"]["content"][0]["text"].as_str().unwrap();
        let data: Value = serde_json::from_str(text).unwrap();
        assert_eq!(data["formats"], json!(["png", "jpg", "svg", "pdf"]));

        let converted = session
            .request(
                4,
                "tools/call",
                json!({
                    "name": "convert_mermaid_to_image",
                    "arguments": {"mermaid_code": "   ", "width": 800.0}
                }),
            )
            .await;
        let text = converted["result"]["content"][0]["text"].as_str().unwrap();
        let data: Value = serde_json::from_str(text).unwrap();
        assert_eq!(data["success"], false);
    }

    #[tokio::test]
    async fn test_resources_over_the_wire() {
        let mut session = Session::start();
        session.initialize().await;

        let templates = session
            .request(2, "resources/templates/list", json!({}))
            .await;
        assert_eq!(
            templates["result"]["resourceTemplates"][0]["uriTemplate"],
            "mermaid://examples/{diagram_type}"
        );

        let read = session
            .request(3, "resources/read", json!({"uri": "mermaid://examples/pie"}))
            .await;
        let text = read["result"]["contents"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("pie title"));

        let rejected = session
            .request(4, "resources/read", json!({"uri": "https://example.com"}))
            .await;
        assert_eq!(rejected["error"]["code"], -32602);
    }
}
