//! Stdio tool server loop.
//!
//! The reader loop owns the input stream and spawns one task per request,
//! so a slow backend call never blocks `ping` or `tools/list`. All replies
//! go through a single writer task fed by an `mpsc` channel, which keeps
//! every output line whole.
//!
//! The loop ends on EOF (in-flight requests are allowed to finish) or when
//! the [`CancellationToken`] fires (in-flight requests are aborted).

use super::error::ServerError;
use super::protocol::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, IncomingMessage, JsonRpcResponseOut,
    METHOD_NOT_FOUND, PARSE_ERROR, ToolCallParams, ToolCallResult, initialize_result,
    tool_descriptor,
};
use duet_application::DispatchToolUseCase;
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

/// Handles one decoded frame at a time; shared by all request tasks
struct RequestHandler {
    dispatcher: DispatchToolUseCase,
    version: String,
}

impl RequestHandler {
    /// Returns the serialized reply, or `None` for notifications
    async fn handle_line(&self, line: &str) -> Option<String> {
        let response = match serde_json::from_str::<Value>(line) {
            Err(e) => {
                warn!("Unparsable input line: {}", e);
                Some(JsonRpcResponseOut::failure(
                    Value::Null,
                    PARSE_ERROR,
                    format!("Parse error: {}", e),
                ))
            }
            Ok(value) => self.handle_value(value).await,
        }?;

        match serde_json::to_string(&response) {
            Ok(text) => Some(text),
            Err(e) => {
                warn!("Failed to serialize response: {}", e);
                None
            }
        }
    }

    async fn handle_value(&self, value: Value) -> Option<JsonRpcResponseOut> {
        let id = value.get("id").cloned();
        let message: IncomingMessage = match serde_json::from_value(value) {
            Ok(message) => message,
            Err(e) => {
                // Frames without an id (stray responses, malformed notifications) get no reply
                return id.map(|id| {
                    JsonRpcResponseOut::failure(
                        id,
                        INVALID_REQUEST,
                        format!("Invalid request: {}", e),
                    )
                });
            }
        };

        let Some(id) = message.id.clone() else {
            debug!("Notification: {}", message.method);
            return None;
        };

        Some(self.handle_request(id, message).await)
    }

    async fn handle_request(&self, id: Value, message: IncomingMessage) -> JsonRpcResponseOut {
        debug!("Request {}: {}", id, message.method);

        match message.method.as_str() {
            "initialize" => JsonRpcResponseOut::success(id, initialize_result(&self.version)),
            "ping" => JsonRpcResponseOut::success(id, json!({})),
            "tools/list" => {
                let tools: Vec<Value> =
                    self.dispatcher.catalog().all().map(tool_descriptor).collect();
                JsonRpcResponseOut::success(id, json!({ "tools": tools }))
            }
            "tools/call" => {
                let Some(params) = message.params else {
                    return JsonRpcResponseOut::failure(id, INVALID_PARAMS, "Missing params");
                };
                let params: ToolCallParams = match serde_json::from_value(params) {
                    Ok(params) => params,
                    Err(e) => {
                        return JsonRpcResponseOut::failure(
                            id,
                            INVALID_PARAMS,
                            format!("Invalid params: {}", e),
                        );
                    }
                };
                let result = self.call_tool(params).await;
                match serde_json::to_value(result) {
                    Ok(value) => JsonRpcResponseOut::success(id, value),
                    Err(e) => JsonRpcResponseOut::failure(id, INTERNAL_ERROR, e.to_string()),
                }
            }
            other => JsonRpcResponseOut::failure(
                id,
                METHOD_NOT_FOUND,
                format!("Method not found: {}", other),
            ),
        }
    }

    async fn call_tool(&self, params: ToolCallParams) -> ToolCallResult {
        info!("Tool call: {}", params.name);
        match self.dispatcher.dispatch(&params.name, &params.arguments).await {
            Ok(text) => ToolCallResult::success(text),
            Err(e) => {
                warn!("Tool {} failed: {}", params.name, e);
                ToolCallResult::error(format!("Error: {}", e))
            }
        }
    }
}

/// JSON-RPC tool server over any line-oriented byte stream (stdio in production)
pub struct McpServer {
    handler: Arc<RequestHandler>,
}

impl McpServer {
    pub fn new(dispatcher: DispatchToolUseCase) -> Self {
        Self {
            handler: Arc::new(RequestHandler {
                dispatcher,
                version: env!("CARGO_PKG_VERSION").to_string(),
            }),
        }
    }

    /// Serve on the process's stdin/stdout
    pub async fn serve_stdio(&self, shutdown: CancellationToken) -> Result<(), ServerError> {
        self.serve(tokio::io::stdin(), tokio::io::stdout(), shutdown)
            .await
    }

    /// Serve until EOF on `reader` or until `shutdown` is cancelled
    pub async fn serve<R, W>(
        &self,
        reader: R,
        writer: W,
        shutdown: CancellationToken,
    ) -> Result<(), ServerError>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        info!("Tool server listening on stdio");

        let (tx, rx) = mpsc::unbounded_channel::<String>();
        let writer_task = tokio::spawn(write_lines(writer, rx));

        let mut lines = BufReader::new(reader).lines();
        let mut in_flight = JoinSet::new();

        loop {
            let next = tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("Shutdown requested, aborting {} in-flight request(s)", in_flight.len());
                    in_flight.abort_all();
                    break;
                }
                next = lines.next_line() => next?,
            };

            let Some(line) = next else {
                debug!("Input closed");
                break;
            };
            if line.trim().is_empty() {
                continue;
            }
            trace!("<- {}", line);

            let handler = Arc::clone(&self.handler);
            let tx = tx.clone();
            in_flight.spawn(async move {
                if let Some(reply) = handler.handle_line(&line).await {
                    let _ = tx.send(reply);
                }
            });

            // Reap finished tasks so the set does not grow without bound
            while in_flight.try_join_next().is_some() {}
        }

        while in_flight.join_next().await.is_some() {}
        drop(tx);

        match writer_task.await {
            Ok(result) => result.map_err(ServerError::from),
            Err(e) => Err(ServerError::WriterStopped(e.to_string())),
        }
    }
}

async fn write_lines<W>(writer: W, mut rx: mpsc::UnboundedReceiver<String>) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut writer = BufWriter::new(writer);
    while let Some(line) = rx.recv().await {
        trace!("-> {}", line);
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }
    Ok(())
}
