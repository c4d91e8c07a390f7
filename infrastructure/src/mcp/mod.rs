//! Stdio tool server
//!
//! Serves the coordinator's three tools over newline-delimited JSON-RPC 2.0
//! (MCP-style `initialize`, `tools/list`, `tools/call`).

pub mod error;
pub mod protocol;
pub mod server;
