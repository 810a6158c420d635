use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

// JSON-RPC 2.0 envelopes for the auth service wire format.

pub const PROTOCOL_VERSION: &str = "2.0";

// Every call ships this same correlation id. The transport does one POST per
// call and is never multiplexed, so the id must not be used to match
// in-flight requests.
pub const REQUEST_ID: i64 = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    // Any serializable value is accepted as a method identifier, not only a
    // string.
    pub method: Value,
    // Empty argument lists serialize as [], never as an absent field.
    pub params: Vec<Value>,
    pub id: i64,
}

impl RpcRequest {
    pub fn new(method: Value, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: PROTOCOL_VERSION.to_string(),
            method,
            params,
            id: REQUEST_ID,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub error: Option<RpcError>,
    #[serde(default)]
    pub result: Value,
    // Echoed from the request; not validated against it.
    pub id: i64,
}

// Error object returned by the remote in the response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<HashMap<String, Value>>,
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The remote's message is the user-visible text.
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RpcError {}
