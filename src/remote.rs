use crate::config;
use crate::protocol::{RpcError, RpcRequest, RpcResponse};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug)]
pub enum CallError {
    // The method identifier could not be turned into a JSON value.
    Serialize(serde_json::Error),
    Transport(reqwest::Error),
    // The body was not a well-formed response envelope.
    Decode(reqwest::Error),
    // The remote explicitly returned an error object.
    Rpc(RpcError),
}

impl fmt::Display for CallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallError::Serialize(err) => write!(f, "rpc request serialize error: {err}"),
            CallError::Transport(err) => write!(f, "rpc transport error: {err}"),
            CallError::Decode(err) => write!(f, "rpc response decode error: {err}"),
            CallError::Rpc(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CallError {}

// Thin reqwest client for the remote JSON-RPC endpoint. Single-shot blocking
// calls; no retries, no timeout beyond the transport default.
#[derive(Debug, Clone)]
pub struct Remote {
    http: reqwest::blocking::Client,
    url: String,
}

impl Remote {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            url: url.into(),
        }
    }

    // Resolve the endpoint from GNZ_AUTH_FUNCTION_URL once, at construction.
    pub fn from_env() -> Self {
        Self::new(config::auth_function_url())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    // Perform one remote procedure call and return the raw result value.
    // Callers decode the value into whatever shape the method promises.
    pub fn call<M: Serialize>(&self, method: M, params: Vec<Value>) -> Result<Value, CallError> {
        let method = serde_json::to_value(method).map_err(CallError::Serialize)?;
        let request = RpcRequest::new(method, params);

        tracing::debug!(url = %self.url, method = %request.method, "dispatching rpc call");

        let response = self
            .http
            .post(&self.url)
            .json(&request)
            .send()
            .map_err(CallError::Transport)?;

        // Decode the body as an envelope regardless of HTTP status; the
        // protocol reports failures through the error field.
        let envelope = response
            .json::<RpcResponse>()
            .map_err(CallError::Decode)?;

        if let Some(error) = envelope.error {
            tracing::debug!(code = error.code, "rpc call returned an error");
            return Err(CallError::Rpc(error));
        }

        Ok(envelope.result)
    }
}
