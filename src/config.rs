use std::env;

// Process-level configuration for the remote auth endpoint.

// Base URL of the remote JSON-RPC endpoint. Required; when the variable is
// unset the URL comes back empty and the transport reports the failure.
pub fn auth_function_url() -> String {
    env::var("GNZ_AUTH_FUNCTION_URL").unwrap_or_default()
}
