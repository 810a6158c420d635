use crate::remote::{CallError, Remote};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::fmt;

const USER_INFO_METHOD: &str = "AuthService.userInfo";

// Profile attributes supplied by the external auth provider. Optional fields
// may genuinely be unset, so absence stays distinct from an empty value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub auth_provider: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_info: Option<HashMap<String, Value>>,
}

#[derive(Debug)]
pub enum LookupError {
    // Propagated unchanged from the rpc client.
    Call(CallError),
    // The call succeeded but the result does not fit the user record.
    Shape(serde_json::Error),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::Call(err) => write!(f, "{err}"),
            LookupError::Shape(err) => write!(f, "user record decode error: {err}"),
        }
    }
}

impl std::error::Error for LookupError {}

impl From<CallError> for LookupError {
    fn from(err: CallError) -> Self {
        LookupError::Call(err)
    }
}

// Resolve a bearer token to a user profile via the remote auth service. The
// token travels as an rpc parameter, not as a transport credential.
pub fn get_user_by_token(remote: &Remote, token: &str) -> Result<User, LookupError> {
    let result = remote.call(USER_INFO_METHOD, vec![json!(token)])?;
    serde_json::from_value(result).map_err(LookupError::Shape)
}
