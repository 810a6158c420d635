pub mod config;
pub mod protocol;
pub mod remote;
pub mod user;

pub use protocol::RpcError;
pub use remote::{CallError, Remote};
pub use user::{LookupError, User, get_user_by_token};
