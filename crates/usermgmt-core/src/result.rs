//! Result type aliases for usermgmt.

use crate::UserMgmtError;

/// A specialized `Result` type for usermgmt operations.
pub type UserMgmtResult<T> = Result<T, UserMgmtError>;
