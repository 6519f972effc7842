//! Employee record as returned by the remote user endpoint.

use serde::{Deserialize, Serialize};

/// A single employee. The remote payload carries many more fields
/// (username, email, address, ...); only the display name is consumed,
/// and unknown fields are ignored during decoding.
///
/// A payload without a `name` field fails to decode; that surfaces as
/// an explicit [`crate::AppError::Decode`] rather than a runtime fault.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    /// Human-readable display name.
    pub name: String,
}
