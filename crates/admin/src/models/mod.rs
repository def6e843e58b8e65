//! Session-stored models for the admin.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Session-stored admin identity.
///
/// There is one shared admin credential; the session only records that the
/// gate was passed and when.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// When this session authenticated.
    pub logged_in_at: DateTime<Utc>,
}

/// Session keys for authentication data.
pub mod session_keys {
    /// Key for storing the current logged-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";
}
