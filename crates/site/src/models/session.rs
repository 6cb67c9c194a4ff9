//! Session-related types.
//!
//! Types stored in the session for admin state and the comparison tray.

use serde::{Deserialize, Serialize};

/// Session-stored admin identity.
///
/// Minimal data stored in the session to identify the signed-in admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Email the admin signed in with.
    pub email: String,
}

/// Session keys for site data.
pub mod keys {
    /// Key for storing the current signed-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";

    /// Key for the tool comparison selection.
    pub const COMPARE_SELECTION: &str = "compare_selection";
}
