//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// API Messages
// =============================================================================

/// Confirmation body returned after a successful delete
pub const USER_DELETED_MESSAGE: &str = "User資料刪除成功！";
