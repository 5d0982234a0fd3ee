//! Server configuration constants

use std::time::Duration;

/// Request body size limit
pub const MAX_BODY_SIZE: usize = 1024 * 1024; // 1MB

/// Per-request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// CORS preflight cache lifetime
pub const CORS_MAX_AGE: Duration = Duration::from_secs(3600);

/// Outbound call timeout for /external-data
pub const EXTERNAL_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Delay before the random half of /external-data resolves
pub const RANDOM_SAMPLE_DELAY: Duration = Duration::from_millis(100);
