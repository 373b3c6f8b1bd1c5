use std::time::Duration;

pub const API_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
pub const LOG_LEVEL: &str = "info";
// Large fleets easily exceed ureq's 10 MB default body limit
pub const MAX_INVENTORY_BYTES: u64 = 200 * 1024 * 1024;
