pub const JAMF_URL: &str = "JAMF_URL";
pub const JAMF_USER: &str = "JAMF_USER";
pub const JAMF_PASS: &str = "JAMF_PASS";

pub const LOG_LEVEL: &str = "LOG_LEVEL";
