//! Top-level section names of a device record, as returned by the inventory API.

pub const GENERAL: &str = "general";
pub const DISK_ENCRYPTION: &str = "diskEncryption";
pub const LOCAL_USER_ACCOUNTS: &str = "localUserAccounts";
pub const HARDWARE: &str = "hardware";
pub const OPERATING_SYSTEM: &str = "operatingSystem";
