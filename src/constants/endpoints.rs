pub const AUTH_TOKENS: &str = "/uapi/auth/tokens";
pub const COMPUTERS_INVENTORY: &str = "/uapi/v1/computers-inventory";

pub const SECTION_PARAM: &str = "section";

/// Inventory sections requested on every fetch, in request order.
pub const INVENTORY_SECTIONS: &[&str] = &[
    "GENERAL",
    "DISK_ENCRYPTION",
    "HARDWARE",
    "LOCAL_USER_ACCOUNTS",
    "OPERATING_SYSTEM",
    "SOFTWARE_UPDATES",
];
