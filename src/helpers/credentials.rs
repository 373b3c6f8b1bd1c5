use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// `user:pass`, base64 encoded, as used in a Basic `Authorization` header.
pub fn credential_string(username: &str, password: &str) -> String {
    STANDARD.encode(format!("{username}:{password}"))
}

pub fn basic_auth(username: &str, password: &str) -> String {
    format!("Basic {}", credential_string(username, password))
}

pub fn bearer_auth(token: &str) -> String {
    format!("Bearer {token}")
}
