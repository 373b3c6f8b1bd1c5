use std::env;
use std::fmt;

use thiserror::Error;
use url::Url;

use crate::constants::envvars;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),
    #[error("invalid Jamf URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Connection settings for one Jamf Pro instance.
///
/// These are the URL, username and password you would use to log in to
/// Jamf Pro in a browser.
#[derive(Clone, PartialEq)]
pub struct JamfConfig {
    base_url: String,
    username: String,
    password: String,
}

impl JamfConfig {
    pub fn new(
        base_url: impl AsRef<str>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(JamfConfig {
            base_url: normalize_base_url(base_url.as_ref())?,
            username: username.into(),
            password: password.into(),
        })
    }

    /// Read `JAMF_URL`, `JAMF_USER` and `JAMF_PASS` from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = required_var(envvars::JAMF_URL)?;
        let username = required_var(envvars::JAMF_USER)?;
        let password = required_var(envvars::JAMF_PASS)?;
        Self::new(base_url, username, password)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Absolute URL for an API path such as `/uapi/auth/tokens`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl fmt::Debug for JamfConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JamfConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed".to_string()));
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}
