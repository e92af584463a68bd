use serde::{Deserialize, Serialize};
use url::Url;

use crate::core::error::ConsoleError;
use crate::{DEFAULT_ADMIN_USERNAME, DEFAULT_CUSTOMER_API_URL, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_SUBJECT_MGMT_URL};

/// Process-wide console configuration.
///
/// Built once at startup and passed by reference into the clients; nothing
/// in the library reads the environment after this point. Deletion must not
/// be offered to the operator unless [`validate`](Self::validate) passed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Root of the customer store (listing, details, theme, final delete).
    pub customer_api_url: String,
    /// Root of the subject-management pair (DEP and ARX records).
    pub subject_mgmt_url: String,

    pub admin_username: String,
    pub admin_password: String,

    /// Per-request timeout in seconds.
    pub timeout: u64,
}

impl ConsoleConfig {
    pub fn new(customer_api_url: &str, subject_mgmt_url: &str) -> Self {
        Self {
            customer_api_url: customer_api_url.trim_end_matches('/').to_string(),
            subject_mgmt_url: subject_mgmt_url.trim_end_matches('/').to_string(),
            admin_username: DEFAULT_ADMIN_USERNAME.to_string(),
            // Dev-only default, same as the username; override in any real
            // deployment via ONBOARD_ADMIN_PASSWORD.
            admin_password: DEFAULT_ADMIN_USERNAME.to_string(),
            timeout: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }

    /// Read configuration from `ONBOARD_*` environment variables, falling
    /// back to localhost defaults for anything unset.
    pub fn from_env() -> Self {
        let mut config = Self::new(
            &std::env::var("ONBOARD_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_CUSTOMER_API_URL.to_string()),
            &std::env::var("ONBOARD_SUBJECT_MGMT_URL")
                .unwrap_or_else(|_| DEFAULT_SUBJECT_MGMT_URL.to_string()),
        );

        if let Ok(username) = std::env::var("ONBOARD_ADMIN_USERNAME") {
            config.admin_username = username;
        }
        if let Ok(password) = std::env::var("ONBOARD_ADMIN_PASSWORD") {
            config.admin_password = password;
        }
        if let Ok(timeout) = std::env::var("ONBOARD_HTTP_TIMEOUT") {
            if let Ok(secs) = timeout.parse() {
                config.timeout = secs;
            }
        }

        config
    }

    /// Reject missing or unparseable base URLs.
    ///
    /// Callers check this before offering any remote action; the deletion
    /// flow in particular assumes both roots are present and well-formed.
    pub fn validate(&self) -> Result<(), ConsoleError> {
        Self::check_url("customer API base URL", &self.customer_api_url)?;
        Self::check_url("subject-management base URL", &self.subject_mgmt_url)?;
        Ok(())
    }

    fn check_url(name: &str, value: &str) -> Result<(), ConsoleError> {
        if value.is_empty() {
            return Err(ConsoleError::Config(format!("{name} is not configured")));
        }
        Url::parse(value)
            .map_err(|e| ConsoleError::Config(format!("{name} is invalid ({value}): {e}")))?;
        Ok(())
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CUSTOMER_API_URL, DEFAULT_SUBJECT_MGMT_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(ConsoleConfig::default().validate().is_ok());
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ConsoleConfig::new("http://api.local:8000/", "http://subjects.local/");
        assert_eq!(config.customer_api_url, "http://api.local:8000");
        assert_eq!(config.subject_mgmt_url, "http://subjects.local");
    }

    #[test]
    fn test_empty_customer_api_url_rejected() {
        let config = ConsoleConfig::new("", "http://subjects.local");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("customer API base URL"));
    }

    #[test]
    fn test_malformed_subject_mgmt_url_rejected() {
        let config = ConsoleConfig::new("http://api.local", "not a url");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("subject-management"));
    }
}
