use thiserror::Error;
use tracing::{info, warn};

use crate::core::config::ConsoleConfig;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Proof of a passed login gate. Possession of a `Session` is the
/// authentication flag; every authenticated surface takes one by reference.
#[derive(Debug)]
pub struct Session {
    operator: String,
}

impl Session {
    pub fn login(config: &ConsoleConfig, credentials: &Credentials) -> Result<Self, AuthError> {
        if credentials.username == config.admin_username
            && credentials.password == config.admin_password
        {
            info!("Operator '{}' logged in", credentials.username);
            Ok(Self {
                operator: credentials.username.clone(),
            })
        } else {
            warn!("Failed login attempt for '{}'", credentials.username);
            Err(AuthError::InvalidCredentials)
        }
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_with_configured_credentials() {
        let config = ConsoleConfig::default();
        let session = Session::login(&config, &Credentials::new("admin", "admin")).unwrap();
        assert_eq!(session.operator(), "admin");
    }

    #[test]
    fn test_login_rejects_wrong_password() {
        let config = ConsoleConfig::default();
        let result = Session::login(&config, &Credentials::new("admin", "nope"));
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_login_rejects_unknown_user() {
        let config = ConsoleConfig::default();
        let result = Session::login(&config, &Credentials::new("root", "admin"));
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }
}
