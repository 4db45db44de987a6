//! Credential gate for the login screen.
//!
//! A single fixed pair taken from the configuration. Nothing is persisted and
//! a failed attempt changes no state; the login view shows an inline message.

use crate::config::AppConfig;

pub struct AuthService {
    username: String,
    password: String,
}

impl AuthService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            username: config.username.clone(),
            password: config.password.clone(),
        }
    }

    pub fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_pair_verifies() {
        let auth = AuthService::new(&AppConfig::default());
        assert!(auth.verify("cozy", "vkfrhd33"));
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        let auth = AuthService::new(&AppConfig::default());
        assert!(!auth.verify("cozy", "wrong"));
        assert!(!auth.verify("", ""));
        assert!(!auth.verify("COZY", "vkfrhd33"));
    }
}
