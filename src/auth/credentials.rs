use crate::config;

/// Identity proven by a successful credential check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub email: String,
}

/// Credential verification seam. The login handler only depends on this
/// trait, so a real user store can replace the config-backed check without
/// touching the handler or the access gate.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, email: &str, password: &str) -> Option<Principal>;
}

/// Verifier backed by the single admin identity from configuration
pub struct ConfigCredentialVerifier {
    admin_email: String,
    admin_password: String,
}

impl ConfigCredentialVerifier {
    pub fn new(admin_email: impl Into<String>, admin_password: impl Into<String>) -> Self {
        Self {
            admin_email: admin_email.into(),
            admin_password: admin_password.into(),
        }
    }

    pub fn from_config() -> Self {
        let security = &config::config().security;
        Self::new(security.admin_email.clone(), security.admin_password.clone())
    }
}

impl CredentialVerifier for ConfigCredentialVerifier {
    fn verify(&self, email: &str, password: &str) -> Option<Principal> {
        if email == self.admin_email && password == self.admin_password {
            Some(Principal {
                email: email.to_string(),
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier() -> ConfigCredentialVerifier {
        ConfigCredentialVerifier::new("admin@gmail.com", "admin123")
    }

    #[test]
    fn valid_credentials_yield_principal() {
        let principal = verifier().verify("admin@gmail.com", "admin123");
        assert_eq!(
            principal,
            Some(Principal {
                email: "admin@gmail.com".to_string()
            })
        );
    }

    #[test]
    fn wrong_password_is_rejected() {
        assert_eq!(verifier().verify("admin@gmail.com", "admin1234"), None);
    }

    #[test]
    fn wrong_email_is_rejected() {
        assert_eq!(verifier().verify("user@gmail.com", "admin123"), None);
    }

    #[test]
    fn email_match_is_case_sensitive() {
        assert_eq!(verifier().verify("Admin@gmail.com", "admin123"), None);
    }
}
