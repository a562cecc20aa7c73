//! Local checks run on form input before anything is sent.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::DomainError;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern is valid")
});

/// Basic shape check for an email address. Consecutive dots are rejected.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email) && !email.contains("..")
}

/// Input collected by the account creation form.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.first_name.is_empty() || self.last_name.is_empty() {
            return Err(DomainError::Validation(
                "First and last name are required".to_string(),
            ));
        }
        if !is_valid_email(&self.email) {
            return Err(DomainError::Validation("Invalid email address".to_string()));
        }
        if self.password.is_empty() {
            return Err(DomainError::Validation("Password is required".to_string()));
        }
        if self.password != self.confirm_password {
            return Err(DomainError::Validation(
                "Passwords do not match".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RegistrationForm {
        RegistrationForm {
            first_name: "Jane".into(),
            last_name: "Roe".into(),
            email: "jane.roe@vitesse.com".into(),
            password: "test123".into(),
            confirm_password: "test123".into(),
        }
    }

    #[test]
    fn test_accepts_common_addresses() {
        assert!(is_valid_email("admin@vitesse.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("admin"));
        assert!(!is_valid_email("admin@vitesse"));
        assert!(!is_valid_email("admin@@vitesse.com"));
        assert!(!is_valid_email("admin..x@vitesse.com"));
        assert!(!is_valid_email("admin@vitesse.c"));
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(form().validate().is_ok());
    }

    #[test]
    fn test_password_mismatch() {
        let mut f = form();
        f.confirm_password = "other".into();
        assert!(matches!(f.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_missing_names() {
        let mut f = form();
        f.last_name.clear();
        assert!(matches!(f.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_bad_email() {
        let mut f = form();
        f.email = "jane".into();
        assert!(matches!(f.validate(), Err(DomainError::Validation(_))));
    }
}
