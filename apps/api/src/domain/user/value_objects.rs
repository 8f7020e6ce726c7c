use std::fmt;
use validator::ValidateEmail;

/// Email value object representing a valid email address
///
/// # Invariants
/// - Has a `local-part@domain` shape accepted by `validator`
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    /// Creates a new Email value object
    ///
    /// # Returns
    /// * `Ok(Email)` - If email is valid
    /// * `Err(String)` - If email is invalid
    ///
    /// # Example
    /// ```
    /// use roster_api::domain::user::value_objects::Email;
    ///
    /// let email = Email::new("john@example.com").expect("valid email");
    /// assert_eq!(email.as_str(), "john@example.com");
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, String> {
        let email = email.into();
        if Self::is_valid(&email) {
            Ok(Email(email))
        } else {
            Err(format!("Invalid email: {}", email))
        }
    }

    /// Wraps an address read back from storage without re-checking it
    ///
    /// Rows are validated on the way in; a row written by another client
    /// must not make reads fail.
    pub(crate) fn from_persisted(email: String) -> Self {
        Email(email)
    }

    /// Checks an address against the standard email grammar
    pub fn is_valid(email: &str) -> bool {
        email.validate_email()
    }

    /// Returns the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email() {
        assert!(Email::new("john@gmaily.com").is_ok());
    }

    #[test]
    fn valid_email_with_subdomain() {
        assert!(Email::new("user@mail.example.com").is_ok());
    }

    #[test]
    fn invalid_email_no_at_symbol() {
        assert!(Email::new("not-an-email").is_err());
    }

    #[test]
    fn invalid_email_missing_domain() {
        assert!(Email::new("john@").is_err());
    }

    #[test]
    fn invalid_email_missing_local_part() {
        assert!(Email::new("@example.com").is_err());
    }

    #[test]
    fn invalid_email_empty() {
        assert!(Email::new("").is_err());
    }

    #[test]
    fn persisted_email_is_kept_verbatim() {
        let email = Email::from_persisted("legacy address".to_string());
        assert_eq!(email.as_str(), "legacy address");
    }

    #[test]
    fn email_display() {
        let email = Email::new("test@example.com").unwrap();
        assert_eq!(format!("{}", email), "test@example.com");
    }
}
