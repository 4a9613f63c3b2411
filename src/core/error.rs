//! Error types for the page form flow

use thiserror::Error;

use super::form::RequiredField;

/// Message shown for every transport or response failure
pub const GENERIC_ERROR_MESSAGE: &str =
    "Something went wrong while sending the form. Please try again.";

/// Message shown when a required field is blank
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// Message shown when the email address is malformed
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

/// Failure of a single form submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("required field is empty: {0}")]
    MissingField(RequiredField),

    #[error("email address is not valid")]
    InvalidEmail,

    #[error("network error: {0}")]
    Transport(String),

    #[error("form endpoint responded with status {0}")]
    Status(u16),
}

impl FormError {
    /// Whether the error was detected before any network call
    pub fn is_validation(&self) -> bool {
        matches!(self, FormError::MissingField(_) | FormError::InvalidEmail)
    }

    /// Text displayed to the visitor
    pub fn user_message(&self) -> &'static str {
        match self {
            FormError::MissingField(_) => MISSING_FIELDS_MESSAGE,
            FormError::InvalidEmail => INVALID_EMAIL_MESSAGE,
            FormError::Transport(_) | FormError::Status(_) => GENERIC_ERROR_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors() {
        let missing = FormError::MissingField(RequiredField::ContactPerson);
        assert!(missing.is_validation());
        assert_eq!(missing.user_message(), MISSING_FIELDS_MESSAGE);
        assert_eq!(
            missing.to_string(),
            "required field is empty: contact person"
        );

        assert!(FormError::InvalidEmail.is_validation());
        assert_eq!(FormError::InvalidEmail.user_message(), INVALID_EMAIL_MESSAGE);
    }

    #[test]
    fn test_transport_errors_share_generic_message() {
        let network = FormError::Transport("connection reset".to_string());
        let status = FormError::Status(503);

        assert!(!network.is_validation());
        assert!(!status.is_validation());
        assert_eq!(network.user_message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(status.user_message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(
            status.to_string(),
            "form endpoint responded with status 503"
        );
    }
}
