//! Contact form
//!
//! Name, email and message are all required. The thank-you text repeats
//! the visitor's name and the address we will answer.

use serde::{Deserialize, Serialize};

use super::form::{FormSubmission, RequiredField};

/// Values entered into the contact form
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

impl FormSubmission for ContactForm {
    const SUBMIT_LABEL: &'static str = "Send Message";

    const REQUIRED: &'static [RequiredField] = &[
        RequiredField::Name,
        RequiredField::Email,
        RequiredField::Message,
    ];

    fn required_value(&self, field: RequiredField) -> &str {
        match field {
            RequiredField::Name => &self.name,
            RequiredField::Email => &self.email,
            RequiredField::Message => &self.message,
            RequiredField::SchoolName | RequiredField::ContactPerson => "",
        }
    }

    fn field_set(&self) -> Vec<(&'static str, String)> {
        Self::REQUIRED
            .iter()
            .map(|field| {
                (
                    field.input_name(),
                    self.required_value(*field).trim().to_string(),
                )
            })
            .collect()
    }

    fn success_message(&self) -> String {
        format!(
            "Thank you {}! We have received your message and will contact you at {} soon.",
            self.name.trim(),
            self.email.trim()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FormError;

    #[test]
    fn test_every_field_is_required() {
        let complete = ContactForm::new("Ana", "ana@school.org", "Do you offer district plans?");
        assert!(complete.validate().is_ok());

        assert_eq!(
            ContactForm::new("", "ana@school.org", "Hi").validate(),
            Err(FormError::MissingField(RequiredField::Name))
        );
        assert_eq!(
            ContactForm::new("Ana", "  ", "Hi").validate(),
            Err(FormError::MissingField(RequiredField::Email))
        );
        assert_eq!(
            ContactForm::new("Ana", "ana@school.org", "\n").validate(),
            Err(FormError::MissingField(RequiredField::Message))
        );
    }

    #[test]
    fn test_malformed_email_rejected() {
        let form = ContactForm::new("Ana", "ana@school", "Hi");
        assert_eq!(form.validate(), Err(FormError::InvalidEmail));
    }

    #[test]
    fn test_personalized_success_message() {
        let form = ContactForm::new(" Ana ", "ana@school.org ", "Hi");
        assert_eq!(
            form.success_message(),
            "Thank you Ana! We have received your message and will contact you at ana@school.org soon."
        );
    }

    #[test]
    fn test_field_set_uses_input_names() {
        let form = ContactForm::new("Ana", " ana@school.org", " Hello ");
        assert_eq!(
            form.field_set(),
            vec![
                ("name", "Ana".to_string()),
                ("email", "ana@school.org".to_string()),
                ("message", "Hello".to_string()),
            ]
        );
    }
}
