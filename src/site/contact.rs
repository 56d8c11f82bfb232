// SPDX-License-Identifier: MPL-2.0
//! Contact form state and validation.

use crate::error::FormError;

/// Editable fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

/// Current contents of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A validated contact submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Checks the required fields. Only the empty string counts as missing.
    pub fn validate(&self) -> Result<ContactSubmission, FormError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(FormError::MissingContactFields);
        }
        Ok(ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: (!self.subject.is_empty()).then(|| self.subject.clone()),
            message: self.message.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: String::new(),
            message: "Hello".into(),
        }
    }

    #[test]
    fn subject_is_optional() {
        let submission = filled().validate().expect("form should be valid");
        assert_eq!(submission.subject, None);
    }

    #[test]
    fn any_required_field_empty_is_rejected() {
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            let mut form = filled();
            form.set(field, String::new());
            assert_eq!(form.validate(), Err(FormError::MissingContactFields));
        }
    }

    #[test]
    fn whitespace_counts_as_present() {
        let mut form = filled();
        form.set(ContactField::Name, " ".into());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn reset_clears_every_field() {
        let mut form = filled();
        form.set(ContactField::Subject, "Quote".into());
        form.reset();
        assert!(form.is_empty());
    }

    #[test]
    fn set_and_get_address_the_same_field() {
        let mut form = ContactForm::default();
        form.set(ContactField::Subject, "Hi".into());
        assert_eq!(form.get(ContactField::Subject), "Hi");
        assert_eq!(form.get(ContactField::Name), "");
    }
}
