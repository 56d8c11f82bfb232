// SPDX-License-Identifier: MPL-2.0
//! Demo login form.
//!
//! Nothing is authenticated: after a simulated delay the credentials are
//! judged plausible when the email contains `@` and the password is long
//! enough.

use crate::error::FormError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

/// Current contents of the login form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl LoginForm {
    pub fn set(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Email => self.email = value,
            LoginField::Password => self.password = value,
        }
    }

    /// Snapshots the fields for verification.
    pub fn credentials(&self) -> Result<Credentials, FormError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingCredentials);
        }
        Ok(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// Credentials captured at submit time and judged once the delay elapses.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Password length is counted in characters.
    pub fn verify(&self, min_password_len: usize) -> Result<(), FormError> {
        if self.email.contains('@') && self.password.chars().count() >= min_password_len {
            Ok(())
        } else {
            Err(FormError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_is_rejected_before_any_delay() {
        let form = LoginForm {
            email: "x@y.com".into(),
            password: String::new(),
        };
        assert_eq!(form.credentials(), Err(FormError::MissingCredentials));
    }

    #[test]
    fn plausible_credentials_pass() {
        assert_eq!(Credentials::new("x@y.com", "abcdef").verify(6), Ok(()));
    }

    #[test]
    fn short_password_fails() {
        assert_eq!(
            Credentials::new("x@y.com", "ab").verify(6),
            Err(FormError::InvalidCredentials)
        );
    }

    #[test]
    fn email_without_at_fails() {
        assert_eq!(
            Credentials::new("xy.com", "abcdefgh").verify(6),
            Err(FormError::InvalidCredentials)
        );
    }

    #[test]
    fn password_length_counts_characters_not_bytes() {
        assert_eq!(Credentials::new("x@y.com", "ééééé").verify(6), Err(FormError::InvalidCredentials));
        assert_eq!(Credentials::new("x@y.com", "éééééé").verify(6), Ok(()));
    }

    #[test]
    fn debug_output_hides_password() {
        let debug = format!("{:?}", Credentials::new("x@y.com", "hunter22"));
        assert!(!debug.contains("hunter22"));
        assert!(debug.contains("x@y.com"));
    }
}
