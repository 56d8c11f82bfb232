// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

/// Validation failures raised by the demo forms.
/// Used to provide user-friendly, localized notification messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    /// Name, email or message left empty on the contact form
    MissingContactFields,

    /// Email or password left empty on the login form
    MissingCredentials,

    /// Credentials failed the plausibility check after the simulated delay
    InvalidCredentials,
}

impl FormError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FormError::MissingContactFields => "notification-contact-missing-fields",
            FormError::MissingCredentials => "notification-login-missing-fields",
            FormError::InvalidCredentials => "notification-login-invalid",
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingContactFields => write!(f, "Required contact fields are empty"),
            FormError::MissingCredentials => write!(f, "Email or password is empty"),
            FormError::InvalidCredentials => write!(f, "Invalid email or password"),
        }
    }
}

impl std::error::Error for FormError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_parse_error_becomes_config_variant() {
        let parse_error = toml::from_str::<toml::Table>("a = = b").unwrap_err();
        let err: Error = parse_error.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn form_error_i18n_keys() {
        assert_eq!(
            FormError::MissingContactFields.i18n_key(),
            "notification-contact-missing-fields"
        );
        assert_eq!(
            FormError::MissingCredentials.i18n_key(),
            "notification-login-missing-fields"
        );
        assert_eq!(
            FormError::InvalidCredentials.i18n_key(),
            "notification-login-invalid"
        );
    }

    #[test]
    fn form_error_display() {
        assert!(format!("{}", FormError::InvalidCredentials).contains("Invalid"));
    }
}
