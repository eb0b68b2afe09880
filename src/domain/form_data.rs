use crate::domain::FormErrors;
use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

// Structural check only: something, an @, something, a dot, something.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("Email pattern must compile"));

fn required(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed(message)));
    }
    Ok(())
}

fn validate_name(s: &str) -> Result<(), ValidationError> {
    required(s, "Name is required")
}

fn validate_email(s: &str) -> Result<(), ValidationError> {
    required(s, "Email is required")?;
    if !EMAIL_SHAPE.is_match(s) {
        return Err(
            ValidationError::new("email").with_message(Cow::Borrowed("Email is invalid")),
        );
    }
    Ok(())
}

fn validate_message(s: &str) -> Result<(), ValidationError> {
    required(s, "Message is required")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for FormField {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "name" => Ok(FormField::Name),
            "email" => Ok(FormField::Email),
            "message" => Ok(FormField::Message),
            other => Err(format!("{} is not a contact form field", other)),
        }
    }
}

/// Raw, as-typed contents of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate, serde::Deserialize)]
pub struct FormData {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[validate(custom(function = "validate_email"))]
    pub email: String,
    #[validate(custom(function = "validate_message"))]
    pub message: String,
}

impl FormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
    }

    /// Run every field rule and collect the failures.
    pub fn check(&self) -> FormErrors {
        match self.validate() {
            Ok(()) => FormErrors::default(),
            Err(errors) => errors.into(),
        }
    }
}
