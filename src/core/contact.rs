// Contact form model: local validation and the JSON payload posted to the
// form relay.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use thiserror::Error;

pub const CONTACT_ENDPOINT: &str = "https://formspree.io/f/xzzgalpp";
pub const MESSAGE_MIN_CHARS: usize = 10;

pub const SENT_NOTICE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILED_NOTICE: &str = "Failed to send message. Please try again or email me directly.";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// `name` attribute of the matching form control.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Field::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

/// Per-field validation outcome; empty means the form may be sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    /// Editing a field dismisses its error.
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Message => self.message = None,
        }
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("static email pattern"))
}

pub fn is_plausible_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.name = Some(FieldError::NameRequired);
        }
        if self.email.trim().is_empty() {
            errors.email = Some(FieldError::EmailRequired);
        } else if !is_plausible_email(&self.email) {
            errors.email = Some(FieldError::EmailInvalid);
        }
        // Length is counted in code points, so astral characters count once.
        if self.message.trim().is_empty() {
            errors.message = Some(FieldError::MessageRequired);
        } else if self.message.chars().count() < MESSAGE_MIN_CHARS {
            errors.message = Some(FieldError::MessageTooShort);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn to_json(&self) -> Result<String, SubmitError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decide what a submit press does. Only `Submission::Send` carries a
    /// request body; busy and invalid forms never reach the network.
    pub fn submission(&self, status: SubmitStatus) -> Result<Submission, SubmitError> {
        if status.is_sending() {
            return Ok(Submission::Busy);
        }
        if let Err(errors) = self.validate() {
            return Ok(Submission::Rejected(errors));
        }
        Ok(Submission::Send(self.to_json()?))
    }

    pub fn clear(&mut self) {
        *self = ContactForm::default();
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// A previous request is still in flight.
    Busy,
    Rejected(FieldErrors),
    /// JSON body to POST.
    Send(String),
}

/// Why a submission failed. All variants surface to the visitor as the
/// same `FAILED_NOTICE`.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("network error: {0}")]
    Network(String),
    #[error("relay responded with HTTP {0}")]
    Status(u16),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl SubmitStatus {
    pub fn from_outcome(outcome: &Result<(), SubmitError>) -> Self {
        match outcome {
            Ok(()) => SubmitStatus::Sent,
            Err(_) => SubmitStatus::Failed,
        }
    }

    /// Any 2xx counts as delivered.
    pub fn check_http(status: u16) -> Result<(), SubmitError> {
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(SubmitError::Status(status))
        }
    }

    pub fn notice(self) -> Option<&'static str> {
        match self {
            SubmitStatus::Sent => Some(SENT_NOTICE),
            SubmitStatus::Failed => Some(FAILED_NOTICE),
            SubmitStatus::Idle | SubmitStatus::Sending => None,
        }
    }

    pub fn is_sending(self) -> bool {
        self == SubmitStatus::Sending
    }
}
