//! Contact form model. Submission is simulated: fields are validated and an
//! acknowledgement is returned, but nothing is sent or stored.

use crate::error::ContactError;
use regex::Regex;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

/// How long the "thank you" banner stays up by default.
pub const DEFAULT_ACK_DURATION: Duration = Duration::from_secs(3);

fn email_shape() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile")
    })
}

/// Form fields in tab order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    pub fn next(self) -> Field {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Check every field is filled in and the email looks like one.
    pub fn validate(&self) -> Result<(), ContactError> {
        for field in Field::ALL {
            if self.field(field).trim().is_empty() {
                return Err(ContactError::MissingField(field.label()));
            }
        }
        let email = self.email.trim();
        if !email_shape().is_match(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }

    /// Simulate sending the message. On success the caller shows the
    /// returned acknowledgement until it expires.
    pub fn submit(&self, now: Instant, show_for: Duration) -> Result<Acknowledgement, ContactError> {
        self.validate()?;
        tracing::debug!(
            email = %self.email.trim(),
            chars = self.message.chars().count(),
            "contact form submitted (simulated)"
        );
        Ok(Acknowledgement {
            expires_at: now + show_for,
        })
    }
}

/// Transient "message sent" banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acknowledgement {
    expires_at: Instant,
}

impl Acknowledgement {
    pub fn is_visible(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}
