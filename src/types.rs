//! Core types for folio

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Fallback shown when the relay rejects a message without saying why
pub const GENERIC_SERVICE_ERROR: &str = "Please try again later.";

/// The three free-text fields of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    /// Sender name
    pub name: String,
    /// Sender email address
    pub email: String,
    /// Message body
    pub message: String,
}

/// A single form field, for keystroke-style updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// `name`
    Name,
    /// `email`
    Email,
    /// `message`
    Message,
}

impl FormInput {
    /// Build a form from its three fields
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

    /// Replace one field's value
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Current value of one field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// True when every field is an empty string
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    /// Reset every field to the empty string
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check the form the way the page did before allowing submit:
    /// every field required, email shaped like an address.
    pub fn validate(&self) -> Result<()> {
        for field in [Field::Name, Field::Email, Field::Message] {
            if self.get(field).trim().is_empty() {
                return Err(Error::Validation(format!("{field} is required")));
            }
        }

        if !email_pattern().is_match(self.email.trim()) {
            return Err(Error::Validation(format!(
                "'{}' is not a valid email address",
                self.email
            )));
        }

        Ok(())
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("hardcoded email pattern is valid")
    })
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Email => write!(f, "email"),
            Self::Message => write!(f, "message"),
        }
    }
}

/// JSON body posted to the relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    /// Sender name
    pub name: String,
    /// Sender email address
    pub email: String,
    /// Message body
    pub message: String,
    /// Relay account key
    pub access_key: String,
    /// Derived subject line
    pub subject: String,
}

impl ContactPayload {
    /// Build the outbound payload for a form and access key
    pub fn new(input: &FormInput, access_key: &str) -> Self {
        Self {
            name: input.name.clone(),
            email: input.email.clone(),
            message: input.message.clone(),
            access_key: access_key.to_string(),
            subject: subject_for(&input.name),
        }
    }
}

/// Subject line the relay puts on the forwarded email
pub fn subject_for(name: &str) -> String {
    format!("New Portfolio Message from {name}")
}

/// Unparsed relay response as seen by a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body text
    pub body: String,
}

/// Parsed relay response body
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RelayReply {
    /// Whether the relay accepted the message
    pub success: bool,
    /// Relay-provided explanation
    #[serde(default)]
    pub message: Option<String>,
}

/// Terminal result of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Relay accepted the message; the form was cleared
    Success,
    /// Relay was reached and reported a failure
    ServiceError {
        /// Relay-provided reason, or the generic fallback
        message: String,
    },
    /// No usable relay response (network fault or unparseable body)
    TransportError {
        /// Underlying failure description
        detail: String,
    },
    /// No credential configured; nothing was sent
    ConfigError,
}

impl SubmissionOutcome {
    /// Whether this outcome is `Success`
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// User-facing notification for this outcome
    pub fn notification(&self) -> Notification {
        match self {
            Self::Success => Notification {
                title: "Message sent!".to_string(),
                description: "Thank you for your message. I'll get back to you soon.".to_string(),
                variant: NotificationVariant::Informational,
            },
            Self::ServiceError { message } => Notification {
                title: "Error sending message.".to_string(),
                description: message.clone(),
                variant: NotificationVariant::Destructive,
            },
            Self::TransportError { .. } => Notification {
                title: "Network Error.".to_string(),
                description: "Could not reach the form service.".to_string(),
                variant: NotificationVariant::Destructive,
            },
            Self::ConfigError => Notification {
                title: "Configuration Error".to_string(),
                description: "Contact key is missing. Please check console.".to_string(),
                variant: NotificationVariant::Destructive,
            },
        }
    }
}

/// Styling category of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationVariant {
    /// Neutral / positive
    Informational,
    /// Warning or failure
    Destructive,
}

/// Text shown to the user after a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Short headline
    pub title: String,
    /// Longer explanation
    pub description: String,
    /// Styling category
    pub variant: NotificationVariant,
}

/// Colour scheme preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark mode (the default when nothing is stored)
    #[default]
    Dark,
    /// Light mode
    Light,
}

impl Theme {
    /// The other theme
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Stored string form
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(Error::UnknownTheme(other.to_string())),
        }
    }
}

/// Skill grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    /// Browser-side work
    Frontend,
    /// Server-side work
    Backend,
    /// Infrastructure and delivery
    CloudDevOps,
}

impl SkillCategory {
    /// Every category, in display order
    pub const ALL: [Self; 3] = [Self::Frontend, Self::Backend, Self::CloudDevOps];

    /// Display label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::CloudDevOps => "Cloud & DevOps",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An entry in the skills catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    /// Skill name
    pub name: &'static str,
    /// Proficiency, 0-100
    pub level: u8,
    /// Grouping
    pub category: SkillCategory,
}
