use serde::{Deserialize, Serialize};

pub const INCOMPLETE_MESSAGE: &str = "Please fill out all fields.";
pub const ACCEPTED_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

/// Result of validating a contact-form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactOutcome {
    Incomplete,
    Accepted,
}

impl ContactOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            ContactOutcome::Incomplete => INCOMPLETE_MESSAGE,
            ContactOutcome::Accepted => ACCEPTED_MESSAGE,
        }
    }
}

/// Raw form fields. Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Validates a submission. Nothing is stored or sent.
pub fn handle_contact_submit(name: &str, email: &str, message: &str) -> ContactOutcome {
    let blank = |s: &str| s.trim().is_empty();
    if blank(name) || blank(email) || blank(message) {
        ContactOutcome::Incomplete
    } else {
        ContactOutcome::Accepted
    }
}
