use async_trait::async_trait;
use tracing::debug;

use crate::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::contact::domain::outcome::{handle_contact_submit, ContactOutcome, ContactSubmission};

/// Acknowledges contact messages without storing or forwarding them.
#[derive(Debug, Clone, Default)]
pub struct SubmitContactService;

impl SubmitContactService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SubmitContactUseCase for SubmitContactService {
    async fn execute(&self, submission: ContactSubmission) -> ContactOutcome {
        let outcome = handle_contact_submit(
            &submission.name,
            &submission.email,
            &submission.message,
        );

        // The message body is never logged.
        debug!(
            outcome = ?outcome,
            message_len = submission.message.len(),
            "Contact form submitted"
        );

        outcome
    }
}
