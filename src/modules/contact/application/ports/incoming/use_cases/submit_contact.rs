use async_trait::async_trait;

use crate::contact::domain::outcome::{ContactOutcome, ContactSubmission};

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

/// Validation cannot fail, so the use case returns the outcome directly.
#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(&self, submission: ContactSubmission) -> ContactOutcome;
}
