use async_trait::async_trait;
use std::fmt;

use crate::page::domain::page::Page;
use crate::page::domain::ui_state::UiState;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderPageError {
    /// The authored content breaks an invariant the renderers rely on.
    InvalidContent(String),
}

impl fmt::Display for RenderPageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderPageError::InvalidContent(msg) => write!(f, "invalid content: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RenderPageUseCase: Send + Sync {
    async fn execute(&self, ui: &UiState) -> Result<Page, RenderPageError>;
}
