use async_trait::async_trait;
use std::fmt;

use crate::assets::domain::asset::{AssetFile, AssetKind};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchAssetError {
    NotFound,
    Unreadable(String),
}

impl fmt::Display for FetchAssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchAssetError::NotFound => write!(f, "asset not found"),
            FetchAssetError::Unreadable(msg) => write!(f, "asset unreadable: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait FetchAssetUseCase: Send + Sync {
    async fn execute(&self, kind: AssetKind) -> Result<AssetFile, FetchAssetError>;
}
