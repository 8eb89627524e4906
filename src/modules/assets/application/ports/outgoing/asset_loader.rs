// asset_loader.rs
use async_trait::async_trait;
use std::path::PathBuf;

use crate::assets::domain::asset::AssetFile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssetError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },
}

/// Optional files the page depends on. Every call reads the file afresh.
#[async_trait]
pub trait AssetLoader: Send + Sync {
    async fn try_load_css(&self) -> Result<String, AssetError>;
    async fn try_load_resume(&self) -> Result<AssetFile, AssetError>;
    async fn try_load_profile_picture(&self) -> Result<AssetFile, AssetError>;
}
