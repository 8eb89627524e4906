use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;
use tracing::error;

use crate::assets::application::ports::outgoing::{AssetError, AssetLoader};
use crate::assets::domain::asset::{image_mime, AssetFile, AssetPaths, RESUME_MIME};

/// Reads assets from the local filesystem.
#[derive(Debug, Clone)]
pub struct FsAssetLoader {
    paths: AssetPaths,
}

impl FsAssetLoader {
    pub fn new(paths: AssetPaths) -> Self {
        Self { paths }
    }

    fn map_io_error(path: &Path, err: std::io::Error) -> AssetError {
        if err.kind() == ErrorKind::NotFound {
            AssetError::NotFound(path.to_path_buf())
        } else {
            error!("Failed to read asset {}: {}", path.display(), err);
            AssetError::Io {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
        }
    }

    async fn read_file(path: &Path, mime: &'static str) -> Result<AssetFile, AssetError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| Self::map_io_error(path, e))?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(AssetFile {
            file_name,
            mime,
            bytes,
        })
    }
}

#[async_trait]
impl AssetLoader for FsAssetLoader {
    async fn try_load_css(&self) -> Result<String, AssetError> {
        let path = &self.paths.css_file;
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Self::map_io_error(path, e))
    }

    async fn try_load_resume(&self) -> Result<AssetFile, AssetError> {
        Self::read_file(&self.paths.resume_file, RESUME_MIME).await
    }

    async fn try_load_profile_picture(&self) -> Result<AssetFile, AssetError> {
        let path = &self.paths.profile_picture_file;
        Self::read_file(path, image_mime(path)).await
    }
}
