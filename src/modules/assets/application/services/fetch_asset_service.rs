use async_trait::async_trait;
use tracing::warn;

use crate::assets::application::ports::incoming::use_cases::{FetchAssetError, FetchAssetUseCase};
use crate::assets::application::ports::outgoing::{AssetError, AssetLoader};
use crate::assets::domain::asset::{AssetFile, AssetKind};

pub struct FetchAssetService<L>
where
    L: AssetLoader,
{
    loader: L,
}

impl<L> FetchAssetService<L>
where
    L: AssetLoader,
{
    pub fn new(loader: L) -> Self {
        Self { loader }
    }
}

#[async_trait]
impl<L> FetchAssetUseCase for FetchAssetService<L>
where
    L: AssetLoader + Send + Sync,
{
    async fn execute(&self, kind: AssetKind) -> Result<AssetFile, FetchAssetError> {
        let loaded = match kind {
            AssetKind::Resume => self.loader.try_load_resume().await,
            AssetKind::ProfilePicture => self.loader.try_load_profile_picture().await,
        };

        match loaded {
            // An empty resume is treated like a missing one.
            Ok(file) if kind == AssetKind::Resume && file.is_empty() => {
                Err(FetchAssetError::NotFound)
            }
            Ok(file) => Ok(file),
            Err(AssetError::NotFound(path)) => {
                warn!("{:?} not found at {}", kind, path.display());
                Err(FetchAssetError::NotFound)
            }
            Err(e @ AssetError::Io { .. }) => Err(FetchAssetError::Unreadable(e.to_string())),
        }
    }
}
