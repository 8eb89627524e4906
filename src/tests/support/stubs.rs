use async_trait::async_trait;
use std::path::PathBuf;

use crate::assets::application::ports::incoming::use_cases::{FetchAssetError, FetchAssetUseCase};
use crate::assets::application::ports::outgoing::{AssetError, AssetLoader};
use crate::assets::domain::asset::{AssetFile, AssetKind, RESUME_MIME};

const JPEG_MIME: &str = "image/jpeg";
use crate::page::application::ports::incoming::use_cases::{RenderPageError, RenderPageUseCase};
use crate::page::domain::page::Page;
use crate::page::domain::ui_state::UiState;

/* --------------------------------------------------
 * Asset loader (in memory)
 * -------------------------------------------------- */

#[derive(Clone, Default)]
pub struct StubAssetLoader {
    pub css: Option<String>,
    pub resume: Option<Vec<u8>>,
    pub profile_picture: Option<Vec<u8>>,
}

impl StubAssetLoader {
    pub fn all_present() -> Self {
        Self {
            css: Some("body { font-family: sans-serif; }".to_string()),
            resume: Some(b"%PDF-1.4 stub".to_vec()),
            profile_picture: Some(vec![0xFF, 0xD8, 0xFF, 0xE0]),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    fn file(bytes: &Option<Vec<u8>>, path: &str, mime: &'static str) -> Result<AssetFile, AssetError> {
        let path = PathBuf::from(path);
        match bytes {
            Some(bytes) => Ok(AssetFile {
                file_name: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                mime,
                bytes: bytes.clone(),
            }),
            None => Err(AssetError::NotFound(path)),
        }
    }
}

#[async_trait]
impl AssetLoader for StubAssetLoader {
    async fn try_load_css(&self) -> Result<String, AssetError> {
        self.css
            .clone()
            .ok_or_else(|| AssetError::NotFound(PathBuf::from("styles/main.css")))
    }

    async fn try_load_resume(&self) -> Result<AssetFile, AssetError> {
        Self::file(&self.resume, "assets/CV.pdf", RESUME_MIME)
    }

    async fn try_load_profile_picture(&self) -> Result<AssetFile, AssetError> {
        Self::file(&self.profile_picture, "assets/profile-pic.jpg", JPEG_MIME)
    }
}

/* --------------------------------------------------
 * Use cases
 * -------------------------------------------------- */

pub struct StubRenderPageUseCase {
    result: Result<Page, RenderPageError>,
}

impl StubRenderPageUseCase {
    pub fn invalid_content() -> Self {
        Self {
            result: Err(RenderPageError::InvalidContent(
                "skill 'Rust' in category 'Backend' has level 120, expected 0..=100".to_string(),
            )),
        }
    }
}

#[async_trait]
impl RenderPageUseCase for StubRenderPageUseCase {
    async fn execute(&self, _ui: &UiState) -> Result<Page, RenderPageError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubFetchAssetUseCase {
    resume: Result<Vec<u8>, FetchAssetError>,
    profile_picture: Result<Vec<u8>, FetchAssetError>,
}

impl StubFetchAssetUseCase {
    pub fn with_resume(bytes: &[u8]) -> Self {
        Self {
            resume: Ok(bytes.to_vec()),
            profile_picture: Err(FetchAssetError::NotFound),
        }
    }

    pub fn with_picture(bytes: &[u8]) -> Self {
        Self {
            resume: Err(FetchAssetError::NotFound),
            profile_picture: Ok(bytes.to_vec()),
        }
    }

    pub fn missing() -> Self {
        Self {
            resume: Err(FetchAssetError::NotFound),
            profile_picture: Err(FetchAssetError::NotFound),
        }
    }

    pub fn unreadable(msg: &str) -> Self {
        Self {
            resume: Err(FetchAssetError::Unreadable(msg.to_string())),
            profile_picture: Err(FetchAssetError::Unreadable(msg.to_string())),
        }
    }
}

#[async_trait]
impl FetchAssetUseCase for StubFetchAssetUseCase {
    async fn execute(&self, kind: AssetKind) -> Result<AssetFile, FetchAssetError> {
        match kind {
            AssetKind::Resume => self.resume.clone().map(|bytes| AssetFile {
                file_name: "CV.pdf".to_string(),
                mime: RESUME_MIME,
                bytes,
            }),
            AssetKind::ProfilePicture => self.profile_picture.clone().map(|bytes| AssetFile {
                file_name: "profile-pic.jpg".to_string(),
                mime: JPEG_MIME,
                bytes,
            }),
        }
    }
}
