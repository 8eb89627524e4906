use std::path::{Path, PathBuf};

pub const RESUME_MIME: &str = "application/octet-stream";
pub const FALLBACK_IMAGE_MIME: &str = "application/octet-stream";

/// Content type of an image, from its file extension.
pub fn image_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => FALLBACK_IMAGE_MIME,
    }
}

/// Files the page can hand out as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Resume,
    ProfilePicture,
}

/// A file read fully into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub css_file: PathBuf,
    pub resume_file: PathBuf,
    pub profile_picture_file: PathBuf,
}

impl AssetPaths {
    /// Conventional layout under `root`: `styles/main.css`, `assets/CV.pdf`,
    /// `assets/profile-pic.jpg`.
    pub fn under(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            css_file: root.join("styles").join("main.css"),
            resume_file: root.join("assets").join("CV.pdf"),
            profile_picture_file: root.join("assets").join("profile-pic.jpg"),
        }
    }
}

impl AssetFile {
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
