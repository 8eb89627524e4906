mod download_resume;
mod get_profile_picture;

pub use download_resume::{__path_download_resume_handler, download_resume_handler};
pub use get_profile_picture::{__path_get_profile_picture_handler, get_profile_picture_handler};
