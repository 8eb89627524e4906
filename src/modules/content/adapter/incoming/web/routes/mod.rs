mod get_content;

pub use get_content::{__path_get_content_handler, get_content_handler};
