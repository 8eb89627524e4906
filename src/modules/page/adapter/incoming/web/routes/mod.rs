mod get_page;

pub use get_page::{get_page_handler, render_page_response, PageQuery};
