mod render_page;

pub use render_page::{RenderPageError, RenderPageUseCase};
