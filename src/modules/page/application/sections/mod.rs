//! Section renderers: pure functions from a slice of the content model to blocks.

mod about;
mod projects;
mod sidebar;
mod skills_experience;

pub use about::render_about;
pub use projects::render_projects;
pub use sidebar::{render_sidebar, CONTACT_ACTION, RESUME_HREF};
pub use skills_experience::render_skills_and_experience;
