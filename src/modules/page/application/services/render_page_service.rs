use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, warn};

use crate::assets::application::ports::outgoing::{AssetError, AssetLoader};
use crate::content::domain::entities::PortfolioContent;
use crate::page::application::ports::incoming::use_cases::{RenderPageError, RenderPageUseCase};
use crate::page::application::sections::{
    render_about, render_projects, render_sidebar, render_skills_and_experience,
};
use crate::page::domain::blocks::{Block, NoticeLevel};
use crate::page::domain::page::{Page, TabHeader};
use crate::page::domain::ui_state::{SelectedTab, UiState};

/// Assembles the whole page for one request.
pub struct RenderPageService<L>
where
    L: AssetLoader,
{
    content: Arc<PortfolioContent>,
    loader: L,
}

impl<L> RenderPageService<L>
where
    L: AssetLoader,
{
    pub fn new(content: Arc<PortfolioContent>, loader: L) -> Self {
        Self { content, loader }
    }
}

fn asset_notice(label: &str, err: &AssetError) -> Block {
    let message = match err {
        AssetError::NotFound(path) => format!("{} file not found: {}", label, path.display()),
        AssetError::Io { path, message } => {
            format!("{} file could not be read: {} ({})", label, path.display(), message)
        }
    };
    Block::notice(NoticeLevel::Error, message)
}

#[async_trait]
impl<L> RenderPageUseCase for RenderPageService<L>
where
    L: AssetLoader + Send + Sync,
{
    async fn execute(&self, ui: &UiState) -> Result<Page, RenderPageError> {
        let content = self.content.as_ref();
        let mut notices = Vec::new();

        let style = match self.loader.try_load_css().await {
            Ok(css) => Some(css),
            Err(e) => {
                warn!("Rendering without stylesheet: {}", e);
                notices.push(asset_notice("CSS", &e));
                None
            }
        };

        let resume = match self.loader.try_load_resume().await {
            Ok(file) => Some(file),
            Err(e) => {
                warn!("Rendering without resume download: {}", e);
                notices.push(asset_notice("PDF", &e));
                None
            }
        };

        let sidebar = render_sidebar(&content.profile, &content.links, resume.as_ref(), ui);

        let body = match ui.selected_tab {
            SelectedTab::About => render_about(&content.about),
            SelectedTab::Projects => render_projects(&content.projects),
            SelectedTab::Skills => {
                render_skills_and_experience(&content.skills, &content.experience).map_err(
                    |e| {
                        error!("Refusing to render skills: {}", e);
                        RenderPageError::InvalidContent(e.to_string())
                    },
                )?
            }
        };

        Ok(Page {
            meta: content.page.clone(),
            style,
            notices,
            sidebar,
            tabs: TabHeader::all(ui.selected_tab),
            selected_tab: ui.selected_tab,
            body,
        })
    }
}
