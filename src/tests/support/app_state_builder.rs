use crate::assets::application::ports::incoming::use_cases::FetchAssetUseCase;
use crate::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::contact::application::services::SubmitContactService;
use crate::content::domain::entities::PortfolioContent;
use crate::content::domain::seed::authored_content;
use crate::page::application::ports::incoming::use_cases::RenderPageUseCase;
use crate::page::application::services::RenderPageService;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Builds an `AppState` for route tests. Defaults to the authored content, the
/// real page renderer over an all-present in-memory asset loader, and the real
/// contact service.
pub struct TestAppStateBuilder {
    content: PortfolioContent,
    assets: StubAssetLoader,
    render_page: Option<Arc<dyn RenderPageUseCase + Send + Sync>>,
    submit_contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
    fetch_asset: Arc<dyn FetchAssetUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            content: authored_content(),
            assets: StubAssetLoader::all_present(),
            render_page: None,
            submit_contact: Arc::new(SubmitContactService::new()),
            fetch_asset: Arc::new(StubFetchAssetUseCase::missing()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_content(mut self, content: PortfolioContent) -> Self {
        self.content = content;
        self
    }

    /// Files seen by the default page renderer.
    pub fn with_assets(mut self, assets: StubAssetLoader) -> Self {
        self.assets = assets;
        self
    }

    pub fn with_render_page(mut self, uc: Arc<dyn RenderPageUseCase + Send + Sync>) -> Self {
        self.render_page = Some(uc);
        self
    }

    pub fn with_fetch_asset(mut self, uc: Arc<dyn FetchAssetUseCase + Send + Sync>) -> Self {
        self.fetch_asset = uc;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let content = Arc::new(self.content);
        let render_page_use_case: Arc<dyn RenderPageUseCase + Send + Sync> =
            match self.render_page {
                Some(uc) => uc,
                None => Arc::new(RenderPageService::new(Arc::clone(&content), self.assets)),
            };

        web::Data::new(AppState {
            content,
            render_page_use_case,
            submit_contact_use_case: self.submit_contact,
            fetch_asset_use_case: self.fetch_asset,
        })
    }
}
