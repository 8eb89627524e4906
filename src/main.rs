pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::assets;
pub use modules::contact;
pub use modules::content;
pub use modules::page;

use crate::api::openapi::ApiDoc;
use crate::assets::adapter::outgoing::FsAssetLoader;
use crate::assets::application::ports::incoming::use_cases::FetchAssetUseCase;
use crate::assets::application::services::FetchAssetService;
use crate::config::AppConfig;
use crate::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::contact::application::services::SubmitContactService;
use crate::content::domain::entities::PortfolioContent;
use crate::content::domain::seed::authored_content;
use crate::page::application::ports::incoming::use_cases::RenderPageUseCase;
use crate::page::application::services::RenderPageService;
use crate::shared::api::custom_form_config;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use std::io;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<PortfolioContent>,
    pub render_page_use_case: Arc<dyn RenderPageUseCase + Send + Sync>,
    pub submit_contact_use_case: Arc<dyn SubmitContactUseCase + Send + Sync>,
    pub fetch_asset_use_case: Arc<dyn FetchAssetUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application ({})...", env);

    let config = AppConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let content = authored_content();
    if let Err(e) = content.validate() {
        error!("Authored content is invalid: {}", e);
        return Err(io::Error::new(io::ErrorKind::InvalidData, e));
    }
    let content = Arc::new(content);

    info!(
        css = %config.assets.css_file.display(),
        resume = %config.assets.resume_file.display(),
        profile_picture = %config.assets.profile_picture_file.display(),
        "Asset locations"
    );

    let asset_loader = FsAssetLoader::new(config.assets.clone());

    let render_page_use_case =
        RenderPageService::new(Arc::clone(&content), asset_loader.clone());
    let fetch_asset_use_case = FetchAssetService::new(asset_loader);
    let submit_contact_use_case = SubmitContactService::new();

    let state = AppState {
        content,
        render_page_use_case: Arc::new(render_page_use_case),
        submit_contact_use_case: Arc::new(submit_contact_use_case),
        fetch_asset_use_case: Arc::new(fetch_asset_use_case),
    };

    let openapi = ApiDoc::openapi();
    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_form_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    // Page
    cfg.service(crate::page::adapter::incoming::web::routes::get_page_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_handler);
    // Assets
    cfg.service(crate::assets::adapter::incoming::web::routes::download_resume_handler);
    cfg.service(crate::assets::adapter::incoming::web::routes::get_profile_picture_handler);
    // Content API
    cfg.service(crate::content::adapter::incoming::web::routes::get_content_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
