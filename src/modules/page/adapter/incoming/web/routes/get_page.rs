use actix_web::http::header::ContentType;
use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;

use crate::{
    page::adapter::incoming::web::presenter::{render_document, render_error_document},
    page::application::ports::incoming::use_cases::RenderPageError,
    page::domain::ui_state::{SelectedTab, UiState},
    AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub tab: Option<String>,
}

impl PageQuery {
    pub fn selected_tab(&self) -> SelectedTab {
        SelectedTab::parse(self.tab.as_deref())
    }
}

/// Renders the page for `ui` and wraps it in an HTML response.
pub async fn render_page_response(data: &AppState, ui: &UiState) -> HttpResponse {
    match data.render_page_use_case.execute(ui).await {
        Ok(page) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(render_document(&page)),

        Err(RenderPageError::InvalidContent(msg)) => {
            error!("Page render failed for tab {}: {}", ui.selected_tab.as_str(), msg);
            HttpResponse::InternalServerError()
                .content_type(ContentType::html())
                .body(render_error_document(
                    "Portfolio unavailable",
                    "This section could not be displayed.",
                ))
        }
    }
}

#[get("/")]
pub async fn get_page_handler(
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ui = UiState::on_tab(query.selected_tab());
    render_page_response(&data, &ui).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header, http::StatusCode, test, App};
    use std::sync::Arc;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{StubAssetLoader, StubRenderPageUseCase};

    async fn get_html(app_state: web::Data<AppState>, uri: &str) -> (StatusCode, String) {
        let app =
            test::init_service(App::new().app_data(app_state).service(get_page_handler)).await;
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
        let body = test::read_body(resp).await;
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[actix_web::test]
    async fn test_get_page_defaults_to_about_tab() {
        let app_state = TestAppStateBuilder::default()
            .with_assets(StubAssetLoader::all_present())
            .build();

        let (status, html) = get_html(app_state, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<title>Austine Lomocso | Digital Portfolio</title>"));
        assert!(html.contains("id=\"tab-about\""));
        assert!(html.contains("<h2>About Me</h2>"));
        assert!(html.contains("<h3>At a Glance</h3>"));
        assert!(html.contains("download=\"CV.pdf\""));
        assert!(!html.contains("role=\"alert\""));
    }

    #[actix_web::test]
    async fn test_get_page_renders_requested_tab() {
        let app_state = TestAppStateBuilder::default()
            .with_assets(StubAssetLoader::all_present())
            .build();

        let (status, html) = get_html(app_state, "/?tab=projects").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("id=\"tab-projects\""));
        let first = html.find("Planomatik - Event Management System").unwrap();
        let second = html.find("BlueHire").unwrap();
        let third = html.find("Clean And Respond").unwrap();
        assert!(first < second && second < third);
        assert!(html.contains("Python, Django, Django REST Framework, PostgreSQL, React"));
    }

    #[actix_web::test]
    async fn test_get_page_skills_tab() {
        let app_state = TestAppStateBuilder::default().build();

        let (status, html) = get_html(app_state, "/?tab=skills").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Python &amp; Django (95%)"));
        assert!(html.contains("<strong>Math Tutor</strong> | Brighterly"));
        assert!(html.contains("Key Responsibilities &amp; Achievements"));
    }

    #[actix_web::test]
    async fn test_get_page_unknown_tab_falls_back_to_about() {
        let app_state = TestAppStateBuilder::default().build();
        let (status, html) = get_html(app_state, "/?tab=nope").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("id=\"tab-about\""));
    }

    #[actix_web::test]
    async fn test_get_page_missing_assets_degrades_with_notices() {
        let app_state = TestAppStateBuilder::default()
            .with_assets(StubAssetLoader::none())
            .build();

        let (status, html) = get_html(app_state, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("CSS file not found: styles/main.css"));
        assert!(html.contains("PDF file not found: assets/CV.pdf"));
        assert!(!html.contains("<style>"));
        assert!(!html.contains("download=\""));
        // Profile and links still render.
        assert!(html.contains("<h1>Austine Lomocso</h1>"));
        assert!(html.contains(">LinkedIn</a>"));
        assert!(html.contains(">GitHub</a>"));
    }

    #[actix_web::test]
    async fn test_get_page_invalid_content_is_internal_error() {
        let app_state = TestAppStateBuilder::default()
            .with_render_page(Arc::new(StubRenderPageUseCase::invalid_content()))
            .build();

        let (status, html) = get_html(app_state, "/?tab=skills").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(html.contains("This section could not be displayed."));
    }
}
