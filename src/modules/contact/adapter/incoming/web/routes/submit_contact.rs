use actix_web::{post, web, Responder};

use crate::{
    contact::domain::outcome::ContactSubmission,
    page::adapter::incoming::web::routes::{render_page_response, PageQuery},
    page::domain::ui_state::{FormState, UiState},
    AppState,
};

/// Validates the submission and re-renders the page on the tab the form was
/// posted from, with the outcome shown under the form.
#[post("/contact")]
pub async fn submit_contact_handler(
    query: web::Query<PageQuery>,
    form: web::Form<ContactSubmission>,
    data: web::Data<AppState>,
) -> impl Responder {
    let outcome = data
        .submit_contact_use_case
        .execute(form.into_inner())
        .await;

    let ui = UiState {
        selected_tab: query.selected_tab(),
        form: FormState::submitted(outcome),
    };

    render_page_response(&data, &ui).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header, http::StatusCode, test, App};
    use serde_json::Value;

    use crate::shared::api::custom_form_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    async fn post_form(uri: &str, body: &str) -> (StatusCode, String) {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_form_config())
                .service(submit_contact_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(uri)
            .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
            .set_payload(body.to_string())
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[actix_web::test]
    async fn test_submit_contact_accepted() {
        let (status, html) =
            post_form("/contact?tab=about", "name=A&email=a%40b.com&message=hi").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Message sent successfully! I&#39;ll get back to you soon."));
        assert!(html.contains("notice-success"));
    }

    #[actix_web::test]
    async fn test_submit_contact_incomplete() {
        let (status, html) = post_form("/contact", "name=&email=a%40b.com&message=hi").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Please fill out all fields."));
        assert!(html.contains("notice-warning"));
    }

    #[actix_web::test]
    async fn test_submit_contact_missing_fields_are_incomplete() {
        let (status, html) = post_form("/contact", "name=A").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Please fill out all fields."));
    }

    #[actix_web::test]
    async fn test_submit_contact_keeps_tab_and_clears_form() {
        let (status, html) = post_form(
            "/contact?tab=projects",
            "name=Visitor&email=v%40example.com&message=Hello+there",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("id=\"tab-projects\""));
        assert!(html.contains("action=\"/contact?tab=projects\""));
        assert!(html.contains("name=\"name\" value=\"\""));
        assert!(!html.contains("Hello there"));
    }

    #[actix_web::test]
    async fn test_submit_contact_twice_is_accepted_both_times() {
        for _ in 0..2 {
            let (_, html) = post_form("/contact", "name=A&email=a%40b.com&message=hi").await;
            assert!(html.contains("notice-success"));
        }
    }

    #[actix_web::test]
    async fn test_submit_contact_wrong_content_type_is_bad_request() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_form_config())
                .service(submit_contact_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/contact")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{\"name\":\"A\"}")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
