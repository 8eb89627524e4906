use actix_web::{get, web, Responder};

use crate::{
    api::schemas::SuccessResponse, content::domain::entities::PortfolioContent,
    shared::api::ApiResponse, AppState,
};

/// Portfolio content
///
/// Raw content model, for clients that render the portfolio themselves.
#[utoipa::path(
    get,
    path = "/api/content",
    tag = "content",
    responses(
        (
            status = 200,
            description = "The full content model",
            body = inline(SuccessResponse<PortfolioContent>)
        ),
    )
)]
#[get("/api/content")]
pub async fn get_content_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.content.as_ref())
}
