use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::{
    assets::application::ports::incoming::use_cases::FetchAssetError,
    assets::domain::asset::AssetKind, shared::api::ApiResponse, AppState,
};

/// Download resume
///
/// Sends the resume as an attachment under its original file name.
#[utoipa::path(
    get,
    path = "/resume",
    tag = "assets",
    responses(
        (
            status = 200,
            description = "Resume file",
            content_type = "application/octet-stream",
            body = Vec<u8>
        ),
        (
            status = 404,
            description = "No resume on disk",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "RESUME_NOT_FOUND",
                    "message": "Resume is not available"
                }
            })
        ),
        (status = 500, description = "Resume exists but could not be read", body = ErrorResponse),
    )
)]
#[get("/resume")]
pub async fn download_resume_handler(data: web::Data<AppState>) -> impl Responder {
    match data.fetch_asset_use_case.execute(AssetKind::Resume).await {
        Ok(file) => HttpResponse::Ok()
            .content_type(file.mime)
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(file.file_name)],
            })
            .body(file.bytes),

        Err(FetchAssetError::NotFound) => {
            ApiResponse::not_found("RESUME_NOT_FOUND", "Resume is not available")
        }

        Err(FetchAssetError::Unreadable(msg)) => {
            error!("Failed to read resume: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
