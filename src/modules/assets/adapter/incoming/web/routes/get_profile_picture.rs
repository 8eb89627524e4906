use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::{
    assets::application::ports::incoming::use_cases::FetchAssetError,
    assets::domain::asset::AssetKind, shared::api::ApiResponse, AppState,
};

#[utoipa::path(
    get,
    path = "/assets/profile-pic.jpg",
    tag = "assets",
    responses(
        (status = 200, description = "Profile picture, typed by its file extension", content_type = "image/jpeg", body = Vec<u8>),
        (status = 404, description = "No picture on disk", body = ErrorResponse),
        (status = 500, description = "Picture exists but could not be read", body = ErrorResponse),
    )
)]
#[get("/assets/profile-pic.jpg")]
pub async fn get_profile_picture_handler(data: web::Data<AppState>) -> impl Responder {
    match data
        .fetch_asset_use_case
        .execute(AssetKind::ProfilePicture)
        .await
    {
        Ok(file) => HttpResponse::Ok().content_type(file.mime).body(file.bytes),

        Err(FetchAssetError::NotFound) => {
            ApiResponse::not_found("PROFILE_PICTURE_NOT_FOUND", "Profile picture is not available")
        }

        Err(FetchAssetError::Unreadable(msg)) => {
            error!("Failed to read profile picture: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
