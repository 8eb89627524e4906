use actix_web::{get, HttpResponse, Responder};

use crate::api::schemas::HealthStatus;

/// LIVENESS PROBE
/// - No I/O
/// - Optional assets are not checked; a missing file only degrades the page
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Process is up", body = HealthStatus))
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "ok".to_string(),
    })
}
