use crate::api::schemas::{ErrorDetail, ErrorResponse, HealthStatus, SuccessResponse};
use crate::content::domain::entities::{
    AboutContent, ExperienceEntry, Link, Metric, PageMeta, PortfolioContent, Profile, Project,
    Skill, SkillCategory,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Machine-readable endpoints of the portfolio site. The HTML page itself is served at `/`."
    ),
    paths(
        crate::health::health,
        crate::content::adapter::incoming::web::routes::get_content_handler,
        crate::assets::adapter::incoming::web::routes::download_resume_handler,
        crate::assets::adapter::incoming::web::routes::get_profile_picture_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<PortfolioContent>,
            ErrorResponse,
            ErrorDetail,
            HealthStatus,

            // Content model
            PortfolioContent,
            PageMeta,
            Profile,
            Link,
            AboutContent,
            Metric,
            SkillCategory,
            Skill,
            Project,
            ExperienceEntry
        )
    ),
    tags(
        (name = "content", description = "Portfolio content"),
        (name = "assets", description = "Downloadable files"),
        (name = "health", description = "Probes"),
    )
)]
pub struct ApiDoc;
