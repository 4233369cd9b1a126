//! OpenAPI document assembly for the Swagger UI.

use utoipa::OpenApi;

use crate::routes::{health, tasks};

#[derive(OpenApi)]
#[openapi(info(
    title = "tasktrack-server",
    description = "Task tracker REST API",
    version = "0.1.0"
))]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut root = ApiDoc::openapi();
    root.merge(tasks::TasksApi::openapi());
    root.merge(health::HealthApi::openapi());
    root
}
