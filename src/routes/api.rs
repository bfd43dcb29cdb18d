use actix_web::{HttpResponse, Responder, get, web};
use serde::Deserialize;

use crate::models::auth::AuthenticatedUser;
use crate::repository::{DieselRepository, ProjectListQuery, ProjectReader};
use crate::routes::ensure_access;

#[derive(Deserialize)]
struct ApiV1ProjectsQueryParams {
    query: String,
}

#[get("/v1/projects")]
pub async fn api_v1_projects(
    params: web::Query<ApiV1ProjectsQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if ensure_access(&user).is_err() {
        return HttpResponse::Unauthorized().finish();
    }

    match repo.list_projects(ProjectListQuery::new().search(params.query.trim())) {
        Ok((_, projects)) => HttpResponse::Ok().json(projects),
        Err(e) => {
            log::error!("Failed to search projects: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
