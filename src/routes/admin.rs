//! Back-office dashboard and system log screens.

use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::models::auth::AuthenticatedUser;
use crate::pagination::Paginated;
use crate::repository::{
    DieselRepository, LogListQuery, SummaryReader, SystemLogReader, SystemLogWriter,
};
use crate::routes::{
    DEFAULT_ITEMS_PER_PAGE, base_context, ensure_access, ensure_role, redirect, render_template,
    resolve_theme,
};
use crate::SERVICE_ADMIN_ROLE;

#[get("/admin")]
pub async fn dashboard(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_access(&user) {
        return response;
    }

    let summary = match repo.dashboard_summary() {
        Ok(summary) => summary,
        Err(e) => {
            log::error!("Failed to load dashboard summary: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let recent_logs = match repo.list_system_logs(LogListQuery::new().paginate(1, 5)) {
        Ok((_, recent)) => recent,
        Err(e) => {
            log::error!("Failed to load recent logs: {e}");
            Vec::new()
        }
    };

    let mut context = base_context(&flash_messages, Some(&user), "admin", &resolve_theme(&req));
    context.insert("summary", &summary);
    context.insert("recent_logs", &recent_logs);

    render_template(&tera, "admin/dashboard.html", &context)
}

#[derive(Deserialize)]
pub struct LogsQueryParams {
    level: Option<String>,
    page: Option<usize>,
}

#[get("/admin/logs")]
pub async fn logs(
    req: HttpRequest,
    params: web::Query<LogsQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_access(&user) {
        return response;
    }

    let page = params.page.unwrap_or(1);
    let mut query = LogListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);

    let level_filter = params
        .level
        .as_deref()
        .filter(|l| ["info", "warning", "error"].contains(l));
    if let Some(level) = level_filter {
        query = query.level(level.into());
    }

    let logs = match repo.list_system_logs(query) {
        Ok((total, logs)) => {
            Paginated::new(logs, page, total.div_ceil(DEFAULT_ITEMS_PER_PAGE))
        }
        Err(e) => {
            log::error!("Failed to list system logs: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, Some(&user), "logs", &resolve_theme(&req));
    context.insert("logs", &logs);
    context.insert("level_filter", &level_filter);

    render_template(&tera, "admin/logs.html", &context)
}

#[post("/admin/logs/clear")]
pub async fn clear_logs(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    match repo.clear_system_logs() {
        Ok(cleared) => {
            FlashMessage::success(format!("Removed {cleared} log entries.")).send();
        }
        Err(e) => {
            log::error!("Failed to clear system logs: {e}");
            FlashMessage::error("Could not clear the log.").send();
        }
    }

    redirect("/admin/logs")
}
