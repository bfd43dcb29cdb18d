//! Route handlers and the helpers they share.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use rand::Rng;
use rand::distr::Alphanumeric;
use tera::{Context, Tera};

use crate::models::auth::AuthenticatedUser;
use crate::models::zmq::{ChangeOp, ZmqChangeEvent};
use crate::zmq::ZmqSenders;
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

pub mod admin;
pub mod api;
pub mod auth;
pub mod billing;
pub mod catalog;
pub mod main;
pub mod messages;
pub mod newsletter;
pub mod settings;
pub mod storage;
pub mod tasks;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;
pub const THEME_COOKIE: &str = "theme";

/// Maps flash levels onto the alert classes the templates use.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

pub fn check_role(role: &str, roles: &[String]) -> bool {
    roles.iter().any(|r| r == role)
}

/// Requires the given role; on failure flashes an error and redirects (or
/// returns 403 when no redirect target is given).
pub fn ensure_role(
    user: &AuthenticatedUser,
    role: &str,
    redirect_to: Option<&str>,
) -> Result<(), HttpResponse> {
    if check_role(role, &user.roles) {
        return Ok(());
    }
    match redirect_to {
        Some(url) => {
            FlashMessage::error("Access denied.").send();
            Err(redirect(url))
        }
        None => Err(HttpResponse::Forbidden().finish()),
    }
}

/// Back-office read access: staff or admin.
pub fn ensure_access(user: &AuthenticatedUser) -> Result<(), HttpResponse> {
    if check_role(SERVICE_ACCESS_ROLE, &user.roles) || check_role(SERVICE_ADMIN_ROLE, &user.roles)
    {
        return Ok(());
    }
    Err(redirect("/na"))
}

pub fn redirect(to: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, to))
        .finish()
}

pub fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(html) => HttpResponse::Ok().content_type("text/html").body(html),
        Err(e) => {
            log::error!("Failed to render template {name}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Context every page template expects: alerts, the current user, the page
/// marker for nav highlighting and the resolved theme.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    user: Option<&AuthenticatedUser>,
    current_page: &str,
    theme: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", &user);
    context.insert("current_page", current_page);
    context.insert("theme", theme);
    context
}

/// Theme preference lives in a cookie; anonymous visitors get the default.
pub fn resolve_theme(req: &HttpRequest) -> String {
    req.cookie(THEME_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| v == "light" || v == "dark")
        .unwrap_or_else(|| "light".to_string())
}

/// Random token used in unsubscribe links.
pub fn new_subscriber_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Publishes a row-change event; failures are logged, never surfaced.
pub fn notify_change(senders: &ZmqSenders, entity: &str, entity_id: i32, op: ChangeOp) {
    let event = ZmqChangeEvent {
        entity: entity.to_string(),
        entity_id,
        op,
    };
    if let Err(e) = senders.events.send(&event) {
        log::error!("Failed to publish change event for {entity}: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_role_matches_exactly() {
        let roles = vec!["staff".to_string(), "admin".to_string()];
        assert!(check_role("admin", &roles));
        assert!(!check_role("adm", &roles));
        assert!(!check_role("admin", &[]));
    }

    #[test]
    fn subscriber_tokens_are_long_and_unique() {
        let a = new_subscriber_token();
        let b = new_subscriber_token();
        assert_eq!(a.len(), 32);
        assert_ne!(a, b);
    }
}
