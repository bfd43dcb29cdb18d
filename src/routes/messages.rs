//! Contact message inbox.

use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::SERVICE_ADMIN_ROLE;
use crate::models::auth::AuthenticatedUser;
use crate::models::zmq::ChangeOp;
use crate::pagination::Paginated;
use crate::repository::{
    ContactMessageReader, ContactMessageWriter, DieselRepository, MessageListQuery,
};
use crate::routes::{
    DEFAULT_ITEMS_PER_PAGE, base_context, ensure_access, ensure_role, notify_change, redirect,
    render_template, resolve_theme,
};
use crate::zmq::ZmqSenders;

#[derive(Deserialize)]
pub struct MessagesQueryParams {
    unread: Option<bool>,
    page: Option<usize>,
}

#[get("/admin/messages")]
pub async fn messages(
    req: HttpRequest,
    params: web::Query<MessagesQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_access(&user) {
        return response;
    }

    let page = params.page.unwrap_or(1);
    let unread_only = params.unread.unwrap_or(false);

    let mut query = MessageListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if unread_only {
        query = query.unread_only();
    }

    let messages = match repo.list_messages(query) {
        Ok((total, items)) => {
            Paginated::new(items, page, total.div_ceil(DEFAULT_ITEMS_PER_PAGE))
        }
        Err(e) => {
            log::error!("Failed to list contact messages: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, Some(&user), "messages", &resolve_theme(&req));
    context.insert("messages", &messages);
    context.insert("unread_only", &unread_only);

    render_template(&tera, "admin/messages.html", &context)
}

#[post("/admin/messages/{id}/read")]
pub async fn mark_message_read(
    message_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
) -> impl Responder {
    if let Err(response) = ensure_access(&user) {
        return response;
    }

    let id = message_id.into_inner();
    match repo.mark_message_read(id) {
        Ok(_) => notify_change(&senders, "contact_messages", id, ChangeOp::Updated),
        Err(e) => {
            log::error!("Failed to mark message read: {e}");
            FlashMessage::error("Could not update the message.").send();
        }
    }

    redirect("/admin/messages")
}

#[post("/admin/messages/{id}/delete")]
pub async fn delete_message(
    message_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let id = message_id.into_inner();
    match repo.delete_message(id) {
        Ok(()) => {
            notify_change(&senders, "contact_messages", id, ChangeOp::Deleted);
            FlashMessage::success("Message deleted.").send();
        }
        Err(e) => {
            log::error!("Failed to delete message: {e}");
            FlashMessage::error("Could not delete the message.").send();
        }
    }

    redirect("/admin/messages")
}
