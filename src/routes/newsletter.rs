//! Newsletter subscribers and campaigns.

use actix_multipart::form::MultipartForm;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use serde_json::json;
use tera::Tera;
use validator::Validate;

use crate::SERVICE_ADMIN_ROLE;
use crate::domain::newsletter::{CampaignStatus, NewCampaign};
use crate::domain::system_log::NewSystemLog;
use crate::forms::newsletter::{SaveCampaignForm, UploadSubscribersForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::zmq::{ChangeOp, ZmqEmailMessage};
use crate::pagination::Paginated;
use crate::repository::{
    CampaignReader, CampaignWriter, DieselRepository, SubscriberListQuery, SubscriberReader,
    SubscriberWriter, SystemLogWriter,
};
use crate::routes::{
    DEFAULT_ITEMS_PER_PAGE, base_context, ensure_access, ensure_role, notify_change, redirect,
    render_template, resolve_theme,
};
use crate::zmq::ZmqSenders;

#[derive(Deserialize)]
pub struct NewsletterQueryParams {
    page: Option<usize>,
}

#[get("/admin/newsletter")]
pub async fn newsletter(
    req: HttpRequest,
    params: web::Query<NewsletterQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_access(&user) {
        return response;
    }

    let page = params.page.unwrap_or(1);
    let subscribers = match repo
        .list_subscribers(SubscriberListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE))
    {
        Ok((total, items)) => {
            Paginated::new(items, page, total.div_ceil(DEFAULT_ITEMS_PER_PAGE))
        }
        Err(e) => {
            log::error!("Failed to list subscribers: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let campaigns = match repo.list_campaigns() {
        Ok(items) => items,
        Err(e) => {
            log::error!("Failed to list campaigns: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context =
        base_context(&flash_messages, Some(&user), "newsletter", &resolve_theme(&req));
    context.insert("subscribers", &subscribers);
    context.insert("campaigns", &campaigns);

    render_template(&tera, "admin/newsletter.html", &context)
}

#[post("/admin/newsletter/subscribers/upload")]
pub async fn upload_subscribers(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    MultipartForm(mut form): MultipartForm<UploadSubscribersForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let subscribers = match form.parse() {
        Ok(subscribers) => subscribers,
        Err(e) => {
            log::error!("Failed to parse subscriber CSV: {e}");
            FlashMessage::error("Could not parse the CSV file.").send();
            return redirect("/admin/newsletter");
        }
    };

    match repo.import_subscribers(&subscribers) {
        Ok(imported) => {
            FlashMessage::success(format!("Imported {imported} subscribers.")).send();
        }
        Err(e) => {
            log::error!("Failed to import subscribers: {e}");
            FlashMessage::error("Import failed.").send();
        }
    }

    redirect("/admin/newsletter")
}

#[get("/admin/newsletter/subscribers/export")]
pub async fn export_subscribers(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_access(&user) {
        return response;
    }

    let (_, subscribers) = match repo.list_subscribers(SubscriberListQuery::new()) {
        Ok(result) => result,
        Err(e) => {
            log::error!("Failed to export subscribers: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut wtr = csv::Writer::from_writer(Vec::new());
    if wtr.write_record(["email", "name", "subscribed"]).is_err() {
        return HttpResponse::InternalServerError().finish();
    }
    for subscriber in &subscribers {
        let record = [
            subscriber.email.as_str(),
            subscriber.name.as_deref().unwrap_or(""),
            if subscriber.subscribed { "yes" } else { "no" },
        ];
        if wtr.write_record(record).is_err() {
            return HttpResponse::InternalServerError().finish();
        }
    }

    match wtr.into_inner() {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("text/csv")
            .insert_header((
                actix_web::http::header::CONTENT_DISPOSITION,
                "attachment; filename=\"subscribers.csv\"",
            ))
            .body(bytes),
        Err(e) => {
            log::error!("Failed to finish CSV export: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/admin/newsletter/subscribers/{id}/delete")]
pub async fn delete_subscriber(
    subscriber_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    match repo.delete_subscriber(subscriber_id.into_inner()) {
        Ok(()) => FlashMessage::success("Subscriber removed.").send(),
        Err(e) => {
            log::error!("Failed to delete subscriber: {e}");
            FlashMessage::error("Could not remove the subscriber.").send();
        }
    }

    redirect("/admin/newsletter")
}

#[post("/admin/newsletter/campaigns/save")]
pub async fn save_campaign(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
    web::Form(form): web::Form<SaveCampaignForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    if let Err(e) = form.validate() {
        log::error!("Failed to validate campaign form: {e}");
        FlashMessage::error("Please fill in subject and body.").send();
        return redirect("/admin/newsletter");
    }

    let payload = NewCampaign::new(form.subject.clone(), ammonia::clean(&form.body));
    let result = match form.id {
        Some(id) => repo
            .update_campaign(id, &payload)
            .map(|c| (c, ChangeOp::Updated)),
        None => repo
            .create_campaign(&payload)
            .map(|c| (c, ChangeOp::Created)),
    };

    match result {
        Ok((campaign, op)) => {
            notify_change(&senders, "campaigns", campaign.id, op);
            FlashMessage::success("Campaign saved.").send();
        }
        Err(e) => {
            log::error!("Failed to save campaign: {e}");
            FlashMessage::error("Could not save the campaign.").send();
        }
    }

    redirect("/admin/newsletter")
}

#[post("/admin/newsletter/campaigns/{id}/delete")]
pub async fn delete_campaign(
    campaign_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let id = campaign_id.into_inner();
    match repo.delete_campaign(id) {
        Ok(()) => {
            notify_change(&senders, "campaigns", id, ChangeOp::Deleted);
            FlashMessage::success("Campaign deleted.").send();
        }
        Err(e) => {
            log::error!("Failed to delete campaign: {e}");
            FlashMessage::error("Could not delete the campaign.").send();
        }
    }

    redirect("/admin/newsletter")
}

#[post("/admin/newsletter/campaigns/{id}/send")]
pub async fn send_campaign(
    campaign_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let id = campaign_id.into_inner();
    let campaign = match repo.get_campaign_by_id(id) {
        Ok(Some(campaign)) => campaign,
        Ok(None) => {
            FlashMessage::error("Campaign not found.").send();
            return redirect("/admin/newsletter");
        }
        Err(e) => {
            log::error!("Failed to load campaign: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    if campaign.status == CampaignStatus::Sent {
        FlashMessage::error("This campaign was already sent.").send();
        return redirect("/admin/newsletter");
    }

    let recipients = match repo.list_subscribed_emails() {
        Ok(recipients) => recipients,
        Err(e) => {
            log::error!("Failed to list recipients: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    if recipients.is_empty() {
        FlashMessage::error("There are no subscribed recipients.").send();
        return redirect("/admin/newsletter");
    }

    // one message per recipient so the mailer can personalize unsubscribe links
    for recipient in &recipients {
        let email = ZmqEmailMessage {
            to: vec![recipient.clone()],
            subject: campaign.subject.clone(),
            body: campaign.body.clone(),
        };
        if let Err(e) = senders.email.send(&email) {
            log::error!("Failed to publish campaign email to {recipient}: {e}");
        }
    }

    match repo.mark_campaign_sent(id) {
        Ok(campaign) => {
            notify_change(&senders, "campaigns", campaign.id, ChangeOp::Updated);
            if let Err(e) = repo.create_system_log(&NewSystemLog::info(
                "newsletter campaign sent",
                Some(json!({ "campaign_id": campaign.id, "recipients": recipients.len() })),
            )) {
                log::error!("Failed to record campaign send: {e}");
            }
            FlashMessage::success(format!(
                "Campaign sent to {} recipients.",
                recipients.len()
            ))
            .send();
        }
        Err(e) => {
            log::error!("Failed to mark campaign sent: {e}");
            FlashMessage::error("Campaign was published but could not be marked as sent.").send();
        }
    }

    redirect("/admin/newsletter")
}
