//! Public marketing pages, contact form and newsletter opt-in/out.

use actix_web::cookie::Cookie;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;
use validator::Validate;

use crate::domain::newsletter::NewSubscriber;
use crate::forms::main::{ContactForm, SubscribeForm, ThemeForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::zmq::ZmqEmailMessage;
use crate::repository::{DieselRepository, PageContentReader, SettingReader, SubscriberWriter};
use crate::routes::{
    THEME_COOKIE, base_context, new_subscriber_token, redirect, render_template, resolve_theme,
};
use crate::services::main as main_service;
use crate::zmq::ZmqSenders;

#[get("/")]
pub async fn index(
    req: HttpRequest,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = main_service::load_home_page(repo.get_ref());

    let mut context = base_context(&flash_messages, user.as_ref(), "home", &resolve_theme(&req));
    context.insert("contents", &data.contents);
    context.insert("projects", &data.projects);
    context.insert("services", &data.services);
    context.insert("testimonials", &data.testimonials);
    context.insert("faq_items", &data.faq_items);

    render_template(&tera, "main/index.html", &context)
}

#[get("/project/{id}")]
pub async fn show_project(
    req: HttpRequest,
    project_id: web::Path<i32>,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let project = match main_service::load_project(repo.get_ref(), project_id.into_inner()) {
        Ok(Some(project)) => project,
        Ok(None) => {
            FlashMessage::error("Project not found.").send();
            return redirect("/");
        }
        Err(e) => {
            log::error!("Failed to load project: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, user.as_ref(), "home", &resolve_theme(&req));
    context.insert("project", &project);

    render_template(&tera, "main/project.html", &context)
}

#[get("/service/{id}")]
pub async fn show_service(
    req: HttpRequest,
    service_id: web::Path<i32>,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let service = match main_service::load_service_item(repo.get_ref(), service_id.into_inner()) {
        Ok(Some(service)) => service,
        Ok(None) => {
            FlashMessage::error("Service not found.").send();
            return redirect("/");
        }
        Err(e) => {
            log::error!("Failed to load service: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, user.as_ref(), "home", &resolve_theme(&req));
    context.insert("service", &service);

    render_template(&tera, "main/service.html", &context)
}

async fn legal_page(
    req: HttpRequest,
    page: &str,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> HttpResponse {
    let contents = repo.list_page_contents(Some(page)).unwrap_or_else(|e| {
        log::error!("Failed to load {page} contents: {e}");
        Vec::new()
    });

    let mut context = base_context(&flash_messages, user.as_ref(), page, &resolve_theme(&req));
    context.insert("contents", &contents);

    render_template(&tera, &format!("main/{page}.html"), &context)
}

#[get("/impressum")]
pub async fn impressum(
    req: HttpRequest,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    legal_page(req, "impressum", user, repo, flash_messages, tera).await
}

#[get("/datenschutz")]
pub async fn datenschutz(
    req: HttpRequest,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    legal_page(req, "datenschutz", user, repo, flash_messages, tera).await
}

#[post("/contact")]
pub async fn submit_contact(
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
    web::Form(form): web::Form<ContactForm>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        log::error!("Failed to validate contact form: {e}");
        FlashMessage::error("Please fill in all required fields.").send();
        return redirect("/");
    }

    let message = match main_service::submit_contact(repo.get_ref(), &form) {
        Ok(message) => message,
        Err(e) => {
            log::error!("Failed to store contact message: {e}");
            FlashMessage::error("Your message could not be sent. Please try again.").send();
            return redirect("/");
        }
    };

    // notify the agency inbox, if one is configured
    match repo.get_setting("contact_email") {
        Ok(Some(setting)) => {
            let email = ZmqEmailMessage {
                to: vec![setting.value],
                subject: format!("New contact message from {}", message.name),
                body: message.message.clone(),
            };
            if let Err(e) = senders.email.send(&email) {
                log::error!("Failed to publish contact notification: {e}");
            }
        }
        Ok(None) => log::warn!("No contact_email setting; skipping notification"),
        Err(e) => log::error!("Failed to load contact_email setting: {e}"),
    }

    FlashMessage::success("Thanks for your message! We will get back to you soon.").send();
    redirect("/")
}

#[post("/newsletter/subscribe")]
pub async fn subscribe(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SubscribeForm>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        log::error!("Failed to validate subscribe form: {e}");
        FlashMessage::error("Please enter a valid email address.").send();
        return redirect("/");
    }

    let new_subscriber =
        match NewSubscriber::new(form.email, form.name, new_subscriber_token()) {
            Ok(subscriber) => subscriber,
            Err(e) => {
                FlashMessage::error(format!("Invalid email address: {e}")).send();
                return redirect("/");
            }
        };

    match repo.upsert_subscriber(&new_subscriber) {
        Ok(_) => FlashMessage::success("You are subscribed to the newsletter.").send(),
        Err(e) => {
            log::error!("Failed to subscribe: {e}");
            FlashMessage::error("Subscription failed. Please try again.").send();
        }
    }

    redirect("/")
}

#[get("/newsletter/unsubscribe/{token}")]
pub async fn unsubscribe(
    token: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match repo.set_subscribed(&token.into_inner(), false) {
        Ok(_) => FlashMessage::success("You have been unsubscribed.").send(),
        Err(e) => {
            log::error!("Failed to unsubscribe: {e}");
            FlashMessage::error("Unknown unsubscribe link.").send();
        }
    }
    redirect("/")
}

#[post("/theme")]
pub async fn set_theme(web::Form(form): web::Form<ThemeForm>) -> impl Responder {
    let theme = if form.theme == "dark" { "dark" } else { "light" };

    let cookie = Cookie::build(THEME_COOKIE, theme.to_string())
        .path("/")
        .finish();

    let mut response = redirect("/");
    if let Err(e) = response.add_cookie(&cookie) {
        log::error!("Failed to set theme cookie: {e}");
    }
    response
}

#[get("/na")]
pub async fn not_assigned(
    req: HttpRequest,
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, Some(&user), "home", &resolve_theme(&req));
    render_template(&tera, "main/not_assigned.html", &context)
}

/// Catch-all for unknown paths.
pub async fn not_found(
    req: HttpRequest,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, None, "home", &resolve_theme(&req));
    match tera.render("main/not_found.html", &context) {
        Ok(html) => HttpResponse::NotFound().content_type("text/html").body(html),
        Err(e) => {
            log::error!("Failed to render 404 template: {e}");
            HttpResponse::NotFound().finish()
        }
    }
}
