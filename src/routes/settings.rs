//! Site settings, page content and user role management.

use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;
use validator::Validate;

use crate::SERVICE_ADMIN_ROLE;
use crate::domain::content::NewPageContent;
use crate::forms::settings::{AssignRolesForm, PageContentForm, SettingsForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::zmq::ChangeOp;
use crate::repository::{
    DieselRepository, PageContentReader, PageContentWriter, SettingReader, SettingWriter,
    UserReader, UserWriter,
};
use crate::routes::{
    base_context, ensure_role, notify_change, redirect, render_template, resolve_theme,
};
use crate::zmq::ZmqSenders;

#[get("/settings")]
pub async fn settings(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let settings = match repo.list_settings() {
        Ok(items) => items,
        Err(e) => {
            log::error!("Failed to list settings: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, Some(&user), "settings", &resolve_theme(&req));
    context.insert("settings", &settings);

    render_template(&tera, "settings/index.html", &context)
}

#[post("/settings")]
pub async fn save_settings(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SettingsForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    if let Err(e) = form.validate() {
        log::error!("Failed to validate settings form: {e}");
        FlashMessage::error("Please fill in site name and a valid contact email.").send();
        return redirect("/settings");
    }

    let default_theme = if form.default_theme == "dark" {
        "dark"
    } else {
        "light"
    };

    let entries = [
        ("site_name", form.site_name.as_str()),
        ("tagline", form.tagline.as_str()),
        ("contact_email", form.contact_email.as_str()),
        ("default_theme", default_theme),
    ];

    for (key, value) in entries {
        if let Err(e) = repo.set_setting(key, value) {
            log::error!("Failed to save setting {key}: {e}");
            FlashMessage::error("Could not save the settings.").send();
            return redirect("/settings");
        }
    }

    FlashMessage::success("Settings saved.").send();
    redirect("/settings")
}

#[get("/admin/content")]
pub async fn page_contents(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let contents = match repo.list_page_contents(None) {
        Ok(items) => items,
        Err(e) => {
            log::error!("Failed to list page contents: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, Some(&user), "content", &resolve_theme(&req));
    context.insert("contents", &contents);

    render_template(&tera, "admin/content.html", &context)
}

#[post("/admin/content/save")]
pub async fn save_page_content(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
    web::Form(form): web::Form<PageContentForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    if let Err(e) = form.validate() {
        log::error!("Failed to validate page content form: {e}");
        FlashMessage::error("Please fill in page and section.").send();
        return redirect("/admin/content");
    }

    let content = NewPageContent::new(
        form.page.clone(),
        form.section.clone(),
        ammonia::clean(&form.body),
    );

    match repo.upsert_page_content(&content) {
        Ok(_) => {
            notify_change(&senders, "page_contents", 0, ChangeOp::Updated);
            FlashMessage::success("Content saved.").send();
        }
        Err(e) => {
            log::error!("Failed to save page content: {e}");
            FlashMessage::error("Could not save the content.").send();
        }
    }

    redirect("/admin/content")
}

#[post("/admin/content/delete")]
pub async fn delete_page_content(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
    web::Form(form): web::Form<PageContentForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    match repo.delete_page_content(&form.page, &form.section) {
        Ok(()) => {
            notify_change(&senders, "page_contents", 0, ChangeOp::Deleted);
            FlashMessage::success("Content deleted.").send();
        }
        Err(e) => {
            log::error!("Failed to delete page content: {e}");
            FlashMessage::error("Could not delete the content.").send();
        }
    }

    redirect("/admin/content")
}

#[get("/admin/users")]
pub async fn users(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let users = match repo.list_users_with_roles() {
        Ok(items) => items,
        Err(e) => {
            log::error!("Failed to list users: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, Some(&user), "users", &resolve_theme(&req));
    context.insert("users", &users);
    context.insert("available_roles", &["admin", "staff"]);

    render_template(&tera, "admin/users.html", &context)
}

#[post("/admin/users/roles")]
pub async fn assign_roles(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    body: String,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    // checkbox groups need serde_html_form to collect repeated fields
    let form: AssignRolesForm = match serde_html_form::from_str(&body) {
        Ok(form) => form,
        Err(e) => {
            log::error!("Failed to parse roles form: {e}");
            FlashMessage::error("Invalid role selection.").send();
            return redirect("/admin/users");
        }
    };

    match repo.set_user_roles(form.user_id, &form.roles) {
        Ok(_) => {
            FlashMessage::success(
                "Roles updated. They take effect at the user's next sign-in.",
            )
            .send();
        }
        Err(e) => {
            log::error!("Failed to set user roles: {e}");
            FlashMessage::error("Could not update the roles.").send();
        }
    }

    redirect("/admin/users")
}
