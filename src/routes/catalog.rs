//! Back-office CRUD for the public catalog: projects, service items,
//! testimonials and FAQ entries.

use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;
use validator::Validate;

use crate::SERVICE_ADMIN_ROLE;
use crate::forms::catalog::{
    SaveFaqItemForm, SaveProjectForm, SaveServiceItemForm, SaveTestimonialForm,
};
use crate::models::auth::AuthenticatedUser;
use crate::models::zmq::ChangeOp;
use crate::pagination::Paginated;
use crate::repository::{
    DieselRepository, FaqReader, FaqWriter, ProjectListQuery, ProjectReader, ProjectWriter,
    ServiceItemReader, ServiceItemWriter, TestimonialReader, TestimonialWriter,
};
use crate::routes::{
    DEFAULT_ITEMS_PER_PAGE, base_context, ensure_access, ensure_role, notify_change, redirect,
    render_template, resolve_theme,
};
use crate::zmq::ZmqSenders;

#[derive(Deserialize)]
pub struct ProjectsQueryParams {
    q: Option<String>,
    page: Option<usize>,
}

#[get("/admin/projects")]
pub async fn projects(
    req: HttpRequest,
    params: web::Query<ProjectsQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_access(&user) {
        return response;
    }

    let page = params.page.unwrap_or(1);
    let q = params.q.as_deref().unwrap_or("").trim();

    let mut query = ProjectListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if !q.is_empty() {
        query = query.search(q);
    }

    let projects = match repo.list_projects(query) {
        Ok((total, items)) => {
            Paginated::new(items, page, total.div_ceil(DEFAULT_ITEMS_PER_PAGE))
        }
        Err(e) => {
            log::error!("Failed to list projects: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, Some(&user), "projects", &resolve_theme(&req));
    context.insert("projects", &projects);
    if !q.is_empty() {
        context.insert("search_query", q);
    }

    render_template(&tera, "admin/projects.html", &context)
}

#[post("/admin/projects/save")]
pub async fn save_project(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
    web::Form(form): web::Form<SaveProjectForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    if let Err(e) = form.validate() {
        log::error!("Failed to validate project form: {e}");
        FlashMessage::error("Please fill in title and summary.").send();
        return redirect("/admin/projects");
    }

    let payload = form.to_new_project();
    let result = match form.id {
        Some(id) => repo.update_project(id, &payload).map(|p| (p, ChangeOp::Updated)),
        None => repo.create_project(&payload).map(|p| (p, ChangeOp::Created)),
    };

    match result {
        Ok((project, op)) => {
            notify_change(&senders, "projects", project.id, op);
            FlashMessage::success("Project saved.").send();
        }
        Err(e) => {
            log::error!("Failed to save project: {e}");
            FlashMessage::error("Could not save the project.").send();
        }
    }

    redirect("/admin/projects")
}

#[post("/admin/projects/{id}/delete")]
pub async fn delete_project(
    project_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let id = project_id.into_inner();
    match repo.delete_project(id) {
        Ok(()) => {
            notify_change(&senders, "projects", id, ChangeOp::Deleted);
            FlashMessage::success("Project deleted.").send();
        }
        Err(e) => {
            log::error!("Failed to delete project: {e}");
            FlashMessage::error("Could not delete the project.").send();
        }
    }

    redirect("/admin/projects")
}

#[post("/admin/projects/{id}/toggle")]
pub async fn toggle_project(
    project_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let id = project_id.into_inner();
    let project = match repo.get_project_by_id(id) {
        Ok(Some(project)) => project,
        Ok(None) => {
            FlashMessage::error("Project not found.").send();
            return redirect("/admin/projects");
        }
        Err(e) => {
            log::error!("Failed to load project: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    match repo.set_project_active(id, !project.active) {
        Ok(project) => {
            notify_change(&senders, "projects", project.id, ChangeOp::Updated);
            FlashMessage::success(if project.active {
                "Project is now visible."
            } else {
                "Project is now hidden."
            })
            .send();
        }
        Err(e) => {
            log::error!("Failed to toggle project: {e}");
            FlashMessage::error("Could not update the project.").send();
        }
    }

    redirect("/admin/projects")
}

#[get("/admin/services")]
pub async fn service_items(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_access(&user) {
        return response;
    }

    let services = match repo.list_service_items(false) {
        Ok(items) => items,
        Err(e) => {
            log::error!("Failed to list service items: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, Some(&user), "services", &resolve_theme(&req));
    context.insert("services", &services);

    render_template(&tera, "admin/services.html", &context)
}

#[post("/admin/services/save")]
pub async fn save_service_item(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
    web::Form(form): web::Form<SaveServiceItemForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    if let Err(e) = form.validate() {
        log::error!("Failed to validate service form: {e}");
        FlashMessage::error("Please fill in title and summary.").send();
        return redirect("/admin/services");
    }

    let payload = form.to_new_service_item();
    let result = match form.id {
        Some(id) => repo
            .update_service_item(id, &payload)
            .map(|s| (s, ChangeOp::Updated)),
        None => repo
            .create_service_item(&payload)
            .map(|s| (s, ChangeOp::Created)),
    };

    match result {
        Ok((service, op)) => {
            notify_change(&senders, "service_items", service.id, op);
            FlashMessage::success("Service saved.").send();
        }
        Err(e) => {
            log::error!("Failed to save service item: {e}");
            FlashMessage::error("Could not save the service.").send();
        }
    }

    redirect("/admin/services")
}

#[post("/admin/services/{id}/delete")]
pub async fn delete_service_item(
    service_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let id = service_id.into_inner();
    match repo.delete_service_item(id) {
        Ok(()) => {
            notify_change(&senders, "service_items", id, ChangeOp::Deleted);
            FlashMessage::success("Service deleted.").send();
        }
        Err(e) => {
            log::error!("Failed to delete service item: {e}");
            FlashMessage::error("Could not delete the service.").send();
        }
    }

    redirect("/admin/services")
}

#[post("/admin/services/{id}/toggle")]
pub async fn toggle_service_item(
    service_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let id = service_id.into_inner();
    let service = match repo.get_service_item_by_id(id) {
        Ok(Some(service)) => service,
        Ok(None) => {
            FlashMessage::error("Service not found.").send();
            return redirect("/admin/services");
        }
        Err(e) => {
            log::error!("Failed to load service item: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    match repo.set_service_item_active(id, !service.active) {
        Ok(service) => {
            notify_change(&senders, "service_items", service.id, ChangeOp::Updated);
            FlashMessage::success("Service updated.").send();
        }
        Err(e) => {
            log::error!("Failed to toggle service item: {e}");
            FlashMessage::error("Could not update the service.").send();
        }
    }

    redirect("/admin/services")
}

#[get("/admin/testimonials")]
pub async fn testimonials(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_access(&user) {
        return response;
    }

    let testimonials = match repo.list_testimonials(false) {
        Ok(items) => items,
        Err(e) => {
            log::error!("Failed to list testimonials: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context =
        base_context(&flash_messages, Some(&user), "testimonials", &resolve_theme(&req));
    context.insert("testimonials", &testimonials);

    render_template(&tera, "admin/testimonials.html", &context)
}

#[post("/admin/testimonials/save")]
pub async fn save_testimonial(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
    web::Form(form): web::Form<SaveTestimonialForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    if let Err(e) = form.validate() {
        log::error!("Failed to validate testimonial form: {e}");
        FlashMessage::error("Please fill in author and quote.").send();
        return redirect("/admin/testimonials");
    }

    let payload = form.to_new_testimonial();
    let result = match form.id {
        Some(id) => repo
            .update_testimonial(id, &payload)
            .map(|t| (t, ChangeOp::Updated)),
        None => repo
            .create_testimonial(&payload)
            .map(|t| (t, ChangeOp::Created)),
    };

    match result {
        Ok((testimonial, op)) => {
            notify_change(&senders, "testimonials", testimonial.id, op);
            FlashMessage::success("Testimonial saved.").send();
        }
        Err(e) => {
            log::error!("Failed to save testimonial: {e}");
            FlashMessage::error("Could not save the testimonial.").send();
        }
    }

    redirect("/admin/testimonials")
}

#[post("/admin/testimonials/{id}/delete")]
pub async fn delete_testimonial(
    testimonial_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let id = testimonial_id.into_inner();
    match repo.delete_testimonial(id) {
        Ok(()) => {
            notify_change(&senders, "testimonials", id, ChangeOp::Deleted);
            FlashMessage::success("Testimonial deleted.").send();
        }
        Err(e) => {
            log::error!("Failed to delete testimonial: {e}");
            FlashMessage::error("Could not delete the testimonial.").send();
        }
    }

    redirect("/admin/testimonials")
}

#[get("/admin/faq")]
pub async fn faq_items(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_access(&user) {
        return response;
    }

    let faq_items = match repo.list_faq_items(false) {
        Ok(items) => items,
        Err(e) => {
            log::error!("Failed to list FAQ items: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, Some(&user), "faq", &resolve_theme(&req));
    context.insert("faq_items", &faq_items);

    render_template(&tera, "admin/faq.html", &context)
}

#[post("/admin/faq/save")]
pub async fn save_faq_item(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
    web::Form(form): web::Form<SaveFaqItemForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    if let Err(e) = form.validate() {
        log::error!("Failed to validate FAQ form: {e}");
        FlashMessage::error("Please fill in question and answer.").send();
        return redirect("/admin/faq");
    }

    let payload = form.to_new_faq_item();
    let result = match form.id {
        Some(id) => repo
            .update_faq_item(id, &payload)
            .map(|f| (f, ChangeOp::Updated)),
        None => repo
            .create_faq_item(&payload)
            .map(|f| (f, ChangeOp::Created)),
    };

    match result {
        Ok((item, op)) => {
            notify_change(&senders, "faq_items", item.id, op);
            FlashMessage::success("FAQ entry saved.").send();
        }
        Err(e) => {
            log::error!("Failed to save FAQ item: {e}");
            FlashMessage::error("Could not save the FAQ entry.").send();
        }
    }

    redirect("/admin/faq")
}

#[post("/admin/faq/{id}/delete")]
pub async fn delete_faq_item(
    faq_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let id = faq_id.into_inner();
    match repo.delete_faq_item(id) {
        Ok(()) => {
            notify_change(&senders, "faq_items", id, ChangeOp::Deleted);
            FlashMessage::success("FAQ entry deleted.").send();
        }
        Err(e) => {
            log::error!("Failed to delete FAQ item: {e}");
            FlashMessage::error("Could not delete the FAQ entry.").send();
        }
    }

    redirect("/admin/faq")
}
