//! Internal tasks and per-user notes.

use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;
use validator::Validate;

use crate::forms::tasks::{SaveNoteForm, SaveTaskForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::zmq::ChangeOp;
use crate::repository::{
    DieselRepository, NoteReader, NoteWriter, TaskReader, TaskWriter,
};
use crate::routes::{
    base_context, ensure_access, notify_change, redirect, render_template, resolve_theme,
};
use crate::zmq::ZmqSenders;

#[derive(Deserialize)]
pub struct TasksQueryParams {
    status: Option<String>,
}

#[get("/admin/tasks")]
pub async fn tasks(
    req: HttpRequest,
    params: web::Query<TasksQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_access(&user) {
        return response;
    }

    let status_filter = params
        .status
        .as_deref()
        .filter(|s| ["open", "doing", "done"].contains(s));

    let tasks = match repo.list_tasks(status_filter.map(Into::into)) {
        Ok(items) => items,
        Err(e) => {
            log::error!("Failed to list tasks: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, Some(&user), "tasks", &resolve_theme(&req));
    context.insert("tasks", &tasks);
    context.insert("status_filter", &status_filter);

    render_template(&tera, "admin/tasks.html", &context)
}

#[post("/admin/tasks/save")]
pub async fn save_task(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
    web::Form(form): web::Form<SaveTaskForm>,
) -> impl Responder {
    if let Err(response) = ensure_access(&user) {
        return response;
    }

    if let Err(e) = form.validate() {
        log::error!("Failed to validate task form: {e}");
        FlashMessage::error("Please give the task a title.").send();
        return redirect("/admin/tasks");
    }

    let payload = form.to_new_task();
    let result = match form.id {
        Some(id) => repo.update_task(id, &payload).map(|t| (t, ChangeOp::Updated)),
        None => repo.create_task(&payload).map(|t| (t, ChangeOp::Created)),
    };

    match result {
        Ok((task, op)) => {
            notify_change(&senders, "tasks", task.id, op);
            FlashMessage::success("Task saved.").send();
        }
        Err(e) => {
            log::error!("Failed to save task: {e}");
            FlashMessage::error("Could not save the task.").send();
        }
    }

    redirect("/admin/tasks")
}

#[post("/admin/tasks/{id}/cycle")]
pub async fn cycle_task(
    task_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
) -> impl Responder {
    if let Err(response) = ensure_access(&user) {
        return response;
    }

    let id = task_id.into_inner();
    let task = match repo.get_task_by_id(id) {
        Ok(Some(task)) => task,
        Ok(None) => {
            FlashMessage::error("Task not found.").send();
            return redirect("/admin/tasks");
        }
        Err(e) => {
            log::error!("Failed to load task: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    match repo.set_task_status(id, task.status.cycled()) {
        Ok(task) => notify_change(&senders, "tasks", task.id, ChangeOp::Updated),
        Err(e) => {
            log::error!("Failed to cycle task status: {e}");
            FlashMessage::error("Could not update the task.").send();
        }
    }

    redirect("/admin/tasks")
}

#[post("/admin/tasks/{id}/delete")]
pub async fn delete_task(
    task_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
) -> impl Responder {
    if let Err(response) = ensure_access(&user) {
        return response;
    }

    let id = task_id.into_inner();
    match repo.delete_task(id) {
        Ok(()) => {
            notify_change(&senders, "tasks", id, ChangeOp::Deleted);
            FlashMessage::success("Task deleted.").send();
        }
        Err(e) => {
            log::error!("Failed to delete task: {e}");
            FlashMessage::error("Could not delete the task.").send();
        }
    }

    redirect("/admin/tasks")
}

#[get("/admin/notes")]
pub async fn notes(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_access(&user) {
        return response;
    }

    let Some(user_id) = user.user_id() else {
        return redirect("/auth/signin");
    };

    // notes are private to their author
    let notes = match repo.list_notes(user_id) {
        Ok(items) => items,
        Err(e) => {
            log::error!("Failed to list notes: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, Some(&user), "notes", &resolve_theme(&req));
    context.insert("notes", &notes);

    render_template(&tera, "admin/notes.html", &context)
}

#[post("/admin/notes/save")]
pub async fn save_note(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveNoteForm>,
) -> impl Responder {
    if let Err(response) = ensure_access(&user) {
        return response;
    }

    if let Err(e) = form.validate() {
        log::error!("Failed to validate note form: {e}");
        FlashMessage::error("Please give the note a title.").send();
        return redirect("/admin/notes");
    }

    let Some(user_id) = user.user_id() else {
        return redirect("/auth/signin");
    };

    let result = match form.id {
        Some(id) => match repo.get_note_by_id(id) {
            Ok(Some(note)) if note.user_id == user_id => {
                repo.update_note(id, form.title.trim(), &form.body)
            }
            Ok(_) => {
                FlashMessage::error("Note not found.").send();
                return redirect("/admin/notes");
            }
            Err(e) => {
                log::error!("Failed to load note: {e}");
                return HttpResponse::InternalServerError().finish();
            }
        },
        None => repo.create_note(&form.to_new_note(user_id)),
    };

    match result {
        Ok(_) => FlashMessage::success("Note saved.").send(),
        Err(e) => {
            log::error!("Failed to save note: {e}");
            FlashMessage::error("Could not save the note.").send();
        }
    }

    redirect("/admin/notes")
}

#[post("/admin/notes/{id}/delete")]
pub async fn delete_note(
    note_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_access(&user) {
        return response;
    }

    let Some(user_id) = user.user_id() else {
        return redirect("/auth/signin");
    };

    let id = note_id.into_inner();
    match repo.get_note_by_id(id) {
        Ok(Some(note)) if note.user_id == user_id => match repo.delete_note(id) {
            Ok(()) => FlashMessage::success("Note deleted.").send(),
            Err(e) => {
                log::error!("Failed to delete note: {e}");
                FlashMessage::error("Could not delete the note.").send();
            }
        },
        Ok(_) => FlashMessage::error("Note not found.").send(),
        Err(e) => {
            log::error!("Failed to load note: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    }

    redirect("/admin/notes")
}
