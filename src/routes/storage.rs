//! Uploaded files and database snapshots.

use std::path::Path;

use actix_multipart::form::MultipartForm;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde_json::json;
use tera::Tera;
use uuid::Uuid;

use crate::SERVICE_ADMIN_ROLE;
use crate::domain::storage::{NewBackup, NewStoredFile};
use crate::domain::system_log::NewSystemLog;
use crate::forms::storage::{CreateBackupForm, UploadFileForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::models::zmq::ChangeOp;
use crate::repository::{
    BackupReader, BackupWriter, DieselRepository, FaqReader, PageContentReader, ProjectListQuery,
    ProjectReader, ServiceItemReader, SettingReader, StoredFileReader, StoredFileWriter,
    SystemLogWriter, TestimonialReader,
};
use crate::routes::{
    base_context, ensure_access, ensure_role, notify_change, redirect, render_template,
    resolve_theme,
};
use crate::zmq::ZmqSenders;

#[get("/admin/files")]
pub async fn files(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_access(&user) {
        return response;
    }

    let files = match repo.list_files() {
        Ok(items) => items,
        Err(e) => {
            log::error!("Failed to list files: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, Some(&user), "files", &resolve_theme(&req));
    context.insert("files", &files);

    render_template(&tera, "admin/files.html", &context)
}

#[post("/admin/files/upload")]
pub async fn upload_file(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
    server_config: web::Data<ServerConfig>,
    MultipartForm(form): MultipartForm<UploadFileForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let original_name = form
        .file
        .file_name
        .clone()
        .unwrap_or_else(|| "upload".to_string());
    let content_type = form
        .file
        .content_type
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string());
    let size_bytes = form.file.size as i64;

    // uploads get a fresh name on disk; the original one stays in the record
    let stored_name = format!("{}-{}", Uuid::new_v4(), original_name.replace('/', "_"));
    let target = Path::new(&server_config.upload_dir).join(&stored_name);

    if let Err(e) = std::fs::create_dir_all(&server_config.upload_dir) {
        log::error!("Failed to create upload dir: {e}");
        return HttpResponse::InternalServerError().finish();
    }
    if let Err(e) = std::fs::copy(form.file.file.path(), &target) {
        log::error!("Failed to persist upload: {e}");
        FlashMessage::error("Could not store the file.").send();
        return redirect("/admin/files");
    }

    let new_file = NewStoredFile {
        name: original_name,
        path: target.to_string_lossy().to_string(),
        content_type,
        size_bytes,
    };

    match repo.create_file(&new_file) {
        Ok(file) => {
            notify_change(&senders, "stored_files", file.id, ChangeOp::Created);
            FlashMessage::success("File uploaded.").send();
        }
        Err(e) => {
            log::error!("Failed to record upload: {e}");
            FlashMessage::error("Could not store the file.").send();
        }
    }

    redirect("/admin/files")
}

#[post("/admin/files/{id}/delete")]
pub async fn delete_file(
    file_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let id = file_id.into_inner();
    let file = match repo.get_file_by_id(id) {
        Ok(Some(file)) => file,
        Ok(None) => {
            FlashMessage::error("File not found.").send();
            return redirect("/admin/files");
        }
        Err(e) => {
            log::error!("Failed to load file: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    if let Err(e) = std::fs::remove_file(&file.path) {
        // the record still goes; a missing file on disk is not fatal
        log::warn!("Failed to remove file {}: {e}", file.path);
    }

    match repo.delete_file(id) {
        Ok(()) => {
            notify_change(&senders, "stored_files", id, ChangeOp::Deleted);
            FlashMessage::success("File deleted.").send();
        }
        Err(e) => {
            log::error!("Failed to delete file record: {e}");
            FlashMessage::error("Could not delete the file.").send();
        }
    }

    redirect("/admin/files")
}

#[get("/admin/backups")]
pub async fn backups(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_access(&user) {
        return response;
    }

    let backups = match repo.list_backups() {
        Ok(items) => items,
        Err(e) => {
            log::error!("Failed to list backups: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, Some(&user), "backups", &resolve_theme(&req));
    context.insert("backups", &backups);

    render_template(&tera, "admin/backups.html", &context)
}

#[post("/admin/backups/create")]
pub async fn create_backup(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<CreateBackupForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    // snapshot of the editable content tables
    let snapshot = (|| -> Result<serde_json::Value, crate::repository::errors::RepositoryError> {
        Ok(json!({
            "projects": repo.list_projects(ProjectListQuery::new())?.1,
            "service_items": repo.list_service_items(false)?,
            "testimonials": repo.list_testimonials(false)?,
            "faq_items": repo.list_faq_items(false)?,
            "page_contents": repo.list_page_contents(None)?,
            "site_settings": repo.list_settings()?,
        }))
    })();

    let snapshot = match snapshot {
        Ok(snapshot) => snapshot,
        Err(e) => {
            log::error!("Failed to collect backup snapshot: {e}");
            FlashMessage::error("Backup failed.").send();
            return redirect("/admin/backups");
        }
    };

    let bytes = match serde_json::to_vec_pretty(&snapshot) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::error!("Failed to serialize backup: {e}");
            FlashMessage::error("Backup failed.").send();
            return redirect("/admin/backups");
        }
    };

    let file_name = format!("backup-{}.json", Uuid::new_v4());
    let target = Path::new(&server_config.backup_dir).join(&file_name);

    if let Err(e) = std::fs::create_dir_all(&server_config.backup_dir)
        .and_then(|()| std::fs::write(&target, &bytes))
    {
        log::error!("Failed to write backup file: {e}");
        FlashMessage::error("Backup failed.").send();
        return redirect("/admin/backups");
    }

    let new_backup = NewBackup {
        file_name,
        size_bytes: bytes.len() as i64,
        note: form.note.filter(|n| !n.trim().is_empty()),
    };

    match repo.create_backup(&new_backup) {
        Ok(backup) => {
            notify_change(&senders, "backups", backup.id, ChangeOp::Created);
            if let Err(e) = repo.create_system_log(&NewSystemLog::info(
                "backup created",
                Some(json!({ "backup_id": backup.id, "file": backup.file_name })),
            )) {
                log::error!("Failed to record backup in system log: {e}");
            }
            FlashMessage::success("Backup created.").send();
        }
        Err(e) => {
            log::error!("Failed to record backup: {e}");
            FlashMessage::error("Backup failed.").send();
        }
    }

    redirect("/admin/backups")
}

#[post("/admin/backups/{id}/delete")]
pub async fn delete_backup(
    backup_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let id = backup_id.into_inner();
    let backup = match repo.get_backup_by_id(id) {
        Ok(Some(backup)) => backup,
        Ok(None) => {
            FlashMessage::error("Backup not found.").send();
            return redirect("/admin/backups");
        }
        Err(e) => {
            log::error!("Failed to load backup: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let path = Path::new(&server_config.backup_dir).join(&backup.file_name);
    if let Err(e) = std::fs::remove_file(&path) {
        log::warn!("Failed to remove backup file {}: {e}", path.display());
    }

    match repo.delete_backup(id) {
        Ok(()) => {
            notify_change(&senders, "backups", id, ChangeOp::Deleted);
            FlashMessage::success("Backup deleted.").send();
        }
        Err(e) => {
            log::error!("Failed to delete backup: {e}");
            FlashMessage::error("Could not delete the backup.").send();
        }
    }

    redirect("/admin/backups")
}
