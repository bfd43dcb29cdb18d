use actix_cors::Cors;
use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::middleware::{Compress, Logger};
use actix_web::{App, HttpServer, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::db::establish_connection_pool;
use crate::middleware::RedirectUnauthorized;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::admin::{clear_logs, dashboard, logs};
use crate::routes::api::api_v1_projects;
use crate::routes::auth::{
    change_password, logout, profile, signin, signin_page, signup, signup_page, update_profile,
};
use crate::routes::billing::{
    delete_invoice, delete_transaction, invoices, mark_invoice_paid, save_invoice,
    save_transaction, transactions,
};
use crate::routes::catalog::{
    delete_faq_item, delete_project, delete_service_item, delete_testimonial, faq_items, projects,
    save_faq_item, save_project, save_service_item, save_testimonial, service_items,
    testimonials, toggle_project, toggle_service_item,
};
use crate::routes::main::{
    datenschutz, impressum, index, not_assigned, not_found, set_theme, show_project,
    show_service, submit_contact, subscribe, unsubscribe,
};
use crate::routes::messages::{delete_message, mark_message_read, messages};
use crate::routes::newsletter::{
    delete_campaign, delete_subscriber, export_subscribers, newsletter, save_campaign,
    send_campaign, upload_subscribers,
};
use crate::routes::settings::{
    assign_roles, delete_page_content, page_contents, save_page_content, save_settings, settings,
    users,
};
use crate::routes::storage::{
    backups, create_backup, delete_backup, delete_file, files, upload_file,
};
use crate::routes::tasks::{
    cycle_task, delete_note, delete_task, notes, save_note, save_task, tasks,
};
use crate::zmq::{ZmqSender, ZmqSenderOptions, ZmqSenders};

pub mod db;
pub mod defaults;
pub mod domain;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;
pub mod zmq;

pub const SERVICE_ACCESS_ROLE: &str = "staff";
pub const SERVICE_ADMIN_ROLE: &str = "admin";

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Background ZeroMQ publishers: outbound email and row-change events.
    let email_sender = ZmqSender::start(ZmqSenderOptions::pub_default(
        &server_config.zmq_email_pub,
    ))
    .map_err(|e| std::io::Error::other(format!("Failed to start email publisher: {e}")))?;
    let events_sender = ZmqSender::start(ZmqSenderOptions::pub_default(
        &server_config.zmq_events_pub,
    ))
    .map_err(|e| std::io::Error::other(format!("Failed to start event publisher: {e}")))?;

    let senders = web::Data::new(ZmqSenders {
        email: email_sender,
        events: events_sender,
    });

    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    // Keys and stores for identity, sessions, and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(Compress::default())
            .wrap(Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(index)
            .service(show_project)
            .service(show_service)
            .service(impressum)
            .service(datenschutz)
            .service(submit_contact)
            .service(subscribe)
            .service(unsubscribe)
            .service(set_theme)
            .service(not_assigned)
            .service(signin_page)
            .service(signin)
            .service(signup_page)
            .service(signup)
            .service(web::scope("/api").service(api_v1_projects))
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .service(dashboard)
                    .service(logs)
                    .service(clear_logs)
                    .service(projects)
                    .service(save_project)
                    .service(delete_project)
                    .service(toggle_project)
                    .service(service_items)
                    .service(save_service_item)
                    .service(delete_service_item)
                    .service(toggle_service_item)
                    .service(testimonials)
                    .service(save_testimonial)
                    .service(delete_testimonial)
                    .service(faq_items)
                    .service(save_faq_item)
                    .service(delete_faq_item)
                    .service(messages)
                    .service(mark_message_read)
                    .service(delete_message)
                    .service(invoices)
                    .service(save_invoice)
                    .service(mark_invoice_paid)
                    .service(delete_invoice)
                    .service(transactions)
                    .service(save_transaction)
                    .service(delete_transaction)
                    .service(tasks)
                    .service(save_task)
                    .service(cycle_task)
                    .service(delete_task)
                    .service(notes)
                    .service(save_note)
                    .service(delete_note)
                    .service(newsletter)
                    .service(upload_subscribers)
                    .service(export_subscribers)
                    .service(delete_subscriber)
                    .service(save_campaign)
                    .service(delete_campaign)
                    .service(send_campaign)
                    .service(files)
                    .service(upload_file)
                    .service(delete_file)
                    .service(backups)
                    .service(create_backup)
                    .service(delete_backup)
                    .service(settings)
                    .service(save_settings)
                    .service(page_contents)
                    .service(save_page_content)
                    .service(delete_page_content)
                    .service(users)
                    .service(assign_roles)
                    .service(profile)
                    .service(update_profile)
                    .service(change_password)
                    .service(logout),
            )
            .default_service(web::to(not_found))
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
            .app_data(senders.clone())
    })
    .bind(bind_address)?
    .run()
    .await
}
