use chrono::NaiveDate;

use brandwerk_site::domain::billing::{InvoiceStatus, NewInvoice, NewTransaction, TransactionKind};
use brandwerk_site::domain::contact::NewContactMessage;
use brandwerk_site::domain::content::NewPageContent;
use brandwerk_site::domain::faq::NewFaqItem;
use brandwerk_site::domain::newsletter::{NewCampaign, NewSubscriber};
use brandwerk_site::domain::note::NewNote;
use brandwerk_site::domain::project::NewProject;
use brandwerk_site::domain::system_log::NewSystemLog;
use brandwerk_site::domain::task::{NewTask, TaskStatus};
use brandwerk_site::domain::user::NewUser;
use brandwerk_site::repository::{
    BackupReader, CampaignReader, CampaignWriter, ContactMessageReader, ContactMessageWriter,
    DieselRepository, FaqReader, FaqWriter, InvoiceListQuery, InvoiceReader, InvoiceWriter,
    LogListQuery, MessageListQuery, NoteReader, NoteWriter, PageContentReader, PageContentWriter,
    ProjectListQuery, ProjectReader, ProjectWriter, SettingReader, SettingWriter,
    SubscriberListQuery, SubscriberReader, SubscriberWriter, SummaryReader, SystemLogReader,
    SystemLogWriter, TaskReader, TaskWriter, TransactionListQuery, TransactionReader,
    TransactionWriter, UserReader, UserWriter,
};

mod common;

fn sample_project(title: &str, active: bool) -> NewProject {
    NewProject::new(
        title.to_string(),
        format!("{title} summary"),
        "description".to_string(),
        None,
        active,
        0,
    )
}

#[test]
fn test_project_repository_crud() {
    let test_db = common::TestDb::new("test_project_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let visible = repo.create_project(&sample_project("Visible", true)).unwrap();
    let hidden = repo.create_project(&sample_project("Hidden", false)).unwrap();

    let (total, all) = repo.list_projects(ProjectListQuery::new()).unwrap();
    assert_eq!(total, 2);
    assert_eq!(all.len(), 2);

    let (active_total, active) = repo
        .list_projects(ProjectListQuery::new().active_only())
        .unwrap();
    assert_eq!(active_total, 1);
    assert_eq!(active[0].id, visible.id);

    let (search_total, found) = repo
        .list_projects(ProjectListQuery::new().search("Hidd"))
        .unwrap();
    assert_eq!(search_total, 1);
    assert_eq!(found[0].id, hidden.id);

    // toggling shows up in the public query
    repo.set_project_active(hidden.id, true).unwrap();
    let (active_total, _) = repo
        .list_projects(ProjectListQuery::new().active_only())
        .unwrap();
    assert_eq!(active_total, 2);

    let mut updates = sample_project("Renamed", true);
    updates.sort_order = 5;
    let updated = repo.update_project(visible.id, &updates).unwrap();
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.sort_order, 5);

    repo.delete_project(visible.id).unwrap();
    assert!(repo.get_project_by_id(visible.id).unwrap().is_none());
}

#[test]
fn test_faq_repository_crud() {
    let test_db = common::TestDb::new("test_faq_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let item = repo
        .create_faq_item(&NewFaqItem::new(
            "How long?".to_string(),
            "Six weeks.".to_string(),
            true,
            0,
        ))
        .unwrap();

    let updated = repo
        .update_faq_item(
            item.id,
            &NewFaqItem::new("How long?".to_string(), "Ten weeks.".to_string(), false, 1),
        )
        .unwrap();
    assert_eq!(updated.answer, "Ten weeks.");

    assert!(repo.list_faq_items(true).unwrap().is_empty());
    assert_eq!(repo.list_faq_items(false).unwrap().len(), 1);

    repo.delete_faq_item(item.id).unwrap();
    assert!(repo.get_faq_item_by_id(item.id).unwrap().is_none());
}

#[test]
fn test_user_repository_roles() {
    let test_db = common::TestDb::new("test_user_repository_roles.db");
    let repo = DieselRepository::new(test_db.pool());

    assert_eq!(repo.count_users().unwrap(), 0);

    let user = repo
        .create_user(&NewUser::new(
            "Jane".to_string(),
            "Jane@Example.com ".to_string(),
            "hash".to_string(),
        ))
        .unwrap();
    assert_eq!(user.email, "jane@example.com");
    assert_eq!(repo.count_users().unwrap(), 1);

    repo.assign_role(user.id, "admin").unwrap();
    // assigning twice is a no-op
    repo.assign_role(user.id, "admin").unwrap();
    assert_eq!(repo.list_user_roles(user.id).unwrap(), vec!["admin"]);

    repo.set_user_roles(user.id, &["staff".to_string()]).unwrap();
    assert_eq!(repo.list_user_roles(user.id).unwrap(), vec!["staff"]);

    let users = repo.list_users_with_roles().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].1.len(), 1);
    assert_eq!(users[0].1[0].name, "staff");

    let renamed = repo.update_user_name(user.id, "Joan").unwrap();
    assert_eq!(renamed.name, "Joan");

    repo.update_user_password(user.id, "new-hash").unwrap();
    let reloaded = repo.get_user_by_id(user.id).unwrap().unwrap();
    assert_eq!(reloaded.password_hash, "new-hash");
}

#[test]
fn test_contact_message_repository() {
    let test_db = common::TestDb::new("test_contact_message_repository.db");
    let repo = DieselRepository::new(test_db.pool());

    let new_message = NewContactMessage::new(
        "Alice".to_string(),
        "alice@example.com".to_string(),
        None,
        Some("Website".to_string()),
        "We need a relaunch.".to_string(),
    )
    .unwrap();

    let message = repo.create_message(&new_message).unwrap();
    assert!(!message.is_read);

    let (unread_total, _) = repo
        .list_messages(MessageListQuery::new().unread_only())
        .unwrap();
    assert_eq!(unread_total, 1);

    let read = repo.mark_message_read(message.id).unwrap();
    assert!(read.is_read);

    let (unread_total, _) = repo
        .list_messages(MessageListQuery::new().unread_only())
        .unwrap();
    assert_eq!(unread_total, 0);

    repo.delete_message(message.id).unwrap();
    assert!(repo.get_message_by_id(message.id).unwrap().is_none());
}

#[test]
fn test_billing_repository() {
    let test_db = common::TestDb::new("test_billing_repository.db");
    let repo = DieselRepository::new(test_db.pool());

    let invoice = repo
        .create_invoice(&NewInvoice::new(
            "2026-001".to_string(),
            "Acme".to_string(),
            "billing@acme.test".to_string(),
            250_000,
            "eur".to_string(),
            InvoiceStatus::Sent,
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            None,
        ))
        .unwrap();
    assert_eq!(invoice.currency, "EUR");
    assert_eq!(invoice.status, InvoiceStatus::Sent);

    let (sent_total, _) = repo
        .list_invoices(InvoiceListQuery::new().status(InvoiceStatus::Sent))
        .unwrap();
    assert_eq!(sent_total, 1);

    let paid = repo.mark_invoice_paid(invoice.id).unwrap();
    assert_eq!(paid.status, InvoiceStatus::Paid);
    assert!(paid.paid_on.is_some());

    let tx = repo
        .create_transaction(&NewTransaction::new(
            TransactionKind::Income,
            "Invoice 2026-001".to_string(),
            250_000,
            "EUR".to_string(),
            NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            Some(invoice.id),
        ))
        .unwrap();

    let (income_total, _) = repo
        .list_transactions(TransactionListQuery::new().kind(TransactionKind::Income))
        .unwrap();
    assert_eq!(income_total, 1);

    // deleting the invoice keeps the booking but unlinks it
    repo.delete_invoice(invoice.id).unwrap();
    let orphan = repo.get_transaction_by_id(tx.id).unwrap().unwrap();
    assert_eq!(orphan.invoice_id, None);
}

#[test]
fn test_task_and_note_repository() {
    let test_db = common::TestDb::new("test_task_and_note_repository.db");
    let repo = DieselRepository::new(test_db.pool());

    let task = repo
        .create_task(&NewTask::new(
            "Ship the site".to_string(),
            None,
            TaskStatus::Open,
            None,
        ))
        .unwrap();

    let doing = repo
        .set_task_status(task.id, task.status.cycled())
        .unwrap();
    assert_eq!(doing.status, TaskStatus::Doing);

    assert_eq!(repo.list_tasks(Some(TaskStatus::Doing)).unwrap().len(), 1);
    assert!(repo.list_tasks(Some(TaskStatus::Done)).unwrap().is_empty());

    let user = repo
        .create_user(&NewUser::new(
            "Jane".to_string(),
            "jane@example.com".to_string(),
            "hash".to_string(),
        ))
        .unwrap();

    let note = repo
        .create_note(&NewNote::new(user.id, "Idea".to_string(), "text".to_string()))
        .unwrap();
    assert_eq!(repo.list_notes(user.id).unwrap().len(), 1);
    assert!(repo.list_notes(user.id + 1).unwrap().is_empty());

    let updated = repo.update_note(note.id, "Idea", "more text").unwrap();
    assert_eq!(updated.body, "more text");

    repo.delete_note(note.id).unwrap();
    assert!(repo.get_note_by_id(note.id).unwrap().is_none());
}

#[test]
fn test_subscriber_repository_upsert() {
    let test_db = common::TestDb::new("test_subscriber_repository_upsert.db");
    let repo = DieselRepository::new(test_db.pool());

    let first = repo
        .upsert_subscriber(
            &NewSubscriber::new("reader@example.com".to_string(), None, "token-1".to_string())
                .unwrap(),
        )
        .unwrap();
    assert!(first.subscribed);

    let gone = repo.set_subscribed(&first.token, false).unwrap();
    assert!(!gone.subscribed);

    // re-subscribing refreshes the token and flips the flag back
    let again = repo
        .upsert_subscriber(
            &NewSubscriber::new(
                "reader@example.com".to_string(),
                Some("Reader".to_string()),
                "token-2".to_string(),
            )
            .unwrap(),
        )
        .unwrap();
    assert_eq!(again.id, first.id);
    assert_eq!(again.token, "token-2");
    assert!(again.subscribed);

    let imported = repo
        .import_subscribers(&[
            NewSubscriber::new("reader@example.com".to_string(), None, "token-3".to_string())
                .unwrap(),
            NewSubscriber::new("new@example.com".to_string(), None, "token-4".to_string())
                .unwrap(),
        ])
        .unwrap();
    assert_eq!(imported, 1);

    let (total, _) = repo.list_subscribers(SubscriberListQuery::new()).unwrap();
    assert_eq!(total, 2);
    assert_eq!(repo.list_subscribed_emails().unwrap().len(), 2);
}

#[test]
fn test_campaign_repository() {
    let test_db = common::TestDb::new("test_campaign_repository.db");
    let repo = DieselRepository::new(test_db.pool());

    let campaign = repo
        .create_campaign(&NewCampaign::new(
            "Spring news".to_string(),
            "<p>Hello</p>".to_string(),
        ))
        .unwrap();
    assert!(campaign.sent_at.is_none());

    let sent = repo.mark_campaign_sent(campaign.id).unwrap();
    assert!(sent.sent_at.is_some());

    repo.delete_campaign(campaign.id).unwrap();
    assert!(repo.get_campaign_by_id(campaign.id).unwrap().is_none());
}

#[test]
fn test_settings_and_page_content_upserts() {
    let test_db = common::TestDb::new("test_settings_and_page_content.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.set_setting("site_name", "Brandwerk").unwrap();
    repo.set_setting("site_name", "Brandwerk Studio").unwrap();
    assert_eq!(
        repo.get_setting("site_name").unwrap().unwrap().value,
        "Brandwerk Studio"
    );
    assert_eq!(repo.list_settings().unwrap().len(), 1);

    repo.upsert_page_content(&NewPageContent::new(
        "Home".to_string(),
        "Hero".to_string(),
        "<h1>Hi</h1>".to_string(),
    ))
    .unwrap();
    repo.upsert_page_content(&NewPageContent::new(
        "home".to_string(),
        "hero".to_string(),
        "<h1>Hello</h1>".to_string(),
    ))
    .unwrap();

    let blocks = repo.list_page_contents(Some("home")).unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].body, "<h1>Hello</h1>");

    repo.delete_page_content("home", "hero").unwrap();
    assert!(repo.get_page_content("home", "hero").unwrap().is_none());
}

#[test]
fn test_system_log_and_summary() {
    let test_db = common::TestDb::new("test_system_log_and_summary.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_system_log(&NewSystemLog::info("started", None))
        .unwrap();
    repo.create_system_log(&NewSystemLog::error(
        "boom",
        Some(serde_json::json!({ "detail": 1 })),
    ))
    .unwrap();

    let (total, logs) = repo.list_system_logs(LogListQuery::new()).unwrap();
    assert_eq!(total, 2);
    // newest first
    assert_eq!(logs[0].message, "boom");
    assert!(logs[0].context.is_some());

    let (error_total, _) = repo
        .list_system_logs(LogListQuery::new().level("error".into()))
        .unwrap();
    assert_eq!(error_total, 1);

    repo.create_project(&sample_project("P", true)).unwrap();
    let summary = repo.dashboard_summary().unwrap();
    assert_eq!(summary.projects, 1);
    assert_eq!(summary.unread_messages, 0);

    assert_eq!(repo.clear_system_logs().unwrap(), 2);
    let (total, _) = repo.list_system_logs(LogListQuery::new()).unwrap();
    assert_eq!(total, 0);

    // backups table starts empty
    assert!(repo.list_backups().unwrap().is_empty());
}
