use crate::db::{DbConnection, DbPool};
use crate::domain::billing::{
    Invoice, InvoiceStatus, NewInvoice, NewTransaction, Transaction, TransactionKind,
    UpdateInvoice, UpdateTransaction,
};
use crate::domain::contact::{ContactMessage, NewContactMessage};
use crate::domain::content::{NewPageContent, PageContent, SiteSetting};
use crate::domain::faq::{FaqItem, NewFaqItem, UpdateFaqItem};
use crate::domain::newsletter::{
    Campaign, NewCampaign, NewSubscriber, Subscriber, UpdateCampaign,
};
use crate::domain::note::{NewNote, Note};
use crate::domain::project::{NewProject, Project, UpdateProject};
use crate::domain::service_item::{NewServiceItem, ServiceItem, UpdateServiceItem};
use crate::domain::storage::{Backup, NewBackup, NewStoredFile, StoredFile};
use crate::domain::system_log::{LogLevel, NewSystemLog, SystemLog};
use crate::domain::task::{NewTask, Task, TaskStatus, UpdateTask};
use crate::domain::testimonial::{NewTestimonial, Testimonial, UpdateTestimonial};
use crate::domain::user::{NewUser, Role, User};
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod admin;
pub mod billing;
pub mod catalog;
pub mod contact;
pub mod content;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod newsletter;
pub mod storage;
pub mod tasks;
pub mod user;

/// Shared Diesel-backed repository handed to routes as application data.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> Result<DbConnection, RepositoryError> {
        self.pool.get().map_err(Into::into)
    }
}

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    pub(crate) fn limit_offset(&self) -> (i64, i64) {
        let page = self.page.max(1) as i64;
        let per_page = self.per_page as i64;
        (per_page, (page - 1) * per_page)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectListQuery {
    pub active_only: bool,
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl ProjectListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_only(mut self) -> Self {
        self.active_only = true;
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct MessageListQuery {
    pub unread_only: bool,
    pub pagination: Option<Pagination>,
}

impl MessageListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unread_only(mut self) -> Self {
        self.unread_only = true;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct InvoiceListQuery {
    pub status: Option<InvoiceStatus>,
    pub pagination: Option<Pagination>,
}

impl InvoiceListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: InvoiceStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransactionListQuery {
    pub kind: Option<TransactionKind>,
    pub pagination: Option<Pagination>,
}

impl TransactionListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubscriberListQuery {
    pub subscribed_only: bool,
    pub pagination: Option<Pagination>,
}

impl SubscriberListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribed_only(mut self) -> Self {
        self.subscribed_only = true;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct LogListQuery {
    pub level: Option<LogLevel>,
    pub pagination: Option<Pagination>,
}

impl LogListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Counters shown on the back-office dashboard.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct DashboardSummary {
    pub projects: i64,
    pub service_items: i64,
    pub unread_messages: i64,
    pub open_invoices: i64,
    pub open_tasks: i64,
    pub subscribers: i64,
    pub stored_files: i64,
    pub backups: i64,
}

pub trait UserReader {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
    fn count_users(&self) -> RepositoryResult<usize>;
    fn list_user_roles(&self, user_id: i32) -> RepositoryResult<Vec<String>>;
    fn list_users_with_roles(&self) -> RepositoryResult<Vec<(User, Vec<Role>)>>;
}

pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    fn update_user_name(&self, user_id: i32, name: &str) -> RepositoryResult<User>;
    fn update_user_password(&self, user_id: i32, password_hash: &str) -> RepositoryResult<()>;
    fn assign_role(&self, user_id: i32, role: &str) -> RepositoryResult<()>;
    fn set_user_roles(&self, user_id: i32, roles: &[String]) -> RepositoryResult<usize>;
}

pub trait ProjectReader {
    fn get_project_by_id(&self, id: i32) -> RepositoryResult<Option<Project>>;
    fn list_projects(&self, query: ProjectListQuery) -> RepositoryResult<(usize, Vec<Project>)>;
}

pub trait ProjectWriter {
    fn create_project(&self, new_project: &NewProject) -> RepositoryResult<Project>;
    fn update_project(&self, id: i32, updates: &UpdateProject) -> RepositoryResult<Project>;
    fn delete_project(&self, id: i32) -> RepositoryResult<()>;
    fn set_project_active(&self, id: i32, active: bool) -> RepositoryResult<Project>;
}

pub trait ServiceItemReader {
    fn get_service_item_by_id(&self, id: i32) -> RepositoryResult<Option<ServiceItem>>;
    fn list_service_items(&self, active_only: bool) -> RepositoryResult<Vec<ServiceItem>>;
}

pub trait ServiceItemWriter {
    fn create_service_item(&self, new_item: &NewServiceItem) -> RepositoryResult<ServiceItem>;
    fn update_service_item(
        &self,
        id: i32,
        updates: &UpdateServiceItem,
    ) -> RepositoryResult<ServiceItem>;
    fn delete_service_item(&self, id: i32) -> RepositoryResult<()>;
    fn set_service_item_active(&self, id: i32, active: bool) -> RepositoryResult<ServiceItem>;
}

pub trait TestimonialReader {
    fn get_testimonial_by_id(&self, id: i32) -> RepositoryResult<Option<Testimonial>>;
    fn list_testimonials(&self, active_only: bool) -> RepositoryResult<Vec<Testimonial>>;
}

pub trait TestimonialWriter {
    fn create_testimonial(&self, new_testimonial: &NewTestimonial)
    -> RepositoryResult<Testimonial>;
    fn update_testimonial(
        &self,
        id: i32,
        updates: &UpdateTestimonial,
    ) -> RepositoryResult<Testimonial>;
    fn delete_testimonial(&self, id: i32) -> RepositoryResult<()>;
}

pub trait FaqReader {
    fn get_faq_item_by_id(&self, id: i32) -> RepositoryResult<Option<FaqItem>>;
    fn list_faq_items(&self, active_only: bool) -> RepositoryResult<Vec<FaqItem>>;
}

pub trait FaqWriter {
    fn create_faq_item(&self, new_item: &NewFaqItem) -> RepositoryResult<FaqItem>;
    fn update_faq_item(&self, id: i32, updates: &UpdateFaqItem) -> RepositoryResult<FaqItem>;
    fn delete_faq_item(&self, id: i32) -> RepositoryResult<()>;
}

pub trait ContactMessageReader {
    fn get_message_by_id(&self, id: i32) -> RepositoryResult<Option<ContactMessage>>;
    fn list_messages(
        &self,
        query: MessageListQuery,
    ) -> RepositoryResult<(usize, Vec<ContactMessage>)>;
}

pub trait ContactMessageWriter {
    fn create_message(&self, new_message: &NewContactMessage) -> RepositoryResult<ContactMessage>;
    fn mark_message_read(&self, id: i32) -> RepositoryResult<ContactMessage>;
    fn delete_message(&self, id: i32) -> RepositoryResult<()>;
}

pub trait InvoiceReader {
    fn get_invoice_by_id(&self, id: i32) -> RepositoryResult<Option<Invoice>>;
    fn list_invoices(&self, query: InvoiceListQuery) -> RepositoryResult<(usize, Vec<Invoice>)>;
}

pub trait InvoiceWriter {
    fn create_invoice(&self, new_invoice: &NewInvoice) -> RepositoryResult<Invoice>;
    fn update_invoice(&self, id: i32, updates: &UpdateInvoice) -> RepositoryResult<Invoice>;
    fn delete_invoice(&self, id: i32) -> RepositoryResult<()>;
    fn mark_invoice_paid(&self, id: i32) -> RepositoryResult<Invoice>;
}

pub trait TransactionReader {
    fn get_transaction_by_id(&self, id: i32) -> RepositoryResult<Option<Transaction>>;
    fn list_transactions(
        &self,
        query: TransactionListQuery,
    ) -> RepositoryResult<(usize, Vec<Transaction>)>;
}

pub trait TransactionWriter {
    fn create_transaction(&self, new_tx: &NewTransaction) -> RepositoryResult<Transaction>;
    fn update_transaction(&self, id: i32, updates: &UpdateTransaction)
    -> RepositoryResult<Transaction>;
    fn delete_transaction(&self, id: i32) -> RepositoryResult<()>;
}

pub trait TaskReader {
    fn get_task_by_id(&self, id: i32) -> RepositoryResult<Option<Task>>;
    fn list_tasks(&self, status: Option<TaskStatus>) -> RepositoryResult<Vec<Task>>;
}

pub trait TaskWriter {
    fn create_task(&self, new_task: &NewTask) -> RepositoryResult<Task>;
    fn update_task(&self, id: i32, updates: &UpdateTask) -> RepositoryResult<Task>;
    fn delete_task(&self, id: i32) -> RepositoryResult<()>;
    fn set_task_status(&self, id: i32, status: TaskStatus) -> RepositoryResult<Task>;
}

pub trait NoteReader {
    fn get_note_by_id(&self, id: i32) -> RepositoryResult<Option<Note>>;
    fn list_notes(&self, user_id: i32) -> RepositoryResult<Vec<Note>>;
}

pub trait NoteWriter {
    fn create_note(&self, new_note: &NewNote) -> RepositoryResult<Note>;
    fn update_note(&self, id: i32, title: &str, body: &str) -> RepositoryResult<Note>;
    fn delete_note(&self, id: i32) -> RepositoryResult<()>;
}

pub trait SubscriberReader {
    fn get_subscriber_by_token(&self, token: &str) -> RepositoryResult<Option<Subscriber>>;
    fn list_subscribers(
        &self,
        query: SubscriberListQuery,
    ) -> RepositoryResult<(usize, Vec<Subscriber>)>;
    fn list_subscribed_emails(&self) -> RepositoryResult<Vec<String>>;
}

pub trait SubscriberWriter {
    /// Insert or re-subscribe; a fresh token replaces the stored one.
    fn upsert_subscriber(&self, new_subscriber: &NewSubscriber) -> RepositoryResult<Subscriber>;
    fn import_subscribers(&self, new_subscribers: &[NewSubscriber]) -> RepositoryResult<usize>;
    fn set_subscribed(&self, token: &str, subscribed: bool) -> RepositoryResult<Subscriber>;
    fn delete_subscriber(&self, id: i32) -> RepositoryResult<()>;
}

pub trait CampaignReader {
    fn get_campaign_by_id(&self, id: i32) -> RepositoryResult<Option<Campaign>>;
    fn list_campaigns(&self) -> RepositoryResult<Vec<Campaign>>;
}

pub trait CampaignWriter {
    fn create_campaign(&self, new_campaign: &NewCampaign) -> RepositoryResult<Campaign>;
    fn update_campaign(&self, id: i32, updates: &UpdateCampaign) -> RepositoryResult<Campaign>;
    fn delete_campaign(&self, id: i32) -> RepositoryResult<()>;
    fn mark_campaign_sent(&self, id: i32) -> RepositoryResult<Campaign>;
}

pub trait StoredFileReader {
    fn get_file_by_id(&self, id: i32) -> RepositoryResult<Option<StoredFile>>;
    fn list_files(&self) -> RepositoryResult<Vec<StoredFile>>;
}

pub trait StoredFileWriter {
    fn create_file(&self, new_file: &NewStoredFile) -> RepositoryResult<StoredFile>;
    fn delete_file(&self, id: i32) -> RepositoryResult<()>;
}

pub trait BackupReader {
    fn get_backup_by_id(&self, id: i32) -> RepositoryResult<Option<Backup>>;
    fn list_backups(&self) -> RepositoryResult<Vec<Backup>>;
}

pub trait BackupWriter {
    fn create_backup(&self, new_backup: &NewBackup) -> RepositoryResult<Backup>;
    fn delete_backup(&self, id: i32) -> RepositoryResult<()>;
}

pub trait SystemLogReader {
    fn list_system_logs(&self, query: LogListQuery) -> RepositoryResult<(usize, Vec<SystemLog>)>;
}

pub trait SystemLogWriter {
    fn create_system_log(&self, new_log: &NewSystemLog) -> RepositoryResult<SystemLog>;
    fn clear_system_logs(&self) -> RepositoryResult<usize>;
}

pub trait SettingReader {
    fn get_setting(&self, key: &str) -> RepositoryResult<Option<SiteSetting>>;
    fn list_settings(&self) -> RepositoryResult<Vec<SiteSetting>>;
}

pub trait SettingWriter {
    fn set_setting(&self, key: &str, value: &str) -> RepositoryResult<SiteSetting>;
}

pub trait PageContentReader {
    fn get_page_content(&self, page: &str, section: &str)
    -> RepositoryResult<Option<PageContent>>;
    fn list_page_contents(&self, page: Option<&str>) -> RepositoryResult<Vec<PageContent>>;
}

pub trait PageContentWriter {
    fn upsert_page_content(&self, content: &NewPageContent) -> RepositoryResult<PageContent>;
    fn delete_page_content(&self, page: &str, section: &str) -> RepositoryResult<()>;
}

pub trait SummaryReader {
    fn dashboard_summary(&self) -> RepositoryResult<DashboardSummary>;
}
