//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::contact::{ContactMessage, NewContactMessage};
use crate::domain::content::PageContent;
use crate::domain::faq::FaqItem;
use crate::domain::project::{NewProject, Project, UpdateProject};
use crate::domain::service_item::ServiceItem;
use crate::domain::system_log::{NewSystemLog, SystemLog};
use crate::domain::testimonial::Testimonial;
use crate::domain::user::{NewUser, Role, User};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ContactMessageWriter, FaqReader, PageContentReader, ProjectListQuery, ProjectReader,
    ProjectWriter, ServiceItemReader, SystemLogWriter, TestimonialReader, UserReader, UserWriter,
};

mock! {
    pub Repository {}

    impl UserReader for Repository {
        fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
        fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
        fn count_users(&self) -> RepositoryResult<usize>;
        fn list_user_roles(&self, user_id: i32) -> RepositoryResult<Vec<String>>;
        fn list_users_with_roles(&self) -> RepositoryResult<Vec<(User, Vec<Role>)>>;
    }

    impl UserWriter for Repository {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
        fn update_user_name(&self, user_id: i32, name: &str) -> RepositoryResult<User>;
        fn update_user_password(&self, user_id: i32, password_hash: &str) -> RepositoryResult<()>;
        fn assign_role(&self, user_id: i32, role: &str) -> RepositoryResult<()>;
        fn set_user_roles(&self, user_id: i32, roles: &[String]) -> RepositoryResult<usize>;
    }

    impl ProjectReader for Repository {
        fn get_project_by_id(&self, id: i32) -> RepositoryResult<Option<Project>>;
        fn list_projects(&self, query: ProjectListQuery) -> RepositoryResult<(usize, Vec<Project>)>;
    }

    impl ProjectWriter for Repository {
        fn create_project(&self, new_project: &NewProject) -> RepositoryResult<Project>;
        fn update_project(&self, id: i32, updates: &UpdateProject) -> RepositoryResult<Project>;
        fn delete_project(&self, id: i32) -> RepositoryResult<()>;
        fn set_project_active(&self, id: i32, active: bool) -> RepositoryResult<Project>;
    }

    impl ServiceItemReader for Repository {
        fn get_service_item_by_id(&self, id: i32) -> RepositoryResult<Option<ServiceItem>>;
        fn list_service_items(&self, active_only: bool) -> RepositoryResult<Vec<ServiceItem>>;
    }

    impl TestimonialReader for Repository {
        fn get_testimonial_by_id(&self, id: i32) -> RepositoryResult<Option<Testimonial>>;
        fn list_testimonials(&self, active_only: bool) -> RepositoryResult<Vec<Testimonial>>;
    }

    impl FaqReader for Repository {
        fn get_faq_item_by_id(&self, id: i32) -> RepositoryResult<Option<FaqItem>>;
        fn list_faq_items(&self, active_only: bool) -> RepositoryResult<Vec<FaqItem>>;
    }

    impl PageContentReader for Repository {
        fn get_page_content(&self, page: &str, section: &str) -> RepositoryResult<Option<PageContent>>;
        fn list_page_contents<'a>(&self, page: Option<&'a str>) -> RepositoryResult<Vec<PageContent>>;
    }

    impl ContactMessageWriter for Repository {
        fn create_message(&self, new_message: &NewContactMessage) -> RepositoryResult<ContactMessage>;
        fn mark_message_read(&self, id: i32) -> RepositoryResult<ContactMessage>;
        fn delete_message(&self, id: i32) -> RepositoryResult<()>;
    }

    impl SystemLogWriter for Repository {
        fn create_system_log(&self, new_log: &NewSystemLog) -> RepositoryResult<SystemLog>;
        fn clear_system_logs(&self) -> RepositoryResult<usize>;
    }
}
