//! Public page assembly and the contact flow.
//!
//! List queries degrade to hardcoded fallback records when they fail or
//! return nothing, so the marketing pages always render populated sections.

use serde_json::json;

use crate::defaults;
use crate::domain::contact::{ContactMessage, NewContactMessage};
use crate::domain::content::PageContent;
use crate::domain::faq::FaqItem;
use crate::domain::project::Project;
use crate::domain::service_item::ServiceItem;
use crate::domain::system_log::NewSystemLog;
use crate::domain::testimonial::Testimonial;
use crate::forms::main::ContactForm;
use crate::repository::{
    ContactMessageWriter, FaqReader, PageContentReader, ProjectListQuery, ProjectReader,
    ServiceItemReader, SystemLogWriter, TestimonialReader,
};
use crate::services::ServiceResult;

/// Everything the landing page template needs.
pub struct HomePageData {
    pub contents: Vec<PageContent>,
    pub projects: Vec<Project>,
    pub services: Vec<ServiceItem>,
    pub testimonials: Vec<Testimonial>,
    pub faq_items: Vec<FaqItem>,
}

fn or_fallback<T>(result: Result<Vec<T>, impl std::fmt::Display>, fallback: Vec<T>) -> Vec<T> {
    match result {
        Ok(items) if !items.is_empty() => items,
        Ok(_) => fallback,
        Err(e) => {
            log::error!("Falling back to placeholder records: {e}");
            fallback
        }
    }
}

/// Loads the landing page lists, substituting fallbacks per section.
pub fn load_home_page<R>(repo: &R) -> HomePageData
where
    R: ProjectReader + ServiceItemReader + TestimonialReader + FaqReader + PageContentReader + ?Sized,
{
    let contents = repo.list_page_contents(Some("home")).unwrap_or_else(|e| {
        log::error!("Failed to load page contents: {e}");
        Vec::new()
    });

    let projects = or_fallback(
        repo.list_projects(ProjectListQuery::new().active_only())
            .map(|(_, items)| items),
        defaults::fallback_projects(),
    );

    let services = or_fallback(
        repo.list_service_items(true),
        defaults::fallback_services(),
    );

    let testimonials = or_fallback(
        repo.list_testimonials(true),
        defaults::fallback_testimonials(),
    );

    let faq_items = or_fallback(repo.list_faq_items(true), defaults::fallback_faq());

    HomePageData {
        contents,
        projects,
        services,
        testimonials,
        faq_items,
    }
}

/// Loads a single public project; inactive records are treated as missing.
pub fn load_project<R>(repo: &R, id: i32) -> ServiceResult<Option<Project>>
where
    R: ProjectReader + ?Sized,
{
    let project = repo.get_project_by_id(id)?;
    Ok(project.filter(|p| p.active))
}

/// Loads a single public service item; inactive records are treated as missing.
pub fn load_service_item<R>(repo: &R, id: i32) -> ServiceResult<Option<ServiceItem>>
where
    R: ServiceItemReader + ?Sized,
{
    let item = repo.get_service_item_by_id(id)?;
    Ok(item.filter(|s| s.active))
}

/// Validates, sanitizes and persists a contact form submission. The new
/// message is also recorded in the system log (best effort).
pub fn submit_contact<R>(repo: &R, form: &ContactForm) -> ServiceResult<ContactMessage>
where
    R: ContactMessageWriter + SystemLogWriter + ?Sized,
{
    let new_message = NewContactMessage::new(
        form.name.clone(),
        form.email.clone(),
        form.phone.clone(),
        form.subject.clone(),
        form.message.clone(),
    )?;

    let message = repo.create_message(&new_message)?;

    if let Err(e) = repo.create_system_log(&NewSystemLog::info(
        "contact message received",
        Some(json!({ "message_id": message.id, "email": message.email })),
    )) {
        log::error!("Failed to record contact message in system log: {e}");
    }

    Ok(message)
}

#[cfg(all(test, feature = "test-mocks"))]
mod mock_tests {
    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn page_mock() -> MockRepository {
        let mut repo = MockRepository::new();
        repo.expect_list_page_contents().returning(|_| Ok(vec![]));
        repo
    }

    #[test]
    fn empty_lists_fall_back_to_placeholders() {
        let mut repo = page_mock();
        repo.expect_list_projects().returning(|_| Ok((0, vec![])));
        repo.expect_list_service_items().returning(|_| Ok(vec![]));
        repo.expect_list_testimonials().returning(|_| Ok(vec![]));
        repo.expect_list_faq_items().returning(|_| Ok(vec![]));

        let data = load_home_page(&repo);
        assert!(!data.projects.is_empty());
        assert!(!data.services.is_empty());
        assert!(!data.testimonials.is_empty());
        assert!(!data.faq_items.is_empty());
    }

    #[test]
    fn query_errors_fall_back_to_placeholders() {
        let mut repo = page_mock();
        repo.expect_list_projects()
            .returning(|_| Err(RepositoryError::DatabaseError("boom".into())));
        repo.expect_list_service_items()
            .returning(|_| Err(RepositoryError::DatabaseError("boom".into())));
        repo.expect_list_testimonials()
            .returning(|_| Err(RepositoryError::DatabaseError("boom".into())));
        repo.expect_list_faq_items()
            .returning(|_| Err(RepositoryError::DatabaseError("boom".into())));

        let data = load_home_page(&repo);
        assert!(!data.projects.is_empty());
        assert!(!data.services.is_empty());
    }

    #[test]
    fn inactive_project_reads_as_missing() {
        let mut repo = MockRepository::new();
        repo.expect_get_project_by_id().returning(|id| {
            Ok(Some(Project {
                id,
                active: false,
                ..Project::default()
            }))
        });

        assert!(load_project(&repo, 5).unwrap().is_none());
    }
}
