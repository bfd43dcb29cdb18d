use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::project::{NewProject as DomainNewProject, Project as DomainProject};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::projects)]
/// Diesel model for [`crate::domain::project::Project`].
pub struct Project {
    pub id: i32,
    pub title: String,
    pub summary: String,
    pub description: String,
    pub image_url: Option<String>,
    pub active: bool,
    pub sort_order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::projects)]
/// Insertable form of [`Project`].
pub struct NewProject<'a> {
    pub title: &'a str,
    pub summary: &'a str,
    pub description: &'a str,
    pub image_url: Option<&'a str>,
    pub active: bool,
    pub sort_order: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::projects)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating a [`Project`] record.
pub struct UpdateProject<'a> {
    pub title: &'a str,
    pub summary: &'a str,
    pub description: &'a str,
    pub image_url: Option<&'a str>,
    pub active: bool,
    pub sort_order: i32,
    pub updated_at: NaiveDateTime,
}

impl From<Project> for DomainProject {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            title: project.title,
            summary: project.summary,
            description: project.description,
            image_url: project.image_url,
            active: project.active,
            sort_order: project.sort_order,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewProject> for NewProject<'a> {
    fn from(project: &'a DomainNewProject) -> Self {
        Self {
            title: project.title.as_str(),
            summary: project.summary.as_str(),
            description: project.description.as_str(),
            image_url: project.image_url.as_deref(),
            active: project.active,
            sort_order: project.sort_order,
        }
    }
}

impl<'a> From<&'a DomainNewProject> for UpdateProject<'a> {
    fn from(project: &'a DomainNewProject) -> Self {
        Self {
            title: project.title.as_str(),
            summary: project.summary.as_str(),
            description: project.description.as_str(),
            image_url: project.image_url.as_deref(),
            active: project.active,
            sort_order: project.sort_order,
            updated_at: Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_domain_new() -> DomainNewProject {
        DomainNewProject::new(
            "  Relaunch  ".to_string(),
            "Corporate site".to_string(),
            "Full redesign".to_string(),
            Some("   ".to_string()),
            true,
            3,
        )
    }

    #[test]
    fn from_domain_new_creates_newproject() {
        let domain = sample_domain_new();
        let new: NewProject = (&domain).into();
        assert_eq!(new.title, "Relaunch");
        assert_eq!(new.image_url, None);
        assert!(new.active);
        assert_eq!(new.sort_order, 3);
    }

    #[test]
    fn project_into_domain() {
        let now = Utc::now().naive_utc();
        let db_project = Project {
            id: 1,
            title: "t".to_string(),
            summary: "s".to_string(),
            description: "d".to_string(),
            image_url: None,
            active: false,
            sort_order: 0,
            created_at: now,
            updated_at: now,
        };
        let domain: DomainProject = db_project.into();
        assert_eq!(domain.id, 1);
        assert!(!domain.active);
        assert_eq!(domain.created_at, now);
    }
}
