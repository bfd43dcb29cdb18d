use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
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

#[derive(Clone, Debug, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub summary: String,
    pub description: String,
    pub image_url: Option<String>,
    pub active: bool,
    pub sort_order: i32,
}

impl NewProject {
    #[must_use]
    pub fn new(
        title: String,
        summary: String,
        description: String,
        image_url: Option<String>,
        active: bool,
        sort_order: i32,
    ) -> Self {
        Self {
            title: title.trim().to_string(),
            summary: summary.trim().to_string(),
            description,
            image_url: image_url
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            active,
            sort_order,
        }
    }
}

pub type UpdateProject = NewProject;
