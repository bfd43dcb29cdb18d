//! Editable site settings and per-page content blocks.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SiteSetting {
    pub key: String,
    pub value: String,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PageContent {
    pub page: String,
    pub section: String,
    pub body: String,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewPageContent {
    pub page: String,
    pub section: String,
    pub body: String,
}

impl NewPageContent {
    #[must_use]
    pub fn new(page: String, section: String, body: String) -> Self {
        Self {
            page: page.trim().to_lowercase(),
            section: section.trim().to_lowercase(),
            body,
        }
    }
}
