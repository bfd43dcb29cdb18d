use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ServiceItem {
    pub id: i32,
    pub title: String,
    pub summary: String,
    pub description: String,
    pub icon: Option<String>,
    pub price_from_cents: Option<i64>,
    pub active: bool,
    pub sort_order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewServiceItem {
    pub title: String,
    pub summary: String,
    pub description: String,
    pub icon: Option<String>,
    pub price_from_cents: Option<i64>,
    pub active: bool,
    pub sort_order: i32,
}

impl NewServiceItem {
    #[must_use]
    pub fn new(
        title: String,
        summary: String,
        description: String,
        icon: Option<String>,
        price_from_cents: Option<i64>,
        active: bool,
        sort_order: i32,
    ) -> Self {
        Self {
            title: title.trim().to_string(),
            summary: summary.trim().to_string(),
            description,
            icon: icon.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            price_from_cents,
            active,
            sort_order,
        }
    }
}

pub type UpdateServiceItem = NewServiceItem;
