use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Note {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub body: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewNote {
    pub user_id: i32,
    pub title: String,
    pub body: String,
}

impl NewNote {
    #[must_use]
    pub fn new(user_id: i32, title: String, body: String) -> Self {
        Self {
            user_id,
            title: title.trim().to_string(),
            body,
        }
    }
}
