use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::note::NewNote;
use crate::domain::task::NewTask;
use crate::forms::{optional_date, optional_i32};

#[derive(Deserialize, Validate)]
pub struct SaveTaskForm {
    #[serde(default, deserialize_with = "optional_i32")]
    pub id: Option<i32>,
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "optional_date")]
    pub due_on: Option<NaiveDate>,
}

impl SaveTaskForm {
    #[must_use]
    pub fn to_new_task(&self) -> NewTask {
        NewTask::new(
            self.title.clone(),
            self.description.clone(),
            self.status.as_str().into(),
            self.due_on,
        )
    }
}

#[derive(Deserialize, Validate)]
pub struct SaveNoteForm {
    #[serde(default, deserialize_with = "optional_i32")]
    pub id: Option<i32>,
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub body: String,
}

impl SaveNoteForm {
    #[must_use]
    pub fn to_new_note(&self, user_id: i32) -> NewNote {
        NewNote::new(user_id, self.title.clone(), self.body.clone())
    }
}
