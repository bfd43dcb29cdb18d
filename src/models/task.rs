use chrono::{NaiveDate, NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::task::{NewTask as DomainNewTask, Task as DomainTask};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::tasks)]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub due_on: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::tasks)]
pub struct NewTask<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub status: String,
    pub due_on: Option<NaiveDate>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::tasks)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateTask<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub status: String,
    pub due_on: Option<NaiveDate>,
    pub updated_at: NaiveDateTime,
}

impl From<Task> for DomainTask {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            status: task.status.as_str().into(),
            due_on: task.due_on,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewTask> for NewTask<'a> {
    fn from(task: &'a DomainNewTask) -> Self {
        Self {
            title: task.title.as_str(),
            description: task.description.as_deref(),
            status: task.status.to_string(),
            due_on: task.due_on,
        }
    }
}

impl<'a> From<&'a DomainNewTask> for UpdateTask<'a> {
    fn from(task: &'a DomainNewTask) -> Self {
        Self {
            title: task.title.as_str(),
            description: task.description.as_deref(),
            status: task.status.to_string(),
            due_on: task.due_on,
            updated_at: Utc::now().naive_utc(),
        }
    }
}
